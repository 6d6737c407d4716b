//! Message handling for the data pool manager.
//!
//! Network calls run in `spawn_local` and report back through the component
//! link with a follow-up message, the same pattern for every endpoint.

use crate::api;
use crate::components::data_pools::helpers::build_request;
use crate::components::data_pools::state::ColumnDraft;
use crate::components::data_pools::{DataPoolsComponent, Msg};
use yew::platform::spawn_local;
use yew::prelude::*;

pub fn update(state: &mut DataPoolsComponent, ctx: &Context<DataPoolsComponent>, msg: Msg) -> bool {
    match msg {
        Msg::LoadPools => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_pools().await {
                    Ok(pools) => link.send_message(Msg::PoolsLoaded(pools)),
                    Err(e) => link.send_message(Msg::Failed(e)),
                }
            });
            false
        }
        Msg::PoolsLoaded(pools) => {
            state.pools = pools;
            true
        }
        Msg::LoadCatalogue => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_catalogue().await {
                    Ok(catalogue) => link.send_message(Msg::CatalogueLoaded(catalogue)),
                    Err(e) => link.send_message(Msg::Failed(e)),
                }
            });
            false
        }
        Msg::CatalogueLoaded(catalogue) => {
            state.catalogue = catalogue;
            true
        }
        Msg::Select(id) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_pool(&id).await {
                    Ok(pool) => link.send_message(Msg::Selected(pool)),
                    Err(e) => link.send_message(Msg::Failed(e)),
                }
            });
            false
        }
        Msg::Selected(pool) => {
            state.selected = Some(pool);
            true
        }
        Msg::CloseDetail => {
            state.selected = None;
            true
        }
        Msg::SetName(name) => {
            state.name = name;
            false
        }
        Msg::SetCount(count) => {
            state.count = count;
            false
        }
        Msg::SetSeed(seed) => {
            state.seed = seed;
            false
        }
        Msg::AddColumn => {
            let kind = state
                .catalogue
                .first()
                .map(|info| info.kind.clone())
                .unwrap_or_else(|| "name".to_string());
            state.columns.push(ColumnDraft::new(&kind));
            true
        }
        Msg::RemoveColumn(index) => {
            if index < state.columns.len() {
                state.columns.remove(index);
            }
            true
        }
        Msg::SetColumnKind(index, kind) => {
            if let Some(column) = state.columns.get_mut(index) {
                column.kind = kind;
            }
            true
        }
        Msg::SetColumnName(index, name) => {
            if let Some(column) = state.columns.get_mut(index) {
                column.name = name;
            }
            false
        }
        Msg::SetColumnParams(index, params) => {
            if let Some(column) = state.columns.get_mut(index) {
                column.params = params;
            }
            false
        }
        Msg::Generate => {
            match build_request(&state.name, &state.count, &state.seed, &state.columns) {
                Ok(request) => {
                    state.busy = true;
                    state.error = None;
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match api::generate(&request).await {
                            Ok(pool) => link.send_message(Msg::Generated(pool)),
                            Err(e) => link.send_message(Msg::Failed(e)),
                        }
                    });
                }
                Err(e) => state.error = Some(e),
            }
            true
        }
        Msg::Generated(pool) => {
            state.busy = false;
            state.selected = Some(pool);
            ctx.link().send_message(Msg::LoadPools);
            true
        }
        Msg::Delete(id) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::delete(&id).await {
                    Ok(()) => link.send_message(Msg::Deleted(id)),
                    Err(e) => link.send_message(Msg::Failed(e)),
                }
            });
            false
        }
        Msg::Deleted(id) => {
            state.pools.retain(|pool| pool.id.as_deref() != Some(id.as_str()));
            if state
                .selected
                .as_ref()
                .is_some_and(|pool| pool.id.as_deref() == Some(id.as_str()))
            {
                state.selected = None;
            }
            true
        }
        Msg::Failed(e) => {
            gloo_console::error!(e.clone());
            state.busy = false;
            state.error = Some(e);
            true
        }
    }
}
