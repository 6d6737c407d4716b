//! Rendering for the data pool manager: generation form, stored pool list
//! and a preview of the selected pool.

use crate::api::csv_url;
use crate::components::data_pools::helpers::PREVIEW_ROWS;
use crate::components::data_pools::state::ColumnDraft;
use crate::components::data_pools::{DataPoolsComponent, Msg};
use common::model::data_pool::DataPool;
use num_format::{Locale, ToFormattedString};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn view(state: &DataPoolsComponent, ctx: &Context<DataPoolsComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="data-pools">
            <h1>{"DataPool Generator"}</h1>
            { error_banner(state) }
            { generation_form(state, link) }
            { pool_list(state, link) }
            { pool_detail(state, link) }
        </div>
    }
}

fn error_banner(state: &DataPoolsComponent) -> Html {
    match &state.error {
        Some(message) => html! { <div class="error">{ message.clone() }</div> },
        None => html! {},
    }
}

fn generation_form(state: &DataPoolsComponent, link: &Scope<DataPoolsComponent>) -> Html {
    html! {
        <section class="generate">
            <h2>{"Generate"}</h2>
            <div class="fields">
                <label>{"Name"}
                    <input type="text" value={state.name.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetName(input_value(&e)))} />
                </label>
                <label>{"Rows"}
                    <input type="number" min="1" value={state.count.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetCount(input_value(&e)))} />
                </label>
                <label>{"Seed"}
                    <input type="text" placeholder="random" value={state.seed.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetSeed(input_value(&e)))} />
                </label>
            </div>
            <table class="columns">
                <thead>
                    <tr><th>{"Kind"}</th><th>{"Title"}</th><th>{"Parameters"}</th><th></th></tr>
                </thead>
                <tbody>
                    { for state.columns.iter().enumerate().map(|(index, column)| column_row(state, link, index, column)) }
                </tbody>
            </table>
            <div class="actions">
                <button onclick={link.callback(|_| Msg::AddColumn)}>{"Add column"}</button>
                <button class="primary" disabled={state.busy || state.columns.is_empty()}
                    onclick={link.callback(|_| Msg::Generate)}>
                    { if state.busy { "Generating..." } else { "Generate" } }
                </button>
            </div>
        </section>
    }
}

fn column_row(
    state: &DataPoolsComponent,
    link: &Scope<DataPoolsComponent>,
    index: usize,
    column: &ColumnDraft,
) -> Html {
    let hint = state
        .catalogue
        .iter()
        .find(|info| info.kind == column.kind)
        .map(|info| {
            info.params
                .iter()
                .map(|param| param.name.clone())
                .collect::<Vec<_>>()
                .join("; ")
        })
        .unwrap_or_default();

    html! {
        <tr>
            <td>
                <select onchange={link.callback(move |e: Event| {
                    Msg::SetColumnKind(index, e.target_unchecked_into::<HtmlSelectElement>().value())
                })}>
                    { for state.catalogue.iter().map(|info| html! {
                        <option value={info.kind.clone()} selected={info.kind == column.kind}>
                            { info.kind.clone() }
                        </option>
                    }) }
                </select>
            </td>
            <td>
                <input type="text" placeholder={column.kind.clone()} value={column.name.clone()}
                    oninput={link.callback(move |e: InputEvent| Msg::SetColumnName(index, input_value(&e)))} />
            </td>
            <td>
                <input type="text" placeholder={hint} value={column.params.clone()}
                    oninput={link.callback(move |e: InputEvent| Msg::SetColumnParams(index, input_value(&e)))} />
            </td>
            <td>
                <button onclick={link.callback(move |_| Msg::RemoveColumn(index))}>{"Remove"}</button>
            </td>
        </tr>
    }
}

fn pool_list(state: &DataPoolsComponent, link: &Scope<DataPoolsComponent>) -> Html {
    html! {
        <section class="pools">
            <h2>{"Data pools"}</h2>
            if state.pools.is_empty() {
                <p>{"No data pools yet."}</p>
            } else {
                <table>
                    <thead>
                        <tr><th>{"Name"}</th><th>{"Columns"}</th><th>{"Rows"}</th><th></th></tr>
                    </thead>
                    <tbody>
                        { for state.pools.iter().map(|pool| pool_row(pool, link)) }
                    </tbody>
                </table>
            }
        </section>
    }
}

fn pool_row(pool: &DataPool, link: &Scope<DataPoolsComponent>) -> Html {
    let id = pool.id.clone().unwrap_or_default();
    let select_id = id.clone();
    let delete_id = id.clone();

    html! {
        <tr key={id.clone()}>
            <td>{ pool.name.clone() }</td>
            <td>{ pool.headers().join(", ") }</td>
            <td>{ pool.rows.len().to_formatted_string(&Locale::en) }</td>
            <td>
                <button onclick={link.callback(move |_| Msg::Select(select_id.clone()))}>{"View"}</button>
                <a href={csv_url(&id)}>{"CSV"}</a>
                <button onclick={link.callback(move |_| Msg::Delete(delete_id.clone()))}>{"Delete"}</button>
            </td>
        </tr>
    }
}

fn pool_detail(state: &DataPoolsComponent, link: &Scope<DataPoolsComponent>) -> Html {
    let Some(pool) = &state.selected else {
        return html! {};
    };

    html! {
        <section class="detail">
            <h2>{ pool.name.clone() }</h2>
            <p>
                { format!("{} rows", pool.rows.len().to_formatted_string(&Locale::en)) }
                if pool.rows.len() > PREVIEW_ROWS {
                    { format!(", showing the first {}", PREVIEW_ROWS) }
                }
            </p>
            <table>
                <thead>
                    <tr>{ for pool.headers().into_iter().map(|title| html! { <th>{ title.to_string() }</th> }) }</tr>
                </thead>
                <tbody>
                    { for pool.rows.iter().take(PREVIEW_ROWS).map(|row| html! {
                        <tr>{ for row.iter().map(|value| html! { <td>{ value.clone() }</td> }) }</tr>
                    }) }
                </tbody>
            </table>
            <button onclick={link.callback(|_| Msg::CloseDetail)}>{"Close"}</button>
        </section>
    }
}
