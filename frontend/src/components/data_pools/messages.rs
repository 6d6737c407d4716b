use common::model::data_pool::DataPool;
use common::model::data_type::DataTypeInfo;

#[derive(Clone)]
pub enum Msg {
    LoadPools,
    PoolsLoaded(Vec<DataPool>),
    LoadCatalogue,
    CatalogueLoaded(Vec<DataTypeInfo>),
    Select(String),
    Selected(DataPool),
    CloseDetail,
    SetName(String),
    SetCount(String),
    SetSeed(String),
    AddColumn,
    RemoveColumn(usize),
    SetColumnKind(usize, String),
    SetColumnName(usize, String),
    SetColumnParams(usize, String),
    Generate,
    Generated(DataPool),
    Delete(String),
    Deleted(String),
    Failed(String),
}
