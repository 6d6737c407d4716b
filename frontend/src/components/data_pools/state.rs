//! Component state for the data pool manager.

use common::model::data_pool::DataPool;
use common::model::data_type::DataTypeInfo;

/// One column of the generation form, kept as raw text until submitted.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnDraft {
    pub kind: String,
    pub name: String,
    /// `key=value` pairs separated by `;`, e.g. `min=1; max=6`.
    pub params: String,
}

impl ColumnDraft {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            name: String::new(),
            params: String::new(),
        }
    }
}

pub struct DataPoolsComponent {
    /// Stored pools as last fetched from the server.
    pub pools: Vec<DataPool>,

    /// Supported kinds, for the column pickers.
    pub catalogue: Vec<DataTypeInfo>,

    /// Pool shown in the preview panel.
    pub selected: Option<DataPool>,

    pub name: String,
    pub count: String,
    pub seed: String,
    pub columns: Vec<ColumnDraft>,

    /// A generation request is in flight.
    pub busy: bool,

    /// Last error reported by the server or by form validation.
    pub error: Option<String>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl DataPoolsComponent {
    pub fn new() -> Self {
        Self {
            pools: Vec::new(),
            catalogue: Vec::new(),
            selected: None,
            name: String::new(),
            count: "10".to_string(),
            seed: String::new(),
            columns: vec![ColumnDraft::new("name"), ColumnDraft::new("email")],
            busy: false,
            error: None,
            loaded: false,
        }
    }
}
