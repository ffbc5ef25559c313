pub mod error;
pub mod scripted;

pub use error::HostError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worksheet {
    pub name: String,
}

impl Worksheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataValue {
    pub value: String,
    pub formatted_value: Option<String>,
}

impl DataValue {
    /// Formatted value when the host supplied a non-empty one, raw value otherwise.
    pub fn display(&self) -> &str {
        match self.formatted_value.as_deref() {
            Some(formatted) if !formatted.is_empty() => formatted,
            _ => &self.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataTable {
    pub rows: Vec<Vec<DataValue>>,
}

impl DataTable {
    pub fn first_cell(&self) -> Option<&DataValue> {
        self.rows.first().and_then(|row| row.first())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryDataOptions {
    pub ignore_selection: bool,
    pub max_rows: u32,
}

impl SummaryDataOptions {
    pub fn single_cell_ignoring_selection() -> Self {
        Self {
            ignore_selection: true,
            max_rows: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub current_value: DataValue,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current_value: DataValue {
                value: value.into(),
                formatted_value: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostEnvironment {
    pub display_name: Option<String>,
    pub unique_user_id: Option<String>,
}

pub trait HostClient {
    fn is_present(&self) -> bool;
    fn initialize(&self) -> Result<(), HostError>;
    fn dashboard_name(&self) -> Result<Option<String>, HostError>;
    fn worksheets(&self) -> Result<Vec<Worksheet>, HostError>;
    fn summary_data(
        &self,
        worksheet: &str,
        options: SummaryDataOptions,
    ) -> Result<DataTable, HostError>;
    fn parameters(&self) -> Result<Vec<Parameter>, HostError>;
    fn environment(&self) -> Result<HostEnvironment, HostError>;
}
