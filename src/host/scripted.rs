use super::{
    DataTable, DataValue, HostClient, HostEnvironment, HostError, Parameter, SummaryDataOptions,
    Worksheet,
};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HostCall {
    Initialize,
    DashboardName,
    Worksheets,
    SummaryData,
    Parameters,
    Environment,
}

impl HostCall {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::DashboardName => "dashboard_name",
            Self::Worksheets => "worksheets",
            Self::SummaryData => "summary_data",
            Self::Parameters => "parameters",
            Self::Environment => "environment",
        }
    }
}

#[derive(Debug)]
pub struct ScriptedHost {
    appears_after_probes: Option<u32>,
    probes: Cell<u32>,
    init_rejection: Option<String>,
    init_calls: Cell<u32>,
    dashboard_name: Option<String>,
    worksheets: Vec<Worksheet>,
    sheet_data: BTreeMap<String, DataTable>,
    parameters: Vec<Parameter>,
    environment: HostEnvironment,
    failures: BTreeMap<HostCall, String>,
    summary_requests: RefCell<Vec<(String, SummaryDataOptions)>>,
    environment_reads: Cell<u32>,
    parameter_reads: Cell<u32>,
}

impl Default for ScriptedHost {
    fn default() -> Self {
        Self {
            appears_after_probes: Some(0),
            probes: Cell::new(0),
            init_rejection: None,
            init_calls: Cell::new(0),
            dashboard_name: None,
            worksheets: Vec::new(),
            sheet_data: BTreeMap::new(),
            parameters: Vec::new(),
            environment: HostEnvironment::default(),
            failures: BTreeMap::new(),
            summary_requests: RefCell::new(Vec::new()),
            environment_reads: Cell::new(0),
            parameter_reads: Cell::new(0),
        }
    }
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn never_present(mut self) -> Self {
        self.appears_after_probes = None;
        self
    }

    pub fn present_after(mut self, probes: u32) -> Self {
        self.appears_after_probes = Some(probes);
        self
    }

    pub fn reject_initialize(mut self, reason: &str) -> Self {
        self.init_rejection = Some(reason.to_string());
        self
    }

    pub fn with_dashboard(mut self, name: &str) -> Self {
        self.dashboard_name = Some(name.to_string());
        self
    }

    pub fn with_worksheet(mut self, name: &str) -> Self {
        self.worksheets.push(Worksheet::new(name));
        self
    }

    pub fn with_identity_sheet(
        mut self,
        name: &str,
        value: &str,
        formatted_value: Option<&str>,
    ) -> Self {
        self.worksheets.push(Worksheet::new(name));
        self.sheet_data.insert(
            name.to_string(),
            DataTable {
                rows: vec![vec![DataValue {
                    value: value.to_string(),
                    formatted_value: formatted_value.map(str::to_string),
                }]],
            },
        );
        self
    }

    pub fn with_sheet_data(mut self, name: &str, table: DataTable) -> Self {
        self.sheet_data.insert(name.to_string(), table);
        self
    }

    pub fn with_parameter(mut self, name: &str, value: &str) -> Self {
        self.parameters.push(Parameter::new(name, value));
        self
    }

    pub fn with_unique_user_id(mut self, id: &str) -> Self {
        self.environment.unique_user_id = Some(id.to_string());
        self
    }

    pub fn with_display_name(mut self, name: &str) -> Self {
        self.environment.display_name = Some(name.to_string());
        self
    }

    pub fn failing(mut self, call: HostCall, reason: &str) -> Self {
        self.failures.insert(call, reason.to_string());
        self
    }

    pub fn probes(&self) -> u32 {
        self.probes.get()
    }

    pub fn init_calls(&self) -> u32 {
        self.init_calls.get()
    }

    pub fn environment_reads(&self) -> u32 {
        self.environment_reads.get()
    }

    pub fn parameter_reads(&self) -> u32 {
        self.parameter_reads.get()
    }

    pub fn summary_requests(&self) -> Vec<(String, SummaryDataOptions)> {
        self.summary_requests.borrow().clone()
    }

    fn check(&self, call: HostCall) -> Result<(), HostError> {
        match self.failures.get(&call) {
            Some(reason) => Err(HostError::Call {
                call: call.as_str().to_string(),
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl HostClient for ScriptedHost {
    fn is_present(&self) -> bool {
        let seen = self.probes.get();
        self.probes.set(seen + 1);
        match self.appears_after_probes {
            Some(after) => seen >= after,
            None => false,
        }
    }

    fn initialize(&self) -> Result<(), HostError> {
        self.init_calls.set(self.init_calls.get() + 1);
        self.check(HostCall::Initialize)?;
        match &self.init_rejection {
            Some(reason) => Err(HostError::InitializationRejected(reason.clone())),
            None => Ok(()),
        }
    }

    fn dashboard_name(&self) -> Result<Option<String>, HostError> {
        self.check(HostCall::DashboardName)?;
        Ok(self.dashboard_name.clone())
    }

    fn worksheets(&self) -> Result<Vec<Worksheet>, HostError> {
        self.check(HostCall::Worksheets)?;
        Ok(self.worksheets.clone())
    }

    fn summary_data(
        &self,
        worksheet: &str,
        options: SummaryDataOptions,
    ) -> Result<DataTable, HostError> {
        self.summary_requests
            .borrow_mut()
            .push((worksheet.to_string(), options));
        self.check(HostCall::SummaryData)?;
        if !self.worksheets.iter().any(|sheet| sheet.name == worksheet) {
            return Err(HostError::WorksheetNotFound {
                name: worksheet.to_string(),
            });
        }
        Ok(self.sheet_data.get(worksheet).cloned().unwrap_or_default())
    }

    fn parameters(&self) -> Result<Vec<Parameter>, HostError> {
        self.parameter_reads.set(self.parameter_reads.get() + 1);
        self.check(HostCall::Parameters)?;
        Ok(self.parameters.clone())
    }

    fn environment(&self) -> Result<HostEnvironment, HostError> {
        self.environment_reads.set(self.environment_reads.get() + 1);
        self.check(HostCall::Environment)?;
        Ok(self.environment.clone())
    }
}
