//! Backend commands queued from UI to backend worker.

use shared::{domain::EmployeeId, protocol::EmployeeDraft};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    LoadEmployees,
    CreateEmployee { draft: EmployeeDraft },
    UpdateEmployee { id: EmployeeId, draft: EmployeeDraft },
    DeleteEmployee { id: EmployeeId },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadEmployees => "load_employees",
            BackendCommand::CreateEmployee { .. } => "create_employee",
            BackendCommand::UpdateEmployee { .. } => "update_employee",
            BackendCommand::DeleteEmployee { .. } => "delete_employee",
        }
    }
}
