//! Events flowing from the backend worker to the UI thread.

use shared::{domain::EmployeeId, protocol::Employee};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    EmployeesLoaded(Vec<Employee>),
    EmployeeCreated(Employee),
    EmployeeUpdated(Employee),
    EmployeeDeleted(EmployeeId),
    OperationFailed {
        context: OperationContext,
        detail: String,
    },
}

/// Which outbound operation a failure belongs to. The user-facing text is
/// deliberately generic; the detail string only goes to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationContext {
    BackendStartup,
    LoadEmployees,
    CreateEmployee,
    UpdateEmployee,
    DeleteEmployee,
}

impl OperationContext {
    pub fn failure_message(self) -> &'static str {
        match self {
            OperationContext::BackendStartup => "Backend worker failed to start",
            OperationContext::LoadEmployees => "Error loading employees",
            OperationContext::CreateEmployee => "Error creating employee",
            OperationContext::UpdateEmployee => "Error updating employee",
            OperationContext::DeleteEmployee => "Error deleting employee",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OperationContext::BackendStartup => "backend_startup",
            OperationContext::LoadEmployees => "load_employees",
            OperationContext::CreateEmployee => "create_employee",
            OperationContext::UpdateEmployee => "update_employee",
            OperationContext::DeleteEmployee => "delete_employee",
        }
    }
}
