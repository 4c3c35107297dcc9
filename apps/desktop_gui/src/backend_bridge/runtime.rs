//! Backend worker: owns the tokio runtime and serializes directory calls.
//!
//! Commands are drained one at a time, so no two network operations ever
//! overlap. A mutating command reloads the full list after its mutation
//! completes, on the same task — the refreshed records always reflect
//! post-mutation server state.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use directory_client::{DirectoryError, EmployeeDirectory, RestDirectoryClient};
use tracing::{error, info};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{OperationContext, UiEvent};

pub fn spawn_backend_thread(
    api_base_url: String,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::OperationFailed {
                    context: OperationContext::BackendStartup,
                    detail: err.to_string(),
                });
                return;
            }
        };

        runtime.block_on(async move {
            let directory = RestDirectoryClient::new(api_base_url);
            info!(base_url = directory.base_url(), "backend worker ready");
            run_command_loop(&directory, cmd_rx, ui_tx).await;
        });
    });
}

/// Drain the command queue until every sender is gone.
pub(crate) async fn run_command_loop<D>(
    directory: &D,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) where
    D: EmployeeDirectory + ?Sized,
{
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::LoadEmployees => {
                send_fresh_list(directory, &ui_tx).await;
            }
            BackendCommand::CreateEmployee { draft } => {
                match directory.create_employee(&draft).await {
                    Ok(created) => {
                        let _ = ui_tx.try_send(UiEvent::EmployeeCreated(created));
                        send_fresh_list(directory, &ui_tx).await;
                    }
                    Err(err) => report_failure(&ui_tx, OperationContext::CreateEmployee, err),
                }
            }
            BackendCommand::UpdateEmployee { id, draft } => {
                match directory.update_employee(id, &draft).await {
                    Ok(updated) => {
                        let _ = ui_tx.try_send(UiEvent::EmployeeUpdated(updated));
                        send_fresh_list(directory, &ui_tx).await;
                    }
                    Err(err) => report_failure(&ui_tx, OperationContext::UpdateEmployee, err),
                }
            }
            BackendCommand::DeleteEmployee { id } => {
                match directory.delete_employee(id).await {
                    Ok(()) => {
                        let _ = ui_tx.try_send(UiEvent::EmployeeDeleted(id));
                        send_fresh_list(directory, &ui_tx).await;
                    }
                    Err(err) => report_failure(&ui_tx, OperationContext::DeleteEmployee, err),
                }
            }
        }
    }
}

async fn send_fresh_list<D>(directory: &D, ui_tx: &Sender<UiEvent>)
where
    D: EmployeeDirectory + ?Sized,
{
    match directory.list_employees().await {
        Ok(employees) => {
            let _ = ui_tx.try_send(UiEvent::EmployeesLoaded(employees));
        }
        Err(err) => report_failure(ui_tx, OperationContext::LoadEmployees, err),
    }
}

fn report_failure(ui_tx: &Sender<UiEvent>, context: OperationContext, err: DirectoryError) {
    error!(operation = context.name(), "directory operation failed: {err}");
    let _ = ui_tx.try_send(UiEvent::OperationFailed {
        context,
        detail: err.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use crossbeam_channel::bounded;
    use shared::{
        domain::EmployeeId,
        protocol::{Employee, EmployeeDraft},
    };

    #[derive(Default)]
    struct FakeDirectory {
        employees: Mutex<Vec<Employee>>,
        calls: Mutex<Vec<&'static str>>,
        fail_mutations: bool,
        fail_list: bool,
    }

    impl FakeDirectory {
        fn seeded(employees: Vec<Employee>) -> Self {
            Self {
                employees: Mutex::new(employees),
                ..Self::default()
            }
        }

        fn failure() -> DirectoryError {
            DirectoryError::Status {
                status: 500,
                body: "boom".to_string(),
            }
        }
    }

    #[async_trait]
    impl EmployeeDirectory for FakeDirectory {
        async fn list_employees(&self) -> Result<Vec<Employee>, DirectoryError> {
            self.calls.lock().expect("calls").push("list");
            if self.fail_list {
                return Err(Self::failure());
            }
            Ok(self.employees.lock().expect("employees").clone())
        }

        async fn create_employee(
            &self,
            draft: &EmployeeDraft,
        ) -> Result<Employee, DirectoryError> {
            self.calls.lock().expect("calls").push("create");
            if self.fail_mutations {
                return Err(Self::failure());
            }
            let mut employees = self.employees.lock().expect("employees");
            let created = Employee {
                id: EmployeeId(employees.len() as i64 + 1),
                first_name: draft.first_name.clone(),
                last_name: draft.last_name.clone(),
                email_id: draft.email_id.clone(),
            };
            employees.push(created.clone());
            Ok(created)
        }

        async fn update_employee(
            &self,
            id: EmployeeId,
            draft: &EmployeeDraft,
        ) -> Result<Employee, DirectoryError> {
            self.calls.lock().expect("calls").push("update");
            if self.fail_mutations {
                return Err(Self::failure());
            }
            Ok(Employee {
                id,
                first_name: draft.first_name.clone(),
                last_name: draft.last_name.clone(),
                email_id: draft.email_id.clone(),
            })
        }

        async fn delete_employee(&self, _id: EmployeeId) -> Result<(), DirectoryError> {
            self.calls.lock().expect("calls").push("delete");
            if self.fail_mutations {
                return Err(Self::failure());
            }
            Ok(())
        }
    }

    fn draft(first: &str, last: &str, email: &str) -> EmployeeDraft {
        EmployeeDraft {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email_id: email.to_string(),
        }
    }

    /// Queue commands, close the channel, and drain the loop to completion.
    async fn run_to_completion(
        directory: &FakeDirectory,
        commands: Vec<BackendCommand>,
    ) -> Vec<UiEvent> {
        let (cmd_tx, cmd_rx) = bounded(commands.len().max(1));
        let (ui_tx, ui_rx) = bounded(64);
        for cmd in commands {
            cmd_tx.send(cmd).expect("queue command");
        }
        drop(cmd_tx);

        run_command_loop(directory, cmd_rx, ui_tx).await;
        ui_rx.try_iter().collect()
    }

    #[tokio::test]
    async fn create_reloads_the_list_only_after_the_mutation_completes() {
        let directory = FakeDirectory::default();
        let events = run_to_completion(
            &directory,
            vec![BackendCommand::CreateEmployee {
                draft: draft("Ann", "Lee", "a@x.com"),
            }],
        )
        .await;

        assert_eq!(*directory.calls.lock().expect("calls"), vec!["create", "list"]);
        assert!(matches!(events[0], UiEvent::EmployeeCreated(_)));
        match &events[1] {
            UiEvent::EmployeesLoaded(employees) => {
                // The reload observed the created row.
                assert_eq!(employees.len(), 1);
                assert_eq!(employees[0].first_name, "Ann");
            }
            other => panic!("expected loaded list, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_mutation_skips_the_list_reload() {
        let directory = FakeDirectory {
            fail_mutations: true,
            ..FakeDirectory::default()
        };
        let events = run_to_completion(
            &directory,
            vec![BackendCommand::DeleteEmployee { id: EmployeeId(4) }],
        )
        .await;

        assert_eq!(*directory.calls.lock().expect("calls"), vec!["delete"]);
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            UiEvent::OperationFailed {
                context: OperationContext::DeleteEmployee,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn load_failure_reports_without_dropping_the_loop() {
        let directory = FakeDirectory {
            fail_list: true,
            ..FakeDirectory::default()
        };
        let events = run_to_completion(
            &directory,
            vec![BackendCommand::LoadEmployees, BackendCommand::LoadEmployees],
        )
        .await;

        // Both commands were processed despite the first failing.
        assert_eq!(*directory.calls.lock().expect("calls"), vec!["list", "list"]);
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            UiEvent::OperationFailed {
                context: OperationContext::LoadEmployees,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn commands_are_processed_strictly_in_order() {
        let directory = FakeDirectory::seeded(vec![Employee {
            id: EmployeeId(5),
            first_name: "Bo".to_string(),
            last_name: "Rey".to_string(),
            email_id: "bo@x.com".to_string(),
        }]);
        let events = run_to_completion(
            &directory,
            vec![
                BackendCommand::UpdateEmployee {
                    id: EmployeeId(5),
                    draft: draft("Bo", "Reyes", "bo@x.com"),
                },
                BackendCommand::DeleteEmployee { id: EmployeeId(5) },
            ],
        )
        .await;

        assert_eq!(
            *directory.calls.lock().expect("calls"),
            vec!["update", "list", "delete", "list"]
        );
        assert!(matches!(events[0], UiEvent::EmployeeUpdated(_)));
        assert!(matches!(events[2], UiEvent::EmployeeDeleted(EmployeeId(5))));
    }
}
