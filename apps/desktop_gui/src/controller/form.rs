//! Form/list synchronization state machine.
//!
//! The controller owns everything the view renders: the record list, the
//! draft being composed, the create/edit mode, the status banner, and the
//! delete confirmation. It performs no I/O — user actions return the
//! [`BackendCommand`] to dispatch (or `None` for a no-op), and backend
//! results are folded back in through [`DirectoryController::apply_event`].
//!
//! Two deliberate departures from the behavior this app was modeled on:
//! an explicit in-flight guard keeps a second submission from racing a
//! pending one, and the status banner is a single slot whose deadline is
//! replaced together with the message, so an earlier message's expiry can
//! never clear a later one.

use std::time::{Duration, Instant};

use shared::{
    domain::EmployeeId,
    protocol::{Employee, EmployeeDraft},
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// How long a status message stays visible.
pub const STATUS_DISPLAY_WINDOW: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: EmployeeId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    expires_at: Instant,
}

/// The operation currently on the wire. While set, no further command is
/// issued from user actions; cleared by the terminal [`UiEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingOperation {
    Load,
    Create,
    Update,
    Delete,
}

pub struct DirectoryController {
    records: Vec<Employee>,
    draft: EmployeeDraft,
    mode: FormMode,
    status: Option<StatusMessage>,
    in_flight: Option<PendingOperation>,
    pending_delete: Option<EmployeeId>,
    scroll_to_top: bool,
}

impl DirectoryController {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            draft: EmployeeDraft::default(),
            mode: FormMode::Create,
            status: None,
            in_flight: None,
            pending_delete: None,
            scroll_to_top: false,
        }
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    /// Mutable access for the form's text edits. The draft is the only
    /// value the view mutates directly.
    pub fn draft_mut(&mut self) -> &mut EmployeeDraft {
        &mut self.draft
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn pending_delete(&self) -> Option<EmployeeId> {
        self.pending_delete
    }

    /// One-shot: true on the first call after `begin_edit`, so the view can
    /// bring the form back into view exactly once.
    pub fn take_scroll_to_top(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top)
    }

    /// Copy a record's field values (not its id) into a fresh draft and
    /// switch to edit mode. Overwrites any unsaved draft without asking.
    pub fn begin_edit(&mut self, record: &Employee) {
        self.draft = EmployeeDraft::from_record(record);
        self.mode = FormMode::Edit { id: record.id };
        self.scroll_to_top = true;
    }

    /// Back to an empty create form. Also used after a successful submit.
    pub fn cancel_edit(&mut self) {
        self.draft = EmployeeDraft::default();
        self.mode = FormMode::Create;
    }

    /// Submission dispatches on the current mode. No-ops while an operation
    /// is in flight or while a required field is missing.
    pub fn submit(&mut self) -> Option<BackendCommand> {
        if self.in_flight.is_some() || !self.draft.is_complete() {
            return None;
        }
        match self.mode {
            FormMode::Create => {
                self.in_flight = Some(PendingOperation::Create);
                Some(BackendCommand::CreateEmployee {
                    draft: self.draft.clone(),
                })
            }
            FormMode::Edit { id } => {
                self.in_flight = Some(PendingOperation::Update);
                Some(BackendCommand::UpdateEmployee {
                    id,
                    draft: self.draft.clone(),
                })
            }
        }
    }

    /// Open the delete confirmation. `None` means there is nothing to
    /// delete and the request is ignored.
    pub fn request_delete(&mut self, id: Option<EmployeeId>) {
        let Some(id) = id else {
            return;
        };
        if self.in_flight.is_some() {
            return;
        }
        self.pending_delete = Some(id);
    }

    pub fn confirm_delete(&mut self) -> Option<BackendCommand> {
        if self.in_flight.is_some() {
            return None;
        }
        let id = self.pending_delete.take()?;
        self.in_flight = Some(PendingOperation::Delete);
        Some(BackendCommand::DeleteEmployee { id })
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Request a full list fetch. Used at startup and by the refresh
    /// control; no-ops while another operation is outstanding.
    pub fn reload(&mut self) -> Option<BackendCommand> {
        if self.in_flight.is_some() {
            return None;
        }
        self.in_flight = Some(PendingOperation::Load);
        Some(BackendCommand::LoadEmployees)
    }

    /// A command the controller issued could not be queued; roll the guard
    /// back and surface the reason.
    pub fn dispatch_failed(&mut self, reason: String, now: Instant) {
        self.in_flight = None;
        self.show_message(reason, StatusKind::Error, now);
    }

    /// Fold a backend result into controller state.
    ///
    /// Mutation successes keep the guard up: the worker reloads the list as
    /// the tail of the same command, and `EmployeesLoaded` (or the reload's
    /// failure) is the terminal event that releases it.
    pub fn apply_event(&mut self, event: UiEvent, now: Instant) {
        match event {
            UiEvent::EmployeesLoaded(employees) => {
                self.records = employees;
                self.in_flight = None;
            }
            UiEvent::EmployeeCreated(_) => {
                self.show_message(
                    "Employee created successfully!".to_string(),
                    StatusKind::Success,
                    now,
                );
                self.cancel_edit();
            }
            UiEvent::EmployeeUpdated(_) => {
                self.show_message(
                    "Employee updated successfully!".to_string(),
                    StatusKind::Success,
                    now,
                );
                self.cancel_edit();
            }
            UiEvent::EmployeeDeleted(_) => {
                self.show_message(
                    "Employee deleted successfully!".to_string(),
                    StatusKind::Success,
                    now,
                );
            }
            UiEvent::OperationFailed { context, .. } => {
                // Records, draft, and mode stay untouched so the user can
                // retry without re-entering data.
                self.in_flight = None;
                self.show_message(
                    context.failure_message().to_string(),
                    StatusKind::Error,
                    now,
                );
            }
        }
    }

    /// Single-slot status banner: showing a message replaces both the text
    /// and the expiry deadline.
    pub fn show_message(&mut self, text: String, kind: StatusKind, now: Instant) {
        self.status = Some(StatusMessage {
            text,
            kind,
            expires_at: now + STATUS_DISPLAY_WINDOW,
        });
    }

    pub fn dismiss_status(&mut self) {
        self.status = None;
    }

    /// Clear the status once its display window has elapsed. Called every
    /// frame by the view.
    pub fn expire_status(&mut self, now: Instant) {
        if let Some(status) = &self.status {
            if now >= status.expires_at {
                self.status = None;
            }
        }
    }
}

impl Default for DirectoryController {
    fn default() -> Self {
        Self::new()
    }
}
