use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{domain::EmployeeId, protocol::Employee};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::form::{DirectoryController, StatusKind};
use crate::controller::orchestration::dispatch_backend_command;

enum RowAction {
    Edit(Employee),
    Delete(EmployeeId),
}

pub struct DirectoryApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    controller: DirectoryController,
}

impl DirectoryApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            controller: DirectoryController::new(),
        };
        // Initial population, the desktop analog of loading on view init.
        if let Some(cmd) = app.controller.reload() {
            app.dispatch(cmd);
        }
        app
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        let mut queue_status = String::new();
        if !dispatch_backend_command(&self.cmd_tx, cmd, &mut queue_status) {
            self.controller.dispatch_failed(queue_status, Instant::now());
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.controller.apply_event(event, Instant::now());
        }
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(status) = self.controller.status().cloned() else {
            return;
        };
        let (fill, stroke) = match status.kind {
            StatusKind::Error => (
                egui::Color32::from_rgb(111, 53, 53),
                egui::Color32::from_rgb(175, 96, 96),
            ),
            StatusKind::Success => (
                egui::Color32::from_rgb(53, 111, 62),
                egui::Color32::from_rgb(96, 175, 110),
            ),
        };

        egui::Frame::NONE
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(status.text.as_str()).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.controller.dismiss_status();
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    fn show_employee_form(&mut self, ui: &mut egui::Ui) {
        let busy = self.controller.is_busy();
        let is_edit = self.controller.is_edit_mode();

        ui.heading(if is_edit { "Edit Employee" } else { "Add Employee" });
        ui.add_space(6.0);

        {
            let draft = self.controller.draft_mut();
            labeled_text_field(ui, "First name", "Jane", &mut draft.first_name);
            labeled_text_field(ui, "Last name", "Doe", &mut draft.last_name);
            labeled_text_field(ui, "Email", "jane.doe@corp.example", &mut draft.email_id);
        }

        let can_submit = !busy && self.controller.draft().is_complete();
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let submit_label = if is_edit { "Update" } else { "Save" };
            if ui
                .add_enabled(can_submit, egui::Button::new(submit_label))
                .clicked()
            {
                if let Some(cmd) = self.controller.submit() {
                    self.dispatch(cmd);
                }
            }
            if is_edit && ui.button("Cancel").clicked() {
                self.controller.cancel_edit();
            }
        });
    }

    fn show_employee_table(&mut self, ui: &mut egui::Ui) {
        let busy = self.controller.is_busy();

        ui.horizontal(|ui| {
            ui.heading("Employees");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(!busy, egui::Button::new("Refresh"))
                    .clicked()
                {
                    if let Some(cmd) = self.controller.reload() {
                        self.dispatch(cmd);
                    }
                }
            });
        });
        ui.add_space(6.0);

        if self.controller.records().is_empty() {
            ui.weak("No employees yet. Add one above.");
            return;
        }

        let mut action: Option<RowAction> = None;
        egui::Grid::new("employee_table")
            .num_columns(5)
            .striped(true)
            .spacing([18.0, 6.0])
            .show(ui, |ui| {
                ui.label(egui::RichText::new("Id").strong());
                ui.label(egui::RichText::new("First name").strong());
                ui.label(egui::RichText::new("Last name").strong());
                ui.label(egui::RichText::new("Email").strong());
                ui.label("");
                ui.end_row();

                for employee in self.controller.records() {
                    ui.label(employee.id.0.to_string());
                    ui.label(employee.first_name.as_str());
                    ui.label(employee.last_name.as_str());
                    ui.label(employee.email_id.as_str());
                    ui.horizontal(|ui| {
                        if ui.add_enabled(!busy, egui::Button::new("Edit")).clicked() {
                            action = Some(RowAction::Edit(employee.clone()));
                        }
                        if ui
                            .add_enabled(!busy, egui::Button::new("Delete"))
                            .clicked()
                        {
                            action = Some(RowAction::Delete(employee.id));
                        }
                    });
                    ui.end_row();
                }
            });

        match action {
            Some(RowAction::Edit(employee)) => self.controller.begin_edit(&employee),
            Some(RowAction::Delete(id)) => self.controller.request_delete(Some(id)),
            None => {}
        }
    }

    fn show_delete_confirmation(&mut self, ctx: &egui::Context) {
        let Some(id) = self.controller.pending_delete() else {
            return;
        };
        let prompt = match self
            .controller
            .records()
            .iter()
            .find(|e| e.id == id)
            .map(Employee::full_name)
        {
            Some(name) => format!("Are you sure you want to delete {name}?"),
            None => "Are you sure you want to delete this employee?".to_string(),
        };

        let mut confirmed = false;
        let mut cancelled = false;
        egui::Window::new("Delete employee")
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(prompt.as_str());
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        confirmed = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if confirmed {
            if let Some(cmd) = self.controller.confirm_delete() {
                self.dispatch(cmd);
            }
        } else if cancelled {
            self.controller.cancel_delete();
        }
    }
}

impl eframe::App for DirectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.controller.expire_status(Instant::now());

        egui::TopBottomPanel::top("app_header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("Employee Management System");
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut scroll = egui::ScrollArea::vertical();
            if self.controller.take_scroll_to_top() {
                scroll = scroll.vertical_scroll_offset(0.0);
            }
            scroll.show(ui, |ui| {
                self.show_status_banner(ui);
                self.show_employee_form(ui);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);
                self.show_employee_table(ui);
            });
        });

        self.show_delete_confirmation(ctx);

        // Keeps status expiry timely even while the user is idle.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

fn labeled_text_field(ui: &mut egui::Ui, label: &str, hint: &str, value: &mut String) {
    ui.label(egui::RichText::new(label).strong());
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(320.0),
    );
    ui.add_space(4.0);
}
