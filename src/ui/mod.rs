//! User interface components and rendering logic for the wiring bench.
//!
//! This module contains all the UI-related code: the main application
//! struct, the board canvas, the wire attribute controls, and the dialogs.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main TrainerApp
//! - `canvas` - Board coordinate mapping, hit-testing, and pointer routing
//! - `rendering` - Drawing the grid, work zone, components, wires, and
//!   terminals

mod canvas;
mod rendering;
mod state;

pub use state::TrainerApp;

use eframe::egui;

use crate::session::Selection;
use crate::types::{StampMark, WireColor, WireGauge};

impl eframe::App for TrainerApp {
    /// Persist UI preferences between restarts. Drawing state is transient
    /// and intentionally skipped by the serde derives.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => storage.set_string("app_state", json),
            Err(err) => log::error!("failed to serialize app state: {err}"),
        }
    }

    /// Main update function called by egui for each frame.
    ///
    /// Lays out the toolbar, the wire attribute strip, the verdict panel
    /// when a judge result is showing, and the central board canvas, then
    /// any open dialogs on top.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        // Keep the hold-to-delete countdown advancing even without pointer
        // movement.
        if self.session.pending_delete.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::TopBottomPanel::bottom("wire_controls").show(ctx, |ui| {
            self.draw_wire_controls(ui);
        });

        if self.session.verdict.is_some() {
            egui::TopBottomPanel::bottom("verdict_panel").show(ctx, |ui| {
                self.draw_verdict_panel(ui);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });

        self.draw_stamp_picker(ctx);
        self.draw_reset_confirm(ctx);
        self.draw_manual(ctx);
        self.draw_reference(ctx);
    }
}

impl TrainerApp {
    /// Top toolbar: title, reference and manual buttons, theme toggle, and
    /// the judge button.
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("⚡ Wiring Trainer").strong());
            ui.separator();
            if ui.button("Reference").clicked() {
                self.show_reference = true;
            }
            if ui.button("How to use").clicked() {
                self.show_manual = true;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(egui::RichText::new("Run judge").strong())
                    .clicked()
                {
                    self.session.run_judge(&self.topology);
                }
                let theme_label = if self.dark_mode {
                    "Light mode"
                } else {
                    "Dark mode"
                };
                if ui.button(theme_label).clicked() {
                    self.dark_mode = !self.dark_mode;
                }
            });
        });
    }

    /// Bottom strip: wire color and gauge pickers for the next run, and the
    /// clear-all button.
    fn draw_wire_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Color").small().weak());
            for color in WireColor::ALL {
                let selected = self.session.current_color == color;
                if ui.selectable_label(selected, color.label()).clicked() {
                    self.session.current_color = color;
                }
            }

            ui.separator();
            ui.label(egui::RichText::new("Gauge").small().weak());
            for gauge in WireGauge::ALL {
                let selected = self.session.current_gauge == gauge;
                if ui.selectable_label(selected, gauge.label()).clicked() {
                    self.session.current_gauge = gauge;
                }
            }

            ui.separator();
            if ui.button("Clear all").clicked() {
                self.show_reset_confirm = true;
            }
        });
    }

    /// Central canvas: allocates the painter, routes pointer input, and
    /// renders the board.
    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

        let board_rect = self.board_rect(response.rect);
        self.last_board_rect = Some(board_rect);

        self.handle_pointer(ui, &response, board_rect);
        self.render_board(&painter, board_rect);
    }

    /// Transient verdict panel with the pass/fail headline, message, hint,
    /// and a dismiss button.
    fn draw_verdict_panel(&mut self, ui: &mut egui::Ui) {
        let Some(verdict) = self.session.verdict.clone() else {
            return;
        };
        let mut dismiss = false;

        ui.horizontal(|ui| {
            let (headline, color) = if verdict.success {
                ("Pass", egui::Color32::from_rgb(16, 150, 72))
            } else {
                ("Needs rework", egui::Color32::from_rgb(220, 38, 38))
            };
            ui.label(egui::RichText::new(headline).strong().color(color));
            ui.separator();
            ui.vertical(|ui| {
                ui.label(&verdict.message);
                if !verdict.hint.is_empty() {
                    ui.label(egui::RichText::new(format!("Hint: {}", verdict.hint)).weak());
                }
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("✕").clicked() {
                    dismiss = true;
                }
            });
        });

        if dismiss {
            self.session.dismiss_verdict();
        }
    }

    /// Centered modal for assigning a crimp stamp to the joint being edited.
    fn draw_stamp_picker(&mut self, ctx: &egui::Context) {
        if !matches!(self.session.selection, Selection::EditingJoint(_)) {
            return;
        }
        egui::Window::new("Select stamp")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("Mark the crimp sleeve for this splice:");
                ui.horizontal(|ui| {
                    for mark in StampMark::ALL {
                        if ui
                            .button(egui::RichText::new(mark.symbol()).size(24.0))
                            .clicked()
                        {
                            self.session.choose_stamp(mark);
                        }
                    }
                });
                if ui.button("Cancel").clicked() {
                    self.session.cancel_stamp_edit();
                }
            });
    }

    /// Confirmation dialog guarding the clear-all action.
    fn draw_reset_confirm(&mut self, ctx: &egui::Context) {
        if !self.show_reset_confirm {
            return;
        }
        egui::Window::new("Clear the board?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("This removes every joint and wire run.");
                ui.horizontal(|ui| {
                    if ui.button("Clear everything").clicked() {
                        self.session.clear_all();
                        self.show_reset_confirm = false;
                    }
                    if ui.button("Keep working").clicked() {
                        self.show_reset_confirm = false;
                    }
                });
            });
    }

    /// How-to window.
    fn draw_manual(&mut self, ctx: &egui::Context) {
        egui::Window::new("How to use")
            .open(&mut self.show_manual)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("1. Tap a terminal, pick a color and gauge, then tap inside the splice box to run a wire.");
                ui.label("2. Tap near an existing joint to splice more runs into it.");
                ui.label("3. Tap a joint holding two or more runs to stamp its crimp sleeve.");
                ui.label("4. Hold a wire run for a second to remove it.");
                ui.label("5. Run the judge to grade the circuit.");
            });
    }

    /// Single-line diagram reference for the exercise.
    fn draw_reference(&mut self, ctx: &egui::Context) {
        egui::Window::new("Single-line reference")
            .open(&mut self.show_reference)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("Target circuit for this exercise:");
                ui.monospace("source ── outlet (always hot)");
                ui.monospace("source ── switch ── lamp");
                ui.monospace("               └── omitted load");
                ui.monospace("neutrals: all W terminals meet in one splice, in white");
                ui.separator();
                ui.label("Service runs from the breaker use 2.0 mm; fixture runs use 1.6 mm.");
            });
    }
}
