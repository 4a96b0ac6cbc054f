//! Control panel (left sidebar) and bottom status bar rendering.

use eframe::egui::{self, Color32, Rounding, Stroke};
use rfd::FileDialog;

use opviz_core::{FilterColumn, SortOrder};

use super::theme::{accent, form_label, stat_label, stat_value, ThemeColors};
use crate::app::OpvizApp;
use crate::state::{HistogramMode, ViewMode};
use crate::util::format_number;

impl OpvizApp {
    /// Render the left control panel.
    pub(crate) fn render_side_panel(&mut self, ctx: &egui::Context) {
        let colors = ThemeColors::from_ctx(ctx);

        egui::SidePanel::left("ctrl")
            .default_width(250.0)
            .frame(
                egui::Frame::none()
                    .fill(colors.bg_panel)
                    .inner_margin(egui::Margin::symmetric(12.0, 10.0)),
            )
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("OPVIZ")
                        .size(14.0)
                        .strong()
                        .color(accent::BLUE),
                );
                ui.add_space(8.0);
                self.render_mode_toggle(ui);
                ui.add_space(12.0);
                ui.separator();

                match self.ui_state.mode {
                    ViewMode::Table => self.render_table_controls(ui),
                    ViewMode::Statistics => self.render_statistics_controls(ui),
                }

                ui.add_space(12.0);
                ui.separator();
                self.render_dataset_summary(ui);
                ui.add_space(12.0);
                self.render_data_dir_controls(ui);
            });
    }

    /// Render the TABLE/STATISTICS toggle button group.
    fn render_mode_toggle(&mut self, ui: &mut egui::Ui) {
        let colors = ThemeColors::from_ui(ui);

        egui::Frame::none()
            .stroke(Stroke::new(1.0, colors.border))
            .rounding(Rounding::same(4.0))
            .inner_margin(egui::Margin::same(2.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(2.0, 0.0);

                    for (mode, label) in [
                        (ViewMode::Table, "TABLE"),
                        (ViewMode::Statistics, "STATISTICS"),
                    ] {
                        let active = self.ui_state.mode == mode;
                        let btn = egui::Button::new(
                            egui::RichText::new(label).size(11.0).strong().color(
                                if active {
                                    Color32::WHITE
                                } else {
                                    colors.text_muted
                                },
                            ),
                        )
                        .fill(if active {
                            accent::BLUE
                        } else {
                            Color32::TRANSPARENT
                        })
                        .stroke(Stroke::NONE)
                        .rounding(Rounding::same(3.0))
                        .min_size(egui::vec2(105.0, 0.0));

                        if ui.add(btn).clicked() {
                            self.ui_state.mode = mode;
                        }
                    }
                });
            });
    }

    /// Filter and sort controls for the table view.
    fn render_table_controls(&mut self, ui: &mut egui::Ui) {
        ui.label(form_label("Filter column"));
        ui.add_space(4.0);

        let old_column = self.ui_state.filter_column;
        let selected_label = self.ui_state.filter_column.map_or("All", FilterColumn::label);
        egui::ComboBox::from_id_salt("filter_column")
            .selected_text(selected_label)
            .width(ui.available_width() - 8.0)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.ui_state.filter_column, None, "All");
                for column in FilterColumn::ALL {
                    ui.selectable_value(
                        &mut self.ui_state.filter_column,
                        Some(column),
                        column.label(),
                    );
                }
            });
        if self.ui_state.filter_column != old_column {
            self.ui_state.filter_value = None;
            self.invalidate_table();
        }

        if let Some(column) = self.ui_state.filter_column {
            ui.add_space(8.0);
            ui.label(form_label(&format!("Value for {}", column.label())));
            ui.add_space(4.0);

            let values = self.data.dataset.unique_values(column);
            let value_ok = self
                .ui_state
                .filter_value
                .as_ref()
                .is_some_and(|v| values.contains(v));
            if !value_ok {
                self.ui_state.filter_value = values.first().cloned();
                self.invalidate_table();
            }

            let selected = self.ui_state.filter_value.clone().unwrap_or_default();
            egui::ComboBox::from_id_salt("filter_value")
                .selected_text(&selected)
                .width(ui.available_width() - 8.0)
                .show_ui(ui, |ui| {
                    for value in &values {
                        if ui.selectable_label(selected == *value, value).clicked() {
                            self.ui_state.filter_value = Some(value.clone());
                            self.invalidate_table();
                        }
                    }
                });
        }

        ui.add_space(8.0);
        let mut ascending = self.ui_state.sort == SortOrder::Ascending;
        if ui.checkbox(&mut ascending, "Sort PCE ascending").changed() {
            self.ui_state.sort = if ascending {
                SortOrder::Ascending
            } else {
                SortOrder::Descending
            };
            self.invalidate_table();
        }
    }

    /// Scope controls for the statistics view.
    fn render_statistics_controls(&mut self, ui: &mut egui::Ui) {
        ui.label(form_label("Histogram"));
        ui.add_space(4.0);

        let old_mode = self.ui_state.histogram_mode;
        let selected_label = match self.ui_state.histogram_mode {
            HistogramMode::AllData => "All Data",
            HistogramMode::ByAcceptor => "By Acceptor",
        };
        egui::ComboBox::from_id_salt("histogram_mode")
            .selected_text(selected_label)
            .width(ui.available_width() - 8.0)
            .show_ui(ui, |ui| {
                ui.selectable_value(
                    &mut self.ui_state.histogram_mode,
                    HistogramMode::AllData,
                    "All Data",
                );
                ui.selectable_value(
                    &mut self.ui_state.histogram_mode,
                    HistogramMode::ByAcceptor,
                    "By Acceptor",
                );
            });
        if self.ui_state.histogram_mode != old_mode {
            self.invalidate_stats();
        }

        if self.ui_state.histogram_mode == HistogramMode::ByAcceptor {
            ui.add_space(8.0);
            ui.label(form_label("Acceptor"));
            ui.add_space(4.0);

            let acceptors = self.data.dataset.acceptors();
            let acceptor_ok = self
                .ui_state
                .acceptor
                .as_ref()
                .is_some_and(|a| acceptors.contains(a));
            if !acceptor_ok {
                self.ui_state.acceptor = acceptors.first().cloned();
                self.invalidate_stats();
            }

            let selected = self.ui_state.acceptor.clone().unwrap_or_default();
            egui::ComboBox::from_id_salt("acceptor_select")
                .selected_text(&selected)
                .width(ui.available_width() - 8.0)
                .show_ui(ui, |ui| {
                    for acceptor in &acceptors {
                        if ui.selectable_label(selected == *acceptor, acceptor).clicked() {
                            self.ui_state.acceptor = Some(acceptor.clone());
                            self.invalidate_stats();
                        }
                    }
                });
        }
    }

    /// Render a single stat row with label on left and value on right.
    pub(crate) fn stat_row(ui: &mut egui::Ui, label: &str, value: &str) {
        ui.horizontal(|ui| {
            ui.label(stat_label(label));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(stat_value(value));
            });
        });
    }

    fn render_dataset_summary(&self, ui: &mut egui::Ui) {
        Self::stat_row(ui, "Candidates", &format_number(self.data.dataset.len()));
        Self::stat_row(ui, "Depictions", &format_number(self.data.depictions.len()));
        Self::stat_row(
            ui,
            "Acceptors",
            &format_number(self.data.dataset.acceptors().len()),
        );
    }

    fn render_data_dir_controls(&mut self, ui: &mut egui::Ui) {
        let colors = ThemeColors::from_ui(ui);

        if ui.button("Open data folder…").clicked() {
            if let Some(dir) = FileDialog::new().pick_folder() {
                self.reload_data(&dir);
            }
        }
        ui.label(
            egui::RichText::new(self.data.data_dir.display().to_string())
                .size(10.0)
                .color(colors.text_dim),
        );
    }

    /// Render the bottom status bar.
    pub(crate) fn render_bottom_panel(&self, ctx: &egui::Context) {
        let colors = ThemeColors::from_ctx(ctx);

        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                egui::Frame::none()
                    .fill(colors.bg_header)
                    .inner_margin(egui::Margin::symmetric(16.0, 6.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(status) = &self.status {
                        ui.label(egui::RichText::new("●").size(11.0).color(accent::RED));
                        ui.label(egui::RichText::new(status).size(11.0).color(accent::RED));
                    } else {
                        ui.label(egui::RichText::new("●").size(11.0).color(accent::GREEN));
                        ui.label(
                            egui::RichText::new("Ready")
                                .size(11.0)
                                .color(colors.text_muted),
                        );
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "{} candidates",
                                format_number(self.data.dataset.len())
                            ))
                            .size(11.0)
                            .color(colors.text_muted),
                        );
                    });
                });
            });
    }
}
