//! Candidate table rendering with single-row selection.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use opviz_core::FilterColumn;

use crate::app::OpvizApp;

impl OpvizApp {
    /// Render the derived table view. The ordinal column is the
    /// selectable key; clicking a row selects it for the depiction panel.
    pub(crate) fn render_table_view(&mut self, ui: &mut egui::Ui) {
        let Some(view) = self.table.as_ref() else {
            return;
        };
        let dataset = &self.data.dataset;
        let selected = self.ui_state.selected_row;
        let mut clicked_row = None;

        let row_h = 20.0;
        TableBuilder::new(ui)
            .striped(true)
            .sense(egui::Sense::click())
            .column(Column::auto())
            .column(Column::auto())
            .columns(Column::remainder().clip(true), 6)
            .header(22.0, |mut header| {
                header.col(|ui| {
                    ui.label(RichText::new("#").strong());
                });
                header.col(|ui| {
                    ui.label(RichText::new("PCE").strong());
                });
                for column in FilterColumn::ALL {
                    header.col(|ui| {
                        ui.label(RichText::new(column.label()).strong());
                    });
                }
            })
            .body(|body| {
                body.rows(row_h, view.len(), |mut row| {
                    let ordinal = row.index();
                    row.set_selected(ordinal == selected);

                    let Some(record) = view.record(dataset, ordinal) else {
                        return;
                    };
                    row.col(|ui| {
                        ui.label(ordinal.to_string());
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.3}", record.pce));
                    });
                    for column in FilterColumn::ALL {
                        row.col(|ui| {
                            let label = egui::Label::new(
                                RichText::new(column.value(record)).size(12.0),
                            )
                            .truncate();
                            ui.add_sized(egui::vec2(ui.available_width(), row_h - 2.0), label);
                        });
                    }

                    if row.response().clicked() {
                        clicked_row = Some(ordinal);
                    }
                });
            });

        if let Some(ordinal) = clicked_row {
            self.ui_state.selected_row = ordinal;
        }
    }
}
