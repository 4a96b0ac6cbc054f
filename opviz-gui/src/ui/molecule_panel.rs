//! Depiction panel for the selected candidate.

use eframe::egui;

use opviz_core::StructuralField;

use super::theme::{accent, form_label};
use crate::app::OpvizApp;

/// Widest a depiction is drawn; assets are rendered square offline.
const MAX_IMAGE_WIDTH: f32 = 360.0;

impl OpvizApp {
    /// Render the five structural depictions for the selected record.
    ///
    /// Each field independently shows either its depiction, the literal
    /// sentinel, or an inline error; one failed field never hides the
    /// other four.
    pub(crate) fn render_molecule_panel(&mut self, ui: &mut egui::Ui) {
        let Some(record) = self
            .table
            .as_ref()
            .and_then(|view| view.record(&self.data.dataset, self.ui_state.selected_row))
            .cloned()
        else {
            ui.centered_and_justified(|ui| ui.label("No row selected"));
            return;
        };

        ui.heading("Molecule Structures");
        ui.label(format!("PCE = {:.3}", record.pce));
        ui.add_space(8.0);

        for field in StructuralField::ALL {
            let value = field.value(&record);
            ui.label(form_label(field.label()));

            match self.data.depictions.image_path(field, value) {
                None => {
                    // Sentinel: the field is not applicable, no lookup ran.
                    ui.label("-");
                }
                Some(Ok(path)) => match self.textures.get(ui.ctx(), &path) {
                    Ok(texture) => {
                        ui.add(
                            egui::Image::new(&texture)
                                .max_width(ui.available_width().min(MAX_IMAGE_WIDTH)),
                        );
                    }
                    Err(e) => {
                        ui.colored_label(accent::RED, e);
                    }
                },
                Some(Err(e)) => {
                    ui.colored_label(accent::RED, e.to_string());
                }
            }
            ui.add_space(8.0);
        }
    }
}
