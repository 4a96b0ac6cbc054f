//! PCE histogram rendering and summary values.

use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

use opviz_core::PceHistogram;

use crate::app::OpvizApp;
use crate::state::HistogramMode;
use crate::util::u64_to_f64;

use super::theme::accent;

impl OpvizApp {
    /// Render the statistics view for the current scope.
    pub(crate) fn render_statistics_view(&mut self, ui: &mut egui::Ui) {
        let Some(stats) = self.stats.as_ref() else {
            return;
        };

        let Some(hist) = stats.histogram.as_ref() else {
            // Only the by-acceptor scope can match zero rows.
            let acceptor = self.ui_state.acceptor.clone().unwrap_or_default();
            ui.colored_label(
                accent::AMBER,
                format!("No data available for acceptor: {acceptor}"),
            );
            return;
        };

        let fill = match self.ui_state.histogram_mode {
            HistogramMode::AllData => {
                ui.heading("Histogram of PCE Values");
                accent::BLUE
            }
            HistogramMode::ByAcceptor => {
                let acceptor = self.ui_state.acceptor.clone().unwrap_or_default();
                ui.heading(format!("Histogram of PCE Values for Acceptor: {acceptor}"));
                accent::GREEN
            }
        };
        ui.add_space(4.0);

        Self::render_histogram_plot(ui, hist, fill);

        ui.add_space(8.0);
        Self::stat_row(ui, "Maximum predicted PCE", &format!("{:.3}", hist.max()));
        Self::stat_row(ui, "Minimum predicted PCE", &format!("{:.3}", hist.min()));
    }

    fn render_histogram_plot(ui: &mut egui::Ui, hist: &PceHistogram, fill: egui::Color32) {
        // A single distinct value has zero bin width; clamp so the one
        // occupied bar is still visible.
        let bar_width = if hist.bin_width() > 0.0 {
            hist.bin_width()
        } else {
            0.01
        };

        let bars: Vec<Bar> = hist
            .counts()
            .iter()
            .enumerate()
            .map(|(bin, &count)| {
                Bar::new(hist.bin_center(bin), u64_to_f64(count))
                    .width(bar_width)
                    .fill(fill.gamma_multiply(0.5))
            })
            .collect();

        let plot_height = (ui.available_height() - 70.0).max(120.0);
        Plot::new("pce_hist")
            .x_axis_label("Predicted PCE")
            .y_axis_label("Candidates")
            .include_y(0.0)
            .height(plot_height)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name("PCE"));
            });
    }
}
