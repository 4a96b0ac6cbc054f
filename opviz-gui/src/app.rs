//! Main application state and logic.
//!
//! Contains the `OpvizApp` struct which holds the immutable loaded
//! context, the transient view state, and the cached derived views.
//! Controls invalidate a cache; the next frame re-derives it. This keeps
//! every recomputation tied to the interaction that made it necessary.

use std::path::Path;

use eframe::egui;

use opviz_core::{PceHistogram, TableView};

use crate::context::AppContext;
use crate::state::{HistogramMode, ViewMode, ViewState};
use crate::viewer::TextureCache;

/// Derived statistics for the current scope.
///
/// `histogram` is `None` when the scope matched no rows — the
/// empty-result warning case, not an error.
pub(crate) struct StatsView {
    pub histogram: Option<PceHistogram>,
}

/// Main application state.
pub struct OpvizApp {
    /// Loaded input artifacts, immutable for the session.
    pub(crate) data: AppContext,
    /// Transient option state.
    pub(crate) ui_state: ViewState,

    /// Cached table view; `None` after a filter/sort change.
    pub(crate) table: Option<TableView>,
    /// Cached statistics; `None` after a scope change.
    pub(crate) stats: Option<StatsView>,
    /// Decoded depiction textures keyed by path.
    pub(crate) textures: TextureCache,
    /// Non-fatal error shown in the status bar.
    pub(crate) status: Option<String>,
}

impl OpvizApp {
    /// Build the app around an already-loaded context.
    #[must_use]
    pub fn new(data: AppContext) -> Self {
        Self {
            data,
            ui_state: ViewState::default(),
            table: None,
            stats: None,
            textures: TextureCache::default(),
            status: None,
        }
    }

    /// Drop the cached table view and reset the selection.
    pub(crate) fn invalidate_table(&mut self) {
        self.table = None;
        self.ui_state.selected_row = 0;
    }

    /// Drop the cached statistics.
    pub(crate) fn invalidate_stats(&mut self) {
        self.stats = None;
    }

    /// Re-derive the table view if a control change dropped it.
    pub(crate) fn ensure_table(&mut self) {
        if self.table.is_some() {
            return;
        }
        let filter = self
            .ui_state
            .filter_column
            .zip(self.ui_state.filter_value.as_deref());
        let view = self.data.dataset.view(filter, self.ui_state.sort);
        if self.ui_state.selected_row >= view.len() {
            self.ui_state.selected_row = 0;
        }
        self.table = Some(view);
    }

    /// Re-derive the statistics for the current scope if needed.
    pub(crate) fn ensure_stats(&mut self) {
        if self.stats.is_some() {
            return;
        }
        let values = match self.ui_state.histogram_mode {
            HistogramMode::AllData => self.data.dataset.pce_values(),
            HistogramMode::ByAcceptor => {
                if self.ui_state.acceptor.is_none() {
                    self.ui_state.acceptor = self.data.dataset.acceptors().first().cloned();
                }
                self.ui_state
                    .acceptor
                    .as_deref()
                    .map(|acceptor| self.data.dataset.pce_for_acceptor(acceptor))
                    .unwrap_or_default()
            }
        };
        self.stats = Some(StatsView {
            histogram: PceHistogram::from_values(&values),
        });
    }

    /// Point the session at a different data directory.
    ///
    /// On failure the current context stays in place and the error goes
    /// to the status bar; only a successful load replaces anything.
    pub(crate) fn reload_data(&mut self, data_dir: &Path) {
        match AppContext::load(data_dir) {
            Ok(data) => {
                self.data = data;
                self.ui_state = ViewState::default();
                self.table = None;
                self.stats = None;
                self.textures.clear();
                self.status = None;
            }
            Err(e) => {
                log::warn!("data directory change rejected: {e:#}");
                self.status = Some(format!("{e:#}"));
            }
        }
    }
}

impl eframe::App for OpvizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_side_panel(ctx);
        self.render_bottom_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.ui_state.mode {
            ViewMode::Table => {
                self.ensure_table();
                let table_height = ui.available_height() * 0.5;
                ui.allocate_ui(egui::vec2(ui.available_width(), table_height), |ui| {
                    self.render_table_view(ui);
                });
                ui.separator();
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_molecule_panel(ui);
                    });
            }
            ViewMode::Statistics => {
                self.ensure_stats();
                self.render_statistics_view(ui);
            }
        });
    }
}
