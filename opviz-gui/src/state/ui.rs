//! Transient per-session view state.

use opviz_core::{FilterColumn, SortOrder};

/// Top-level view selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Filterable candidate table plus depictions of the selected row.
    #[default]
    Table,
    /// PCE distribution histograms.
    Statistics,
}

/// Histogram scope inside the statistics view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistogramMode {
    #[default]
    AllData,
    ByAcceptor,
}

/// Option state for the current interactive session. Never persisted;
/// a restart begins from defaults.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Selected top-level view.
    pub mode: ViewMode,
    /// Filter column, or `None` for "All".
    pub filter_column: Option<FilterColumn>,
    /// Selected value for the filter column.
    pub filter_value: Option<String>,
    /// PCE sort direction.
    pub sort: SortOrder,
    /// Selected row ordinal in the derived table view.
    pub selected_row: usize,
    /// Histogram scope.
    pub histogram_mode: HistogramMode,
    /// Selected acceptor for the by-acceptor histogram.
    pub acceptor: Option<String>,
}
