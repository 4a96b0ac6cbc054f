//! Application state modules.

mod ui;

pub use ui::{HistogramMode, ViewMode, ViewState};
