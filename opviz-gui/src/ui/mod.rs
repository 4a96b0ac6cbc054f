//! UI rendering modules.
//!
//! Contains the UI rendering logic split into separate modules:
//! - `control_panel`: left sidebar with mode and option controls
//! - `table_view`: central candidate table with row selection
//! - `molecule_panel`: depiction panel for the selected candidate
//! - `statistics`: PCE histogram and summary values

mod control_panel;
mod molecule_panel;
mod statistics;
mod table_view;
pub mod theme;
