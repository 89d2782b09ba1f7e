//! Terminal front end for the tariff competition sweep
//!
//! Loads the model configuration, runs the sweep from `tariffsweep_core`
//! and presents the three probability series as charts, a table or JSON.

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod chart;
pub mod config;
pub mod logging;
pub mod report;
pub mod util;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::App;
pub use config::load_config;
pub use logging::init_logging;
pub use report::{OutputFormat, render_json, render_table};
