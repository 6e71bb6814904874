//! # CabinetKit
//!
//! Cut lists, CNC drilling files and quotes for a cabinet factory.
//!
//! ## Architecture
//!
//! CabinetKit is organized as a workspace with multiple crates:
//!
//! 1. **cabinetkit-core** - Catalog, pieces, modules, rounding, errors
//! 2. **cabinetkit-designer** - Piece derivation, edits, overrides, BOM and cut list
//! 3. **cabinetkit-camtools** - Drilling coordinates and DXF export
//! 4. **cabinetkit-costing** - Cost breakdown and suggested price
//! 5. **cabinetkit-settings** - Factory catalog and module files
//! 6. **cabinetkit** - Planning pipeline and the command-line tool

pub mod planner;
pub mod report;

pub use cabinetkit_camtools as camtools;
pub use cabinetkit_core as core;
pub use cabinetkit_costing as costing;
pub use cabinetkit_designer as designer;
pub use cabinetkit_settings as settings;

pub use cabinetkit_core::{Error, FactoryConfig, ModuleSpec, Piece, Result};
pub use planner::{DxfDocument, ModulePlan, Plan, Planner};
pub use report::QuoteReport;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, so stdout stays clean for reports
/// - RUST_LOG environment variable support (INFO by default)
/// - Pretty formatting, or one JSON object per line when `json` is set
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_names(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
