//! # iconpack
//!
//! Builds a JSON icon pack for diagram renderers from a folder of SVG icons.
//!
//! ## Features
//!
//! - Depth-first walk with categories derived from directory names
//! - Stable, slugified identifiers (`<category>-...-<service>`)
//! - Delimiter-based extraction of each icon's drawable body
//! - Atomic output writes with optional backups
//! - Optional strict mode that rejects identifier collisions
//!
//! ## Quick Start
//!
//! ```no_run
//! use iconpack::{Config, Pipeline};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::builder()
//!     .root_dir("./azure-icons")
//!     .output_file("./custom-azure-icons.json")
//!     .prefix("azure")
//!     .build()?;
//!
//! Pipeline::new(config)?.run()?.print_summary();
//! # Ok(())
//! # }
//! ```
//!
//! ## Pack format
//!
//! ```json
//! {
//!     "prefix": "azure",
//!     "icons": {
//!         "analytics-ml-studio": { "content": "<path .../>", "width": 24, "height": 24 }
//!     }
//! }
//! ```
//!
//! Renderers resolve `<prefix>-<identifier>`; the first identifier segment is
//! the top-level category.

#![warn(
    missing_docs,
    rust_2018_idioms,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod error;
mod extract;
mod name;
mod pack;
mod pipeline;
mod slug;
mod walker;
mod writer;

pub mod api;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use extract::extract_body;
pub use name::NamePattern;
pub use pack::{IconEntry, IconPack};
pub use pipeline::{BuildStats, Pipeline};
pub use slug::{join_segment, slugify};

/// Runs a complete build with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is invalid
/// - Root directory or a source file cannot be read
/// - No icons are found
/// - The output file cannot be written
///
/// # Examples
///
/// ```no_run
/// use iconpack::{Config, run};
///
/// # fn main() -> anyhow::Result<()> {
/// let config = Config::builder()
///     .root_dir("./azure-icons")
///     .build()?;
///
/// run(config)?;
/// # Ok(())
/// # }
/// ```
pub fn run(config: Config) -> Result<BuildStats> {
    Pipeline::new(config)?.run()
}
