//! # Quick Start API
//!
//! Fluent entry point for the common case: point it at a folder, pick a
//! prefix, run.
//!
//! ## Examples
//!
//! ```no_run
//! use iconpack::api::Build;
//!
//! // Defaults: ./azure-icons -> ./custom-azure-icons.json, prefix "azure"
//! Build::default().run()?;
//!
//! // Custom source, output and prefix
//! Build::dir("./icons/aws")
//!     .output("./packs/aws.json")
//!     .prefix("aws")
//!     .size(32, 32)
//!     .strict()
//!     .run()?;
//! # Ok::<(), iconpack::Error>(())
//! ```

use crate::{BuildStats, Config, IconPack, Pipeline, Result};
use std::path::PathBuf;

/// Entry point for the quick start API.
#[derive(Debug, Clone, Default)]
#[must_use = "call .run() to execute the build"]
pub struct Build {
    dir: Option<PathBuf>,
    output: Option<PathBuf>,
    prefix: Option<String>,
    size: Option<(u32, u32)>,
    strict: bool,
    backup: bool,
    dry_run: bool,
}

impl Build {
    /// Start a build from the specified directory.
    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(path.into()),
            ..Self::default()
        }
    }

    /// Set the output file.
    ///
    /// Default: `./custom-azure-icons.json`
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Set the pack prefix.
    ///
    /// Default: `azure`
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the width and height recorded for every icon.
    ///
    /// Default: `24 x 24`
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = Some((width, height));
        self
    }

    /// Fail the build when two files map to the same identifier.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Back up an existing output file before replacing it.
    pub fn backup(mut self) -> Self {
        self.backup = true;
        self
    }

    /// Walk and validate without writing.
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Execute the build.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid, the walk fails, no icons
    /// are found or the output cannot be written.
    pub fn run(self) -> Result<BuildStats> {
        Pipeline::new(self.into_config()?)?.run()
    }

    /// Collect the pack in memory without touching the output file.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid, the walk fails or no
    /// icons are found.
    pub fn pack(self) -> Result<IconPack> {
        Pipeline::new(self.into_config()?)?.build_pack()
    }

    fn into_config(self) -> Result<Config> {
        let mut builder = Config::builder()
            .strict(self.strict)
            .backup_existing(self.backup)
            .dry_run(self.dry_run);

        if let Some(dir) = self.dir {
            builder = builder.root_dir(dir);
        }
        if let Some(output) = self.output {
            builder = builder.output_file(output);
        }
        if let Some(prefix) = self.prefix {
            builder = builder.prefix(prefix);
        }
        if let Some((width, height)) = self.size {
            builder = builder.icon_width(width).icon_height(height);
        }

        builder.build()
    }
}
