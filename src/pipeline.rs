use crate::{
    config::Config,
    error::{Error, Result},
    pack::IconPack,
    walker::{WalkStats, Walker},
    writer::Writer,
};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// Statistics collected during a build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildStats {
    /// Number of icons in the pack
    pub icon_count: usize,

    /// Number of distinct top-level categories
    pub category_count: usize,

    /// Prefix written into the pack
    pub prefix: String,

    /// Files carrying the drawable extension
    pub drawable_files: usize,

    /// Files skipped because their name did not match the pattern
    pub skipped_malformed: usize,

    /// Files skipped because their service name was unusable
    pub skipped_unnamed: usize,

    /// Files skipped because they had no drawable content
    pub skipped_empty: usize,

    /// Directories skipped because their name was unusable
    pub pruned_dirs: usize,

    /// Icons that replaced an earlier icon with the same identifier
    pub overrides: usize,

    /// A fully qualified reference to one icon of the pack
    pub example_reference: Option<String>,

    /// Output file path
    pub output_file: String,

    /// Whether the output file was written
    pub written: bool,

    /// Total execution time
    pub duration: Duration,
}

impl BuildStats {
    fn new(
        pack: &IconPack,
        walk: &WalkStats,
        output_file: String,
        written: bool,
        duration: Duration,
    ) -> Self {
        Self {
            icon_count: pack.len(),
            category_count: pack.categories().len(),
            prefix: pack.prefix.clone(),
            drawable_files: walk.drawable_files,
            skipped_malformed: walk.skipped_malformed,
            skipped_unnamed: walk.skipped_unnamed,
            skipped_empty: walk.skipped_empty,
            pruned_dirs: walk.pruned_dirs,
            overrides: walk.overrides,
            example_reference: pack.icons.keys().next().map(|id| pack.reference(id)),
            output_file,
            written,
            duration,
        }
    }

    /// Returns the total number of skipped files.
    #[must_use]
    pub const fn skipped_files(&self) -> usize {
        self.skipped_malformed + self.skipped_unnamed + self.skipped_empty
    }

    /// Prints a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n╔═══════════════════════════════════════════════════════╗");
        println!("║               Icon Pack Build Summary                 ║");
        println!("╠═══════════════════════════════════════════════════════╣");
        println!(
            "║ Total icons:          {:>8}                        ║",
            self.icon_count
        );
        println!(
            "║ Categories:           {:>8}                        ║",
            self.category_count
        );
        println!(
            "║ Drawable files:       {:>8}                        ║",
            self.drawable_files
        );
        println!(
            "║   - Bad names:        {:>8}                        ║",
            self.skipped_malformed
        );
        println!(
            "║   - Unusable names:   {:>8}                        ║",
            self.skipped_unnamed
        );
        println!(
            "║   - Empty bodies:     {:>8}                        ║",
            self.skipped_empty
        );
        println!(
            "║   - Overridden:       {:>8}                        ║",
            self.overrides
        );
        println!("║                                                       ║");
        println!("║ Output file:                                          ║");
        println!("║   {}", self.output_file);
        if !self.written {
            println!("║ ⚠ Not written (dry run mode)                          ║");
        }
        println!(
            "║ Total time:           {:>8.2}s                     ║",
            self.duration.as_secs_f64()
        );
        println!("╚═══════════════════════════════════════════════════════╝");
        println!("   Use in Mermaid: fa:{}-<category>-<icon-name>", self.prefix);
        if let Some(example) = &self.example_reference {
            println!("   Example: fa:{example}");
        }
        println!();
    }
}

/// Builds an icon pack from a source tree and persists it.
pub struct Pipeline {
    config: Config,
    walker: Walker,
    writer: Writer,
}

impl Pipeline {
    /// Creates a new pipeline with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration validation fails
    /// - The file-name pattern does not compile
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let walker = Walker::new(&config)?;
        let writer = Writer::new(&config);

        Ok(Self {
            config,
            walker,
            writer,
        })
    }

    /// Builds the pack without writing it.
    ///
    /// # Errors
    ///
    /// Returns an error if traversal fails or produces no icons.
    pub fn build_pack(&self) -> Result<IconPack> {
        self.collect().map(|(pack, _)| pack)
    }

    /// Executes the build and returns statistics.
    ///
    /// # Process
    ///
    /// 1. **Walk**: collects icons from the root directory
    /// 2. **Check**: refuses to continue with an empty pack
    /// 3. **Write**: replaces the output file in one atomic step
    ///
    /// # Errors
    ///
    /// Returns an error if any stage fails. When no icons are found the
    /// output file is left untouched.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use iconpack::{Config, Pipeline};
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = Config::builder()
    ///     .root_dir("./azure-icons")
    ///     .build()?;
    ///
    /// let stats = Pipeline::new(config)?.run()?;
    /// stats.print_summary();
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self), fields(root_dir = %self.config.root_dir.display()))]
    pub fn run(self) -> Result<BuildStats> {
        let start_time = Instant::now();

        info!("Starting icon generation from {}", self.config.root_dir.display());

        let (pack, walk_stats) = self.collect()?;

        info!(
            "✓ Collected {} icons from {} drawable files",
            pack.len(),
            walk_stats.drawable_files
        );

        if walk_stats.skipped_malformed > 0 {
            info!(
                "{} file(s) skipped because of their name format",
                walk_stats.skipped_malformed
            );
        }

        let written = if self.config.dry_run {
            info!("Dry run mode enabled - skipping file write");
            false
        } else {
            self.writer.write_pack(&pack)?;
            true
        };

        let stats = BuildStats::new(
            &pack,
            &walk_stats,
            self.config.output_file.display().to_string(),
            written,
            start_time.elapsed(),
        );

        info!(
            "✓ Icon pack '{}' built in {:.2}s",
            stats.prefix,
            stats.duration.as_secs_f64()
        );

        Ok(stats)
    }

    fn collect(&self) -> Result<(IconPack, WalkStats)> {
        let mut pack = IconPack::new(&self.config.prefix);
        let stats = self.walker.walk(&mut pack)?;

        if pack.is_empty() {
            return Err(Error::no_icons(&self.config.root_dir));
        }

        Ok((pack, stats))
    }
}
