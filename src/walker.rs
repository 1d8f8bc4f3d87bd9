use crate::{
    config::Config,
    error::{Error, Result},
    extract::extract_body,
    name::NamePattern,
    pack::{IconEntry, IconPack},
    slug::{join_segment, slugify},
};
use std::{
    collections::HashMap,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

/// Counters collected while walking the source tree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct WalkStats {
    /// Files carrying the drawable extension
    pub drawable_files: usize,

    /// Icons inserted into the pack, overrides included
    pub icons_added: usize,

    /// Files whose name did not match the pattern
    pub skipped_malformed: usize,

    /// Files whose service name slugified to nothing
    pub skipped_unnamed: usize,

    /// Files without drawable content
    pub skipped_empty: usize,

    /// Directories pruned because their name slugified to nothing
    pub pruned_dirs: usize,

    /// Entries that replaced an earlier one with the same identifier
    pub overrides: usize,
}

/// Walks the source tree depth-first and fills an [`IconPack`].
pub(crate) struct Walker {
    root_dir: PathBuf,
    pattern: NamePattern,
    extension: String,
    closing_tag: String,
    icon_width: u32,
    icon_height: u32,
    strict: bool,
}

impl Walker {
    /// Creates a new walker from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file-name pattern does not compile.
    pub(crate) fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            root_dir: config.root_dir.clone(),
            pattern: config.name_pattern()?,
            extension: config.extension.clone(),
            closing_tag: config.closing_tag(),
            icon_width: config.icon_width,
            icon_height: config.icon_height,
            strict: config.strict,
        })
    }

    /// Walks the root directory and inserts one entry per usable leaf file.
    ///
    /// Entries are visited sorted by file name. Directories whose name
    /// slugifies to nothing are not descended into.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A directory or file cannot be read
    /// - A drawable file is not valid UTF-8
    /// - Strict mode is on and two files produce the same identifier
    pub(crate) fn walk(&self, pack: &mut IconPack) -> Result<WalkStats> {
        let mut stats = WalkStats::default();
        let mut sources: HashMap<String, PathBuf> = HashMap::new();
        let mut pruned = 0usize;

        debug!("Walking {}", self.root_dir.display());

        let entries = WalkDir::new(&self.root_dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let keep = Self::should_descend(entry);
                if !keep {
                    debug!("Pruning directory with unusable name: {}", entry.path().display());
                    pruned += 1;
                }
                keep
            });

        for result in entries {
            let entry = result?;
            let path = entry.path();
            let file_type = entry.file_type();

            if file_type.is_dir() {
                trace!("Entering {}", path.display());
                continue;
            }

            if !file_type.is_file() {
                trace!("Ignoring non-regular entry {}", path.display());
                continue;
            }

            if !self.has_drawable_extension(path) {
                trace!("Ignoring {}", path.display());
                continue;
            }

            stats.drawable_files += 1;
            let category = self.category_for(path);
            self.process_leaf(path, &category, pack, &mut sources, &mut stats)?;
        }

        stats.pruned_dirs = pruned;

        debug!(
            "Walk complete: {} drawable, {} added, {} malformed, {} unnamed, {} empty, \
             {} overrides",
            stats.drawable_files,
            stats.icons_added,
            stats.skipped_malformed,
            stats.skipped_unnamed,
            stats.skipped_empty,
            stats.overrides
        );

        Ok(stats)
    }

    /// Root and files always pass; directories need a usable slug.
    fn should_descend(entry: &DirEntry) -> bool {
        entry.depth() == 0
            || !entry.file_type().is_dir()
            || !slugify(&entry.file_name().to_string_lossy()).is_empty()
    }

    fn has_drawable_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }

    /// Builds the category path from the directories between root and `path`.
    fn category_for(&self, path: &Path) -> String {
        let Some(parent) = path.parent() else {
            return String::new();
        };

        let relative = pathdiff::diff_paths(parent, &self.root_dir).unwrap_or_default();

        relative
            .components()
            .map(|c| slugify(&c.as_os_str().to_string_lossy()))
            .fold(String::new(), |category, segment| join_segment(&category, &segment))
    }

    /// Converts one leaf file into at most one pack entry.
    fn process_leaf(
        &self,
        path: &Path,
        category: &str,
        pack: &mut IconPack,
        sources: &mut HashMap<String, PathBuf>,
        stats: &mut WalkStats,
    ) -> Result<()> {
        let file_name = path.file_name().and_then(OsStr::to_str);

        let Some(raw_name) = file_name.and_then(|name| self.pattern.service_name(name)) else {
            warn!(
                "Skipping file: {}. Name format did not match the required pattern.",
                path.file_name().unwrap_or_default().to_string_lossy()
            );
            stats.skipped_malformed += 1;
            return Ok(());
        };

        let service = slugify(raw_name);
        if service.is_empty() {
            debug!("Skipping {}: service name is empty after cleaning", path.display());
            stats.skipped_unnamed += 1;
            return Ok(());
        }

        let id = join_segment(category, &service);

        let content = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;

        let Some(body) = extract_body(&content, &self.closing_tag) else {
            debug!("Skipping {}: no drawable content", path.display());
            stats.skipped_empty += 1;
            return Ok(());
        };

        if let Some(first) = sources.get(&id) {
            if self.strict {
                return Err(Error::duplicate_icon(id, first, path));
            }
            debug!(
                "Icon '{}' from {} overrides {}",
                id,
                path.display(),
                first.display()
            );
            stats.overrides += 1;
        }

        trace!("Adding icon '{}' from {}", id, path.display());

        pack.insert(
            id.clone(),
            IconEntry {
                content: body.to_string(),
                width: self.icon_width,
                height: self.icon_height,
            },
        );
        sources.insert(id, path.to_path_buf());
        stats.icons_added += 1;

        Ok(())
    }
}
