use crate::{
    config::Config,
    error::{Error, Result},
    pack::IconPack,
};
use std::{
    ffi::OsString,
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Persists an icon pack as a single JSON file.
pub(crate) struct Writer {
    output_file: PathBuf,
    indent: usize,
    backup_existing: bool,
}

impl Writer {
    /// Creates a new writer from configuration.
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            output_file: config.output_file.clone(),
            indent: config.indent,
            backup_existing: config.backup_existing,
        }
    }

    /// Serializes the pack and replaces the output file with it.
    ///
    /// The document is rendered fully in memory before anything touches the
    /// disk, so a serialization failure leaves the previous output intact.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Serialization fails
    /// - The output directory cannot be created
    /// - File write operations fail
    pub(crate) fn write_pack(&self, pack: &IconPack) -> Result<()> {
        let mut json = pack.to_json(self.indent)?;
        json.push('\n');

        if let Some(parent) = self.output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        self.write_file_atomic(&self.output_file, &json)?;

        info!(
            "Wrote {} icons ({} bytes) to {}",
            pack.len(),
            json.len(),
            self.output_file.display()
        );
        Ok(())
    }

    /// Writes a file atomically with optional backup.
    ///
    /// # Process
    ///
    /// 1. Creates backup if file exists and backup is enabled
    /// 2. Writes content to a sibling temporary file
    /// 3. Syncs temporary file to disk
    /// 4. Atomically renames temporary file to target path
    fn write_file_atomic(&self, path: &Path, content: &str) -> Result<()> {
        if path.exists() && self.backup_existing {
            self.backup_file(path)?;
        }

        let temp_path = Self::temp_path(path);
        let mut temp_file = fs::File::create(&temp_path).map_err(|e| Error::io(&temp_path, e))?;

        let written = temp_file
            .write_all(content.as_bytes())
            .and_then(|()| temp_file.sync_all());

        drop(temp_file);

        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(Error::io(&temp_path, e));
        }

        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            Error::io(path, e)
        })?;

        Ok(())
    }

    /// `pack.json` becomes `pack.json.tmp` next to the target.
    fn temp_path(path: &Path) -> PathBuf {
        let mut name = path
            .file_name()
            .map_or_else(|| OsString::from("iconpack"), OsString::from);
        name.push(".tmp");
        path.with_file_name(name)
    }

    /// Creates a timestamped backup of an existing file.
    fn backup_file(&self, path: &Path) -> Result<()> {
        let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S%3f");

        let filename = path
            .file_name()
            .ok_or_else(|| Error::config("Invalid output file path"))?
            .to_string_lossy();

        let backup_path = path.with_file_name(format!("{filename}.backup.{timestamp}"));

        fs::copy(path, &backup_path).map_err(|e| Error::io(&backup_path, e))?;

        debug!("Created backup: {}", backup_path.display());
        Ok(())
    }
}
