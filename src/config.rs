use crate::error::{Error, Result};
use crate::name::NamePattern;
use std::path::PathBuf;

const DEFAULT_ROOT_DIR: &str = "./azure-icons";
const DEFAULT_OUTPUT_FILE: &str = "./custom-azure-icons.json";
const DEFAULT_PREFIX: &str = "azure";
const DEFAULT_ICON_SIZE: u32 = 24;
const DEFAULT_MARKER: &str = "icon-service-";
const DEFAULT_EXTENSION: &str = "svg";
const DEFAULT_ROOT_ELEMENT: &str = "svg";
const DEFAULT_INDENT: usize = 4;

/// Configuration for an icon pack build.
///
/// Use [`Config::builder()`] to construct a new configuration.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    /// Root directory holding the source icons
    pub root_dir: PathBuf,

    /// Path of the generated JSON pack
    pub output_file: PathBuf,

    /// Namespace prefix written into the pack
    pub prefix: String,

    /// Width recorded for every icon
    pub icon_width: u32,

    /// Height recorded for every icon
    pub icon_height: u32,

    /// Literal between the ordering digits and the service name
    pub marker: String,

    /// Drawable file extension, without the leading dot
    pub extension: String,

    /// Name of the root element whose closing tag ends the body
    pub root_element: String,

    /// Spaces per indentation level in the JSON output
    pub indent: usize,

    /// Fail on identifier collisions instead of keeping the last one
    pub strict: bool,

    /// Create backups of an existing output file
    pub backup_existing: bool,

    /// Dry run mode (no file writes)
    pub dry_run: bool,
}

impl Config {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use iconpack::Config;
    ///
    /// let config = Config::builder()
    ///     .root_dir("./azure-icons")
    ///     .prefix("azure")
    ///     .build()
    ///     .expect("valid configuration");
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Root directory doesn't exist or is not a directory
    /// - Output path points at a directory
    /// - Prefix, marker, extension or root element is empty
    /// - Extension contains a dot
    /// - Icon dimensions are zero
    pub fn validate(&self) -> Result<()> {
        if !self.root_dir.exists() {
            return Err(Error::config(format!(
                "Root directory does not exist: {}",
                self.root_dir.display()
            )));
        }

        if !self.root_dir.is_dir() {
            return Err(Error::config(format!(
                "Root path is not a directory: {}",
                self.root_dir.display()
            )));
        }

        if self.output_file.is_dir() {
            return Err(Error::config(format!(
                "Output path is a directory: {}",
                self.output_file.display()
            )));
        }

        if self.prefix.trim().is_empty() {
            return Err(Error::config("prefix must not be empty"));
        }

        if self.icon_width == 0 || self.icon_height == 0 {
            return Err(Error::config(format!(
                "icon dimensions must be positive (got {}x{})",
                self.icon_width, self.icon_height
            )));
        }

        if self.marker.is_empty() {
            return Err(Error::config("marker must not be empty"));
        }

        // matched against `Path::extension`, which never contains a dot
        if self.extension.is_empty() || self.extension.contains('.') {
            return Err(Error::config(format!(
                "extension must be a single non-empty segment without dots (got '{}')",
                self.extension
            )));
        }

        if self.root_element.is_empty() {
            return Err(Error::config("root_element must not be empty"));
        }

        if crate::slugify(&self.prefix) != self.prefix {
            tracing::warn!(
                "prefix '{}' is not a slug; references may not resolve in all renderers",
                self.prefix
            );
        }

        Ok(())
    }

    /// Compiles the file-name pattern for this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern does not compile.
    pub fn name_pattern(&self) -> Result<NamePattern> {
        NamePattern::new(&self.marker, &self.extension)
    }

    /// Returns the closing tag literal that ends a drawable body.
    #[must_use]
    pub fn closing_tag(&self) -> String {
        crate::extract::closing_tag(&self.root_element)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from(DEFAULT_ROOT_DIR),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            prefix: DEFAULT_PREFIX.to_string(),
            icon_width: DEFAULT_ICON_SIZE,
            icon_height: DEFAULT_ICON_SIZE,
            marker: DEFAULT_MARKER.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            root_element: DEFAULT_ROOT_ELEMENT.to_string(),
            indent: DEFAULT_INDENT,
            strict: false,
            backup_existing: false,
            dry_run: false,
        }
    }
}

/// Builder for creating a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    root_dir: Option<PathBuf>,
    output_file: Option<PathBuf>,
    prefix: Option<String>,
    icon_width: Option<u32>,
    icon_height: Option<u32>,
    marker: Option<String>,
    extension: Option<String>,
    root_element: Option<String>,
    indent: Option<usize>,
    strict: bool,
    backup_existing: bool,
    dry_run: bool,
}

impl ConfigBuilder {
    /// Sets the root directory to scan.
    #[must_use]
    pub fn root_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(path.into());
        self
    }

    /// Sets the output file path.
    #[must_use]
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Sets the pack prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the width recorded for every icon.
    #[must_use]
    pub fn icon_width(mut self, width: u32) -> Self {
        self.icon_width = Some(width);
        self
    }

    /// Sets the height recorded for every icon.
    #[must_use]
    pub fn icon_height(mut self, height: u32) -> Self {
        self.icon_height = Some(height);
        self
    }

    /// Sets the file-name marker (default `icon-service-`).
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Sets the drawable extension, without the leading dot.
    #[must_use]
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = Some(ext.into());
        self
    }

    /// Sets the root element name (default `svg`).
    #[must_use]
    pub fn root_element(mut self, name: impl Into<String>) -> Self {
        self.root_element = Some(name.into());
        self
    }

    /// Sets the JSON indentation width.
    #[must_use]
    pub fn indent(mut self, spaces: usize) -> Self {
        self.indent = Some(spaces);
        self
    }

    /// Enables strict mode: identifier collisions fail the build.
    #[must_use]
    pub fn strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }

    /// Enables or disables backup creation.
    #[must_use]
    pub fn backup_existing(mut self, enabled: bool) -> Self {
        self.backup_existing = enabled;
        self
    }

    /// Enables dry run mode (no file writes).
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn build(self) -> Result<Config> {
        let defaults = Config::default();
        let config = Config {
            root_dir: self.root_dir.unwrap_or(defaults.root_dir),
            output_file: self.output_file.unwrap_or(defaults.output_file),
            prefix: self.prefix.unwrap_or(defaults.prefix),
            icon_width: self.icon_width.unwrap_or(defaults.icon_width),
            icon_height: self.icon_height.unwrap_or(defaults.icon_height),
            marker: self.marker.unwrap_or(defaults.marker),
            extension: self.extension.unwrap_or(defaults.extension),
            root_element: self.root_element.unwrap_or(defaults.root_element),
            indent: self.indent.unwrap_or(defaults.indent),
            strict: self.strict,
            backup_existing: self.backup_existing,
            dry_run: self.dry_run,
        };

        config.validate()?;
        Ok(config)
    }
}
