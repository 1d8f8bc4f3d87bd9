use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};

/// Matches drawable file names of the form `<digits>-<marker><service>.<ext>`.
///
/// Matching is case-insensitive. The captured service name is returned
/// verbatim, before slugification.
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
}

impl NamePattern {
    /// Compiles a pattern for the given marker and extension.
    ///
    /// Both are matched literally; the extension is given without a dot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the resulting expression does not
    /// compile.
    pub fn new(marker: &str, extension: &str) -> Result<Self> {
        let pattern = format!(
            r"^([0-9]+)-{}(.*)\.{}$",
            regex::escape(marker),
            regex::escape(extension)
        );

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::invalid_pattern(&pattern, e.to_string()))?;

        Ok(Self { regex })
    }

    /// Returns the raw service name captured from `file_name`, if it matches.
    #[must_use]
    pub fn service_name<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        self.regex
            .captures(file_name)
            .and_then(|caps| caps.get(2))
            .map(|m| m.as_str())
    }
}
