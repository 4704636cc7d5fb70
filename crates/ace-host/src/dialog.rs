//! File dialog requests and their results
//!
//! A dialog either returns a [`DialogSelection`] or is cancelled. Cancellation
//! is represented as `None` by callers and is not an error.

use std::path::{Path, PathBuf};

/// Named extension filter, e.g. `XML files: [xml]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

impl DialogFilter {
    pub fn new(name: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed == "*" || allowed.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}

/// What an open-file dialog is allowed to return
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenDialogOptions {
    pub title: Option<String>,
    pub filters: Vec<DialogFilter>,
    pub multiple: bool,
    pub directory: bool,
    pub default_path: Option<PathBuf>,
}

impl OpenDialogOptions {
    /// Pick a single existing directory
    pub fn directory() -> Self {
        Self {
            directory: true,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_filter(mut self, filter: DialogFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn with_default_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_path = Some(path.into());
        self
    }

    /// Check one path against directory mode and the extension filters
    pub fn accepts(&self, path: &Path) -> Result<(), String> {
        if self.directory {
            if !path.is_dir() {
                return Err(format!("Not a directory: {}", path.display()));
            }
            return Ok(());
        }

        if self.filters.is_empty() || self.filters.iter().any(|f| f.matches(path)) {
            Ok(())
        } else {
            let allowed: Vec<_> = self
                .filters
                .iter()
                .flat_map(|f| f.extensions.iter().map(String::as_str))
                .collect();
            Err(format!(
                "{} does not match {}",
                path.display(),
                allowed.join(", ")
            ))
        }
    }

    /// Parse and validate what the user typed into a dialog prompt.
    ///
    /// Several paths are separated by `;` and are only allowed when
    /// `multiple` is set.
    pub fn parse_input(&self, input: &str) -> Result<DialogSelection, String> {
        let paths: Vec<PathBuf> = input
            .split(';')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .collect();

        match paths.len() {
            0 => Err("Enter a path".to_string()),
            1 => {
                let path = paths.into_iter().next().unwrap_or_default();
                self.accepts(&path)?;
                Ok(DialogSelection::Single(path))
            }
            _ if !self.multiple => Err("Only one path may be selected".to_string()),
            _ => {
                for path in &paths {
                    self.accepts(path)?;
                }
                Ok(DialogSelection::Multiple(paths))
            }
        }
    }
}

/// Result of a non-cancelled dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogSelection {
    Single(PathBuf),
    Multiple(Vec<PathBuf>),
}

impl DialogSelection {
    /// The selected path when exactly one was returned
    pub fn single(&self) -> Option<&Path> {
        match self {
            DialogSelection::Single(path) => Some(path),
            DialogSelection::Multiple(_) => None,
        }
    }

    pub fn paths(&self) -> Vec<&Path> {
        match self {
            DialogSelection::Single(path) => vec![path.as_path()],
            DialogSelection::Multiple(paths) => paths.iter().map(PathBuf::as_path).collect(),
        }
    }
}
