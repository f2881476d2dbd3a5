//! Single source of truth for the scaffolded filesystem layout.
//!
//! This module defines WHAT gets created. It has no I/O. The scaffolder
//! receives a [`ScaffoldLayout`] and never consults a global list, so tests
//! can hand it a reduced layout. The binary always uses the built-in default.
//!
//! # Default Layout (relative to the scaffold root)
//!
//! ```text
//! ./
//! ├── data/
//! │   ├── raw/
//! │   └── processed/
//! ├── images/
//! │   ├── original/           # neutral_1.jpg, smiling_1.jpg, surprised_1.jpg
//! │   └── augmented/
//! ├── audio/
//! │   ├── original/           # yes_approve.wav, confirm_transaction.wav
//! │   └── augmented/
//! ├── outputs/
//! │   ├── plots/
//! │   └── logs/
//! ├── notebooks/
//! └── scripts/
//!     └── __init__.py         # marker, always rewritten
//! ```
//!
//! # TOML Form
//!
//! Reduced layouts can be written as TOML and parsed with
//! [`ScaffoldLayout::from_toml_str`]:
//!
//! ```toml
//! directories = ["data/raw", "scripts"]
//! follow_up = ["python scripts/run_all.py"]
//!
//! [marker]
//! path = "scripts/__init__.py"
//! content = "# Scripts module\n"
//!
//! [[expected_inputs]]
//! directory = "data/raw"
//! label = "CSV files"
//! files = ["train.csv"]
//! ```

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

// =============================================================================
// Defaults
// =============================================================================

const DEFAULT_DIRECTORIES: &[&str] = &[
    "data/raw",
    "data/processed",
    "images/original",
    "images/augmented",
    "audio/original",
    "audio/augmented",
    "outputs/plots",
    "outputs/logs",
    "notebooks",
    "scripts",
];

const DEFAULT_MARKER_PATH: &str = "scripts/__init__.py";
const DEFAULT_MARKER_CONTENT: &str = "# Scripts module\n";

// =============================================================================
// Types
// =============================================================================

/// Directories to ensure, the marker to write, and the guidance shown afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldLayout {
    /// Relative directory paths, forward-slash separated, in display order
    pub directories: Vec<String>,
    /// Commands suggested once inputs are in place
    #[serde(default)]
    pub follow_up: Vec<String>,
    /// Placeholder file written after all directories exist
    pub marker: MarkerFile,
    /// Files the operator is expected to drop in by hand
    #[serde(default)]
    pub expected_inputs: Vec<ExpectedInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerFile {
    pub path: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedInput {
    pub directory: String,
    /// Plural noun used in guidance, e.g. "images"
    pub label: String,
    pub files: Vec<String>,
}

impl Default for ScaffoldLayout {
    fn default() -> Self {
        Self {
            directories: DEFAULT_DIRECTORIES.iter().map(|d| d.to_string()).collect(),
            follow_up: vec![
                "pip install -r requirements.txt".to_string(),
                "python scripts/run_all.py".to_string(),
            ],
            marker: MarkerFile {
                path: DEFAULT_MARKER_PATH.to_string(),
                content: DEFAULT_MARKER_CONTENT.to_string(),
            },
            expected_inputs: vec![
                ExpectedInput {
                    directory: "images/original".to_string(),
                    label: "images".to_string(),
                    files: vec![
                        "neutral_1.jpg".to_string(),
                        "smiling_1.jpg".to_string(),
                        "surprised_1.jpg".to_string(),
                    ],
                },
                ExpectedInput {
                    directory: "audio/original".to_string(),
                    label: "audio files".to_string(),
                    files: vec![
                        "yes_approve.wav".to_string(),
                        "confirm_transaction.wav".to_string(),
                    ],
                },
            ],
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

impl ScaffoldLayout {
    /// Parse, normalize and validate a TOML layout
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let layout: ScaffoldLayout =
            toml::from_str(contents).context("Failed to parse layout TOML")?;
        let layout = layout.normalized();
        layout.validate()?;
        Ok(layout)
    }

    /// Strip trailing slashes so `notebooks/` and `notebooks` compare equal
    pub fn normalized(mut self) -> Self {
        for dir in &mut self.directories {
            *dir = trim_trailing_slashes(dir);
        }
        self.marker.path = trim_trailing_slashes(&self.marker.path);
        for input in &mut self.expected_inputs {
            input.directory = trim_trailing_slashes(&input.directory);
        }
        self
    }

    // =========================================================================
    // Validation
    // =========================================================================

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.directories.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut seen = HashSet::new();
        for dir in &self.directories {
            check_relative(dir)?;
            if !seen.insert(dir.as_str()) {
                return Err(LayoutError::Duplicate(dir.clone()));
            }
        }

        check_relative(&self.marker.path)?;
        if self.covers(&self.marker.path) {
            return Err(LayoutError::MarkerCollides(self.marker.path.clone()));
        }
        match self.marker.path.rsplit_once('/') {
            Some((parent, _)) if self.covers(parent) => {}
            Some(_) => {
                return Err(LayoutError::Uncovered {
                    path: self.marker.path.clone(),
                })
            }
            None => {
                return Err(LayoutError::InvalidPath {
                    path: self.marker.path.clone(),
                    reason: "marker must live inside a scaffolded directory",
                })
            }
        }

        for input in &self.expected_inputs {
            check_relative(&input.directory)?;
            if !self.covers(&input.directory) {
                return Err(LayoutError::Uncovered {
                    path: input.directory.clone(),
                });
            }
            for file in &input.files {
                if file.is_empty()
                    || file == "."
                    || file == ".."
                    || file.contains('/')
                    || file.contains('\\')
                {
                    return Err(LayoutError::InvalidPath {
                        path: file.clone(),
                        reason: "expected input must be a bare file name",
                    });
                }
            }
        }

        Ok(())
    }

    /// True when `dir` is a listed directory or an ancestor of one
    pub fn covers(&self, dir: &str) -> bool {
        self.directories.iter().any(|d| Path::new(d).starts_with(dir))
    }
}

fn trim_trailing_slashes(path: &str) -> String {
    path.trim_end_matches('/').to_string()
}

fn check_relative(path: &str) -> Result<(), LayoutError> {
    let invalid = |reason| LayoutError::InvalidPath {
        path: path.to_string(),
        reason,
    };

    if path.is_empty() {
        return Err(invalid("must not be empty"));
    }
    if path.starts_with('/') || Path::new(path).is_absolute() {
        return Err(invalid("must be relative"));
    }
    if path.contains('\\') {
        return Err(invalid("must use forward-slash separators"));
    }
    if path
        .split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        return Err(invalid("must not contain empty, `.` or `..` segments"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = ScaffoldLayout::default();
        assert_eq!(layout.directories.len(), 10);
        assert_eq!(layout.directories[0], "data/raw");
        assert_eq!(layout.directories[9], "scripts");
        assert_eq!(layout.marker.path, "scripts/__init__.py");
        assert_eq!(layout.marker.content, "# Scripts module\n");
        assert_eq!(layout.expected_inputs[0].files.len(), 3);
        assert_eq!(layout.expected_inputs[1].files.len(), 2);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_covers_ancestors_not_prefixes() {
        let layout = ScaffoldLayout::default();
        assert!(layout.covers("data"));
        assert!(layout.covers("data/raw"));
        assert!(layout.covers("scripts"));
        assert!(!layout.covers("dat"));
        assert!(!layout.covers("data/raw/extra"));
    }

    #[test]
    fn test_from_toml_minimal() {
        let layout = ScaffoldLayout::from_toml_str(
            r#"
directories = ["work/", "work/tmp"]

[marker]
path = "work/README"
content = "scratch\n"
"#,
        )
        .unwrap();
        assert_eq!(layout.directories, vec!["work", "work/tmp"]);
        assert!(layout.expected_inputs.is_empty());
        assert!(layout.follow_up.is_empty());
    }

    #[test]
    fn test_toml_roundtrip_of_default() {
        let toml_str = toml::to_string_pretty(&ScaffoldLayout::default()).unwrap();
        assert!(toml_str.contains("[marker]"));
        assert!(toml_str.contains("[[expected_inputs]]"));
        let parsed = ScaffoldLayout::from_toml_str(&toml_str).unwrap();
        assert_eq!(parsed, ScaffoldLayout::default());
    }

    #[test]
    fn test_rejects_bad_paths() {
        for bad in ["/etc", "data/../etc", "a//b", "./data", "data\\raw", ""] {
            let mut layout = ScaffoldLayout::default();
            layout.directories.push(bad.to_string());
            assert!(
                matches!(layout.validate(), Err(LayoutError::InvalidPath { .. })),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_rejects_duplicates_and_empty() {
        let mut layout = ScaffoldLayout::default();
        layout.directories.push("notebooks".to_string());
        assert_eq!(
            layout.validate(),
            Err(LayoutError::Duplicate("notebooks".to_string()))
        );

        layout.directories.clear();
        assert_eq!(layout.validate(), Err(LayoutError::Empty));
    }

    #[test]
    fn test_rejects_uncovered_marker_and_inputs() {
        let mut layout = ScaffoldLayout::default();
        layout.marker.path = "lib/__init__.py".to_string();
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::Uncovered { .. })
        ));

        let mut layout = ScaffoldLayout::default();
        layout.marker.path = "__init__.py".to_string();
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::InvalidPath { .. })
        ));

        let mut layout = ScaffoldLayout::default();
        layout.expected_inputs[0].directory = "videos/original".to_string();
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::Uncovered { .. })
        ));

        let mut layout = ScaffoldLayout::default();
        layout.expected_inputs[0].files.push("nested/file.jpg".to_string());
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_rejects_marker_on_directory_path() {
        let layout = ScaffoldLayout::from_toml_str(
            r#"
directories = ["a", "a/m/x"]

[marker]
path = "a/m"
content = ""
"#,
        );
        let err = layout.unwrap_err();
        assert_eq!(
            err.downcast_ref::<LayoutError>(),
            Some(&LayoutError::MarkerCollides("a/m".to_string()))
        );

        let mut layout = ScaffoldLayout::default();
        layout.marker.path = "data/raw".to_string();
        assert_eq!(
            layout.validate(),
            Err(LayoutError::MarkerCollides("data/raw".to_string()))
        );
    }
}
