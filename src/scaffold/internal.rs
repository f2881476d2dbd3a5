//! Internal implementation for the scaffold module

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{FilesystemError, FsOperation, ScaffoldError};
use crate::layout::ScaffoldLayout;

// =============================================================================
// Report Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryStatus {
    Created,
    AlreadyPresent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryOutcome {
    pub path: String,
    pub status: DirectoryStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerOutcome {
    pub path: String,
    /// A file already existed at the marker path and was overwritten
    pub replaced: bool,
}

/// Result of a successful [`create_structure`] run
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    /// One entry per layout directory, in layout order
    pub directories: Vec<DirectoryOutcome>,
    pub marker: MarkerOutcome,
}

impl ScaffoldReport {
    pub fn created_count(&self) -> usize {
        self.directories
            .iter()
            .filter(|d| d.status == DirectoryStatus::Created)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryState {
    pub path: String,
    pub present: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerState {
    Missing,
    Matches,
    Differs,
}

/// Read-only snapshot of how far a root is from the layout
#[derive(Debug, Clone, Serialize)]
pub struct SurveyReport {
    pub root: PathBuf,
    pub directories: Vec<DirectoryState>,
    pub marker: MarkerState,
}

impl SurveyReport {
    /// Every directory exists and the marker is present
    pub fn is_scaffolded(&self) -> bool {
        self.directories.iter().all(|d| d.present) && self.marker != MarkerState::Missing
    }

    pub fn missing_directories(&self) -> impl Iterator<Item = &DirectoryState> {
        self.directories.iter().filter(|d| !d.present)
    }
}

// =============================================================================
// Scaffolding
// =============================================================================

pub fn create_structure(
    root: &Path,
    layout: &ScaffoldLayout,
) -> Result<ScaffoldReport, ScaffoldError> {
    layout.validate()?;

    let mut directories = Vec::with_capacity(layout.directories.len());

    for dir in &layout.directories {
        let target = root.join(dir);
        let existed = target.is_dir();

        fs::create_dir_all(&target)
            .map_err(|e| FilesystemError::new(FsOperation::CreateDir, dir, e))?;

        let status = if existed {
            DirectoryStatus::AlreadyPresent
        } else {
            DirectoryStatus::Created
        };
        debug!(path = %dir, ?status, "ensured directory");

        directories.push(DirectoryOutcome {
            path: dir.clone(),
            status,
        });
    }

    let marker_path = root.join(&layout.marker.path);
    let replaced = marker_path.is_file();
    fs::write(&marker_path, &layout.marker.content)
        .map_err(|e| FilesystemError::new(FsOperation::WriteFile, &layout.marker.path, e))?;
    debug!(path = %layout.marker.path, replaced, "wrote marker");

    let report = ScaffoldReport {
        root: root.to_path_buf(),
        directories,
        marker: MarkerOutcome {
            path: layout.marker.path.clone(),
            replaced,
        },
    };

    info!(
        root = %root.display(),
        created = report.created_count(),
        total = report.directories.len(),
        "scaffold complete"
    );

    Ok(report)
}

// =============================================================================
// Survey
// =============================================================================

pub fn survey(root: &Path, layout: &ScaffoldLayout) -> SurveyReport {
    let directories = layout
        .directories
        .iter()
        .map(|dir| DirectoryState {
            path: dir.clone(),
            present: root.join(dir).is_dir(),
        })
        .collect();

    let marker = match fs::read_to_string(root.join(&layout.marker.path)) {
        Ok(content) if content == layout.marker.content => MarkerState::Matches,
        Ok(_) => MarkerState::Differs,
        Err(e) => {
            debug!(path = %layout.marker.path, error = %e, "marker unreadable");
            MarkerState::Missing
        }
    };

    SurveyReport {
        root: root.to_path_buf(),
        directories,
        marker,
    }
}
