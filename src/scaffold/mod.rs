//! Folder scaffolder - realizes a [`ScaffoldLayout`] on disk
//!
//! This module follows the dependable-rust pattern:
//! - Public interface (this file): clean API for scaffolding operations
//! - Internal implementation: all logic in internal.rs
//!
//! The core never prints. It returns a structured report and leaves
//! console rendering to the caller.
//!
//! # Example
//!
//! ```no_run
//! use project_setup::layout::ScaffoldLayout;
//! use project_setup::scaffold;
//! use std::path::Path;
//!
//! let layout = ScaffoldLayout::default();
//! let report = scaffold::create_structure(Path::new("."), &layout)?;
//! println!("{} directories created", report.created_count());
//!
//! let survey = scaffold::survey(Path::new("."), &layout);
//! assert!(survey.is_scaffolded());
//! # Ok::<(), project_setup::error::ScaffoldError>(())
//! ```

mod internal;

use std::path::Path;

use crate::error::ScaffoldError;
use crate::layout::ScaffoldLayout;

pub use internal::{
    DirectoryOutcome, DirectoryState, DirectoryStatus, MarkerOutcome, MarkerState,
    ScaffoldReport, SurveyReport,
};

/// Ensure every layout directory exists, then (re)write the marker file
///
/// Directories are handled in list order, creating missing ancestors.
/// Existing directories are a no-op, so running twice is safe. The marker
/// is overwritten unconditionally.
///
/// # Errors
///
/// The layout is validated first; a rejected layout returns
/// [`ScaffoldError::Layout`] before anything is written. After that, the
/// first directory or file step that fails aborts the run with
/// [`ScaffoldError::Filesystem`] naming the layout-relative path. Nothing
/// already created is rolled back; rerunning after fixing the cause
/// completes it.
pub fn create_structure(
    root: &Path,
    layout: &ScaffoldLayout,
) -> Result<ScaffoldReport, ScaffoldError> {
    internal::create_structure(root, layout)
}

/// Inspect `root` against the layout without touching the filesystem
pub fn survey(root: &Path, layout: &ScaffoldLayout) -> SurveyReport {
    internal::survey(root, layout)
}
