pub mod error;
pub mod layout;
pub mod scaffold;

// Re-export commonly used types
pub use error::{FilesystemError, LayoutError, ScaffoldError};
pub use layout::ScaffoldLayout;
pub use scaffold::{create_structure, survey, ScaffoldReport, SurveyReport};
