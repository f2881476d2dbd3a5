//! `check` subcommand: report which scaffold directories exist, without writing anything

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use project_setup::layout::ScaffoldLayout;
use project_setup::scaffold::{self, MarkerState, SurveyReport};

use super::rule;

/// Every directory and the marker are in place
pub const EXIT_READY: i32 = 0;
/// Directories or marker missing
pub const EXIT_INCOMPLETE: i32 = 2;

/// Survey `root` and print the result. Returns the process exit code.
pub fn execute(root: &Path, layout: &ScaffoldLayout, json: bool) -> Result<i32> {
    let report = scaffold::survey(root, layout);

    if json {
        let result = serde_json::json!({
            "scaffolded": report.is_scaffolded(),
            "survey": &report,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render(&report));
    }

    Ok(exit_code(&report))
}

pub fn exit_code(report: &SurveyReport) -> i32 {
    if report.is_scaffolded() {
        EXIT_READY
    } else {
        EXIT_INCOMPLETE
    }
}

pub fn render(report: &SurveyReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "PROJECT FOLDER STATUS: {}", report.root.display());
    let _ = writeln!(out, "{}", rule());

    for dir in &report.directories {
        if dir.present {
            let _ = writeln!(out, "{} {}/", "✓".green(), dir.path);
        } else {
            let _ = writeln!(out, "{} {}/ (missing)", "✗".red(), dir.path);
        }
    }

    let marker = match report.marker {
        MarkerState::Matches => format!("{} marker in place", "✓".green()),
        MarkerState::Differs => format!("{} marker present (content edited)", "⚠".yellow()),
        MarkerState::Missing => format!("{} marker missing", "✗".red()),
    };
    let _ = writeln!(out, "{}", marker);

    let summary = if report.is_scaffolded() {
        "✅ Folder structure complete".green().to_string()
    } else {
        format!(
            "{} ({} director{} missing) - run setup-folders first",
            "❌ Structure incomplete".red(),
            report.missing_directories().count(),
            if report.missing_directories().count() == 1 { "y" } else { "ies" }
        )
    };
    let _ = writeln!(out, "\n{}", summary);
    out
}
