//! Default command: scaffold the folder structure and print next steps

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use project_setup::layout::ScaffoldLayout;
use project_setup::scaffold::{self, DirectoryStatus, ScaffoldReport};

use super::rule;

pub fn execute(root: &Path, layout: &ScaffoldLayout, json: bool) -> Result<()> {
    let report = scaffold::create_structure(root, layout)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render(&report, layout));
    }
    Ok(())
}

/// Banner, progress lines, success banner and next-step guidance for a finished run
pub fn render(report: &ScaffoldReport, layout: &ScaffoldLayout) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "CREATING PROJECT FOLDER STRUCTURE");
    let _ = writeln!(out, "{}", rule());

    for dir in &report.directories {
        match dir.status {
            DirectoryStatus::Created => {
                let _ = writeln!(out, "{} Created: {}/", "✓".green(), dir.path);
            }
            DirectoryStatus::AlreadyPresent => {
                let _ = writeln!(out, "{} Exists:  {}/", "•".dimmed(), dir.path);
            }
        }
    }
    let verb = if report.marker.replaced { "Rewrote:" } else { "Created:" };
    let _ = writeln!(out, "{} {} {}", "✓".green(), verb, report.marker.path);

    let _ = writeln!(out, "\n{}", rule());
    let _ = writeln!(out, "{}", "✅ FOLDER STRUCTURE CREATED SUCCESSFULLY!".bold());
    let _ = writeln!(out, "{}", rule());

    out.push_str(&render_next_steps(layout));
    let _ = writeln!(out, "{}", rule());
    out
}

fn render_next_steps(layout: &ScaffoldLayout) -> String {
    let mut out = String::new();
    if layout.expected_inputs.is_empty() && layout.follow_up.is_empty() {
        return out;
    }

    let _ = writeln!(out, "\nNext steps:");
    let mut step = 1;
    for input in &layout.expected_inputs {
        if step > 1 {
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "{}. Place your {} {} in: {}/",
            step,
            input.files.len(),
            input.label,
            input.directory
        );
        for file in &input.files {
            let _ = writeln!(out, "   - {}", file);
        }
        step += 1;
    }
    for (i, command) in layout.follow_up.iter().enumerate() {
        if i == 0 && step > 1 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}. Run: {}", step, command.cyan());
        step += 1;
    }
    out
}
