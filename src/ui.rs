//! User-facing output.
//!
//! Formatting is kept in pure `format_*` functions so it can be tested;
//! the `display_*` functions only print.

use console::style;

use crate::config::{ChangelogConfig, Mode};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Lines describing a validated configuration, without styling.
pub fn format_config_summary(config: &ChangelogConfig) -> Vec<String> {
    let mut lines = vec![format!("Configuration valid for {}", config.slug())];

    match config.mode() {
        Mode::Version {
            version,
            end,
            single_release_branch,
        } => {
            lines.push(format!("Version mode: release {}", version));
            if let Some(end) = end {
                lines.push(format!("Stopping at commit {}", end));
            }
            match single_release_branch {
                Some(branch) => lines.push(format!("Single release branch: {}", branch)),
                None => lines.push("Using release branches".to_string()),
            }
        }
        Mode::Commit { from, branch } => {
            lines.push(format!("Commit mode: from {} on branch '{}'", from, branch));
        }
    }

    lines
}

/// Print the summary of a validated configuration.
pub fn display_config_summary(config: &ChangelogConfig) {
    let mut lines = format_config_summary(config).into_iter();
    if let Some(headline) = lines.next() {
        display_success(&headline);
    }
    for line in lines {
        display_status(&line);
    }
}
