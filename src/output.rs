//! Output formatting for human and JSON modes
//!
//! The binary prints a short run summary after the report is written; this
//! module renders it either as human-readable text or machine-parseable
//! JSON.

use colored::Colorize as _;

use crate::pipeline::RunOutcome;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

impl RunOutcome {
    /// Render the outcome based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Report written to {}", self.report_path.display());
        println!(
            "{} artifact(s) processed, {} skipped",
            self.processed, self.skipped
        );

        if self.diagnostics.is_empty() && self.walk_diagnostics.is_empty() {
            println!("{}", "No diagnostics.".green());
        } else {
            println!("{}", "Diagnostics:".yellow());
            for diagnostic in self.diagnostics.iter().chain(&self.walk_diagnostics) {
                println!("  {}: {}", diagnostic.path.display(), diagnostic.message);
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
