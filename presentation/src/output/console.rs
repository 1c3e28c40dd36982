//! Console output for rendered party documents

use colored::Colorize;
use festa_application::RenderPartyOutput;

/// Formats rendered party documents for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// The rendered blocks, unchanged, invitation first
    pub fn format_text(output: &RenderPartyOutput) -> String {
        [output.invitation.as_deref(), output.preferences.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format as JSON
    pub fn format_json(output: &RenderPartyOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }

    /// Banner shown on stderr before rendering
    pub fn header(title: &str) -> String {
        let line = "=".repeat(48);
        format!("{}\n{:^48}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    /// One-line summary of what was rendered
    pub fn summary(output: &RenderPartyOutput) -> String {
        let count = usize::from(output.invitation.is_some()) + usize::from(output.preferences.is_some());
        let host = if output.host_name.is_empty() {
            "unnamed host"
        } else {
            output.host_name.as_str()
        };
        format!(
            "{} {} document(s) for {}",
            "Rendered".green().bold(),
            count,
            host
        )
    }
}
