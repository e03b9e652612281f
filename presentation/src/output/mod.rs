//! Console output formatting

use colored::Colorize;
use docroom_domain::{HealthReport, Participant, ParticipantId, SessionPhase, SessionState};

/// Renders application state for the console.
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Health report as pretty-printed JSON (the operator wire shape).
    pub fn format_health(report: &HealthReport) -> String {
        // The report's Serialize impl is infallible for this shape
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// One human line per bootstrap outcome, with a retry hint on failure.
    pub fn format_session(room: &str, state: &SessionState) -> String {
        match state.phase() {
            SessionPhase::Authenticated => {
                format!("{} joined room {}", "ok".green().bold(), room)
            }
            SessionPhase::Failed => {
                let message = state
                    .error_message()
                    .unwrap_or("Authentication failed.");
                format!(
                    "{} {}\n{}",
                    "error:".red().bold(),
                    message,
                    "Run the same command again to retry.".dimmed()
                )
            }
            phase => format!("session is {phase}"),
        }
    }

    pub fn format_participants(participants: &[Participant]) -> String {
        participants
            .iter()
            .map(|p| format!("{}  {}", p.id, p.display_name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn format_mention_candidates(ids: &[ParticipantId]) -> String {
        ids.iter()
            .map(ParticipantId::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
