use crate::domain::model::{SecurityReport, SecurityStatus};
use crate::domain::ports::ReportFormatter;
use std::fmt::Write;

/// Human-readable report, one line per tracked item.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextFormatter;

impl ReportFormatter for PlainTextFormatter {
    fn format(&self, report: &SecurityReport) -> String {
        let mut out = format!("Security Report: {}\n", report.report_name);

        match report.status {
            SecurityStatus::NoItems => {
                out.push_str("Status: NO ITEMS TRACKED\n");
                return out;
            }
            SecurityStatus::Secure => {
                let _ = writeln!(out, "Status: SECURE (all {} items locked)", report.total());
            }
            SecurityStatus::Insecure => {
                let _ = writeln!(
                    out,
                    "Status: INSECURE ({} of {} items unlocked)",
                    report.unlocked_count(),
                    report.total()
                );
            }
        }

        for entry in &report.entries {
            let state = if entry.locked { "locked" } else { "UNLOCKED" };
            let _ = writeln!(out, "  #{} {}: {}", entry.position, entry.kind, state);
        }

        out
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &SecurityReport) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };

        // 序列化失敗時退回純文字報告
        rendered.unwrap_or_else(|e| {
            tracing::warn!("⚠️ JSON report serialization failed: {}", e);
            PlainTextFormatter.format(report)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{LockableKind, ReportEntry};

    fn entries(states: &[(LockableKind, bool)]) -> Vec<ReportEntry> {
        states
            .iter()
            .enumerate()
            .map(|(i, (kind, locked))| ReportEntry {
                position: i + 1,
                kind: *kind,
                locked: *locked,
            })
            .collect()
    }

    #[test]
    fn test_plain_text_empty() {
        let report = SecurityReport::new("Daily Report", vec![]);
        assert_eq!(
            PlainTextFormatter.format(&report),
            "Security Report: Daily Report\nStatus: NO ITEMS TRACKED\n"
        );
    }

    #[test]
    fn test_plain_text_insecure_names_unlocked_items() {
        let report = SecurityReport::new(
            "Daily Report",
            entries(&[(LockableKind::Door, true), (LockableKind::Window, false)]),
        );
        let text = PlainTextFormatter.format(&report);

        assert_eq!(
            text,
            "Security Report: Daily Report\n\
             Status: INSECURE (1 of 2 items unlocked)\n  \
             #1 Door: locked\n  \
             #2 Window: UNLOCKED\n"
        );
    }

    #[test]
    fn test_plain_text_secure() {
        let report = SecurityReport::new("Nightly", entries(&[(LockableKind::Door, true)]));
        assert!(PlainTextFormatter
            .format(&report)
            .contains("Status: SECURE (all 1 items locked)"));
    }

    #[test]
    fn test_json_formatter() {
        let report = SecurityReport::new(
            "Daily Report",
            entries(&[(LockableKind::Window, false)]),
        );
        let json = JsonFormatter::new(false).format(&report);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["report_name"], "Daily Report");
        assert_eq!(value["status"], "insecure");
        assert_eq!(value["entries"][0]["kind"], "Window");
        assert_eq!(value["entries"][0]["locked"], false);

        let parsed: SecurityReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
