use dns_status_domain::{AggregateReport, Outcome, OutcomeKind, ReportEntry};

const OK: &str = "✅";
const FAIL: &str = "❌";

/// Renders reports as the plain-text, line-oriented output of each command.
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn lookup(report: &AggregateReport) -> String {
        if let Some(message) = Self::rejected_input(report) {
            return message;
        }

        let domain = &report.descriptor.target;
        let record_type = report.descriptor.record_type();
        let mut lines = vec![format!(
            "DNS lookup for {domain} ({record_type} records):"
        )];

        if let [entry] = report.entries.as_slice() {
            match &entry.outcome {
                Outcome::Success { records, .. } => {
                    lines.extend(records.iter().map(|r| format!("- {r}")));
                }
                _ => lines.push(format!("{FAIL} {}", Self::lookup_failure(report, entry))),
            }
            return lines.join("\n");
        }

        lines.extend(report.entries.iter().map(|entry| match &entry.outcome {
            Outcome::Success { records, .. } => {
                format!("{OK} {}: {}", entry.target.label, records.join(", "))
            }
            _ => format!(
                "{FAIL} {}: {}",
                entry.target.label,
                Self::lookup_failure(report, entry)
            ),
        }));
        Self::push_no_nameservers(report, &mut lines);
        lines.join("\n")
    }

    pub fn reverse(report: &AggregateReport) -> String {
        if let Some(message) = Self::rejected_input(report) {
            return message;
        }

        let ip = &report.descriptor.target;
        if let [entry] = report.entries.as_slice() {
            return match &entry.outcome {
                Outcome::Success { records, .. } => {
                    format!("Reverse DNS for {ip}: {}", records.join(", "))
                }
                Outcome::NoData | Outcome::NameNotFound => {
                    format!("No reverse DNS record found for {ip}")
                }
                other => format!(
                    "Error performing reverse lookup: {}",
                    Self::cause(other, entry)
                ),
            };
        }

        let mut lines = vec![format!("Reverse DNS for {ip}:")];
        lines.extend(report.entries.iter().map(|entry| match &entry.outcome {
            Outcome::Success { records, .. } => {
                format!("{OK} {}: {}", entry.target.label, records.join(", "))
            }
            Outcome::NoData | Outcome::NameNotFound => {
                format!("{FAIL} {}: No reverse DNS record found", entry.target.label)
            }
            other => format!(
                "{FAIL} {}: Error - {}",
                entry.target.label,
                Self::cause(other, entry)
            ),
        }));
        Self::push_no_nameservers(report, &mut lines);
        lines.join("\n")
    }

    pub fn health(report: &AggregateReport) -> String {
        if let Some(message) = Self::rejected_input(report) {
            return message;
        }

        let mut lines: Vec<String> = report
            .entries
            .iter()
            .map(|entry| match &entry.outcome {
                Outcome::Success { latency_ms, .. } => format!(
                    "{OK} DNS server {} is responding (response time: {latency_ms:.2}ms)",
                    entry.target.label
                ),
                other => format!(
                    "{FAIL} DNS server {} failed: {}",
                    entry.target.label,
                    Self::cause(other, entry)
                ),
            })
            .collect();
        Self::push_no_nameservers(report, &mut lines);
        lines.join("\n")
    }

    pub fn propagation(report: &AggregateReport) -> String {
        if let Some(message) = Self::rejected_input(report) {
            return message;
        }

        let domain = &report.descriptor.target;
        let record_type = report.descriptor.record_type();
        let mut lines = vec![format!(
            "DNS propagation check for {domain} ({record_type} records):"
        )];

        lines.extend(report.entries.iter().map(|entry| match &entry.outcome {
            Outcome::Success { records, .. } => {
                format!("{OK} {}: {}", entry.target.label, records.join(", "))
            }
            other => format!(
                "{FAIL} {}: Error - {}",
                entry.target.label,
                Self::cause(other, entry)
            ),
        }));

        if report.is_empty() {
            Self::push_no_nameservers(report, &mut lines);
        } else {
            lines.push(format!(
                "{}/{} nameservers answered; {} distinct answer set(s)",
                report.success_count(),
                report.len(),
                report.distinct_answer_sets()
            ));
        }
        lines.join("\n")
    }

    /// Short human-readable cause for a non-success outcome.
    pub fn cause(outcome: &Outcome, entry: &ReportEntry) -> String {
        match outcome {
            Outcome::Success { .. } => "ok".to_string(),
            Outcome::NoData => "No records found".to_string(),
            Outcome::NameNotFound => "Domain does not exist".to_string(),
            Outcome::Timeout => format!("Timed out after {:.0}ms", entry.elapsed_ms),
            Outcome::InvalidInput { message } | Outcome::TransportError { message } => {
                message.clone()
            }
        }
    }

    fn lookup_failure(report: &AggregateReport, entry: &ReportEntry) -> String {
        let domain = &report.descriptor.target;
        match &entry.outcome {
            Outcome::NoData => format!(
                "No {} records found for {domain}",
                report.descriptor.record_type()
            ),
            Outcome::NameNotFound => format!("Domain {domain} does not exist"),
            Outcome::Timeout => Self::cause(&entry.outcome, entry),
            other => format!("Error - {}", Self::cause(other, entry)),
        }
    }

    /// Input errors are identical for every target, so they are shown once.
    fn rejected_input(report: &AggregateReport) -> Option<String> {
        let first = report.entries.first()?;
        let all_rejected = report
            .entries
            .iter()
            .all(|e| e.outcome.kind() == OutcomeKind::InvalidInput);

        match &first.outcome {
            Outcome::InvalidInput { message } if all_rejected => Some(message.clone()),
            _ => None,
        }
    }

    fn push_no_nameservers(report: &AggregateReport, lines: &mut Vec<String>) {
        if report.is_empty() {
            lines.push("No nameservers available".to_string());
        }
    }
}
