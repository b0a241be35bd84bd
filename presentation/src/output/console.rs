//! Console output formatter for quoting and pricing reports

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use quoting_domain::{
    ApplicationStatus, CanonicalStatus, PolicyTypeReport, PricingReport, QuotingReport,
    TaskResult,
};
use rust_decimal::Decimal;

/// Formats run reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete quoting report
    pub fn format_quoting(report: &QuotingReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Quoting Results"));
        output.push('\n');
        output.push_str(&Self::run_line(report));

        for policy in &report.policy_types {
            output.push_str(&Self::section_header(&format!(
                "{} ({})",
                policy.policy_type,
                Self::completion_label(policy)
            )));
            let results: Vec<&TaskResult> = report
                .results
                .iter()
                .filter(|r| r.task.policy_type == policy.policy_type)
                .collect();
            if results.is_empty() {
                output.push_str(&format!("  {}\n", "no carrier was dispatched".dimmed()));
            }
            for result in results {
                output.push_str(&Self::result_line(result));
            }
        }

        if report.notify_partner {
            output.push_str(&format!(
                "\n{} partner notification requested\n",
                "!".yellow().bold()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the best result per policy type
    pub fn format_quoting_summary(report: &QuotingReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Quoting Summary ===".cyan().bold()));
        output.push_str(&Self::run_line(report));
        output.push('\n');

        for policy in &report.policy_types {
            let best = match &policy.best {
                Some(best) if policy.satisfied => format!(
                    "{} {} {}",
                    best.task.insurer_id.bold(),
                    Self::status_label(best.status()),
                    Self::amount(best.amount())
                ),
                Some(best) => format!(
                    "{} (best answer: {} from {})",
                    "no offer".red(),
                    best.status(),
                    best.task.insurer_id
                ),
                None => "no carrier was dispatched".dimmed().to_string(),
            };
            output.push_str(&format!("  {:<10} {}\n", policy.policy_type.to_string(), best));
        }

        output
    }

    /// Format the complete pricing report
    pub fn format_pricing(report: &PricingReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Pricing Indications"));
        output.push('\n');
        output.push_str(&Self::pricing_summary_lines(report));

        output.push_str(&Self::section_header("Carriers"));
        for result in &report.results {
            output.push_str(&Self::result_line(result));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the pricing range only
    pub fn format_pricing_summary(report: &PricingReport) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n\n", "=== Pricing Summary ===".cyan().bold()));
        output.push_str(&Self::pricing_summary_lines(report));
        output
    }

    /// Format any serializable report as JSON
    pub fn format_json<T: serde::Serialize>(report: &T) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn run_line(report: &QuotingReport) -> String {
        format!(
            "{} {}  {} {}  {} {}\n",
            "Application:".cyan().bold(),
            report.application_id,
            "Status:".cyan().bold(),
            Self::application_status_label(report.status),
            "Tiers run:".cyan().bold(),
            report.tiers_run
        )
    }

    fn pricing_summary_lines(report: &PricingReport) -> String {
        let summary = &report.summary;
        let mut output = format!(
            "{} {}\n",
            "Application:".cyan().bold(),
            report.application_id
        );
        match (summary.low_price, summary.high_price, summary.price) {
            (Some(low), Some(high), Some(mean)) => output.push_str(&format!(
                "{} {} to {} (mean {}, {} carriers)\n",
                "Range:".cyan().bold(),
                Self::amount(Some(low)),
                Self::amount(Some(high)),
                Self::amount(Some(mean)),
                summary.priced_count
            )),
            _ => output.push_str(&format!("{}\n", "No pricing available".yellow())),
        }
        if summary.out_of_appetite {
            output.push_str(&format!("  {} some carriers declined the risk\n", "*".yellow()));
        }
        if summary.pricing_error {
            output.push_str(&format!("  {} some carriers failed to answer\n", "*".red()));
        }
        output
    }

    fn result_line(result: &TaskResult) -> String {
        let mut line = format!(
            "  {} {:<14} {:<14} {:>14}  {}\n",
            Self::marker(result),
            result.task.insurer_id,
            Self::status_label(result.status()),
            Self::amount(result.amount()),
            result.task.tier.to_string().dimmed()
        );
        let reasons = result
            .outcome
            .decline_reasons
            .iter()
            .chain(&result.outcome.error_reasons);
        for reason in reasons {
            line.push_str(&format!("      {}\n", reason.dimmed()));
        }
        for artifact in &result.outcome.artifacts {
            line.push_str(&format!("      {} {}\n", "doc".dimmed(), artifact.location));
        }
        line
    }

    fn marker(result: &TaskResult) -> ColoredString {
        if result.satisfies_completion() {
            "v".green()
        } else if result.status().is_failure() {
            "x".red()
        } else {
            "-".yellow()
        }
    }

    fn completion_label(policy: &PolicyTypeReport) -> String {
        match (policy.satisfied, policy.tier_reached) {
            (true, Some(tier)) => format!("complete at {}", tier),
            (true, None) => "complete".to_string(),
            (false, _) => format!("no offer after {} attempts", policy.attempted),
        }
    }

    fn status_label(status: CanonicalStatus) -> ColoredString {
        match status {
            CanonicalStatus::Quoted => status.as_str().green().bold(),
            CanonicalStatus::Referred => status.as_str().cyan(),
            CanonicalStatus::Declined | CanonicalStatus::Autodeclined => status.as_str().yellow(),
            CanonicalStatus::Outage | CanonicalStatus::Error => status.as_str().red(),
        }
    }

    fn application_status_label(status: ApplicationStatus) -> ColoredString {
        match status {
            ApplicationStatus::Quoted => status.as_str().green().bold(),
            ApplicationStatus::QuotingFailed => status.as_str().red().bold(),
            _ => status.as_str().yellow(),
        }
    }

    fn amount(amount: Option<Decimal>) -> String {
        match amount {
            Some(amount) => format!("${}", amount.round_dp(2)),
            None => "-".to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter<QuotingReport> for ConsoleFormatter {
    fn format_full(&self, report: &QuotingReport) -> String {
        Self::format_quoting(report)
    }

    fn format_summary(&self, report: &QuotingReport) -> String {
        Self::format_quoting_summary(report)
    }

    fn format_json(&self, report: &QuotingReport) -> String {
        Self::format_json(report)
    }
}

impl OutputFormatter<PricingReport> for ConsoleFormatter {
    fn format_full(&self, report: &PricingReport) -> String {
        Self::format_pricing(report)
    }

    fn format_summary(&self, report: &PricingReport) -> String {
        Self::format_pricing_summary(report)
    }

    fn format_json(&self, report: &PricingReport) -> String {
        Self::format_json(report)
    }
}
