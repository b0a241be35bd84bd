//! Progress reporting for quoting runs

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use quoting_application::QuotingProgress;
use quoting_domain::{PolicyType, TaskResult, Tier};
use std::sync::Mutex;

/// Reports progress during a quoting run with one progress bar per tier
pub struct ProgressReporter {
    multi: MultiProgress,
    tier_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            tier_bar: Mutex::new(None),
        }
    }

    fn tier_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn tier_display_name(tier: Tier) -> String {
        format!("Tier {}", tier.level())
    }

    fn completed_list(newly_completed: &[PolicyType]) -> String {
        newly_completed
            .iter()
            .map(|pt| pt.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotingProgress for ProgressReporter {
    fn on_tier_start(&self, tier: Tier, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::tier_style());
        pb.set_prefix(Self::tier_display_name(tier));
        pb.set_message("Dispatching...");

        if let Ok(mut bar) = self.tier_bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_task_complete(&self, result: &TaskResult) {
        if let Ok(bar) = self.tier_bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let marker = if result.satisfies_completion() {
                "v".green()
            } else if result.status().is_failure() {
                "x".red()
            } else {
                "-".yellow()
            };
            pb.set_message(format!("{} {} {}", marker, result.task.id(), result.status()));
            pb.inc(1);
        }
    }

    fn on_tier_complete(&self, tier: Tier, newly_completed: &[PolicyType]) {
        if let Ok(mut bar) = self.tier_bar.lock()
            && let Some(pb) = bar.take()
        {
            let name = Self::tier_display_name(tier);
            if newly_completed.is_empty() {
                pb.finish_with_message(format!("{} done", name.yellow()));
            } else {
                pb.finish_with_message(format!(
                    "{} done, completed {}",
                    name.green(),
                    Self::completed_list(newly_completed)
                ));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl QuotingProgress for SimpleProgress {
    fn on_tier_start(&self, tier: Tier, total_tasks: usize) {
        println!(
            "{} {} ({} tasks)",
            "->".cyan(),
            ProgressReporter::tier_display_name(tier).bold(),
            total_tasks
        );
    }

    fn on_task_complete(&self, result: &TaskResult) {
        if result.satisfies_completion() {
            println!("  {} {} {}", "v".green(), result.task.id(), result.status());
        } else if result.status().is_failure() {
            println!("  {} {} {} (failed)", "x".red(), result.task.id(), result.status());
        } else {
            println!("  {} {} {}", "-".yellow(), result.task.id(), result.status());
        }
    }

    fn on_tier_complete(&self, _tier: Tier, newly_completed: &[PolicyType]) {
        if !newly_completed.is_empty() {
            println!(
                "  {} {}",
                "completed:".green(),
                ProgressReporter::completed_list(newly_completed)
            );
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoting_domain::{AdapterTask, QuoteOutcome};
    use rust_decimal::Decimal;

    #[test]
    fn test_reporter_handles_a_full_tier() {
        let reporter = ProgressReporter::new();
        let tier = Tier::FIRST;
        let result = TaskResult::new(
            AdapterTask::new("hartwell", "hartwell", PolicyType::Gl, tier),
            QuoteOutcome::quoted(Decimal::from(500)),
        );

        reporter.on_tier_start(tier, 1);
        reporter.on_task_complete(&result);
        reporter.on_tier_complete(tier, &[PolicyType::Gl]);

        assert!(reporter.tier_bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_task_complete_without_tier_is_ignored() {
        let reporter = ProgressReporter::new();
        let result = TaskResult::new(
            AdapterTask::new("ridge", "ridge", PolicyType::Wc, Tier::FIRST),
            QuoteOutcome::error("timeout"),
        );
        reporter.on_task_complete(&result);
        reporter.on_tier_complete(Tier::FIRST, &[]);
    }

    #[test]
    fn test_completed_list() {
        assert_eq!(
            ProgressReporter::completed_list(&[PolicyType::Gl, PolicyType::Wc]),
            "GL, WC"
        );
    }
}
