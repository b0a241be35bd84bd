//! Output formatter trait

/// Formats one kind of run report for display
pub trait OutputFormatter<R> {
    /// Everything the run produced
    fn format_full(&self, report: &R) -> String;

    /// Concise view: the headline per policy type
    fn format_summary(&self, report: &R) -> String;

    /// Format as JSON
    fn format_json(&self, report: &R) -> String;
}

/// Render a report in the requested format.
pub fn render<R, F>(formatter: &F, report: &R, format: quoting_domain::OutputFormat) -> String
where
    F: OutputFormatter<R>,
{
    match format {
        quoting_domain::OutputFormat::Full => formatter.format_full(report),
        quoting_domain::OutputFormat::Summary => formatter.format_summary(report),
        quoting_domain::OutputFormat::Json => formatter.format_json(report),
    }
}
