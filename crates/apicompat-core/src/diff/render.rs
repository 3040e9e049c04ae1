//! Report renderers.

use crate::diff::model::DiffReport;
use crate::errors::{ContractError, ExError, ExErrorKind};
use std::fmt::Write as _;
use std::str::FromStr;

/// Output format of a rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Markdown => "md",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ExError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "md" | "markdown" => Ok(ReportFormat::Markdown),
            other => Err(ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_report_format")
                .with_message(format!(
                    "unknown report format '{}' (expected text, json or md)",
                    other
                ))),
        }
    }
}

/// Render in the requested format.
///
/// # Errors
///
/// `Serialization` if JSON encoding fails.
pub fn render(report: &DiffReport, format: ReportFormat) -> Result<String, ExError> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Markdown => Ok(render_markdown(report)),
        ReportFormat::Json => render_json(report),
    }
}

/// Sections shared by the text and Markdown layouts, in output order
fn sections(report: &DiffReport) -> [(&'static str, &[String]); 4] {
    [
        ("Breaking Changes", report.breaking.as_slice()),
        ("Non-breaking Changes", report.non_breaking.as_slice()),
        ("Removed Endpoints", report.removed_endpoints.as_slice()),
        ("Added Endpoints", report.added_endpoints.as_slice()),
    ]
}

/// Plain-text report.
pub fn render_text(report: &DiffReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "API Contract Diff Results");
    let _ = writeln!(out, "- Breaking changes: {}", report.summary.breaking);
    let _ = writeln!(out, "- Non-breaking changes: {}", report.summary.non_breaking);
    out.push('\n');

    for (title, items) in sections(report) {
        if items.is_empty() {
            continue;
        }
        let _ = writeln!(out, "[{}]", title);
        for item in items {
            let _ = writeln!(out, "  - {}", item);
        }
        out.push('\n');
    }
    finish(out)
}

/// Markdown report.
pub fn render_markdown(report: &DiffReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# API Contract Diff Results");
    let _ = writeln!(out, "- **Breaking changes**: {}", report.summary.breaking);
    let _ = writeln!(
        out,
        "- **Non-breaking changes**: {}",
        report.summary.non_breaking
    );
    out.push('\n');

    for (title, items) in sections(report) {
        if items.is_empty() {
            continue;
        }
        let _ = writeln!(out, "## {}", title);
        for item in items {
            let _ = writeln!(out, "- {}", item);
        }
        out.push('\n');
    }
    finish(out)
}

/// Pretty JSON report, two-space indent, non-ASCII kept as-is.
///
/// # Errors
///
/// `Serialization` if JSON encoding fails.
pub fn render_json(report: &DiffReport) -> Result<String, ExError> {
    serde_json::to_string_pretty(report)
        .map_err(|e| ExError::from(ContractError::from(e)).with_op("render_json"))
}

/// Trim trailing whitespace, end with exactly one newline
fn finish(mut out: String) -> String {
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::Change;

    fn sample() -> DiffReport {
        DiffReport::from_changes(
            &[
                Change::breaking(None, "Removed endpoint: DELETE /a"),
                Change::non_breaking(Some("[Response 200] GET /b"), "Added field: email"),
            ],
            Vec::new(),
            vec!["DELETE /a".to_string()],
        )
    }

    #[test]
    fn test_text_layout() {
        assert_eq!(
            render_text(&sample()),
            "API Contract Diff Results\n\
             - Breaking changes: 1\n\
             - Non-breaking changes: 1\n\
             \n\
             [Breaking Changes]\n  - Removed endpoint: DELETE /a\n\
             \n\
             [Non-breaking Changes]\n  - [Response 200] GET /b Added field: email\n\
             \n\
             [Removed Endpoints]\n  - DELETE /a\n"
        );
    }

    #[test]
    fn test_markdown_layout() {
        assert_eq!(
            render_markdown(&sample()),
            "# API Contract Diff Results\n\
             - **Breaking changes**: 1\n\
             - **Non-breaking changes**: 1\n\
             \n\
             ## Breaking Changes\n- Removed endpoint: DELETE /a\n\
             \n\
             ## Non-breaking Changes\n- [Response 200] GET /b Added field: email\n\
             \n\
             ## Removed Endpoints\n- DELETE /a\n"
        );
    }

    #[test]
    fn test_empty_report_is_header_only() {
        assert_eq!(
            render_text(&DiffReport::default()),
            "API Contract Diff Results\n- Breaking changes: 0\n- Non-breaking changes: 0\n"
        );
    }

    #[test]
    fn test_json_is_pretty_and_keeps_unicode() {
        let report = DiffReport::from_changes(
            &[Change::non_breaking(None, "Added endpoint: GET /café")],
            vec!["GET /café".to_string()],
            Vec::new(),
        );
        let json = render_json(&report).unwrap();
        assert!(json.starts_with("{\n  \"breaking\": [],\n  \"non_breaking\": [\n    \"Added"));
        assert!(json.contains("/café"));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);

        let err = "yaml".parse::<ReportFormat>().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    }
}
