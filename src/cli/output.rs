//! Output formatting for design-preflight.
//!
//! Provides terminal, JSON, and JUnit XML output formatters.
//!
//! All formatters produce valid output for any AuditReport, including an
//! empty one. No function in this module will panic.

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::engine::result::{AuditReport, ComparisonResult, ResultSummary};
use crate::status::PlatformStatus;
use crate::validation::ContrastResult;
use crate::{CheckCategory, CheckResult};

const RULE: &str = "--------------------------------------------------------------------------------";

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format an audit report into a string
    fn format(&self, report: &AuditReport) -> String;
}

/// ANSI coloring that can be switched off
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Palette { color }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    pub fn green(&self, text: &str) -> String {
        self.colorize(text, "32")
    }

    pub fn yellow(&self, text: &str) -> String {
        self.colorize(text, "33")
    }

    pub fn red(&self, text: &str) -> String {
        self.colorize(text, "31")
    }

    pub fn gray(&self, text: &str) -> String {
        self.colorize(text, "90")
    }

    fn verdict(&self, ok: bool) -> String {
        if ok {
            self.green("[PASS]")
        } else {
            self.red("[FAIL]")
        }
    }
}

/// Terminal (human-readable) formatter
pub struct TerminalFormatter {
    palette: Palette,
    verbose: bool,
    quiet: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool, verbose: bool, quiet: bool) -> Self {
        TerminalFormatter {
            palette: Palette::new(color),
            verbose,
            quiet,
        }
    }

    fn is_issue(result: &Option<CheckResult>) -> bool {
        matches!(result, Some(CheckResult::Fail { .. }) | Some(CheckResult::Warn { .. }))
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format(&self, report: &AuditReport) -> String {
        let mut output = String::new();

        output.push_str(RULE);
        output.push('\n');
        output.push_str("design-preflight compliance report\n");
        if let Some(ref path) = report.config_path {
            output.push_str(&format!("Config: {}\n", path));
        }
        output.push_str(&format!("Theme: {}\n", report.theme));
        output.push_str(RULE);
        output.push_str("\n\n");

        for category in CheckCategory::ALL {
            let category_checks = report.by_category(category);

            if category_checks.is_empty() {
                continue;
            }

            if self.quiet && !category_checks.iter().any(|c| Self::is_issue(&c.result)) {
                continue;
            }

            output.push_str(&format!("{} CHECKS\n", category.to_string().to_uppercase()));

            for check in category_checks {
                if self.quiet && !Self::is_issue(&check.result) {
                    continue;
                }

                let (status, message) = match &check.result {
                    Some(CheckResult::Pass { message }) => (self.palette.green("[PASS]"), message.clone()),
                    Some(CheckResult::Warn { message, details }) => {
                        let msg = if self.verbose {
                            format!("{} - {}", message, details)
                        } else {
                            message.clone()
                        };
                        (self.palette.yellow("[WARN]"), msg)
                    }
                    Some(CheckResult::Fail { message, details }) => {
                        let msg = if self.verbose {
                            format!("{} - {}", message, details)
                        } else {
                            message.clone()
                        };
                        (self.palette.red("[FAIL]"), msg)
                    }
                    Some(CheckResult::Skip { reason }) => (self.palette.gray("[SKIP]"), reason.clone()),
                    None => (self.palette.gray("[----]"), "Not executed".to_string()),
                };

                output.push_str(&format!("  {} {}: {} ({})\n", status, check.id, check.name, message));
                if self.verbose {
                    output.push_str(&format!("         {}\n", self.palette.gray(&check.description)));
                }
            }

            output.push('\n');
        }

        let summary = report.summary();
        output.push_str(RULE);
        output.push('\n');
        output.push_str(&format!(
            "SUMMARY: {} passed, {} warnings, {} failed, {} skipped\n",
            summary.passed, summary.warned, summary.failed, summary.skipped
        ));
        output.push_str(&format!("Exit code: {} ({})\n", summary.exit_code(), exit_description(&summary)));
        output.push_str(RULE);

        output
    }
}

fn exit_description(summary: &ResultSummary) -> &'static str {
    match summary.exit_code() {
        1 => "failures detected",
        2 => "warnings detected",
        _ => "all checks passed",
    }
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a AuditReport,
    summary: ResultSummary,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }

    fn render<T: Serialize>(&self, value: &T) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|err| format!("{{\"error\":\"{}\"}}", escape_json(&err.to_string())))
    }
}

fn escape_json(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &AuditReport) -> String {
        self.render(&JsonReport {
            report,
            summary: report.summary(),
        })
    }
}

/// JUnit XML formatter
#[derive(Default)]
pub struct JunitFormatter;

impl JunitFormatter {
    pub fn new() -> Self {
        JunitFormatter
    }

    fn escape_xml(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => result.push_str("&amp;"),
                '<' => result.push_str("&lt;"),
                '>' => result.push_str("&gt;"),
                '"' => result.push_str("&quot;"),
                '\'' => result.push_str("&apos;"),
                c => result.push(c),
            }
        }
        result
    }
}

impl OutputFormatter for JunitFormatter {
    fn format(&self, report: &AuditReport) -> String {
        let mut output = String::new();
        output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

        let summary = report.summary();
        output.push_str(&format!(
            "<testsuites tests=\"{}\" failures=\"{}\" errors=\"0\" skipped=\"{}\">\n",
            summary.total, summary.failed, summary.skipped
        ));

        for category in CheckCategory::ALL {
            let category_checks = report.by_category(category);

            if category_checks.is_empty() {
                continue;
            }

            let suite_failures = category_checks
                .iter()
                .filter(|c| matches!(&c.result, Some(CheckResult::Fail { .. })))
                .count();
            let suite_skipped = category_checks
                .iter()
                .filter(|c| matches!(&c.result, Some(CheckResult::Skip { .. }) | None))
                .count();

            output.push_str(&format!(
                "  <testsuite name=\"{}\" tests=\"{}\" failures=\"{}\" errors=\"0\" skipped=\"{}\">\n",
                category.key(),
                category_checks.len(),
                suite_failures,
                suite_skipped
            ));

            for check in category_checks {
                output.push_str(&format!(
                    "    <testcase name=\"{}\" classname=\"design-preflight.{}\"",
                    Self::escape_xml(&check.id),
                    category.key()
                ));

                match &check.result {
                    Some(CheckResult::Pass { message }) => {
                        output.push_str(">\n");
                        output.push_str(&format!(
                            "      <system-out>{}</system-out>\n",
                            Self::escape_xml(message)
                        ));
                        output.push_str("    </testcase>\n");
                    }
                    Some(CheckResult::Warn { message, details }) => {
                        output.push_str(">\n");
                        output.push_str(&format!(
                            "      <system-out>WARNING: {} - {}</system-out>\n",
                            Self::escape_xml(message),
                            Self::escape_xml(details)
                        ));
                        output.push_str("    </testcase>\n");
                    }
                    Some(CheckResult::Fail { message, details }) => {
                        output.push_str(">\n");
                        output.push_str(&format!(
                            "      <failure message=\"{}\">{}</failure>\n",
                            Self::escape_xml(message),
                            Self::escape_xml(details)
                        ));
                        output.push_str("    </testcase>\n");
                    }
                    Some(CheckResult::Skip { reason }) => {
                        output.push_str(">\n");
                        output.push_str(&format!(
                            "      <skipped message=\"{}\" />\n",
                            Self::escape_xml(reason)
                        ));
                        output.push_str("    </testcase>\n");
                    }
                    None => {
                        output.push_str(" />\n");
                    }
                }
            }

            output.push_str("  </testsuite>\n");
        }

        output.push_str("</testsuites>");
        output
    }
}

/// Get a formatter based on the output format
pub fn get_formatter(format: &OutputFormat, color: bool, verbose: bool, quiet: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TerminalFormatter::new(color, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Junit => Box::new(JunitFormatter::new()),
    }
}

/// Render a baseline comparison as text
pub fn format_comparison(comparison: &ComparisonResult, palette: Palette) -> String {
    let mut output = String::new();
    output.push_str("BASELINE COMPARISON\n");

    let sections = [
        ("Regressions", &comparison.regressions, palette.red("!")),
        ("New failures", &comparison.new_failures, palette.red("!")),
        ("New warnings", &comparison.new_warnings, palette.yellow("~")),
        ("Resolved", &comparison.resolved, palette.green("+")),
    ];

    for (label, ids, marker) in sections.iter() {
        if !ids.is_empty() {
            output.push_str(&format!("  {} {}: {}\n", marker, label, ids.join(", ")));
        }
    }
    output.push_str(&format!("  Unchanged: {}", comparison.unchanged.len()));
    output
}

/// Render the platform status panel
pub fn format_status(status: &PlatformStatus, json: bool, palette: Palette) -> String {
    if json {
        return JsonFormatter::new(true).render(status);
    }

    let palette_result = &status.color_palette;
    let mut output = String::new();
    output.push_str("DESIGN SYSTEM STATUS\n");
    output.push_str(&format!(
        "  Theme: {} ({})\n",
        status.theme,
        if status.is_dark { "dark" } else { "light" }
    ));
    output.push_str(&format!(
        "  {} Color palette: {}/{} primary colors, neutral: {}\n",
        palette.verdict(palette_result.is_valid),
        palette_result.count,
        palette_result.max_allowed,
        if palette_result.has_neutral { "yes" } else { "no" }
    ));
    for (label, nav) in [
        ("logged out", &status.navigation_logged_out),
        ("logged in", &status.navigation_logged_in),
    ] {
        output.push_str(&format!(
            "  {} Navigation ({}): {} routes, minimum {}\n",
            palette.verdict(nav.is_valid),
            label,
            nav.count,
            nav.min_required
        ));
    }
    output.pop();
    output
}

/// Render a single contrast measurement
pub fn format_contrast(foreground: &str, background: &str, result: &ContrastResult, json: bool, palette: Palette) -> String {
    if json {
        return JsonFormatter::new(true).render(result);
    }

    format!(
        "{} on {}: {:.2}:1\n  {} AA normal text (4.5:1)\n  {} AA large text (3:1)\n  {} AAA (7:1)",
        foreground,
        background,
        result.ratio,
        palette.verdict(result.is_valid_normal),
        palette.verdict(result.is_valid_large),
        palette.verdict(result.is_valid_aaa)
    )
}
