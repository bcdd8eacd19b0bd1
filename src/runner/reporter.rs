use crate::assertion::AssertError;
use crate::config::ReportConfig;
use crate::runner::types::{GroupFailure, Tally};
use colored::Colorize;
use std::sync::{Arc, Mutex};

const GROUP_RULE: usize = 54;
const SUMMARY_RULE: usize = 28;
const ASSERT_ERROR_RULE: usize = 22;
const GROUP_ERROR_RULE: usize = 37;

/// Which console stream a line goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// One emitted report line (always uncolored)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub stream: Stream,
    pub text: String,
}

#[derive(Debug, Clone, Copy)]
enum Style {
    Plain,
    Pass,
    Fail,
    Warn,
    Heading,
}

enum Sink {
    Console,
    Capture(Arc<Mutex<Vec<ReportLine>>>),
}

pub struct TestReporter {
    color: bool,
    error_detail: bool,
    sink: Sink,
}

impl TestReporter {
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            color: config.color,
            error_detail: config.error_detail,
            sink: Sink::Console,
        }
    }

    /// Reporter that records lines instead of printing them
    pub fn capturing(config: &ReportConfig) -> Self {
        Self {
            color: false,
            error_detail: config.error_detail,
            sink: Sink::Capture(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    /// Lines recorded so far; empty for a console reporter
    pub fn captured(&self) -> Vec<ReportLine> {
        match &self.sink {
            Sink::Console => Vec::new(),
            Sink::Capture(lines) => lines.lock().unwrap_or_else(|e| e.into_inner()).clone(),
        }
    }

    /// Text of the recorded lines, in order
    pub fn captured_text(&self) -> Vec<String> {
        self.captured().into_iter().map(|line| line.text).collect()
    }

    pub fn print_passed(&self) {
        self.emit(Stream::Stdout, Style::Pass, "Passed".to_string());
    }

    pub fn print_failed(&self, line: &str) {
        self.emit(Stream::Stderr, Style::Fail, line.to_string());
    }

    pub fn print_assert_error(&self, error: &AssertError) {
        self.emit(Stream::Stderr, Style::Fail, error.to_string());
        self.emit(Stream::Stdout, Style::Plain, "=".repeat(ASSERT_ERROR_RULE));
        if self.error_detail {
            self.emit(Stream::Stdout, Style::Plain, format!("{:?}", error));
        }
    }

    pub fn print_group_header(&self, name: &str) {
        self.emit(
            Stream::Stdout,
            Style::Heading,
            format!("Running Test: {}", name),
        );
        self.emit(Stream::Stdout, Style::Plain, "=".repeat(GROUP_RULE));
    }

    pub fn print_skipped(&self) {
        self.emit(
            Stream::Stderr,
            Style::Warn,
            "No test task/function specified - Test skipped!!!".to_string(),
        );
    }

    pub fn print_group_error(&self, failure: &GroupFailure) {
        self.emit(Stream::Stderr, Style::Fail, failure.to_string());
        self.emit(Stream::Stdout, Style::Plain, "=".repeat(GROUP_ERROR_RULE));
        if self.error_detail {
            self.emit(Stream::Stdout, Style::Plain, format!("{:?}", failure));
        }
    }

    pub fn print_group_summary(&self, name: &str, tally: Tally) {
        self.emit(
            Stream::Stdout,
            Style::Heading,
            format!("Summary for Test: {}: ", name),
        );
        self.print_counts(tally);
    }

    pub fn print_aggregate(&self, tally: Tally) {
        self.emit(Stream::Stdout, Style::Plain, "=".repeat(SUMMARY_RULE));
        self.emit(
            Stream::Stdout,
            Style::Heading,
            "All Tests Summary Stats:".to_string(),
        );
        self.emit(Stream::Stdout, Style::Plain, "=".repeat(SUMMARY_RULE));
        self.print_counts(tally);
        self.emit(
            Stream::Stdout,
            Style::Heading,
            "***** Test Completed *****".to_string(),
        );
    }

    fn print_counts(&self, tally: Tally) {
        self.emit(
            Stream::Stdout,
            Style::Pass,
            format!("Test Passed: {}", tally.passed),
        );
        let failed_style = if tally.failed > 0 {
            Style::Fail
        } else {
            Style::Plain
        };
        self.emit(
            Stream::Stderr,
            failed_style,
            format!("Test Failed: {}", tally.failed),
        );
        self.emit(
            Stream::Stdout,
            Style::Plain,
            format!("Total Test: {}", tally.total()),
        );
    }

    fn emit(&self, stream: Stream, style: Style, text: String) {
        match &self.sink {
            Sink::Console => {
                let rendered = if self.color {
                    match style {
                        Style::Plain => text,
                        Style::Pass => text.green().to_string(),
                        Style::Fail => text.red().to_string(),
                        Style::Warn => text.yellow().to_string(),
                        Style::Heading => text.bold().to_string(),
                    }
                } else {
                    text
                };
                match stream {
                    Stream::Stdout => println!("{}", rendered),
                    Stream::Stderr => eprintln!("{}", rendered),
                }
            }
            Sink::Capture(lines) => {
                lines
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .push(ReportLine { stream, text });
            }
        }
    }
}

impl Default for TestReporter {
    fn default() -> Self {
        Self::new(&ReportConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_header_and_summary_lines() {
        let reporter = TestReporter::capturing(&ReportConfig::default());
        reporter.print_group_header("math");
        reporter.print_group_summary("math", Tally::new(3, 1));

        assert_eq!(
            reporter.captured_text(),
            vec![
                "Running Test: math".to_string(),
                "=".repeat(54),
                "Summary for Test: math: ".to_string(),
                "Test Passed: 3".to_string(),
                "Test Failed: 1".to_string(),
                "Total Test: 4".to_string(),
            ]
        );
    }

    #[test]
    fn test_aggregate_banner() {
        let reporter = TestReporter::capturing(&ReportConfig::default());
        reporter.print_aggregate(Tally::default());

        let text = reporter.captured_text();
        assert_eq!(text[0], "=".repeat(28));
        assert_eq!(text[1], "All Tests Summary Stats:");
        assert_eq!(text[3], "Test Passed: 0");
        assert_eq!(text[4], "Test Failed: 0");
        assert_eq!(text[5], "Total Test: 0");
        assert_eq!(text[6], "***** Test Completed *****");
    }

    #[test]
    fn test_failure_lines_go_to_stderr() {
        let reporter = TestReporter::capturing(&ReportConfig::default());
        reporter.print_passed();
        reporter.print_failed("Failed: x =>  Expected 1, Got 2");
        reporter.print_skipped();

        let lines = reporter.captured();
        assert_eq!(lines[0].stream, Stream::Stdout);
        assert_eq!(lines[0].text, "Passed");
        assert_eq!(lines[1].stream, Stream::Stderr);
        assert_eq!(lines[2].stream, Stream::Stderr);
        assert_eq!(
            lines[2].text,
            "No test task/function specified - Test skipped!!!"
        );
    }

    #[test]
    fn test_error_detail_can_be_disabled() {
        let config = ReportConfig {
            color: false,
            error_detail: false,
        };
        let reporter = TestReporter::capturing(&config);
        reporter.print_group_error(&GroupFailure::Panicked("boom".to_string()));

        assert_eq!(
            reporter.captured_text(),
            vec![
                "Test function panicked: boom".to_string(),
                "=".repeat(37),
            ]
        );
    }

    #[test]
    fn test_console_reporter_captures_nothing() {
        let reporter = TestReporter::new(&ReportConfig {
            color: false,
            error_detail: true,
        });
        reporter.print_passed();
        assert!(reporter.captured().is_empty());
    }
}
