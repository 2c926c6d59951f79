//! Console rendering of a run report.
//!
//! Rendering is pure: [`ConsoleReporter::render`] produces the full summary
//! as a string and [`ConsoleReporter::print`] writes it to stdout. File
//! output is a separate concern handled by the XML reporter.

use colored::*;

use crate::context::AssertionKind;
use crate::report::{RunReport, TestMethodResult};

/// Console reporter with output configuration
pub struct ConsoleReporter {
    /// Disable colored output
    no_color: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self { no_color: false }
    }

    /// Disable colored output
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Render the report summary.
    ///
    /// A passing run gets a single banner line with the method count and
    /// total elapsed time. A failing run gets the failure banner, one header
    /// line per method in discovery order, and a tree of assertion records
    /// under each failing method.
    pub fn render(&self, report: &RunReport) -> String {
        let mut out = String::from("\n");

        if report.overall_passed() {
            let count = report.len();
            let plural = if count == 1 { "" } else { "s" };
            out.push_str(&format!(
                "{} {} test{} completed in {:.2?}\n",
                self.ok_banner(),
                count,
                plural,
                report.elapsed
            ));
        } else {
            out.push_str(&format!("{}\n", self.fail_banner()));
            for method in &report.methods {
                self.render_method(&mut out, method);
            }
        }

        out
    }

    /// Print the report summary to stdout
    pub fn print(&self, report: &RunReport) {
        print!("{}", self.render(report));
    }

    fn render_method(&self, out: &mut String, method: &TestMethodResult) {
        if method.passed {
            out.push_str(&format!("{} {}\n", self.success_label(), method.name));
            return;
        }

        out.push_str(&format!("{} {}\n", self.failure_label(), method.name));

        let last = method.records.len().saturating_sub(1);
        for (i, record) in method.records.iter().enumerate() {
            let connector = if i == last { "└──" } else { "├──" };
            let marker = if record.passed {
                self.pass_marker()
            } else {
                self.fail_marker()
            };

            out.push_str(&format!("{} {} {}", connector, marker, record.message));

            // Error records carry no comparison; everything else shows what
            // the assertion saw when it failed.
            if !record.passed && record.kind != AssertionKind::Error {
                if let (Some(expected), Some(actual)) = (&record.expected, &record.actual) {
                    out.push_str(&format!(" - Expected: {}, Got: {}", expected, actual));
                }
            }
            out.push('\n');
        }
    }

    fn ok_banner(&self) -> String {
        if self.no_color {
            "  OK!  ".to_string()
        } else {
            "  OK!  ".black().on_green().to_string()
        }
    }

    fn fail_banner(&self) -> String {
        if self.no_color {
            "  FAILURE!  ".to_string()
        } else {
            "  FAILURE!  ".on_red().to_string()
        }
    }

    fn success_label(&self) -> String {
        if self.no_color {
            "Success!".to_string()
        } else {
            "Success!".green().to_string()
        }
    }

    fn failure_label(&self) -> String {
        if self.no_color {
            "Failure!".to_string()
        } else {
            "Failure!".red().to_string()
        }
    }

    fn pass_marker(&self) -> String {
        if self.no_color {
            "✓".to_string()
        } else {
            "✓".green().to_string()
        }
    }

    fn fail_marker(&self) -> String {
        if self.no_color {
            "✗".to_string()
        } else {
            "✗".red().to_string()
        }
    }
}
