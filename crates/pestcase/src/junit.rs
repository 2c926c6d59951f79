//! JUnit-style XML report generation.
//!
//! One file per run, overwritten each time, for CI systems that consume
//! JUnit XML rather than console text.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::report::RunReport;

/// Where the XML report lands, relative to the current working directory.
pub const DEFAULT_REPORT_PATH: &str = "test-reports/results.xml";

/// Name of the top-level `<testsuites>` element.
const REPORT_NAME: &str = "PestCase Tests";

/// Report file errors
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to create report directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to write report file {path}: {source}")]
    WriteFile { path: PathBuf, source: io::Error },
}

/// XML reporter with output configuration
pub struct JunitReporter {
    path: PathBuf,
}

impl Default for JunitReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReporter {
    /// Create a reporter targeting the default report path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }

    /// Set where the report file is written
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Render the report as a JUnit XML document.
    ///
    /// `tests` counts discovered methods, `failures` counts methods whose
    /// `passed` is false, and each failing assertion record becomes one
    /// `<failure>` element under its method's `<testcase>`.
    pub fn to_xml(&self, report: &RunReport) -> String {
        let mut xml = String::new();

        xml.push_str(&format!("<testsuites name=\"{}\">\n", REPORT_NAME));
        xml.push_str(&format!(
            "  <testsuite name=\"testsuite\" tests=\"{}\" failures=\"{}\" time=\"{:.6}\">\n",
            report.len(),
            report.failure_count(),
            report.elapsed.as_secs_f64()
        ));

        for method in &report.methods {
            xml.push_str(&format!(
                "    <testcase classname=\"{}\" time=\"{:.6}\">\n",
                escape(&method.name),
                method.elapsed.as_secs_f64()
            ));
            for record in method.failing_records() {
                xml.push_str(&format!(
                    "      <failure message=\"{}\"></failure>\n",
                    escape(&record.message)
                ));
            }
            xml.push_str("    </testcase>\n");
        }

        xml.push_str("  </testsuite>\n");
        xml.push_str("</testsuites>\n");
        xml
    }

    /// Write the XML document, creating parent directories as needed.
    ///
    /// Returns the path of the written file. The write itself is a single
    /// scoped operation, so the file handle never outlives this call even
    /// when the write fails partway.
    pub fn write(&self, report: &RunReport) -> Result<PathBuf, ReportError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        fs::write(&self.path, self.to_xml(report)).map_err(|source| ReportError::WriteFile {
            path: self.path.clone(),
            source,
        })?;

        Ok(self.path.clone())
    }
}

/// Escape text for use in XML attribute values.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
