//! PestCase Unit Testing Library
//!
//! A minimal unit-testing framework:
//! - Suites register named test methods through the [`PestCase`] trait
//! - The runner executes every method whose name matches the test marker,
//!   sequentially and isolated from each other's failures
//! - Assertions record outcomes as data instead of throwing
//! - Results render as a colorized console summary and as a JUnit-style
//!   XML report for CI consumption
//!
//! Note: test method names must contain "test" (case-insensitive) to be
//! discovered; anything else registered alongside them is treated as a
//! helper and skipped.
//!
//! # Example
//!
//! ```no_run
//! use pestcase::{PestCase, Test, TestRunner};
//! use std::process::ExitCode;
//!
//! struct MathTests;
//!
//! impl PestCase for MathTests {
//!     fn tests(&self) -> Vec<Test> {
//!         vec![Test::new("add_test", |t| {
//!             t.assert_equals(1 + 1, 2, "simple add test");
//!         })]
//!     }
//! }
//!
//! fn main() -> ExitCode {
//!     TestRunner::new().main(&MathTests)
//! }
//! ```

pub mod console;
pub mod context;
pub mod junit;
pub mod report;
pub mod runner;
pub mod suite;

// Re-export main types
pub use console::ConsoleReporter;
pub use context::{AssertionKind, AssertionRecord, TestContext};
pub use junit::{JunitReporter, ReportError, DEFAULT_REPORT_PATH};
pub use report::{RunReport, TestMethodResult};
pub use runner::TestRunner;
pub use suite::{PestCase, Test, TestSuite, DEFAULT_MARKER};
