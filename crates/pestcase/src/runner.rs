//! Sequential test execution.
//!
//! Tests run one at a time, in discovery order. A panic in a body is caught
//! at the per-test boundary, recorded as an `Error` record, and the next
//! test still runs; nothing short of a report-write failure stops a run.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use crate::console::ConsoleReporter;
use crate::context::TestContext;
use crate::junit::{JunitReporter, DEFAULT_REPORT_PATH};
use crate::report::RunReport;
use crate::suite::{PestCase, TestSuite, DEFAULT_MARKER};

// The panic hook is process-global; overlapping runs on other threads must
// not interleave take/restore or the silencing hook leaks past a run.
static HOOK_LOCK: Mutex<()> = Mutex::new(());

/// Test runner owning the full lifecycle: discovery, execution, aggregation,
/// and (through [`TestRunner::main`]) dual-format reporting.
pub struct TestRunner {
    marker: String,
    report_path: PathBuf,
    no_color: bool,
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRunner {
    /// Create a runner with the default marker and report path.
    pub fn new() -> Self {
        TestRunner {
            marker: DEFAULT_MARKER.to_string(),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            no_color: false,
        }
    }

    /// Set the test-marker pattern used during discovery.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Set where the XML report is written.
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }

    /// Disable colored console output.
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Discover and execute `case`'s tests. No I/O; reporting is separate.
    pub fn run(&self, case: &dyn PestCase) -> RunReport {
        let suite = TestSuite::discover_with_marker(case, &self.marker);
        self.run_suite(&suite)
    }

    /// Execute an already-discovered suite, sequentially and in order.
    pub fn run_suite(&self, suite: &TestSuite) -> RunReport {
        let started = Instant::now();
        let mut report = RunReport::new();

        // A caught panic is a recorded outcome, not console noise; keep the
        // default hook from spraying backtraces over the summary. The swap
        // stays under HOOK_LOCK until the original hook is back in place.
        let guard = HOOK_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let hook = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));

        for test in suite.iter() {
            let mut ctx = TestContext::begin(test.name());
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| test.run(&mut ctx))) {
                ctx.record_error(panic_message(payload.as_ref()));
            }
            report.push(ctx.finish());
        }

        panic::set_hook(hook);
        drop(guard);
        report.elapsed = started.elapsed();
        report
    }

    /// Full lifecycle: run, write the XML report, print the console summary,
    /// and hand back the exit code for the process.
    ///
    /// Returns success only when every test passed and the report file was
    /// written; a run whose report is missing must not look green to CI.
    pub fn main(&self, case: &dyn PestCase) -> ExitCode {
        let report = self.run(case);

        let write_failed = match JunitReporter::new()
            .with_path(&self.report_path)
            .write(&report)
        {
            Ok(_) => false,
            Err(e) => {
                eprintln!("error: {e}");
                true
            }
        };

        ConsoleReporter::new()
            .with_no_color(self.no_color)
            .print(&report);

        if write_failed {
            ExitCode::from(1)
        } else {
            ExitCode::from(report.exit_code())
        }
    }
}

/// Best-effort text for a caught panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "test panicked".to_string()
    }
}
