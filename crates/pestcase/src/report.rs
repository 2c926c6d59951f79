//! Run-level aggregates consumed by both renderers.

use std::time::{Duration, SystemTime};

use crate::context::AssertionRecord;

/// Everything one test produced, in call order.
#[derive(Debug, Clone)]
pub struct TestMethodResult {
    /// Name the test was registered under.
    pub name: String,
    /// False iff any record failed; folded in as records were appended.
    pub passed: bool,
    /// Records in the order the body made them.
    pub records: Vec<AssertionRecord>,
    /// Wall time of the test body.
    pub elapsed: Duration,
}

impl TestMethodResult {
    /// Records with `passed == false`, in call order.
    pub fn failing_records(&self) -> impl Iterator<Item = &AssertionRecord> {
        self.records.iter().filter(|r| !r.passed)
    }
}

/// Aggregate for a whole run. Methods appear in discovery order.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// When the run began.
    pub started: SystemTime,
    /// Total run wall time.
    pub elapsed: Duration,
    /// Per-test results, discovery order.
    pub methods: Vec<TestMethodResult>,
}

impl RunReport {
    pub(crate) fn new() -> Self {
        RunReport {
            started: SystemTime::now(),
            elapsed: Duration::ZERO,
            methods: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, method: TestMethodResult) {
        self.methods.push(method);
    }

    /// Conjunction over all methods, recomputed on every call so the flag
    /// can never drift from the per-method results.
    pub fn overall_passed(&self) -> bool {
        self.methods.iter().all(|m| m.passed)
    }

    /// Number of methods with `passed == false`.
    pub fn failure_count(&self) -> usize {
        self.methods.iter().filter(|m| !m.passed).count()
    }

    /// Process exit code for the run: 0 all passed, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.overall_passed())
    }

    /// Number of methods that ran.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether no methods ran.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Result for `name`, first match in discovery order.
    pub fn method(&self, name: &str) -> Option<&TestMethodResult> {
        self.methods.iter().find(|m| m.name == name)
    }
}
