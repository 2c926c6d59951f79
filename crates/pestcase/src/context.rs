//! Assertion context and per-assertion records.
//!
//! Assertions are data, never control flow: each call appends one
//! [`AssertionRecord`] to the in-progress result and folds its outcome into
//! the running pass flag. A failed assertion does not abort the body; only a
//! panic does, and the runner records that through the same append path.

use std::fmt::Debug;
use std::time::{Duration, Instant};

use crate::report::TestMethodResult;

/// What produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertionKind {
    /// An `assert_equals` comparison.
    Equals,
    /// An `assert_true` check.
    True,
    /// An `assert_false` check.
    False,
    /// A panic caught at the test boundary.
    Error,
}

/// One recorded assertion (or caught panic) outcome. Immutable once made.
#[derive(Debug, Clone)]
pub struct AssertionRecord {
    pub kind: AssertionKind,
    /// Caller-supplied description; the panic text for [`AssertionKind::Error`].
    pub message: String,
    pub passed: bool,
    /// `Debug` rendering of the checked value; `None` for `Error` records.
    pub actual: Option<String>,
    /// `Debug` rendering of the expected value; `None` for `Error` records.
    pub expected: Option<String>,
    /// Time since the owning test began when the record was made.
    pub elapsed: Duration,
}

/// Mutable assertion context handed to each test body.
///
/// Owns the in-progress method result, so a record can only ever land in the
/// test that made it. Consumed into a [`TestMethodResult`] when the test
/// closes.
pub struct TestContext {
    name: String,
    passed: bool,
    records: Vec<AssertionRecord>,
    started: Instant,
}

impl TestContext {
    pub(crate) fn begin(name: impl Into<String>) -> Self {
        TestContext {
            name: name.into(),
            passed: true,
            records: Vec::new(),
            started: Instant::now(),
        }
    }

    /// Record whether `actual == expected` under the type's `PartialEq`.
    ///
    /// Failure is recorded, not raised: the body keeps executing and later
    /// assertions still land.
    pub fn assert_equals<T: PartialEq + Debug>(&mut self, actual: T, expected: T, message: &str) {
        let elapsed = self.started.elapsed();
        let passed = actual == expected;
        self.push(AssertionRecord {
            kind: AssertionKind::Equals,
            message: message.to_string(),
            passed,
            actual: Some(format!("{actual:?}")),
            expected: Some(format!("{expected:?}")),
            elapsed,
        });
    }

    /// Record whether `value` is true.
    pub fn assert_true(&mut self, value: bool, message: &str) {
        let elapsed = self.started.elapsed();
        self.push(AssertionRecord {
            kind: AssertionKind::True,
            message: message.to_string(),
            passed: value,
            actual: Some(format!("{value:?}")),
            expected: Some("true".to_string()),
            elapsed,
        });
    }

    /// Record whether `value` is false.
    pub fn assert_false(&mut self, value: bool, message: &str) {
        let elapsed = self.started.elapsed();
        self.push(AssertionRecord {
            kind: AssertionKind::False,
            message: message.to_string(),
            passed: !value,
            actual: Some(format!("{value:?}")),
            expected: Some("false".to_string()),
            elapsed,
        });
    }

    /// Caught-panic path; goes through the same append pipeline so the pass
    /// flag stays consistent with the record list.
    pub(crate) fn record_error(&mut self, message: String) {
        let elapsed = self.started.elapsed();
        self.push(AssertionRecord {
            kind: AssertionKind::Error,
            message,
            passed: false,
            actual: None,
            expected: None,
            elapsed,
        });
    }

    fn push(&mut self, record: AssertionRecord) {
        self.passed &= record.passed;
        self.records.push(record);
    }

    /// Name of the test this context belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether every assertion so far has passed.
    pub fn passed(&self) -> bool {
        self.passed
    }

    pub(crate) fn finish(self) -> TestMethodResult {
        TestMethodResult {
            name: self.name,
            passed: self.passed,
            records: self.records,
            elapsed: self.started.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equals_records_debug_values() {
        let mut ctx = TestContext::begin("add_test");
        assert_eq!(ctx.name(), "add_test");
        ctx.assert_equals(2 + 2, 4, "simple add");
        let result = ctx.finish();

        assert!(result.passed);
        assert_eq!(result.records.len(), 1);
        let record = &result.records[0];
        assert_eq!(record.kind, AssertionKind::Equals);
        assert!(record.passed);
        assert_eq!(record.actual.as_deref(), Some("4"));
        assert_eq!(record.expected.as_deref(), Some("4"));
    }

    #[test]
    fn test_failed_equals_marks_method_failed() {
        let mut ctx = TestContext::begin("bad_math_test");
        ctx.assert_equals(2 + 2, 5, "bad math");
        assert!(!ctx.passed());

        let result = ctx.finish();
        assert!(!result.passed);
        assert_eq!(result.records[0].actual.as_deref(), Some("4"));
        assert_eq!(result.records[0].expected.as_deref(), Some("5"));
    }

    #[test]
    fn test_true_and_false_checks() {
        let mut ctx = TestContext::begin("bool_test");
        ctx.assert_true(true, "yes");
        ctx.assert_false(false, "no");
        assert!(ctx.passed());

        let result = ctx.finish();
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].kind, AssertionKind::True);
        assert_eq!(result.records[1].kind, AssertionKind::False);
    }

    #[test]
    fn test_failure_does_not_stop_recording() {
        let mut ctx = TestContext::begin("mixed_test");
        ctx.assert_true(false, "should be true");
        ctx.assert_equals(1, 1, "still recorded");

        let result = ctx.finish();
        assert!(!result.passed);
        assert_eq!(result.records.len(), 2);
        assert!(!result.records[0].passed);
        assert!(result.records[1].passed);
    }

    #[test]
    fn test_passed_is_conjunction_of_records() {
        let mut ctx = TestContext::begin("conjunction_test");
        ctx.assert_true(true, "a");
        ctx.assert_false(true, "b");
        ctx.assert_true(true, "c");

        let result = ctx.finish();
        let all = result.records.iter().all(|r| r.passed);
        assert_eq!(result.passed, all);
        assert!(!result.passed);
    }

    #[test]
    fn test_error_record_has_no_values() {
        let mut ctx = TestContext::begin("panic_test");
        ctx.record_error("boom".to_string());

        let result = ctx.finish();
        assert!(!result.passed);
        assert_eq!(result.records[0].kind, AssertionKind::Error);
        assert!(result.records[0].actual.is_none());
        assert!(result.records[0].expected.is_none());
    }

    #[test]
    fn test_record_elapsed_is_nondecreasing() {
        let mut ctx = TestContext::begin("timing_test");
        ctx.assert_true(true, "first");
        ctx.assert_true(true, "second");

        let result = ctx.finish();
        assert!(result.records[0].elapsed <= result.records[1].elapsed);
        assert!(result.records[1].elapsed <= result.elapsed);
    }

    #[test]
    fn test_equality_is_by_value() {
        let mut ctx = TestContext::begin("string_test");
        ctx.assert_equals(String::from("ab"), String::from("ab"), "concat");
        ctx.assert_equals(vec![1, 2, 3], vec![1, 2, 3], "vectors");
        assert!(ctx.passed());
    }
}
