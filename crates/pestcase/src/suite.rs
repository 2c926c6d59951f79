//! Test registration and discovery.
//!
//! Runtime reflection is replaced by explicit registration: a suite type
//! implements [`PestCase`] and returns its tests as a list. Discovery keeps
//! the registered tests whose names match the test-marker pattern, in
//! registration order.

use std::fmt;

use crate::context::TestContext;

/// Default test-marker pattern: a case-insensitive substring a registered
/// name must contain to count as a test.
pub const DEFAULT_MARKER: &str = "test";

/// Boxed test body. Bodies take nothing beyond the assertion context.
pub type TestFn = Box<dyn Fn(&mut TestContext)>;

/// A registered test: a name plus its body.
pub struct Test {
    name: String,
    body: TestFn,
}

impl Test {
    /// Register `body` under `name`.
    pub fn new(name: impl Into<String>, body: impl Fn(&mut TestContext) + 'static) -> Self {
        Test {
            name: name.into(),
            body: Box::new(body),
        }
    }

    /// Name the test was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn run(&self, ctx: &mut TestContext) {
        (self.body)(ctx);
    }
}

impl fmt::Debug for Test {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Test").field("name", &self.name).finish()
    }
}

/// A test suite: any type that can list its registered tests.
pub trait PestCase {
    /// Registered tests, in the order they should run.
    fn tests(&self) -> Vec<Test>;
}

/// The discovered subset of a suite's registered tests.
#[derive(Debug, Default)]
pub struct TestSuite {
    tests: Vec<Test>,
}

impl TestSuite {
    /// Discover the tests of `case` whose names match [`DEFAULT_MARKER`].
    ///
    /// Order is registration order: discovered tests run exactly in the
    /// sequence `PestCase::tests` returned them.
    pub fn discover(case: &dyn PestCase) -> Self {
        Self::discover_with_marker(case, DEFAULT_MARKER)
    }

    /// Discover with a custom marker. The match is a case-insensitive
    /// substring check, so the default marker keeps `add_test`, `TestLogin`,
    /// and even `latest_price` alike, while `helper` is skipped.
    pub fn discover_with_marker(case: &dyn PestCase, marker: &str) -> Self {
        let marker = marker.to_lowercase();
        let tests = case
            .tests()
            .into_iter()
            .filter(|t| t.name.to_lowercase().contains(&marker))
            .collect();
        TestSuite { tests }
    }

    /// Keep only tests whose name contains `pattern`.
    pub fn filter(self, pattern: &str) -> Self {
        TestSuite {
            tests: self
                .tests
                .into_iter()
                .filter(|t| t.name.contains(pattern))
                .collect(),
        }
    }

    /// Number of discovered tests.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Check if discovery found nothing.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Iterate over discovered tests in run order.
    pub fn iter(&self) -> impl Iterator<Item = &Test> {
        self.tests.iter()
    }
}
