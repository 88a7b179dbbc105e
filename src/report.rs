use serde::{Deserialize, Serialize};

/// Result of a single finished test case, as reported by the surrounding
/// test framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
}

impl Outcome {
    /// A test counts as failed only when it neither passed nor was skipped.
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed)
    }
}

/// Access to the result of the test a snapshot belongs to.
pub trait TestReport {
    fn outcome(&self) -> Outcome;

    /// Identifier of the test case. Snapshots for tests with the same name
    /// overwrite each other.
    fn name(&self) -> &str;
}

/// Plain record of a completed test, for callers that do not hold a live
/// test framework handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedTest {
    name: String,
    outcome: Outcome,
}

impl CompletedTest {
    pub fn new(name: impl Into<String>, outcome: Outcome) -> Self {
        CompletedTest {
            name: name.into(),
            outcome,
        }
    }
}

impl TestReport for CompletedTest {
    fn outcome(&self) -> Outcome {
        self.outcome
    }

    fn name(&self) -> &str {
        &self.name
    }
}
