/// The first clause that did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Failing field, `None` when a single scalar value was validated.
    pub field: Option<String>,
    /// Clause token as written in the rule specification.
    pub rule: String,
    /// Custom message of the clause, empty when none was given.
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed(Failure),
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Passed => None,
            Outcome::Failed(failure) => Some(failure),
        }
    }

    /// Message of the failing clause, empty on success.
    pub fn message(&self) -> &str {
        self.failure().map_or("", |f| f.message.as_str())
    }

    /// The `(passed, message)` pair.
    pub fn into_pair(self) -> (bool, String) {
        match self {
            Outcome::Passed => (true, String::new()),
            Outcome::Failed(failure) => (false, failure.message),
        }
    }
}

/// Result of validating one named form.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub form_name: String,
    pub field_count: usize,
    pub outcome: Outcome,
}

impl ValidationResult {
    pub fn new(form_name: String, field_count: usize, outcome: Outcome) -> Self {
        Self {
            form_name,
            field_count,
            outcome,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.outcome.is_passed()
    }
}
