//! Validation report shared by the per-role rule sets

/// Outcome of running a validation pass: every violated rule, in order.
///
/// Rule sets never short-circuit, so a single pass reports all
/// violations at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
