#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// A single violated constraint on a named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub constraint: String,
}

/// Accumulates constraint violations while validating one payload.
///
/// Validation never stops at the first problem; the caller gets every
/// violated field and the constraint it broke in a single error.
#[derive(Debug, Default)]
pub struct Violations {
    items: Vec<Violation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, constraint: impl Into<String>) {
        self.items.push(Violation {
            field,
            constraint: constraint.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `Ok(())` when nothing was violated, otherwise a
    /// [`CoreError::Validation`] listing all violations.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.items.is_empty() {
            return Ok(());
        }
        let detail = self
            .items
            .iter()
            .map(|v| format!("{}: {}", v.field, v.constraint))
            .collect::<Vec<_>>()
            .join("; ");
        Err(CoreError::Validation(detail))
    }
}
