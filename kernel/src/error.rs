use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    NotFound,
    Conflict,
    Validation,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::NotFound => write!(f, "Resource not found"),
            KernelError::Conflict => write!(f, "Conflicts with existing data"),
            KernelError::Validation => write!(f, "Invalid input"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

/// Message meant for the API consumer, attached to a report.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ErrorDetail(String);

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }
}

impl AsRef<str> for ErrorDetail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
