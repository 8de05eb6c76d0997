use error_stack::ResultExt;

use kernel::KernelError;

pub mod database;
mod error;

pub(crate) fn env(key: &str) -> error_stack::Result<String, KernelError> {
    dotenvy::var(key)
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| format!("Failed to read environment variable `{key}`"))
}

/// Like [`env`], but a missing variable yields `None` instead of an error.
pub(crate) fn env_opt(key: &str) -> error_stack::Result<Option<String>, KernelError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(error) => Err(error)
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("Failed to read environment variable `{key}`")),
    }
}
