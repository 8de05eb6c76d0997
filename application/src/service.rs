mod author;
mod book;

pub use self::{author::*, book::*};

use error_stack::Report;
use kernel::{ErrorDetail, KernelError};

/// Labels a conflict with `detail` unless a lower layer already explained it.
fn explain_conflict(report: Report<KernelError>, detail: &str) -> Report<KernelError> {
    if matches!(report.current_context(), KernelError::Conflict)
        && !report.contains::<ErrorDetail>()
    {
        report.attach_printable(ErrorDetail::new(detail))
    } else {
        report
    }
}
