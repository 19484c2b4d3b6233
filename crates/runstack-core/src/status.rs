//! Stack status classification
//!
//! The provisioner never mutates the remote status, it only observes the
//! status string and sorts it into one of three buckets.

/// Classification of a reported stack status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackProgress {
    /// Terminal success, the run is done
    Complete,
    /// Still settling, keep polling
    InProgress,
    /// Terminal failure, surface the offending status
    Failed,
}

/// Sort a stack status string into a [`StackProgress`] bucket
///
/// An absent or empty status means the service has not reported progress
/// yet and counts as in-progress. Anything outside the known success and
/// in-progress sets (ROLLBACK_COMPLETE, CREATE_FAILED, ...) is terminal
/// failure.
pub fn classify(status: Option<&str>) -> StackProgress {
    match status.unwrap_or("") {
        "CREATE_COMPLETE" | "UPDATE_COMPLETE" | "UPDATE_COMPLETE_CLEANUP_IN_PROGRESS" => {
            StackProgress::Complete
        }
        "" | "UPDATE_IN_PROGRESS" | "CREATE_IN_PROGRESS" => StackProgress::InProgress,
        _ => StackProgress::Failed,
    }
}
