use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Status values stored on leave and regularization rows. Nothing in the
/// service moves a row between them; new rows start as `Pending`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, AsRefStr, Display, EnumIter, EnumString)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Draft,
    Undo,
}

impl RequestStatus {
    /// JSON keys of the per-status view: pending uses bare names, the
    /// others are prefixed, e.g. `approvedLeaveRequests`.
    pub fn view_keys(&self) -> (String, String) {
        match self {
            RequestStatus::Pending => (
                "leaveRequests".to_string(),
                "regularizationRequests".to_string(),
            ),
            other => {
                let prefix = other.as_ref().to_lowercase();
                (
                    format!("{prefix}LeaveRequests"),
                    format!("{prefix}RegularizationRequests"),
                )
            }
        }
    }
}
