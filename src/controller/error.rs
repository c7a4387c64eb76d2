//! Error types for the order lifecycle controller.

use thiserror::Error;

/// Failures the controller records as displayable state.
///
/// Every variant is non-fatal: the worst outcome is a stale or empty panel
/// with a visible message.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ControllerError {
    /// Order creation failed. Always carries the client-generated order id
    /// (also embedded in `message`) so the order the backend may have
    /// partially created can still be looked up.
    #[error("order submission failed: {message}")]
    SubmissionFailed { message: String, order_id: String },

    /// Single-order fetch failed; previously displayed data is kept.
    #[error("status refresh failed: {message}")]
    StatusRefreshFailed { message: String },

    /// Recent-orders fetch failed; the previous list is kept.
    #[error("overview refresh failed: {message}")]
    OverviewRefreshFailed { message: String },
}
