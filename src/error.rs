use thiserror::Error;

/// Errors surfaced by the guard-based reservation API.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReservationError {
    /// The requested range overlaps an in-flight reservation. Expected and
    /// recoverable; callers retry later or report "busy" to the requester.
    #[error("key range is busy: an overlapping reservation is in flight")]
    Busy,
}
