//! Deletion eligibility gate
//!
//! Decides whether a session may be deleted and guards the single delete
//! request against double submission. Sessions whose status is in
//! [`ACTIVE_STATUSES`] are restricted until the service moves them out of it.

use crate::entities::{Session, SessionStatus};

/// Statuses that mark in-progress work. Deletion is blocked while a session is in one of them.
pub const ACTIVE_STATUSES: [SessionStatus; 4] = [
    SessionStatus::Processing,
    SessionStatus::Extracting,
    SessionStatus::Analyzing,
    SessionStatus::Uploading,
];

/// Whether deletion is currently blocked for `session`.
///
/// A missing session or a missing status is not restricted. Unknown status
/// codes are not restricted either.
#[must_use]
pub fn is_restricted(session: Option<&Session>) -> bool {
    session
        .and_then(|session| session.status.as_ref())
        .is_some_and(|status| ACTIVE_STATUSES.contains(status))
}

#[must_use]
pub fn can_delete(session: Option<&Session>, confirmed: bool) -> bool {
    confirmed && !is_restricted(session)
}

/// Claim the in-flight slot for a delete request.
///
/// Returns the session to emit when the request may proceed and marks
/// `deleting`. Returns `None` without touching anything when the session is
/// absent, restricted, unconfirmed, or a request is already in flight.
pub fn request_delete<'a>(session: Option<&'a Session>, confirmed: bool, deleting: &mut bool) -> Option<&'a Session> {
    if *deleting || !can_delete(session, confirmed) {
        return None;
    }
    let session = session?;
    *deleting = true;
    Some(session)
}

/// Release the in-flight slot once the caller is done, whatever the outcome.
pub fn release(deleting: &mut bool) {
    *deleting = false;
}
