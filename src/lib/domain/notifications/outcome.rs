//! Dispatch outcome

/// The result of a dispatch that cleared every gate.
///
/// A recipient without a resolvable email address is an expected outcome,
/// not a fault, so callers can tell "nothing to send" apart from "something
/// broke".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The mail sink accepted the message
    Dispatched {
        /// The provider-assigned message identifier
        email_id: String,
    },

    /// The target user has no email address on record
    NoRecipient {
        /// Human-readable description of the absence
        reason: String,
    },
}
