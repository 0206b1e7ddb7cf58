//! Tagged per-entry results.
//!
//! A sizing batch never fails wholesale because one catalog entry is bad:
//! each compressor or pipe evaluation yields `Computed<T>`, and entries
//! that cannot produce a value carry the reason instead.

use fl_props::PropertyError;
use std::fmt;

/// Why a catalog entry produced no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unavailability {
    /// The property provider rejected a state/refrigerant combination.
    PropertyLookup(String),
    /// The requested refrigerant is not in the entry's compatibility set.
    IncompatibleRefrigerant,
    /// The duty point lies outside the compressor's working envelope.
    OutsideEnvelope,
    /// A malformed record slipped past catalog validation.
    MalformedEntry(String),
}

impl fmt::Display for Unavailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unavailability::PropertyLookup(msg) => write!(f, "property lookup failed: {msg}"),
            Unavailability::IncompatibleRefrigerant => f.write_str("incompatible refrigerant"),
            Unavailability::OutsideEnvelope => f.write_str("outside working envelope"),
            Unavailability::MalformedEntry(msg) => write!(f, "malformed catalog entry: {msg}"),
        }
    }
}

impl From<PropertyError> for Unavailability {
    fn from(err: PropertyError) -> Self {
        Unavailability::PropertyLookup(err.to_string())
    }
}

/// A per-entry evaluation result: either a value or the reason there is
/// none.
#[derive(Debug, Clone, PartialEq)]
pub enum Computed<T> {
    Ready(T),
    Unavailable(Unavailability),
}

impl<T> Computed<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Computed::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Computed::Ready(v) => Some(v),
            Computed::Unavailable(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Computed<U> {
        match self {
            Computed::Ready(v) => Computed::Ready(f(v)),
            Computed::Unavailable(reason) => Computed::Unavailable(reason),
        }
    }
}

impl<T> From<Result<T, PropertyError>> for Computed<T> {
    fn from(result: Result<T, PropertyError>) -> Self {
        match result {
            Ok(v) => Computed::Ready(v),
            Err(err) => Computed::Unavailable(err.into()),
        }
    }
}
