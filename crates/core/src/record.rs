//! Contract between resource record types and the store.

use crate::id::RecordId;

/// A record a store can mint from caller-supplied fields.
///
/// `Draft` carries the fields exactly as the caller supplied them; the
/// store adds the identifier. Field values pass through verbatim, so
/// empty strings, negative numbers, and duplicates across records are
/// all permitted.
pub trait Record: Clone {
    /// Caller-supplied fields, before an identifier is assigned.
    type Draft;

    /// The store-assigned identifier.
    fn id(&self) -> &RecordId;

    /// Combine an assigned identifier with the supplied fields.
    fn materialize(id: RecordId, draft: Self::Draft) -> Self;
}
