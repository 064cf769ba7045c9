//! Entity-kind to storage-collection mapping.

/// Ties an entity type to the document collection that stores it.
///
/// Collection names are the lowercase of the entity's type name
/// (`SchoolInfo` -> `schoolinfo`), so the mapping is deterministic and
/// needs no registry.
pub trait Collection {
    /// Name of the backing collection.
    const NAME: &'static str;
}
