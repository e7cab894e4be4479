//! # lexipath — Pointer-Path Relationships over a Lexical Graph
//!
//! Models chains of semantic pointers (hypernym, meronym, similar-to, ...)
//! between synsets of a WordNet-style lexical graph.
//!
//! ## Design Principles
//!
//! 1. **Sum type, not hierarchy**: `Relationship` is `Symmetric | Asymmetric`, reversal dispatches by `match`
//! 2. **Checked construction**: every constructor returns `Result`; invalid paths never exist
//! 3. **Immutable values**: reversal builds a new relationship from an owned copy of the path
//! 4. **No dictionary here**: synsets are referenced by `SynsetId`; finding paths is the caller's job
//!
//! ## Quick Start
//!
//! ```rust
//! use lexipath::{PathNode, PathNodeList, PointerKind, Relationship, SynsetId};
//!
//! # fn example() -> lexipath::Result<()> {
//! // dog -@-> canine -@-> carnivore -~-> feline -~-> cat
//! let nodes: PathNodeList = [
//!     (PointerKind::Hypernym, 2084071),
//!     (PointerKind::Hypernym, 2083346),
//!     (PointerKind::Hypernym, 2075296),
//!     (PointerKind::Hyponym, 2120997),
//!     (PointerKind::Hyponym, 2121620),
//! ]
//! .into_iter()
//! .map(|(kind, offset)| PathNode::new(kind, SynsetId::noun(offset)))
//! .collect();
//!
//! let dog_to_cat = Relationship::asymmetric(
//!     PointerKind::Hypernym,
//!     nodes,
//!     2,
//!     SynsetId::noun(2084071),
//!     SynsetId::noun(2121620),
//! )?;
//! assert_eq!(dog_to_cat.relative_target_depth(), Some(0));
//!
//! let cat_to_dog = dog_to_cat.reverse()?;
//! assert_eq!(cat_to_dog.source(), SynsetId::noun(2121620));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod relationship;
pub mod export;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{PathNode, PathNodeList, PointerKind, Pos, SynsetId};

// ============================================================================
// Re-exports: Relationships
// ============================================================================

pub use relationship::{
    AsymmetricRelationship, Relationship, RelationshipCore, RelationshipList,
    SymmetricRelationship,
};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid relationship: {0}")]
    InvalidRelationship(String),

    #[error("Invalid divergence index {index} for a path of {len} nodes")]
    InvalidDivergenceIndex { index: i64, len: usize },

    #[error("Pointer kind {0} has no symmetric counterpart")]
    NoSymmetricCounterpart(PointerKind),

    #[error("Unknown pointer kind: {0}")]
    UnknownPointerKind(String),

    #[cfg(feature = "json")]
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
