//! # Relationships
//!
//! A relationship is a path of pointers from a source synset to a target
//! synset. Two families exist:
//!
//! | Family | Type | Reversal |
//! |--------|------|----------|
//! | Symmetric | [`SymmetricRelationship`] | reverse node order, swap ends |
//! | Asymmetric | [`AsymmetricRelationship`] | reverse, relabel both branches, move the common parent |
//!
//! [`Relationship`] is the sum of both and dispatches by `match`.

pub mod asymmetric;
pub mod symmetric;
pub mod list;

use serde::Serialize;
use crate::model::{PathNodeList, PointerKind, SynsetId};
use crate::{Error, Result};

pub use asymmetric::AsymmetricRelationship;
pub use symmetric::SymmetricRelationship;
pub use list::RelationshipList;

// ============================================================================
// Shared fields
// ============================================================================

/// Fields every relationship carries.
///
/// Owns its node list exclusively; source and target are references into
/// the dictionary by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipCore {
    kind: PointerKind,
    nodes: PathNodeList,
    source: SynsetId,
    target: SynsetId,
}

impl RelationshipCore {
    /// Fails with [`Error::InvalidRelationship`] when `nodes` is empty.
    pub fn new(
        kind: PointerKind,
        nodes: PathNodeList,
        source: SynsetId,
        target: SynsetId,
    ) -> Result<Self> {
        if nodes.is_empty() {
            return Err(Error::InvalidRelationship(format!(
                "{kind} relationship {source} -> {target} has no nodes"
            )));
        }
        Ok(Self { kind, nodes, source, target })
    }

    pub fn kind(&self) -> PointerKind {
        self.kind
    }

    pub fn nodes(&self) -> &PathNodeList {
        &self.nodes
    }

    pub fn source(&self) -> SynsetId {
        self.source
    }

    pub fn target(&self) -> SynsetId {
        self.target
    }

    /// Number of nodes in the path.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges walked from source to target.
    pub fn depth(&self) -> usize {
        self.nodes.len() - 1
    }
}

// ============================================================================
// Relationship sum type
// ============================================================================

/// A relationship of either family.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    Symmetric(SymmetricRelationship),
    Asymmetric(AsymmetricRelationship),
}

impl Relationship {
    /// Fails with [`Error::InvalidRelationship`] unless `kind` is its own
    /// symmetric counterpart.
    pub fn symmetric(
        kind: PointerKind,
        nodes: PathNodeList,
        source: SynsetId,
        target: SynsetId,
    ) -> Result<Self> {
        SymmetricRelationship::new(kind, nodes, source, target).map(Relationship::Symmetric)
    }

    pub fn asymmetric(
        kind: PointerKind,
        nodes: PathNodeList,
        common_parent_index: usize,
        source: SynsetId,
        target: SynsetId,
    ) -> Result<Self> {
        AsymmetricRelationship::new(kind, nodes, common_parent_index, source, target)
            .map(Relationship::Asymmetric)
    }

    pub fn core(&self) -> &RelationshipCore {
        match self {
            Relationship::Symmetric(r) => r.core(),
            Relationship::Asymmetric(r) => r.core(),
        }
    }

    pub fn kind(&self) -> PointerKind {
        self.core().kind()
    }

    pub fn nodes(&self) -> &PathNodeList {
        self.core().nodes()
    }

    pub fn source(&self) -> SynsetId {
        self.core().source()
    }

    pub fn target(&self) -> SynsetId {
        self.core().target()
    }

    pub fn size(&self) -> usize {
        self.core().size()
    }

    pub fn depth(&self) -> usize {
        self.core().depth()
    }

    pub fn is_symmetric(&self) -> bool {
        matches!(self, Relationship::Symmetric(_))
    }

    /// Divergence index; `None` for the symmetric family.
    pub fn common_parent_index(&self) -> Option<usize> {
        match self {
            Relationship::Symmetric(_) => None,
            Relationship::Asymmetric(r) => Some(r.common_parent_index()),
        }
    }

    /// Signed relative target depth; `None` for the symmetric family.
    pub fn relative_target_depth(&self) -> Option<i64> {
        match self {
            Relationship::Symmetric(_) => None,
            Relationship::Asymmetric(r) => Some(r.relative_target_depth()),
        }
    }

    /// A new relationship running from target back to source.
    pub fn reverse(&self) -> Result<Relationship> {
        match self {
            Relationship::Symmetric(r) => Ok(Relationship::Symmetric(r.reverse())),
            Relationship::Asymmetric(r) => r.reverse().map(Relationship::Asymmetric),
        }
    }
}

impl From<SymmetricRelationship> for Relationship {
    fn from(r: SymmetricRelationship) -> Self {
        Relationship::Symmetric(r)
    }
}

impl From<AsymmetricRelationship> for Relationship {
    fn from(r: AsymmetricRelationship) -> Self {
        Relationship::Asymmetric(r)
    }
}
