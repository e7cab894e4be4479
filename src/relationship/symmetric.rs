//! Symmetric relationships — the same pointer kind in both directions.

use serde::Serialize;
use tracing::debug;

use super::RelationshipCore;
use crate::model::{PathNodeList, PointerKind, SynsetId};
use crate::{Error, Result};

/// A relationship whose reverse walks the same pointer kinds
/// (similar-to, antonym, verb group, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymmetricRelationship {
    core: RelationshipCore,
}

impl SymmetricRelationship {
    /// Fails with [`Error::InvalidRelationship`] on an empty node list or a
    /// `kind` that reads differently when walked backwards.
    pub fn new(
        kind: PointerKind,
        nodes: PathNodeList,
        source: SynsetId,
        target: SynsetId,
    ) -> Result<Self> {
        if !kind.is_self_symmetric() {
            return Err(Error::InvalidRelationship(format!(
                "{kind} is not a symmetric pointer kind"
            )));
        }
        RelationshipCore::new(kind, nodes, source, target).map(|core| Self { core })
    }

    pub fn core(&self) -> &RelationshipCore {
        &self.core
    }

    pub fn kind(&self) -> PointerKind {
        self.core.kind()
    }

    pub fn nodes(&self) -> &PathNodeList {
        self.core.nodes()
    }

    pub fn source(&self) -> SynsetId {
        self.core.source()
    }

    pub fn target(&self) -> SynsetId {
        self.core.target()
    }

    /// Reverse node order and swap the ends. Pointer kinds are kept.
    pub fn reverse(&self) -> SymmetricRelationship {
        let mut nodes = self.core.nodes.clone();
        nodes.reverse();
        debug!(kind = %self.kind(), size = nodes.len(), "reversed symmetric relationship");
        Self {
            core: RelationshipCore {
                kind: self.core.kind,
                nodes,
                source: self.core.target,
                target: self.core.source,
            },
        }
    }
}
