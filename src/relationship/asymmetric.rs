//! Asymmetric relationships — paths with a divergence point.
//!
//! The source's and target's ancestries meet at the *common parent*. Up to
//! that node the path climbs one pointer kind; after it, the path descends
//! with the counterpart kind. For a hypernym path between "dog" and "cat":
//!
//! ```text
//!   index:   0       1         2           3        4
//!            dog -@-> canine -@-> carnivore -~-> feline -~-> cat
//!                                 ^ common parent (index 2)
//! ```

use std::sync::OnceLock;

use serde::Serialize;
use tracing::{debug, trace, warn};

use super::RelationshipCore;
use crate::model::{PathNodeList, PointerKind, SynsetId};
use crate::{Error, Result};

/// A relationship whose two branches use different pointer kinds.
///
/// Core fields never change after construction. The relative target depth
/// is computed on first request and cached; the cache is never serialized.
/// Documents are read back through [`crate::export::import_json`], which
/// rebuilds each relationship with the checked constructors.
#[derive(Debug, Clone, Serialize)]
pub struct AsymmetricRelationship {
    #[serde(flatten)]
    core: RelationshipCore,
    common_parent_index: usize,
    #[serde(skip)]
    relative_target_depth: OnceLock<i64>,
}

impl AsymmetricRelationship {
    /// Build a relationship diverging at `common_parent_index`.
    ///
    /// Fails with [`Error::InvalidRelationship`] on an empty node list and
    /// [`Error::InvalidDivergenceIndex`] when the index is not a position in
    /// `nodes`. Out-of-range indices are rejected, never clamped.
    pub fn new(
        kind: PointerKind,
        nodes: PathNodeList,
        common_parent_index: usize,
        source: SynsetId,
        target: SynsetId,
    ) -> Result<Self> {
        let core = RelationshipCore::new(kind, nodes, source, target)?;
        Self::from_core(core, common_parent_index)
    }

    pub(crate) fn from_core(core: RelationshipCore, common_parent_index: usize) -> Result<Self> {
        if common_parent_index >= core.size() {
            return Err(Error::InvalidDivergenceIndex {
                index: i64::try_from(common_parent_index).unwrap_or(i64::MAX),
                len: core.size(),
            });
        }
        Ok(Self {
            core,
            common_parent_index,
            relative_target_depth: OnceLock::new(),
        })
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

    /// Index of the node where the source and target ancestries diverge.
    pub fn common_parent_index(&self) -> usize {
        self.common_parent_index
    }

    /// Depth of the target below the common parent, relative to the depth
    /// of the source.
    ///
    /// `0` when both are equidistant from the common parent, positive when
    /// the target branch is longer, negative when the source branch is.
    pub fn relative_target_depth(&self) -> i64 {
        *self.relative_target_depth.get_or_init(|| {
            let source_to_parent = self.common_parent_index as i64;
            let parent_to_target = (self.core.size() as i64 - 1) - source_to_parent;
            let depth = parent_to_target - source_to_parent;
            trace!(
                common_parent_index = self.common_parent_index,
                size = self.core.size(),
                depth,
                "relative target depth computed"
            );
            depth
        })
    }

    /// The same relationship walked from target to source.
    ///
    /// The node list is copied and reversed, the common parent index is
    /// mirrored, and every node except the common parent has its pointer
    /// kind replaced by the symmetric counterpart. `self` is left untouched;
    /// on [`Error::NoSymmetricCounterpart`] the partially relabeled copy is
    /// dropped.
    pub fn reverse(&self) -> Result<AsymmetricRelationship> {
        let mut nodes = self.core.nodes().clone();
        nodes.reverse();
        let common_parent_index = (nodes.len() - 1) - self.common_parent_index;

        for (i, node) in nodes.iter_mut().enumerate() {
            if i == common_parent_index {
                continue;
            }
            let kind = node.kind.symmetric_counterpart().inspect_err(|_| {
                warn!(
                    kind = %node.kind,
                    position = i,
                    source = %self.source(),
                    target = %self.target(),
                    "reversal aborted: pointer kind has no symmetric counterpart"
                );
            })?;
            node.kind = kind;
        }

        debug!(
            kind = %self.kind(),
            from = self.common_parent_index,
            to = common_parent_index,
            size = nodes.len(),
            "reversed asymmetric relationship"
        );

        let core = RelationshipCore::new(self.kind(), nodes, self.target(), self.source())?;
        Self::from_core(core, common_parent_index)
    }
}

impl PartialEq for AsymmetricRelationship {
    fn eq(&self, other: &Self) -> bool {
        self.core == other.core && self.common_parent_index == other.common_parent_index
    }
}

impl Eq for AsymmetricRelationship {}
