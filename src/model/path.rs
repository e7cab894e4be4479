//! Path node list — the ordered steps of a relationship.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use super::{PointerKind, SynsetId};

/// One step of a path: the pointer kind used to reach it and the synset reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathNode {
    pub kind: PointerKind,
    pub synset: SynsetId,
}

impl PathNode {
    pub fn new(kind: PointerKind, synset: SynsetId) -> Self {
        Self { kind, synset }
    }
}

/// Ordered steps from source (index 0) to target (last index).
///
/// Nodes are plain values, so `clone()` is a deep copy: mutating the clone
/// never touches the original.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathNodeList {
    nodes: SmallVec<[PathNode; 8]>,
}

impl PathNodeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(nodes: impl IntoIterator<Item = PathNode>) -> Self {
        Self { nodes: nodes.into_iter().collect() }
    }

    pub fn push(&mut self, node: PathNode) {
        self.nodes.push(node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PathNode> {
        self.nodes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut PathNode> {
        self.nodes.get_mut(index)
    }

    pub fn first(&self) -> Option<&PathNode> {
        self.nodes.first()
    }

    pub fn last(&self) -> Option<&PathNode> {
        self.nodes.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathNode> {
        self.nodes.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, PathNode> {
        self.nodes.iter_mut()
    }

    pub fn as_slice(&self) -> &[PathNode] {
        &self.nodes
    }

    /// Reverse the order in place: `new[i] == old[len - 1 - i]`.
    pub fn reverse(&mut self) {
        self.nodes.reverse();
    }

    /// Pointer kinds in path order.
    pub fn kinds(&self) -> impl Iterator<Item = PointerKind> + '_ {
        self.nodes.iter().map(|n| n.kind)
    }
}

impl FromIterator<PathNode> for PathNodeList {
    fn from_iter<I: IntoIterator<Item = PathNode>>(iter: I) -> Self {
        Self::from_nodes(iter)
    }
}

impl<'a> IntoIterator for &'a PathNodeList {
    type Item = &'a PathNode;
    type IntoIter = std::slice::Iter<'a, PathNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::ops::Index<usize> for PathNodeList {
    type Output = PathNode;

    fn index(&self, index: usize) -> &PathNode {
        &self.nodes[index]
    }
}
