//! Relationship lists — every path found between one pair of synsets.

use serde::Serialize;

use super::Relationship;
use crate::Result;

/// Relationships in the order the path engine produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RelationshipList {
    relationships: Vec<Relationship>,
}

impl RelationshipList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }

    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Relationship> {
        self.relationships.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Relationship> {
        self.relationships.iter()
    }

    /// The relationship with the fewest edges; the first one wins ties.
    pub fn shallowest(&self) -> Option<&Relationship> {
        self.relationships
            .iter()
            .reduce(|best, r| if r.depth() < best.depth() { r } else { best })
    }

    /// The relationship with the most edges; the first one wins ties.
    pub fn deepest(&self) -> Option<&Relationship> {
        self.relationships
            .iter()
            .reduce(|best, r| if r.depth() > best.depth() { r } else { best })
    }

    /// Reverse every relationship. The first failure is returned.
    pub fn reversed(&self) -> Result<RelationshipList> {
        self.relationships.iter().map(Relationship::reverse).collect()
    }

    pub fn into_inner(self) -> Vec<Relationship> {
        self.relationships
    }
}

impl FromIterator<Relationship> for RelationshipList {
    fn from_iter<I: IntoIterator<Item = Relationship>>(iter: I) -> Self {
        Self { relationships: iter.into_iter().collect() }
    }
}

impl IntoIterator for RelationshipList {
    type Item = Relationship;
    type IntoIter = std::vec::IntoIter<Relationship>;

    fn into_iter(self) -> Self::IntoIter {
        self.relationships.into_iter()
    }
}

impl<'a> IntoIterator for &'a RelationshipList {
    type Item = &'a Relationship;
    type IntoIter = std::slice::Iter<'a, Relationship>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PathNode, PathNodeList, PointerKind, SynsetId};
    use crate::Error;

    fn path(len: u64, tag: u64) -> Relationship {
        let nodes: PathNodeList = (0..len)
            .map(|i| PathNode::new(PointerKind::Hypernym, SynsetId::noun(tag * 100 + i)))
            .collect();
        Relationship::asymmetric(
            PointerKind::Hypernym,
            nodes,
            0,
            SynsetId::noun(tag * 100),
            SynsetId::noun(tag * 100 + len - 1),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_list() {
        let list = RelationshipList::new();
        assert!(list.shallowest().is_none());
        assert!(list.deepest().is_none());
        assert!(list.reversed().unwrap().is_empty());
    }

    #[test]
    fn test_shallowest_and_deepest() {
        let list: RelationshipList = [path(4, 1), path(2, 2), path(6, 3), path(2, 4)]
            .into_iter()
            .collect();
        assert_eq!(list.shallowest().unwrap().source(), SynsetId::noun(200));
        assert_eq!(list.deepest().unwrap().source(), SynsetId::noun(300));
    }

    #[test]
    fn test_reversed_preserves_order() {
        let list: RelationshipList = [path(3, 1), path(5, 2)].into_iter().collect();
        let reversed = list.reversed().unwrap();
        assert_eq!(reversed.len(), 2);
        assert_eq!(reversed.get(0).unwrap().source(), SynsetId::noun(102));
        assert_eq!(reversed.get(1).unwrap().source(), SynsetId::noun(204));
    }

    #[test]
    fn test_reversed_stops_at_first_failure() {
        let nodes: PathNodeList = [PointerKind::Hypernym, PointerKind::Pertainym]
            .into_iter()
            .enumerate()
            .map(|(i, k)| PathNode::new(k, SynsetId::noun(i as u64)))
            .collect();
        let bad = Relationship::asymmetric(
            PointerKind::Hypernym,
            nodes,
            0,
            SynsetId::noun(0),
            SynsetId::noun(1),
        )
        .unwrap();
        let list: RelationshipList = [path(3, 1), bad].into_iter().collect();
        assert!(matches!(
            list.reversed(),
            Err(Error::NoSymmetricCounterpart(PointerKind::Pertainym))
        ));
    }
}
