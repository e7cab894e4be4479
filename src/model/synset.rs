//! Synset identity in the lexical graph.

use serde::{Deserialize, Serialize};

/// Part of speech of a synset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl Pos {
    /// WordNet single-letter key.
    pub fn key(self) -> char {
        match self {
            Pos::Noun => 'n',
            Pos::Verb => 'v',
            Pos::Adjective => 'a',
            Pos::Adverb => 'r',
        }
    }
}

/// Opaque synset identifier: part of speech plus data-file offset.
///
/// Relationships only reference synsets by this id; the synsets themselves
/// belong to the dictionary that produced the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SynsetId {
    pub pos: Pos,
    pub offset: u64,
}

impl SynsetId {
    pub fn new(pos: Pos, offset: u64) -> Self {
        Self { pos, offset }
    }

    pub fn noun(offset: u64) -> Self {
        Self::new(Pos::Noun, offset)
    }

    pub fn verb(offset: u64) -> Self {
        Self::new(Pos::Verb, offset)
    }
}

impl std::fmt::Display for SynsetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:08}", self.pos.key(), self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_offset() {
        assert_eq!(SynsetId::noun(2084071).to_string(), "n02084071");
        assert_eq!(SynsetId::new(Pos::Adverb, 7).to_string(), "r00000007");
    }
}
