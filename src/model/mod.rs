//! # Lexical Graph Model
//!
//! Plain data that every relationship is built from: pointer kinds,
//! synset identities and the path node list.
//!
//! Design rule: no dictionary lookups, no I/O here.
//! This module is pure data — no state beyond the values themselves.

pub mod pointer;
pub mod synset;
pub mod path;

pub use pointer::PointerKind;
pub use synset::{Pos, SynsetId};
pub use path::{PathNode, PathNodeList};
