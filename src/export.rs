//! Relationship export — JSON documents and a readable text dump.
//!
//! ```text
//! RelationshipList → export_json() → JSON array → import_json() → Vec<Relationship>
//! RelationshipList → export_dump() → one line per relationship
//! ```
//!
//! Import reads plain documents and rebuilds every relationship through the
//! checked constructors: an empty node list fails with
//! `Error::InvalidRelationship`, a common parent index outside the path
//! (negative included) with `Error::InvalidDivergenceIndex`.

use std::io::Write;
use crate::model::PathNode;
use crate::relationship::Relationship;
use crate::Result;
#[cfg(feature = "json")]
use crate::model::{PathNodeList, PointerKind, SynsetId};
#[cfg(feature = "json")]
use crate::relationship::{AsymmetricRelationship, RelationshipCore, SymmetricRelationship};
#[cfg(feature = "json")]
use crate::Error;

/// Write relationships as a JSON array.
#[cfg(feature = "json")]
pub fn export_json<'a>(
    relationships: impl IntoIterator<Item = &'a Relationship>,
    writer: &mut dyn Write,
) -> Result<()> {
    let relationships: Vec<&Relationship> = relationships.into_iter().collect();
    serde_json::to_writer_pretty(&mut *writer, &relationships)?;
    writeln!(writer)?;
    Ok(())
}

/// Read a JSON array of relationships written by [`export_json`].
///
/// Malformed JSON fails with `Error::Serialization`; well-formed documents
/// describing an invalid relationship fail with that relationship's typed
/// construction error.
#[cfg(feature = "json")]
pub fn import_json(reader: impl std::io::Read) -> Result<Vec<Relationship>> {
    let documents: Vec<RelationshipDoc> = serde_json::from_reader(reader)?;
    let relationships = documents
        .into_iter()
        .map(RelationshipDoc::build)
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(count = relationships.len(), "imported relationships");
    Ok(relationships)
}

// ============================================================================
// Import documents
// ============================================================================

/// Wire shape of a [`Relationship`], unchecked.
#[cfg(feature = "json")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "snake_case")]
enum RelationshipDoc {
    Symmetric(CoreDoc),
    Asymmetric(AsymmetricDoc),
}

#[cfg(feature = "json")]
#[derive(serde::Deserialize)]
struct CoreDoc {
    kind: PointerKind,
    nodes: PathNodeList,
    source: SynsetId,
    target: SynsetId,
}

#[cfg(feature = "json")]
#[derive(serde::Deserialize)]
struct AsymmetricDoc {
    #[serde(flatten)]
    core: CoreDoc,
    common_parent_index: i64,
}

#[cfg(feature = "json")]
impl RelationshipDoc {
    fn build(self) -> Result<Relationship> {
        match self {
            RelationshipDoc::Symmetric(doc) => {
                SymmetricRelationship::new(doc.kind, doc.nodes, doc.source, doc.target)
                    .map(Relationship::Symmetric)
            }
            RelationshipDoc::Asymmetric(doc) => {
                let core = RelationshipCore::new(
                    doc.core.kind,
                    doc.core.nodes,
                    doc.core.source,
                    doc.core.target,
                )?;
                let index = usize::try_from(doc.common_parent_index).map_err(|_| {
                    Error::InvalidDivergenceIndex {
                        index: doc.common_parent_index,
                        len: core.size(),
                    }
                })?;
                AsymmetricRelationship::from_core(core, index).map(Relationship::Asymmetric)
            }
        }
    }
}

/// Write a human-readable dump.
///
/// ```text
/// // lexipath relationship dump
/// // Relationships: 1
/// asymmetric hypernym n02084071 -> n02121620: @ n02084071 @ n02083346 *@ n02075296 ~ n02120997 ~ n02121620
/// ```
pub fn export_dump<'a>(
    relationships: impl IntoIterator<Item = &'a Relationship>,
    writer: &mut dyn Write,
) -> Result<()> {
    let relationships: Vec<&Relationship> = relationships.into_iter().collect();

    writeln!(writer, "// lexipath relationship dump")?;
    writeln!(writer, "// Relationships: {}", relationships.len())?;

    for rel in relationships {
        let family = if rel.is_symmetric() { "symmetric" } else { "asymmetric" };
        let parent = rel.common_parent_index();
        let steps: Vec<String> = rel
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let marker = if parent == Some(i) { "*" } else { "" };
                format!("{}{}", marker, format_node(node))
            })
            .collect();

        writeln!(
            writer,
            "{} {} {} -> {}: {}",
            family,
            rel.kind(),
            rel.source(),
            rel.target(),
            steps.join(" ")
        )?;
    }

    Ok(())
}

/// Format one step as `<symbol> <synset>`.
pub fn format_node(node: &PathNode) -> String {
    format!("{} {}", node.kind.symbol(), node.synset)
}
