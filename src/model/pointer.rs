//! Pointer kinds — the labels on edges of the lexical graph.

use serde::{Deserialize, Serialize};
use crate::{Error, Result};

/// A semantic pointer kind (the relation an edge represents).
///
/// Serialized by its snake_case label, displayed by the same label.
/// [`PointerKind::symbol`] gives the compact WordNet pointer symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Antonym,
    Hypernym,
    Hyponym,
    InstanceHypernym,
    InstanceHyponym,
    MemberHolonym,
    SubstanceHolonym,
    PartHolonym,
    MemberMeronym,
    SubstanceMeronym,
    PartMeronym,
    Attribute,
    DerivationallyRelated,
    CategoryDomain,
    RegionDomain,
    UsageDomain,
    CategoryMember,
    RegionMember,
    UsageMember,
    Entailment,
    Cause,
    SimilarTo,
    VerbGroup,
    AlsoSee,
    ParticipleOf,
    Pertainym,
}

impl PointerKind {
    pub const ALL: [PointerKind; 26] = [
        PointerKind::Antonym,
        PointerKind::Hypernym,
        PointerKind::Hyponym,
        PointerKind::InstanceHypernym,
        PointerKind::InstanceHyponym,
        PointerKind::MemberHolonym,
        PointerKind::SubstanceHolonym,
        PointerKind::PartHolonym,
        PointerKind::MemberMeronym,
        PointerKind::SubstanceMeronym,
        PointerKind::PartMeronym,
        PointerKind::Attribute,
        PointerKind::DerivationallyRelated,
        PointerKind::CategoryDomain,
        PointerKind::RegionDomain,
        PointerKind::UsageDomain,
        PointerKind::CategoryMember,
        PointerKind::RegionMember,
        PointerKind::UsageMember,
        PointerKind::Entailment,
        PointerKind::Cause,
        PointerKind::SimilarTo,
        PointerKind::VerbGroup,
        PointerKind::AlsoSee,
        PointerKind::ParticipleOf,
        PointerKind::Pertainym,
    ];

    /// The kind used when the edge is walked in the opposite direction.
    ///
    /// Fails with [`Error::NoSymmetricCounterpart`] for one-way kinds
    /// (entailment, cause, participle-of, pertainym).
    pub fn symmetric_counterpart(self) -> Result<PointerKind> {
        use PointerKind::*;
        let counterpart = match self {
            Hypernym => Hyponym,
            Hyponym => Hypernym,
            InstanceHypernym => InstanceHyponym,
            InstanceHyponym => InstanceHypernym,
            MemberHolonym => MemberMeronym,
            MemberMeronym => MemberHolonym,
            SubstanceHolonym => SubstanceMeronym,
            SubstanceMeronym => SubstanceHolonym,
            PartHolonym => PartMeronym,
            PartMeronym => PartHolonym,
            CategoryDomain => CategoryMember,
            CategoryMember => CategoryDomain,
            RegionDomain => RegionMember,
            RegionMember => RegionDomain,
            UsageDomain => UsageMember,
            UsageMember => UsageDomain,
            Antonym | Attribute | DerivationallyRelated | SimilarTo | VerbGroup | AlsoSee => self,
            Entailment | Cause | ParticipleOf | Pertainym => {
                return Err(Error::NoSymmetricCounterpart(self));
            }
        };
        Ok(counterpart)
    }

    /// True when walking the edge backwards uses the same kind.
    pub fn is_self_symmetric(self) -> bool {
        matches!(self.symmetric_counterpart(), Ok(k) if k == self)
    }

    /// WordNet pointer symbol (`@`, `~`, `#m`, ...).
    pub fn symbol(self) -> &'static str {
        use PointerKind::*;
        match self {
            Antonym => "!",
            Hypernym => "@",
            Hyponym => "~",
            InstanceHypernym => "@i",
            InstanceHyponym => "~i",
            MemberHolonym => "#m",
            SubstanceHolonym => "#s",
            PartHolonym => "#p",
            MemberMeronym => "%m",
            SubstanceMeronym => "%s",
            PartMeronym => "%p",
            Attribute => "=",
            DerivationallyRelated => "+",
            CategoryDomain => ";c",
            RegionDomain => ";r",
            UsageDomain => ";u",
            CategoryMember => "-c",
            RegionMember => "-r",
            UsageMember => "-u",
            Entailment => "*",
            Cause => ">",
            SimilarTo => "&",
            VerbGroup => "$",
            AlsoSee => "^",
            ParticipleOf => "<",
            Pertainym => "\\",
        }
    }

    pub fn label(self) -> &'static str {
        use PointerKind::*;
        match self {
            Antonym => "antonym",
            Hypernym => "hypernym",
            Hyponym => "hyponym",
            InstanceHypernym => "instance_hypernym",
            InstanceHyponym => "instance_hyponym",
            MemberHolonym => "member_holonym",
            SubstanceHolonym => "substance_holonym",
            PartHolonym => "part_holonym",
            MemberMeronym => "member_meronym",
            SubstanceMeronym => "substance_meronym",
            PartMeronym => "part_meronym",
            Attribute => "attribute",
            DerivationallyRelated => "derivationally_related",
            CategoryDomain => "category_domain",
            RegionDomain => "region_domain",
            UsageDomain => "usage_domain",
            CategoryMember => "category_member",
            RegionMember => "region_member",
            UsageMember => "usage_member",
            Entailment => "entailment",
            Cause => "cause",
            SimilarTo => "similar_to",
            VerbGroup => "verb_group",
            AlsoSee => "also_see",
            ParticipleOf => "participle_of",
            Pertainym => "pertainym",
        }
    }
}

impl std::fmt::Display for PointerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for PointerKind {
    type Err = Error;

    /// Accepts either the pointer symbol or the label.
    fn from_str(s: &str) -> Result<Self> {
        PointerKind::ALL
            .iter()
            .copied()
            .find(|k| k.symbol() == s || k.label() == s)
            .ok_or_else(|| Error::UnknownPointerKind(s.to_string()))
    }
}
