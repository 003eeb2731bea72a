//! # Proposition Kinds
//!
//! The closed set of legislative proposition types. The kind is fixed when a
//! proposition is created and decides its voting threshold, whether it must
//! cite constitutional articles, and whether it can ever be conclusive.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A legislative proposition type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropositionKind {
    /// Projeto de Lei (PL). Simple majority; may be conclusive in committee.
    OrdinaryLaw,
    /// Projeto de Lei Complementar (PLP). Simple majority; cites the
    /// constitutional articles it regulates; always goes to plenary.
    ComplementaryLaw,
    /// Projeto de Emenda Constitucional (PEC). Three-fifths majority; cites
    /// the articles it amends; always goes to plenary.
    ConstitutionalAmendment,
}

impl PropositionKind {
    /// All kinds, in registry order.
    pub const ALL: [PropositionKind; 3] = [
        Self::OrdinaryLaw,
        Self::ComplementaryLaw,
        Self::ConstitutionalAmendment,
    ];

    /// The short registry code (`PL`, `PLP`, `PEC`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::OrdinaryLaw => "PL",
            Self::ComplementaryLaw => "PLP",
            Self::ConstitutionalAmendment => "PEC",
        }
    }

    /// The label that opens a proposition's summary line.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OrdinaryLaw => "Projeto de Lei",
            Self::ComplementaryLaw => "Projeto de Lei Complementar",
            Self::ConstitutionalAmendment => "Projeto de Emenda Constitucional",
        }
    }

    /// Whether propositions of this kind must list constitutional articles.
    pub fn requires_articles(&self) -> bool {
        matches!(self, Self::ComplementaryLaw | Self::ConstitutionalAmendment)
    }

    /// Whether propositions of this kind may be decided in committee alone.
    pub fn may_be_conclusive(&self) -> bool {
        matches!(self, Self::OrdinaryLaw)
    }
}

impl std::fmt::Display for PropositionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PropositionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("PL".parse::<PropositionKind>().unwrap(), PropositionKind::OrdinaryLaw);
        assert_eq!("plp".parse::<PropositionKind>().unwrap(), PropositionKind::ComplementaryLaw);
        assert_eq!(
            " Pec ".parse::<PropositionKind>().unwrap(),
            PropositionKind::ConstitutionalAmendment
        );
        assert!(matches!(
            "MPV".parse::<PropositionKind>(),
            Err(ValidationError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_display_round_trips_code() {
        for kind in PropositionKind::ALL {
            assert_eq!(kind.to_string().parse::<PropositionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_rules() {
        assert!(PropositionKind::OrdinaryLaw.may_be_conclusive());
        assert!(!PropositionKind::OrdinaryLaw.requires_articles());
        assert!(!PropositionKind::ComplementaryLaw.may_be_conclusive());
        assert!(PropositionKind::ConstitutionalAmendment.requires_articles());
        assert_eq!(
            PropositionKind::ConstitutionalAmendment.label(),
            "Projeto de Emenda Constitucional"
        );
    }
}
