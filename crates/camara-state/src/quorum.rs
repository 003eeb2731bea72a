//! # Quorum Policies
//!
//! Each proposition kind votes under one policy:
//!
//! | Kind | Policy | Floor for `n` voters |
//! |------|--------|----------------------|
//! | PL, PLP | [`QuorumPolicy::SimpleMajority`] | `n / 2 + 1` |
//! | PEC | [`QuorumPolicy::ThreeFifths`] | `(3 * n) / 5 + 1` |
//!
//! The three-fifths floor multiplies before dividing. Dividing first
//! truncates `3 / 5` to zero and collapses the floor to 1.
//!
//! The same floor gates presence: a vote may only be held when at least
//! `floor(n)` voters are present.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use camara_core::PropositionKind;

/// Inconsistent or non-positive voter counts (`InvalidQuorumInput`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuorumError {
    /// A stage must have at least one eligible voter.
    #[error("quorum invalido: total de votantes deve ser positivo")]
    NoEligibleVoters,

    /// More participants than eligible voters.
    #[error("quorum invalido: {participants} participantes para {total} votantes")]
    ParticipantsExceedTotal {
        /// Voters reported present.
        participants: usize,
        /// Eligible voters for the stage.
        total: u32,
    },

    /// More favorable votes than eligible voters.
    #[error("quorum invalido: {favorable} votos favoraveis para {total} votantes")]
    FavorableExceedTotal {
        /// Favorable votes reported.
        favorable: u32,
        /// Eligible voters for the stage.
        total: u32,
    },
}

/// The threshold rule a stage is voted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuorumPolicy {
    /// More than half of the eligible voters.
    SimpleMajority,
    /// More than three-fifths of the eligible voters.
    ThreeFifths,
}

impl QuorumPolicy {
    /// The policy a proposition kind is voted under.
    pub fn for_kind(kind: PropositionKind) -> Self {
        match kind {
            PropositionKind::OrdinaryLaw | PropositionKind::ComplementaryLaw => Self::SimpleMajority,
            PropositionKind::ConstitutionalAmendment => Self::ThreeFifths,
        }
    }

    /// Minimum favorable votes required to pass a stage of `total_voters`.
    pub fn floor(&self, total_voters: u32) -> Result<u32, QuorumError> {
        if total_voters == 0 {
            return Err(QuorumError::NoEligibleVoters);
        }
        let floor = match self {
            Self::SimpleMajority => total_voters / 2 + 1,
            // u64 keeps 3 * total from overflowing; the result always fits in u32.
            Self::ThreeFifths => {
                let scaled = 3 * u64::from(total_voters) / 5 + 1;
                u32::try_from(scaled).unwrap_or(u32::MAX)
            }
        };
        Ok(floor)
    }

    /// Whether enough voters are present to hold a valid vote.
    pub fn quorum_present<V>(&self, participants: &[V], total_voters: u32) -> Result<bool, QuorumError> {
        let floor = self.floor(total_voters)?;
        if participants.len() > total_voters as usize {
            return Err(QuorumError::ParticipantsExceedTotal {
                participants: participants.len(),
                total: total_voters,
            });
        }
        Ok(participants.len() >= floor as usize)
    }
}

impl std::fmt::Display for QuorumPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::SimpleMajority => "SIMPLE_MAJORITY",
            Self::ThreeFifths => "THREE_FIFTHS",
        };
        f.write_str(s)
    }
}
