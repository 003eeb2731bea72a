//! # Tramitation Engine
//!
//! Advances a proposition through one voting stage at a time.
//!
//! ## States
//!
//! ```text
//! Committee("CCJC") ──vote──▶ Committee(next) ──vote──▶ ... ──vote──▶ Plenary
//!        pending              approved | rejected                 approved | rejected
//! ```
//!
//! A conclusive proposition may finish in committee. A non-conclusive one
//! reaches a final status only after at least one plenary round.
//!
//! ## Vote
//!
//! [`TramitationEngine::vote`] checks every precondition first (active
//! proposition, non-empty destination, consistent voter counts), so a
//! failed call leaves the proposition untouched. A successful call:
//!
//! 1. writes `"EM VOTACAO (<next>)"`, or `"EM VOTACAO (Plenario - 1o turno)"`
//!    when the destination is the plenary;
//! 2. writes `"APROVADO (<current>)"` and bumps the approval count when the
//!    favorable votes reach the kind's floor, `"REJEITADO (<current>)"`
//!    otherwise;
//! 3. moves the proposition to the destination, marks the plenary as passed
//!    when applicable, and counts the stage.
//!
//! Every status written is appended to the proposition's history.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use camara_core::validate::require_non_empty;
use camara_core::{Timestamp, ValidationError};

use crate::proposition::Proposition;
use crate::quorum::QuorumError;

/// Name that designates the plenary as a destination.
pub const PLENARY: &str = "plenario";

/// Status written when a proposition is sent to the plenary.
pub const PLENARY_FIRST_ROUND: &str = "EM VOTACAO (Plenario - 1o turno)";

/// Whether a location name designates the plenary.
pub fn is_plenary(location: &str) -> bool {
    location.trim().eq_ignore_ascii_case(PLENARY)
}

// ─── Stage ───────────────────────────────────────────────────────────

/// Where a proposition sits in the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TramitationStage {
    /// Under review by the named committee.
    Committee(String),
    /// Before the full chamber.
    Plenary,
}

impl TramitationStage {
    /// The stage a location name denotes.
    pub fn of(location: &str) -> Self {
        if is_plenary(location) {
            Self::Plenary
        } else {
            Self::Committee(location.to_string())
        }
    }
}

impl std::fmt::Display for TramitationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Committee(name) => f.write_str(name),
            Self::Plenary => f.write_str("Plenario"),
        }
    }
}

// ─── Outcome and Records ─────────────────────────────────────────────

/// Result of a single stage vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteOutcome {
    Approved,
    Rejected,
}

impl VoteOutcome {
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl std::fmt::Display for VoteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Approved => "APROVADO",
            Self::Rejected => "REJEITADO",
        };
        f.write_str(s)
    }
}

/// One status written by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TramitationRecord {
    /// Location the proposition was voted in.
    pub from_location: String,
    /// Destination of the vote.
    pub to_location: String,
    /// Status text written.
    pub status: String,
    /// Set on the record that closes a vote; `None` when the vote opens.
    pub outcome: Option<VoteOutcome>,
    /// When the status was written.
    pub timestamp: Timestamp,
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors returned by the tramitation engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TramitationError {
    /// Malformed vote arguments.
    #[error("Erro ao votar proposta: {0}")]
    InvalidInput(#[from] ValidationError),

    /// Non-positive or inconsistent voter counts.
    #[error("Erro ao votar proposta: {0}")]
    InvalidQuorumInput(#[from] QuorumError),

    /// Vote attempted on an archived or withdrawn proposition.
    #[error("Erro ao votar proposta: proposicao {code} inativa")]
    InactiveProposition {
        /// Code of the inactive proposition.
        code: String,
    },
}

// ─── Engine ──────────────────────────────────────────────────────────

/// The single entry point that mutates a proposition's tramitation state.
#[derive(Debug, Clone, Copy, Default)]
pub struct TramitationEngine;

impl TramitationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Vote the proposition's current stage and move it to `next_location`.
    pub fn vote(
        &self,
        proposition: &mut Proposition,
        next_location: &str,
        favorable_votes: u32,
        total_voters: u32,
    ) -> Result<VoteOutcome, TramitationError> {
        if !proposition.is_active() {
            tracing::warn!(code = %proposition.code(), "vote refused: proposition is inactive");
            return Err(TramitationError::InactiveProposition {
                code: proposition.code().to_string(),
            });
        }
        require_non_empty(next_location, "proximo local vazio")?;
        let next_location = next_location.trim();

        let floor = proposition
            .quorum_policy()
            .floor(total_voters)
            .map_err(|e| {
                tracing::warn!(code = %proposition.code(), error = %e, "vote refused");
                e
            })?;
        if favorable_votes > total_voters {
            tracing::warn!(
                code = %proposition.code(),
                favorable_votes,
                total_voters,
                "vote refused: more favorable votes than voters"
            );
            return Err(QuorumError::FavorableExceedTotal {
                favorable: favorable_votes,
                total: total_voters,
            }
            .into());
        }

        tracing::debug!(
            code = %proposition.code(),
            location = %proposition.location(),
            next_location,
            floor,
            favorable_votes,
            total_voters,
            "tallying stage vote"
        );

        let to_plenary = is_plenary(next_location);
        let state = proposition.state_mut();
        let current = state.location.clone();
        let timestamp = Timestamp::now();

        let opening = if to_plenary {
            PLENARY_FIRST_ROUND.to_string()
        } else {
            format!("EM VOTACAO ({next_location})")
        };
        state.status = opening.clone();
        state.history.push(TramitationRecord {
            from_location: current.clone(),
            to_location: next_location.to_string(),
            status: opening,
            outcome: None,
            timestamp,
        });

        let outcome = if favorable_votes >= floor {
            state.approval_count += 1;
            VoteOutcome::Approved
        } else {
            VoteOutcome::Rejected
        };
        let closing = format!("{outcome} ({current})");
        state.status = closing.clone();
        state.history.push(TramitationRecord {
            from_location: current,
            to_location: next_location.to_string(),
            status: closing,
            outcome: Some(outcome),
            timestamp,
        });

        state.location = next_location.to_string();
        if to_plenary {
            state.passed_plenary = true;
        }
        state.committee_count += 1;

        tracing::info!(
            code = %proposition.code(),
            status = %proposition.status(),
            location = %proposition.location(),
            "stage vote concluded"
        );
        Ok(outcome)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::proposition::PropositionDraft;
    use camara_core::PropositionKind;
    use proptest::prelude::*;

    fn kind_strategy() -> impl Strategy<Value = PropositionKind> {
        prop_oneof![
            Just(PropositionKind::OrdinaryLaw),
            Just(PropositionKind::ComplementaryLaw),
            Just(PropositionKind::ConstitutionalAmendment),
        ]
    }

    fn make(kind: PropositionKind) -> Proposition {
        Proposition::new(PropositionDraft {
            code: "PX 1/2020".to_string(),
            author: "111111111-1".to_string(),
            year: 2020,
            summary: "ementa".to_string(),
            interests: "saude".to_string(),
            document_url: "http://example.com".to_string(),
            kind,
            articles: Some("196".to_string()),
            conclusive: false,
        })
        .unwrap()
    }

    proptest! {
        /// Outcome matches the floor, and only approvals bump the approval count.
        #[test]
        fn outcome_follows_floor(
            kind in kind_strategy(),
            (total, favorable) in (1u32..600).prop_flat_map(|t| (Just(t), 0..=t)),
        ) {
            let mut p = make(kind);
            let floor = p.quorum_policy().floor(total).unwrap();
            let outcome = TramitationEngine.vote(&mut p, "CTF", favorable, total).unwrap();
            prop_assert_eq!(outcome.is_approved(), favorable >= floor);
            prop_assert_eq!(p.approval_count(), u32::from(outcome.is_approved()));
            prop_assert_eq!(p.committee_count(), 1);
        }

        /// Counters never decrease and every call counts exactly one stage.
        #[test]
        fn counters_are_monotonic(
            kind in kind_strategy(),
            votes in prop::collection::vec((0u32..=20, any::<bool>()), 1..12),
        ) {
            let mut p = make(kind);
            for (i, (favorable, plenary)) in votes.iter().enumerate() {
                let approvals = p.approval_count();
                let next = if *plenary { "plenario" } else { "CTF" };
                TramitationEngine.vote(&mut p, next, *favorable, 20).unwrap();
                prop_assert!(p.approval_count() >= approvals);
                prop_assert!(p.approval_count() - approvals <= 1);
                prop_assert_eq!(p.committee_count() as usize, i + 1);
            }
            prop_assert_eq!(p.passed_plenary(), votes.iter().any(|(_, plenary)| *plenary));
        }
    }
}
