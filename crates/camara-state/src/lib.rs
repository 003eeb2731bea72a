//! # camara-state — Proposition Tramitation
//!
//! Models legislative propositions moving through committee review and,
//! for non-conclusive propositions, plenary votes.
//!
//! - **Proposition** (`proposition.rs`): the entity. Identity and
//!   descriptive fields are validated once at creation and never change;
//!   tramitation state lives in a single record that only the engine writes.
//!
//! - **Quorum** (`quorum.rs`): per-kind threshold policies. Ordinary and
//!   complementary laws pass on a simple majority, constitutional amendments
//!   on three-fifths.
//!
//! - **Tramitation** (`tramitation.rs`): the vote state machine. One call
//!   votes one stage, updates status, location and counters, and appends to
//!   the proposition's history. A refused call mutates nothing.
//!
//! Everything here is synchronous and in-memory. Callers that share a
//! proposition across threads must serialize votes on it themselves.

pub mod proposition;
pub mod quorum;
pub mod tramitation;

pub use proposition::{Proposition, PropositionDraft, TramitationState, INITIAL_LOCATION, INITIAL_STATUS};
pub use quorum::{QuorumError, QuorumPolicy};
pub use tramitation::{
    is_plenary, TramitationEngine, TramitationError, TramitationRecord, TramitationStage,
    VoteOutcome, PLENARY, PLENARY_FIRST_ROUND,
};
