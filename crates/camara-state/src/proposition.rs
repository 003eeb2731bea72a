//! # Proposition Entity
//!
//! A legislative proposition: immutable identity and descriptive fields set
//! at creation, plus a [`TramitationState`] record that only the
//! [`TramitationEngine`](crate::tramitation::TramitationEngine) mutates.
//!
//! ## Identity
//!
//! Two propositions are equal iff their [`LawCode`]s are equal, and they
//! hash by code alone. Sets and maps keyed on propositions therefore treat
//! re-registrations of the same code as the same proposition.
//!
//! ## Summary Line
//!
//! `Display` renders the registry's canonical one-line summary:
//!
//! ```text
//! <label> - <code> - <author> - <summary> - [<articles> - ]<status>
//! ```

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use camara_core::validate::{require_non_empty, require_valid_author_id, require_valid_year};
use camara_core::{Dni, LawCode, PropositionKind, ValidationError};

use crate::quorum::QuorumPolicy;
use crate::tramitation::{TramitationRecord, TramitationStage, VoteOutcome};

/// Committee every proposition starts in.
pub const INITIAL_LOCATION: &str = "CCJC";

/// Status every proposition starts with.
pub const INITIAL_STATUS: &str = "EM VOTACAO (CCJC)";

const REGISTER_CONTEXT: &str = "Erro ao cadastrar projeto: ";

/// Unvalidated construction arguments for a [`Proposition`].
#[derive(Debug, Clone)]
pub struct PropositionDraft {
    /// Law code, e.g. `"PEC 1/2016"`.
    pub code: String,
    /// Author DNI.
    pub author: String,
    /// Year the proposition was filed.
    pub year: i32,
    /// Ementa: the short statement of what the proposition does.
    pub summary: String,
    /// Comma-separated interests the proposition touches.
    pub interests: String,
    /// Address of the full text.
    pub document_url: String,
    /// Proposition type.
    pub kind: PropositionKind,
    /// Constitutional articles. Required for PLP and PEC, ignored for PL.
    pub articles: Option<String>,
    /// Whether a PL may be decided in committee alone. Ignored for PLP and PEC.
    pub conclusive: bool,
}

/// Mutable tramitation state, owned by exactly one proposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TramitationState {
    pub(crate) status: String,
    pub(crate) location: String,
    pub(crate) active: bool,
    pub(crate) passed_plenary: bool,
    pub(crate) approval_count: u32,
    pub(crate) committee_count: u32,
    pub(crate) history: Vec<TramitationRecord>,
}

impl Default for TramitationState {
    fn default() -> Self {
        Self {
            status: INITIAL_STATUS.to_string(),
            location: INITIAL_LOCATION.to_string(),
            active: true,
            passed_plenary: false,
            approval_count: 0,
            committee_count: 0,
            history: Vec::new(),
        }
    }
}

/// A legislative proposition and its tramitation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposition {
    code: LawCode,
    author: Dni,
    year: i32,
    summary: String,
    interests: String,
    document_url: String,
    kind: PropositionKind,
    articles: Option<String>,
    conclusive: bool,
    pub(crate) state: TramitationState,
}

impl Proposition {
    /// Validate a draft and create the proposition in its initial state
    /// (`"EM VOTACAO (CCJC)"` at `CCJC`, active, no votes held).
    ///
    /// Fails with the first [`ValidationError`] found; nothing is created.
    pub fn new(draft: PropositionDraft) -> Result<Self, ValidationError> {
        require_non_empty(
            &draft.code,
            "Erro ao cadastrar projeto: codigo de lei nao pode ser vazio ou nulo",
        )?;
        require_non_empty(
            &draft.summary,
            "Erro ao cadastrar projeto: ementa nao pode ser vazia ou nula",
        )?;
        require_non_empty(
            &draft.author,
            "Erro ao cadastrar projeto: autor nao pode ser vazio ou nulo",
        )?;
        require_non_empty(
            &draft.interests,
            "Erro ao cadastrar projeto: interesse nao pode ser vazio ou nulo",
        )?;
        require_non_empty(
            &draft.document_url,
            "Erro ao cadastrar projeto: url nao pode ser vazio ou nulo",
        )?;
        require_valid_author_id(&draft.author, REGISTER_CONTEXT)?;
        require_valid_year(draft.year, REGISTER_CONTEXT)?;

        let articles = if draft.kind.requires_articles() {
            match draft.articles {
                Some(articles) if !articles.trim().is_empty() => Some(articles),
                _ => {
                    return Err(ValidationError::MissingArticles {
                        context: REGISTER_CONTEXT.to_string(),
                    })
                }
            }
        } else {
            None
        };

        Ok(Self {
            code: LawCode::new(draft.code)?,
            author: Dni::new(draft.author)?,
            year: draft.year,
            summary: draft.summary,
            interests: draft.interests,
            document_url: draft.document_url,
            kind: draft.kind,
            articles,
            conclusive: draft.conclusive && draft.kind.may_be_conclusive(),
            state: TramitationState::default(),
        })
    }

    pub fn code(&self) -> &LawCode {
        &self.code
    }

    pub fn author(&self) -> &Dni {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn interests(&self) -> &str {
        &self.interests
    }

    pub fn document_url(&self) -> &str {
        &self.document_url
    }

    pub fn kind(&self) -> PropositionKind {
        self.kind
    }

    /// Constitutional articles cited (PLP and PEC only).
    pub fn articles(&self) -> Option<&str> {
        self.articles.as_deref()
    }

    /// Whether committee decisions are final for this proposition.
    pub fn is_conclusive(&self) -> bool {
        self.conclusive
    }

    /// The threshold rule this proposition is voted under.
    pub fn quorum_policy(&self) -> QuorumPolicy {
        QuorumPolicy::for_kind(self.kind)
    }

    pub fn status(&self) -> &str {
        &self.state.status
    }

    pub fn location(&self) -> &str {
        &self.state.location
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Whether at least one plenary vote has been held.
    pub fn passed_plenary(&self) -> bool {
        self.state.passed_plenary
    }

    /// Stages approved so far.
    pub fn approval_count(&self) -> u32 {
        self.state.approval_count
    }

    /// Stages traversed so far, committee or plenary.
    pub fn committee_count(&self) -> u32 {
        self.state.committee_count
    }

    /// Where the proposition currently sits.
    pub fn stage(&self) -> TramitationStage {
        TramitationStage::of(&self.state.location)
    }

    /// Outcome of the last stage voted, once that outcome is final.
    ///
    /// A conclusive proposition is decided by its last committee vote. A
    /// non-conclusive one has no final outcome until it has been voted in
    /// the plenary at least once.
    pub fn final_outcome(&self) -> Option<VoteOutcome> {
        if !self.conclusive && !self.state.passed_plenary {
            return None;
        }
        self.state.history.iter().rev().find_map(|record| record.outcome)
    }

    /// Whether the proposition has reached a final status.
    pub fn is_concluded(&self) -> bool {
        self.final_outcome().is_some()
    }

    /// Every status written by the engine, oldest first.
    pub fn history(&self) -> &[TramitationRecord] {
        &self.state.history
    }

    /// The history rendered as its statuses joined by `", "`.
    pub fn tramitation(&self) -> String {
        self.state
            .history
            .iter()
            .map(|record| record.status.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Move the proposition without a vote (external bookkeeping).
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.state.location = location.into();
    }

    /// Archive or reactivate the proposition.
    pub fn set_active(&mut self, active: bool) {
        self.state.active = active;
    }

    pub fn set_passed_plenary(&mut self, passed: bool) {
        self.state.passed_plenary = passed;
    }

    pub(crate) fn state_mut(&mut self) -> &mut TramitationState {
        &mut self.state
    }
}

impl PartialEq for Proposition {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Proposition {}

impl Hash for Proposition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl std::fmt::Display for Proposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} - {} - {} - ",
            self.kind.label(),
            self.code,
            self.author,
            self.summary
        )?;
        if let Some(articles) = &self.articles {
            write!(f, "{articles} - ")?;
        }
        f.write_str(&self.state.status)
    }
}
