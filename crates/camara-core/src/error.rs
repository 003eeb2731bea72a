//! # Error Types — Input Validation
//!
//! Every rejection raised while checking construction arguments is a
//! [`ValidationError`]. Messages follow the convention of the chamber's
//! registry: a caller-supplied context prefix (e.g.
//! `"Erro ao cadastrar projeto: "`) followed by a fixed reason, so the
//! rendered text reads as a single sentence.

use thiserror::Error;

/// Malformed construction input (the `InvalidInput` family).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was empty or whitespace-only.
    ///
    /// The message is the caller's full message, verbatim.
    #[error("{message}")]
    Empty {
        /// Message supplied by the caller.
        message: String,
    },

    /// The author identifier does not follow the `NNNNNNNNN-N` format.
    #[error("{context}dni invalido")]
    InvalidAuthorId {
        /// Context prefix supplied by the caller.
        context: String,
        /// The rejected value.
        value: String,
    },

    /// The year predates the 1988 constitution.
    #[error("{context}ano anterior a 1988")]
    YearBeforeConstitution {
        /// Context prefix supplied by the caller.
        context: String,
        /// The rejected year.
        year: i32,
    },

    /// The year lies after the current year.
    #[error("{context}ano posterior ao ano atual")]
    YearInFuture {
        /// Context prefix supplied by the caller.
        context: String,
        /// The rejected year.
        year: i32,
        /// The current year at validation time.
        current: i32,
    },

    /// A proposition kind code was not one of `PL`, `PLP`, `PEC`.
    #[error("tipo de proposicao desconhecido: {0:?}")]
    UnknownKind(String),

    /// A kind that amends or regulates the constitution was given no articles.
    #[error("{context}artigo nao pode ser vazio ou nulo")]
    MissingArticles {
        /// Context prefix supplied by the caller.
        context: String,
    },
}
