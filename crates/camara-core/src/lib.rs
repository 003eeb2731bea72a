//! # camara-core — Foundational Types for the Camara Tramitation Engine
//!
//! This crate defines the primitives every other crate in the workspace
//! builds on. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** `LawCode` and `Dni` have
//!    validated constructors. A proposition's code can never be empty and an
//!    author DNI always has the `NNNNNNNNN-N` shape.
//!
//! 2. **Single `PropositionKind` enum.** Ordinary laws, complementary laws and
//!    constitutional amendments are one closed set of variants. Adding a kind
//!    forces every `match` in the workspace to handle it.
//!
//! 3. **Stateless validators.** The checks in [`validate`] are free functions
//!    with no shared state; they run once, before any tramitation state exists.
//!
//! 4. **UTC-only timestamps.** [`Timestamp`] is seconds-precision UTC.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `camara-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod kind;
pub mod temporal;
pub mod validate;

pub use error::ValidationError;
pub use identity::{Dni, LawCode};
pub use kind::PropositionKind;
pub use temporal::Timestamp;
pub use validate::{
    require_non_empty, require_valid_author_id, require_valid_year, require_valid_year_at,
    CONSTITUTION_YEAR,
};
