//! # camara-cli — Command-Line Front-End
//!
//! Thin clap layer over `camara-core` and `camara-state`. Argument parsing
//! lives here; every decision is delegated to the library crates.
//!
//! ## Subcommands
//!
//! - `camara floor` — favorable votes needed to pass a stage.
//! - `camara quorum` — whether enough voters are present to hold a vote.
//! - `camara tramitate` — register a proposition and run it through a
//!   sequence of stage votes. `--number` builds the code from kind and year.
//!
//! ```bash
//! camara floor --kind PEC --total 513
//! camara quorum --kind PL --total 66 --present 34
//! camara tramitate --kind PLP --code "PLP 1/2016" --author 061222222-0 \
//!     --year 2016 --summary "Regulamenta" --interests trabalho \
//!     --url http://example.com --articles 7 --total 10 \
//!     --vote CSSF:6 --vote plenario:7
//! ```

pub mod quorum;
pub mod tramitate;
