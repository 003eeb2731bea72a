//! # camara CLI entry point
//!
//! Parses command-line arguments, initializes logging, and dispatches to
//! the subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use camara_cli::quorum::{run_floor, run_quorum, FloorArgs, QuorumArgs};
use camara_cli::tramitate::{run_tramitate, TramitateArgs};

/// Camara — legislative proposition tramitation.
///
/// Computes voting floors, checks quorum presence, and runs propositions
/// through committee and plenary votes.
#[derive(Parser, Debug)]
#[command(name = "camara", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    /// Without it, RUST_LOG is honoured.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Favorable votes needed to pass a stage.
    Floor(FloorArgs),

    /// Whether enough voters are present to hold a vote.
    Quorum(QuorumArgs),

    /// Register a proposition and run it through scripted stage votes.
    Tramitate(TramitateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "camara CLI starting");

    let result = match &cli.command {
        Commands::Floor(args) => run_floor(args, cli.json),
        Commands::Quorum(args) => run_quorum(args, cli.json),
        Commands::Tramitate(args) => run_tramitate(args, cli.json),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camara_core::PropositionKind;

    #[test]
    fn cli_parse_floor() {
        let cli = Cli::try_parse_from(["camara", "floor", "--kind", "pec", "--total", "513"]).unwrap();
        match cli.command {
            Commands::Floor(args) => {
                assert_eq!(args.kind, PropositionKind::ConstitutionalAmendment);
                assert_eq!(args.total, 513);
            }
            other => panic!("expected floor, got {other:?}"),
        }
    }

    #[test]
    fn cli_parse_tramitate_with_votes() {
        let cli = Cli::try_parse_from([
            "camara", "-vv", "--json", "tramitate",
            "--kind", "PLP", "--code", "PLP 1/2016", "--author", "061222222-0",
            "--year", "2016", "--summary", "Regulamenta", "--interests", "trabalho",
            "--url", "http://example.com", "--articles", "7", "--total", "10",
            "--vote", "CSSF:6", "--vote", "plenario:7",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
        match cli.command {
            Commands::Tramitate(args) => {
                assert_eq!(args.kind, PropositionKind::ComplementaryLaw);
                assert_eq!(args.votes.len(), 2);
                assert_eq!(args.votes[1].next_location, "plenario");
                assert_eq!(args.votes[1].favorable, 7);
                assert!(!args.conclusive);
            }
            other => panic!("expected tramitate, got {other:?}"),
        }
    }

    #[test]
    fn cli_parse_tramitate_with_number() {
        let cli = Cli::try_parse_from([
            "camara", "tramitate", "--kind", "PL", "--number", "3",
            "--author", "061222222-0", "--year", "2016", "--summary", "s",
            "--interests", "i", "--url", "u", "--total", "10",
        ])
        .unwrap();
        match cli.command {
            Commands::Tramitate(args) => {
                assert_eq!(args.code, None);
                assert_eq!(args.number, Some(3));
            }
            other => panic!("expected tramitate, got {other:?}"),
        }
    }

    #[test]
    fn cli_rejects_code_and_number_together() {
        let result = Cli::try_parse_from([
            "camara", "tramitate", "--kind", "PL", "--code", "PL 1/2016", "--number", "1",
            "--author", "061222222-0", "--year", "2016", "--summary", "s",
            "--interests", "i", "--url", "u", "--total", "10",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["camara", "floor", "--kind", "MPV", "--total", "10"]).is_err());
    }

    #[test]
    fn cli_rejects_malformed_vote() {
        let result = Cli::try_parse_from([
            "camara", "tramitate", "--kind", "PL", "--code", "PL 1/2016",
            "--author", "061222222-0", "--year", "2016", "--summary", "s",
            "--interests", "i", "--url", "u", "--total", "10", "--vote", "CTF",
        ]);
        assert!(result.is_err());
    }
}
