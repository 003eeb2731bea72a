//! # Tramitate Subcommand
//!
//! Registers a proposition from flags and applies each `--vote` in order.
//! Stops at the first refused vote and reports it as an error.

use anyhow::{bail, Context, Result};
use clap::Args;

use camara_core::{LawCode, PropositionKind};
use camara_state::{Proposition, PropositionDraft, TramitationEngine};

/// One scripted stage vote: destination and favorable votes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteStep {
    pub next_location: String,
    pub favorable: u32,
}

/// Parse `LOCATION:FAVORABLE` (e.g. `plenario:308`).
pub fn parse_vote_step(s: &str) -> Result<VoteStep, String> {
    let (location, favorable) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected LOCATION:FAVORABLE, got {s:?}"))?;
    let favorable = favorable
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid favorable vote count in {s:?}: {e}"))?;
    Ok(VoteStep {
        next_location: location.to_string(),
        favorable,
    })
}

/// Arguments for `camara tramitate`.
#[derive(Args, Debug)]
pub struct TramitateArgs {
    /// Proposition kind (PL, PLP or PEC).
    #[arg(long)]
    pub kind: PropositionKind,

    /// Law code, e.g. "PL 1/2016".
    #[arg(long, required_unless_present = "number", conflicts_with = "number")]
    pub code: Option<String>,

    /// Registry number; builds the code as "<KIND> <number>/<year>".
    #[arg(long)]
    pub number: Option<u32>,

    /// Author DNI (NNNNNNNNN-N).
    #[arg(long)]
    pub author: String,

    /// Year the proposition was filed.
    #[arg(long)]
    pub year: i32,

    /// Ementa.
    #[arg(long)]
    pub summary: String,

    /// Comma-separated interests.
    #[arg(long)]
    pub interests: String,

    /// Address of the full text.
    #[arg(long)]
    pub url: String,

    /// Constitutional articles (required for PLP and PEC).
    #[arg(long)]
    pub articles: Option<String>,

    /// Allow a PL to be decided in committee alone.
    #[arg(long)]
    pub conclusive: bool,

    /// Eligible voters at every stage.
    #[arg(long)]
    pub total: u32,

    /// Stage vote as LOCATION:FAVORABLE. Repeat for each stage, in order.
    #[arg(long = "vote", value_parser = parse_vote_step)]
    pub votes: Vec<VoteStep>,
}

/// Register the proposition, run the votes, and print the result.
pub fn run_tramitate(args: &TramitateArgs, json: bool) -> Result<u8> {
    let proposition = tramitate(args)?;

    if json {
        let out = serde_json::to_string_pretty(&proposition).context("serializing proposition")?;
        println!("{out}");
    } else {
        println!("{proposition}");
        println!("{}", proposition.tramitation());
    }
    Ok(0)
}

/// Build the proposition and apply every scripted vote.
pub fn tramitate(args: &TramitateArgs) -> Result<Proposition> {
    let code = match (&args.code, args.number) {
        (Some(code), _) => code.clone(),
        (None, Some(number)) => LawCode::numbered(args.kind, number, args.year).to_string(),
        (None, None) => bail!("either --code or --number is required"),
    };
    let mut proposition = Proposition::new(PropositionDraft {
        code,
        author: args.author.clone(),
        year: args.year,
        summary: args.summary.clone(),
        interests: args.interests.clone(),
        document_url: args.url.clone(),
        kind: args.kind,
        articles: args.articles.clone(),
        conclusive: args.conclusive,
    })?;
    tracing::info!(code = %proposition.code(), kind = %proposition.kind(), "proposition registered");

    let engine = TramitationEngine::new();
    for (i, step) in args.votes.iter().enumerate() {
        let outcome = engine
            .vote(&mut proposition, &step.next_location, step.favorable, args.total)
            .with_context(|| format!("vote {} ({})", i + 1, step.next_location))?;
        tracing::debug!(step = i + 1, %outcome, status = %proposition.status(), "vote applied");
    }
    Ok(proposition)
}
