//! CLI frontend for the whim responder.

mod logging;

use std::process;

use clap::Parser;
use whim_core::{Responder, Response, WhimConfig};

#[derive(Parser)]
#[command(
    name = "whim",
    about = "Rolls dice, picks between options, samples lists and answers yes/no questions",
    version
)]
struct Cli {
    /// RNG seed for reproducible replies (overrides WHIM_SEED)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print a {"results": [...]} JSON object instead of plain lines
    #[arg(long)]
    json: bool,

    /// Report the matched category on stderr
    #[arg(long)]
    explain: bool,

    /// The utterance; words are joined with single spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = match cli.seed {
        Some(seed) => WhimConfig::default().with_seed(seed),
        None => WhimConfig::from_env().map_err(|e| e.to_string())?,
    };
    let input = cli.words.join(" ");
    tracing::debug!(%input, seed = ?config.seed, "responding");

    let mut responder = Responder::new(&config);
    let (category, lines) = responder.dispatch(&input);

    if cli.explain {
        match category {
            Some(category) => eprintln!("category: {category}"),
            None => eprintln!("category: none"),
        }
    }

    if cli.json {
        let json = Response::new(lines).to_json().map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        for line in lines {
            println!("{line}");
        }
    }
    Ok(())
}
