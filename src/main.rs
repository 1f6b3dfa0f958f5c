//! Headless simulator (default binary).
//!
//! Plays seeded games with the heuristic policy and reports the result.
//! Progress goes to stderr; with `--json` the report goes to stdout.

use anyhow::Result;

use tetrix::config::{parse_sim_args, SimConfig, USAGE};
use tetrix::report;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_sim_args(&args, SimConfig::from_env())? else {
        println!("{}", USAGE);
        return Ok(());
    };

    eprintln!(
        "[tetrix-sim] seed={} pieces={} games={}",
        config.seed, config.pieces, config.games
    );

    let report = report::run(&config);

    eprintln!("[tetrix-sim] {}", report.summary());
    if report.finished {
        eprintln!("[tetrix-sim] all {} game(s) ended", report.games_played);
    }

    if config.json {
        println!("{}", report.to_json()?);
    } else {
        for row in &report.board {
            println!("{}", row);
        }
    }

    Ok(())
}
