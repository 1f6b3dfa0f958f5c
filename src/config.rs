use anyhow::{anyhow, Result};

pub const DEFAULT_SEED: u32 = 1;
pub const DEFAULT_PIECES: u64 = 1_000;
pub const DEFAULT_GAMES: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub seed: u32,
    /// Stop after this many spawned pieces across all games
    pub pieces: u64,
    pub games: u32,
    /// Write the report as JSON on stdout
    pub json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            pieces: DEFAULT_PIECES,
            games: DEFAULT_GAMES,
            json: false,
        }
    }
}

impl SimConfig {
    /// Defaults overridden by `TETRIX_SEED` and `TETRIX_PIECES`
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        use std::env;

        let seed = env::var("TETRIX_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_SEED);
        let pieces = env::var("TETRIX_PIECES")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_PIECES);

        Self {
            seed,
            pieces,
            ..Self::default()
        }
    }
}

pub const USAGE: &str = "usage: tetrix-sim [--seed N] [--pieces N] [--games N] [--json]";

/// Apply command-line flags on top of `base`
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_sim_args(args: &[String], base: SimConfig) -> Result<Option<SimConfig>> {
    let mut config = base;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                config.seed = parse_value(args.get(i), "--seed")?;
            }
            "--pieces" => {
                i += 1;
                config.pieces = parse_value(args.get(i), "--pieces")?;
            }
            "--games" => {
                i += 1;
                config.games = parse_value(args.get(i), "--games")?;
                if config.games == 0 {
                    return Err(anyhow!("--games must be at least 1"));
                }
            }
            "--json" => config.json = true,
            "-h" | "--help" => return Ok(None),
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(Some(config))
}

fn parse_value<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> Result<T> {
    let v = value.ok_or_else(|| anyhow!("missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_keeps_base() {
        let base = SimConfig {
            seed: 77,
            ..SimConfig::default()
        };
        let parsed = parse_sim_args(&[], base.clone()).unwrap();
        assert_eq!(parsed, Some(base));
    }

    #[test]
    fn test_flags_override() {
        let parsed = parse_sim_args(
            &args(&["--seed", "9", "--pieces", "250", "--games", "3", "--json"]),
            SimConfig::default(),
        )
        .unwrap()
        .unwrap();

        assert_eq!(parsed.seed, 9);
        assert_eq!(parsed.pieces, 250);
        assert_eq!(parsed.games, 3);
        assert!(parsed.json);
    }

    #[test]
    fn test_help_returns_none() {
        assert_eq!(parse_sim_args(&args(&["--help"]), SimConfig::default()).unwrap(), None);
    }

    #[test]
    fn test_bad_args_are_errors() {
        let base = SimConfig::default();
        let err = parse_sim_args(&args(&["--seed"]), base.clone()).unwrap_err();
        assert!(err.to_string().contains("missing value for --seed"));

        let err = parse_sim_args(&args(&["--pieces", "lots"]), base.clone()).unwrap_err();
        assert!(err.to_string().contains("invalid --pieces value: lots"));

        assert!(parse_sim_args(&args(&["--games", "0"]), base.clone()).is_err());
        assert!(parse_sim_args(&args(&["--fast"]), base).is_err());
    }
}
