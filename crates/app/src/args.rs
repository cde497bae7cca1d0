use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;

/// Folder Picker - browse, search, create and reorder a folder tree
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON file with the seed forest (overrides the config file)
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Serve no folders at all, to see a failed load
    #[arg(long)]
    pub no_seed: bool,

    /// Create a folder with this title at the top of the tree
    #[arg(long = "add", value_name = "TITLE")]
    pub add: Vec<String>,

    /// Drop one folder onto another
    #[arg(long = "move", value_name = "DRAGGED:TARGET", value_parser = parse_move)]
    pub moves: Vec<MoveArg>,

    /// Search text. Repeat to simulate typing; only the last value settles
    #[arg(short, long)]
    pub search: Vec<String>,

    /// Expand every folder before printing
    #[arg(long)]
    pub expand_all: bool,

    /// Key of the folder to select
    #[arg(long)]
    pub select: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveArg {
    pub dragged: String,
    pub target: String,
}

fn parse_move(value: &str) -> Result<MoveArg, String> {
    match value.split_once(':') {
        Some((dragged, target)) if !dragged.is_empty() && !target.is_empty() => Ok(MoveArg {
            dragged: dragged.to_string(),
            target: target.to_string(),
        }),
        _ => Err(format!("expected DRAGGED:TARGET, got '{}'", value)),
    }
}

impl Args {
    /// Let command line flags win over the config file
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(seed) = &self.seed {
            config.seed_path = Some(seed.clone());
        }
        if self.no_seed {
            config.missing_seed = true;
        }
        if let Some(log_level) = &self.log_level {
            config.log_level = log_level.clone();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(
            parse_move("aqh5jy:dfcihj"),
            Ok(MoveArg {
                dragged: "aqh5jy".to_string(),
                target: "dfcihj".to_string(),
            })
        );
        assert!(parse_move("aqh5jy").is_err());
        assert!(parse_move(":dfcihj").is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from([
            "folder-picker",
            "--seed",
            "forest.json",
            "--log-level",
            "debug",
            "--move",
            "a:b",
            "--move",
            "c:d",
            "-s",
            "fo",
            "-s",
            "folder",
        ]);
        assert_eq!(args.moves.len(), 2);
        assert_eq!(args.search, vec!["fo", "folder"]);

        let mut config = AppConfig::default();
        args.apply(&mut config);
        assert_eq!(config.seed_path, Some(PathBuf::from("forest.json")));
        assert_eq!(config.log_level, "debug");
        assert!(!config.missing_seed);
    }
}
