use std::{fmt, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Packs rectangles into a fixed-size bin")]
pub struct Options {
    #[structopt(subcommand)]
    pub command: Subcommand,
}

#[derive(Debug, StructOpt)]
pub enum Subcommand {
    /// Pack the rectangles listed in a job file. Writes one JSON row per
    /// rectangle, in input order.
    Pack(PackOptions),

    /// Check that a results file produced by `pack` has no rectangles outside
    /// the bin and no overlapping rectangles.
    Check(CheckOptions),
}

#[derive(Debug, StructOpt)]
pub struct PackOptions {
    /// The job file to read, either TOML or JSON.
    pub job: PathBuf,

    /// The size of the bin, like `512x256`. Overrides the job file.
    #[structopt(long)]
    pub bin_size: Option<BinSize>,

    /// How to choose between positions. Overrides the job file.
    ///
    /// Options:
    ///
    /// - best-fit: lowest top edge, then least wasted space (default)
    ///
    /// - bottom-left: lowest top edge, then leftmost
    #[structopt(long)]
    pub heuristic: Option<HeuristicOption>,

    /// Where to write results. Defaults to stdout.
    #[structopt(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct CheckOptions {
    /// The job file the results were packed from.
    pub job: PathBuf,

    /// The results file to check.
    pub results: PathBuf,

    /// The size of the bin the results were packed into, if it was given on
    /// the command line instead of in the job file.
    #[structopt(long)]
    pub bin_size: Option<BinSize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinSize {
    pub width: i64,
    pub height: i64,
}

impl FromStr for BinSize {
    type Err = String;

    fn from_str(value: &str) -> Result<BinSize, Self::Err> {
        let invalid = || format!("Invalid bin size '{}'. Expected WIDTHxHEIGHT.", value);

        let mut parts = value.splitn(2, |c: char| c == 'x' || c == 'X');
        let width = parts.next().ok_or_else(invalid)?;
        let height = parts.next().ok_or_else(invalid)?;

        Ok(BinSize {
            width: width.trim().parse().map_err(|_| invalid())?,
            height: height.trim().parse().map_err(|_| invalid())?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicOption {
    BestFit,
    BottomLeft,
}

impl Default for HeuristicOption {
    fn default() -> Self {
        HeuristicOption::BestFit
    }
}

impl FromStr for HeuristicOption {
    type Err = String;

    fn from_str(value: &str) -> Result<HeuristicOption, Self::Err> {
        match value {
            "best-fit" => Ok(HeuristicOption::BestFit),
            "bottom-left" => Ok(HeuristicOption::BottomLeft),

            _ => Err(String::from(
                "Invalid heuristic. Valid options are 'best-fit' and 'bottom-left'.",
            )),
        }
    }
}

impl fmt::Display for HeuristicOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HeuristicOption::BestFit => write!(f, "best-fit"),
            HeuristicOption::BottomLeft => write!(f, "bottom-left"),
        }
    }
}

impl From<HeuristicOption> for skypack::Heuristic {
    fn from(option: HeuristicOption) -> Self {
        match option {
            HeuristicOption::BestFit => skypack::Heuristic::BestFit,
            HeuristicOption::BottomLeft => skypack::Heuristic::BottomLeft,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_bin_size() {
        assert_eq!(
            "512x256".parse::<BinSize>(),
            Ok(BinSize {
                width: 512,
                height: 256
            })
        );
        assert_eq!(
            "10X0".parse::<BinSize>(),
            Ok(BinSize {
                width: 10,
                height: 0
            })
        );
    }

    #[test]
    fn parse_bad_bin_size() {
        assert!("512".parse::<BinSize>().is_err());
        assert!("axb".parse::<BinSize>().is_err());
        assert!("10x10x10".parse::<BinSize>().is_err());
    }

    #[test]
    fn parse_heuristic() {
        assert_eq!("best-fit".parse::<HeuristicOption>(), Ok(HeuristicOption::BestFit));
        assert_eq!("bottom-left".parse::<HeuristicOption>(), Ok(HeuristicOption::BottomLeft));
        assert!("tallest".parse::<HeuristicOption>().is_err());
    }
}
