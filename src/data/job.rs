use std::{
    io,
    path::{Path, PathBuf},
};

use fs_err as fs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::options::{BinSize, HeuristicOption};

/// A set of rectangles to pack, contained in a TOML or JSON file.
///
/// Rectangles can either be given as parallel `widths` and `heights` lists,
/// or as a list of `rects`. Either way, the ID of each rectangle is its index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Job {
    /// The size of the bin to pack into. Can be left out if it will be given
    /// on the command line.
    #[serde(default)]
    pub bin_size: Option<(i64, i64)>,

    #[serde(default)]
    pub heuristic: Option<HeuristicOption>,

    #[serde(default)]
    pub widths: Vec<i64>,

    #[serde(default)]
    pub heights: Vec<i64>,

    #[serde(default)]
    pub rects: Vec<RectConfig>,

    /// The path that this job came from.
    #[serde(skip)]
    pub file_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct RectConfig {
    pub width: i64,
    pub height: i64,
}

impl Job {
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, JobError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let mut job: Self = if is_json(path) {
            serde_json::from_str(&contents).map_err(|source| JobError::Json {
                path: path.to_owned(),
                source,
            })?
        } else {
            toml::from_str(&contents).map_err(|source| JobError::Toml {
                path: path.to_owned(),
                source,
            })?
        };
        job.file_path = path.to_owned();

        Ok(job)
    }

    /// The bin size to use, preferring the one given on the command line.
    pub fn bin_size(&self, from_options: Option<BinSize>) -> Result<(i64, i64), JobError> {
        match (from_options, self.bin_size) {
            (Some(size), _) => Ok((size.width, size.height)),
            (None, Some(size)) => Ok(size),
            (None, None) => Err(JobError::MissingBinSize {
                path: self.file_path.clone(),
            }),
        }
    }

    /// The widths and heights of all rectangles in the job, as parallel
    /// lists. The lists are passed through unchecked, so mismatched lengths
    /// are reported by the packer.
    pub fn dimensions(&self) -> Result<(Vec<i64>, Vec<i64>), JobError> {
        if self.rects.is_empty() {
            return Ok((self.widths.clone(), self.heights.clone()));
        }

        if !self.widths.is_empty() || !self.heights.is_empty() {
            return Err(JobError::ConflictingInputs {
                path: self.file_path.clone(),
            });
        }

        Ok(self
            .rects
            .iter()
            .map(|rect| (rect.width, rect.height))
            .unzip())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|extension| extension.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

#[derive(Debug, Error)]
pub enum JobError {
    #[error("{source} in {}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{source} in {}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} lists both rects and widths/heights, use one or the other", .path.display())]
    ConflictingInputs { path: PathBuf },

    #[error("No bin size was given. Set bin-size in {} or pass --bin-size.", .path.display())]
    MissingBinSize { path: PathBuf },

    #[error(transparent)]
    Io {
        #[from]
        source: io::Error,
    },
}

impl JobError {
    /// Tells whether this JobError originated because of a path not existing.
    pub fn is_not_found(&self) -> bool {
        match self {
            JobError::Io { source } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parallel_lists() {
        let job: Job = toml::from_str(
            r#"
            bin-size = [10, 20]
            heuristic = "bottom-left"
            widths = [1, 2, 3]
            heights = [4, 5, 6]
            "#,
        )
        .unwrap();

        assert_eq!(job.bin_size(None).unwrap(), (10, 20));
        assert_eq!(job.heuristic, Some(HeuristicOption::BottomLeft));
        assert_eq!(
            job.dimensions().unwrap(),
            (vec![1, 2, 3], vec![4, 5, 6])
        );
    }

    #[test]
    fn rect_list() {
        let job: Job = toml::from_str(
            r#"
            rects = [
                { width = 3, height = 4 },
                { width = 5, height = 6 },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(job.heuristic, None);
        assert_eq!(job.dimensions().unwrap(), (vec![3, 5], vec![4, 6]));
    }

    #[test]
    fn json_job() {
        let job: Job =
            serde_json::from_str(r#"{ "bin-size": [8, 8], "widths": [1], "heights": [2] }"#)
                .unwrap();

        assert_eq!(job.bin_size, Some((8, 8)));
        assert_eq!(job.dimensions().unwrap(), (vec![1], vec![2]));
    }

    #[test]
    fn conflicting_inputs() {
        let job: Job = toml::from_str(
            r#"
            widths = [1]
            heights = [1]
            rects = [{ width = 1, height = 1 }]
            "#,
        )
        .unwrap();

        match job.dimensions() {
            Err(JobError::ConflictingInputs { .. }) => {}
            other => panic!("expected ConflictingInputs, got {:?}", other),
        }
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<Job, _> = toml::from_str("bin-size = [1, 1]\nrotate = true\n");

        assert!(result.is_err());
    }

    #[test]
    fn command_line_bin_size_wins() {
        let job: Job = toml::from_str("bin-size = [10, 10]").unwrap();
        let from_options = BinSize {
            width: 32,
            height: 16,
        };

        assert_eq!(job.bin_size(Some(from_options)).unwrap(), (32, 16));
    }

    #[test]
    fn missing_bin_size() {
        let job: Job = toml::from_str("widths = [1]\nheights = [1]").unwrap();

        match job.bin_size(None) {
            Err(JobError::MissingBinSize { .. }) => {}
            other => panic!("expected MissingBinSize, got {:?}", other),
        }
    }

    #[test]
    fn missing_file() {
        let err = Job::read_from_file("definitely/not/here.toml").unwrap_err();

        assert!(err.is_not_found());
    }
}
