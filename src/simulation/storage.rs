//! Raw score persistence.
//!
//! A run's scores are saved with bincode together with the seed and `max_num`
//! that produced them, so a sample can be re-analysed without re-running it.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::runner::SimulationResult;
use super::stats::ScoreStatistics;
use crate::core::SimulationError;

/// Scores of one run plus the parameters needed to interpret them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFile {
    pub seed: u64,
    pub max_num: u32,
    pub parallel: bool,
    pub chunk_size: usize,
    pub scores: Vec<u32>,
}

impl From<&SimulationResult> for ScoreFile {
    fn from(result: &SimulationResult) -> Self {
        Self {
            seed: result.config.seed,
            max_num: result.config.max_num,
            parallel: result.config.parallel,
            chunk_size: result.config.chunk_size,
            scores: result.scores.clone(),
        }
    }
}

impl ScoreFile {
    /// Write to `path`, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SimulationError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Read a file written by [`ScoreFile::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(bincode::deserialize_from(reader)?)
    }

    /// Statistics of the stored scores.
    #[must_use]
    pub fn statistics(&self) -> Option<ScoreStatistics> {
        ScoreStatistics::from_scores(&self.scores, self.max_num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SimulationConfig;
    use crate::simulation::simulate;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs").join("scores.bin");

        let result = simulate(SimulationConfig::new().with_iterations(100).with_seed(3)).unwrap();
        let file = ScoreFile::from(&result);
        file.save(&path).unwrap();

        let loaded = ScoreFile::load(&path).unwrap();
        assert_eq!(loaded, file);
        assert_eq!(loaded.seed, 3);
        assert_eq!(loaded.statistics().unwrap().count, 100);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ScoreFile::load(dir.path().join("absent.bin"));
        assert!(matches!(result, Err(SimulationError::Io(_))));
    }

    #[test]
    fn test_load_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.bin");
        fs::write(&path, [0xFFu8; 3]).unwrap();

        assert!(matches!(ScoreFile::load(&path), Err(SimulationError::Encoding(_))));
    }
}
