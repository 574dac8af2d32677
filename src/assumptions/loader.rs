//! CSV-based assumption loader
//!
//! Reads `key,value` rows from data/assumptions.csv (or a caller-supplied file)

use crate::error::PlanningResult;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default path to the assumptions file
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions.csv";

/// Raw `key,value` pairs in file order
#[derive(Debug, Clone, Default)]
pub struct LoadedAssumptions {
    pub overrides: Vec<(String, String)>,
}

impl LoadedAssumptions {
    /// Load overrides from the default path
    pub fn load_default() -> PlanningResult<Self> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load overrides from a specific file
    pub fn load_from(path: &Path) -> PlanningResult<Self> {
        let file = File::open(path)?;
        let loaded = Self::from_reader(file)?;
        debug!("Read {} assumption rows from {}", loaded.overrides.len(), path.display());
        Ok(loaded)
    }

    /// Load overrides from any reader
    pub fn from_reader<R: Read>(reader: R) -> PlanningResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut overrides = Vec::new();
        for result in reader.records() {
            let record = result?;
            let key = record.get(0).unwrap_or_default().to_string();
            let value = record.get(1).unwrap_or_default().to_string();
            overrides.push((key, value));
        }

        Ok(Self { overrides })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_assumptions() {
        let result = LoadedAssumptions::load_default();
        assert!(result.is_ok(), "Failed to load assumptions: {:?}", result.err());

        let loaded = result.unwrap();
        assert_eq!(loaded.overrides.len(), 8);
        assert_eq!(loaded.overrides[0], ("retirement_age".to_string(), "65".to_string()));
    }

    #[test]
    fn test_from_reader_trims_and_skips_comments() {
        let data = "key,value\n# tweak growth only\n growth_rate , 0.10 \n";
        let loaded = LoadedAssumptions::from_reader(data.as_bytes()).unwrap();
        assert_eq!(loaded.overrides, vec![("growth_rate".to_string(), "0.10".to_string())]);
    }
}
