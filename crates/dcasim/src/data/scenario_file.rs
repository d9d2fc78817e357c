//! YAML scenario lists
//!
//! ```yaml
//! - id: spy-10y
//!   input:
//!     asset: SPY
//!     initialInvestment: 0
//!     monthlyContribution: 250
//!     startDate: 2014-01
//!     endDate: 2023-12
//! ```

use std::fs;
use std::path::Path;

use dcasim_core::scenarios::Scenario;

use super::StorageError;

pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>, StorageError> {
    let content = fs::read_to_string(path)
        .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    serde_saphyr::from_str(&content)
        .map_err(|e| StorageError::Parse(format!("Failed to parse scenarios: {}", e)))
}

pub fn save_scenarios(path: &Path, scenarios: &[Scenario]) -> Result<(), StorageError> {
    let yaml = serde_saphyr::to_string(&scenarios)
        .map_err(|e| StorageError::Serialize(format!("Failed to serialize scenarios: {}", e)))?;

    crate::util::io::atomic_write(path, &yaml)
        .map_err(|e| StorageError::Io(format!("Failed to write scenarios: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcasim_core::scenarios::builtin_scenarios;
    use tempfile::tempdir;

    #[test]
    fn test_load_hand_written_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scenarios.yaml");
        fs::write(
            &path,
            "\
- id: spy-10y
  input:
    asset: SPY
    initialInvestment: 0
    monthlyContribution: 250
    startDate: \"2014-01\"
    endDate: \"2023-12\"
",
        )
        .unwrap();

        let scenarios = load_scenarios(&path).unwrap();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].id, "spy-10y");
        assert_eq!(scenarios[0].input.monthly_contribution, 250.0);
        assert_eq!(scenarios[0].input.end_month.to_string(), "2023-12");
    }

    #[test]
    fn test_save_then_load_builtins() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("builtin.yaml");
        let scenarios = builtin_scenarios();

        save_scenarios(&path, &scenarios).unwrap();
        assert_eq!(load_scenarios(&path).unwrap(), scenarios);
    }

    #[test]
    fn test_bad_month_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(
            &path,
            "- id: x\n  input: {asset: SPY, initialInvestment: 0, monthlyContribution: 1, startDate: \"2014-13\", endDate: \"2015-01\"}\n",
        )
        .unwrap();
        assert!(matches!(load_scenarios(&path), Err(StorageError::Parse(_))));
    }
}
