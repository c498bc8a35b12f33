use crate::demos::DEMO_NAMES;
use crate::utils::error::Result;
use crate::utils::validation::{validate_known_names, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-patterns")]
#[command(about = "A small collection of classic design pattern demos")]
pub struct RunnerConfig {
    #[arg(long, value_delimiter = ',', help = "Run only the named demos")]
    pub only: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl RunnerConfig {
    /// 沒有指定 --only 時，依預設順序執行全部示範
    pub fn selected_demos(&self) -> Vec<&str> {
        if self.only.is_empty() {
            DEMO_NAMES.to_vec()
        } else {
            self.only.iter().map(String::as_str).collect()
        }
    }
}

impl Validate for RunnerConfig {
    fn validate(&self) -> Result<()> {
        validate_known_names("only", &self.only, DEMO_NAMES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_select_every_demo() {
        let config = RunnerConfig::try_parse_from(["small-patterns"]).unwrap();

        assert!(config.only.is_empty());
        assert!(!config.verbose);
        assert_eq!(config.selected_demos(), DEMO_NAMES.to_vec());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_only_keeps_requested_order() {
        let config =
            RunnerConfig::try_parse_from(["small-patterns", "--only", "strategy,factory"]).unwrap();

        assert_eq!(config.selected_demos(), vec!["strategy", "factory"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_demo_name() {
        let config =
            RunnerConfig::try_parse_from(["small-patterns", "--only", "observer"]).unwrap();

        let error = config.validate().unwrap_err();
        assert_eq!(error.exit_code(), 2);
    }
}
