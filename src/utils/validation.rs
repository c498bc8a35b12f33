use crate::utils::error::{DemoError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_known_names(field_name: &str, names: &[String], known: &[&str]) -> Result<()> {
    let known_set: HashSet<&str> = known.iter().copied().collect();

    for name in names {
        if !known_set.contains(name.as_str()) {
            return Err(DemoError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: format!("Unknown name. Known names: {}", known.join(", ")),
            });
        }
    }

    Ok(())
}
