use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, RosterError};
use crate::utils::validation::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "roster-report")]
#[command(about = "Loads a semicolon-delimited employee roster and prints it with per-department counts")]
pub struct CliConfig {
    /// Input roster file: id;name;gender;birthDate;department;salary per line
    #[arg(long, default_value = "data.csv")]
    pub input: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.input.trim().is_empty() {
            return Err(RosterError::InvalidArgument {
                field: "input",
                reason: "path must not be empty".to_string(),
            });
        }
        if self.input.contains('\0') {
            return Err(RosterError::InvalidArgument {
                field: "input",
                reason: "path contains null bytes".to_string(),
            });
        }
        Ok(())
    }
}
