pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::registry::DepartmentRegistry;
pub use crate::core::{loader, parser, report};
pub use crate::domain::model::{Department, Person};
pub use crate::utils::error::{Result, RosterError};
