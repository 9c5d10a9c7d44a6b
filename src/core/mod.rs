pub mod loader;
pub mod parser;
pub mod registry;
pub mod report;

pub use crate::domain::model::{Department, Person};
pub use crate::utils::error::Result;
pub use registry::DepartmentRegistry;
