use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::model::Department;
use crate::utils::error::Result;
use crate::utils::validation;

/// Deduplicating name -> department lookup with sequential id assignment.
///
/// The registry is an owned value scoped to one load session; creating a
/// fresh one per load keeps id assignment deterministic and test runs
/// isolated from each other.
#[derive(Debug)]
pub struct DepartmentRegistry {
    departments: HashMap<String, Arc<Department>>,
    next_id: u32,
}

impl Default for DepartmentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DepartmentRegistry {
    pub fn new() -> Self {
        DepartmentRegistry {
            departments: HashMap::new(),
            next_id: 1,
        }
    }

    /// Returns the department for `name`, creating it on first sight.
    ///
    /// The name is trimmed before lookup, so `" I "` and `"I"` resolve to the
    /// same entity. Ids start at 1 and grow by first-seen order, never
    /// reused within a session. An empty trimmed name is `InvalidArgument`.
    pub fn get_or_create(&mut self, name: &str) -> Result<Arc<Department>> {
        let name = validation::non_empty("department", name)?;

        if let Some(existing) = self.departments.get(name) {
            return Ok(Arc::clone(existing));
        }

        let department = Arc::new(Department {
            id: self.next_id,
            name: name.to_string(),
        });
        self.next_id += 1;
        self.departments
            .insert(name.to_string(), Arc::clone(&department));
        Ok(department)
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }
}
