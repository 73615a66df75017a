use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::{derive_email, CreateEmployeeInput, Employee};

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Susan", "Richard", "Jessica", "Joseph", "Sarah",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Wilson", "Anderson", "Taylor", "Thomas",
];

const TITLES: &[&str] = &[
    "Software Engineer",
    "Senior Developer",
    "Tech Lead",
    "Product Manager",
    "QA Analyst",
    "Data Engineer",
    "Site Reliability Engineer",
    "Engineering Manager",
];

/// In-memory employee collection and the query engine over it.
///
/// The directory exclusively owns its storage; callers only ever see cloned
/// records or identifiers. All reads and writes are serialized through one
/// lock, so no caller can observe a partially applied mutation.
pub struct EmployeeDirectory {
    employees: RwLock<Vec<Employee>>,
}

impl EmployeeDirectory {
    pub fn new() -> Self {
        Self {
            employees: RwLock::new(Vec::new()),
        }
    }

    /// Builds a directory from existing records, e.g. test fixtures.
    pub fn from_records(records: Vec<Employee>) -> Self {
        Self {
            employees: RwLock::new(records),
        }
    }

    /// Seeds the directory with `count` generated mock employees.
    pub fn with_mock_data(count: usize) -> Self {
        let mut rng = rand::thread_rng();
        let employees = (0..count)
            .map(|_| {
                let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Alex");
                let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Doe");
                let name = format!("{} {}", first, last);
                Employee {
                    id: Uuid::new_v4(),
                    email: Some(derive_email(&name)),
                    name: Some(name),
                    salary: Some(rng.gen_range(45..=160) * 1_000),
                    age: Some(rng.gen_range(21..=65)),
                    title: TITLES.choose(&mut rng).map(|t| t.to_string()),
                }
            })
            .collect();

        tracing::debug!(count, "seeded employee directory with mock data");
        Self {
            employees: RwLock::new(employees),
        }
    }

    /// Snapshot copy of the whole collection.
    pub fn list(&self) -> Result<Vec<Employee>> {
        Ok(self.read_guard()?.clone())
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.read_guard()?.len())
    }

    pub fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>> {
        let employees = self.read_guard()?;
        Ok(employees.iter().find(|e| e.id == id).cloned())
    }

    /// Case-insensitive containment match on the name. Records without a
    /// name never match. Blank input yields an empty result, not the whole
    /// collection.
    pub fn search_by_name(&self, search: &str) -> Result<Vec<Employee>> {
        if search.trim().is_empty() {
            tracing::warn!("empty search string provided");
            return Ok(Vec::new());
        }

        let needle = search.to_lowercase();
        let employees = self.read_guard()?;
        let results: Vec<Employee> = employees
            .iter()
            .filter(|e| {
                e.name
                    .as_ref()
                    .is_some_and(|n| n.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();

        tracing::debug!(count = results.len(), search = %search, "searched employees by name");
        Ok(results)
    }

    /// Maximum over all present salaries; `None` when no record has one.
    pub fn highest_salary(&self) -> Result<Option<i32>> {
        let employees = self.read_guard()?;
        Ok(employees.iter().filter_map(|e| e.salary).max())
    }

    /// Names of the `n` highest-paid employees, descending. Records missing
    /// a name or a salary are skipped; ties keep their original relative
    /// order.
    pub fn top_earners(&self, n: usize) -> Result<Vec<String>> {
        let employees = self.read_guard()?;
        let mut ranked: Vec<(&String, i32)> = employees
            .iter()
            .filter_map(|e| match (&e.name, e.salary) {
                (Some(name), Some(salary)) => Some((name, salary)),
                _ => None,
            })
            .collect();

        // Stable sort, so equal salaries preserve insertion order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        Ok(ranked
            .into_iter()
            .take(n)
            .map(|(name, _)| name.clone())
            .collect())
    }

    pub fn create(&self, input: &CreateEmployeeInput) -> Result<Employee> {
        let employee = Employee::from_input(input);
        let mut employees = self.write_guard()?;
        employees.push(employee.clone());
        tracing::debug!(id = %employee.id, "added employee");
        Ok(employee)
    }

    /// Removes the first record whose name matches case-insensitively.
    pub fn delete_by_name(&self, name: &str) -> Result<bool> {
        let mut employees = self.write_guard()?;
        let position = employees
            .iter()
            .position(|e| e.name.as_ref().is_some_and(|n| n.eq_ignore_ascii_case(name)));

        match position {
            Some(index) => {
                let removed = employees.remove(index);
                tracing::debug!(id = %removed.id, "removed employee by name");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn delete_by_id(&self, id: Uuid) -> Result<bool> {
        let mut employees = self.write_guard()?;
        let position = employees.iter().position(|e| e.id == id);

        match position {
            Some(index) => {
                employees.remove(index);
                tracing::debug!(id = %id, "removed employee by id");
                Ok(true)
            }
            None => {
                tracing::warn!(id = %id, "employee not found for deletion");
                Ok(false)
            }
        }
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, Vec<Employee>>> {
        self.employees
            .read()
            .map_err(|_| Error::Internal("employee collection lock poisoned".to_string()))
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, Vec<Employee>>> {
        self.employees
            .write()
            .map_err(|_| Error::Internal("employee collection lock poisoned".to_string()))
    }
}

impl Default for EmployeeDirectory {
    fn default() -> Self {
        Self::new()
    }
}
