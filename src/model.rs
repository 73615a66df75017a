use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Contact addresses assigned on creation all live under one mock domain.
const EMAIL_DOMAIN: &str = "company.com";

/// An employee record. `id` is assigned once and never changes; every other
/// field may be absent, and aggregate queries skip records accordingly.
///
/// The wire format keeps the legacy `employee_` prefix on everything except
/// `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    #[serde(rename = "employee_name")]
    pub name: Option<String>,
    #[serde(rename = "employee_salary")]
    pub salary: Option<i32>,
    #[serde(rename = "employee_age")]
    pub age: Option<u32>,
    #[serde(rename = "employee_title")]
    pub title: Option<String>,
    #[serde(rename = "employee_email")]
    pub email: Option<String>,
}

impl Employee {
    /// Builds a fresh record from a creation payload, assigning a new id and
    /// deriving the contact email from the name.
    pub fn from_input(input: &CreateEmployeeInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            salary: input.salary,
            age: input.age,
            title: input.title.clone(),
            email: input.name.as_deref().map(derive_email),
        }
    }
}

/// Lowercases the name and collapses every run of non-alphanumeric
/// characters into a single dot: "John Doe" -> "john.doe@company.com".
pub fn derive_email(name: &str) -> String {
    let mut handle = String::with_capacity(name.len());
    let mut pending_dot = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dot && !handle.is_empty() {
                handle.push('.');
            }
            handle.push(c.to_ascii_lowercase());
            pending_dot = false;
        } else {
            pending_dot = true;
        }
    }
    format!("{}@{}", handle, EMAIL_DOMAIN)
}

/// Creation payload. Field bounds match the legacy contract: minimum working
/// age 16, retirement cap 75, strictly positive salary.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEmployeeInput {
    #[validate(required)]
    pub name: Option<String>,
    #[validate(required, range(min = 1, message = "salary must be positive"))]
    pub salary: Option<i32>,
    #[validate(required, range(min = 16, max = 75, message = "age must be between 16 and 75"))]
    pub age: Option<u32>,
    #[validate(required)]
    pub title: Option<String>,
}

/// Payload for the legacy delete-by-name endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DeleteEmployeeInput {
    #[validate(required)]
    pub name: Option<String>,
}
