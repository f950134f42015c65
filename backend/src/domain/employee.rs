//! Employee record and its store-level constraints.
//!
//! Request validation happens before a handler runs, but the store re-checks
//! these constraints on every write so a record can never be persisted in a
//! state that breaks them, whichever path produced it.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Message returned whenever an identifier does not name a stored record.
pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 100;
const POSITION_MAX_CHARS: usize = 50;
const MIN_AGE: i32 = 18;

/// Store-assigned employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// Parse an identifier from its textual form.
    ///
    /// # Errors
    /// Returns [`uuid::Error`] when `raw` is not a UUID.
    pub fn new(raw: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(raw).map(Self)
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Allocate a fresh identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted employee record.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// Immutable identifier.
    pub id: EmployeeId,
    /// Full name, trimmed.
    pub name: String,
    /// Age in whole years.
    pub age: i32,
    /// Job title, trimmed.
    pub position: String,
    /// Non-negative salary.
    pub salary: f64,
    /// Date the employee was hired.
    pub hire_date: DateTime<Utc>,
    /// Optional reference to an external user account.
    pub user_id: Option<String>,
    /// Set once when the record is stored.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation.
    pub updated_at: DateTime<Utc>,
}

/// Normalised creation input; `hire_date` defaults to "now" when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    /// Full name, trimmed.
    pub name: String,
    /// Age in whole years.
    pub age: i32,
    /// Job title, trimmed.
    pub position: String,
    /// Salary.
    pub salary: f64,
    /// Explicit hire date, if the client supplied one.
    pub hire_date: Option<DateTime<Utc>>,
    /// Optional external user reference.
    pub user_id: Option<String>,
}

impl EmployeeDraft {
    /// Resolve the hire date against `now`.
    #[must_use]
    pub fn into_new_employee(self, now: DateTime<Utc>) -> NewEmployee {
        NewEmployee {
            name: self.name,
            age: self.age,
            position: self.position,
            salary: self.salary,
            hire_date: self.hire_date.unwrap_or(now),
            user_id: self.user_id,
        }
    }
}

/// Fully resolved record handed to the store for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    /// Full name, trimmed.
    pub name: String,
    /// Age in whole years.
    pub age: i32,
    /// Job title, trimmed.
    pub position: String,
    /// Salary.
    pub salary: f64,
    /// Hire date.
    pub hire_date: DateTime<Utc>,
    /// Optional external user reference.
    pub user_id: Option<String>,
}

impl NewEmployee {
    /// Check every store-level constraint.
    ///
    /// # Errors
    /// Returns all violations, in field order.
    pub fn check_constraints(&self) -> Result<(), ConstraintViolations> {
        ConstraintViolations::collect([
            check_name(&self.name),
            check_age(self.age),
            check_position(&self.position),
            check_salary(self.salary),
        ])
    }
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeePatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement age.
    pub age: Option<i32>,
    /// Replacement position.
    pub position: Option<String>,
    /// Replacement salary.
    pub salary: Option<f64>,
    /// Replacement hire date.
    pub hire_date: Option<DateTime<Utc>>,
    /// Replacement external user reference.
    pub user_id: Option<String>,
}

impl EmployeePatch {
    /// Check the constraints of every supplied field.
    ///
    /// Constraints are per field, so checking the supplied values is
    /// equivalent to checking the merged record.
    ///
    /// # Errors
    /// Returns all violations, in field order.
    pub fn check_constraints(&self) -> Result<(), ConstraintViolations> {
        ConstraintViolations::collect([
            self.name.as_deref().and_then(check_name),
            self.age.and_then(check_age),
            self.position.as_deref().and_then(check_position),
            self.salary.and_then(check_salary),
        ])
    }

    /// Merge the supplied fields into `employee`, stamping `updated_at`.
    pub fn apply_to(self, employee: &mut Employee, updated_at: DateTime<Utc>) {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(age) = self.age {
            employee.age = age;
        }
        if let Some(position) = self.position {
            employee.position = position;
        }
        if let Some(salary) = self.salary {
            employee.salary = salary;
        }
        if let Some(hire_date) = self.hire_date {
            employee.hire_date = hire_date;
        }
        if let Some(user_id) = self.user_id {
            employee.user_id = Some(user_id);
        }
        employee.updated_at = updated_at;
    }
}

fn check_name(name: &str) -> Option<&'static str> {
    let chars = name.chars().count();
    if chars == 0 {
        Some("Name is required")
    } else if chars < NAME_MIN_CHARS {
        Some("Name must be at least 2 characters")
    } else if chars > NAME_MAX_CHARS {
        Some("Name cannot exceed 100 characters")
    } else {
        None
    }
}

fn check_age(age: i32) -> Option<&'static str> {
    (age < MIN_AGE).then_some("Age must be at least 18")
}

fn check_position(position: &str) -> Option<&'static str> {
    let chars = position.chars().count();
    if chars == 0 {
        Some("Position is required")
    } else if chars > POSITION_MAX_CHARS {
        Some("Position cannot exceed 50 characters")
    } else {
        None
    }
}

fn check_salary(salary: f64) -> Option<&'static str> {
    (salary < 0.0 || salary.is_nan()).then_some("Salary cannot be negative")
}

/// Store-level constraint violations, in field order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .0.join(", "))]
pub struct ConstraintViolations(Vec<&'static str>);

impl ConstraintViolations {
    fn collect(checks: impl IntoIterator<Item = Option<&'static str>>) -> Result<(), Self> {
        let violations: Vec<_> = checks.into_iter().flatten().collect();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self(violations))
        }
    }

    /// Individual violation messages.
    #[must_use]
    pub fn messages(&self) -> &[&'static str] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    #[fixture]
    fn new_employee() -> NewEmployee {
        NewEmployee {
            name: "Ann".to_owned(),
            age: 19,
            position: "Clerk".to_owned(),
            salary: 30_000.0,
            hire_date: at(9),
            user_id: None,
        }
    }

    #[fixture]
    fn stored(new_employee: NewEmployee) -> Employee {
        Employee {
            id: EmployeeId::random(),
            name: new_employee.name,
            age: new_employee.age,
            position: new_employee.position,
            salary: new_employee.salary,
            hire_date: new_employee.hire_date,
            user_id: new_employee.user_id,
            created_at: at(9),
            updated_at: at(9),
        }
    }

    #[rstest]
    fn valid_record_meets_constraints(new_employee: NewEmployee) {
        assert!(new_employee.check_constraints().is_ok());
    }

    #[rstest]
    fn all_violations_are_reported_in_field_order(mut new_employee: NewEmployee) {
        new_employee.name = String::new();
        new_employee.age = 3;
        new_employee.position = "p".repeat(51);
        new_employee.salary = -0.5;

        let err = new_employee
            .check_constraints()
            .expect_err("record breaks every constraint");
        assert_eq!(
            err.to_string(),
            "Name is required, Age must be at least 18, \
             Position cannot exceed 50 characters, Salary cannot be negative"
        );
    }

    #[rstest]
    fn draft_without_hire_date_uses_now() {
        let draft = EmployeeDraft {
            name: "Ann".to_owned(),
            age: 19,
            position: "Clerk".to_owned(),
            salary: 1.0,
            hire_date: None,
            user_id: None,
        };
        assert_eq!(draft.into_new_employee(at(12)).hire_date, at(12));
    }

    #[rstest]
    fn empty_patch_meets_constraints() {
        assert!(EmployeePatch::default().check_constraints().is_ok());
    }

    #[rstest]
    fn patch_checks_only_supplied_fields() {
        let patch = EmployeePatch {
            age: Some(17),
            ..EmployeePatch::default()
        };
        let err = patch.check_constraints().expect_err("age below minimum");
        assert_eq!(err.messages(), ["Age must be at least 18"]);
    }

    #[rstest]
    fn apply_merges_supplied_fields_and_touches_updated_at(mut stored: Employee) {
        let before = stored.clone();
        EmployeePatch {
            salary: Some(35_000.0),
            ..EmployeePatch::default()
        }
        .apply_to(&mut stored, at(10));

        assert_eq!(stored.salary, 35_000.0);
        assert_eq!(stored.updated_at, at(10));
        assert_eq!(stored.created_at, before.created_at);
        assert_eq!(stored.name, before.name);
        assert_eq!(stored.age, before.age);
        assert_eq!(stored.position, before.position);
        assert_eq!(stored.hire_date, before.hire_date);
    }

    #[rstest]
    fn employee_id_rejects_non_uuid_text() {
        assert!(EmployeeId::new("not-a-uuid").is_err());
    }
}
