//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; adapters convert them to
//! and from domain types.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Employee, EmployeeId, EmployeePatch, NewEmployee};

use super::schema::employees;

/// Row read from the `employees` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub position: String,
    pub salary: f64,
    pub hire_date: DateTime<Utc>,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: EmployeeId::from_uuid(row.id),
            name: row.name,
            age: row.age,
            position: row.position,
            salary: row.salary,
            hire_date: row.hire_date,
            user_id: row.user_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insertable row; timestamps come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub age: i32,
    pub position: &'a str,
    pub salary: f64,
    pub hire_date: DateTime<Utc>,
    pub user_id: Option<&'a str>,
}

impl<'a> NewEmployeeRow<'a> {
    pub(crate) fn new(id: Uuid, employee: &'a NewEmployee) -> Self {
        Self {
            id,
            name: &employee.name,
            age: employee.age,
            position: &employee.position,
            salary: employee.salary,
            hire_date: employee.hire_date,
            user_id: employee.user_id.as_deref(),
        }
    }
}

/// Partial update; `None` columns are left out of the `SET` clause.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeChangeset<'a> {
    pub name: Option<&'a str>,
    pub age: Option<i32>,
    pub position: Option<&'a str>,
    pub salary: Option<f64>,
    pub hire_date: Option<DateTime<Utc>>,
    pub user_id: Option<&'a str>,
}

impl<'a> From<&'a EmployeePatch> for EmployeeChangeset<'a> {
    fn from(patch: &'a EmployeePatch) -> Self {
        Self {
            name: patch.name.as_deref(),
            age: patch.age,
            position: patch.position.as_deref(),
            salary: patch.salary,
            hire_date: patch.hire_date,
            user_id: patch.user_id.as_deref(),
        }
    }
}
