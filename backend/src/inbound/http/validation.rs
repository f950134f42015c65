//! Request body normalisation for the employee handlers.
//!
//! Bodies are checked against the declarative rule sets first; only then are
//! the supplied values trimmed and converted into domain inputs.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::domain::validation::is_absent;
use crate::domain::{
    CREATE_EMPLOYEE_RULES, EMPLOYEE_NOT_FOUND, EmployeeDraft, EmployeeId, EmployeePatch, Error,
    UPDATE_EMPLOYEE_RULES,
};

/// Resolve a path segment to an identifier.
///
/// Text that is not a UUID cannot name a stored record, so it is reported
/// the same way as an unknown identifier.
pub(crate) fn parse_employee_id(raw: &str) -> Result<EmployeeId, Error> {
    EmployeeId::new(raw).map_err(|_| Error::not_found(EMPLOYEE_NOT_FOUND))
}

/// Validate a creation body and normalise it into a draft.
pub(crate) fn parse_create_body(body: &Value) -> Result<EmployeeDraft, Error> {
    CREATE_EMPLOYEE_RULES.validate(body)?;
    Ok(EmployeeDraft {
        name: required(body, "name", text)?,
        age: required(body, "age", whole_years)?,
        position: required(body, "position", text)?,
        salary: required(body, "salary", number)?,
        hire_date: hire_date(body)?,
        user_id: raw_text(body, "userId"),
    })
}

/// Validate an update body and normalise the supplied fields into a patch.
pub(crate) fn parse_update_body(body: &Value) -> Result<EmployeePatch, Error> {
    UPDATE_EMPLOYEE_RULES.validate(body)?;
    Ok(EmployeePatch {
        name: text(body, "name"),
        age: whole_years(body, "age"),
        position: text(body, "position"),
        salary: number(body, "salary"),
        hire_date: hire_date(body)?,
        user_id: raw_text(body, "userId"),
    })
}

fn supplied<'a>(body: &'a Value, field: &str) -> Option<&'a Value> {
    body.get(field).filter(|value| !is_absent(value))
}

fn required<T>(
    body: &Value,
    field: &'static str,
    read: fn(&Value, &str) -> Option<T>,
) -> Result<T, Error> {
    read(body, field).ok_or_else(|| Error::invalid_request(format!("{field} is required")))
}

fn raw_text(body: &Value, field: &str) -> Option<String> {
    supplied(body, field)
        .and_then(Value::as_str)
        .map(str::to_owned)
}

fn text(body: &Value, field: &str) -> Option<String> {
    supplied(body, field)
        .and_then(Value::as_str)
        .map(|value| value.trim().to_owned())
}

fn number(body: &Value, field: &str) -> Option<f64> {
    supplied(body, field).and_then(Value::as_f64)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "ages are truncated to whole years; the cast saturates"
)]
fn whole_years(body: &Value, field: &str) -> Option<i32> {
    number(body, field).map(|years| years.trunc() as i32)
}

fn hire_date(body: &Value) -> Result<Option<DateTime<Utc>>, Error> {
    raw_text(body, "hireDate")
        .map(|raw| parse_hire_date(raw.trim()))
        .transpose()
}

/// Accept RFC 3339 timestamps or calendar dates (midnight UTC).
fn parse_hire_date(raw: &str) -> Result<DateTime<Utc>, Error> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| Error::invalid_request("hireDate must be a valid date"))
}
