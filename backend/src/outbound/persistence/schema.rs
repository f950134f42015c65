//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly.

diesel::table! {
    /// Employee records.
    employees (id) {
        /// Primary key: UUID v4 allocated by the adapter.
        id -> Uuid,
        /// Trimmed full name, 2–100 characters.
        name -> Varchar,
        /// Age in whole years, at least 18.
        age -> Int4,
        /// Trimmed job title, at most 50 characters.
        position -> Varchar,
        /// Non-negative salary.
        salary -> Float8,
        /// Hire date.
        hire_date -> Timestamptz,
        /// Optional external user reference.
        user_id -> Nullable<Text>,
        /// Insertion timestamp.
        created_at -> Timestamptz,
        /// Refreshed on every update.
        updated_at -> Timestamptz,
    }
}
