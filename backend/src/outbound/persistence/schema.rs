//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the DDL issued by
//! [`ensure_schema`](super::ensure_schema).

diesel::table! {
    /// Registered users.
    users (id) {
        /// Primary key assigned by the `SERIAL` sequence.
        id -> Int4,
        /// Display name, at most 100 characters.
        name -> Varchar,
        /// Unique email address, at most 100 characters.
        email -> Varchar,
    }
}
