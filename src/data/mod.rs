//! Data access layer repositories.
//!
//! The catalog repository is the only writer of catalog rows. It is generic over the
//! connection so callers can run it directly against the database or inside their own
//! transaction.

pub mod catalog;
