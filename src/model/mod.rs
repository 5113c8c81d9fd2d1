//! Data types shared between the source, the repository and the sync engine.

pub mod db;
pub mod page;
pub mod record;
pub mod report;
