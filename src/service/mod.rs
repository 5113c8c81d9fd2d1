//! Service layer.
//!
//! The [`fetcher`] turns a [`CatalogSource`](crate::source::CatalogSource) into a flat
//! sequence of records, backing off through [`retry`] when the source rate limits us.
//! [`sync`] consumes that sequence and drives the
//! [`CatalogRepository`](crate::data::catalog::CatalogRepository), using [`resolve`] for the
//! find-or-create of dependent entities. [`catalog`] serves read-only lookups used to verify
//! a pass.

pub mod catalog;
pub mod fetcher;
pub mod resolve;
pub mod retry;
pub mod sync;
