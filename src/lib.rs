//! Incremental synchronization of a remote product catalog into a local relational store.
//!
//! A [`source::CatalogSource`] serves the remote catalog one page at a time. The
//! [`service::fetcher::PaginatedFetcher`] flattens those pages into a single record
//! sequence, absorbing rate limiting with exponential backoff, and the
//! [`service::sync::SyncService`] ingests each record through the
//! [`data::catalog::CatalogRepository`], creating the brands, categories and images it
//! depends on along the way.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod source;
pub mod startup;
