use crate::{error::Error, model::report::SyncReport};

/// A synchronization pass that stopped before the source was exhausted.
///
/// Everything committed before the failure stays committed, `report` counts it.
#[derive(thiserror::Error, Debug)]
#[error("Sync pass aborted after {} records: {source}", .report.records_seen)]
pub struct SyncAbort {
    pub report: SyncReport,
    /// The first unrecovered error
    pub source: Error,
}
