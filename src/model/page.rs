use serde_json::Value;

/// A product record as received from the source, before it is parsed.
///
/// Records stay raw until the sync engine parses them one by one, so a single malformed
/// record does not poison the page it arrived in.
pub type RawRecord = Value;

/// Window of records requested from the catalog source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page_size: u64,
    pub offset: u64,
}

/// One page of records returned by the catalog source.
#[derive(Clone, Debug, Default)]
pub struct Page {
    /// Total number of records the source claims to hold. Advisory only.
    pub total_count: u64,
    pub records: Vec<RawRecord>,
}
