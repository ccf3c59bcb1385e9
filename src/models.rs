//! Wire-format types for the measurement backend.
//!
//! The payload is validated here, at the boundary: anything that does not
//! deserialize into these shapes fails the fetch instead of leaking
//! malformed values into rendering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One measurement record as returned by the backend.
///
/// Field names match the wire format; `timestamps` is plural on the wire.
/// Records are immutable once fetched and keep their fetch order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Measured concentration, in percent
    pub concentration: f64,
    /// When the sample was measured
    pub timestamps: DateTime<Utc>,
}

/// Envelope of the `/sample` endpoint: `{ "data": [ ... ] }`.
///
/// Unknown sibling fields are ignored; a missing or mistyped `data`
/// field makes the whole payload malformed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SampleListResponse {
    /// The full record collection, in fetch order
    pub data: Vec<Record>,
}

/// Render a record timestamp as `day month-name year`, e.g. "05 March 2024".
pub fn format_record_date(date: &DateTime<Utc>) -> String {
    date.format("%d %B %Y").to_string()
}
