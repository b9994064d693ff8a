use serde::{Deserialize, Serialize};
use std::fmt;

pub mod error;
pub mod ledger;
pub mod selector;
pub mod service;

pub use error::{AddCostError, ApiError, InvalidMonth};
pub use ledger::{
    format_amount, placeholder_entries, total_cost, validate_new_cost, FetchOutcome,
    FetchSequence, FetchTicket, LedgerState, LoadStatus,
};
pub use selector::{
    derive_index, Clock, FixedClock, MonthIndex, PickerConfig, Selection, Selector, YearTable,
    MONTH_NAMES,
};
pub use service::{CostsBackend, CostsService};

/// A single labelled amount shown in the costs table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    /// Free-text label, e.g. "Groceries"
    pub item: String,
    /// Amount in the display currency
    pub cost: f64,
}

impl CostEntry {
    pub fn new(item: impl Into<String>, cost: f64) -> Self {
        Self {
            item: item.into(),
            cost,
        }
    }
}

/// Month/year pair handed from the date selector to the costs screen.
///
/// Also used as the query of the costs read request
/// (`GET <endpoint>?month=<month>&year=<year>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CostsParams {
    /// Calendar month, 1-based (1 = January)
    pub month: u32,
    pub year: i32,
}

impl CostsParams {
    pub fn new(month: u32, year: i32) -> Self {
        Self { month, year }
    }

    /// Query pairs for the read request
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("month", self.month.to_string()),
            ("year", self.year.to_string()),
        ]
    }
}

impl fmt::Display for CostsParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}

/// Body of the write request (`POST <endpoint>`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCostRequest {
    pub item: String,
    pub cost: f64,
    pub month: u32,
    pub year: i32,
}
