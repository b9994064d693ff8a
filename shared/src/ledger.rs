//! Costs screen state: the entries shown for one month/year, their total,
//! and which read response is allowed to replace them.

use crate::{AddCostError, ApiError, CostEntry, CostsParams, CreateCostRequest};

/// Labels and amounts shown when the read request fails.
const PLACEHOLDER_ITEMS: [(&str, f64); 5] = [
    ("Coffee", 5.5),
    ("Lunch", 12.0),
    ("Gas", 45.0),
    ("Groceries", 78.25),
    ("Movie ticket", 15.0),
];

/// Stand-in entries for `params`; every label embeds `month/year`.
pub fn placeholder_entries(params: CostsParams) -> Vec<CostEntry> {
    PLACEHOLDER_ITEMS
        .iter()
        .map(|(item, cost)| CostEntry::new(format!("{} ({})", item, params), *cost))
        .collect()
}

pub fn total_cost(entries: &[CostEntry]) -> f64 {
    entries.iter().map(|entry| entry.cost).sum()
}

/// `$` followed by the amount with two decimals
pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

/// Check a new entry's form input and build the write request.
///
/// The label must be non-blank and the amount must parse as a finite number.
pub fn validate_new_cost(
    item: &str,
    cost: &str,
    params: CostsParams,
) -> Result<CreateCostRequest, AddCostError> {
    let item = item.trim();
    if item.is_empty() {
        return Err(AddCostError::EmptyItem);
    }

    let input = cost.trim();
    let cost = match input.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            return Err(AddCostError::InvalidCost {
                input: input.to_string(),
            })
        }
    };

    Ok(CreateCostRequest {
        item: item.to_string(),
        cost,
        month: params.month,
        year: params.year,
    })
}

/// Identifies one read request and the params it was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub params: CostsParams,
}

/// Hands out increasing ticket numbers
#[derive(Debug, Default)]
pub struct FetchSequence {
    last: u64,
}

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, params: CostsParams) -> FetchTicket {
        self.last += 1;
        FetchTicket {
            seq: self.last,
            params,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    /// Read failed, placeholders are on screen
    Fallback,
}

/// What [`LedgerState::apply`] did with a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    FellBack,
    /// Response belonged to an older request and was dropped
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LedgerState {
    params: CostsParams,
    entries: Vec<CostEntry>,
    total: f64,
    status: LoadStatus,
    current_seq: u64,
}

impl LedgerState {
    pub fn new(params: CostsParams) -> Self {
        Self {
            params,
            entries: Vec::new(),
            total: 0.0,
            status: LoadStatus::Loading,
            current_seq: 0,
        }
    }

    pub fn params(&self) -> CostsParams {
        self.params
    }

    pub fn entries(&self) -> &[CostEntry] {
        &self.entries
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn is_fallback(&self) -> bool {
        self.status == LoadStatus::Fallback
    }

    /// Mark `ticket` as the only request whose response may be shown.
    pub fn start(&mut self, ticket: FetchTicket) {
        self.params = ticket.params;
        self.current_seq = ticket.seq;
        self.status = LoadStatus::Loading;
    }

    pub fn apply(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<CostEntry>, ApiError>,
    ) -> FetchOutcome {
        if ticket.seq != self.current_seq || ticket.params != self.params {
            log::debug!(
                "Discarding stale costs response #{} for {} (showing #{} for {})",
                ticket.seq,
                ticket.params,
                self.current_seq,
                self.params
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(entries) => {
                self.replace_entries(entries);
                self.status = LoadStatus::Loaded;
                FetchOutcome::Applied
            }
            Err(error) => {
                log::warn!("Error fetching costs for {}: {}", ticket.params, error);
                self.replace_entries(placeholder_entries(ticket.params));
                self.status = LoadStatus::Fallback;
                FetchOutcome::FellBack
            }
        }
    }

    fn replace_entries(&mut self, entries: Vec<CostEntry>) {
        self.total = total_cost(&entries);
        self.entries = entries;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june() -> CostsParams {
        CostsParams::new(6, 2024)
    }

    #[test]
    fn test_total_of_three_entries() {
        let entries = vec![
            CostEntry::new("A", 5.5),
            CostEntry::new("B", 12.0),
            CostEntry::new("C", 78.25),
        ];
        let total = total_cost(&entries);
        assert!((total - 95.75).abs() < 1e-9);
        assert_eq!(format_amount(total), "$95.75");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(5.5), "$5.50");
        assert_eq!(format_amount(1234.567), "$1234.57");
        assert_eq!(format_amount(-3.0), "-$3.00");
    }

    #[test]
    fn test_placeholders_embed_month_and_year() {
        let entries = placeholder_entries(CostsParams::new(11, 2031));
        assert_eq!(entries.len(), 5);
        for entry in &entries {
            assert!(entry.item.contains("11"), "{}", entry.item);
            assert!(entry.item.contains("2031"), "{}", entry.item);
        }
        assert_eq!(entries[0].item, "Coffee (11/2031)");
        assert_eq!(entries[3], CostEntry::new("Groceries (11/2031)", 78.25));
    }

    #[test]
    fn test_successful_fetch_replaces_entries() {
        let mut sequence = FetchSequence::new();
        let mut state = LedgerState::new(june());
        assert!(state.is_loading());

        let ticket = sequence.next(june());
        state.start(ticket);
        let outcome = state.apply(
            ticket,
            Ok(vec![CostEntry::new("Rent", 900.0), CostEntry::new("Bus", 2.5)]),
        );

        assert_eq!(outcome, FetchOutcome::Applied);
        assert_eq!(state.status(), LoadStatus::Loaded);
        assert_eq!(state.entries().len(), 2);
        assert_eq!(state.total(), 902.5);
    }

    #[test]
    fn test_failed_fetch_falls_back_to_placeholders() {
        let mut sequence = FetchSequence::new();
        let mut state = LedgerState::new(june());
        let ticket = sequence.next(june());
        state.start(ticket);

        let outcome = state.apply(ticket, Err(ApiError::Network("offline".to_string())));

        assert_eq!(outcome, FetchOutcome::FellBack);
        assert!(state.is_fallback());
        assert_eq!(state.entries().len(), 5);
        assert!(state.entries().iter().all(|e| e.item.contains("6/2024")));
        assert!((state.total() - 155.75).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_body_also_falls_back() {
        let mut sequence = FetchSequence::new();
        let mut state = LedgerState::new(june());
        let ticket = sequence.next(june());
        state.start(ticket);

        let outcome = state.apply(ticket, Err(ApiError::Decode("expected array".to_string())));
        assert_eq!(outcome, FetchOutcome::FellBack);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut sequence = FetchSequence::new();
        let mut state = LedgerState::new(june());

        let slow = sequence.next(june());
        state.start(slow);
        let july = CostsParams::new(7, 2024);
        let fresh = sequence.next(july);
        state.start(fresh);

        assert_eq!(
            state.apply(fresh, Ok(vec![CostEntry::new("July rent", 900.0)])),
            FetchOutcome::Applied
        );
        assert_eq!(
            state.apply(slow, Ok(vec![CostEntry::new("June rent", 850.0)])),
            FetchOutcome::Stale
        );

        assert_eq!(state.params(), july);
        assert_eq!(state.entries(), &[CostEntry::new("July rent", 900.0)]);
        assert_eq!(state.total(), 900.0);
    }

    #[test]
    fn test_refetch_of_same_params_supersedes_older_request() {
        let mut sequence = FetchSequence::new();
        let mut state = LedgerState::new(june());

        let first = sequence.next(june());
        state.start(first);
        let second = sequence.next(june());
        state.start(second);

        assert_eq!(state.apply(first, Ok(vec![])), FetchOutcome::Stale);
        assert!(state.is_loading());
        assert_eq!(
            state.apply(second, Err(ApiError::Network("timeout".to_string()))),
            FetchOutcome::FellBack
        );
    }

    #[test]
    fn test_validate_new_cost() {
        let request = validate_new_cost("  Lunch ", " 12.50 ", june()).unwrap();
        assert_eq!(
            request,
            CreateCostRequest {
                item: "Lunch".to_string(),
                cost: 12.5,
                month: 6,
                year: 2024,
            }
        );

        assert_eq!(validate_new_cost("   ", "1", june()), Err(AddCostError::EmptyItem));
        assert_eq!(
            validate_new_cost("Lunch", "abc", june()),
            Err(AddCostError::InvalidCost {
                input: "abc".to_string()
            })
        );
        assert!(validate_new_cost("Lunch", "", june()).is_err());
        assert!(validate_new_cost("Lunch", "NaN", june()).is_err());
        assert!(validate_new_cost("Lunch", "inf", june()).is_err());
    }
}
