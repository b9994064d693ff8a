//! Month/year scroll picker state.
//!
//! Each picker column is a list of fixed-height rows. When a scroll gesture
//! settles, the resting offset is turned back into a row index with
//! [`derive_index`] and the column's selection is updated. The two columns
//! are independent; [`Selector::confirm`] combines them into the
//! [`CostsParams`] handed to the costs screen.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::InvalidMonth;
use crate::CostsParams;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DEFAULT_ITEM_HEIGHT: f64 = 50.0;
pub const DEFAULT_BASE_YEAR: i32 = 1950;
pub const DEFAULT_YEAR_COUNT: usize = 101;

/// Convert a settled scroll offset into a row index.
///
/// `round(offset / item_height)`, rounding halves away from zero, clamped to
/// `[0, item_count - 1]`. Overscroll past either end, NaN offsets and
/// degenerate heights all land on a valid row (or 0 for an empty list).
pub fn derive_index(offset: f64, item_height: f64, item_count: usize) -> usize {
    if item_count == 0 || !item_height.is_finite() || item_height <= 0.0 {
        return 0;
    }

    let raw = (offset / item_height).round();
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }

    // `as` saturates, so +inf becomes usize::MAX before the clamp
    (raw as usize).min(item_count - 1)
}

/// Zero-based index into [`MONTH_NAMES`]. Always in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MonthIndex(u8);

impl MonthIndex {
    pub const JANUARY: MonthIndex = MonthIndex(0);
    pub const DECEMBER: MonthIndex = MonthIndex(11);

    pub fn new(index: usize) -> Option<Self> {
        (index < MONTH_NAMES.len()).then(|| MonthIndex(index as u8))
    }

    /// Like [`MonthIndex::new`] but pins out-of-range values to December.
    pub fn clamped(index: usize) -> Self {
        MonthIndex(index.min(MONTH_NAMES.len() - 1) as u8)
    }

    /// From a chrono-style 1-based month number
    pub fn from_number(month: u32) -> Option<Self> {
        month.checked_sub(1).and_then(|index| Self::new(index as usize))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based month number used on the wire
    pub fn number(self) -> u32 {
        self.0 as u32 + 1
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.index()]
    }
}

impl TryFrom<u8> for MonthIndex {
    type Error = InvalidMonth;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        MonthIndex::new(index as usize).ok_or(InvalidMonth(index))
    }
}

impl From<MonthIndex> for u8 {
    fn from(month: MonthIndex) -> u8 {
        month.0
    }
}

impl fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Geometry and bounds of the two picker columns
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Height of one row, in the same unit as scroll offsets
    pub item_height: f64,
    /// First year in the year column
    pub base_year: i32,
    /// Number of consecutive years offered
    pub year_count: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            item_height: DEFAULT_ITEM_HEIGHT,
            base_year: DEFAULT_BASE_YEAR,
            year_count: DEFAULT_YEAR_COUNT,
        }
    }
}

/// The ordered, immutable list of selectable years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearTable {
    years: Vec<i32>,
}

impl YearTable {
    /// `count` consecutive years starting at `base`. At least one year is always generated.
    pub fn new(base: i32, count: usize) -> Self {
        let years = (0..count.max(1)).map(|offset| base + offset as i32).collect();
        Self { years }
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.years.get(index).copied()
    }

    pub fn first(&self) -> i32 {
        self.years[0]
    }

    pub fn last(&self) -> i32 {
        self.years[self.years.len() - 1]
    }

    /// Index of `year`, pinned to the nearest end of the table when out of range
    pub fn nearest_index(&self, year: i32) -> usize {
        let offset = year.saturating_sub(self.first()).max(0) as usize;
        offset.min(self.len() - 1)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.years
    }
}

/// Source of "today" for seeding the initial selection
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The current (month, year) picker state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub month: MonthIndex,
    pub year: i32,
}

impl Selection {
    pub fn to_params(self) -> CostsParams {
        CostsParams {
            month: self.month.number(),
            year: self.year,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.name(), self.year)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    config: PickerConfig,
    years: YearTable,
    month: MonthIndex,
    year_index: usize,
}

impl Selector {
    /// Selector seeded with the clock's current month and year.
    pub fn new(config: PickerConfig, clock: &dyn Clock) -> Self {
        let today = clock.today();
        let month = MonthIndex::clamped(today.month0() as usize);
        Self::with_selection(config, month, today.year())
    }

    /// Selector seeded with an explicit selection. A year outside the table
    /// is pinned to the nearest available year.
    pub fn with_selection(config: PickerConfig, month: MonthIndex, year: i32) -> Self {
        let years = YearTable::new(config.base_year, config.year_count);
        let year_index = years.nearest_index(year);
        Self {
            config,
            years,
            month,
            year_index,
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn years(&self) -> &YearTable {
        &self.years
    }

    /// Month column came to rest at `offset`
    pub fn on_month_scroll_settled(&mut self, offset: f64) -> MonthIndex {
        let index = derive_index(offset, self.config.item_height, MONTH_NAMES.len());
        self.month = MonthIndex::clamped(index);
        self.month
    }

    /// Year column came to rest at `offset`
    pub fn on_year_scroll_settled(&mut self, offset: f64) -> i32 {
        self.year_index = derive_index(offset, self.config.item_height, self.years.len());
        self.year()
    }

    pub fn month(&self) -> MonthIndex {
        self.month
    }

    pub fn year(&self) -> i32 {
        // year_index is only ever produced by derive_index/nearest_index over this table
        self.years.get(self.year_index).unwrap_or_else(|| self.years.last())
    }

    pub fn year_index(&self) -> usize {
        self.year_index
    }

    pub fn current_selection(&self) -> Selection {
        Selection {
            month: self.month,
            year: self.year(),
        }
    }

    /// Navigation payload for the costs screen (1-based month)
    pub fn confirm(&self) -> CostsParams {
        let selection = self.current_selection();
        log::info!("Selected date: {}", selection);
        selection.to_params()
    }

    /// Scroll offset at which the month column shows the selected month.
    /// Feeding it back through [`derive_index`] yields the same month.
    pub fn month_offset(&self) -> f64 {
        self.month.index() as f64 * self.config.item_height
    }

    /// Scroll offset at which the year column shows the selected year
    pub fn year_offset(&self) -> f64 {
        self.year_index as f64 * self.config.item_height
    }

    /// e.g. "June 2024"
    pub fn label(&self) -> String {
        self.current_selection().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f64 = DEFAULT_ITEM_HEIGHT;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn selector_at(year: i32, month: u32) -> Selector {
        Selector::new(PickerConfig::default(), &FixedClock(date(year, month, 15)))
    }

    #[test]
    fn test_derive_index_boundaries() {
        assert_eq!(derive_index(0.0, H, 12), 0);
        assert_eq!(derive_index(11.0 * H, H, 12), 11);
        assert_eq!(derive_index(-75.0, H, 12), 0);
        assert_eq!(derive_index(40.0 * H, H, 12), 11);
        assert_eq!(derive_index(5.0 * H + 10.0, H, 12), 5);
    }

    #[test]
    fn test_derive_index_rounds_half_away_from_zero() {
        assert_eq!(derive_index(25.0, H, 12), 1);
        assert_eq!(derive_index(24.9, H, 12), 0);
        assert_eq!(derive_index(75.0, H, 12), 2);
        assert_eq!(derive_index(-25.0, H, 12), 0);
    }

    #[test]
    fn test_derive_index_degenerate_inputs() {
        assert_eq!(derive_index(100.0, H, 0), 0);
        assert_eq!(derive_index(100.0, 0.0, 12), 0);
        assert_eq!(derive_index(100.0, -50.0, 12), 0);
        assert_eq!(derive_index(f64::NAN, H, 12), 0);
        assert_eq!(derive_index(f64::INFINITY, H, 12), 11);
        assert_eq!(derive_index(f64::NEG_INFINITY, H, 12), 0);
    }

    #[test]
    fn test_month_index() {
        assert_eq!(MonthIndex::new(12), None);
        assert_eq!(MonthIndex::clamped(99), MonthIndex::DECEMBER);
        assert_eq!(MonthIndex::from_number(1), Some(MonthIndex::JANUARY));
        assert_eq!(MonthIndex::from_number(0), None);
        assert_eq!(MonthIndex::from_number(13), None);

        let june = MonthIndex::new(5).unwrap();
        assert_eq!(june.name(), "June");
        assert_eq!(june.number(), 6);
    }

    #[test]
    fn test_month_index_deserialize_rejects_out_of_range() {
        let june: MonthIndex = serde_json::from_str("5").unwrap();
        assert_eq!(june.name(), "June");
        assert_eq!(serde_json::to_string(&june).unwrap(), "5");

        let err = serde_json::from_str::<MonthIndex>("12").unwrap_err();
        assert!(err.to_string().contains("month index 12 is out of range"));
        assert!(serde_json::from_str::<MonthIndex>("200").is_err());
        assert_eq!(MonthIndex::try_from(11u8), Ok(MonthIndex::DECEMBER));
        assert_eq!(MonthIndex::try_from(200u8), Err(InvalidMonth(200)));
    }

    #[test]
    fn test_year_table() {
        let years = YearTable::new(1950, 101);
        assert_eq!(years.len(), 101);
        assert_eq!(years.first(), 1950);
        assert_eq!(years.last(), 2050);
        assert_eq!(years.nearest_index(2024), 74);
        assert_eq!(years.nearest_index(1900), 0);
        assert_eq!(years.nearest_index(2100), 100);

        let single = YearTable::new(2000, 0);
        assert_eq!(single.as_slice(), &[2000]);
    }

    #[test]
    fn test_initial_selection_from_clock() {
        let selector = selector_at(2024, 3);
        let selection = selector.current_selection();
        assert_eq!(selection.month.number(), 3);
        assert_eq!(selection.year, 2024);
        assert_eq!(selector.label(), "March 2024");
    }

    #[test]
    fn test_initial_year_outside_table_is_clamped() {
        let selector = selector_at(2077, 1);
        assert_eq!(selector.current_selection().year, 2050);

        let selector = selector_at(1901, 1);
        assert_eq!(selector.current_selection().year, 1950);
    }

    #[test]
    fn test_scroll_settle_updates_selection() {
        let mut selector = selector_at(2024, 1);

        assert_eq!(selector.on_month_scroll_settled(4.0 * H), MonthIndex::new(4).unwrap());
        assert_eq!(selector.on_year_scroll_settled(50.0 * H), 2000);
        assert_eq!(selector.on_year_scroll_settled(-10.0), 1950);
        assert_eq!(selector.on_year_scroll_settled(500.0 * H), 2050);
        assert_eq!(selector.on_month_scroll_settled(13.0 * H), MonthIndex::DECEMBER);
    }

    #[test]
    fn test_columns_are_independent() {
        let mut selector = selector_at(2024, 6);
        let events = [
            (true, 2.0 * H),
            (false, 10.0 * H),
            (true, 7.4 * H),
            (false, -3.0 * H),
            (false, 80.0 * H),
            (true, 11.6 * H),
        ];

        for (is_month, offset) in events {
            let before = selector.current_selection();
            if is_month {
                selector.on_month_scroll_settled(offset);
                assert_eq!(selector.current_selection().year, before.year);
            } else {
                selector.on_year_scroll_settled(offset);
                assert_eq!(selector.current_selection().month, before.month);
            }
        }

        assert_eq!(selector.current_selection().month, MonthIndex::DECEMBER);
        assert_eq!(selector.current_selection().year, 2030);
    }

    #[test]
    fn test_confirm_is_one_based() {
        let selector =
            Selector::with_selection(PickerConfig::default(), MonthIndex::JANUARY, 1999);
        assert_eq!(selector.confirm(), CostsParams::new(1, 1999));

        let selector =
            Selector::with_selection(PickerConfig::default(), MonthIndex::DECEMBER, 1999);
        assert_eq!(selector.confirm().month, 12);
    }

    #[test]
    fn test_june_2024_confirms_as_month_six() {
        let selector =
            Selector::with_selection(PickerConfig::default(), MonthIndex::new(5).unwrap(), 2024);
        assert_eq!(selector.confirm(), CostsParams { month: 6, year: 2024 });
    }

    #[test]
    fn test_offsets_follow_selection() {
        let mut selector =
            Selector::with_selection(PickerConfig::default(), MonthIndex::new(5).unwrap(), 2024);
        assert_eq!(selector.month_offset(), 5.0 * H);
        assert_eq!(selector.year_offset(), 74.0 * H);

        selector.on_year_scroll_settled(selector.year_offset());
        assert_eq!(selector.year(), 2024);
    }

    #[test]
    fn test_every_offset_settles_back_on_its_row() {
        let mut selector = selector_at(2024, 1);
        for index in 0..MONTH_NAMES.len() {
            let month = MonthIndex::new(index).unwrap();
            let year = DEFAULT_BASE_YEAR + index as i32;
            let seeded = Selector::with_selection(PickerConfig::default(), month, year);
            assert_eq!(selector.on_month_scroll_settled(seeded.month_offset()), month);
            assert_eq!(selector.on_year_scroll_settled(seeded.year_offset()), seeded.year());
        }
    }

    #[test]
    fn test_custom_picker_config() {
        let config = PickerConfig {
            item_height: 40.0,
            base_year: 2020,
            year_count: 5,
        };
        let mut selector = Selector::with_selection(config, MonthIndex::JANUARY, 2022);
        assert_eq!(selector.year_offset(), 80.0);
        assert_eq!(selector.on_year_scroll_settled(400.0), 2024);
        assert_eq!(selector.on_month_scroll_settled(60.0), MonthIndex::new(2).unwrap());
    }
}
