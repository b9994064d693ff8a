use chrono::NaiveDate;
use shared::Clock;

/// Reads today's date from the browser's `Date`, in the user's timezone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn today(&self) -> NaiveDate {
        let now = js_sys::Date::new_0();
        let year = now.get_full_year() as i32;
        let month = now.get_month() + 1; // JavaScript months are 0-indexed
        let day = now.get_date();

        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
    }
}

/// Heading of the costs screen, e.g. "Costs for 6/2024"
pub fn costs_heading(params: &shared::CostsParams) -> String {
    format!("Costs for {}", params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_costs_heading() {
        let params = shared::CostsParams::new(6, 2024);
        assert_eq!(costs_heading(&params), "Costs for 6/2024");
    }
}
