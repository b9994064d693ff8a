use std::rc::Rc;

use shared::{CostsParams, PickerConfig, Selector};
use yew::prelude::*;

use crate::services::date_utils::BrowserClock;

/// Reducer wrapper so both columns always update the latest selector state
#[derive(Clone, Debug, PartialEq)]
pub struct SelectorStore(pub Selector);

pub enum SelectorAction {
    MonthSettled(f64),
    YearSettled(f64),
}

impl Reducible for SelectorStore {
    type Action = SelectorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut selector = self.0.clone();
        match action {
            SelectorAction::MonthSettled(offset) => {
                let month = selector.on_month_scroll_settled(offset);
                log::debug!("Month list settled at {} -> {}", offset, month);
            }
            SelectorAction::YearSettled(offset) => {
                let year = selector.on_year_scroll_settled(offset);
                log::debug!("Year list settled at {} -> {}", offset, year);
            }
        }
        Rc::new(SelectorStore(selector))
    }
}

pub struct UseSelectorResult {
    pub state: Selector,
    pub actions: UseSelectorActions,
}

#[derive(Clone)]
pub struct UseSelectorActions {
    pub on_month_settled: Callback<f64>,
    pub on_year_settled: Callback<f64>,
    pub confirm: Callback<MouseEvent>,
}

#[hook]
pub fn use_selector(config: PickerConfig, on_confirm: Callback<CostsParams>) -> UseSelectorResult {
    let store = use_reducer(|| SelectorStore(Selector::new(config, &BrowserClock)));

    let on_month_settled = {
        let dispatcher = store.dispatcher();
        use_callback((), move |offset: f64, _| {
            dispatcher.dispatch(SelectorAction::MonthSettled(offset));
        })
    };

    let on_year_settled = {
        let dispatcher = store.dispatcher();
        use_callback((), move |offset: f64, _| {
            dispatcher.dispatch(SelectorAction::YearSettled(offset));
        })
    };

    let confirm = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            on_confirm.emit(store.0.confirm());
        })
    };

    UseSelectorResult {
        state: store.0.clone(),
        actions: UseSelectorActions {
            on_month_settled,
            on_year_settled,
            confirm,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{FixedClock, MonthIndex};

    fn store() -> Rc<SelectorStore> {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        Rc::new(SelectorStore(Selector::new(PickerConfig::default(), &clock)))
    }

    #[test]
    fn test_reducer_applies_settle_events() {
        let state = store()
            .reduce(SelectorAction::MonthSettled(100.0))
            .reduce(SelectorAction::YearSettled(3700.0));

        let selection = state.0.current_selection();
        assert_eq!(selection.month, MonthIndex::new(2).unwrap());
        assert_eq!(selection.year, 2024);
    }

    #[test]
    fn test_reducer_keeps_other_column() {
        let state = store().reduce(SelectorAction::YearSettled(0.0));
        assert_eq!(state.0.month().number(), 6);
        assert_eq!(state.0.year(), 1950);
    }
}
