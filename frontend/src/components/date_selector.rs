use shared::{CostsParams, PickerConfig, MONTH_NAMES};
use yew::prelude::*;

use crate::components::scroll_picker::ScrollPicker;
use crate::hooks::use_selector::{use_selector, UseSelectorResult};

#[derive(Properties, PartialEq)]
pub struct DateSelectorProps {
    pub config: PickerConfig,
    /// Receives the confirmed month (1-based) and year
    pub on_confirm: Callback<CostsParams>,
}

#[function_component(DateSelector)]
pub fn date_selector(props: &DateSelectorProps) -> Html {
    let UseSelectorResult { state, actions } = use_selector(props.config, props.on_confirm.clone());

    let months: Vec<String> = MONTH_NAMES.iter().map(|name| name.to_string()).collect();
    let years: Vec<String> = state
        .years()
        .as_slice()
        .iter()
        .map(|year| year.to_string())
        .collect();

    html! {
        <div class="date-selector">
            <h1 class="title">{"Date Selector"}</h1>

            <div class="date-section">
                <span class="label">{"Selected Month & Year:"}</span>
                <span class="selected-date">{state.label()}</span>
            </div>

            <div class="picker-container">
                <ScrollPicker
                    label="Month"
                    items={months}
                    selected={state.month().index()}
                    item_height={state.config().item_height}
                    initial_offset={state.month_offset()}
                    on_settled={actions.on_month_settled}
                />
                <ScrollPicker
                    label="Year"
                    items={years}
                    selected={state.year_index()}
                    item_height={state.config().item_height}
                    initial_offset={state.year_offset()}
                    on_settled={actions.on_year_settled}
                />
            </div>

            <button type="button" class="action-button" onclick={actions.confirm}>
                {"Confirm Selection"}
            </button>
        </div>
    }
}
