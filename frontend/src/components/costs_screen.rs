use shared::{format_amount, CostsParams, CostsService};
use yew::prelude::*;

use crate::components::add_cost_modal::AddCostModal;
use crate::components::cost_table::CostTable;
use crate::hooks::use_costs::{use_costs, UseCostsResult};
use crate::services::api::ApiClient;
use crate::services::date_utils::costs_heading;

#[derive(Properties, PartialEq)]
pub struct CostsScreenProps {
    pub params: CostsParams,
    pub service: CostsService<ApiClient>,
}

#[function_component(CostsScreen)]
pub fn costs_screen(props: &CostsScreenProps) -> Html {
    let UseCostsResult { state, actions } = use_costs(&props.service, props.params);

    if state.loading && state.entries.is_empty() {
        return html! {
            <div class="costs-screen">
                <p class="loading-text">{"Loading costs..."}</p>
            </div>
        };
    }

    let open_add_modal = {
        let open_add_modal = actions.open_add_modal.clone();
        Callback::from(move |_: MouseEvent| open_add_modal.emit(()))
    };

    html! {
        <div class="costs-screen">
            <div class="date-container">
                <span class="date-text">{costs_heading(&state.params)}</span>
            </div>

            <div class="total-container">
                <span class="total-label">{"Total Costs"}</span>
                <span class="total-amount">{format_amount(state.total)}</span>
                {if state.fallback {
                    html! { <span class="fallback-note">{"Showing sample data, the server could not be reached"}</span> }
                } else { html! {} }}
            </div>

            <button type="button" class="add-button" onclick={open_add_modal}>
                {"Add New Cost"}
            </button>

            <CostTable entries={state.entries.clone()} />

            <AddCostModal
                is_open={state.show_add_modal}
                params={state.params}
                item={state.item.clone()}
                cost={state.cost.clone()}
                submitting={state.submitting}
                form_error={state.form_error.clone()}
                on_item_input={actions.on_item_input}
                on_cost_input={actions.on_cost_input}
                on_submit={actions.submit}
                on_close={actions.close_add_modal}
            />
        </div>
    }
}
