use shared::CostsParams;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddCostModalProps {
    pub is_open: bool,
    pub params: CostsParams,

    // Form state
    pub item: String,
    pub cost: String,
    pub submitting: bool,
    pub form_error: Option<String>,

    // Event handlers
    pub on_item_input: Callback<InputEvent>,
    pub on_cost_input: Callback<InputEvent>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(AddCostModal)]
pub fn add_cost_modal(props: &AddCostModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">{format!("Add New Cost for {}", props.params)}</h3>

                {if let Some(error) = props.form_error.as_ref() {
                    html! {
                        <div class="form-message error">
                            {error}
                        </div>
                    }
                } else { html! {} }}

                <form class="add-cost-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="cost-item">{"Item"}</label>
                        <input
                            id="cost-item"
                            type="text"
                            class="modal-input"
                            placeholder="e.g. Groceries"
                            value={props.item.clone()}
                            oninput={props.on_item_input.clone()}
                            disabled={props.submitting}
                            autofocus=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="cost-amount">{"Cost"}</label>
                        <input
                            id="cost-amount"
                            type="text"
                            inputmode="decimal"
                            class="modal-input"
                            placeholder="0.00"
                            value={props.cost.clone()}
                            oninput={props.on_cost_input.clone()}
                            disabled={props.submitting}
                        />
                    </div>

                    <div class="modal-buttons">
                        <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                            {if props.submitting { "Saving..." } else { "Add Cost" }}
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={props.submitting}>
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
