use shared::{format_amount, CostEntry};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CostTableProps {
    pub entries: Vec<CostEntry>,
}

#[function_component(CostTable)]
pub fn cost_table(props: &CostTableProps) -> Html {
    html! {
        <div class="table-container">
            <div class="table-header">
                <span class="header-text">{"Item"}</span>
                <span class="header-text cost">{"Cost"}</span>
            </div>

            <div class="table-body">
                {if props.entries.is_empty() {
                    html! { <div class="table-empty">{"No costs recorded"}</div> }
                } else {
                    html! {
                        for props.entries.iter().enumerate().map(|(index, entry)| html! {
                            <div class="table-row" key={index.to_string()}>
                                <span class="item-text">{&entry.item}</span>
                                <span class="cost-text">{format_amount(entry.cost)}</span>
                            </div>
                        })
                    }
                }}
            </div>
        </div>
    }
}
