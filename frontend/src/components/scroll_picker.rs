use web_sys::Element;
use yew::prelude::*;

use crate::hooks::use_scroll_settle::use_scroll_settle;

/// Rows visible at once; the middle one is the selection slot
const VISIBLE_ROWS: f64 = 3.0;

#[derive(Properties, PartialEq)]
pub struct ScrollPickerProps {
    pub label: AttrValue,
    pub items: Vec<String>,
    /// Index of the highlighted row
    pub selected: usize,
    /// Row height in CSS pixels
    pub item_height: f64,
    /// `scrollTop` that shows the initial selection in the middle slot
    pub initial_offset: f64,
    /// Resting `scrollTop` after a gesture settles
    pub on_settled: Callback<f64>,
}

/// Whole-pixel `scrollTop` for an offset; browsers clamp the upper end.
fn scroll_top_for(offset: f64) -> i32 {
    if offset.is_finite() {
        offset.round().max(0.0) as i32
    } else {
        0
    }
}

/// A snap-scrolling column of fixed-height rows.
#[function_component(ScrollPicker)]
pub fn scroll_picker(props: &ScrollPickerProps) -> Html {
    let list_ref = use_node_ref();
    let onscroll = use_scroll_settle(list_ref.clone(), props.on_settled.clone());

    // Line the list up with the initial selection
    {
        let list_ref = list_ref.clone();
        let scroll_top = scroll_top_for(props.initial_offset);
        use_effect_with((), move |_| {
            if let Some(element) = list_ref.cast::<Element>() {
                element.set_scroll_top(scroll_top);
            }
            || ()
        });
    }

    let height = props.item_height;
    let row_style = format!("height: {height}px; line-height: {height}px;");

    html! {
        <div class="picker-column">
            <span class="column-label">{&props.label}</span>
            <div class="picker-wrapper" style={format!("height: {}px;", height * VISIBLE_ROWS)}>
                <div
                    class="picker"
                    ref={list_ref}
                    {onscroll}
                    style={format!("height: {}px; scroll-padding-top: {height}px;", height * VISIBLE_ROWS)}
                >
                    <div class="picker-content" style={format!("padding: {height}px 0;")}>
                        {for props.items.iter().enumerate().map(|(index, item)| {
                            let is_selected = index == props.selected;
                            html! {
                                <div
                                    key={item.clone()}
                                    class={classes!("picker-item", is_selected.then_some("selected"))}
                                    style={row_style.clone()}
                                >
                                    <span class="picker-text">{item}</span>
                                </div>
                            }
                        })}
                    </div>
                </div>
                <div class="selection-indicator" style={format!("top: {height}px; height: {height}px;")} />
            </div>
        </div>
    }
}
