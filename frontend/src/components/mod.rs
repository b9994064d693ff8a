pub mod add_cost_modal;
pub mod cost_table;
pub mod costs_screen;
pub mod date_selector;
pub mod header;
pub mod scroll_picker;
