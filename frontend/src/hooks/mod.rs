pub mod use_costs;
pub mod use_scroll_settle;
pub mod use_selector;
