pub mod browser_page;
pub mod column_menu;
pub mod masked_input;
pub mod pagination_controls;
pub mod search_input;
