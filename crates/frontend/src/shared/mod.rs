pub mod api_utils;
pub mod components;
pub mod confirm;
pub mod date_utils;
pub mod icons;
pub mod notices;
pub mod rest_store;
