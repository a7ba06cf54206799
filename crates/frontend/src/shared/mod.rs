pub mod api_client;
pub mod components;
pub mod config;
pub mod form_utils;
pub mod format;
pub mod icons;
pub mod page_frame;
pub mod page_standard;
pub mod request_seq;
