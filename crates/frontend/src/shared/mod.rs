pub mod api;
pub mod components;
pub mod date_utils;
pub mod dom;
pub mod export;
pub mod icons;
pub mod list_controller;
pub mod pdf;
