pub mod api_utils;
pub mod components;
pub mod directory_api;
pub mod icons;
pub mod loader;
pub mod navigation;
