pub mod icon;
pub mod image;
pub mod menu;
pub mod navbar;
