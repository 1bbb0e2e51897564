pub mod button;
pub mod icon_button;
pub mod markdown;
pub mod modal;
pub mod navbar;
pub mod rules_modal;
