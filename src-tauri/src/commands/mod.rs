pub mod app_control;
pub mod location;
pub mod settings;
pub mod usage;
