// Settings service
// Loading and saving the TOML settings file

mod service;

pub use service::SettingsService;
