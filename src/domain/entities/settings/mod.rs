pub mod system_config;
pub mod user_settings;

pub use system_config::{SystemConfig, SystemConfigUpdate};
pub use user_settings::{UserSettings, UserSettingsUpdate};
