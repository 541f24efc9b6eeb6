pub mod settings_repo;
pub mod system_config_repo;

pub use settings_repo::{SettingsRepository, SettingsStore};
pub use system_config_repo::{ConfigStore, SystemConfigRepository};
