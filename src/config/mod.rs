mod manager;

pub use manager::{
    ConfigFile, ConfigManager, ExportSettings, LOCAL_CONFIG_FILE, TranslateSettings,
};
