mod parser;
mod settings;

pub use parser::load_settings;
pub use settings::{
    DEFAULT_HOST, DEFAULT_ICON_PATH, DEFAULT_OPENSSL, DEFAULT_PORT, IconSettings, PinSettings,
    Settings,
};
