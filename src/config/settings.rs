use serde::Deserialize;
use std::path::PathBuf;

use crate::model::OutputFormat;

pub const DEFAULT_ICON_PATH: &str = "android/app/src/main/res/mipmap-xhdpi/ic_launcher.png";
pub const DEFAULT_HOST: &str = "zerokeep.vercel.app";
pub const DEFAULT_PORT: u16 = 443;
pub const DEFAULT_OPENSSL: &str = "openssl";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub icon: IconSettings,
    pub pins: PinSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconSettings {
    pub path: PathBuf,
    pub x: u32,
    pub y: u32,
}

impl Default for IconSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_ICON_PATH),
            x: 0,
            y: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PinSettings {
    pub host: String,
    pub port: u16,
    pub openssl: PathBuf,
    pub format: OutputFormat,
    /// Written as the `expiration` attribute of a rendered `<pin-set>`.
    pub expiration: Option<String>,
}

impl Default for PinSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            openssl: PathBuf::from(DEFAULT_OPENSSL),
            format: OutputFormat::default(),
            expiration: None,
        }
    }
}
