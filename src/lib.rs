mod config;
mod error;
mod icon;
mod model;
mod pins;
mod render;
mod utils;

pub mod telemetry;

pub use config::{
    DEFAULT_HOST, DEFAULT_ICON_PATH, DEFAULT_OPENSSL, DEFAULT_PORT, IconSettings, PinSettings,
    Settings, load_settings,
};
pub use error::{Error, Result};
pub use icon::IconProbe;
pub use model::{CertPin, ChainRole, OutputFormat, PinReport, Rgb};
pub use pins::{Openssl, PinProbe, split_chain, spki_pin};
pub use render::render_report;
