mod color;
mod format;
mod pin;

pub use color::Rgb;
pub use format::OutputFormat;
pub use pin::{CertPin, ChainRole, PinReport};
