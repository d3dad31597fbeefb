use std::{io, path::PathBuf, process::ExitStatus};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to open image '{}': {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("failed to run '{program}': {source}")]
    Exec {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program} {command}' exited with {status}")]
    Status {
        program: String,
        command: String,
        status: ExitStatus,
    },

    #[error("no PUBLIC KEY block in openssl output")]
    MissingPublicKey,

    #[error("malformed PEM body: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("failed to render pin-set template: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
