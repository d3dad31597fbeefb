use clap::ValueEnum;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `<pin digest="SHA-256">` lines for network_security_config.xml
    #[default]
    Xml,
    /// `sha256/<pin>` entries for OkHttp's CertificatePinner
    Okhttp,
    /// A complete `<domain-config>` block
    PinSet,
    /// Machine-readable report
    Json,
}
