use serde::Serialize;
use std::fmt;

/// Position of a certificate in the served chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainRole {
    Leaf,
    Intermediate,
    Root,
    Other,
}

impl ChainRole {
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Leaf,
            1 => Self::Intermediate,
            2 => Self::Root,
            _ => Self::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Leaf => "Leaf (Rotates ~90 days)",
            Self::Intermediate => "Intermediate (Back up)",
            Self::Root => "Root (Long Term)",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ChainRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertPin {
    pub index: usize,
    pub role: ChainRole,
    /// Base64 SHA-256 of the SubjectPublicKeyInfo DER.
    pub pin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PinReport {
    pub host: String,
    pub port: u16,
    pub pins: Vec<CertPin>,
}
