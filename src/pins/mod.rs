mod chain;
mod openssl;

pub use chain::{split_chain, spki_pin};
pub use openssl::Openssl;

use crate::config::{DEFAULT_OPENSSL, DEFAULT_PORT};
use crate::error::Result;
use crate::model::{CertPin, ChainRole, PinReport};
use std::path::Path;
use tracing::{debug, info};

/// Computes SPKI pins for every certificate a host serves.
pub struct PinProbe {
    host: String,
    port: u16,
    openssl: Openssl,
}

impl PinProbe {
    pub fn builder(host: impl Into<String>) -> PinProbe {
        PinProbe {
            host: host.into(),
            port: DEFAULT_PORT,
            openssl: Openssl::new(DEFAULT_OPENSSL),
        }
    }

    pub fn set_port(&mut self, port: u16) -> &mut Self {
        self.port = port;
        self
    }

    pub fn set_openssl(&mut self, program: impl AsRef<Path>) -> &mut Self {
        self.openssl = Openssl::new(program);
        self
    }

    pub fn run(&self) -> Result<PinReport> {
        info!(host = %self.host, port = self.port, "fetching certificate chain");
        let dump = self.openssl.show_certs(&self.host, self.port)?;

        let certs = split_chain(&dump);
        debug!(certificates = certs.len(), "split certificate chain");

        let pins = certs
            .iter()
            .enumerate()
            .map(|(index, cert)| self.pin_certificate(index, cert))
            .collect::<Result<Vec<_>>>()?;

        Ok(PinReport {
            host: self.host.clone(),
            port: self.port,
            pins,
        })
    }

    fn pin_certificate(&self, index: usize, cert_pem: &str) -> Result<CertPin> {
        let public_key = self.openssl.public_key(cert_pem)?;
        let pin = spki_pin(&public_key)?;
        let role = ChainRole::from_index(index);
        debug!(index, role = %role, pin = %pin, "pinned certificate");

        Ok(CertPin { index, role, pin })
    }
}
