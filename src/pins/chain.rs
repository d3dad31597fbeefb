use crate::error::{Error, Result};
use crate::utils::{pem_body, pem_sections, sha256_base64};
use base64::{Engine, engine::general_purpose::STANDARD};

/// Splits an `s_client -showcerts` dump into its PEM certificates, in the
/// order the server sent them.
pub fn split_chain(dump: &str) -> Vec<String> {
    pem_sections(dump, "CERTIFICATE")
        .into_iter()
        .map(|section| section.join("\n"))
        .collect()
}

/// Pin of the first `PUBLIC KEY` block in `public_key_pem`: the base64
/// SHA-256 of its SubjectPublicKeyInfo DER encoding.
pub fn spki_pin(public_key_pem: &str) -> Result<String> {
    let sections = pem_sections(public_key_pem, "PUBLIC KEY");
    let section = sections.first().ok_or(Error::MissingPublicKey)?;
    let der = STANDARD.decode(pem_body(section))?;
    Ok(sha256_base64(der))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAIN: &str = include_str!("../../tests/fixtures/chain.txt");
    const LEAF_PUB: &str = include_str!("../../tests/fixtures/leaf.pub");
    const INTER_PUB: &str = include_str!("../../tests/fixtures/inter.pub");

    #[test]
    fn recovers_every_certificate_in_order() {
        let certs = split_chain(CHAIN);
        assert_eq!(certs.len(), 2);
        assert!(certs[0].contains("MIIBfDCCASOg"));
        assert!(certs[1].contains("MIIBgDCCASWg"));

        for cert in &certs {
            assert!(cert.starts_with("-----BEGIN CERTIFICATE-----\n"));
            assert!(cert.ends_with("\n-----END CERTIFICATE-----"));
        }
    }

    #[test]
    fn empty_dump_has_no_certificates() {
        assert!(split_chain("CONNECTED(00000003)\n---\nno peer certificate available\n").is_empty());
    }

    #[test]
    fn pin_matches_openssl_digest() {
        assert_eq!(
            spki_pin(LEAF_PUB).expect("leaf pin"),
            "E+w4eJW49foz0ZFpQ4jkSgjkcszyfC7Jh+jQQnoSMr8="
        );
        assert_eq!(
            spki_pin(INTER_PUB).expect("intermediate pin"),
            "9KAt8nDYVqVKrBsGB94TGJ5UAWvBHuqm8Vph6w5LGWk="
        );
    }

    #[test]
    fn output_without_public_key_is_an_error() {
        assert!(matches!(spki_pin(""), Err(Error::MissingPublicKey)));
    }

    #[test]
    fn corrupt_base64_is_an_error() {
        let pem = "-----BEGIN PUBLIC KEY-----\n!!!!\n-----END PUBLIC KEY-----\n";
        assert!(matches!(spki_pin(pem), Err(Error::Base64(_))));
    }
}
