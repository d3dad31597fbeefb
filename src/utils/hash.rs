use base64::{Engine, engine::general_purpose::STANDARD};
use sha2::{Digest, Sha256};

pub(crate) fn hex_upper(bytes: impl AsRef<[u8]>) -> String {
    let bytes = bytes.as_ref();
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        use std::fmt::Write;
        let _ = write!(&mut out, "{:02X}", byte);
    }
    out
}

/// SHA-256 of `bytes`, base64 encoded with the padded standard alphabet.
///
/// Same output as `openssl dgst -sha256 -binary | openssl enc -base64`.
pub(crate) fn sha256_base64(bytes: impl AsRef<[u8]>) -> String {
    STANDARD.encode(Sha256::digest(bytes.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_upper_pads_and_uppercases() {
        assert_eq!(hex_upper([0x00u8, 0x0a, 0xff]), "000AFF");
        assert_eq!(hex_upper([0u8; 0]), "");
    }

    #[test]
    fn sha256_base64_of_empty_input() {
        assert_eq!(
            sha256_base64(b""),
            "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
        );
    }
}
