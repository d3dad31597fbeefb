pub mod hash;
pub mod pem;

pub(crate) use hash::{hex_upper, sha256_base64};
pub(crate) use pem::{pem_body, pem_sections};
