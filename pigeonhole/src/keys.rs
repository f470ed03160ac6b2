//! Serialization helpers for public-key material.
//!
//! Keys travel as PEM-wrapped SubjectPublicKeyInfo (RFC 5280). Decoding is a
//! two-step parse: the generic SPKI container first, then an RSA parse only
//! when the algorithm OID names the RSA family. A well-formed key of another
//! family decodes to [`None`] so callers can treat it as "no usable key"
//! instead of a hard failure.

use rsa::{
    pkcs8::{EncodePublicKey, LineEnding},
    RsaPublicKey,
};
use spki::{
    der::{asn1::ObjectIdentifier, Document},
    SubjectPublicKeyInfoRef,
};
use thiserror::Error;

/// rsaEncryption, per RFC 8017.
const RSA_ENCRYPTION_OID: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

#[derive(Debug, Error)]
pub enum KeyError {
    #[error("key bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("malformed key encoding: {0}")]
    Der(#[from] spki::der::Error),
    #[error("invalid public key: {0}")]
    Spki(#[from] spki::Error),
}

/// Serialize `key` to its canonical textual form: PEM-wrapped
/// SubjectPublicKeyInfo with LF line endings.
pub fn encode_public_key(key: &RsaPublicKey) -> Result<Vec<u8>, KeyError> {
    let pem = key.to_public_key_pem(LineEnding::LF)?;
    Ok(pem.into_bytes())
}

/// Parse PEM bytes into an RSA public key.
///
/// Returns `Ok(None)` when the PEM holds a well-formed public key of a
/// different algorithm family. Corrupt input is an error.
pub fn decode_public_key(pem: &[u8]) -> Result<Option<RsaPublicKey>, KeyError> {
    let pem = std::str::from_utf8(pem)?;
    let (_, document) = Document::from_pem(pem)?;
    let info: SubjectPublicKeyInfoRef = document.decode_msg()?;

    if info.algorithm.oid != RSA_ENCRYPTION_OID {
        return Ok(None);
    }

    Ok(Some(RsaPublicKey::try_from(info)?))
}
