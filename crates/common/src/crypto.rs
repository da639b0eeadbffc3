//! Cryptographic utilities shared across Markdown Ninja crates
//!
//! Provides SHA-512 digests rendered as lowercase hexadecimal text.

use sha2::{Digest, Sha512};

use crate::error::{Error, Result};

/// Length of a hex-encoded SHA-512 digest (64 bytes, two characters each).
pub const SHA512_HEX_LEN: usize = 128;

/// Compute the SHA-512 digest of `data` as a 128-character lowercase hex string.
pub fn sha512_hex(data: &[u8]) -> String {
    let digest = Sha512::digest(data);
    hex::encode(digest)
}

/// Compute the SHA-512 digest of `data` on the blocking pool.
///
/// The caller is suspended until the digest is ready. There is no timeout and
/// no cancellation. Fails with [`Error::HashingUnavailable`] when the blocking
/// task cannot run to completion.
pub async fn hash_sha512(data: impl Into<Vec<u8>>) -> Result<String> {
    let data = data.into();
    let len = data.len();

    let hash = tokio::task::spawn_blocking(move || sha512_hex(&data))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, input_len = len, "SHA-512 digest task failed");
            Error::HashingUnavailable(e.to_string())
        })?;

    Ok(hash)
}

/// Hash UTF-8 text, see [`hash_sha512`].
pub async fn hash_sha512_str(text: &str) -> Result<String> {
    hash_sha512(text.as_bytes()).await
}
