use crate::domain::constants::HASH_CHUNK_SIZE;
use crate::domain::models::ResolvedPath;
use sha2::{Digest, Sha256};
use std::io::Read;

/// Hex-encoded SHA-256 of the file contents, streamed in fixed-size chunks
/// so peak memory stays bounded for any input size. The digest is used for
/// audit traceability only.
pub fn digest(path: &ResolvedPath) -> std::io::Result<String> {
    let mut file = std::fs::File::open(path.as_path())?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; HASH_CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
