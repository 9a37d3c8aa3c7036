use sha2::{Digest, Sha256};

/// Block size used by Dropbox's content-hash scheme.
const BLOCK_SIZE: usize = 4 * 1024 * 1024;

/// Computes the Dropbox `content_hash` of a byte slice: SHA-256 of each
/// 4 MiB block, digests concatenated, then SHA-256 of the concatenation.
/// For an empty input no blocks exist and the result is the hash of the
/// empty digest list.
pub fn dropbox_content_hash(data: &[u8]) -> String {
    let mut overall = Sha256::new();
    for block in data.chunks(BLOCK_SIZE) {
        overall.update(Sha256::digest(block));
    }
    hex::encode(overall.finalize())
}
