use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

/// Keyed tag of `tag_len` bytes: Shake256 over `key || data`.
///
/// Consumed by authenticated sharing layers built on top of the dispersal
/// schemes; the schemes themselves never call this.
pub fn compute_tag(data: &[u8], key: &[u8], tag_len: usize) -> Vec<u8> {
    let mut hasher = Shake256::default();
    hasher.update(key);
    hasher.update(data);
    let mut reader = hasher.finalize_xof();
    let mut tag = vec![0u8; tag_len];
    reader.read(&mut tag);
    tag
}

/// Recompute the tag and compare without early exit, so verification time
/// does not depend on where the first mismatch occurs. An empty tag never
/// verifies.
pub fn verify_tag(data: &[u8], tag: &[u8], key: &[u8]) -> bool {
    if tag.is_empty() {
        return false;
    }
    let expected = compute_tag(data, key, tag.len());
    let mut diff = 0u8;
    for (a, b) in expected.iter().zip(tag) {
        diff |= a ^ b;
    }
    diff == 0
}
