//! Helpers for building deterministic identities.

use crate::{Context, Digest, Spec};

/// Derives an address from an arbitrary key by hashing it with the context's hasher.
pub fn generate_address<C: Context>(key: &str) -> <C as Spec>::Address {
    let hash: [u8; 32] = <C as Spec>::Hasher::digest(key.as_bytes()).into();
    C::Address::from(hash)
}
