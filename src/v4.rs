//! UUIDv4-related functionality

use crate::Uuid;
use rand::{CryptoRng, RngCore};

/// Generates a UUIDv4 object from 16 bytes drawn from `rng`.
///
/// The version and variant bits are overwritten, so 122 of the 128 bits come from `rng`.
pub(crate) fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    Uuid::from_bytes_versioned(bytes, 4)
}
