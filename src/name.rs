//! Name-based UUID generation (UUIDv3 and UUIDv5)

use crate::Uuid;
use md5::{Digest, Md5};
use sha1::Sha1;

/// A hash function that turns a namespace and a name into the 16 bytes of a name-based UUID.
///
/// Implemented for [`Md5`] (UUIDv3) and [`Sha1`] (UUIDv5). The digest input is the 16 bytes of
/// the namespace followed by the bytes of the name; outputs longer than 16 bytes are truncated.
pub trait NameDigest {
    /// The version number of UUIDs produced through this digest.
    const VERSION: u8;

    /// Returns the first 16 bytes of the digest of `namespace` concatenated with `name`.
    fn digest_name(namespace: &Uuid, name: &[u8]) -> [u8; 16];
}

impl NameDigest for Md5 {
    const VERSION: u8 = 3;

    fn digest_name(namespace: &Uuid, name: &[u8]) -> [u8; 16] {
        let mut hasher = Md5::new();
        hasher.update(namespace.as_bytes());
        hasher.update(name);

        let mut buffer = [0u8; 16];
        buffer.copy_from_slice(&hasher.finalize());
        buffer
    }
}

impl NameDigest for Sha1 {
    const VERSION: u8 = 5;

    fn digest_name(namespace: &Uuid, name: &[u8]) -> [u8; 16] {
        let mut hasher = Sha1::new();
        hasher.update(namespace.as_bytes());
        hasher.update(name);

        let mut buffer = [0u8; 16];
        buffer.copy_from_slice(&hasher.finalize()[..16]);
        buffer
    }
}

impl Uuid {
    /// Creates a name-based UUID from the digest `D` of `namespace` and `name`, setting the
    /// version nibble to `D::VERSION` and the variant bits to `0b10`.
    pub fn from_name_digest<D: NameDigest>(namespace: &Uuid, name: &[u8]) -> Self {
        Self::from_bytes_versioned(D::digest_name(namespace, name), D::VERSION)
    }
}

/// Generates a UUIDv3 object from a namespace and a name using MD5.
///
/// The result depends only on the arguments: equal inputs always produce equal UUIDs.
///
/// # Examples
///
/// ```rust
/// use uuid_ossp::{uuid3, Uuid};
///
/// let uuid = uuid3(&Uuid::NAMESPACE_DNS, "www.example.com");
/// assert_eq!(uuid.to_string(), "5df41881-3aed-3515-88a7-2f4a814cf09e");
/// ```
pub fn uuid3(namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    Uuid::from_name_digest::<Md5>(namespace, name.as_ref())
}

/// Generates a UUIDv5 object from a namespace and a name using SHA-1.
///
/// The result depends only on the arguments: equal inputs always produce equal UUIDs.
///
/// # Examples
///
/// ```rust
/// use uuid_ossp::{uuid5, Uuid};
///
/// let uuid = uuid5(&Uuid::NAMESPACE_DNS, "www.example.com");
/// assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
/// ```
pub fn uuid5(namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    Uuid::from_name_digest::<Sha1>(namespace, name.as_ref())
}
