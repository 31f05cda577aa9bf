//! Generators of RFC 4122 UUIDs: the Nil and namespace constants, time-based versions 1 and
//! "1mc", name-based versions 3 (MD5) and 5 (SHA-1), and random version 4
//!
//! ```rust
//! use uuid_ossp::{uuid3, uuid4, uuid5, Uuid};
//!
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = uuid3(&Uuid::NAMESPACE_DNS, "www.example.com");
//! assert_eq!(uuid.to_string(), "5df41881-3aed-3515-88a7-2f4a814cf09e");
//!
//! let uuid = uuid5(&Uuid::NAMESPACE_DNS, "www.example.com");
//! assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
//!
//! if let Ok(uuid) = uuid_ossp::uuid1mc() {
//!     println!("{}", uuid); // e.g., "c232ab00-9414-11ec-9a44-1f0d6c3e52b7"
//! }
//! ```
//!
//! # Field and bit layout
//!
//! Every generated UUID other than the Nil UUID carries the 4-bit `ver` field in the most
//! significant bits of byte 6 and the 2-bit `var` field, set at `10`, in the most significant bits
//! of byte 8. A UUIDv1 lays out its other fields as follows:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_high       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             node                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 60-bit timestamp (`time_high`, `time_mid`, `time_low`) counts 100-nanosecond intervals
//!   since 1582-10-15 00:00:00 UTC.
//! - The 14-bit `clock_seq` field changes when the clock is set back, so that a rewound clock does
//!   not reproduce earlier UUIDs.
//! - The 48-bit `node` field holds a hardware address of the host.
//!
//! A "v1mc" UUID keeps the timestamp of a UUIDv1 but replaces `clock_seq` and `node` with random
//! bits, setting the IEEE 802 multicast and locally administered bits of the node so that it never
//! collides with a real hardware address.
//!
//! Versions 3 and 5 fill the 122 bits with the MD5 or the truncated SHA-1 digest of the namespace
//! UUID followed by the name; the result depends only on the two inputs. Version 4 fills them
//! with a cryptographically strong random number.
//!
//! # Crate features
//!
//! - `std` (default): enables [`uuid1`], [`uuid1mc`], [`uuid4`] and [`SystemTimeSource`].
//!   Without it, the crate is `no_std` and generation goes through a [`Generator`] built from a
//!   caller-supplied random number generator and [`TimeBasedSource`].
//! - `serde`: enables serialization and deserialization of [`Uuid`].
//! - `uuid`: enables conversions between [`Uuid`] and `uuid::Uuid`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{ParseError, Uuid, Variant};

pub mod error;
pub use error::GeneratorError;

mod create;
pub use create::{Generator, Request};

pub mod v1;
pub use v1::{ClockNode, TimeBasedSource};
#[cfg(feature = "std")]
pub use v1::SystemTimeSource;

mod name;
pub use name::{uuid3, uuid5, NameDigest};

mod v4;

mod entry;
pub use entry::{nil, ns_dns, ns_oid, ns_url, ns_x500};
#[cfg(feature = "std")]
pub use entry::{uuid1, uuid1mc, uuid4};
