#[cfg(not(feature = "std"))]
use core as std;

use fstr::FStr;
use std::{fmt, str};

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Namespace for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self::from_literal("6ba7b810-9dad-11d1-80b4-00c04fd430c8");

    /// Namespace for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self::from_literal("6ba7b811-9dad-11d1-80b4-00c04fd430c8");

    /// Namespace for ISO object identifiers (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self::from_literal("6ba7b812-9dad-11d1-80b4-00c04fd430c8");

    /// Namespace for X.500 distinguished names (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self::from_literal("6ba7b814-9dad-11d1-80b4-00c04fd430c8");

    const fn from_literal(src: &str) -> Self {
        match Self::try_parse(src) {
            Ok(value) => value,
            Err(_) => panic!("invalid UUID literal"),
        }
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a UUID byte array from UUIDv1 field values.
    ///
    /// `timestamp` is the count of 100-nanosecond intervals since 1582-10-15 00:00:00 UTC and
    /// `clock_seq` is the 14-bit clock sequence without the variant bits.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` does not fit in 60 bits or `clock_seq` does not fit in 14 bits.
    pub const fn from_fields_v1(timestamp: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        if timestamp >= 1 << 60 || clock_seq >= 1 << 14 {
            panic!("invalid field value");
        }

        Self([
            (timestamp >> 24) as u8,
            (timestamp >> 16) as u8,
            (timestamp >> 8) as u8,
            timestamp as u8,
            (timestamp >> 40) as u8,
            (timestamp >> 32) as u8,
            0x10 | (timestamp >> 56) as u8,
            (timestamp >> 48) as u8,
            0x80 | (clock_seq >> 8) as u8,
            clock_seq as u8,
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }

    /// Overwrites the version nibble and the variant bits of `bytes`, leaving the other 122 bits
    /// as they are.
    pub(crate) const fn from_bytes_versioned(mut bytes: [u8; 16], version: u8) -> Self {
        bytes[6] = (version << 4) | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self(bytes)
    }

    /// Returns a copy of this UUID whose 16-bit clock sequence field (including the variant bits)
    /// and 48-bit node field are replaced by the given values.
    ///
    /// The timestamp fields and the version nibble are left untouched.
    pub const fn with_clock_seq_and_node(self, clock_seq_field: u16, node: [u8; 6]) -> Self {
        let mut bytes = self.0;
        bytes[8] = (clock_seq_field >> 8) as u8;
        bytes[9] = clock_seq_field as u8;
        let mut i = 0;
        while i < 6 {
            bytes[10 + i] = node[i];
            i += 1;
        }
        Self(bytes)
    }

    /// Reports the variant field value of the UUID or, if appropriate, "NIL" or "MAX".
    ///
    /// For convenience, this method reports [`Variant::Nil`] or [`Variant::Max`] if `self`
    /// represents the Nil or Max UUID, although the Nil and Max UUIDs are technically subsumed
    /// under the variants `0b0` and `0b111`, respectively.
    pub fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0x0..=0x7 if self == &Self::NIL => Variant::Nil,
            0x0..=0x7 => Variant::Var0,
            0x8..=0xb => Variant::Var10,
            0xc..=0xd => Variant::Var110,
            _ if self == &Self::MAX => Variant::Max,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID or `None` if `self` does not have the
    /// variant field value of `0b10`.
    pub fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 60-bit timestamp of a UUIDv1, or `None` if `self` is not a UUIDv1.
    pub fn timestamp_v1(&self) -> Option<u64> {
        if self.version() != Some(1) {
            return None;
        }

        let b = &self.0;
        let time_low = u32::from_be_bytes([b[0], b[1], b[2], b[3]]) as u64;
        let time_mid = u16::from_be_bytes([b[4], b[5]]) as u64;
        let time_hi = u16::from_be_bytes([b[6] & 0x0f, b[7]]) as u64;
        Some((time_hi << 48) | (time_mid << 32) | time_low)
    }

    /// Returns the 14-bit clock sequence, excluding the variant bits.
    pub const fn clock_seq(&self) -> u16 {
        (((self.0[8] & 0x3f) as u16) << 8) | self.0[9] as u16
    }

    /// Returns the 48-bit node field.
    pub const fn node(&self) -> [u8; 6] {
        [
            self.0[10], self.0[11], self.0[12], self.0[13], self.0[14], self.0[15],
        ]
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string-like type that can be handled like [`String`] through common traits.
    ///
    /// This method is primarily for `no_std` environments where heap-allocated string types are
    /// not readily available. Use the [`fmt::Display`] trait usually to get the 8-4-4-4-12
    /// canonical hexadecimal string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_ossp::Uuid;
    ///
    /// let x = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", y), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), uuid_ossp::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut j = 0;
        for (i, &e) in self.0.iter().enumerate() {
            if i == 4 || i == 6 || i == 8 || i == 10 {
                buffer[j] = b'-';
                j += 1;
            }
            let e = e as usize;
            buffer[j] = DIGITS[e >> 4];
            buffer[j + 1] = DIGITS[e & 15];
            j += 2;
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer consists of ASCII hex digits and hyphens only
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Both lower and upper case hexadecimal digits are accepted. This is the `const` form of the
    /// [`str::FromStr`] implementation.
    pub const fn try_parse(src: &str) -> Result<Self, ParseError> {
        const fn decode_hex(c: u8) -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        }

        let src = src.as_bytes();
        if src.len() != 36 {
            return Err(ParseError {});
        }

        let mut dst = [0u8; 16];
        let (mut i, mut j) = (0, 0);
        while i < 16 {
            if i == 4 || i == 6 || i == 8 || i == 10 {
                if src[j] != b'-' {
                    return Err(ParseError {});
                }
                j += 1;
            }
            let (Some(hi), Some(lo)) = (decode_hex(src[j]), decode_hex(src[j + 1])) else {
                return Err(ParseError {});
            };
            dst[i] = (hi << 4) | lo;
            i += 1;
            j += 2;
        }
        Ok(Self(dst))
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::try_parse(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// The reserved UUID variants and the Nil and Max UUIDs.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// Variant `0b0` reserved for NCS backward compatibility (except for the Nil UUID)
    Var0,
    /// Variant `0b10` specified by RFC 4122
    Var10,
    /// Variant `0b110` reserved for Microsoft backward compatibility
    Var110,
    /// Variant `0b111` reserved for future definition (except for the Max UUID)
    VarReserved,
    /// The Nil UUID
    Nil,
    /// The Max UUID
    Max,
}

/// An error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not parse string as UUID")
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{ParseError, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }

    impl std::error::Error for ParseError {}
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [((u64, u16, [u8; 6]), &'static str)] {
        const MAX_UINT60: u64 = (1 << 60) - 1;
        const MAX_UINT14: u16 = (1 << 14) - 1;

        &[
            ((0, 0, [0; 6]), "00000000-0000-1000-8000-000000000000"),
            ((MAX_UINT60, 0, [0; 6]), "ffffffff-ffff-1fff-8000-000000000000"),
            ((0, MAX_UINT14, [0; 6]), "00000000-0000-1000-bfff-000000000000"),
            ((0, 0, [0xff; 6]), "00000000-0000-1000-8000-ffffffffffff"),
            (
                (MAX_UINT60, MAX_UINT14, [0xff; 6]),
                "ffffffff-ffff-1fff-bfff-ffffffffffff",
            ),
            (
                (0x1d19dad6ba7b810, 0xb4, [0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]),
                "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (fs, text) in prepare_cases() {
            let from_fields = Uuid::from_fields_v1(fs.0, fs.1, fs.2);
            assert_eq!(Ok(from_fields), text.parse());
            assert_eq!(Ok(from_fields), text.to_uppercase().parse());
            assert_eq!(&from_fields.encode() as &str, *text);
            assert_eq!(&from_fields.to_string(), text);
            assert_eq!(from_fields.timestamp_v1(), Some(fs.0));
            assert_eq!(from_fields.clock_seq(), fs.1);
            assert_eq!(from_fields.node(), fs.2);
            #[cfg(feature = "uuid")]
            assert_eq!(&uuid::Uuid::from(from_fields).to_string(), text);
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            " 6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8 ",
            " 6ba7b810-9dad-11d1-80b4-00c04fd430c8 ",
            "+6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "-6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "+ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "-ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b8109dad11d180b400c04fd430c8",
            "6ba7b810-9dad11d1-80b4-00c04fd430c8-",
            "{6ba7b810-9dad-11d1-80b4-00c04fd430c8}",
            "6ba7b810-9dad-11 1-80b4-00c04fd430c8",
            "6ba7b8g0-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b810-9dad-11d1-80b4_00c04fd430c8",
            "6ba7b810-9dad-11d1-80b4-00c04fd430c",
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8a",
            "6ba7b810-9dad-11d1-80b4-00c04fd430ç",
        ];

        for e in cases {
            assert!(e.parse::<Uuid>().is_err(), "{e:?}");
        }
    }

    /// Returns Nil, Max and namespace UUIDs
    #[test]
    fn returns_nil_max_and_namespace_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
        assert_eq!(
            &Uuid::NAMESPACE_DNS.encode() as &str,
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(
            &Uuid::NAMESPACE_URL.encode() as &str,
            "6ba7b811-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(
            &Uuid::NAMESPACE_OID.encode() as &str,
            "6ba7b812-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(
            &Uuid::NAMESPACE_X500.encode() as &str,
            "6ba7b814-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(
            Uuid::NAMESPACE_DNS.as_bytes(),
            &[107, 167, 184, 16, 157, 173, 17, 209, 128, 180, 0, 192, 79, 212, 48, 200]
        );
    }

    /// Reports variant and version fields
    #[test]
    fn reports_variant_and_version_fields() {
        assert_eq!(Uuid::NIL.variant(), Variant::Nil);
        assert_eq!(Uuid::MAX.variant(), Variant::Max);
        assert_eq!(Uuid::NIL.version(), None);
        assert_eq!(Uuid::NAMESPACE_DNS.variant(), Variant::Var10);
        assert_eq!(Uuid::NAMESPACE_DNS.version(), Some(1));

        let mut bytes = [0u8; 16];
        bytes[8] = 0x7f;
        assert_eq!(Uuid::from(bytes).variant(), Variant::Var0);
        bytes[8] = 0xc0;
        assert_eq!(Uuid::from(bytes).variant(), Variant::Var110);
        bytes[8] = 0xe0;
        assert_eq!(Uuid::from(bytes).variant(), Variant::VarReserved);
        assert_eq!(Uuid::from(bytes).timestamp_v1(), None);
    }

    /// Overwrites only version and variant bits
    #[test]
    fn overwrites_only_version_and_variant_bits() {
        let e = Uuid::from_bytes_versioned([0xff; 16], 3);
        assert_eq!(&e.encode() as &str, "ffffffff-ffff-3fff-bfff-ffffffffffff");
        let e = Uuid::from_bytes_versioned([0x00; 16], 5);
        assert_eq!(&e.encode() as &str, "00000000-0000-5000-8000-000000000000");
    }

    /// Replaces clock sequence and node fields only
    #[test]
    fn replaces_clock_sequence_and_node_fields_only() {
        let e = Uuid::NAMESPACE_DNS.with_clock_seq_and_node(0x9234, [0x03, 1, 2, 3, 4, 5]);
        assert_eq!(&e.encode() as &str, "6ba7b810-9dad-11d1-9234-030102030405");
        assert_eq!(e.timestamp_v1(), Uuid::NAMESPACE_DNS.timestamp_v1());
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v1(fs.0, fs.1, fs.2);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(e.encode().to_uppercase().parse(), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_u128(), u128::from(e));
        }
    }
}
