//! UUID generator and generation requests

use crate::v1::{ClockNode, TimeBasedSource};
use crate::{v4, GeneratorError, Uuid};
use md5::Md5;
use rand::{CryptoRng, RngCore};
use sha1::Sha1;

/// A single UUID generation request dispatched by [`Generator::create`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Request<'a> {
    /// A fixed value such as [`Uuid::NIL`] or one of the namespace constants, returned verbatim.
    Constant(Uuid),

    /// A time-based UUID from the [`TimeBasedSource`], optionally with its clock sequence and
    /// node fields replaced.
    TimeBased {
        /// Values substituted for the clock sequence and node fields of the source's UUID.
        clock_node: Option<ClockNode>,
    },

    /// A name-based UUID computed with MD5.
    NameMd5 {
        /// The namespace UUID.
        namespace: &'a Uuid,
        /// The name, taken as opaque bytes.
        name: &'a [u8],
    },

    /// A random UUID.
    Random,

    /// A name-based UUID computed with SHA-1.
    NameSha1 {
        /// The namespace UUID.
        namespace: &'a Uuid,
        /// The name, taken as opaque bytes.
        name: &'a [u8],
    },
}

impl Request<'_> {
    /// Returns the UUID version this request produces, or zero for a constant.
    pub const fn version(&self) -> u8 {
        match self {
            Self::Constant(_) => 0,
            Self::TimeBased { .. } => 1,
            Self::NameMd5 { .. } => 3,
            Self::Random => 4,
            Self::NameSha1 { .. } => 5,
        }
    }
}

/// Represents a UUID generator that combines a cryptographically strong random number generator
/// and a source of time-based UUIDs.
///
/// Calls are independent of each other. The generator itself keeps no state besides the random
/// number generator; time-based state belongs to the [`TimeBasedSource`].
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use uuid_ossp::{Generator, SystemTimeSource, Uuid};
///
/// let mut g = Generator::new(OsRng, SystemTimeSource::new());
/// println!("{}", g.generate_v4());
/// println!("{}", g.generate_v5(&Uuid::NAMESPACE_URL, "https://example.com/"));
/// if let Ok(uuid) = g.generate_v1mc() {
///     println!("{}", uuid);
/// }
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R, T> {
    /// The random number generator used by the generator.
    rng: R,

    /// The source of time-based UUIDs.
    time_source: T,
}

impl<R: RngCore + CryptoRng, T: TimeBasedSource> Generator<R, T> {
    /// Creates a generator instance.
    pub const fn new(rng: R, time_source: T) -> Self {
        Self { rng, time_source }
    }

    /// Generates a UUID as specified by `request`.
    ///
    /// Only [`Request::TimeBased`] can fail, when the time-based source reports a non-ok status.
    /// The error is returned as is; nothing is retried.
    pub fn create(&mut self, request: Request<'_>) -> Result<Uuid, GeneratorError> {
        match request {
            Request::Constant(value) => Ok(value),
            Request::TimeBased { clock_node } => {
                let uuid = self.time_source.create_v1().map_err(|err| {
                    log::warn!("{}", err);
                    err
                })?;
                Ok(match clock_node {
                    Some(clock_node) => clock_node.apply(uuid),
                    None => uuid,
                })
            }
            Request::NameMd5 { namespace, name } => {
                Ok(Uuid::from_name_digest::<Md5>(namespace, name))
            }
            Request::Random => Ok(v4::generate(&mut self.rng)),
            Request::NameSha1 { namespace, name } => {
                Ok(Uuid::from_name_digest::<Sha1>(namespace, name))
            }
        }
    }

    /// Generates a new UUIDv1 object from the time-based source.
    pub fn generate_v1(&mut self) -> Result<Uuid, GeneratorError> {
        self.create(Request::TimeBased { clock_node: None })
    }

    /// Generates a new UUIDv1 object whose clock sequence and node are random, the node being
    /// marked as a multicast, locally administered address.
    ///
    /// The timestamp still comes from the time-based source, so this fails whenever
    /// [`generate_v1`](Self::generate_v1) would.
    pub fn generate_v1mc(&mut self) -> Result<Uuid, GeneratorError> {
        let clock_node = ClockNode::random_multicast(&mut self.rng);
        self.create(Request::TimeBased {
            clock_node: Some(clock_node),
        })
    }

    /// Generates a UUIDv3 object from `namespace` and `name`.
    ///
    /// Equivalent to [`Request::NameMd5`] passed to [`create`](Self::create), which cannot fail.
    pub fn generate_v3(&self, namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
        crate::uuid3(namespace, name)
    }

    /// Generates a new UUIDv4 object.
    ///
    /// Equivalent to [`Request::Random`] passed to [`create`](Self::create), which cannot fail.
    pub fn generate_v4(&mut self) -> Uuid {
        v4::generate(&mut self.rng)
    }

    /// Generates a UUIDv5 object from `namespace` and `name`.
    ///
    /// Equivalent to [`Request::NameSha1`] passed to [`create`](Self::create), which cannot fail.
    pub fn generate_v5(&self, namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
        crate::uuid5(namespace, name)
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid_ossp::{Generator, SystemTimeSource};
///
/// Generator::new(rand::thread_rng(), SystemTimeSource::new())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RngCore + CryptoRng, T: TimeBasedSource> Iterator for Generator<R, T> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate_v4())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RngCore + CryptoRng, T: TimeBasedSource> core::iter::FusedIterator for Generator<R, T> {}
