//! Constant and default-generator entry point functions

use crate::Uuid;

#[cfg(feature = "std")]
pub use global::{uuid1, uuid1mc, uuid4};

/// Returns the Nil UUID (00000000-0000-0000-0000-000000000000).
pub const fn nil() -> Uuid {
    Uuid::NIL
}

/// Returns the namespace UUID for fully-qualified domain names.
pub const fn ns_dns() -> Uuid {
    Uuid::NAMESPACE_DNS
}

/// Returns the namespace UUID for URLs.
pub const fn ns_url() -> Uuid {
    Uuid::NAMESPACE_URL
}

/// Returns the namespace UUID for ISO object identifiers.
pub const fn ns_oid() -> Uuid {
    Uuid::NAMESPACE_OID
}

/// Returns the namespace UUID for X.500 distinguished names.
pub const fn ns_x500() -> Uuid {
    Uuid::NAMESPACE_X500
}

#[cfg(feature = "std")]
mod global {
    use crate::{Generator, GeneratorError, SystemTimeSource, Uuid};
    use rand::rngs::ThreadRng;
    use std::cell::RefCell;

    thread_local! {
        static DEFAULT_GENERATOR: RefCell<Generator<ThreadRng, SystemTimeSource>> =
            Default::default();
    }

    fn with_default_generator<T>(
        f: impl FnOnce(&mut Generator<ThreadRng, SystemTimeSource>) -> T,
    ) -> T {
        DEFAULT_GENERATOR.with(|g| {
            if unix_fork_safety::reseed_thread_rng_upon_pid_change() {
                g.replace(Default::default());
            }

            f(&mut g.borrow_mut())
        })
    }

    /// Generates a UUIDv1 object from the system clock, the process-wide clock sequence and the
    /// host's hardware address.
    ///
    /// # Errors
    ///
    /// Returns an error if the host's network interfaces cannot be queried or the system clock
    /// reads a time before the Unix epoch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// if let Ok(uuid) = uuid_ossp::uuid1() {
    ///     println!("{uuid}"); // e.g., "c232ab00-9414-11ec-b3c8-9e6bdeced846"
    /// }
    /// ```
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn uuid1() -> Result<Uuid, GeneratorError> {
        with_default_generator(|g| g.generate_v1())
    }

    /// Generates a UUIDv1 object with a random clock sequence and a random multicast node in
    /// place of the host's hardware address.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`uuid1`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// if let Ok(uuid) = uuid_ossp::uuid1mc() {
    ///     println!("{uuid}"); // e.g., "c232ab00-9414-11ec-9a44-1f0d6c3e52b7"
    /// }
    /// ```
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn uuid1mc() -> Result<Uuid, GeneratorError> {
        with_default_generator(|g| g.generate_v1mc())
    }

    /// Generates a UUIDv4 object.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let uuid = uuid_ossp::uuid4();
    /// println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
    /// ```
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn uuid4() -> Uuid {
        with_default_generator(|g| g.generate_v4())
    }

    #[cfg(unix)]
    mod unix_fork_safety {
        use std::{cell::Cell, process};

        thread_local! {
            static PID: Cell<u32> = Cell::new(process::id());
        }

        /// Reseeds ThreadRng immediately when the process ID changes (i.e. upon process forks),
        /// returning true if ThreadRng is reseeded or false otherwise.
        pub fn reseed_thread_rng_upon_pid_change() -> bool {
            PID.with(|last_pid| {
                let pid = process::id();
                if pid == last_pid.replace(pid) {
                    false
                } else {
                    // ThreadRng of rand v0.8 reseeds itself only after its buffered block of
                    // output is used up, so drain it to force a reseed in the child process
                    let _: [[u32; 32]; 2] = rand::random();
                    true
                }
            })
        }
    }

    #[cfg(not(unix))]
    mod unix_fork_safety {
        pub const fn reseed_thread_rng_upon_pid_change() -> bool {
            false
        }
    }
}
