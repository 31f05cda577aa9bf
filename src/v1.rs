//! UUIDv1-related functionality

use crate::{GeneratorError, Uuid};
use rand::{CryptoRng, RngCore};

#[cfg(feature = "std")]
pub use system::SystemTimeSource;

/// A source of time-based (version 1) UUIDs.
///
/// The source owns whatever state time-based generation needs (last timestamp, clock sequence,
/// node identifier) and synchronizes it internally if it is shared. Any non-ok status is reported
/// as a [`GeneratorError`] and no UUID is produced.
pub trait TimeBasedSource {
    /// Creates a new UUIDv1 object from the current time, clock sequence and node.
    fn create_v1(&mut self) -> Result<Uuid, GeneratorError>;
}

impl<T: TimeBasedSource + ?Sized> TimeBasedSource for &mut T {
    fn create_v1(&mut self) -> Result<Uuid, GeneratorError> {
        (**self).create_v1()
    }
}

/// Replacement values for the clock sequence and node fields of a UUIDv1.
///
/// A `ClockNode` substitutes the trailing 64 bits of a UUIDv1 produced by a
/// [`TimeBasedSource`], leaving the timestamp fields and the version nibble untouched.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ClockNode {
    clock_seq_field: u16,
    node: [u8; 6],
}

impl ClockNode {
    /// Creates an object from a raw 16-bit clock sequence field (including the variant bits) and
    /// a 48-bit node.
    pub const fn new(clock_seq_field: u16, node: [u8; 6]) -> Self {
        Self {
            clock_seq_field,
            node,
        }
    }

    /// Creates an object with a random clock sequence and a random node marked as an IEEE 802
    /// multicast, locally administered address.
    ///
    /// Such a node never collides with the address of real network hardware. The clock sequence
    /// field carries the variant bits `0b10`.
    pub fn random_multicast<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let clock_seq_field = (rng.next_u32() as u16 & 0x3fff) | 0x8000;
        let mut node = [0u8; 6];
        rng.fill_bytes(&mut node);
        node[0] |= 0x03;
        Self::new(clock_seq_field, node)
    }

    /// Returns the raw 16-bit clock sequence field.
    pub const fn clock_seq_field(&self) -> u16 {
        self.clock_seq_field
    }

    /// Returns the 48-bit node.
    pub const fn node(&self) -> [u8; 6] {
        self.node
    }

    /// Returns `uuid` with its clock sequence and node fields replaced.
    pub const fn apply(&self, uuid: Uuid) -> Uuid {
        uuid.with_clock_seq_and_node(self.clock_seq_field, self.node)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod system {
    use super::TimeBasedSource;
    use crate::error::{STATUS_CLOCK, STATUS_NO_NODE};
    use crate::{GeneratorError, Uuid};
    use std::sync::{Mutex, PoisonError};
    use std::time::{SystemTime, UNIX_EPOCH};

    /// 100-nanosecond intervals between 1582-10-15 and 1970-01-01.
    const GREGORIAN_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

    /// Ten seconds in 100-nanosecond intervals.
    const ROLLBACK_ALLOWANCE: u64 = 100_000_000;

    const MAX_TIMESTAMP: u64 = (1 << 60) - 1;
    const MAX_CLOCK_SEQ: u16 = (1 << 14) - 1;

    static STATE: Mutex<ClockState> = Mutex::new(ClockState::new());

    /// A [`TimeBasedSource`] backed by the system clock and a process-wide clock sequence.
    ///
    /// All instances share one state guarded by a mutex, so UUIDs created through any of them
    /// within a process have strictly increasing timestamps (as long as the system clock does not
    /// move back by more than ten seconds, in which case the clock sequence is incremented).
    ///
    /// The node is the one given to [`with_node`](Self::with_node) or else the first hardware
    /// address found on the host. A host without any hardware address gets a random multicast
    /// node that stays fixed for the life of the process.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_ossp::{SystemTimeSource, TimeBasedSource};
    ///
    /// let mut source = SystemTimeSource::with_node([0x02, 0x00, 0x5e, 0x10, 0x00, 0x01]);
    /// let uuid = source.create_v1()?;
    /// assert_eq!(uuid.version(), Some(1));
    /// assert_eq!(uuid.node(), [0x02, 0x00, 0x5e, 0x10, 0x00, 0x01]);
    /// # Ok::<(), uuid_ossp::GeneratorError>(())
    /// ```
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct SystemTimeSource {
        node: Option<[u8; 6]>,
    }

    impl SystemTimeSource {
        /// Creates a source that uses the host's hardware address as the node.
        pub const fn new() -> Self {
            Self { node: None }
        }

        /// Creates a source that uses `node` as the node.
        pub const fn with_node(node: [u8; 6]) -> Self {
            Self { node: Some(node) }
        }
    }

    impl TimeBasedSource for SystemTimeSource {
        fn create_v1(&mut self) -> Result<Uuid, GeneratorError> {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_err(|_| GeneratorError::new(STATUS_CLOCK))?;
            let ticks = GREGORIAN_OFFSET
                + now.as_secs() * 10_000_000
                + (now.subsec_nanos() / 100) as u64;

            let mut state = STATE.lock().unwrap_or_else(PoisonError::into_inner);
            #[cfg(unix)]
            state.reset_upon_pid_change(std::process::id());
            let node = match self.node {
                Some(node) => node,
                None => state.host_node()?,
            };
            let (timestamp, clock_seq) = state.advance(ticks);
            Ok(Uuid::from_fields_v1(timestamp & MAX_TIMESTAMP, clock_seq, node))
        }
    }

    #[derive(Debug)]
    struct ClockState {
        #[cfg(unix)]
        pid: u32,
        timestamp: u64,
        clock_seq: Option<u16>,
        node: Option<[u8; 6]>,
    }

    impl ClockState {
        const fn new() -> Self {
            Self {
                #[cfg(unix)]
                pid: 0,
                timestamp: 0,
                clock_seq: None,
                node: None,
            }
        }

        /// Forgets the last timestamp and the clock sequence if `pid` differs from the process ID
        /// recorded in the state (i.e., upon process forks), so that a child process draws a new
        /// clock sequence instead of continuing the parent's. Returns true if the state is reset.
        #[cfg(unix)]
        fn reset_upon_pid_change(&mut self, pid: u32) -> bool {
            if self.pid == pid {
                return false;
            }
            if self.pid != 0 {
                log::debug!(
                    "process ID changed from {} to {}; resetting clock state",
                    self.pid,
                    pid
                );
            }
            self.pid = pid;
            self.timestamp = 0;
            self.clock_seq = None;
            true
        }

        /// Returns the next timestamp and clock sequence for `ticks` read from the clock.
        fn advance(&mut self, ticks: u64) -> (u64, u16) {
            let mut clock_seq = *self
                .clock_seq
                .get_or_insert_with(|| rand::random::<u16>() & MAX_CLOCK_SEQ);

            if ticks > self.timestamp {
                self.timestamp = ticks;
            } else if ticks + ROLLBACK_ALLOWANCE >= self.timestamp {
                // go on with previous timestamp if new one is not much smaller
                self.timestamp += 1;
            } else {
                clock_seq = (clock_seq + 1) & MAX_CLOCK_SEQ;
                log::debug!(
                    "clock moved back from {} to {}; clock sequence now {:#06x}",
                    self.timestamp,
                    ticks,
                    clock_seq
                );
                self.clock_seq = Some(clock_seq);
                self.timestamp = ticks;
            }

            (self.timestamp, clock_seq)
        }

        /// Returns the node derived from the host, looking it up on first use.
        fn host_node(&mut self) -> Result<[u8; 6], GeneratorError> {
            if let Some(node) = self.node {
                return Ok(node);
            }

            let node = match mac_address::get_mac_address() {
                Ok(Some(address)) if address.bytes() != [0; 6] => {
                    log::trace!("using hardware address {} as node", address);
                    address.bytes()
                }
                Ok(_) => {
                    let mut node: [u8; 6] = rand::random();
                    node[0] |= 0x01;
                    log::trace!("no hardware address found; using random multicast node");
                    node
                }
                Err(err) => {
                    log::debug!("could not read hardware address: {}", err);
                    return Err(GeneratorError::new(STATUS_NO_NODE));
                }
            };
            self.node = Some(node);
            Ok(node)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::{ClockState, SystemTimeSource, GREGORIAN_OFFSET};
        use crate::error::STATUS_NO_NODE;
        use crate::{TimeBasedSource, Variant};

        const NODE: [u8; 6] = [0x02, 0x00, 0x5e, 0x10, 0x00, 0x01];

        /// Generates increasing timestamps even with decreasing or constant clock
        #[test]
        fn generates_increasing_timestamps_even_with_decreasing_or_constant_clock() {
            let ts = 0x01ef_0123_4567_89abu64;
            let mut state = ClockState::new();
            let (mut prev, clock_seq) = state.advance(ts);
            assert_eq!(prev, ts);
            for i in 0..100_000u64 {
                let (curr, curr_seq) = state.advance(ts - i.min(40_000_000));
                assert!(prev < curr);
                assert_eq!(curr_seq, clock_seq);
                prev = curr;
            }
        }

        /// Bumps clock sequence if clock goes backwards a lot
        #[test]
        fn bumps_clock_sequence_if_clock_goes_backwards_a_lot() {
            let ts = 0x01ef_0123_4567_89abu64;
            let mut state = ClockState::new();
            let (_, clock_seq) = state.advance(ts);

            let (curr, curr_seq) = state.advance(ts - 100_000_000);
            assert_eq!(curr, ts + 1);
            assert_eq!(curr_seq, clock_seq);

            let (curr, curr_seq) = state.advance(ts - 100_000_002);
            assert_eq!(curr, ts - 100_000_002);
            assert_eq!(curr_seq, (clock_seq + 1) & 0x3fff);
        }

        /// Resets timestamp and clock sequence upon process ID change
        #[cfg(unix)]
        #[test]
        fn resets_timestamp_and_clock_sequence_upon_process_id_change() {
            let ts = 0x01ef_0123_4567_89abu64;
            let mut state = ClockState::new();
            assert!(state.reset_upon_pid_change(1_000));
            let (_, clock_seq) = state.advance(ts);

            // a burst of calls runs ahead of the clock
            for _ in 0..20_000_000 / 1_000 {
                state.advance(ts);
            }
            assert!(!state.reset_upon_pid_change(1_000));
            let (curr, curr_seq) = state.advance(ts);
            assert_eq!(curr, ts + 20_001);
            assert_eq!(curr_seq, clock_seq);

            // the forked child must not continue where the parent left off
            assert!(state.reset_upon_pid_change(1_001));
            assert_eq!(state.clock_seq, None);
            let (curr, _) = state.advance(ts);
            assert_eq!(curr, ts);
            assert!(state.clock_seq.is_some());
            assert!(!state.reset_upon_pid_change(1_001));
        }

        /// Encodes up-to-date timestamp and configured node
        #[test]
        fn encodes_up_to_date_timestamp_and_configured_node() {
            use std::time;
            let mut source = SystemTimeSource::with_node(NODE);
            for _ in 0..10_000 {
                let e = source.create_v1().unwrap();
                let now = time::SystemTime::now()
                    .duration_since(time::UNIX_EPOCH)
                    .expect("clock may have gone backwards");
                let ts_now = GREGORIAN_OFFSET + (now.as_nanos() / 100) as u64;
                let ts = e.timestamp_v1().unwrap();
                assert!(ts.abs_diff(ts_now) < 10_000_000, "{ts} vs {ts_now}");
                assert_eq!(e.node(), NODE);
                assert_eq!(e.variant(), Variant::Var10);
                assert_eq!(e.version(), Some(1));
            }
        }

        /// Generates strictly increasing timestamps within process
        #[test]
        fn generates_strictly_increasing_timestamps_within_process() {
            let mut source = SystemTimeSource::with_node(NODE);
            let mut prev = source.create_v1().unwrap().timestamp_v1().unwrap();
            for _ in 0..100_000 {
                let curr = source.create_v1().unwrap().timestamp_v1().unwrap();
                assert!(prev < curr);
                prev = curr;
            }
        }

        /// Uses the same host node for every call
        #[test]
        fn uses_the_same_host_node_for_every_call() {
            let mut source = SystemTimeSource::new();
            match source.create_v1() {
                Ok(first) => {
                    for _ in 0..1_000 {
                        assert_eq!(source.create_v1().unwrap().node(), first.node());
                    }
                }
                Err(err) => assert_eq!(err.status(), STATUS_NO_NODE),
            }
        }
    }
}
