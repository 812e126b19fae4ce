//! In-process device front end over the Fibonacci engine.
//!
//! Models the original character-device surface: a single-client device
//! whose position selects the Fibonacci index, with seeks clamped into
//! `[0, MAX_INDEX]`. A read returns every field at once — the decimal
//! string plus both latency measurements — instead of a multi-step
//! protocol advancing hidden state between calls.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use fibeng_core::{fibonacci_timed, to_decimal_string, MAX_INDEX};

/// Errors surfaced by the device front end.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// Another session already holds the device.
    #[error("device is in use")]
    Busy,
}

/// Seek origin, mirroring set/current/end file semantics.
///
/// `End(off)` positions at `MAX_INDEX - off`, so `End(0)` is the highest
/// served index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seek {
    Set(i64),
    Cur(i64),
    End(i64),
}

/// One complete read: the rendered value and its latency breakdown.
#[derive(Debug, Clone)]
pub struct Reading {
    /// Index the session was positioned at.
    pub index: u64,
    /// Decimal representation of F(index).
    pub digits: String,
    /// Time spent computing F(index).
    pub compute: Duration,
    /// Time spent rendering the decimal output.
    pub format: Duration,
}

/// Single-client Fibonacci device.
///
/// At most one [`FibSession`] may be open at a time; further opens fail
/// with [`DeviceError::Busy`] until the session is dropped.
///
/// # Example
/// ```
/// use fibeng_lib::device::{FibDevice, Seek};
///
/// let device = FibDevice::new();
/// let mut session = device.open().unwrap();
/// session.seek(Seek::Set(10));
/// assert_eq!(session.read().digits, "55");
/// ```
pub struct FibDevice {
    busy: AtomicBool,
}

impl FibDevice {
    /// Create an idle device.
    #[must_use]
    pub fn new() -> Self {
        Self {
            busy: AtomicBool::new(false),
        }
    }

    /// Open an exclusive session, failing if one is already live.
    pub fn open(&self) -> Result<FibSession<'_>, DeviceError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            tracing::warn!("device is in use");
            return Err(DeviceError::Busy);
        }
        Ok(FibSession {
            device: self,
            pos: 0,
        })
    }
}

impl Default for FibDevice {
    fn default() -> Self {
        Self::new()
    }
}

/// Exclusive session over a [`FibDevice`].
pub struct FibSession<'a> {
    device: &'a FibDevice,
    pos: u64,
}

impl FibSession<'_> {
    /// Current position (the Fibonacci index the next read serves).
    #[must_use]
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Reposition the session, clamping into `[0, MAX_INDEX]`.
    ///
    /// Returns the new position.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn seek(&mut self, seek: Seek) -> u64 {
        let target = match seek {
            Seek::Set(offset) => offset,
            Seek::Cur(offset) => (self.pos as i64).saturating_add(offset),
            Seek::End(offset) => (MAX_INDEX as i64).saturating_sub(offset),
        };
        self.pos = target.clamp(0, MAX_INDEX as i64) as u64;
        self.pos
    }

    /// Compute F(position) and return the value with its timings.
    ///
    /// Pure per call: no counter advances, no state is shared between
    /// reads beyond the seek position.
    #[must_use]
    pub fn read(&self) -> Reading {
        let timed = fibonacci_timed(self.pos);
        let start = Instant::now();
        let digits = to_decimal_string(&timed.value);
        let format = start.elapsed();
        Reading {
            index: self.pos,
            digits,
            compute: timed.compute,
            format,
        }
    }
}

impl Drop for FibSession<'_> {
    fn drop(&mut self) {
        self.device.busy.store(false, Ordering::Release);
    }
}
