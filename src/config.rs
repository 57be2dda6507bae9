use embedded_hal::i2c::SevenBitAddress;

use crate::consts::*;

/// What the driver does when the bus or the sensor misbehaves.
///
/// The faults concerned are a NACK, a short read and the busy poll hitting
/// its bound. Bus errors other than NACK are always returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultPolicy {
    /// Emit a diagnostic line and carry on as if the operation succeeded.
    ///
    /// Diagnostic lines only leave the chip with the `defmt` feature. Without
    /// it the fault is swallowed silently.
    #[default]
    LogAndContinue,
    /// Emit a diagnostic line and return the matching [`Error`](crate::Error).
    Propagate,
}

/// Construction-time settings of a [`LidarLite`](crate::LidarLite) instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub address: SevenBitAddress,
    /// Maximum number of status reads in `wait_until_ready`.
    pub poll_limit: u16,
    pub policy: FaultPolicy,
    /// Pause after a NACKed write, in microseconds.
    pub nack_delay_us: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            address: LIDAR_LITE_DEFAULT_I2C_ADDRESS,
            poll_limit: LIDAR_LITE_POLL_LIMIT,
            policy: FaultPolicy::LogAndContinue,
            nack_delay_us: LIDAR_LITE_NACK_DELAY_US,
        }
    }
}

impl Config {
    pub fn with_address(mut self, address: SevenBitAddress) -> Self {
        self.address = address;
        self
    }

    pub fn with_poll_limit(mut self, poll_limit: u16) -> Self {
        self.poll_limit = poll_limit;
        self
    }

    pub fn with_policy(mut self, policy: FaultPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_nack_delay_us(mut self, nack_delay_us: u32) -> Self {
        self.nack_delay_us = nack_delay_us;
        self
    }
}
