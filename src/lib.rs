//! Driver for the Garmin LIDAR-Lite v3HP time-of-flight rangefinder.
//!
//! Single-shot flow: [`configure`](LidarLite::configure), then
//! [`trigger_measurement`](LidarLite::trigger_measurement), then
//! [`wait_until_ready`](LidarLite::wait_until_ready), then
//! [`read_distance`](LidarLite::read_distance). [`measure`](LidarLite::measure) chains the
//! last three.
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod log;

pub mod accessors;
pub mod bus_operation;
pub mod config;
pub mod consts;
pub mod profile;
pub mod status;
pub mod utils;

#[cfg(test)]
mod mock;

pub use bus_operation::*;
pub use config::*;
pub use profile::*;
pub use status::Status;

use consts::*;
use utils::*;

use embedded_hal::{
    i2c::{Error as _, ErrorKind, I2c, SevenBitAddress},
    delay::DelayNs
};

pub struct LidarLite<B: BusOperation, T: DelayNs> {
    pub(crate) bus: B,
    pub(crate) tim: T,
    pub(crate) config: Config,
    read_buffer: [u8; READ_BUFFER_SIZE],
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<B> {
    /// Bus failure other than a missing acknowledge.
    Bus(B),
    /// The sensor did not acknowledge its address or a data byte.
    Nack,
    /// The busy flag was still set after `poll_limit` status reads.
    BusyTimeout,
    /// The transport delivered fewer bytes than requested.
    ShortRead,
    InvalidParam,
}

impl<B: BusOperation, T: DelayNs> LidarLite<B, T> {
    pub fn new(mut bus: B, tim: T, config: Config) -> Self {
        bus.set_address(config.address);
        LidarLite {
            bus,
            tim,
            config,
            read_buffer: [0; READ_BUFFER_SIZE],
        }
    }

    pub fn release(self) -> (B, T) {
        (self.bus, self.tim)
    }

    /// Applies the fault policy to a condition that has already been logged.
    fn fault(&self, err: Error<B::Error>) -> Result<(), Error<B::Error>> {
        match self.config.policy {
            FaultPolicy::LogAndContinue => Ok(()),
            FaultPolicy::Propagate => Err(err),
        }
    }

    fn is_nack(err: &B::Error) -> bool {
        matches!(err.kind(), ErrorKind::NoAcknowledge(_))
    }

    /// Writes `data` starting at `reg` in a single transaction. The device
    /// auto-increments its register pointer for each byte after the first.
    ///
    /// A NACK is reported, followed by a short back-off. The write is never retried.
    pub fn write_register(&mut self, reg: u8, data: &[u8]) -> Result<(), Error<B::Error>> {
        let size = data.len();
        if size > WRITE_BUFFER_SIZE - 1 {
            return Err(Error::InvalidParam);
        }
        let mut wbuf: [u8; WRITE_BUFFER_SIZE] = [0; WRITE_BUFFER_SIZE];
        wbuf[0] = reg;
        wbuf[1..1 + size].copy_from_slice(data);

        match self.bus.write(&wbuf[..1 + size]) {
            Ok(()) => Ok(()),
            Err(e) if Self::is_nack(&e) => {
                diag!("> nack");
                self.delay_us(self.config.nack_delay_us);
                self.fault(Error::Nack)
            }
            Err(e) => Err(Error::Bus(e)),
        }
    }

    /// Reads `rbuf.len()` bytes starting at `reg`.
    ///
    /// `rbuf` is only written when the device delivered every requested byte.
    /// After a NACK or a short read it keeps its previous contents.
    pub fn read_register(&mut self, reg: u8, rbuf: &mut [u8]) -> Result<(), Error<B::Error>> {
        let size = rbuf.len();
        if size > READ_BUFFER_SIZE {
            return Err(Error::InvalidParam);
        }

        let available = match self.bus.write_read(&[reg], &mut self.read_buffer[..size]) {
            Ok(available) => available,
            Err(e) if Self::is_nack(&e) => {
                diag!("> nack");
                return self.fault(Error::Nack);
            }
            Err(e) => return Err(Error::Bus(e)),
        };

        if size <= available {
            rbuf.copy_from_slice(&self.read_buffer[..size]);
            Ok(())
        } else {
            diag!("> short read");
            self.fault(Error::ShortRead)
        }
    }

    /// Raw STATUS byte. Reads as busy if the device did not answer.
    pub fn busy_flag(&mut self) -> Result<u8, Error<B::Error>> {
        let mut status: [u8; 1] = [LIDAR_LITE_STATUS_BUSY];
        self.read_register(LIDAR_LITE_STATUS, &mut status)?;

        Ok(status[0])
    }

    pub fn is_busy(&mut self) -> Result<bool, Error<B::Error>> {
        Ok(self.busy_flag()? & LIDAR_LITE_STATUS_BUSY != 0)
    }

    /// Starts one range acquisition.
    pub fn trigger_measurement(&mut self) -> Result<(), Error<B::Error>> {
        self.write_register(LIDAR_LITE_ACQ_COMMAND, &[LIDAR_LITE_CMD_TAKE_RANGE])
    }

    /// Spins on the busy flag, at most `poll_limit` reads and no delay in between.
    pub fn wait_until_ready(&mut self) -> Result<(), Error<B::Error>> {
        for _ in 0..self.config.poll_limit {
            if !self.is_busy()? {
                return Ok(());
            }
        }

        diag!("> bailing out of wait_for_busy()");
        self.fault(Error::BusyTimeout)
    }

    /// Last measured distance in centimetres.
    pub fn read_distance(&mut self) -> Result<u16, Error<B::Error>> {
        let mut distance: [u8; 2] = [0; 2];
        self.read_register(LIDAR_LITE_FULL_DELAY_HIGH, &mut distance)?;

        Ok(from_be_pair(&distance))
    }

    pub fn delay_us(&mut self, us: u32) {
        self.tim.delay_us(us);
    }
}
