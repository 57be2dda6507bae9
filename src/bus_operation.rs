use crate::{Config, DelayNs, I2c, LidarLite, SevenBitAddress};

/// Byte transport to one LIDAR-Lite.
///
/// The error type must be classifiable as an I2C error so that a NACK can be
/// told apart from other bus failures.
pub trait BusOperation {
    type Error: embedded_hal::i2c::Error;

    /// One transaction: register byte followed by the payload.
    fn write(&mut self, wbuf: &[u8]) -> Result<(), Self::Error>;
    /// Pointer write then read with a repeated start. Returns how many bytes
    /// the device actually delivered into `rbuf`.
    fn write_read(&mut self, wbuf: &[u8], rbuf: &mut [u8]) -> Result<usize, Self::Error>;

    fn address(&self) -> SevenBitAddress;
    fn set_address(&mut self, address: SevenBitAddress);
}

pub struct LidarLiteI2C<P> {
    i2c: P,
    address: SevenBitAddress,
}

impl<P: I2c> LidarLiteI2C<P> {
    pub(crate) fn new(i2c: P, address: SevenBitAddress) -> Self {
        LidarLiteI2C { i2c, address }
    }
}

impl<P: I2c> BusOperation for LidarLiteI2C<P> {
    type Error = P::Error;

    #[inline]
    fn write(&mut self, wbuf: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(self.address, wbuf)?;

        Ok(())
    }

    // embedded-hal reads either fill the buffer or fail.
    #[inline]
    fn write_read(&mut self, wbuf: &[u8], rbuf: &mut [u8]) -> Result<usize, Self::Error> {
        self.i2c.write_read(self.address, wbuf, rbuf)?;

        Ok(rbuf.len())
    }

    fn address(&self) -> SevenBitAddress {
        self.address
    }

    fn set_address(&mut self, address: SevenBitAddress) {
        self.address = address;
    }
}

impl<P, T> LidarLite<LidarLiteI2C<P>, T>
    where
    P: I2c,
    T: DelayNs
{
    /// Driver at the factory address with the default settings.
    pub fn new_i2c(i2c: P, tim: T) -> Self {
        Self::new_i2c_with_config(i2c, tim, Config::default())
    }

    pub fn new_i2c_with_config(i2c: P, tim: T, config: Config) -> Self {
        LidarLite::new(LidarLiteI2C::new(i2c, config.address), tim, config)
    }

    /// Gives back the I2C peripheral and the timer.
    pub fn release_i2c(self) -> (P, T) {
        let (bus, tim) = self.release();
        (bus.i2c, tim)
    }
}
