use consts::*;
use utils::*;

use crate::{consts, utils, BusOperation, Config, DelayNs, Error, FaultPolicy, LidarLite, Profile, SevenBitAddress, Status};

impl<B: BusOperation, T: DelayNs> LidarLite<B, T> {

    /// This function selects one of the seven acquisition profiles by id.
    ///
    /// # Arguments
    ///
    /// * `profile_id` : 0 to 6. Any other value selects profile 0, the balanced default.
    pub fn configure(&mut self, profile_id: u8) -> Result<(), Error<B::Error>> {
        self.configure_profile(Profile::from_id(profile_id))
    }

    /// This function writes SIG_COUNT_VAL, ACQ_CONFIG_REG, REF_COUNT_VAL and
    /// THRESHOLD_BYPASS for `profile`, in that order.
    pub fn configure_profile(&mut self, profile: Profile) -> Result<(), Error<B::Error>> {
        let regs = profile.registers();
        self.write_register(LIDAR_LITE_SIG_COUNT_VAL, &[regs.sig_count_max])?;
        self.write_register(LIDAR_LITE_ACQ_CONFIG_REG, &[regs.acq_config])?;
        self.write_register(LIDAR_LITE_REF_COUNT_VAL, &[regs.ref_count_max])?;
        self.write_register(LIDAR_LITE_THRESHOLD_BYPASS, &[regs.threshold_bypass])?;

        Ok(())
    }

    /// This function reads and decodes the STATUS register.
    pub fn read_status(&mut self) -> Result<Status, Error<B::Error>> {
        Ok(Status::from(self.busy_flag()?))
    }

    /// Takes one range: trigger, wait for the busy flag to clear, read the distance.
    ///
    /// # Return
    ///
    /// `distance` : Distance in centimetres.
    pub fn measure(&mut self) -> Result<u16, Error<B::Error>> {
        self.trigger_measurement()?;
        self.wait_until_ready()?;
        self.read_distance()
    }

    /// This function reads the 16-bit serial number from UNIT_ID.
    pub fn unit_id(&mut self) -> Result<u16, Error<B::Error>> {
        let mut id: [u8; 2] = [0; 2];
        self.read_register(LIDAR_LITE_UNIT_ID_HIGH, &mut id)?;

        Ok(from_be_pair(&id))
    }

    /// This function moves the sensor to a secondary I2C address. Later
    /// transactions from this driver use the new address.
    ///
    /// The change is volatile. The sensor answers on 0x62 again after a power cycle.
    ///
    /// # Arguments
    ///
    /// * `i2c_address` : New 7-bit address, 0x08 to 0x77.
    /// * `disable_default` : Stop answering on the current address as well.
    ///
    /// Every step is checked whatever the fault policy. The driver only moves
    /// to the new address once the sensor acknowledged the unlock sequence.
    pub fn set_i2c_address(&mut self, i2c_address: SevenBitAddress, disable_default: bool) -> Result<(), Error<B::Error>> {
        if !(LIDAR_LITE_MIN_I2C_ADDRESS..=LIDAR_LITE_MAX_I2C_ADDRESS).contains(&i2c_address) {
            return Err(Error::InvalidParam);
        }

        /* A swallowed fault here would leave the driver on an address the sensor never took */
        let policy = self.config.policy;
        self.config.policy = FaultPolicy::Propagate;
        let result = self.move_to_address(i2c_address, disable_default);
        self.config.policy = policy;

        result
    }

    fn move_to_address(&mut self, i2c_address: SevenBitAddress, disable_default: bool) -> Result<(), Error<B::Error>> {
        /* The serial number must be echoed back to unlock the address change */
        let unit_id = self.unit_id()?;
        self.write_register(LIDAR_LITE_I2C_ID_HIGH, &to_be_pair(unit_id))?;
        self.write_register(LIDAR_LITE_I2C_SEC_ADDR, &[i2c_address])?;
        self.write_register(LIDAR_LITE_I2C_CONFIG, &[LIDAR_LITE_I2C_CONFIG_USE_SEC_ADDR])?;

        self.bus.set_address(i2c_address);
        self.config.address = i2c_address;

        if disable_default {
            self.write_register(LIDAR_LITE_I2C_CONFIG, &[LIDAR_LITE_I2C_CONFIG_DISABLE_DEFAULT])?;
        }

        Ok(())
    }

    pub fn address(&self) -> SevenBitAddress {
        self.bus.address()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
