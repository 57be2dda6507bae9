use embedded_hal::i2c::SevenBitAddress;

pub const LIDAR_LITE_DEFAULT_I2C_ADDRESS: SevenBitAddress = 0x62;

/* Register map (LIDAR-Lite v3HP) */
pub const LIDAR_LITE_ACQ_COMMAND: u8 = 0x00;
pub const LIDAR_LITE_STATUS: u8 = 0x01;
pub const LIDAR_LITE_SIG_COUNT_VAL: u8 = 0x02;
pub const LIDAR_LITE_ACQ_CONFIG_REG: u8 = 0x04;
pub const LIDAR_LITE_FULL_DELAY_HIGH: u8 = 0x0f;
pub const LIDAR_LITE_FULL_DELAY_LOW: u8 = 0x10;
pub const LIDAR_LITE_REF_COUNT_VAL: u8 = 0x12;
pub const LIDAR_LITE_UNIT_ID_HIGH: u8 = 0x16;
pub const LIDAR_LITE_UNIT_ID_LOW: u8 = 0x17;
pub const LIDAR_LITE_I2C_ID_HIGH: u8 = 0x18;
pub const LIDAR_LITE_I2C_ID_LOW: u8 = 0x19;
pub const LIDAR_LITE_I2C_SEC_ADDR: u8 = 0x1a;
pub const LIDAR_LITE_THRESHOLD_BYPASS: u8 = 0x1c;
pub const LIDAR_LITE_I2C_CONFIG: u8 = 0x1e;

/* ACQ_COMMAND values */
pub const LIDAR_LITE_CMD_TAKE_RANGE: u8 = 0x01;

/* STATUS bits */
pub const LIDAR_LITE_STATUS_BUSY: u8 = 0x01;

/* I2C_CONFIG bits */
pub const LIDAR_LITE_I2C_CONFIG_USE_SEC_ADDR: u8 = 0x00;
pub const LIDAR_LITE_I2C_CONFIG_DISABLE_DEFAULT: u8 = 1 << 3;

/* Polling and back-off */
pub const LIDAR_LITE_POLL_LIMIT: u16 = 10_000;
pub const LIDAR_LITE_NACK_DELAY_US: u32 = 100;

/* Valid 7-bit range, reserved addresses excluded */
pub const LIDAR_LITE_MIN_I2C_ADDRESS: SevenBitAddress = 0x08;
pub const LIDAR_LITE_MAX_I2C_ADDRESS: SevenBitAddress = 0x77;

/* Scratch sizes: register byte + payload for writes, payload for reads */
pub const WRITE_BUFFER_SIZE: usize = 17;
pub const READ_BUFFER_SIZE: usize = 16;
