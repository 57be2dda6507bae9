#![no_std]
#![no_main]

use lidar_lite::{
    consts::LIDAR_LITE_DEFAULT_I2C_ADDRESS,
    Config,
    LidarLite,
    Profile
};

use panic_halt as _; 
use cortex_m_rt::entry;

use core::{fmt::Write, cell::RefCell};

use embedded_hal::delay::DelayNs;

use stm32f4xx_hal::{
    gpio::{
        Pin, 
        gpioa, 
        gpiob,
        Alternate}, 
    pac::{USART2, Peripherals, CorePeripherals, TIM1}, 
    prelude::*, 
    serial::{Config as SerialConfig, Tx}, 
    timer::{Delay, SysDelay},
    rcc::{Rcc, Clocks}
};

// I2C related imports
use stm32f4xx_hal::{
    pac::I2C1,
    i2c::{I2c as StmI2c, I2c1, Mode}};
use embedded_hal_bus::i2c::RefCellDevice;    

const PROFILE: Profile = Profile::Balanced;

#[entry]
fn main() -> ! {
    let dp: Peripherals = Peripherals::take().unwrap();
    let cp: CorePeripherals = CorePeripherals::take().unwrap();
    let rcc: Rcc = dp.RCC.constrain();
    let clocks: Clocks = rcc.cfgr.use_hse(8.MHz()).sysclk(48.MHz()).freeze();
    let mut delay: SysDelay = cp.SYST.delay(&clocks);
    let tim: Delay<TIM1, 1_000_000> = dp.TIM1.delay_us(&clocks);

    let gpioa: gpioa::Parts = dp.GPIOA.split();
    let gpiob: gpiob::Parts = dp.GPIOB.split();
    
    let tx_pin: Pin<'A', 2, Alternate<7>> = gpioa.pa2.into_alternate();
     
    let mut tx: Tx<USART2> = dp.USART2.tx(
        tx_pin,
        SerialConfig::default()
        .baudrate(115200.bps())
        .wordlength_8()
        .parity_none(),
        &clocks).unwrap();

    let scl: Pin<'B', 8> = gpiob.pb8;
    let sda: Pin<'B', 9> = gpiob.pb9;
    
    let i2c: StmI2c<I2C1> = I2c1::new(
        dp.I2C1,
        (scl, sda),
        Mode::Standard{frequency:400.kHz()},
        &clocks);
        
    let i2c_bus: RefCell<StmI2c<I2C1>> = RefCell::new(i2c);
    let i2c = RefCellDevice::new(&i2c_bus);

    let config = Config::default().with_address(LIDAR_LITE_DEFAULT_I2C_ADDRESS);
    let mut lidar = LidarLite::new_i2c_with_config(i2c, tim, config);

    lidar.configure_profile(PROFILE).unwrap();

    writeln!(tx, "LIDAR-Lite single shot demo, profile {}\r", PROFILE.id()).unwrap();
    
    loop {
        let distance: u16 = lidar.measure().unwrap(); // Trigger, wait for idle, read
        let status = lidar.read_status().unwrap();
        writeln!(
            tx,
            "{:>5} cm  status {:#04x}{}\r",
            distance,
            status.raw(),
            if status.is_valid_measurement() { "" } else { " (invalid)" }
        ).unwrap();
        delay.delay_ms(100);
    }

}
