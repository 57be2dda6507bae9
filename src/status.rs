use bitfield::bitfield;

bitfield! {
    /// Decoded STATUS register (0x01).
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct Status(u8);
    impl Debug;
    /// A measurement is in progress.
    pub busy, _: 0;
    /// The reference correlation record overflowed.
    pub reference_overflow, _: 1;
    /// The signal correlation record overflowed.
    pub signal_overflow, _: 2;
    /// Peak not detected in the signal correlation record.
    pub invalid_signal, _: 3;
    /// A secondary return was detected.
    pub secondary_return, _: 4;
    /// Reference and receiver bias are operational.
    pub health_ok, _: 5;
    /// A system error was detected during the measurement.
    pub process_error, _: 6;
}

impl Status {
    pub fn raw(&self) -> u8 {
        self.0
    }

    /// `true` when the last measurement can be trusted.
    pub fn is_valid_measurement(&self) -> bool {
        !self.busy() && self.health_ok() && !self.invalid_signal() && !self.process_error()
    }
}

impl From<u8> for Status {
    fn from(raw: u8) -> Self {
        Status(raw)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Status {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Status({=u8:#04x})", self.0)
    }
}
