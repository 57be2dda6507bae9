//! Scripted transport and timer for unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::string::String;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, SevenBitAddress};

use crate::BusOperation;

std::thread_local! {
    static DIAG_LINES: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

pub fn record_diag(line: String) {
    DIAG_LINES.with(|lines| lines.borrow_mut().push(line));
}

/// Drains the diagnostic lines emitted on this thread so far.
pub fn take_diag() -> Vec<String> {
    DIAG_LINES.with(|lines| lines.borrow_mut().drain(..).collect())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Write { address: SevenBitAddress, data: Vec<u8> },
    WriteRead { address: SevenBitAddress, reg: u8, len: usize },
}

impl Transaction {
    pub fn write(address: SevenBitAddress, data: &[u8]) -> Self {
        Transaction::Write { address, data: data.to_vec() }
    }

    pub fn write_read(address: SevenBitAddress, reg: u8, len: usize) -> Self {
        Transaction::WriteRead { address, reg, len }
    }
}

enum Reply {
    Bytes(Vec<u8>),
    Fail(ErrorKind),
}

/// Register file with an auto-incrementing pointer, like the device.
///
/// Reads consume scripted replies for their register first and fall back to
/// the register file. Writes consume scripted failures first and otherwise
/// land in the register file.
pub struct MockBus {
    address: SevenBitAddress,
    registers: [u8; 256],
    replies: HashMap<u8, VecDeque<Reply>>,
    write_failures: VecDeque<ErrorKind>,
    pub transactions: Vec<Transaction>,
}

impl MockBus {
    pub fn new() -> Self {
        MockBus {
            address: 0,
            registers: [0; 256],
            replies: HashMap::new(),
            write_failures: VecDeque::new(),
            transactions: Vec::new(),
        }
    }

    pub fn set_register(&mut self, reg: u8, value: u8) {
        self.registers[reg as usize] = value;
    }

    pub fn register(&self, reg: u8) -> u8 {
        self.registers[reg as usize]
    }

    /// Next read of `reg` delivers exactly `bytes`, possibly fewer than asked for.
    pub fn reply(&mut self, reg: u8, bytes: &[u8]) {
        self.replies.entry(reg).or_default().push_back(Reply::Bytes(bytes.to_vec()));
    }

    pub fn fail_read(&mut self, reg: u8, kind: ErrorKind) {
        self.replies.entry(reg).or_default().push_back(Reply::Fail(kind));
    }

    /// The next `count` reads of `reg` report the busy bit.
    pub fn busy_for(&mut self, reg: u8, count: usize) {
        for _ in 0..count {
            self.reply(reg, &[0x01]);
        }
    }

    pub fn fail_next_write(&mut self, kind: ErrorKind) {
        self.write_failures.push_back(kind);
    }

    pub fn writes(&self) -> Vec<&[u8]> {
        self.transactions
            .iter()
            .filter_map(|t| match t {
                Transaction::Write { data, .. } => Some(data.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn reads_of(&self, reg: u8) -> usize {
        self.transactions
            .iter()
            .filter(|t| matches!(t, Transaction::WriteRead { reg: r, .. } if *r == reg))
            .count()
    }
}

impl BusOperation for MockBus {
    type Error = ErrorKind;

    fn write(&mut self, wbuf: &[u8]) -> Result<(), Self::Error> {
        self.transactions.push(Transaction::write(self.address, wbuf));
        if let Some(kind) = self.write_failures.pop_front() {
            return Err(kind);
        }
        let reg = wbuf[0] as usize;
        for (i, byte) in wbuf[1..].iter().enumerate() {
            self.registers[(reg + i) & 0xff] = *byte;
        }
        Ok(())
    }

    fn write_read(&mut self, wbuf: &[u8], rbuf: &mut [u8]) -> Result<usize, Self::Error> {
        let reg = wbuf[0];
        self.transactions.push(Transaction::write_read(self.address, reg, rbuf.len()));

        match self.replies.get_mut(&reg).and_then(|q| q.pop_front()) {
            Some(Reply::Fail(kind)) => Err(kind),
            Some(Reply::Bytes(bytes)) => {
                let delivered = bytes.len().min(rbuf.len());
                rbuf[..delivered].copy_from_slice(&bytes[..delivered]);
                Ok(delivered)
            }
            None => {
                for (i, byte) in rbuf.iter_mut().enumerate() {
                    *byte = self.registers[(reg as usize + i) & 0xff];
                }
                Ok(rbuf.len())
            }
        }
    }

    fn address(&self) -> SevenBitAddress {
        self.address
    }

    fn set_address(&mut self, address: SevenBitAddress) {
        self.address = address;
    }
}

/// Records requested delays without sleeping.
#[derive(Default)]
pub struct MockDelay {
    pub total_ns: u64,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}
