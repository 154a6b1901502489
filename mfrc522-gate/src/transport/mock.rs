// mfrc522-gate/src/transport/mock.rs

//! Simulated MFRC522 for unit tests.
//!
//! `MockChip` holds the shared chip state. The bus and line handles it hands
//! out all point at that state, so a test can give the handles to a
//! `Device` and keep the `MockChip` to inspect what happened.
//!
//! Modelled behaviour: a 64-entry register file, the FIFO, ComIrqReg
//! set/clear semantics, the PowerDown bit after a soft reset, and a scripted
//! card answering REQA and cascade level 1 anticollision once a Transceive is
//! started through BitFramingReg.StartSend. Configuration registers keep
//! their contents across a soft reset.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::constants::*;
use crate::transport::spi::SpiTransport;
use crate::transport::traits::{Bus, Delay, OutputLine};
use crate::types::{Command, Register};
use crate::{Error, Result};

/// Value reported by VersionReg (MFRC522 v2.0)
pub const MOCK_VERSION: u8 = 0x92;

/// How the simulated card (or empty field) reacts to one transmitted frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardReply {
    /// ComIrqReg bits raised when the reply lands
    pub irq: u8,
    /// ErrorReg value after the reply
    pub error: u8,
    /// Bytes placed in the FIFO
    pub fifo: Vec<u8>,
    /// Force FIFOLevelReg to report this instead of the real length
    pub fifo_level: Option<u8>,
    /// Number of ComIrqReg reads before the reply lands
    pub after_reads: usize,
}

impl CardReply {
    /// A well-formed answer: RxIRq + IdleIRq with `bytes` in the FIFO.
    pub fn frame(bytes: &[u8]) -> Self {
        Self {
            irq: IRQ_RX | IRQ_IDLE,
            error: 0,
            fifo: bytes.to_vec(),
            fifo_level: None,
            after_reads: 0,
        }
    }

    /// Nobody answered before the reader's countdown timer ran out.
    pub fn timer_expired() -> Self {
        Self {
            irq: IRQ_TIMER,
            error: 0,
            fifo: Vec::new(),
            fifo_level: None,
            after_reads: 0,
        }
    }

    /// The interrupt register never reports anything.
    pub fn silent() -> Self {
        Self {
            irq: 0,
            error: 0,
            fifo: Vec::new(),
            fifo_level: None,
            after_reads: 0,
        }
    }

    pub fn with_error(mut self, error: u8) -> Self {
        self.error = error;
        self
    }

    pub fn with_fifo_level(mut self, level: u8) -> Self {
        self.fifo_level = Some(level);
        self
    }

    pub fn after_reads(mut self, reads: usize) -> Self {
        self.after_reads = reads;
        self
    }
}

/// Scripted ISO 14443-A card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCard {
    pub request: CardReply,
    pub anticollision: CardReply,
}

impl MockCard {
    /// Card answering REQA with `atqa` and anticollision with `uid` followed
    /// by its correct BCC.
    pub fn new(atqa: [u8; 2], uid: &[u8]) -> Self {
        let mut response = uid.to_vec();
        response.push(crate::protocol::bcc(uid));
        Self::with_raw_response(atqa, &response)
    }

    /// Card returning `response` verbatim to anticollision.
    pub fn with_raw_response(atqa: [u8; 2], response: &[u8]) -> Self {
        Self {
            request: CardReply::frame(&atqa),
            anticollision: CardReply::frame(response),
        }
    }
}

#[derive(Debug)]
struct ChipState {
    regs: [u8; 64],
    fifo: VecDeque<u8>,
    card: Option<MockCard>,
    pending: Option<CardReply>,
    irq_reads: usize,
    forced_level: Option<u8>,
    power_down_reads: usize,
    power_down_after_reset: usize,
    fail_exchanges: usize,
    cs_low: bool,
    cs_edges: usize,
    reset_high: bool,
    exchanges: Vec<[u8; 2]>,
    writes: Vec<(u8, u8)>,
    transmitted: Vec<(Vec<u8>, u8)>,
    unselected_exchanges: usize,
}

impl Default for ChipState {
    fn default() -> Self {
        let mut regs = [0u8; 64];
        regs[Register::Command.address() as usize] = 0x20;
        regs[Register::TxControl.address() as usize] = 0x80;
        regs[Register::Version.address() as usize] = MOCK_VERSION;
        Self {
            regs,
            fifo: VecDeque::new(),
            card: None,
            pending: None,
            irq_reads: 0,
            forced_level: None,
            power_down_reads: 0,
            power_down_after_reset: 1,
            fail_exchanges: 0,
            cs_low: false,
            cs_edges: 0,
            reset_high: false,
            exchanges: Vec::new(),
            writes: Vec::new(),
            transmitted: Vec::new(),
            unselected_exchanges: 0,
        }
    }
}

impl ChipState {
    fn write(&mut self, addr: u8, value: u8) {
        self.writes.push((addr, value));
        match Register::from_address(addr) {
            Some(Register::Command) => self.command(value),
            Some(Register::ComIrq) => {
                let bits = value & !IRQ_SET1;
                let irq = &mut self.regs[addr as usize];
                if value & IRQ_SET1 != 0 {
                    *irq |= bits;
                } else {
                    *irq &= !bits;
                }
            }
            Some(Register::FifoLevel) => {
                if value & FIFO_FLUSH != 0 {
                    self.fifo.clear();
                    self.forced_level = None;
                }
            }
            Some(Register::FifoData) => {
                if self.fifo.len() < FIFO_SIZE {
                    self.fifo.push_back(value);
                }
            }
            Some(Register::BitFraming) => {
                self.regs[addr as usize] = value;
                let transceiving =
                    self.regs[Register::Command.address() as usize] & 0x0F == Command::Transceive as u8;
                if value & BIT_FRAMING_START_SEND != 0 && transceiving {
                    self.start_transceive(value & 0x07);
                }
            }
            _ => self.regs[addr as usize] = value,
        }
    }

    fn read(&mut self, addr: u8) -> u8 {
        match Register::from_address(addr) {
            Some(Register::Command) => {
                let mut value = self.regs[addr as usize];
                if self.power_down_reads > 0 {
                    self.power_down_reads -= 1;
                    value |= COMMAND_POWER_DOWN;
                }
                value
            }
            Some(Register::ComIrq) => {
                if let Some(reply) = self.pending.take() {
                    if self.irq_reads >= reply.after_reads {
                        self.land(reply);
                    } else {
                        self.pending = Some(reply);
                    }
                }
                self.irq_reads += 1;
                self.regs[addr as usize]
            }
            Some(Register::FifoData) => self.fifo.pop_front().unwrap_or(0),
            Some(Register::FifoLevel) => self
                .forced_level
                .unwrap_or(self.fifo.len().min(FIFO_SIZE) as u8),
            _ => self.regs[addr as usize],
        }
    }

    fn command(&mut self, value: u8) {
        let cmd = value & 0x0F;
        let reg = &mut self.regs[Register::Command.address() as usize];
        *reg = (*reg & 0xF0) | cmd;

        if cmd == Command::SoftReset as u8 {
            self.fifo.clear();
            self.pending = None;
            self.power_down_reads = self.power_down_after_reset;
            *reg &= 0xF0;
        } else if cmd == Command::Idle as u8 {
            self.pending = None;
        }
    }

    fn start_transceive(&mut self, tx_last_bits: u8) {
        let frame: Vec<u8> = self.fifo.drain(..).collect();
        self.transmitted.push((frame.clone(), tx_last_bits));
        self.forced_level = None;

        let reply = match (&self.card, frame.as_slice()) {
            (Some(card), [PICC_REQALL]) => card.request.clone(),
            (Some(card), [PICC_SEL_CL1, ANTICOLLISION_NVB]) => card.anticollision.clone(),
            _ => CardReply::timer_expired(),
        };
        self.irq_reads = 0;
        self.pending = Some(reply);
    }

    fn land(&mut self, reply: CardReply) {
        self.regs[Register::ComIrq.address() as usize] |= reply.irq;
        self.regs[Register::Error.address() as usize] = reply.error;
        self.fifo.extend(reply.fifo.iter().copied());
        // A forced level sticks until the next flush or transceive.
        self.forced_level = reply.fifo_level;
    }
}

/// Handle to a simulated reader. Cloning shares the same chip.
#[derive(Debug, Clone, Default)]
pub struct MockChip {
    state: Rc<RefCell<ChipState>>,
}

impl MockChip {
    /// Reader with an empty RF field.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_card(card: MockCard) -> Self {
        let chip = Self::new();
        chip.set_card(Some(card));
        chip
    }

    /// Place a card in (or remove it from) the field.
    pub fn set_card(&self, card: Option<MockCard>) {
        self.state.borrow_mut().card = card;
    }

    pub fn bus(&self) -> MockBus {
        MockBus {
            state: Rc::clone(&self.state),
        }
    }

    pub fn chip_select(&self) -> MockLine {
        MockLine {
            state: Rc::clone(&self.state),
            role: LineRole::ChipSelect,
        }
    }

    pub fn reset_line(&self) -> MockLine {
        MockLine {
            state: Rc::clone(&self.state),
            role: LineRole::Reset,
        }
    }

    /// SPI register transport wired to this chip.
    pub fn transport(&self) -> SpiTransport<MockBus, MockLine> {
        SpiTransport::new(self.bus(), self.chip_select())
    }

    /// Peek a register without triggering read side effects.
    pub fn register(&self, reg: Register) -> u8 {
        self.state.borrow().regs[reg.address() as usize]
    }

    /// Poke a register without triggering write side effects.
    pub fn set_register(&self, reg: Register, value: u8) {
        self.state.borrow_mut().regs[reg.address() as usize] = value;
    }

    /// Values written to `reg`, oldest first.
    pub fn writes_to(&self, reg: Register) -> Vec<u8> {
        self.state
            .borrow()
            .writes
            .iter()
            .filter(|(addr, _)| *addr == reg.address())
            .map(|(_, value)| *value)
            .collect()
    }

    /// Every register write as (register, value), oldest first.
    pub fn writes(&self) -> Vec<(Register, u8)> {
        self.state
            .borrow()
            .writes
            .iter()
            .filter_map(|(addr, value)| Register::from_address(*addr).map(|r| (r, *value)))
            .collect()
    }

    pub fn clear_log(&self) {
        let mut s = self.state.borrow_mut();
        s.writes.clear();
        s.exchanges.clear();
        s.transmitted.clear();
    }

    /// Raw two-byte frames clocked out on the bus.
    pub fn exchanges(&self) -> Vec<[u8; 2]> {
        self.state.borrow().exchanges.clone()
    }

    /// Frames sent to the card with the TxLastBits value in effect.
    pub fn transmitted(&self) -> Vec<(Vec<u8>, u8)> {
        self.state.borrow().transmitted.clone()
    }

    /// How many CommandReg reads report PowerDown after each soft reset.
    pub fn set_power_down_reads(&self, reads: usize) {
        self.state.borrow_mut().power_down_after_reset = reads;
    }

    /// Make the next `n` bus exchanges fail.
    pub fn fail_next_exchanges(&self, n: usize) {
        self.state.borrow_mut().fail_exchanges = n;
    }

    pub fn chip_selected(&self) -> bool {
        self.state.borrow().cs_low
    }

    pub fn chip_select_edges(&self) -> usize {
        self.state.borrow().cs_edges
    }

    pub fn unselected_exchanges(&self) -> usize {
        self.state.borrow().unselected_exchanges
    }

    pub fn reset_released(&self) -> bool {
        self.state.borrow().reset_high
    }
}

/// Bus half of a `MockChip`.
#[derive(Debug, Clone)]
pub struct MockBus {
    state: Rc<RefCell<ChipState>>,
}

impl Bus for MockBus {
    fn exchange(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<()> {
        let mut s = self.state.borrow_mut();
        if s.fail_exchanges > 0 {
            s.fail_exchanges -= 1;
            return Err(Error::TransportFault("simulated bus failure".into()));
        }
        if tx.len() != 2 || rx.len() != 2 {
            return Err(Error::TransportFault(format!(
                "expected a two byte exchange, got {}",
                tx.len()
            )));
        }
        if !s.cs_low {
            s.unselected_exchanges += 1;
        }
        s.exchanges.push([tx[0], tx[1]]);

        let addr = (tx[0] >> 1) & 0x3F;
        rx[0] = 0;
        if tx[0] & 0x80 != 0 {
            rx[1] = s.read(addr);
        } else {
            s.write(addr, tx[1]);
            rx[1] = 0;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineRole {
    ChipSelect,
    Reset,
}

/// Chip-select or reset line of a `MockChip`.
#[derive(Debug, Clone)]
pub struct MockLine {
    state: Rc<RefCell<ChipState>>,
    role: LineRole,
}

impl MockLine {
    fn drive(&mut self, high: bool) {
        let mut s = self.state.borrow_mut();
        match self.role {
            LineRole::ChipSelect => {
                s.cs_low = !high;
                s.cs_edges += 1;
            }
            LineRole::Reset => s.reset_high = high,
        }
    }
}

impl OutputLine for MockLine {
    fn set_high(&mut self) -> Result<()> {
        self.drive(true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.drive(false);
        Ok(())
    }
}

/// Delay that only accumulates simulated time. Clones share the clock.
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    elapsed: Rc<Cell<Duration>>,
    calls: Rc<Cell<usize>>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn reset(&self) {
        self.elapsed.set(Duration::ZERO);
        self.calls.set(0);
    }
}

impl Delay for MockDelay {
    fn delay(&mut self, duration: Duration) {
        self.elapsed.set(self.elapsed.get() + duration);
        self.calls.set(self.calls.get() + 1);
    }
}
