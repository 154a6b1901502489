// mfrc522-gate/src/types.rs

use std::convert::TryFrom;
use std::fmt;

use derive_more::{From, Into};

use crate::Error;
use crate::constants::*;

/// MFRC522 register map (datasheet section 9.2). Addresses are 6 bits wide.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    // Page 0: command and status
    Command = 0x01,
    ComIEn = 0x02,
    DivIEn = 0x03,
    ComIrq = 0x04,
    DivIrq = 0x05,
    Error = 0x06,
    Status1 = 0x07,
    Status2 = 0x08,
    FifoData = 0x09,
    FifoLevel = 0x0A,
    WaterLevel = 0x0B,
    Control = 0x0C,
    BitFraming = 0x0D,
    Coll = 0x0E,
    // Page 1: command
    Mode = 0x11,
    TxMode = 0x12,
    RxMode = 0x13,
    TxControl = 0x14,
    TxAsk = 0x15,
    TxSel = 0x16,
    RxSel = 0x17,
    RxThreshold = 0x18,
    Demod = 0x19,
    MfTx = 0x1C,
    MfRx = 0x1D,
    SerialSpeed = 0x1F,
    // Page 2: configuration
    CrcResultH = 0x21,
    CrcResultL = 0x22,
    ModWidth = 0x24,
    RfCfg = 0x26,
    GsN = 0x27,
    CwGsP = 0x28,
    ModGsP = 0x29,
    TMode = 0x2A,
    TPrescaler = 0x2B,
    TReloadH = 0x2C,
    TReloadL = 0x2D,
    TCounterValueH = 0x2E,
    TCounterValueL = 0x2F,
    // Page 3: test
    TestSel1 = 0x31,
    TestSel2 = 0x32,
    TestPinEn = 0x33,
    TestPinValue = 0x34,
    TestBus = 0x35,
    AutoTest = 0x36,
    Version = 0x37,
    AnalogTest = 0x38,
    TestDac1 = 0x39,
    TestDac2 = 0x3A,
    TestAdc = 0x3B,
}

impl Register {
    /// Every addressable register, in address order.
    pub const ALL: [Register; 50] = [
        Register::Command,
        Register::ComIEn,
        Register::DivIEn,
        Register::ComIrq,
        Register::DivIrq,
        Register::Error,
        Register::Status1,
        Register::Status2,
        Register::FifoData,
        Register::FifoLevel,
        Register::WaterLevel,
        Register::Control,
        Register::BitFraming,
        Register::Coll,
        Register::Mode,
        Register::TxMode,
        Register::RxMode,
        Register::TxControl,
        Register::TxAsk,
        Register::TxSel,
        Register::RxSel,
        Register::RxThreshold,
        Register::Demod,
        Register::MfTx,
        Register::MfRx,
        Register::SerialSpeed,
        Register::CrcResultH,
        Register::CrcResultL,
        Register::ModWidth,
        Register::RfCfg,
        Register::GsN,
        Register::CwGsP,
        Register::ModGsP,
        Register::TMode,
        Register::TPrescaler,
        Register::TReloadH,
        Register::TReloadL,
        Register::TCounterValueH,
        Register::TCounterValueL,
        Register::TestSel1,
        Register::TestSel2,
        Register::TestPinEn,
        Register::TestPinValue,
        Register::TestBus,
        Register::AutoTest,
        Register::Version,
        Register::AnalogTest,
        Register::TestDac1,
        Register::TestDac2,
        Register::TestAdc,
    ];

    pub const fn address(self) -> u8 {
        self as u8
    }

    /// Look up a register by its 6-bit address.
    pub fn from_address(address: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.address() == address)
    }

    /// Registers whose reads or writes trigger chip behaviour beyond
    /// plain storage.
    pub fn has_side_effects(self) -> bool {
        matches!(
            self,
            Register::Command
                | Register::ComIrq
                | Register::DivIrq
                | Register::Error
                | Register::Status1
                | Register::Status2
                | Register::FifoData
                | Register::FifoLevel
                | Register::Control
                | Register::BitFraming
                | Register::Coll
                | Register::CrcResultH
                | Register::CrcResultL
                | Register::TCounterValueH
                | Register::TCounterValueL
                | Register::TestBus
                | Register::Version
                | Register::TestAdc
        )
    }
}

/// PCD commands written to CommandReg (datasheet section 10.3)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Idle = 0x00,
    Mem = 0x01,
    GenerateRandomId = 0x02,
    CalcCrc = 0x03,
    Transmit = 0x04,
    NoCmdChange = 0x07,
    Receive = 0x08,
    Transceive = 0x0C,
    MfAuthent = 0x0E,
    SoftReset = 0x0F,
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> u8 {
        cmd as u8
    }
}

/// Snapshot of ComIrqReg
#[derive(Debug, Clone, Copy, PartialEq, Eq, From, Into)]
pub struct IrqFlags(u8);

impl IrqFlags {
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// RxIRq or IdleIRq: the transceive finished
    pub fn is_complete(&self) -> bool {
        self.0 & (IRQ_RX | IRQ_IDLE) != 0
    }

    pub fn timer_expired(&self) -> bool {
        self.0 & IRQ_TIMER != 0
    }
}

/// Snapshot of ErrorReg
#[derive(Debug, Clone, Copy, PartialEq, Eq, From, Into)]
pub struct ErrorFlags(u8);

impl ErrorFlags {
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Bits of this snapshot that fall inside `mask`
    pub fn masked(&self, mask: u8) -> Option<u8> {
        match self.0 & mask {
            0 => None,
            bits => Some(bits),
        }
    }

    pub fn collision(&self) -> bool {
        self.0 & ERR_COLL != 0
    }
}

/// ATQA - Answer To Request, type A (2 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
pub struct Atqa([u8; 2]);

impl Atqa {
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// UID size bits (b8..b7 of the first byte): 0 single, 1 double, 2 triple
    pub fn uid_size_code(&self) -> u8 {
        (self.0[0] >> 6) & 0x03
    }
}

/// UID - up to 10 bytes stored inline
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid {
    bytes: [u8; MAX_UID_LEN],
    len: u8,
}

impl Uid {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Upper-case hex with ':' separators, e.g. `A2:FC:4F:05`
    pub fn to_colon_hex(&self) -> String {
        crate::utils::bytes_to_hex_colon(self.as_bytes())
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.is_empty() || bytes.len() > MAX_UID_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_UID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; MAX_UID_LEN];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len() as u8,
        })
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_colon_hex())
    }
}

impl fmt::Debug for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uid({})", self.to_colon_hex())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_colon_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_addresses_fit_six_bits() {
        for reg in Register::ALL {
            assert!(reg.address() < 0x40, "{:?} out of range", reg);
            assert_eq!(Register::from_address(reg.address()), Some(reg));
        }
    }

    #[test]
    fn reserved_addresses_are_unknown() {
        assert_eq!(Register::from_address(0x00), None);
        assert_eq!(Register::from_address(0x0F), None);
        assert_eq!(Register::from_address(0x3F), None);
    }

    #[test]
    fn irq_flags_predicates() {
        assert!(IrqFlags::from(0x20).is_complete());
        assert!(IrqFlags::from(0x10).is_complete());
        assert!(!IrqFlags::from(0x01).is_complete());
        assert!(IrqFlags::from(0x01).timer_expired());
    }

    #[test]
    fn error_flags_masking() {
        let flags = ErrorFlags::from(ERR_COLL);
        assert_eq!(flags.masked(PRESENCE_ERROR_MASK), None);
        assert_eq!(flags.masked(ANTICOLLISION_ERROR_MASK), Some(ERR_COLL));
        assert!(flags.collision());
    }

    #[test]
    fn uid_try_from_ok() {
        let uid = Uid::try_from(&[0xA2, 0xFC, 0x4F, 0x05][..]).unwrap();
        assert_eq!(uid.len(), 4);
        assert_eq!(uid.as_bytes(), &[0xA2, 0xFC, 0x4F, 0x05]);
        assert_eq!(uid.to_string(), "A2:FC:4F:05");
        assert_eq!(uid.to_hex(), "a2fc4f05");
    }

    #[test]
    fn uid_try_from_err() {
        assert!(Uid::try_from(&[][..]).is_err());
        assert!(Uid::try_from(&[0u8; 11][..]).is_err());
    }

    #[test]
    fn atqa_uid_size() {
        assert_eq!(Atqa::from_bytes([0x04, 0x00]).uid_size_code(), 0);
        assert_eq!(Atqa::from_bytes([0x44, 0x00]).uid_size_code(), 1);
    }
}
