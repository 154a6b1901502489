#[path = "../common/mod.rs"]
mod common;

use mfrc522_gate::transport::mock::MockChip;
use mfrc522_gate::transport::RegisterTransport;
use mfrc522_gate::types::Register;
use proptest::prelude::*;

#[test]
fn plain_registers_round_trip_through_spi_framing() {
    let chip = MockChip::new();
    let mut transport = chip.transport();
    transport.configure().unwrap();

    for (i, reg) in Register::ALL
        .iter()
        .copied()
        .filter(|r| !r.has_side_effects())
        .enumerate()
    {
        let value = (i as u8).wrapping_mul(37) ^ 0x5A;
        transport.write(reg, value).unwrap();
        assert_eq!(transport.read(reg).unwrap(), value, "{:?}", reg);
    }
}

#[test]
fn each_access_is_one_two_byte_exchange() {
    let chip = MockChip::new();
    let mut transport = chip.transport();
    transport.configure().unwrap();
    let edges_before = chip.chip_select_edges();

    transport.write(Register::ModWidth, 0x26).unwrap();
    transport.read(Register::ModWidth).unwrap();

    assert_eq!(chip.exchanges(), vec![[0x48, 0x26], [0xC8, 0x00]]);
    assert_eq!(chip.chip_select_edges() - edges_before, 4);
    assert_eq!(chip.unselected_exchanges(), 0);
}

#[test]
fn set_bits_keeps_other_bits() {
    let chip = MockChip::new();
    let mut transport = chip.transport();

    transport.write(Register::TxControl, 0x80).unwrap();
    transport.set_bits(Register::TxControl, 0x03).unwrap();
    assert_eq!(chip.register(Register::TxControl), 0x83);
    transport.set_bits(Register::TxControl, 0x01).unwrap();
    assert_eq!(chip.register(Register::TxControl), 0x83);
}

proptest! {
    #[test]
    fn any_value_survives_write_read(idx in 0usize..50, value in any::<u8>()) {
        let reg = Register::ALL[idx];
        prop_assume!(!reg.has_side_effects());
        let chip = MockChip::new();
        let mut transport = chip.transport();
        transport.write(reg, value).unwrap();
        prop_assert_eq!(transport.read(reg).unwrap(), value);
    }
}
