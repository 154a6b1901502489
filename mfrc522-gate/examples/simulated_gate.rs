//! Run the access loop against the simulated reader.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p mfrc522-gate --example simulated_gate

use mfrc522_gate::prelude::*;
use mfrc522_gate::transport::mock::{MockCard, MockChip, MockDelay};

/// Prints the angle instead of moving a servo.
struct ConsoleGate(ServoConfig);

impl GateActuator for ConsoleGate {
    fn set_angle(&mut self, degrees: f32) -> Result<()> {
        let pulse = self.0.pulse_width_us(degrees);
        println!(
            "gate -> {:>5.1} deg ({} us, duty {})",
            degrees,
            pulse,
            self.0.duty_for_pulse(pulse)
        );
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let chip = MockChip::new();
    let reader = Device::over_spi(chip.bus(), chip.chip_select(), chip.reset_line(), MockDelay::new())
        .initialize()?;
    println!("reader version: {:#04x}", chip.register(Register::Version));

    let allow = AllowList::from_hex(["A2:FC:4F:05"])?;
    let mut gate = AccessPoint::new(
        reader,
        allow,
        ConsoleGate(ServoConfig::default()),
        MockDelay::new(),
        AccessConfig::default(),
    );

    let visitors: [Option<&[u8]>; 4] = [
        None,
        Some(&[0xA2, 0xFC, 0x4F, 0x05][..]),
        Some(&[0xDE, 0xAD, 0xBE, 0xEF][..]),
        None,
    ];
    for visitor in visitors {
        chip.set_card(visitor.map(|uid| MockCard::new([0x04, 0x00], uid)));
        match gate.poll_once()? {
            CycleOutcome::NoCard => println!("no card"),
            CycleOutcome::Granted(id) => println!("granted {}", id),
            CycleOutcome::Denied(id) => println!("denied {}", id),
            CycleOutcome::ReadFailed(e) => println!("read failed: {}", e),
        }
    }
    Ok(())
}
