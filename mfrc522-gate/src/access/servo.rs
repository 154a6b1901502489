// mfrc522-gate/src/access/servo.rs

//! Hobby-servo pulse math (SG90 class) and an optional `embedded-hal` PWM
//! gate driver.

/// PWM timing for a positional servo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServoConfig {
    /// PWM frequency (Hz)
    pub frequency_hz: u32,
    /// Pulse width at 0 degrees (us)
    pub min_pulse_us: u32,
    /// Pulse width at 180 degrees (us)
    pub max_pulse_us: u32,
    /// Full-scale duty count of the PWM timer
    pub max_duty: u32,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            frequency_hz: 50,
            min_pulse_us: 500,
            max_pulse_us: 2500,
            max_duty: (1 << 16) - 1,
        }
    }
}

impl ServoConfig {
    pub const MAX_ANGLE: f32 = 180.0;

    /// PWM period (us). 20 000 at 50 Hz.
    pub fn period_us(&self) -> u32 {
        1_000_000 / self.frequency_hz.max(1)
    }

    /// Pulse width for `angle` degrees, clamped to 0..=180. NaN maps to 0.
    pub fn pulse_width_us(&self, angle: f32) -> u32 {
        let angle = if angle.is_nan() {
            0.0
        } else {
            angle.clamp(0.0, Self::MAX_ANGLE)
        };
        let span = self.max_pulse_us.saturating_sub(self.min_pulse_us) as f32;
        self.min_pulse_us + (angle / Self::MAX_ANGLE * span) as u32
    }

    /// Duty count for `pulse_us` at `max_duty` resolution. The pulse is
    /// clamped to the configured range first.
    pub fn duty_for_pulse(&self, pulse_us: u32) -> u32 {
        self.duty_for_pulse_at(pulse_us, self.max_duty)
    }

    /// Like `duty_for_pulse` for a timer whose full scale is `max_duty`.
    pub fn duty_for_pulse_at(&self, pulse_us: u32, max_duty: u32) -> u32 {
        let (lo, hi) = self.pulse_bounds();
        let pulse = pulse_us.clamp(lo, hi);
        let duty = u64::from(pulse) * u64::from(max_duty) / u64::from(self.period_us().max(1));
        duty.min(u64::from(max_duty)) as u32
    }

    /// Pulse range with the bounds ordered, so a swapped configuration
    /// still clamps instead of panicking.
    fn pulse_bounds(&self) -> (u32, u32) {
        (
            self.min_pulse_us.min(self.max_pulse_us),
            self.min_pulse_us.max(self.max_pulse_us),
        )
    }

    pub fn duty_for_angle(&self, angle: f32) -> u32 {
        self.duty_for_pulse(self.pulse_width_us(angle))
    }
}

#[cfg(feature = "embedded-hal")]
pub use hal_gate::ServoGate;

#[cfg(feature = "embedded-hal")]
mod hal_gate {
    use embedded_hal::pwm::SetDutyCycle;
    use log::trace;

    use super::ServoConfig;
    use crate::access::GateActuator;
    use crate::{Error, Result};

    /// Gate driven by a servo on an `embedded_hal::pwm::SetDutyCycle`
    /// channel already running at `config.frequency_hz`.
    pub struct ServoGate<P> {
        pwm: P,
        config: ServoConfig,
    }

    impl<P: SetDutyCycle> ServoGate<P> {
        pub fn new(pwm: P, config: ServoConfig) -> Self {
            Self { pwm, config }
        }

        pub fn release(self) -> P {
            self.pwm
        }
    }

    impl<P: SetDutyCycle> GateActuator for ServoGate<P> {
        fn set_angle(&mut self, degrees: f32) -> Result<()> {
            let pulse = self.config.pulse_width_us(degrees);
            let max = u32::from(self.pwm.max_duty_cycle());
            let duty = self.config.duty_for_pulse_at(pulse, max);
            trace!("servo {} deg -> {} us, duty {}/{}", degrees, pulse, duty, max);
            self.pwm
                .set_duty_cycle(u16::try_from(duty).unwrap_or(u16::MAX))
                .map_err(|e| Error::Actuator(format!("pwm: {:?}", e)))
        }
    }
}
