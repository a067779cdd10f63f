// Output-Enable Implementierungen für die ~G-Leitung des TPIC2810
//
// Zwei Strategien, gewählt einmalig bei der Konstruktion:
// - GpioOutputEnable: einfacher Push-Pull Pin (an/aus)
// - LedcOutputEnable: LEDC PWM-Kanal (dimmbar)

use esp_hal::gpio::Output;
use esp_hal::ledc::LowSpeed;
use esp_hal::ledc::channel::{Channel, ChannelHW};

use crate::{DUTY_MAX, DUTY_MIN, OutputEnablePin};

// ============================================================================
// Digitaler Pin (an/aus)
// ============================================================================

/// Output-Enable über einen einfachen Push-Pull GPIO
///
/// Die Leitung ist active-low: low = Ausgänge aktiv.
pub struct GpioOutputEnable<'a> {
    pin: Output<'a>,
}

impl<'a> GpioOutputEnable<'a> {
    /// Übernimmt einen fertig konfigurierten Output-Pin
    ///
    /// Der Pin sollte mit `Level::Low` erstellt werden, damit die
    /// Ausgänge ab dem ersten Takt aktiv sind.
    pub fn new(pin: Output<'a>) -> Self {
        Self { pin }
    }
}

impl OutputEnablePin for GpioOutputEnable<'_> {
    fn enable(&mut self) {
        self.pin.set_low();
    }

    fn disable(&mut self) {
        self.pin.set_high();
    }

    fn set_duty(&mut self, level: u8) {
        // Ohne PWM-Kanal degradiert der Duty-Wert zur Schwellwert-Entscheidung
        if level < DUTY_MAX / 2 {
            self.pin.set_low();
        } else {
            self.pin.set_high();
        }
    }
}

// ============================================================================
// LEDC PWM-Kanal (dimmbar)
// ============================================================================

/// Output-Enable über einen LEDC Low-Speed PWM-Kanal
///
/// Der Kanal muss mit 8-bit Duty-Auflösung und `OE_PWM_FREQUENCY_HZ`
/// konfiguriert sein (siehe `tasks::chaser_task`). Der Duty-Wert gibt
/// den High-Anteil der active-low Leitung an: 0 = voll an, 255 = aus.
pub struct LedcOutputEnable<'a> {
    channel: Channel<'a, LowSpeed>,
}

impl<'a> LedcOutputEnable<'a> {
    /// Übernimmt einen fertig konfigurierten LEDC-Kanal
    pub fn new(channel: Channel<'a, LowSpeed>) -> Self {
        Self { channel }
    }
}

impl OutputEnablePin for LedcOutputEnable<'_> {
    fn enable(&mut self) {
        self.channel.set_duty_hw(u32::from(DUTY_MIN));
    }

    fn disable(&mut self) {
        self.channel.set_duty_hw(u32::from(DUTY_MAX));
    }

    fn set_duty(&mut self, level: u8) {
        // Roher Duty-Wert, 1:1 in der 8-bit Auflösung des Timers
        self.channel.set_duty_hw(u32::from(level));
    }
}
