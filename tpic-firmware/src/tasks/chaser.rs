// Lauflicht Task - Steuert den TPIC2810 über I2C und dimmt via LEDC
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::ledc::channel::ChannelIFace;
use esp_hal::ledc::timer::TimerIFace;
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed, channel, timer};
use esp_hal::time::Rate;

use crate::config::{
    CHASE_INTERVAL_MS, CHASE_START_PATTERN, FADE_DUTY_STEP, I2C_FREQUENCY_KHZ,
    OE_PWM_FREQUENCY_HZ, TPIC_I2C_ADDRESS,
};
use crate::hal::{HalTwiBus, LedcOutputEnable};
use crate::{OutputEnablePin, Tpic2810, TwiBus, rotate_pattern};

/// Lauflicht Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Lässt ein gesetztes Bit über die 8 Ausgänge des TPIC2810 wandern
/// und fadet gleichzeitig die Helligkeit über die Output-Enable-Leitung:
/// - `begin()` als Presence-Probe, Ergebnis wird geloggt
/// - pro Schritt ein `write_and_transfer()` (Schreiben + Latchen in
///   einer Geräte-Operation)
/// - Helligkeit per `output_pwm()` (Duty 0 = voll an)
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen:
/// - Real Hardware (HalTwiBus + LedcOutputEnable) im Production-Code
/// - Mock Implementationen in Unit Tests
pub async fn chaser_logic<B: TwiBus, P: OutputEnablePin>(mut driver: Tpic2810<B, P>) {
    // Presence-Probe: konfiguriert auch den Output-Enable-Pin auf "aktiv"
    match driver.begin() {
        Ok(()) => info!("TPIC2810 online at address {=u8:#x}", TPIC_I2C_ADDRESS),
        Err(_) => error!("TPIC2810 not responding at address {=u8:#x}", TPIC_I2C_ADDRESS),
    }

    let mut pattern = CHASE_START_PATTERN;
    let mut duty: u8 = 0;

    // Hauptschleife: Muster rotieren, Helligkeit faden
    loop {
        if driver.write_and_transfer(pattern).is_err() {
            error!("Failed to update TPIC2810 outputs");
        }

        driver.output_pwm(duty);

        pattern = rotate_pattern(pattern);
        duty = duty.wrapping_add(FADE_DUTY_STEP);

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_millis(CHASE_INTERVAL_MS)).await;
    }
}

/// Lauflicht Task - Embassy Task für parallele Ausführung
///
/// Übernimmt die Hardware-Initialisierung (I2C Master + LEDC PWM) und
/// ruft dann die testbare `chaser_logic()` Funktion auf.
///
/// # Parameter
/// - `i2c0`: I2C0 Peripheral für den Bus zum TPIC2810
/// - `sda` / `scl`: GPIO6/GPIO7 als I2C-Leitungen
/// - `ledc_peripheral`: LEDC Peripheral für PWM auf der ~G-Leitung
/// - `oe_pin`: GPIO4 als Output-Enable-Leitung
#[embassy_executor::task]
pub async fn chaser_task(
    i2c0: esp_hal::peripherals::I2C0<'static>,
    sda: esp_hal::peripherals::GPIO6<'static>,
    scl: esp_hal::peripherals::GPIO7<'static>,
    ledc_peripheral: esp_hal::peripherals::LEDC<'static>,
    oe_pin: esp_hal::peripherals::GPIO4<'static>,
) {
    // I2C Master konfigurieren (100 kHz Standard Mode)
    let i2c_config = I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ));
    let i2c = I2c::new(i2c0, i2c_config)
        .unwrap()
        .with_sda(sda)
        .with_scl(scl);

    // LEDC konfigurieren: Low-Speed Timer mit 8-bit Duty bei 1 kHz
    let mut ledc = Ledc::new(ledc_peripheral);
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

    let mut pwm_timer = ledc.timer::<LowSpeed>(timer::Number::Timer0);
    pwm_timer
        .configure(timer::config::Config {
            duty: timer::config::Duty::Duty8Bit,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_hz(OE_PWM_FREQUENCY_HZ),
        })
        .unwrap();

    let mut pwm_channel = ledc.channel(channel::Number::Channel0, oe_pin);
    pwm_channel
        .configure(channel::config::Config {
            timer: &pwm_timer,
            duty_pct: 0,
            pin_config: channel::config::PinConfig::PushPull,
        })
        .unwrap();

    // Treiber zusammenstecken: Bus-Adapter + PWM Output-Enable
    let bus = HalTwiBus::new(i2c);
    let oe = LedcOutputEnable::new(pwm_channel);
    let driver = Tpic2810::with_output_enable(bus, TPIC_I2C_ADDRESS, oe);

    // Business Logic aufrufen (jetzt testbar!)
    chaser_logic(driver).await;
}
