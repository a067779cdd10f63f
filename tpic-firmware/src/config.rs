// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// I2C Konfiguration
// ============================================================================

/// 7-bit I2C-Adresse des TPIC2810
/// 0x60 = alle drei Adress-Pins (A0..A2) auf GND
pub const TPIC_I2C_ADDRESS: u8 = tpic_core::DEFAULT_ADDRESS;

/// I2C Taktfrequenz in kHz
/// 100 kHz (Standard Mode) - der TPIC2810 unterstützt bis 400 kHz
pub const I2C_FREQUENCY_KHZ: u32 = 100;

/// Maximale Größe des Wire-Style Sende-Puffers in Bytes
/// TPIC2810-Transaktionen sind höchstens 2 Bytes (Kommando + Daten),
/// 8 lässt Luft für Bus-Scans und Debugging
pub const TWI_BUFFER_SIZE: usize = 8;

// ============================================================================
// Output-Enable / PWM Konfiguration
// ============================================================================

/// PWM-Frequenz für die Output-Enable-Leitung in Hz
/// 1 kHz ist flimmerfrei und weit unter der LEDC-Grenzfrequenz
pub const OE_PWM_FREQUENCY_HZ: u32 = 1000;

/// PWM-Auflösung in Bits
/// 8 Bit → Duty-Bereich [0, 255], passend zur Treiber-API
pub const OE_PWM_RESOLUTION_BITS: u8 = 8;

// ============================================================================
// Lauflicht-Demo Konfiguration
// ============================================================================

/// Schritt-Intervall des Lauflichts in Millisekunden
pub const CHASE_INTERVAL_MS: u64 = 250;

/// Duty-Schrittweite beim Helligkeits-Fade pro Lauflicht-Schritt
pub const FADE_DUTY_STEP: u8 = 8;

/// Start-Muster: ein gesetztes Bit das über die 8 Ausgänge wandert
pub const CHASE_START_PATTERN: u8 = 0b0000_0001;
