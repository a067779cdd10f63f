//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::BusStatus;

/// Trait für den I2C-Transport (Wire-Semantik)
///
/// Abstrahiert einen I2C-Master mit Sende-Puffer und expliziten
/// Transaktions-Grenzen.
///
/// # Implementierungen
/// - **Production:** HalTwiBus (ESP32-C6 I2C Master Peripheral)
/// - **Testing:** MockTwiBus (in-memory Mock)
pub trait TwiBus {
    /// Initialisiert den Bus (einmalig, vor der ersten Transaktion)
    ///
    /// Default ist ein No-Op: viele HALs initialisieren das Peripheral
    /// bereits bei der Konstruktion.
    fn begin(&mut self) {}

    /// Öffnet eine Transaktion zur angegebenen 7-bit Adresse
    /// und leert den Sende-Puffer
    fn begin_transmission(&mut self, address: u8);

    /// Legt ein Byte in den Sende-Puffer
    ///
    /// Ein Überlauf wird erst beim Schließen als `BufferFull` gemeldet.
    fn write(&mut self, byte: u8);

    /// Schließt die Transaktion und überträgt den Puffer
    ///
    /// `send_stop == false` hält den Bus für einen Repeated-Start offen
    /// (nötig für den Lese-Request direkt danach).
    fn end_transmission(&mut self, send_stop: bool) -> BusStatus;

    /// Fordert `count` Bytes vom Gerät an
    ///
    /// Liefert die Anzahl tatsächlich empfangener Bytes.
    fn request_from(&mut self, address: u8, count: usize, send_stop: bool) -> usize;

    /// Liest das nächste empfangene Byte aus dem Empfangs-Puffer
    fn read(&mut self) -> u8;
}

/// Trait für die Output-Enable-Leitung des TPIC2810
///
/// Die ~G-Leitung des Chips gated alle 8 Ausgänge: low = aktiv.
/// Über PWM auf dieser Leitung lässt sich die Helligkeit dimmen.
///
/// Die Wahl der konkreten Implementierung (digitaler Pin oder
/// PWM-Kanal) fällt einmalig bei der Konstruktion - kein
/// Plattform-Branching im Treiber selbst.
///
/// # Implementierungen
/// - **Production:** GpioOutputEnable / LedcOutputEnable (ESP32-C6)
/// - **Testing:** MockOutputEnable (in-memory Mock)
pub trait OutputEnablePin {
    /// Ausgänge aktivieren (Leitung low bzw. Duty-Minimum)
    fn enable(&mut self);

    /// Ausgänge deaktivieren (Leitung high bzw. Duty-Maximum)
    fn disable(&mut self);

    /// Setzt den PWM-Duty-Wert (0 = voll an, 255 = aus)
    ///
    /// 8-bit Auflösung; auf rein digitalen Pins degradiert der Wert
    /// zu einer Schwellwert-Entscheidung.
    fn set_duty(&mut self, level: u8);
}

// Blanket-Impls für &mut T: erlaubt geliehene Busse/Pins
// (Tests inspizieren ihre Mocks nachdem der Treiber fertig ist)

impl<T: TwiBus + ?Sized> TwiBus for &mut T {
    fn begin(&mut self) {
        T::begin(self);
    }

    fn begin_transmission(&mut self, address: u8) {
        T::begin_transmission(self, address);
    }

    fn write(&mut self, byte: u8) {
        T::write(self, byte);
    }

    fn end_transmission(&mut self, send_stop: bool) -> BusStatus {
        T::end_transmission(self, send_stop)
    }

    fn request_from(&mut self, address: u8, count: usize, send_stop: bool) -> usize {
        T::request_from(self, address, count, send_stop)
    }

    fn read(&mut self) -> u8 {
        T::read(self)
    }
}

impl<T: OutputEnablePin + ?Sized> OutputEnablePin for &mut T {
    fn enable(&mut self) {
        T::enable(self);
    }

    fn disable(&mut self) {
        T::disable(self);
    }

    fn set_duty(&mut self, level: u8) {
        T::set_duty(self, level);
    }
}

/// Platzhalter-Implementierung für Treiber ohne Output-Enable-Pin
///
/// Alle Methoden sind No-Ops. Wird als Default-Typ-Parameter genutzt,
/// damit `Tpic2810::new(bus)` ohne Pin-Typ auskommt.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOutputEnable;

impl OutputEnablePin for NoOutputEnable {
    fn enable(&mut self) {}

    fn disable(&mut self) {}

    fn set_duty(&mut self, _level: u8) {}
}
