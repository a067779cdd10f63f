//! Platform-agnostischer TPIC2810-Treiber
//!
//! Der Treiber kennt nur die beiden Traits `TwiBus` und `OutputEnablePin` -
//! welche Hardware dahinter steckt, entscheidet der Aufrufer bei der
//! Konstruktion.

use crate::traits::{NoOutputEnable, OutputEnablePin, TwiBus};
use crate::types::{BusStatus, Command, Operation, TpicError};

/// Default 7-bit I2C-Adresse des TPIC2810 (alle Adress-Pins auf GND)
pub const DEFAULT_ADDRESS: u8 = 0x60;

/// Duty-Wert für "Ausgänge voll aktiv"
pub const DUTY_MIN: u8 = 0x00;

/// Duty-Wert für "Ausgänge aus" (8-bit Auflösung)
pub const DUTY_MAX: u8 = 0xFF;

/// TPIC2810 8-bit LED-Sink-Treiber
///
/// Besitzt den Bus und optional einen Output-Enable-Pin. Jede öffentliche
/// Operation führt höchstens eine I2C-Transaktion aus und kehrt synchron
/// zurück - kein Zustand zwischen den Aufrufen, keine Retries.
pub struct Tpic2810<B, P = NoOutputEnable> {
    bus: B,
    address: u8,
    oe_pin: Option<P>,
}

impl<B: TwiBus> Tpic2810<B> {
    /// Erstellt einen Treiber mit Default-Adresse und ohne Output-Enable-Pin
    pub fn new(bus: B) -> Self {
        Self::with_address(bus, DEFAULT_ADDRESS)
    }

    /// Erstellt einen Treiber mit expliziter Adresse, ohne Output-Enable-Pin
    pub fn with_address(bus: B, address: u8) -> Self {
        Self {
            bus,
            address,
            oe_pin: None,
        }
    }
}

impl<B: TwiBus, P: OutputEnablePin> Tpic2810<B, P> {
    /// Erstellt einen Treiber mit angeschlossenem Output-Enable-Pin
    ///
    /// Es findet keine I/O statt - der Pin wird erst in `begin()` konfiguriert.
    pub fn with_output_enable(bus: B, address: u8, oe_pin: P) -> Self {
        Self {
            bus,
            address,
            oe_pin: Some(oe_pin),
        }
    }

    /// Initialisiert Bus und Output-Enable-Pin und prüft ob das Gerät
    /// auf seine Adresse antwortet
    ///
    /// Der Pin wird auf "Ausgänge aktiv" gesetzt (low bzw. Duty-Minimum).
    /// Erfolg bemisst sich ausschließlich am Status der leeren Probe-
    /// Transaktion: antwortet niemand, kommt `AddressNack` zurück.
    pub fn begin(&mut self) -> Result<(), TpicError> {
        self.bus.begin();
        self.bus.begin_transmission(self.address);

        if let Some(pin) = self.oe_pin.as_mut() {
            pin.enable();
        }

        match self.bus.end_transmission(true) {
            BusStatus::Ok => Ok(()),
            _ => Err(TpicError::ExchangeFailed),
        }
    }

    /// Liest den aktuellen Inhalt des Shift-Registers zurück
    ///
    /// Sendet das `ReadWrite`-Kommando, hält den Bus offen und fordert
    /// genau ein Byte an. Jede andere Antwortlänge gilt als Fehler.
    pub fn read(&mut self) -> Result<u8, TpicError> {
        let mut value = 0x00;
        match self.data_exchange(Command::ReadWrite, &mut value, Operation::Read) {
            BusStatus::Ok => Ok(value),
            _ => Err(TpicError::ExchangeFailed),
        }
    }

    /// Schreibt ein Byte in das Shift-Register
    ///
    /// Die Ausgänge ändern sich erst nach `transfer()` bzw.
    /// `write_and_transfer()`.
    pub fn write(&mut self, value: u8) -> Result<(), TpicError> {
        let mut value = value;
        match self.data_exchange(Command::ReadWrite, &mut value, Operation::Write) {
            BusStatus::Ok => Ok(()),
            _ => Err(TpicError::ExchangeFailed),
        }
    }

    /// Schreibt ein Byte und übernimmt es in einem Schritt in das
    /// Output-Latch (geräteseitig unteilbar)
    pub fn write_and_transfer(&mut self, value: u8) -> Result<(), TpicError> {
        let mut value = value;
        match self.data_exchange(Command::WriteAndTransfer, &mut value, Operation::Write) {
            BusStatus::Ok => Ok(()),
            _ => Err(TpicError::ExchangeFailed),
        }
    }

    /// Übernimmt den Shift-Register-Inhalt in das Output-Latch
    ///
    /// Kommando-Byte ohne Daten-Byte, Bus wird freigegeben.
    pub fn transfer(&mut self) -> Result<(), TpicError> {
        let mut stub = 0x00;
        match self.data_exchange(Command::TransferOnly, &mut stub, Operation::Write) {
            BusStatus::Ok => Ok(()),
            _ => Err(TpicError::ExchangeFailed),
        }
    }

    /// Aktiviert die Treiber-Ausgänge (unabhängig vom I2C-Bus)
    ///
    /// No-Op wenn kein Output-Enable-Pin konfiguriert ist.
    pub fn output_enable(&mut self) {
        if let Some(pin) = self.oe_pin.as_mut() {
            pin.enable();
        }
    }

    /// Deaktiviert die Treiber-Ausgänge (unabhängig vom I2C-Bus)
    ///
    /// No-Op wenn kein Output-Enable-Pin konfiguriert ist.
    pub fn output_disable(&mut self) {
        if let Some(pin) = self.oe_pin.as_mut() {
            pin.disable();
        }
    }

    /// Dimmt die Ausgänge per PWM auf der Output-Enable-Leitung
    ///
    /// `level` ist der Duty-Wert (0 = voll an, 255 = aus, 8-bit Auflösung).
    /// No-Op wenn kein Output-Enable-Pin konfiguriert ist.
    pub fn output_pwm(&mut self, level: u8) {
        if let Some(pin) = self.oe_pin.as_mut() {
            pin.set_duty(level);
        }
    }

    /// Zentrale Transaktions-Primitive für alle I2C-Operationen
    ///
    /// Ablauf:
    /// 1. Transaktion öffnen, Kommando-Byte senden
    /// 2. Daten-Byte nur bei Write-Form und wenn das Kommando eines erwartet
    /// 3. Schließen - Stop nur bei Write-Form, sonst Repeated-Start
    /// 4. Bei Read-Form und fehlerfreiem Schließen genau ein Byte anfordern;
    ///    jede andere Antwortlänge wird als `Other` gewertet
    fn data_exchange(
        &mut self,
        command: Command,
        value: &mut u8,
        operation: Operation,
    ) -> BusStatus {
        self.bus.begin_transmission(self.address);
        self.bus.write(command.as_byte());

        if command != Command::TransferOnly && operation == Operation::Write {
            self.bus.write(*value);
        }

        let mut status = self.bus.end_transmission(operation == Operation::Write);

        if status == BusStatus::Ok && operation == Operation::Read {
            if self.bus.request_from(self.address, 1, true) == 1 {
                *value = self.bus.read();
            } else {
                status = BusStatus::Other;
            }
        }

        status
    }
}
