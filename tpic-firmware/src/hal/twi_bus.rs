// Wire-Style I2C Bus-Adapter für esp-hal
//
// Der Core-Treiber spricht das TwiBus-Trait mit Sende-Puffer und
// expliziten Transaktions-Grenzen. Dieser Adapter bildet das auf den
// blockierenden I2C-Master des esp-hal ab.

use esp_hal::Blocking;
use esp_hal::i2c::master::{AcknowledgeCheckFailedReason, Error, I2c};
use heapless::Vec;

use crate::config::TWI_BUFFER_SIZE;
use crate::{BusStatus, TwiBus};

/// Übersetzt das esp-hal Fehler-Enum in die Transport-Taxonomie des Treibers
fn status_from_result(result: Result<(), Error>) -> BusStatus {
    match result {
        Ok(()) => BusStatus::Ok,
        Err(Error::AcknowledgeCheckFailed(AcknowledgeCheckFailedReason::Address)) => {
            BusStatus::AddressNack
        }
        Err(Error::AcknowledgeCheckFailed(_)) => BusStatus::DataNack,
        Err(_) => BusStatus::Other,
    }
}

/// Real Hardware I2C Bus
///
/// Puffert ausgehende Bytes bis `end_transmission()` und setzt sie dann
/// als eine einzige HAL-Transaktion ab.
///
/// Repeated-Start: `end_transmission(false)` überträgt noch nichts,
/// sondern merkt sich den Puffer. Der folgende `request_from()` setzt
/// dann ein `write_read()` ab - Schreib- und Lese-Phase teilen sich so
/// eine Bus-Transaktion ohne zwischenzeitliches Stop-Bit.
pub struct HalTwiBus<'a> {
    i2c: I2c<'a, Blocking>,
    address: u8,
    tx_buffer: Vec<u8, TWI_BUFFER_SIZE>,
    tx_overflow: bool,
    pending: Option<Vec<u8, TWI_BUFFER_SIZE>>,
    rx_buffer: Vec<u8, TWI_BUFFER_SIZE>,
    rx_pos: usize,
}

impl<'a> HalTwiBus<'a> {
    /// Erstellt den Adapter über einem fertig konfigurierten I2C-Master
    ///
    /// Pin- und Frequenz-Konfiguration passiert beim Aufrufer
    /// (siehe `tasks::chaser_task`).
    pub fn new(i2c: I2c<'a, Blocking>) -> Self {
        Self {
            i2c,
            address: 0,
            tx_buffer: Vec::new(),
            tx_overflow: false,
            pending: None,
            rx_buffer: Vec::new(),
            rx_pos: 0,
        }
    }
}

impl TwiBus for HalTwiBus<'_> {
    fn begin_transmission(&mut self, address: u8) {
        self.address = address;
        self.tx_buffer.clear();
        self.tx_overflow = false;
        self.pending = None;
    }

    fn write(&mut self, byte: u8) {
        // Überlauf wird erst beim Schließen als BufferFull gemeldet
        if self.tx_buffer.push(byte).is_err() {
            self.tx_overflow = true;
        }
    }

    fn end_transmission(&mut self, send_stop: bool) -> BusStatus {
        if self.tx_overflow {
            return BusStatus::BufferFull;
        }

        if send_stop {
            status_from_result(self.i2c.write(self.address, &self.tx_buffer))
        } else {
            // Übertragung aufschieben: request_from() setzt write_read() ab
            self.pending = Some(self.tx_buffer.clone());
            BusStatus::Ok
        }
    }

    fn request_from(&mut self, address: u8, count: usize, _send_stop: bool) -> usize {
        // Der HAL schließt Lese-Transaktionen immer mit Stop ab
        let count = count.min(TWI_BUFFER_SIZE);
        let mut buf = [0u8; TWI_BUFFER_SIZE];

        let result = match self.pending.take() {
            Some(pending) => self.i2c.write_read(address, &pending, &mut buf[..count]),
            None => self.i2c.read(address, &mut buf[..count]),
        };

        if result.is_err() {
            return 0;
        }

        self.rx_buffer.clear();
        let _ = self.rx_buffer.extend_from_slice(&buf[..count]);
        self.rx_pos = 0;
        count
    }

    fn read(&mut self) -> u8 {
        let byte = self.rx_buffer.get(self.rx_pos).copied().unwrap_or(0);
        self.rx_pos += 1;
        byte
    }
}
