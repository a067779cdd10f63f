//! Core Types für den TPIC2810-Treiber
//!
//! Wire-Level Datenstrukturen ohne Hardware-Dependencies

/// TPIC2810 Kommando-Byte
///
/// Jede I2C-Transaktion beginnt mit genau einem dieser Bytes.
/// Die Werte sind vom Datenblatt vorgegeben und dürfen nicht geändert werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Command {
    /// Shift-Register schreiben bzw. aktuellen Inhalt zurücklesen
    ReadWrite = 0x11,
    /// Shift-Register in das Output-Latch übernehmen (ohne neue Daten)
    TransferOnly = 0x22,
    /// Schreiben und Übernehmen in einer unteilbaren Geräte-Operation
    WriteAndTransfer = 0x44,
}

impl Command {
    /// Liefert das Kommando-Byte wie es auf den Bus geht
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

/// Transaktions-Form: bestimmt ob ein Daten-Byte gesendet wird und ob
/// nach dem Schließen ein Lese-Request folgt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Kommando senden, Bus offen halten, ein Byte anfordern
    Read,
    /// Kommando (und ggf. Daten-Byte) senden, Bus freigeben
    Write,
}

/// Status-Code einer geschlossenen I2C-Übertragung
///
/// Entspricht der Fehler-Taxonomie des Transports (Wire-Semantik):
/// Sende-Puffer voll, Adresse nicht bestätigt, Daten nicht bestätigt,
/// sonstiger Fehler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusStatus {
    /// Übertragung vollständig bestätigt
    Ok,
    /// Sende-Puffer lief über, Transaktion unvollständig
    BufferFull,
    /// Kein Gerät hat auf die Adresse geantwortet (NACK)
    AddressNack,
    /// Ein gesendetes Daten-Byte wurde abgelehnt (NACK)
    DataNack,
    /// Anderer Bus-Fehler (z.B. Arbitration, Timeout, falsche Lese-Länge)
    Other,
}

/// Fehler-Typ für Treiber-Operationen
///
/// Alle Bus-Fehlerursachen werden bewusst zu einem einzigen Fehler
/// zusammengefasst - der Aufrufer entscheidet über Retry/Fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TpicError {
    ExchangeFailed,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Command {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Command::ReadWrite => defmt::write!(fmt, "ReadWrite (0x11)"),
            Command::TransferOnly => defmt::write!(fmt, "TransferOnly (0x22)"),
            Command::WriteAndTransfer => defmt::write!(fmt, "WriteAndTransfer (0x44)"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BusStatus {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            BusStatus::Ok => defmt::write!(fmt, "Ok"),
            BusStatus::BufferFull => defmt::write!(fmt, "BufferFull"),
            BusStatus::AddressNack => defmt::write!(fmt, "AddressNack"),
            BusStatus::DataNack => defmt::write!(fmt, "DataNack"),
            BusStatus::Other => defmt::write!(fmt, "Other"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TpicError {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "TpicError::ExchangeFailed")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_bytes_match_datasheet() {
        assert_eq!(Command::ReadWrite.as_byte(), 0x11);
        assert_eq!(Command::TransferOnly.as_byte(), 0x22);
        assert_eq!(Command::WriteAndTransfer.as_byte(), 0x44);
    }
}
