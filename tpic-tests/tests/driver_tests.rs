//! Integration Tests für den TPIC2810-Treiber
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockTwiBus
//! sowie MockOutputEnable

use tpic_core::{BusStatus, OutputEnablePin, Tpic2810, TpicError, TwiBus, rotate_pattern};

// ============================================================================
// Mock TWI Bus
// ============================================================================

/// Eine abgeschlossene Übertragung wie sie der Mock protokolliert hat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transmission {
    pub address: u8,
    pub bytes: Vec<u8>,
    pub sent_stop: bool,
}

/// Ein protokollierter Lese-Request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub address: u8,
    pub count: usize,
    pub sent_stop: bool,
}

/// In-memory I2C-Bus mit simuliertem TPIC2810 dahinter
///
/// Protokolliert alle Übertragungen und Requests. Schreib-Kommandos
/// (0x11/0x44) mit Daten-Byte landen im simulierten Shift-Register,
/// Lese-Requests liefern es zurück.
pub struct MockTwiBus {
    pub begin_count: usize,
    pub transmissions: Vec<Transmission>,
    pub requests: Vec<Request>,
    /// Status den end_transmission() zurückgeben soll
    pub end_status: BusStatus,
    /// Anzahl Bytes die request_from() "liefert" (für Fehler-Szenarien)
    pub respond_len: usize,
    /// Simuliertes Shift-Register des Geräts
    pub shift_register: u8,
    current: Option<(u8, Vec<u8>)>,
    rx_byte: Option<u8>,
}

impl MockTwiBus {
    pub fn new() -> Self {
        Self {
            begin_count: 0,
            transmissions: Vec::new(),
            requests: Vec::new(),
            end_status: BusStatus::Ok,
            respond_len: 1,
            shift_register: 0,
            current: None,
            rx_byte: None,
        }
    }
}

impl TwiBus for MockTwiBus {
    fn begin(&mut self) {
        self.begin_count += 1;
    }

    fn begin_transmission(&mut self, address: u8) {
        self.current = Some((address, Vec::new()));
    }

    fn write(&mut self, byte: u8) {
        if let Some((_, bytes)) = self.current.as_mut() {
            bytes.push(byte);
        }
    }

    fn end_transmission(&mut self, send_stop: bool) -> BusStatus {
        let (address, bytes) = self.current.take().expect("end without begin_transmission");

        // Geräte-Simulation: Schreib-Kommandos laden das Shift-Register
        if self.end_status == BusStatus::Ok
            && bytes.len() == 2
            && (bytes[0] == 0x11 || bytes[0] == 0x44)
        {
            self.shift_register = bytes[1];
        }

        self.transmissions.push(Transmission {
            address,
            bytes,
            sent_stop: send_stop,
        });
        self.end_status
    }

    fn request_from(&mut self, address: u8, count: usize, send_stop: bool) -> usize {
        self.requests.push(Request {
            address,
            count,
            sent_stop: send_stop,
        });

        if self.respond_len >= 1 {
            self.rx_byte = Some(self.shift_register);
        }
        self.respond_len
    }

    fn read(&mut self) -> u8 {
        self.rx_byte.take().unwrap_or(0)
    }
}

// ============================================================================
// Mock Output-Enable Pin
// ============================================================================

/// In-memory Output-Enable-Pin
///
/// Protokolliert jeden gesetzten Duty-Wert: enable() als 0,
/// disable() als 255, set_duty() als Rohwert.
#[derive(Default)]
pub struct MockOutputEnable {
    pub duty_history: Vec<u8>,
    pub enable_count: usize,
    pub disable_count: usize,
}

impl MockOutputEnable {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputEnablePin for MockOutputEnable {
    fn enable(&mut self) {
        self.enable_count += 1;
        self.duty_history.push(0x00);
    }

    fn disable(&mut self) {
        self.disable_count += 1;
        self.duty_history.push(0xFF);
    }

    fn set_duty(&mut self, level: u8) {
        self.duty_history.push(level);
    }
}

// ============================================================================
// Tests: MockTwiBus
// ============================================================================

#[test]
fn test_mock_bus_records_transmission() {
    let mut bus = MockTwiBus::new();

    bus.begin_transmission(0x60);
    bus.write(0x11);
    bus.write(0x42);
    let status = bus.end_transmission(true);

    assert_eq!(status, BusStatus::Ok);
    assert_eq!(
        bus.transmissions,
        vec![Transmission {
            address: 0x60,
            bytes: vec![0x11, 0x42],
            sent_stop: true,
        }]
    );
}

#[test]
fn test_mock_bus_loads_shift_register_on_write_commands() {
    let mut bus = MockTwiBus::new();

    bus.begin_transmission(0x60);
    bus.write(0x11);
    bus.write(0x42);
    bus.end_transmission(true);
    assert_eq!(bus.shift_register, 0x42);

    // TransferOnly (0x22) darf das Shift-Register nicht ändern
    bus.begin_transmission(0x60);
    bus.write(0x22);
    bus.end_transmission(true);
    assert_eq!(bus.shift_register, 0x42);
}

// ============================================================================
// Tests: Kommando-Bytes und Transaktions-Formen
// ============================================================================

#[test]
fn test_write_sends_command_and_value_with_stop() {
    let mut bus = MockTwiBus::new();
    {
        let mut driver = Tpic2810::new(&mut bus);
        assert_eq!(driver.write(0x5A), Ok(()));
    }

    assert_eq!(bus.transmissions.len(), 1);
    assert_eq!(bus.transmissions[0].address, 0x60);
    assert_eq!(bus.transmissions[0].bytes, vec![0x11, 0x5A]);
    assert!(bus.transmissions[0].sent_stop);
    assert!(bus.requests.is_empty());
}

#[test]
fn test_write_and_transfer_uses_combined_command() {
    let mut bus = MockTwiBus::new();
    {
        let mut driver = Tpic2810::new(&mut bus);
        assert_eq!(driver.write_and_transfer(0x0F), Ok(()));
    }

    assert_eq!(bus.transmissions[0].bytes, vec![0x44, 0x0F]);
    assert!(bus.transmissions[0].sent_stop);
}

#[test]
fn test_transfer_sends_single_command_byte() {
    let mut bus = MockTwiBus::new();
    {
        let mut driver = Tpic2810::new(&mut bus);
        assert_eq!(driver.transfer(), Ok(()));
    }

    assert_eq!(bus.transmissions.len(), 1);
    assert_eq!(bus.transmissions[0].bytes, vec![0x22]);
    assert!(bus.transmissions[0].sent_stop);
}

#[test]
fn test_read_shape_keeps_bus_open_and_requests_one_byte() {
    let mut bus = MockTwiBus::new();
    {
        let mut driver = Tpic2810::new(&mut bus);
        assert_eq!(driver.read(), Ok(0x00));
    }

    assert_eq!(bus.transmissions.len(), 1);
    assert_eq!(bus.transmissions[0].bytes, vec![0x11]);
    // Kein Stop vor dem Lese-Request (Repeated-Start)
    assert!(!bus.transmissions[0].sent_stop);

    assert_eq!(
        bus.requests,
        vec![Request {
            address: 0x60,
            count: 1,
            sent_stop: true,
        }]
    );
}

#[test]
fn test_custom_address_is_used_on_the_bus() {
    let mut bus = MockTwiBus::new();
    {
        let mut driver = Tpic2810::with_address(&mut bus, 0x61);
        driver.write(0x01).unwrap();
    }

    assert_eq!(bus.transmissions[0].address, 0x61);
}

// ============================================================================
// Tests: Fehlerfälle
// ============================================================================

#[test]
fn test_write_fails_on_any_bus_error() {
    for status in [
        BusStatus::BufferFull,
        BusStatus::AddressNack,
        BusStatus::DataNack,
        BusStatus::Other,
    ] {
        let mut bus = MockTwiBus::new();
        bus.end_status = status;

        let mut driver = Tpic2810::new(&mut bus);
        assert_eq!(driver.write(0x01), Err(TpicError::ExchangeFailed));
        assert_eq!(driver.write_and_transfer(0x01), Err(TpicError::ExchangeFailed));
        assert_eq!(driver.transfer(), Err(TpicError::ExchangeFailed));
    }
}

#[test]
fn test_read_fails_on_bus_error_without_requesting() {
    let mut bus = MockTwiBus::new();
    bus.end_status = BusStatus::AddressNack;
    {
        let mut driver = Tpic2810::new(&mut bus);
        assert_eq!(driver.read(), Err(TpicError::ExchangeFailed));
    }

    // Nach fehlgeschlagenem Schließen darf kein Request mehr rausgehen
    assert!(bus.requests.is_empty());
}

#[test]
fn test_read_fails_on_short_response() {
    let mut bus = MockTwiBus::new();
    bus.respond_len = 0;

    let mut driver = Tpic2810::new(&mut bus);
    assert_eq!(driver.read(), Err(TpicError::ExchangeFailed));
}

#[test]
fn test_read_fails_on_overlong_response() {
    let mut bus = MockTwiBus::new();
    bus.respond_len = 2;

    let mut driver = Tpic2810::new(&mut bus);
    assert_eq!(driver.read(), Err(TpicError::ExchangeFailed));
}

// ============================================================================
// Tests: begin() Presence-Probe
// ============================================================================

#[test]
fn test_begin_probes_device_with_empty_transaction() {
    let mut bus = MockTwiBus::new();
    {
        let mut driver = Tpic2810::new(&mut bus);
        assert_eq!(driver.begin(), Ok(()));
    }

    assert_eq!(bus.begin_count, 1);
    assert_eq!(bus.transmissions.len(), 1);
    assert_eq!(bus.transmissions[0].address, 0x60);
    assert!(bus.transmissions[0].bytes.is_empty());
    assert!(bus.transmissions[0].sent_stop);
}

#[test]
fn test_begin_fails_when_probe_is_nacked() {
    let mut bus = MockTwiBus::new();
    bus.end_status = BusStatus::AddressNack;

    let mut driver = Tpic2810::new(&mut bus);
    assert_eq!(driver.begin(), Err(TpicError::ExchangeFailed));
}

#[test]
fn test_begin_enables_attached_pin() {
    let mut bus = MockTwiBus::new();
    let mut pin = MockOutputEnable::new();
    {
        let mut driver = Tpic2810::with_output_enable(&mut bus, 0x60, &mut pin);
        driver.begin().unwrap();
    }

    assert_eq!(pin.enable_count, 1);
    assert_eq!(pin.duty_history, vec![0x00]);
}

// ============================================================================
// Tests: Output-Enable-Leitung
// ============================================================================

#[test]
fn test_output_enable_disable_drive_min_and_max_duty() {
    let mut bus = MockTwiBus::new();
    let mut pin = MockOutputEnable::new();
    {
        let mut driver = Tpic2810::with_output_enable(&mut bus, 0x60, &mut pin);
        driver.output_enable();
        driver.output_disable();
    }

    assert_eq!(pin.enable_count, 1);
    assert_eq!(pin.disable_count, 1);
    assert_eq!(pin.duty_history, vec![0x00, 0xFF]);
    // Pin-Operationen berühren den Bus nicht
    assert!(bus.transmissions.is_empty());
}

#[test]
fn test_output_pwm_writes_exact_duty_value() {
    let mut bus = MockTwiBus::new();
    let mut pin = MockOutputEnable::new();
    {
        let mut driver = Tpic2810::with_output_enable(&mut bus, 0x60, &mut pin);
        driver.output_pwm(0);
        driver.output_pwm(37);
        driver.output_pwm(128);
        driver.output_pwm(255);
    }

    assert_eq!(pin.duty_history, vec![0, 37, 128, 255]);
}

#[test]
fn test_pin_operations_without_pin_touch_nothing() {
    let mut bus = MockTwiBus::new();
    {
        let mut driver = Tpic2810::new(&mut bus);
        driver.output_enable();
        driver.output_disable();
        driver.output_pwm(128);
    }

    assert!(bus.transmissions.is_empty());
    assert!(bus.requests.is_empty());
}

// ============================================================================
// Tests: Szenario Schreiben + Zurücklesen
// ============================================================================

#[test]
fn test_write_then_read_round_trips_the_byte() {
    let mut bus = MockTwiBus::new();
    {
        let mut driver = Tpic2810::new(&mut bus);

        assert_eq!(driver.write(0xAA), Ok(()));
        assert_eq!(driver.read(), Ok(0xAA));
    }

    // write: Kommando + Daten-Byte, read: nur das Kommando
    assert_eq!(bus.transmissions.len(), 2);
    assert_eq!(bus.transmissions[0].bytes, vec![0x11, 0xAA]);
    assert_eq!(bus.transmissions[1].bytes, vec![0x11]);
    assert_eq!(bus.requests.len(), 1);
}

// ============================================================================
// Tests: rotate_pattern()
// ============================================================================

#[test]
fn test_rotate_pattern_walks_single_bit() {
    let mut pattern: u8 = 0b0000_0001;
    pattern = rotate_pattern(pattern);
    assert_eq!(pattern, 0b0000_0010);
}

#[test]
fn test_rotate_pattern_wraps_msb_to_lsb() {
    assert_eq!(rotate_pattern(0b1000_0000), 0b0000_0001);
}

#[test]
fn test_rotate_pattern_full_cycle() {
    let mut pattern: u8 = 0b0000_0101;
    for _ in 0..8 {
        pattern = rotate_pattern(pattern);
    }
    assert_eq!(pattern, 0b0000_0101);
}
