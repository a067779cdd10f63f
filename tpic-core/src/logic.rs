//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

/// Rotiert ein 8-bit Ausgangs-Muster zyklisch um eine Position nach links
///
/// Bildet den Lauflicht-Schritt: Bit 7 wandert zurück auf Bit 0.
///
/// # Beispiele
///
/// ```
/// # use tpic_core::rotate_pattern;
/// let mut pattern: u8 = 0b0000_0001;
/// pattern = rotate_pattern(pattern);
/// assert_eq!(pattern, 0b0000_0010);
/// ```
pub fn rotate_pattern(pattern: u8) -> u8 {
    pattern.rotate_left(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_pattern_single_bit() {
        assert_eq!(rotate_pattern(0b0000_0001), 0b0000_0010);
        assert_eq!(rotate_pattern(0b0100_0000), 0b1000_0000);
    }

    #[test]
    fn test_rotate_pattern_wraps_around() {
        assert_eq!(rotate_pattern(0b1000_0000), 0b0000_0001);
    }

    #[test]
    fn test_rotate_pattern_full_cycle() {
        let mut pattern: u8 = 0b0000_0001;
        for _ in 0..8 {
            pattern = rotate_pattern(pattern);
        }
        assert_eq!(pattern, 0b0000_0001);
    }

    #[test]
    fn test_rotate_pattern_preserves_bit_count() {
        assert_eq!(rotate_pattern(0b1010_0101).count_ones(), 4);
    }
}
