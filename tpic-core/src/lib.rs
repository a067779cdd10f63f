//! TPIC Core - Platform-agnostic Driver, Traits and Logic
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Wire-Typen und den TPIC2810-Treiber.

#![no_std]

pub mod driver;
pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use driver::{DEFAULT_ADDRESS, DUTY_MAX, DUTY_MIN, Tpic2810};
pub use logic::rotate_pattern;
pub use traits::{NoOutputEnable, OutputEnablePin, TwiBus};
pub use types::{BusStatus, Command, Operation, TpicError};
