// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von tpic-core
pub use tpic_core::{
    BusStatus, Command, DUTY_MAX, DUTY_MIN, NoOutputEnable, OutputEnablePin, Tpic2810, TpicError,
    TwiBus, rotate_pattern,
};
