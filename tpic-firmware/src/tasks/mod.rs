// Task-Modul: Enthält alle Embassy Tasks
//
// Die Firmware hat genau einen Task: das Lauflicht über den TPIC2810.

pub mod chaser;

// Re-export Tasks für einfachen Import
pub use chaser::chaser_task;
