// Task-Modul: Enthält den Embassy Task der Bridge
//
// Es gibt genau einen Ausführungskontext: der Bridge-Task
// läuft kooperativ und ohne weitere Tasks daneben.

pub mod bridge;

// Re-export Tasks für einfachen Import
pub use bridge::{HwBridge, bridge_logic, bridge_task};
