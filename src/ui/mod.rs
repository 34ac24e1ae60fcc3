// Peripheral page behaviors. Each module keeps its state and geometry in plain
// Rust and exposes an `install` function that binds it to the document.

pub mod cursor;
pub mod kinetic_text;
pub mod magnetic;
pub mod mobile_menu;
pub mod nav;
pub mod reveal;
pub mod theme;
