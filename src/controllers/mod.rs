pub mod osc;
pub mod scroll;

pub use osc::{OscCommand, OscController};
pub use scroll::ScrollState;
