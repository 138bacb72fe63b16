//! Platform abstraction layer
//!
//! Reduces browser input events (keys, taps, clicks) to game actions.

pub mod input;

pub use input::{InputAction, action_for_key};
