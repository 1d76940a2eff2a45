//! Input handling for the Joyscope demo.
//!
//! Hardware-independent half of the application loop: joystick samples are
//! mapped to screen positions and LED duty cycles, button edges are debounced
//! and folded into a single [`ControlState`](controls::ControlState) that the
//! firmware shares between its tasks.
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`](https://docs.rs/defmt).

#![cfg_attr(not(test), no_std)]

pub mod controls;
