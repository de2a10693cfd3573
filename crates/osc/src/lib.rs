#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

// Phase bit split
pub mod phase;

// Single-cycle table and lookup kernels
pub mod wavetable;

// Closed-form tableless generators
pub mod waveform;

// Vectorized batch lookup
mod batch;

pub use phase::{Phase, PhaseLayout};
pub use wavetable::Wavetable;
