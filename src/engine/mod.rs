//! Simulation engine primitives.
//!
//! Currently just the random source; both demos are strictly sequential and
//! own all of their state on the stack.

pub mod rng;

pub use rng::SimRng;
