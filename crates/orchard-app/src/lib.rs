//! ORCHARD console application.
//!
//! This crate wires the arena engine to input, render, and console
//! collaborators and drives complete rounds, including the optional
//! wagering sequence.

pub mod console;
pub mod input;
pub mod options;
pub mod render;
pub mod runner;

pub use orchard_core as core;
