//! Midway - Terminal Game Hub Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod constants;
pub mod core;
pub mod games;
pub mod geometry;
pub mod input;
pub mod world;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
