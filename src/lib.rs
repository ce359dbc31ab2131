//! Core of a small bullet-dodging arcade game.
//!
//! The simulation (`compute`) is pure: it takes the current `GameState` and a
//! game-clock reading and returns the next state. Drawing goes through the
//! `render::Surface` trait so the core never touches a terminal directly.

pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod path;
pub mod render;
pub mod timer;
