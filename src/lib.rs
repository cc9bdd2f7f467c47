//! Glowgrid - activity heatmap engine for personal site generators.
//!
//! Turns a list of dated content entries into calendar-shaped activity
//! grids (GitHub-contributions style) for a renderer to draw, and ships
//! the hover/tap preview state machine the presentation layer embeds.
//!
//! The build-time side is the `generate` pass: entries JSON in, activity
//! data JSON out. The run-time side is [`interact::ActivityController`],
//! a pure state machine with no viewport dependency.

pub mod config;
pub mod content;
pub mod generate;
pub mod grid;
pub mod interact;
pub mod logger;
pub mod utils;
