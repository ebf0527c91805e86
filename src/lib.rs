//! Chouette Scoreboard - Session engine for Chouette backgammon
//!
//! Tracks who sits in the Box, who captains the Team and who waits in the
//! queue, keeps the running score of one chouette, rotates seats after each
//! game and persists the session between launches.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
