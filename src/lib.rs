//! Clove - Cycle-aware skincare companion core
//!
//! This crate computes menstrual cycle days, phases and predictions from a
//! recorded period, and derives the phase guidance and reminders the
//! application surfaces to the user.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
