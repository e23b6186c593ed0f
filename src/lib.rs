//! Vacation Pay Calculator
//!
//! This crate calculates statutory vacation pay from an average monthly salary
//! and either a number of days or a concrete vacation period, excluding the
//! fixed set of non-working public holidays from date-range calculations.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
