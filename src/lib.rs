//! Working-hours and leave-accrual engine for staff time-off ledgers.
//!
//! This crate answers two questions for HR operators: how many hours an
//! employee has earned toward annual and personal leave under an
//! irregular per-weekday schedule, and how many hours a specific,
//! possibly mid-day leave request should consume from that balance once
//! public holidays and partial working days are taken into account.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
