//! API Routes
//!
//! Route handlers organized by functionality.

pub mod bmi;
pub mod dashboard;
pub mod dataset;
pub mod health;
