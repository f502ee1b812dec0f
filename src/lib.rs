//! Kitchen Prep Time Simulation Library
//!
//! Models the error in merchant-reported prep times and compares a
//! congestion-aware correction against the trust-the-merchant baseline.

pub mod simulation;
