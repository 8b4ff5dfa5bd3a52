//! shelf-pricer: dynamic pricing and shelf-placement suggestions for
//! perishable retail stock
//!
//! This library provides the core components for:
//! - Dynamic price computation from fixed demand/expiry/inventory factors
//! - A toy suggestion classifier fit over a fixed training table
//! - Batch CSV augmentation with waste comparison reporting
//! - CLI presentation layer
//! - TOML configuration and structured logging

pub mod batch;
pub mod cli;
pub mod config;
pub mod model;
pub mod pricing;
pub mod telemetry;
