//! billstat: billing statistics over daily billing records

pub mod cli;
pub mod services;
pub mod types;
