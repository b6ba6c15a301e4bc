//! Utility functions shared by services and handlers.
//!
//! - [`alias`] - Random alias generation and alias validation

pub mod alias;
