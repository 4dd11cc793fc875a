//! # Utility Modules
//!
//! Supporting utilities used around the protocol core.
//!
//! ## Components
//! - **Logging**: structured logging setup via tracing

pub mod logging;
