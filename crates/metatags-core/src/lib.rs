//! Metatags Core Library
//!
//! Core types, configuration, and error handling shared by the metatags builder.

pub mod category;
pub mod config;
pub mod error;

pub use category::Category;
pub use config::{Config, RenderConfig};
pub use error::{CoreError, Result};
