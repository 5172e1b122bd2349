//! Gemini model listing for gemlist.
//!
//! This crate provides:
//! - Credential lookup for the Gemini API key (system keyring + env fallback)
//! - A [`ModelRegistry`] trait with an HTTP implementation for the Gemini API
//! - Capability filtering and the [`ModelLister`] that prints grouped names
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    ModelLister                       │
//! │   list ──▶ filter_by_capability ──▶ print_names      │
//! └─────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌─────────────────────────────────────────────────────┐
//! │            ModelRegistry (GeminiClient)              │
//! │          GET /v1beta/models  x-goog-api-key          │
//! └─────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                  CredentialStore                     │
//! │         (System Keyring + Env Fallback)             │
//! └─────────────────────────────────────────────────────┘
//! ```

mod error;
mod types;

pub mod auth;
pub mod lister;
pub mod providers;

pub use error::{Error, Result};
pub use lister::{ModelLister, filter_by_capability, print_names};
pub use providers::{GeminiClient, ModelRegistry, ModelStream};
pub use types::{Capability, ModelDescriptor};
