//! Core library for devto
//!
//! This crate implements the **Functional Core** of the devto application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`devto_core`** (this crate): Pure transformation functions with zero I/O
//! - **`devto`**: HTTP calls, the CLI and the MCP server (the Imperative Shell)
//!
//! All functions in this crate are deterministic and free of side effects, so
//! they are tested with fixture data and no mocking.
//!
//! # Module Organization
//!
//! - [`articles`]: Article models, tag normalization, search filtering and formatting
//! - [`users`]: User profile model and formatting
//! - [`payload`]: Create/update request bodies, argument checks and confirmations
//! - [`prompts`]: Prompt templates exposed over MCP
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use devto_core::articles::{cap_results, decode_articles, format_articles};
//!
//! let articles = decode_articles(serde_json::json!([{ "id": 1, "title": "Hello" }]))?;
//! let text = format_articles(&cap_results(articles));
//!
//! assert!(text.contains("## Hello"));
//! ```

pub mod articles;
pub mod payload;
pub mod prompts;
pub mod users;
