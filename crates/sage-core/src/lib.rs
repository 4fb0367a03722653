//! Core library for the sage shopping assistant client.
//!
//! Everything UI-framework-independent lives here: the chat message model,
//! directive extraction, the message watcher, prop validation, the component
//! registry, the panel state store, and the backend REST client.

pub mod backend;
pub mod chat;
pub mod components;
pub mod config;
pub mod directive;
pub mod logging;
pub mod panel;
pub mod watcher;
