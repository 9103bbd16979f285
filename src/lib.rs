//! # gtl - Console Translation Bridge
//!
//! `gtl` reads text, asks the Gemini `generateContent` API to translate it,
//! and prints the answer. All translation happens in the remote model; this
//! crate builds the request, classifies failures, and handles the terminal.
//!
//! ## Quick Start
//!
//! ```bash
//! export GEMINI_API_KEY="your-api-key"
//!
//! # Translate an argument (defaults to Japanese)
//! gtl "Hello, how are you?"
//!
//! # Pick a language by name or code
//! echo "Good morning" | gtl --to fr
//!
//! # Interactive session
//! gtl chat
//! ```
//!
//! ## Library use
//!
//! [`translation::TranslationClient`] takes any
//! [`translation::GenerationTransport`], so the HTTP layer can be replaced in
//! tests or embedded callers.
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/gtl/config.toml`:
//!
//! ```toml
//! [gtl]
//! model = "gemini-2.0-flash"
//! to = "Japanese"
//! api_key_env = "GEMINI_API_KEY"
//! ```

/// Interactive chat mode for translation sessions.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and setting resolution.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// `tracing` subscriber setup.
pub mod logging;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation client for the Gemini API.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
