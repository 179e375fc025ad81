//! Textforge - text toolbox
//!
//! Text transforms, extractors, converters and generators, plus a handful of
//! AI-assisted writing tools, usable from the command line or as a library.

pub mod ai;
pub mod clipboard;
pub mod config;
pub mod document;
pub mod error;
pub mod qr;
pub mod search;
pub mod tool;
pub mod transformers;

pub use clipboard::ClipboardManager;
pub use config::Config;
pub use error::{Result, ToolError};
pub use tool::{is_sentinel, Tool, ToolInfo, ToolOptions, CATALOG};
