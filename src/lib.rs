//! # repl-blocks
//!
//! A documentation-site plugin that renders interactive REPL blocks to HTML.
//!
//! Site builders hand each tagged span of source text to one of two named
//! block handlers; the handler escapes the raw body and wraps it in a styled
//! container that the bundled client-side widget upgrades into a live REPL.
//!
//! ## Quick Start
//!
//! ```
//! use repl_blocks::{Block, Registry};
//!
//! let registry = Registry::new();
//! let block = Block::new("List.map (\\x -> x * 2) [1, 2, 3]");
//! let html = registry.process("repl", &block).unwrap();
//! assert!(html.starts_with("<div class=\"elm-repl\">"));
//! ```
//!
//! ## Block kinds
//!
//! | kind | container |
//! |------|-----------|
//! | `repl` | `<div class="elm-repl">` |
//! | `replWithTypes` | `<div class="elm-repl show-types">` |
//!
//! Both handlers are pure functions over the block body. Escaping replaces
//! `&`, `<`, `>`, `"`, and `'` with their HTML entities (see
//! [`escape_text`]); everything else passes through untouched.
//!
//! The [`manifest`] module describes the stylesheet/script assets the site
//! builder bundles alongside the rendered fragments.

pub mod block;
pub mod error;
pub mod html;
pub mod manifest;
pub mod registry;

pub use block::Block;
pub use error::{Error, Result};
pub use html::{escape_text, repl, repl_with_types};
pub use manifest::{WEBSITE_ASSETS, WebsiteAssets};
pub use registry::{Handler, REPL, REPL_WITH_TYPES, Registry};
