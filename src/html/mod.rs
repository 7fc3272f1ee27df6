//! Pure HTML generation for REPL blocks.
//!
//! This module contains the rendering core of the plugin. The design
//! separates pure string transformation from dispatch and I/O:
//!
//! - [`escape`]: entity escaping for the five HTML-reserved characters
//! - [`fragment`]: wrapping escaped bodies in the styled container elements
//!
//! The registry ([`crate::registry`]) routes blocks to these functions by
//! kind name; the CLI handles I/O orchestration.
//!
//! ## Design Notes
//!
//! - **Escaping order**: `&` is substituted before the other four reserved
//!   characters, so the ampersands introduced by entity syntax are never
//!   escaped twice in a single pass.
//! - **No quoting**: the escaped result is safe as element text or attribute
//!   content but is not wrapped in quotes itself.
//! - **Not idempotent**: escaping already-escaped text re-escapes each
//!   entity's leading `&`. Callers must escape raw source text exactly once.

mod escape;
mod fragment;

pub use escape::escape_text;
pub use fragment::{repl, repl_with_types};
