//! Named handler registry.
//!
//! The site builder identifies which spans of a document form REPL blocks
//! and asks the registry to render each one by kind name. The registry is
//! built once with the two fixed kinds and never mutated afterwards, so a
//! shared instance can be used from any number of threads without locking.

use std::collections::HashMap;

use crate::block::Block;
use crate::error::{Error, Result};
use crate::html;

/// A block handler: a pure function from block to HTML fragment.
pub type Handler = fn(&Block) -> String;

/// Kind name for plain REPL blocks.
pub const REPL: &str = "repl";

/// Kind name for REPL blocks that display inferred types.
pub const REPL_WITH_TYPES: &str = "replWithTypes";

/// Immutable mapping from block-kind name to handler.
#[derive(Debug, Clone)]
pub struct Registry {
    handlers: HashMap<&'static str, Handler>,
}

impl Registry {
    pub fn new() -> Self {
        let mut handlers: HashMap<&'static str, Handler> = HashMap::new();
        handlers.insert(REPL, html::repl as Handler);
        handlers.insert(REPL_WITH_TYPES, html::repl_with_types as Handler);
        Self { handlers }
    }

    /// Look up a handler by kind name.
    pub fn get(&self, kind: &str) -> Option<Handler> {
        self.handlers.get(kind).copied()
    }

    /// Render a block through the handler registered for `kind`.
    pub fn process(&self, kind: &str, block: &Block) -> Result<String> {
        let handler = self
            .get(kind)
            .ok_or_else(|| Error::UnknownBlock(kind.to_string()))?;
        Ok(handler(block))
    }

    /// Names of all registered block kinds, sorted.
    pub fn kinds(&self) -> Vec<&'static str> {
        let mut kinds: Vec<_> = self.handlers.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_exactly_two_kinds() {
        let registry = Registry::new();
        assert_eq!(registry.kinds(), vec![REPL, REPL_WITH_TYPES]);
    }

    #[test]
    fn test_get_known_kind() {
        let registry = Registry::new();
        assert!(registry.get(REPL).is_some());
        assert!(registry.get(REPL_WITH_TYPES).is_some());
    }

    #[test]
    fn test_get_unknown_kind() {
        let registry = Registry::new();
        assert!(registry.get("python").is_none());
        // Kind names are case-sensitive
        assert!(registry.get("Repl").is_none());
        assert!(registry.get("replwithtypes").is_none());
    }

    #[test]
    fn test_process_dispatches_by_kind() {
        let registry = Registry::new();
        let block = Block::new("1 + 1");

        assert_eq!(
            registry.process(REPL, &block).unwrap(),
            "<div class=\"elm-repl\">1 + 1</div>"
        );
        assert_eq!(
            registry.process(REPL_WITH_TYPES, &block).unwrap(),
            "<div class=\"elm-repl show-types\">1 + 1</div>"
        );
    }

    #[test]
    fn test_process_unknown_kind_errors() {
        let registry = Registry::new();
        let block = Block::new("1 + 1");

        match registry.process("scheme", &block) {
            Err(Error::UnknownBlock(kind)) => assert_eq!(kind, "scheme"),
            other => panic!("expected UnknownBlock, got {other:?}"),
        }
    }

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }
}
