/// A unit of source-document content tagged for REPL rendering.
///
/// Blocks are produced by the site's document parser, which decides which
/// spans of a page form a REPL session. Handlers read the raw text body and
/// never mutate or retain the block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    /// Raw text of the block, exactly as it appeared in the source document.
    pub body: String,
}

impl Block {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}
