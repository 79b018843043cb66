//! Block storage keyed by name.

use std::collections::HashMap;

/// A named run of lines captured from the source document.
///
/// The line list starts with the opening marker line, ends with the closing
/// marker line, and may carry annotation lines directly after the opener.
/// Blocks are immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Trimmed block name, used as the join key.
    pub name: String,
    /// The block's lines, in source order, trailing whitespace preserved.
    pub lines: Vec<String>,
}

/// Registry of fully closed source blocks, keyed by trimmed name.
///
/// Registering a second block under the same name silently replaces the
/// first.
#[derive(Debug, Clone, Default)]
pub struct BlockRegistry {
    blocks: HashMap<String, Block>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block under its name, replacing any earlier entry.
    pub fn insert(&mut self, block: Block) {
        self.blocks.insert(block.name.clone(), block);
    }

    /// Look up a block by name.
    ///
    /// Lookups are non-destructive: several destination regions carrying
    /// the same name each receive the same block content.
    pub fn get(&self, name: &str) -> Option<&Block> {
        self.blocks.get(name)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
