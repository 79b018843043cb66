//! Source scanning: collects named blocks into a registry.

use tracing::debug;

use crate::block::{Block, BlockRegistry};
use crate::marker::{Marker, parse_marker};
use crate::warning::Warning;

/// Tool name stamped into the annotation comment.
const TOOL_NAME: &str = "graft";

/// Scan the source text and collect every fully closed block.
///
/// Unless `no_warn` is set, annotation lines are inserted right after each
/// block's opening marker, reusing the comment prefix captured from that
/// marker: a bare comment line, a "code auto-inserted" warning, a "do not
/// edit" line, and - only when `source_name` is given - a line pointing
/// back at the source.
///
/// Lines outside any block are ignored. A block closed under a different
/// name is discarded with a [`Warning::SourceBlockMismatch`]; a block
/// still open at end of input is discarded silently.
pub fn extract_blocks(
    source: &str,
    no_warn: bool,
    source_name: Option<&str>,
) -> (BlockRegistry, Vec<Warning>) {
    let mut registry = BlockRegistry::new();
    let mut warnings = Vec::new();
    // Single-slot scan state: None means we are not inside a block. Each
    // call starts fresh; nothing carries over between runs.
    let mut current: Option<Block> = None;

    // split('\n') keeps the empty trailing element, so a trailing newline
    // in the input round-trips.
    for line in source.split('\n') {
        match parse_marker(line) {
            Some(Marker::Open { name, prefix }) => {
                debug!(block = %name, "source: open block");
                let mut lines = vec![line.to_string()];
                if !no_warn {
                    lines.push(prefix.clone());
                    lines.push(format!(
                        "{prefix} WARNING!!! This code auto-inserted by {TOOL_NAME}"
                    ));
                    lines.push(format!("{prefix} Do not edit this block!"));
                    if let Some(source_name) = source_name {
                        lines.push(format!(
                            "{prefix} If you need to make changes, edit the source: {source_name}"
                        ));
                    }
                }
                // An open marker while a block is already open replaces the
                // in-progress block; its buffered lines are dropped.
                current = Some(Block { name, lines });
            }
            Some(Marker::Close { name }) => {
                debug!(block = %name, "source: close block");
                match current.take() {
                    Some(mut block) if block.name == name => {
                        block.lines.push(line.to_string());
                        registry.insert(block);
                    }
                    Some(block) => {
                        warnings.push(Warning::SourceBlockMismatch {
                            opened: block.name,
                            closed: name,
                        });
                    }
                    None => {
                        warnings.push(Warning::SourceBlockMismatch {
                            opened: String::new(),
                            closed: name,
                        });
                    }
                }
            }
            None => {
                if let Some(block) = current.as_mut() {
                    block.lines.push(line.to_string());
                }
            }
        }
    }

    (registry, warnings)
}
