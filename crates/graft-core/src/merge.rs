//! Whole-run composition: extract from the source, rewrite the destination.

use std::collections::HashMap;

use crate::extract::extract_blocks;
use crate::rewrite::rewrite_destination;
use crate::warning::{Warning, render_warnings};

/// Options controlling one merge run.
///
/// Defaults: annotation enabled, no source identifier, empty replacement
/// mapping.
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// Suppress the auto-inserted annotation comments.
    pub no_warn: bool,
    /// Identifier named in the annotation's "edit the source" line.
    pub source_name: Option<String>,
    /// Values substituted for `__NAME__` tokens in inserted lines.
    pub replacements: HashMap<String, String>,
}

/// Aggregate output of one merge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    /// The rewritten destination text.
    pub destination: String,
    /// Everything displaced from the destination, with a trailing newline
    /// when non-empty. Feeding this back as the next source reverts the
    /// merge.
    pub extractions: String,
    /// Structural mismatches, source-phase warnings first.
    pub warnings: Vec<Warning>,
}

impl MergeResult {
    /// Warnings as reportable text: newline-joined, with a trailing
    /// newline iff any warning is present.
    pub fn warnings_text(&self) -> String {
        render_warnings(&self.warnings)
    }
}

/// Merge `source` blocks into `destination`.
///
/// Runs the block extractor over the source, then the rewriter over the
/// destination. Malformed input never fails the run: mismatched blocks
/// degrade to passthrough and surface in [`MergeResult::warnings`].
pub fn merge(source: &str, destination: &str, options: &MergeOptions) -> MergeResult {
    let (registry, mut warnings) =
        extract_blocks(source, options.no_warn, options.source_name.as_deref());
    let rewritten = rewrite_destination(destination, &registry, &options.replacements);
    warnings.extend(rewritten.warnings);

    MergeResult {
        destination: rewritten.destination,
        extractions: rewritten.extractions,
        warnings,
    }
}
