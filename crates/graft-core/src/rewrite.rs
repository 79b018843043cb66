//! Destination scanning: swaps matched regions for registered blocks.

use std::collections::HashMap;

use tracing::debug;

use crate::block::BlockRegistry;
use crate::marker::{Marker, parse_marker};
use crate::subst::substitute_tokens;
use crate::warning::Warning;

/// One in-progress destination region: the open marker line plus whatever
/// has been buffered since.
struct Region {
    name: String,
    lines: Vec<String>,
}

/// Output of a destination rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    /// The destination with every matched region replaced.
    pub destination: String,
    /// Original content of every replaced region, in scan order, with a
    /// trailing newline when non-empty.
    pub extractions: String,
    /// Destination-side mismatches, in scan order.
    pub warnings: Vec<Warning>,
}

/// Scan the destination text, replacing each region whose name is found in
/// the registry and logging the displaced content.
///
/// Each region resolves independently:
/// - registry hit: the block's lines are inserted (token-substituted) and
///   the region's original content goes to the extraction log;
/// - no registry entry: the region passes through unchanged, silently;
/// - close name differs from open name: the region passes through with a
///   [`Warning::DestinationBlockMismatch`];
/// - still open at end of input: the buffered lines are dropped from the
///   output entirely.
pub fn rewrite_destination(
    destination: &str,
    registry: &BlockRegistry,
    replacements: &HashMap<String, String>,
) -> Rewritten {
    let mut out: Vec<String> = Vec::new();
    let mut extractions: Vec<String> = Vec::new();
    let mut warnings = Vec::new();
    let mut current: Option<Region> = None;

    for line in destination.split('\n') {
        match parse_marker(line) {
            Some(Marker::Open { name, .. }) => {
                debug!(block = %name, "destination: open region");
                // Reopening drops any partially buffered region.
                current = Some(Region {
                    name,
                    lines: vec![line.to_string()],
                });
            }
            Some(Marker::Close { name }) => {
                debug!(block = %name, "destination: close region");
                // A stray close with nothing open compares against the
                // empty name, so it degrades to passthrough rather than
                // failing the run.
                let mut region = current.take().unwrap_or_else(|| Region {
                    name: String::new(),
                    lines: Vec::new(),
                });
                region.lines.push(line.to_string());

                if region.name == name {
                    match registry.get(&name) {
                        Some(block) => {
                            debug!(block = %name, "destination: replacing matched region");
                            for block_line in &block.lines {
                                out.push(substitute_tokens(block_line, replacements).into_owned());
                            }
                            extractions.extend(region.lines);
                        }
                        None => {
                            // No such block in the source; leave the
                            // region as it stands.
                            out.extend(region.lines);
                        }
                    }
                } else {
                    out.extend(region.lines);
                    warnings.push(Warning::DestinationBlockMismatch {
                        opened: region.name,
                        closed: name,
                    });
                }
            }
            None => match current.as_mut() {
                Some(region) => region.lines.push(line.to_string()),
                None => out.push(line.to_string()),
            },
        }
    }

    let destination = out.join("\n");
    let mut extractions = extractions.join("\n");
    if !extractions.is_empty() {
        extractions.push('\n');
    }

    Rewritten {
        destination,
        extractions,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_blocks;

    fn registry_from(source: &str) -> BlockRegistry {
        let (registry, warnings) = extract_blocks(source, true, None);
        assert!(warnings.is_empty());
        registry
    }

    #[test]
    fn unregistered_region_passes_through() {
        let destination = "before();\n// <<< token\ninterior();\n// >>> token\nafter();\n";
        let result = rewrite_destination(destination, &BlockRegistry::new(), &HashMap::new());

        assert_eq!(result.destination, destination);
        assert_eq!(result.extractions, "");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn matched_region_is_replaced_and_extracted() {
        let registry = registry_from("// <<< token\nnew();\n// >>> token\n");
        let destination = "// <<< token\nold();\n// >>> token\n";
        let result = rewrite_destination(destination, &registry, &HashMap::new());

        assert_eq!(result.destination, "// <<< token\nnew();\n// >>> token\n");
        assert_eq!(result.extractions, "// <<< token\nold();\n// >>> token\n");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn mismatched_region_passes_through_with_warning() {
        let registry = registry_from("// <<< token\nnew();\n// >>> token\n");
        let destination = "// <<< token\nold();\n// >>> wrong\n";
        let result = rewrite_destination(destination, &registry, &HashMap::new());

        assert_eq!(result.destination, destination);
        assert_eq!(result.extractions, "");
        assert_eq!(
            result.warnings,
            vec![Warning::DestinationBlockMismatch {
                opened: "token".to_string(),
                closed: "wrong".to_string(),
            }]
        );
    }

    #[test]
    fn unclosed_region_is_dropped_from_output() {
        let destination = "kept();\n// <<< token\nnever_flushed();\n";
        let result = rewrite_destination(destination, &BlockRegistry::new(), &HashMap::new());

        // The open marker and everything after it vanish. The trailing
        // empty element after the final newline is buffered too, so the
        // output ends without one.
        assert_eq!(result.destination, "kept();");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn same_block_fills_repeated_regions() {
        let registry = registry_from("// <<< token\nnew();\n// >>> token\n");
        let destination =
            "// <<< token\na();\n// >>> token\nmiddle();\n// <<< token\nb();\n// >>> token\n";
        let result = rewrite_destination(destination, &registry, &HashMap::new());

        assert_eq!(
            result.destination,
            "// <<< token\nnew();\n// >>> token\nmiddle();\n// <<< token\nnew();\n// >>> token\n"
        );
        assert_eq!(
            result.extractions,
            "// <<< token\na();\n// >>> token\n// <<< token\nb();\n// >>> token\n"
        );
    }

    #[test]
    fn stray_close_passes_through_and_warns_with_empty_open_name() {
        let destination = "kept();\n// >>> orphan\nalso_kept();\n";
        let result = rewrite_destination(destination, &BlockRegistry::new(), &HashMap::new());

        assert_eq!(result.destination, destination);
        assert_eq!(result.extractions, "");
        assert_eq!(
            result.warnings,
            vec![Warning::DestinationBlockMismatch {
                opened: String::new(),
                closed: "orphan".to_string(),
            }]
        );
    }

    #[test]
    fn reopening_drops_the_partially_buffered_region() {
        let registry = registry_from("// <<< token\nnew();\n// >>> token\n");
        let destination = "// <<< token\nlost();\n// <<< token\nold();\n// >>> token\n";
        let result = rewrite_destination(destination, &registry, &HashMap::new());

        // The first open marker and its buffered line vanish; only the
        // reopened region is replaced and extracted.
        assert_eq!(result.destination, "// <<< token\nnew();\n// >>> token\n");
        assert_eq!(result.extractions, "// <<< token\nold();\n// >>> token\n");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn tokens_are_substituted_in_inserted_lines() {
        let registry = registry_from("// <<< token\ncall(__ARG__);\n// >>> token\n");
        let destination = "// <<< token\nold();\n// >>> token\n";
        let replacements = HashMap::from([("ARG".to_string(), "42".to_string())]);
        let result = rewrite_destination(destination, &registry, &replacements);

        assert_eq!(
            result.destination,
            "// <<< token\ncall(42);\n// >>> token\n"
        );
    }
}
