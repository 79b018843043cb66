//! Structural warnings produced by a merge run.
//!
//! Warnings are data, not errors. A malformed block or region degrades to
//! passthrough and the run keeps going; nothing in the engine fails.

/// A structural mismatch observed while scanning.
///
/// The `Display` output is the exact three-line message reported to the
/// diagnostics sink.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Warning {
    /// A source close marker's name did not match the open block's name.
    /// The offending block is discarded, not registered.
    #[error("In source: open and close blocks do not match!!\nOpened with {opened}\nClosed with {closed}")]
    SourceBlockMismatch { opened: String, closed: String },

    /// A destination close marker's name did not match the open region's
    /// name. The region passes through unchanged.
    #[error("In Destination: open and close blocks do not match!!\nOpened with {opened}\nClosed with {closed}")]
    DestinationBlockMismatch { opened: String, closed: String },
}

/// Render warnings as reportable text: messages joined by newlines, with a
/// trailing newline iff any warning is present.
pub fn render_warnings(warnings: &[Warning]) -> String {
    if warnings.is_empty() {
        return String::new();
    }
    let mut text = warnings
        .iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    text.push('\n');
    text
}
