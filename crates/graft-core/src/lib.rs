//! Block transplanting engine for graft.
//!
//! Merges named, comment-delimited blocks from a source document into
//! matching placeholder regions of a destination document:
//!
//! ```text
//! // <<< block name
//! content to insert
//! // >>> block name
//! ```
//!
//! The engine is purely line-based string processing. It knows nothing
//! about the language of the embedded content beyond the two accepted
//! comment prefixes (`//` and `#`). Everything displaced from the
//! destination is kept in an extraction log so a merge can be reverted by
//! feeding the extractions back as the next source.

pub mod block;
pub mod extract;
pub mod marker;
pub mod merge;
pub mod rewrite;
pub mod subst;
pub mod warning;

pub use block::{Block, BlockRegistry};
pub use extract::extract_blocks;
pub use marker::Marker;
pub use merge::{MergeOptions, MergeResult, merge};
pub use rewrite::{Rewritten, rewrite_destination};
pub use subst::substitute_tokens;
pub use warning::{Warning, render_warnings};
