//! Logging and debugging facilities for Horizon Trellis.
//!
//! This module provides:
//! - Target names for filtering `tracing` output by subsystem
//! - Debug visualization for widget trees
//!
//! # Tracing Integration
//!
//! Horizon Trellis instruments tree mutation, binding updates, and rendering
//! with the `tracing` crate. Install a subscriber in your application to see
//! the output:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_trellis=debug")
//!         .init();
//! }
//! ```
//!
//! # Debug Visualization
//!
//! Anything that implements [`TreeSource`] can be printed with [`TreeDebug`]:
//!
//! ```ignore
//! use horizon_trellis_core::logging::{TreeDebug, TreeFormatOptions};
//!
//! let debug = TreeDebug::with_options(&builder, TreeFormatOptions::minimal());
//! println!("{debug}");
//! ```

use std::fmt::{self, Write as FmtWrite};

use crate::node::NodeId;

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_trellis_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_trellis_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "horizon_trellis_core::property";
    /// Value binding target.
    pub const BINDING: &str = "horizon_trellis_core::binding";
    /// Widget tree target.
    pub const TREE: &str = "horizon_trellis::tree";
    /// Builder session target.
    pub const BUILDER: &str = "horizon_trellis::builder";
    /// Descriptor conversion target.
    pub const RENDER: &str = "horizon_trellis::render";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact dash-prefixed lines.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show node ids.
    pub show_ids: bool,
    /// Whether to show host kinds.
    pub show_kinds: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_kinds: true,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for minimal output: names only.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_kinds: false,
            ..Default::default()
        }
    }
}

/// A hierarchy that can be walked for debug output.
pub trait TreeSource {
    /// Top-level nodes, in order.
    fn tree_roots(&self) -> Vec<NodeId>;

    /// Children of `id`, in order. Empty for unknown ids.
    fn tree_children(&self, id: NodeId) -> Vec<NodeId>;

    /// Display name of `id`. Empty when the node is unnamed.
    fn tree_label(&self, id: NodeId) -> String;

    /// Short kind name of `id`, shown when `show_kinds` is set.
    fn tree_kind(&self, id: NodeId) -> &'static str;
}

/// Debug utility for visualizing a widget tree.
pub struct TreeDebug<'a, S: TreeSource + ?Sized> {
    source: &'a S,
    options: TreeFormatOptions,
}

impl<'a, S: TreeSource + ?Sized> TreeDebug<'a, S> {
    /// Create a visualizer with default options.
    pub fn new(source: &'a S) -> Self {
        Self::with_options(source, TreeFormatOptions::default())
    }

    /// Create a visualizer with custom options.
    pub fn with_options(source: &'a S, options: TreeFormatOptions) -> Self {
        Self { source, options }
    }

    /// Format every root and its subtree.
    pub fn format_all(&self) -> String {
        let roots = self.source.tree_roots();
        let mut output = String::new();

        if roots.is_empty() {
            output.push_str("(empty)\n");
            return output;
        }

        let count = roots.len();
        for (i, root) in roots.into_iter().enumerate() {
            self.format_into(root, 0, i + 1 == count, &mut output);
        }
        output
    }

    /// Format a single subtree.
    pub fn format_subtree(&self, root: NodeId) -> String {
        let mut output = String::new();
        self.format_into(root, 0, true, &mut output);
        output
    }

    fn format_into(&self, id: NodeId, depth: usize, is_last: bool, output: &mut String) {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return;
        }

        output.push_str(&self.build_prefix(depth, is_last));

        let label = self.source.tree_label(id);
        output.push_str(if label.is_empty() { "(unnamed)" } else { &label });

        // Writing into a String cannot fail.
        if self.options.show_ids {
            let _ = write!(output, " [{id:?}]");
        }
        if self.options.show_kinds {
            let _ = write!(output, " ({})", self.source.tree_kind(id));
        }
        output.push('\n');

        let children = self.source.tree_children(id);
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            self.format_into(child, depth + 1, i + 1 == count, output);
        }
    }

    fn build_prefix(&self, depth: usize, is_last: bool) -> String {
        if depth == 0 {
            return String::new();
        }

        let (branch, tee, corner) = match self.options.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            TreeStyle::Compact => ("", "-", "-"),
        };

        let mut prefix = String::new();
        for _ in 0..(depth - 1) {
            prefix.push_str(branch);
            prefix.push_str(&" ".repeat(self.options.indent_size));
        }
        prefix.push_str(if is_last { corner } else { tee });
        prefix.push(' ');
        prefix
    }
}

impl<S: TreeSource + ?Sized> fmt::Display for TreeDebug<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    struct Fixture {
        names: SlotMap<NodeId, &'static str>,
        root: NodeId,
        children: Vec<NodeId>,
    }

    impl Fixture {
        fn new() -> Self {
            let mut names = SlotMap::with_key();
            let root = names.insert("form");
            let children = vec![names.insert("name"), names.insert("")];
            Self {
                names,
                root,
                children,
            }
        }
    }

    impl TreeSource for Fixture {
        fn tree_roots(&self) -> Vec<NodeId> {
            vec![self.root]
        }

        fn tree_children(&self, id: NodeId) -> Vec<NodeId> {
            if id == self.root {
                self.children.clone()
            } else {
                Vec::new()
            }
        }

        fn tree_label(&self, id: NodeId) -> String {
            self.names.get(id).copied().unwrap_or_default().to_string()
        }

        fn tree_kind(&self, _id: NodeId) -> &'static str {
            "Stack"
        }
    }

    #[test]
    fn test_minimal_ascii_tree() {
        let fixture = Fixture::new();
        let options = TreeFormatOptions {
            style: TreeStyle::Ascii,
            ..TreeFormatOptions::minimal()
        };
        let output = TreeDebug::with_options(&fixture, options).format_all();

        assert_eq!(output, "form\n+-- name\n`-- (unnamed)\n");
    }

    #[test]
    fn test_max_depth_cuts_children() {
        let fixture = Fixture::new();
        let options = TreeFormatOptions {
            max_depth: Some(0),
            show_ids: false,
            ..Default::default()
        };
        let output = TreeDebug::with_options(&fixture, options).to_string();

        assert_eq!(output, "form (Stack)\n");
    }
}
