//! Parentage rules.
//!
//! A [`ParentageRule`] vets parent/child pairs beyond what the tree itself
//! enforces (container capability and cycle freedom). Rules registered on a
//! [`GuiBuilder`](crate::GuiBuilder) run when a child is attached and again
//! for every edge before rendering. No rules are built in.
//!
//! ```
//! use horizon_trellis::rules::rule_fn;
//! use horizon_trellis_core::{HostKind, TrellisError};
//!
//! let no_nested_dialogs = rule_fn("no-nested-dialogs", |tree, parent, child| {
//!     let kind = |id| tree.get(id).map(|w| w.host_kind());
//!     if kind(parent) == Some(HostKind::Dialog) && kind(child) == Some(HostKind::Dialog) {
//!         return Err(TrellisError::invalid_hierarchy("dialogs cannot nest"));
//!     }
//!     Ok(())
//! });
//! # let _ = no_nested_dialogs;
//! ```

use horizon_trellis_core::{NodeId, Result};

use crate::widget::WidgetTree;

/// A check run on every parent/child edge.
pub trait ParentageRule: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Accept or reject `child` under `parent`.
    ///
    /// Rejections should use `TrellisError::InvalidHierarchy`.
    fn check(&self, tree: &WidgetTree, parent: NodeId, child: NodeId) -> Result<()>;
}

/// A rule backed by a closure.
pub struct FnRule<F> {
    name: String,
    check: F,
}

impl<F> ParentageRule for FnRule<F>
where
    F: Fn(&WidgetTree, NodeId, NodeId) -> Result<()> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, tree: &WidgetTree, parent: NodeId, child: NodeId) -> Result<()> {
        (self.check)(tree, parent, child)
    }
}

/// Wrap a closure as a named rule.
pub fn rule_fn<F>(name: impl Into<String>, check: F) -> FnRule<F>
where
    F: Fn(&WidgetTree, NodeId, NodeId) -> Result<()> + Send + Sync,
{
    FnRule {
        name: name.into(),
        check,
    }
}
