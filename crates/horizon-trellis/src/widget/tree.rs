//! The widget arena.
//!
//! Every widget of a builder session lives in one [`WidgetTree`]. Nodes refer
//! to each other by [`NodeId`]: a parent link is a key into the arena, never
//! an owning pointer, and a destroyed node simply stops resolving.

use std::any::Any;

use horizon_trellis_core::logging::targets;
use horizon_trellis_core::{NodeId, RenderDescriptor, Result, TrellisError, TreeSource};
use slotmap::SlotMap;

use super::context::ConvertContext;
use super::traits::Widget;

/// Population state of a container node.
///
/// A container starts `Empty` and becomes `Populated` when it receives its
/// first child. It never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    /// No child has been added yet.
    Empty,
    /// At least one child has been added.
    Populated,
}

struct NodeEntry {
    widget: Box<dyn Widget>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    container: Option<ContainerState>,
}

/// Arena of widget nodes with parent/child links.
#[derive(Default)]
pub struct WidgetTree {
    nodes: SlotMap<NodeId, NodeEntry>,
}

impl WidgetTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a widget as a parentless node.
    pub fn insert(&mut self, widget: Box<dyn Widget>) -> NodeId {
        let container = widget.is_container().then_some(ContainerState::Empty);
        let kind = widget.host_kind();
        let id = self.nodes.insert(NodeEntry {
            widget,
            parent: None,
            children: Vec::new(),
            container,
        });
        tracing::trace!(target: targets::TREE, ?id, %kind, "inserted node");
        id
    }

    /// Whether `id` refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // =========================================================================
    // Widget Access
    // =========================================================================

    /// The widget at `id`.
    pub fn get(&self, id: NodeId) -> Option<&dyn Widget> {
        self.nodes.get(id).map(|entry| &*entry.widget)
    }

    /// The widget at `id`, mutably.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut (dyn Widget + 'static)> {
        self.nodes.get_mut(id).map(|entry| &mut *entry.widget as &mut (dyn Widget + 'static))
    }

    /// The widget at `id`, if it is a `T`.
    pub fn widget<T: Widget>(&self, id: NodeId) -> Option<&T> {
        let widget: &dyn Any = &*self.nodes.get(id)?.widget;
        widget.downcast_ref::<T>()
    }

    /// The widget at `id` mutably, if it is a `T`.
    pub fn widget_mut<T: Widget>(&mut self, id: NodeId) -> Option<&mut T> {
        let widget: &mut dyn Any = &mut *self.nodes.get_mut(id)?.widget;
        widget.downcast_mut::<T>()
    }

    fn entry(&self, id: NodeId) -> Result<&NodeEntry> {
        self.nodes.get(id).ok_or(TrellisError::InvalidNode(id))
    }

    /// Whether the node at `id` is hidden.
    pub fn is_hidden(&self, id: NodeId) -> Result<bool> {
        Ok(self.entry(id)?.widget.is_hidden())
    }

    // =========================================================================
    // Hierarchy
    // =========================================================================

    /// Parent of `id`, if any.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|entry| entry.parent)
    }

    /// Children of `id` in insertion order. Empty for unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|entry| entry.children.as_slice())
            .unwrap_or_default()
    }

    /// Population state of `id`, or `None` if it is not a container.
    pub fn container_state(&self, id: NodeId) -> Option<ContainerState> {
        self.nodes.get(id).and_then(|entry| entry.container)
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            ancestors.push(ancestor);
            current = self.parent(ancestor);
        }
        ancestors
    }

    /// Whether `ancestor` is `id` or one of its ancestors.
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        ancestor == id || self.ancestors(id).contains(&ancestor)
    }

    /// `root` and every descendant, parents before children.
    pub fn depth_first_preorder(&self, root: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(entry) = self.nodes.get(id) else {
                continue;
            };
            order.push(id);
            stack.extend(entry.children.iter().rev().copied());
        }
        order
    }

    /// Append `child` to `parent`'s children.
    ///
    /// A child that already has a parent is moved. Fails when either id is
    /// unknown, when `parent` cannot hold children, or when `child` is
    /// `parent` or one of its ancestors.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let parent_entry = self.entry(parent)?;
        self.entry(child)?;

        if parent_entry.container.is_none() {
            return Err(TrellisError::NotContainer {
                node: parent,
                kind: parent_entry.widget.host_kind(),
            });
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(TrellisError::invalid_hierarchy(format!(
                "adding {child:?} under {parent:?} would create a cycle"
            )));
        }

        self.detach(child);

        if let Some(entry) = self.nodes.get_mut(parent) {
            entry.children.push(child);
            entry.container = Some(ContainerState::Populated);
        }
        if let Some(entry) = self.nodes.get_mut(child) {
            entry.parent = Some(parent);
        }

        tracing::trace!(target: targets::TREE, ?parent, ?child, "attached child");
        Ok(())
    }

    /// Remove `id` from its parent's children, leaving it parentless.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.nodes.get_mut(id).and_then(|entry| entry.parent.take()) else {
            return;
        };
        if let Some(entry) = self.nodes.get_mut(parent) {
            entry.children.retain(|&c| c != id);
        }
        tracing::trace!(target: targets::TREE, ?parent, child = ?id, "detached child");
    }

    /// Destroy `id` and its whole subtree, children first.
    ///
    /// Each widget's `dispose` runs before it is dropped. Returns the number
    /// of nodes removed.
    #[tracing::instrument(name = "destroy", target = "horizon_trellis::tree", skip(self), level = "debug")]
    pub fn destroy(&mut self, id: NodeId) -> Result<usize> {
        self.entry(id)?;
        self.detach(id);

        let mut order = self.depth_first_preorder(id);
        order.reverse();

        let _span = tracing::trace_span!(target: targets::TREE, "dispose", count = order.len()).entered();
        for node in &order {
            if let Some(mut entry) = self.nodes.remove(*node) {
                entry.widget.dispose();
                tracing::trace!(target: targets::TREE, id = ?node, "destroyed node");
            }
        }
        Ok(order.len())
    }

    /// Dispose and drop every node.
    pub fn clear(&mut self) {
        for (_, entry) in self.nodes.iter_mut() {
            entry.widget.dispose();
        }
        self.nodes.clear();
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Convert the node at `id` with `focus` as the focused node.
    pub fn convert(&self, id: NodeId, focus: Option<NodeId>) -> Result<RenderDescriptor> {
        let entry = self.entry(id)?;
        entry.widget.convert(&ConvertContext::new(self, id, focus))
    }
}

impl TreeSource for WidgetTree {
    fn tree_roots(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, entry)| entry.parent.is_none())
            .map(|(id, _)| id)
            .collect()
    }

    fn tree_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id).to_vec()
    }

    fn tree_label(&self, id: NodeId) -> String {
        self.get(id)
            .map(|widget| widget.widget_base().name().to_string())
            .unwrap_or_default()
    }

    fn tree_kind(&self, id: NodeId) -> &'static str {
        self.get(id).map_or("?", |widget| widget.host_kind().as_str())
    }
}

impl std::fmt::Debug for WidgetTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetTree")
            .field("nodes", &self.nodes.len())
            .finish()
    }
}
