//! Conversion context.
//!
//! A [`ConvertContext`] is handed to [`Widget::convert`](super::Widget::convert).
//! It knows which node is being converted, which node holds focus for this
//! pass, and how to reach the node's children in the tree.

use horizon_trellis_core::{
    keys, AttributeMap, NodeId, RenderDescriptor, Result, Value,
};

use super::traits::Widget;
use super::tree::WidgetTree;

/// Context for converting one node.
#[derive(Clone, Copy)]
pub struct ConvertContext<'a> {
    tree: &'a WidgetTree,
    id: NodeId,
    focus: Option<NodeId>,
}

impl<'a> ConvertContext<'a> {
    pub(crate) fn new(tree: &'a WidgetTree, id: NodeId, focus: Option<NodeId>) -> Self {
        Self { tree, id, focus }
    }

    /// The node being converted.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The focused node for this conversion pass.
    pub fn focus(&self) -> Option<NodeId> {
        self.focus
    }

    /// Whether the node being converted holds focus.
    pub fn is_focused(&self) -> bool {
        self.focus == Some(self.id)
    }

    /// The tree the node lives in.
    pub fn tree(&self) -> &'a WidgetTree {
        self.tree
    }

    /// Convert every visible child, in insertion order.
    ///
    /// All children are resolved before the result is returned; the first
    /// failure aborts the batch.
    pub fn convert_children(&self) -> Result<Vec<RenderDescriptor>> {
        let mut converted = Vec::new();
        for &child in self.tree.children(self.id) {
            if self.tree.is_hidden(child)? {
                continue;
            }
            converted.push(self.tree.convert(child, self.focus)?);
        }
        Ok(converted)
    }

    /// Build a descriptor for `widget` from its projected attributes.
    ///
    /// Adds `Disabled`, and `AutoFocus` when a focusable widget holds focus.
    pub fn descriptor(&self, widget: &dyn Widget, attributes: AttributeMap) -> RenderDescriptor {
        let mut descriptor = RenderDescriptor::with_attributes(widget.host_kind(), attributes);
        widget.widget_base().decorate(&mut descriptor);
        if widget.is_focusable() && self.is_focused() {
            descriptor.set_attribute(keys::AUTO_FOCUS, true);
        }
        descriptor
    }

    /// Fold the converted children into a container's descriptor.
    ///
    /// With at least one visible child, the children are written under
    /// `ChildContent` and attached as the descriptor's child content. With
    /// none, the key is left out entirely.
    pub fn compose(&self, mut descriptor: RenderDescriptor) -> Result<RenderDescriptor> {
        let children = self.convert_children()?;
        if children.is_empty() {
            descriptor.attributes.shift_remove(keys::CHILD_CONTENT);
            return Ok(descriptor);
        }

        descriptor
            .attributes
            .insert(keys::CHILD_CONTENT.to_string(), Value::Content(children.clone()));
        Ok(descriptor.with_child_content(children))
    }
}
