//! The builder session.
//!
//! A [`GuiBuilder`] owns one widget tree and everything needed to turn it
//! into a render payload: the ordered list of roots, the focused node, the
//! most recently created node, the parentage rules and the session
//! configuration. There is one builder per UI session and no global
//! instance.
//!
//! # Example
//!
//! ```
//! use horizon_trellis::prelude::*;
//!
//! let mut gui = GuiBuilder::new();
//! let form = gui.create_stack(StackParameters::default());
//! let name = gui.create_text_field("", TextParameters::default(), None).unwrap();
//! gui.add_child(form, name).unwrap();
//!
//! let layout = gui.render().unwrap();
//! assert_eq!(layout.kind, HostKind::Layout);
//! assert_eq!(layout.children().len(), 1);
//! assert_eq!(gui.state(), BuilderState::Rendered);
//! ```

use std::fmt::Display;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use horizon_trellis_core::logging::{targets, TreeDebug, TreeSource};
use horizon_trellis_core::{
    keys, AttributeMap, Column, Filter, HostKind, NodeId, Record, RecordSource, RenderDescriptor,
    Result, Row, TrellisError, Value,
};

use crate::config::BuilderConfig;
use crate::rules::ParentageRule;
use crate::widget::widgets::{
    Button, ButtonParameters, CheckBox, DatePicker, DateTimePicker, DialogBox, DialogParameters,
    DropDown, DropDownParameters, Grid, InputParameters, Label, RadioList, RadioParameters,
    RecordDropDown, Stack, StackParameters, Tab, TabItem, TabParameters, TextBox, TextField,
    TextParameters, TimePicker,
};
use crate::widget::{Widget, WidgetTree};

/// Lifecycle of a builder session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderState {
    /// No nodes.
    #[default]
    Empty,
    /// Nodes exist and the tree changed since the last render.
    Populated,
    /// The last render succeeded and nothing changed since.
    Rendered,
}

/// A UI building session.
pub struct GuiBuilder {
    tree: WidgetTree,
    roots: Vec<NodeId>,
    focus: Option<NodeId>,
    current: Option<NodeId>,
    state: BuilderState,
    rules: Vec<Box<dyn ParentageRule>>,
    config: BuilderConfig,
}

impl Default for GuiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GuiBuilder {
    /// Create a session with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    /// Create a session with `config`.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            tree: WidgetTree::new(),
            roots: Vec::new(),
            focus: None,
            current: None,
            state: BuilderState::Empty,
            rules: Vec::new(),
            config,
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Register a parentage rule.
    pub fn add_rule(&mut self, rule: impl ParentageRule + 'static) {
        tracing::debug!(target: targets::BUILDER, rule = rule.name(), "parentage rule added");
        self.rules.push(Box::new(rule));
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// Root nodes in creation order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// The focused node. A node destroyed since it was focused reads as unset.
    pub fn focus(&self) -> Option<NodeId> {
        self.focus.filter(|&id| self.tree.contains(id))
    }

    /// The most recently created node, if it still exists.
    pub fn current(&self) -> Option<NodeId> {
        self.current.filter(|&id| self.tree.contains(id))
    }

    /// The widget tree.
    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    /// The widget at `id`, if it is a `T`.
    pub fn widget<T: Widget>(&self, id: NodeId) -> Option<&T> {
        self.tree.widget(id)
    }

    /// The widget at `id` mutably, if it is a `T`.
    pub fn widget_mut<T: Widget>(&mut self, id: NodeId) -> Option<&mut T> {
        let widget = self.tree.widget_mut(id)?;
        if self.state == BuilderState::Rendered {
            self.state = BuilderState::Populated;
        }
        Some(widget)
    }

    /// The tree rendered as indented text, roots in creation order.
    pub fn dump_tree(&self) -> String {
        TreeDebug::new(self).format_all()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    fn touch(&mut self) {
        self.state = BuilderState::Populated;
    }

    fn register(&mut self, widget: Box<dyn Widget>) -> NodeId {
        let kind = widget.host_kind();
        let id = self.tree.insert(widget);
        self.roots.push(id);
        self.current = Some(id);
        self.touch();
        tracing::debug!(target: targets::BUILDER, ?id, %kind, "created widget");
        id
    }

    /// Insert an arbitrary widget as a new root.
    pub fn add_component(&mut self, widget: impl Widget) -> NodeId {
        self.register(Box::new(widget))
    }

    /// Move `child` under the container `parent`.
    ///
    /// The child stops being a root. Parentage rules run first; the tree is
    /// unchanged when any of them, or the tree itself, rejects the edge.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        for id in [parent, child] {
            if !self.tree.contains(id) {
                return Err(TrellisError::InvalidNode(id));
            }
        }
        self.check_rules(parent, child)?;
        self.tree.add_child(parent, child)?;
        self.roots.retain(|&root| root != child);
        self.touch();
        Ok(())
    }

    /// Mark `id` as the focused node.
    pub fn set_focus(&mut self, id: NodeId) -> Result<()> {
        if !self.tree.contains(id) {
            return Err(TrellisError::InvalidNode(id));
        }
        self.focus = Some(id);
        self.touch();
        Ok(())
    }

    /// Destroy `id` and its subtree. Returns the number of nodes removed.
    pub fn destroy(&mut self, id: NodeId) -> Result<usize> {
        let removed = self.tree.destroy(id)?;
        self.roots.retain(|&root| root != id);
        self.state = if self.tree.is_empty() {
            BuilderState::Empty
        } else {
            BuilderState::Populated
        };
        Ok(removed)
    }

    /// Dispose every node and reset the session.
    pub fn clear(&mut self) {
        let count = self.tree.len();
        self.tree.clear();
        self.roots.clear();
        self.focus = None;
        self.current = None;
        self.state = BuilderState::Empty;
        tracing::debug!(target: targets::BUILDER, count, "cleared session");
    }

    fn check_rules(&self, parent: NodeId, child: NodeId) -> Result<()> {
        for rule in &self.rules {
            if let Err(err) = rule.check(&self.tree, parent, child) {
                tracing::debug!(
                    target: targets::BUILDER,
                    rule = rule.name(),
                    ?parent,
                    ?child,
                    %err,
                    "parentage rule rejected edge"
                );
                return Err(err);
            }
        }
        Ok(())
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Run the parentage rules over every edge under `root`.
    fn validate(&self, root: NodeId) -> Result<()> {
        if self.rules.is_empty() {
            return Ok(());
        }
        for parent in self.tree.depth_first_preorder(root) {
            for &child in self.tree.children(parent) {
                self.check_rules(parent, child)?;
            }
        }
        Ok(())
    }

    /// Convert the whole tree into one `Layout` descriptor.
    ///
    /// Each visible root is validated and converted in order, with itself as
    /// focus. The session focus is bookkeeping only and does not reach the
    /// descriptors. The tree is only read, so a failure leaves the session as
    /// it was.
    #[tracing::instrument(target = "horizon_trellis::render", skip(self), level = "debug")]
    pub fn render(&mut self) -> Result<RenderDescriptor> {
        let mut content = Vec::with_capacity(self.roots.len());
        for &root in &self.roots {
            if self.tree.is_hidden(root)? {
                continue;
            }
            self.validate(root)?;
            content.push(self.tree.convert(root, Some(root))?);
        }

        let mut attributes = AttributeMap::with_capacity(2);
        attributes.insert(
            keys::STYLE.to_string(),
            Value::Text(self.config.layout_style.clone()),
        );
        let mut layout = RenderDescriptor::with_attributes(HostKind::Layout, attributes);
        if !content.is_empty() {
            layout.set_attribute(keys::CHILD_CONTENT, content.clone());
            layout = layout.with_child_content(content);
        }

        self.state = BuilderState::Rendered;
        tracing::debug!(
            target: targets::RENDER,
            roots = layout.children().len(),
            "rendered layout"
        );
        Ok(layout)
    }

    // =========================================================================
    // Widget Factories
    // =========================================================================

    /// Create a stack container.
    pub fn create_stack(&mut self, params: StackParameters) -> NodeId {
        self.register(Box::new(Stack::new(params)))
    }

    /// Create a button.
    pub fn create_button(&mut self, params: ButtonParameters) -> NodeId {
        self.register(Box::new(Button::new(params)))
    }

    /// Create a check box, optionally bound to a `bool` column.
    pub fn create_check_box(
        &mut self,
        checked: bool,
        params: InputParameters,
        column: Option<&Arc<dyn Column>>,
    ) -> Result<NodeId> {
        let widget = CheckBox::new(checked, params, column)?;
        Ok(self.register(Box::new(widget)))
    }

    pub fn create_date_picker(
        &mut self,
        value: NaiveDate,
        params: InputParameters,
        column: Option<&Arc<dyn Column>>,
    ) -> Result<NodeId> {
        let widget = DatePicker::new(value, params, column)?;
        Ok(self.register(Box::new(widget)))
    }

    pub fn create_time_picker(
        &mut self,
        value: NaiveTime,
        params: InputParameters,
        column: Option<&Arc<dyn Column>>,
    ) -> Result<NodeId> {
        let widget = TimePicker::new(value, params, column)?;
        Ok(self.register(Box::new(widget)))
    }

    pub fn create_date_time_picker(
        &mut self,
        value: NaiveDateTime,
        params: InputParameters,
        column: Option<&Arc<dyn Column>>,
    ) -> Result<NodeId> {
        let widget = DateTimePicker::new(value, params, column)?;
        Ok(self.register(Box::new(widget)))
    }

    /// Create a dialog container.
    pub fn create_dialog_box<I, S>(
        &mut self,
        title: impl Into<String>,
        paragraphs: I,
        params: DialogParameters,
    ) -> NodeId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.register(Box::new(DialogBox::new(title, paragraphs, params)))
    }

    /// Create a text label.
    pub fn create_label(&mut self, text: impl Into<String>) -> NodeId {
        self.register(Box::new(Label::new(text)))
    }

    /// Create a dropdown with `default` selected.
    pub fn create_drop_down<T>(
        &mut self,
        default: T,
        values: Vec<T>,
        params: DropDownParameters,
        column: Option<&Arc<dyn Column>>,
    ) -> Result<NodeId>
    where
        T: Clone + PartialEq + Display + Send + Sync + 'static,
    {
        let widget = DropDown::new(default, values, params, column)?;
        Ok(self.register(Box::new(widget)))
    }

    /// Create a dropdown over the records of `source` matching `filter`,
    /// displayed through `display_column`. The first record is selected.
    pub fn create_record_drop_down(
        &mut self,
        source: &dyn RecordSource,
        filter: &Filter,
        display_column: impl Into<String>,
        params: DropDownParameters,
    ) -> Result<NodeId> {
        let widget = RecordDropDown::from_source(source, filter, display_column, params)?;
        Ok(self.register(Box::new(widget)))
    }

    /// Create a radio list with `default` selected.
    pub fn create_radio_list<T>(
        &mut self,
        values: Vec<T>,
        default: T,
        params: RadioParameters,
        column: Option<&Arc<dyn Column>>,
    ) -> Result<NodeId>
    where
        T: Clone + PartialEq + Display + Send + Sync + 'static,
    {
        let widget = RadioList::new(values, default, params, column)?;
        Ok(self.register(Box::new(widget)))
    }

    /// Create a tab strip from `(header, content)` pairs.
    pub fn create_tab<I, T>(&mut self, items: I, params: TabParameters) -> NodeId
    where
        I: IntoIterator<Item = T>,
        T: Into<TabItem>,
    {
        self.register(Box::new(Tab::new(items, params)))
    }

    pub fn create_text_field(
        &mut self,
        text: impl Into<String>,
        params: TextParameters,
        column: Option<&Arc<dyn Column>>,
    ) -> Result<NodeId> {
        let widget = TextField::new(text, params, column)?;
        Ok(self.register(Box::new(widget)))
    }

    pub fn create_text_box<I, S>(
        &mut self,
        paragraphs: I,
        params: TextParameters,
        column: Option<&Arc<dyn Column>>,
    ) -> Result<NodeId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let widget = TextBox::new(paragraphs, params, column)?;
        Ok(self.register(Box::new(widget)))
    }

    fn configured(&self, grid: Grid) -> Grid {
        grid.with_column_width(self.config.column_width.clone())
    }

    /// Create a grid over keyed rows, with the configured grid defaults.
    pub fn create_grid(&mut self, rows: Vec<Row>) -> NodeId {
        let grid = self.configured(Grid::new(rows, self.config.grid.clone()));
        self.register(Box::new(grid))
    }

    /// Create a grid over structured records.
    pub fn create_record_grid(&mut self, records: Vec<Arc<dyn Record>>) -> NodeId {
        let grid = self.configured(Grid::from_records(records, self.config.grid.clone()));
        self.register(Box::new(grid))
    }

    /// Create a grid over structured records showing only `columns`, in
    /// the given order, instead of deriving columns from the first record.
    pub fn create_record_grid_with_columns(
        &mut self,
        records: Vec<Arc<dyn Record>>,
        columns: &[Arc<dyn Column>],
    ) -> NodeId {
        let mut grid = self.configured(Grid::from_records(records, self.config.grid.clone()));
        grid.add_columns_from(columns);
        self.register(Box::new(grid))
    }

    /// Create a grid over the records of `source` matching `filter`.
    ///
    /// The filter's predicates become the columns' filter values.
    pub fn create_filtered_grid(&mut self, source: &dyn RecordSource, filter: &Filter) -> NodeId {
        let grid = self.configured(Grid::from_source(source, filter, self.config.grid.clone()));
        self.register(Box::new(grid))
    }
}

impl TreeSource for GuiBuilder {
    fn tree_roots(&self) -> Vec<NodeId> {
        self.roots.clone()
    }

    fn tree_children(&self, id: NodeId) -> Vec<NodeId> {
        self.tree.tree_children(id)
    }

    fn tree_label(&self, id: NodeId) -> String {
        self.tree.tree_label(id)
    }

    fn tree_kind(&self, id: NodeId) -> &'static str {
        self.tree.tree_kind(id)
    }
}

impl std::fmt::Debug for GuiBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuiBuilder")
            .field("state", &self.state)
            .field("nodes", &self.tree.len())
            .field("roots", &self.roots)
            .field("focus", &self.focus())
            .field("rules", &self.rules.len())
            .finish()
    }
}

static_assertions::assert_impl_all!(GuiBuilder: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::rule_fn;

    #[test]
    fn test_state_machine() {
        let mut gui = GuiBuilder::new();
        assert_eq!(gui.state(), BuilderState::Empty);

        let label = gui.create_label("hello");
        assert_eq!(gui.state(), BuilderState::Populated);

        gui.render().unwrap();
        assert_eq!(gui.state(), BuilderState::Rendered);

        gui.widget_mut::<Label>(label).unwrap().set_text("changed");
        assert_eq!(gui.state(), BuilderState::Populated);

        gui.clear();
        assert_eq!(gui.state(), BuilderState::Empty);
    }

    #[test]
    fn test_stale_focus_reads_as_unset() {
        let mut gui = GuiBuilder::new();
        let label = gui.create_label("soon gone");
        gui.set_focus(label).unwrap();
        assert_eq!(gui.focus(), Some(label));

        gui.destroy(label).unwrap();
        assert_eq!(gui.focus(), None);
        assert_eq!(gui.current(), None);
        assert!(gui.roots().is_empty());
    }

    #[test]
    fn test_add_child_removes_root() {
        let mut gui = GuiBuilder::new();
        let form = gui.create_stack(StackParameters::default());
        let label = gui.create_label("inside");
        assert_eq!(gui.roots(), &[form, label]);
        assert_eq!(gui.current(), Some(label));

        gui.add_child(form, label).unwrap();
        assert_eq!(gui.roots(), &[form]);
    }

    #[test]
    fn test_rules_run_on_attach_and_render() {
        let mut gui = GuiBuilder::new();
        let form = gui.create_stack(StackParameters::default());
        let dialog = gui.create_dialog_box("Title", ["body"], DialogParameters::default());
        gui.add_child(form, dialog).unwrap();

        gui.add_rule(rule_fn("no-dialogs-in-stacks", |tree, parent, child| {
            let kind = |id| tree.get(id).map(|w| w.host_kind());
            if kind(parent) == Some(HostKind::Stack) && kind(child) == Some(HostKind::Dialog) {
                return Err(TrellisError::invalid_hierarchy("dialog inside stack"));
            }
            Ok(())
        }));

        assert!(matches!(
            gui.render(),
            Err(TrellisError::InvalidHierarchy { .. })
        ));
        assert_eq!(gui.state(), BuilderState::Populated);

        let other = gui.create_dialog_box("Other", Vec::<String>::new(), DialogParameters::default());
        assert!(gui.add_child(form, other).is_err());
        assert_eq!(gui.roots(), &[form, other]);
    }

    #[test]
    fn test_dump_tree_follows_roots() {
        let mut gui = GuiBuilder::new();
        let form = gui.create_stack(StackParameters::default());
        let label = gui.create_label("x");
        gui.add_child(form, label).unwrap();

        let dump = gui.dump_tree();
        assert!(dump.contains("Stack"));
        assert!(dump.contains("Label"));
    }
}
