//! Host-agnostic render output.
//!
//! Converting a widget tree produces a [`RenderDescriptor`] tree: for each node
//! the host component kind to instantiate, the attribute map to hand it, and
//! optionally the nested content to place inside it. The renderer that turns
//! descriptors into pixels or DOM is an external collaborator; nothing in this
//! crate depends on it.

use std::fmt;

use indexmap::IndexMap;

use crate::value::Value;

/// String-keyed attribute map, in insertion order.
pub type AttributeMap = IndexMap<String, Value>;

/// Attribute keys the engine itself writes.
///
/// Keys produced by parameter projection come from field names; these are the
/// ones injected during conversion.
pub mod keys {
    /// Nested content of a container.
    pub const CHILD_CONTENT: &str = "ChildContent";
    /// Inverse of the widget's enabled flag.
    pub const DISABLED: &str = "Disabled";
    /// Set on the focused input widget.
    pub const AUTO_FOCUS: &str = "AutoFocus";
    /// Current value of an input.
    pub const VALUE: &str = "Value";
    /// Host change callback.
    pub const ON_CHANGE: &str = "OnChange";
    /// Host click callback.
    pub const ON_CLICK: &str = "OnClick";
    /// Tab item list of a tab strip.
    pub const TABS_LIST: &str = "TabsList";
    /// Position of a tab item.
    pub const INDEX: &str = "Index";
    /// Header text of a tab item.
    pub const TEXT: &str = "Text";
    /// Column header.
    pub const TITLE: &str = "Title";
    /// Column width.
    pub const WIDTH: &str = "Width";
    /// Per-column filter value.
    pub const FILTER_VALUE: &str = "FilterValue";
    /// Per-column cell template.
    pub const TEMPLATE: &str = "Template";
    /// Grid row data.
    pub const DATA: &str = "Data";
    /// Grid column definitions.
    pub const COLUMNS: &str = "Columns";
    /// Inline style of the root layout.
    pub const STYLE: &str = "Style";
    /// Literal text content.
    pub const CONTENT: &str = "Content";
    /// Candidate display texts of a selection widget.
    pub const ITEMS: &str = "Items";
    /// Selected display text.
    pub const SELECTED_VALUE: &str = "SelectedValue";
    /// Selected candidate position.
    pub const SELECTED: &str = "Selected";
}

/// Host component kinds.
///
/// Each widget converts to exactly one primary kind; `Text` is used for
/// literal content nested inside other descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// The root flex container produced by a render pass.
    Layout,
    /// Literal text content.
    Text,
    /// Vertical stacking container.
    Stack,
    /// Clickable button.
    Button,
    /// Boolean check box.
    CheckBox,
    /// Date input.
    DatePicker,
    /// Time-of-day input.
    TimePicker,
    /// Combined date and time input.
    DateTimePicker,
    /// Modal dialog.
    Dialog,
    /// Static label.
    Label,
    /// Single-selection dropdown.
    DropDownList,
    /// Radio button group.
    Radio,
    /// Tab strip.
    Tabs,
    /// One tab of a tab strip.
    TabsItem,
    /// Single-line text input.
    TextField,
    /// Multi-line text input.
    TextBox,
    /// Tabular data view.
    DataGrid,
    /// One column of a data grid.
    DataGridColumn,
}

impl HostKind {
    /// The host-facing name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            HostKind::Layout => "Layout",
            HostKind::Text => "Text",
            HostKind::Stack => "Stack",
            HostKind::Button => "Button",
            HostKind::CheckBox => "CheckBox",
            HostKind::DatePicker => "DatePicker",
            HostKind::TimePicker => "TimePicker",
            HostKind::DateTimePicker => "DateTimePicker",
            HostKind::Dialog => "Dialog",
            HostKind::Label => "Label",
            HostKind::DropDownList => "DropDownList",
            HostKind::Radio => "Radio",
            HostKind::Tabs => "Tabs",
            HostKind::TabsItem => "TabsItem",
            HostKind::TextField => "TextField",
            HostKind::TextBox => "TextBox",
            HostKind::DataGrid => "DataGrid",
            HostKind::DataGridColumn => "DataGridColumn",
        }
    }

    /// Whether widgets of this kind may own child widgets.
    pub fn accepts_children(self) -> bool {
        matches!(self, HostKind::Stack | HostKind::Dialog)
    }
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the render output.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDescriptor {
    /// Host component to instantiate.
    pub kind: HostKind,
    /// Attributes handed to the host component.
    pub attributes: AttributeMap,
    /// Nested content, if any.
    pub child_content: Option<Vec<RenderDescriptor>>,
}

impl RenderDescriptor {
    /// A descriptor with no attributes and no content.
    pub fn new(kind: HostKind) -> Self {
        Self::with_attributes(kind, AttributeMap::new())
    }

    /// A descriptor carrying `attributes`.
    pub fn with_attributes(kind: HostKind, attributes: AttributeMap) -> Self {
        Self {
            kind,
            attributes,
            child_content: None,
        }
    }

    /// A literal text node.
    pub fn text(content: impl Into<String>) -> Self {
        let mut descriptor = Self::new(HostKind::Text);
        descriptor.set_attribute(keys::CONTENT, Value::Text(content.into()));
        descriptor
    }

    /// Attach nested content.
    pub fn with_child_content(mut self, content: Vec<RenderDescriptor>) -> Self {
        self.child_content = Some(content);
        self
    }

    /// Look up an attribute.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Insert or overwrite an attribute.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Nested content, empty when there is none.
    pub fn children(&self) -> &[RenderDescriptor] {
        self.child_content.as_deref().unwrap_or_default()
    }

    /// Every descriptor of `kind` in this subtree, depth-first, including self.
    ///
    /// Nested content is searched both in `child_content` and inside
    /// `Value::Content` attributes.
    pub fn find_all(&self, kind: HostKind) -> Vec<&RenderDescriptor> {
        let mut found = Vec::new();
        self.collect(kind, &mut found);
        found
    }

    fn collect<'a>(&'a self, kind: HostKind, found: &mut Vec<&'a RenderDescriptor>) {
        if self.kind == kind {
            found.push(self);
        }
        match &self.child_content {
            Some(children) => {
                for child in children {
                    child.collect(kind, found);
                }
            }
            None => {
                for value in self.attributes.values() {
                    if let Value::Content(content) = value {
                        for nested in content {
                            nested.collect(kind, found);
                        }
                    }
                }
            }
        }
    }
}
