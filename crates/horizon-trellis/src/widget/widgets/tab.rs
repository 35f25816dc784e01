//! Tab strip.
//!
//! A [`Tab`] shows a list of `(header, content)` pairs. Each pair converts to
//! a `TabsItem` descriptor carrying its position (`Index`), its header
//! (`Text`) and its body as a text node under `ChildContent`. The item list
//! itself goes under `TabsList`.

use horizon_trellis_core::{
    keys, AttributeMap, HostKind, Parameters, RenderDescriptor, Result, Value,
};

use super::parameters::TabParameters;
use crate::widget::{ConvertContext, Widget, WidgetBase};

/// One tab: header text and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    /// Header shown in the strip.
    pub header: String,
    /// Body text shown when the tab is active.
    pub content: String,
}

impl TabItem {
    /// Create a tab item.
    pub fn new(header: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            content: content.into(),
        }
    }

    fn to_descriptor(&self, index: usize) -> RenderDescriptor {
        let body = vec![RenderDescriptor::text(self.content.clone())];

        let mut attributes = AttributeMap::with_capacity(3);
        attributes.insert(keys::INDEX.to_string(), Value::Int(index as i64));
        attributes.insert(keys::TEXT.to_string(), Value::Text(self.header.clone()));
        attributes.insert(keys::CHILD_CONTENT.to_string(), Value::Content(body.clone()));

        RenderDescriptor::with_attributes(HostKind::TabsItem, attributes).with_child_content(body)
    }
}

impl<H: Into<String>, C: Into<String>> From<(H, C)> for TabItem {
    fn from((header, content): (H, C)) -> Self {
        Self::new(header, content)
    }
}

/// A tab strip.
#[derive(Debug, Default)]
pub struct Tab {
    base: WidgetBase,
    params: TabParameters,
    items: Vec<TabItem>,
}

impl Tab {
    /// Create a tab strip from `(header, content)` pairs.
    pub fn new<I, T>(items: I, params: TabParameters) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TabItem>,
    {
        Self {
            base: WidgetBase::new(),
            params,
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// The tab items in order.
    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    /// Append a tab.
    pub fn push(&mut self, item: impl Into<TabItem>) {
        self.items.push(item.into());
    }
}

impl Widget for Tab {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn host_kind(&self) -> HostKind {
        HostKind::Tabs
    }

    fn convert(&self, cx: &ConvertContext<'_>) -> Result<RenderDescriptor> {
        let list: Vec<RenderDescriptor> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| item.to_descriptor(index))
            .collect();

        let mut attributes = self.params.project();
        attributes.insert(keys::TABS_LIST.to_string(), Value::Content(list));
        Ok(cx.descriptor(self, attributes))
    }
}

static_assertions::assert_impl_all!(Tab: Send, Sync);
