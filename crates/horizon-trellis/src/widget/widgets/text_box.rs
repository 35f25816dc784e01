//! Multi-line text input.
//!
//! A [`TextBox`] edits a list of paragraphs. The bound value is the
//! paragraphs joined with newlines; host edits are split back on newlines.
//! Empty paragraphs survive the round trip, trailing ones included. The
//! empty text reads as no paragraphs.

use std::sync::Arc;

use horizon_trellis_core::{
    keys, Column, HostKind, Parameters, RenderDescriptor, Result, Value, ValueBinding,
};

use super::bindable::{parse_text, Bindable};
use super::parameters::TextParameters;
use crate::widget::{ConvertContext, Widget, WidgetBase};

/// A multi-line text input bound to a string value.
pub struct TextBox {
    base: WidgetBase,
    params: TextParameters,
    value: Bindable<String>,
}

impl TextBox {
    /// Create a text box from paragraphs, optionally bound to a `String` column.
    pub fn new<I, S>(paragraphs: I, params: TextParameters, column: Option<&Arc<dyn Column>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = paragraphs
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Ok(Self {
            base: WidgetBase::new(),
            params,
            value: Bindable::new(text, column, parse_text)?,
        })
    }

    /// The current text as paragraphs.
    pub fn paragraphs(&self) -> Vec<String> {
        self.value.binding().with(|text| {
            if text.is_empty() {
                Vec::new()
            } else {
                text.split('\n').map(str::to_string).collect()
            }
        })
    }

    /// The current text, paragraphs joined with newlines.
    pub fn text(&self) -> String {
        self.value.binding().value()
    }

    /// Replace the paragraphs and notify.
    pub fn set_paragraphs<I, S>(&self, paragraphs: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = paragraphs
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        self.value.binding().set_value(text);
    }

    /// The underlying binding.
    pub fn binding(&self) -> &ValueBinding<String> {
        self.value.binding()
    }
}

impl Widget for TextBox {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn host_kind(&self) -> HostKind {
        HostKind::TextBox
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn convert(&self, cx: &ConvertContext<'_>) -> Result<RenderDescriptor> {
        let mut attributes = self.params.project();
        if self.params.lines.is_none() {
            let lines = self.value.binding().with(|text| text.split('\n').count());
            attributes.insert("Lines".to_string(), Value::Int(lines as i64));
        }
        attributes.insert(keys::VALUE.to_string(), self.text().into());
        attributes.insert(keys::ON_CHANGE.to_string(), self.value.on_change().clone().into());
        Ok(cx.descriptor(self, attributes))
    }

    fn dispose(&mut self) {
        self.value.dispose();
        self.base.dispose();
    }
}

static_assertions::assert_impl_all!(TextBox: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_round_trip_through_text() {
        let text_box = TextBox::new(["first", "second"], TextParameters::default(), None).unwrap();
        assert_eq!(text_box.text(), "first\nsecond");
        assert_eq!(text_box.paragraphs(), vec!["first", "second"]);

        text_box.set_paragraphs(["only"]);
        assert_eq!(text_box.paragraphs(), vec!["only"]);
    }

    #[test]
    fn test_empty_paragraphs_are_kept() {
        let text_box =
            TextBox::new(["a", "", "b", ""], TextParameters::default(), None).unwrap();
        assert_eq!(text_box.text(), "a\n\nb\n");
        assert_eq!(text_box.paragraphs(), vec!["a", "", "b", ""]);

        text_box.set_paragraphs(Vec::<String>::new());
        assert!(text_box.paragraphs().is_empty());
    }
}
