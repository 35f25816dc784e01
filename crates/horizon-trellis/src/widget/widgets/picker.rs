//! Date and time pickers.
//!
//! One generic widget, [`Picker`], covers the three picker kinds; the value
//! type decides which host component it converts to. Use the aliases
//! [`DatePicker`], [`TimePicker`] and [`DateTimePicker`].
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use horizon_trellis::widget::widgets::{DatePicker, InputParameters};
//!
//! let due = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//! let picker = DatePicker::new(due, InputParameters::default(), None).unwrap();
//! assert_eq!(picker.value(), due);
//! ```

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use horizon_trellis_core::{
    keys, Column, HostKind, Parameters, RenderDescriptor, Result, ToValue, Value, ValueBinding,
};

use super::bindable::Bindable;
use super::parameters::InputParameters;
use crate::widget::{ConvertContext, Widget, WidgetBase};

/// A value type a [`Picker`] can edit.
pub trait PickerValue: ToValue + Clone + Send + Sync + 'static {
    /// The host component for this value type.
    const KIND: HostKind;

    /// Read a host-reported value. Text is parsed in ISO 8601 form.
    fn from_value(value: &Value) -> Option<Self>;
}

impl PickerValue for NaiveDate {
    const KIND: HostKind = HostKind::DatePicker;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Date(date) => Some(*date),
            Value::DateTime(dt) => Some(dt.date()),
            Value::Text(text) => text.parse().ok(),
            _ => None,
        }
    }
}

impl PickerValue for NaiveTime {
    const KIND: HostKind = HostKind::TimePicker;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Time(time) => Some(*time),
            Value::DateTime(dt) => Some(dt.time()),
            Value::Text(text) => text.parse().ok(),
            _ => None,
        }
    }
}

impl PickerValue for NaiveDateTime {
    const KIND: HostKind = HostKind::DateTimePicker;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::DateTime(dt) => Some(*dt),
            Value::Text(text) => text.parse().ok(),
            _ => None,
        }
    }
}

/// A date, time or date-time input bound to a value.
pub struct Picker<T: PickerValue> {
    base: WidgetBase,
    params: InputParameters,
    value: Bindable<T>,
}

/// Calendar date input.
pub type DatePicker = Picker<NaiveDate>;
/// Time-of-day input.
pub type TimePicker = Picker<NaiveTime>;
/// Combined date and time input.
pub type DateTimePicker = Picker<NaiveDateTime>;

impl<T: PickerValue> Picker<T> {
    /// Create a picker, optionally bound to a column of type `T`.
    pub fn new(value: T, params: InputParameters, column: Option<&Arc<dyn Column>>) -> Result<Self> {
        Ok(Self {
            base: WidgetBase::new(),
            params,
            value: Bindable::new(value, column, T::from_value)?,
        })
    }

    /// The current value.
    pub fn value(&self) -> T {
        self.value.binding().value()
    }

    /// Set the value and notify.
    pub fn set_value(&self, value: T) {
        self.value.binding().set_value(value);
    }

    /// The underlying binding.
    pub fn binding(&self) -> &ValueBinding<T> {
        self.value.binding()
    }
}

impl<T: PickerValue> Widget for Picker<T> {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn host_kind(&self) -> HostKind {
        T::KIND
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn convert(&self, cx: &ConvertContext<'_>) -> Result<RenderDescriptor> {
        let mut attributes = self.params.project();
        attributes.insert(
            keys::VALUE.to_string(),
            self.value.binding().with(|value| value.to_value()),
        );
        attributes.insert(keys::ON_CHANGE.to_string(), self.value.on_change().clone().into());
        Ok(cx.descriptor(self, attributes))
    }

    fn dispose(&mut self) {
        self.value.dispose();
        self.base.dispose();
    }
}

static_assertions::assert_impl_all!(DatePicker: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_values_parse() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(NaiveDate::from_value(&Value::Text("2024-02-29".into())), Some(date));
        assert_eq!(NaiveDate::from_value(&Value::Int(3)), None);

        let time = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        assert_eq!(NaiveTime::from_value(&Value::Text("09:30:00".into())), Some(time));
        assert_eq!(
            NaiveDateTime::from_value(&Value::Text("2024-02-29T09:30:00".into())),
            Some(date.and_time(time))
        );
    }

    #[test]
    fn test_kind_follows_value_type() {
        let time = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let picker = TimePicker::new(time, InputParameters::default(), None).unwrap();
        assert_eq!(picker.host_kind(), HostKind::TimePicker);
    }
}
