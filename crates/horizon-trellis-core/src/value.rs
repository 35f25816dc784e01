//! Values carried by attribute maps.
//!
//! The host renderer is weakly typed: every attribute is looked up by name and
//! interpreted by the concrete host widget. [`Value`] is the closed set of
//! payloads the engine can hand over, from plain scalars to render-time-only
//! constructs (nested content, cell templates, callbacks) that the host
//! treats opaquely.
//!
//! [`ToValue`] is the conversion every configuration field goes through during
//! projection, and [`ValueType`] is the runtime type identifier used to check
//! that a widget and the column it is bound to agree on a value type.

use std::any::{type_name, TypeId};
use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::IndexMap;

use crate::data::Record;
use crate::descriptor::RenderDescriptor;

/// A keyed grid row: field name to cell value, in field order.
pub type Row = IndexMap<String, Value>;

/// A weakly typed attribute value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// No value. Also the placeholder for a missing grid cell.
    #[default]
    None,
    /// Boolean flag.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Floating point number.
    ///
    /// Equality follows `f64`: a `NaN` cell makes the enclosing row, and any
    /// descriptor carrying it, unequal even to itself.
    Float(f64),
    /// Free-form text.
    Text(String),
    /// Calendar date.
    Date(NaiveDate),
    /// Time of day.
    Time(NaiveTime),
    /// Date and time of day.
    DateTime(NaiveDateTime),
    /// Ordered list of values.
    List(Vec<Value>),
    /// A keyed row, as used for grid data.
    Map(Row),
    /// Nested content produced by converting child nodes.
    Content(Vec<RenderDescriptor>),
    /// Per-row cell lookup for a grid column.
    Template(CellTemplate),
    /// Host-invoked callback.
    Callback(Callback),
    /// Structured records, passed through by reference.
    Records(RecordSet),
}

impl Value {
    /// Returns `true` for [`Value::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns `true` for anything but [`Value::None`].
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// The text payload, if this is [`Value::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The integer payload, if this is [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean payload, if this is [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The list payload, if this is [`Value::List`].
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// The nested content, if this is [`Value::Content`].
    pub fn as_content(&self) -> Option<&[RenderDescriptor]> {
        match self {
            Value::Content(content) => Some(content),
            _ => None,
        }
    }

    /// The cell template, if this is [`Value::Template`].
    pub fn as_template(&self) -> Option<&CellTemplate> {
        match self {
            Value::Template(template) => Some(template),
            _ => None,
        }
    }

    /// The callback, if this is [`Value::Callback`].
    pub fn as_callback(&self) -> Option<&Callback> {
        match self {
            Value::Callback(callback) => Some(callback),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::Date(d) => write!(f, "{d}"),
            Value::Time(t) => write!(f, "{t}"),
            Value::DateTime(dt) => write!(f, "{dt}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(row) => {
                f.write_str("{")?;
                for (i, (key, value)) in row.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Content(content) => write!(f, "<{} nodes>", content.len()),
            Value::Template(template) => write!(f, "<template {}>", template.field()),
            Value::Callback(_) => f.write_str("<callback>"),
            Value::Records(records) => write!(f, "<{} records>", records.len()),
        }
    }
}

// ============================================================================
// Render-time constructs
// ============================================================================

/// Produces the content of one grid cell from a row.
///
/// A template is bound to a field name. Looking up a row that lacks the field
/// yields [`Value::None`]; sparse rows are legal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellTemplate {
    field: String,
}

impl CellTemplate {
    /// Create a template reading `field`.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// The field this template reads.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Cell content for a keyed row.
    pub fn render_row(&self, row: &Row) -> Value {
        row.get(&self.field).cloned().unwrap_or_default()
    }

    /// Cell content for a structured record, read from its column's current value.
    pub fn render_record(&self, record: &dyn Record) -> Value {
        record
            .column(&self.field)
            .map(|column| column.current_value())
            .unwrap_or_default()
    }

    /// Cell content for any row-shaped value (`Map` or a single record set entry).
    pub fn render(&self, row: &Value) -> Value {
        match row {
            Value::Map(row) => self.render_row(row),
            Value::Records(records) if records.len() == 1 => records
                .iter()
                .next()
                .map(|record| self.render_record(record.as_ref()))
                .unwrap_or_default(),
            _ => Value::None,
        }
    }
}

/// A host-invoked callback.
///
/// The host calls it with whatever the native widget reports (a display
/// string for selections, a bool for check boxes, `None` for clicks).
/// Two callbacks are equal only if they are the same allocation.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn(&Value) + Send + Sync>);

impl Callback {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the callback.
    pub fn invoke(&self, value: &Value) {
        (self.0)(value)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Records handed to the host by reference.
///
/// Equality is identity of every record, in order.
#[derive(Clone, Default)]
pub struct RecordSet(Vec<Arc<dyn Record>>);

impl RecordSet {
    /// Wrap a list of records.
    pub fn new(records: Vec<Arc<dyn Record>>) -> Self {
        Self(records)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the records in order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Record>> {
        self.0.iter()
    }
}

impl PartialEq for RecordSet {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(&other.0)
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }
}

impl fmt::Debug for RecordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecordSet").field(&self.0.len()).finish()
    }
}

// ============================================================================
// Runtime type identifiers
// ============================================================================

/// A runtime identifier for a value type.
///
/// Columns declare one; typed widgets compare theirs against it at
/// construction time.
#[derive(Debug, Clone, Copy)]
pub struct ValueType {
    id: TypeId,
    name: &'static str,
}

impl ValueType {
    /// The identifier for `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The Rust type name, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this identifies `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for ValueType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ValueType {}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// ============================================================================
// Conversions
// ============================================================================

/// Conversion of a configuration field into an attribute value.
///
/// Every field of a `#[derive(Parameters)]` struct must implement this.
pub trait ToValue {
    /// Produce the attribute value for this field.
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! int_to_value {
    ($($ty:ty),*) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

int_to_value!(i8, i16, i32, i64, u8, u16, u32);

/// Counts above `i64::MAX` saturate to `i64::MAX`.
impl ToValue for usize {
    fn to_value(&self) -> Value {
        Value::Int(i64::try_from(*self).unwrap_or(i64::MAX))
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl ToValue for NaiveDate {
    fn to_value(&self) -> Value {
        Value::Date(*self)
    }
}

impl ToValue for NaiveTime {
    fn to_value(&self) -> Value {
        Value::Time(*self)
    }
}

impl ToValue for NaiveDateTime {
    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }
}

impl ToValue for Callback {
    fn to_value(&self) -> Value {
        Value::Callback(self.clone())
    }
}

impl ToValue for CellTemplate {
    fn to_value(&self) -> Value {
        Value::Template(self.clone())
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::None, ToValue::to_value)
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<NaiveTime> for Value {
    fn from(value: NaiveTime) -> Self {
        Value::Time(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::DateTime(value)
    }
}

impl From<Row> for Value {
    fn from(value: Row) -> Self {
        Value::Map(value)
    }
}

impl From<Vec<RenderDescriptor>> for Value {
    fn from(value: Vec<RenderDescriptor>) -> Self {
        Value::Content(value)
    }
}

impl From<Callback> for Value {
    fn from(value: Callback) -> Self {
        Value::Callback(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::None, Into::into)
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_option_projects_to_none() {
        let missing: Option<String> = None;
        assert_eq!(missing.to_value(), Value::None);
        assert_eq!(Some(3u8).to_value(), Value::Int(3));
    }

    #[test]
    fn test_vec_projects_to_list() {
        let sizes: Vec<i32> = vec![2, 10, 20];
        assert_eq!(
            sizes.to_value(),
            Value::List(vec![Value::Int(2), Value::Int(10), Value::Int(20)])
        );
    }

    #[test]
    fn test_template_missing_field_yields_none() {
        let mut row = Row::new();
        row.insert("Name".into(), Value::from("B"));

        let age = CellTemplate::new("Age");
        assert_eq!(age.render_row(&row), Value::None);
        assert_eq!(CellTemplate::new("Name").render(&Value::Map(row)), Value::from("B"));
    }

    #[test]
    fn test_callback_equality_is_identity() {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = hits.clone();
        let a = Callback::new(move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });
        let b = a.clone();
        let c = Callback::new(|_| {});

        assert_eq!(a, b);
        assert_ne!(a, c);

        b.invoke(&Value::None);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_value_type_identity() {
        assert_eq!(ValueType::of::<String>(), ValueType::of::<String>());
        assert_ne!(ValueType::of::<String>(), ValueType::of::<i64>());
        assert!(ValueType::of::<bool>().is::<bool>());
        assert_eq!(ValueType::of::<i32>().to_string(), "i32");
    }

    #[test]
    fn test_display() {
        let list = Value::List(vec![Value::from(1), Value::from("a"), Value::None]);
        assert_eq!(list.to_string(), "[1, a, ]");
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_usize_saturates() {
        assert_eq!(42usize.to_value(), Value::Int(42));
        assert_eq!(usize::MAX.to_value(), Value::Int(i64::MAX));
    }

    #[test]
    fn test_nan_is_unequal_to_itself() {
        let nan = Value::Float(f64::NAN);
        assert_ne!(nan, nan.clone());
        assert_eq!(Value::Float(1.5), Value::Float(1.5));
    }
}
