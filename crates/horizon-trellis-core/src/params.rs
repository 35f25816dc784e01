//! Parameter projection.
//!
//! Every widget keeps its presentation settings in a flat configuration struct
//! that derives [`Parameters`]. The derive generates the list of projected
//! attribute keys at compile time and a `project` method that copies each
//! field into an [`AttributeMap`] under its key, in declaration order.
//!
//! Projection is one level deep. A field whose type is itself a configuration
//! struct is projected through its own [`ToValue`](crate::ToValue) impl, never
//! by recursing into its fields.

use crate::descriptor::AttributeMap;

/// A flat configuration object that projects into an attribute map.
///
/// Usually derived with `#[derive(Parameters)]` from `horizon-trellis-macros`.
/// Field names become PascalCase keys (`selected_value` becomes
/// `SelectedValue`); `#[parameter(rename = "...")]` overrides the key and
/// `#[parameter(skip)]` leaves a field out.
pub trait Parameters {
    /// The projected keys, in declaration order.
    const FIELDS: &'static [&'static str];

    /// Copy every projected field into a fresh attribute map.
    ///
    /// Never fails, and two calls on an unmodified object yield equal maps.
    fn project(&self) -> AttributeMap;
}

/// Project any configuration object.
pub fn project<P: Parameters + ?Sized>(params: &P) -> AttributeMap {
    params.project()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;
    use horizon_trellis_macros::Parameters;

    #[derive(Parameters, Default, Clone)]
    struct ButtonParameters {
        text: String,
        #[parameter(rename = "Class")]
        css_class: Option<String>,
        #[parameter(skip)]
        internal_note: String,
        full_width: bool,
    }

    #[test]
    fn test_fields_in_declaration_order() {
        assert_eq!(ButtonParameters::FIELDS, &["Text", "Class", "FullWidth"]);
    }

    #[test]
    fn test_project_copies_every_field() {
        let params = ButtonParameters {
            text: "Save".into(),
            css_class: Some("primary".into()),
            internal_note: "not projected".into(),
            full_width: true,
        };
        let map = project(&params);

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ButtonParameters::FIELDS);
        assert_eq!(map["Text"], Value::from("Save"));
        assert_eq!(map["Class"], Value::from("primary"));
        assert_eq!(map["FullWidth"], Value::Bool(true));
        assert!(!map.contains_key("InternalNote"));
    }

    #[test]
    fn test_project_is_repeatable() {
        let params = ButtonParameters {
            text: "Go".into(),
            ..Default::default()
        };
        assert_eq!(params.project(), params.project());
    }
}
