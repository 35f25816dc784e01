//! Integration tests for the #[derive(Parameters)] macro.

use chrono::NaiveDate;
use horizon_trellis_core::{project, Callback, CellTemplate, Parameters, ToValue, Value};
use horizon_trellis_macros::Parameters;

#[derive(Parameters, Default, Clone)]
struct DropDownParameters {
    label: String,
    placeholder: Option<String>,
    items: Vec<String>,
    selected_value: Option<String>,
    #[parameter(skip)]
    formatter_name: String,
}

#[derive(Parameters, Clone)]
struct PickerParameters {
    min: NaiveDate,
    max: Option<NaiveDate>,
    #[parameter(rename = "ShowWeekNumbers")]
    week_numbers: bool,
}

// Nested configuration objects are projected through their own ToValue impl.
#[derive(Clone, Default, PartialEq, Debug)]
struct Margins {
    top: u32,
}

impl ToValue for Margins {
    fn to_value(&self) -> Value {
        Value::Int(i64::from(self.top))
    }
}

#[derive(Parameters, Default)]
struct PanelParameters {
    margins: Margins,
    on_click: Option<Callback>,
    template: Option<CellTemplate>,
}

#[derive(Parameters)]
struct Wrapper<T: ToValue> {
    inner: T,
}

#[test]
fn test_field_list_is_pascal_case_in_order() {
    assert_eq!(
        DropDownParameters::FIELDS,
        &["Label", "Placeholder", "Items", "SelectedValue"]
    );
    assert_eq!(PickerParameters::FIELDS, &["Min", "Max", "ShowWeekNumbers"]);
}

#[test]
fn test_projection_copies_values() {
    let params = DropDownParameters {
        label: "Country".into(),
        items: vec!["NO".into(), "SE".into()],
        selected_value: Some("SE".into()),
        ..Default::default()
    };
    let map = params.project();

    assert_eq!(map.len(), DropDownParameters::FIELDS.len());
    assert_eq!(map["Label"], Value::from("Country"));
    assert_eq!(map["Placeholder"], Value::None);
    assert_eq!(
        map["Items"],
        Value::List(vec![Value::from("NO"), Value::from("SE")])
    );
    assert_eq!(map["SelectedValue"], Value::from("SE"));
    assert!(params.formatter_name.is_empty());
    assert!(!map.contains_key("FormatterName"));
}

#[test]
fn test_projection_of_dates() {
    let min = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let params = PickerParameters {
        min,
        max: None,
        week_numbers: true,
    };
    let map = project(&params);

    assert_eq!(map["Min"], Value::Date(min));
    assert_eq!(map["Max"], Value::None);
    assert_eq!(map["ShowWeekNumbers"], Value::Bool(true));
}

#[test]
fn test_nested_objects_are_not_flattened() {
    let callback = Callback::new(|_| {});
    let params = PanelParameters {
        margins: Margins { top: 4 },
        on_click: Some(callback.clone()),
        template: Some(CellTemplate::new("Name")),
    };
    let map = params.project();

    assert_eq!(map["Margins"], Value::Int(4));
    assert!(!map.contains_key("Top"));
    assert_eq!(map["OnClick"], Value::Callback(callback));
    assert_eq!(map["Template"], Value::Template(CellTemplate::new("Name")));
}

#[test]
fn test_generic_parameters() {
    let params = Wrapper { inner: 7u16 };
    assert_eq!(Wrapper::<u16>::FIELDS, &["Inner"]);
    assert_eq!(params.project()["Inner"], Value::Int(7));
}

#[test]
fn test_projection_is_stable() {
    let params = DropDownParameters {
        label: "A".into(),
        ..Default::default()
    };
    let first = params.project();
    let second = params.project();
    assert_eq!(first, second);
}
