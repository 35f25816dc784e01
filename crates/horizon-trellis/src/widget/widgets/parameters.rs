//! Configuration objects for the standard widgets.
//!
//! Each struct is a flat bag of presentation settings. Fields project to
//! attribute keys in PascalCase; values the widget computes itself (current
//! value, items, callbacks, nested content) are added at conversion time and
//! are not part of these structs.

use horizon_trellis_macros::Parameters;
use serde::{Deserialize, Serialize};

/// Settings for [`Stack`](super::Stack).
#[derive(Debug, Clone, Default, PartialEq, Parameters)]
pub struct StackParameters {
    /// Lay children out horizontally instead of vertically.
    pub row: bool,
    /// Gap between children, in host spacing units.
    pub spacing: Option<u32>,
    /// Main-axis alignment.
    pub justify: Option<String>,
    /// Cross-axis alignment.
    pub align_items: Option<String>,
    /// Extra CSS class.
    pub class: Option<String>,
}

/// Settings for [`Button`](super::Button).
#[derive(Debug, Clone, Default, PartialEq, Parameters)]
pub struct ButtonParameters {
    /// Caption.
    pub text: String,
    /// Visual variant, e.g. `Filled` or `Outlined`.
    pub variant: Option<String>,
    /// Theme color.
    pub color: Option<String>,
    /// Stretch to the container width.
    pub full_width: bool,
    /// Extra CSS class.
    pub class: Option<String>,
}

/// Settings shared by check boxes and date/time pickers.
#[derive(Debug, Clone, Default, PartialEq, Parameters)]
pub struct InputParameters {
    /// Field label.
    pub label: Option<String>,
    /// Help text under the field.
    pub helper_text: Option<String>,
    /// Disallow edits while still rendering as enabled.
    pub read_only: bool,
    /// Mark the field as required.
    pub required: bool,
    /// Visual variant.
    pub variant: Option<String>,
    /// Extra CSS class.
    pub class: Option<String>,
}

/// Settings shared by text fields and text boxes.
#[derive(Debug, Clone, Default, PartialEq, Parameters)]
pub struct TextParameters {
    /// Field label.
    pub label: Option<String>,
    /// Placeholder shown while empty.
    pub placeholder: Option<String>,
    /// Help text under the field.
    pub helper_text: Option<String>,
    /// Visible line count.
    pub lines: Option<u32>,
    /// Maximum input length.
    pub max_length: Option<u32>,
    /// Disallow edits while still rendering as enabled.
    pub read_only: bool,
    /// Visual variant.
    pub variant: Option<String>,
    /// Extra CSS class.
    pub class: Option<String>,
}

/// Settings for [`DialogBox`](super::DialogBox).
#[derive(Debug, Clone, Default, PartialEq, Parameters)]
pub struct DialogParameters {
    /// Header title.
    pub title: String,
    /// Body paragraphs shown above the child content.
    pub paragraphs: Vec<String>,
    /// Show a close button in the header.
    pub close_button: bool,
    /// Extra CSS class.
    pub class: Option<String>,
}

/// Settings for [`Label`](super::Label).
#[derive(Debug, Clone, Default, PartialEq, Parameters)]
pub struct LabelParameters {
    /// Displayed text.
    pub text: String,
    /// Typography style, e.g. `h6` or `body2`.
    pub typo: Option<String>,
    /// Extra CSS class.
    pub class: Option<String>,
}

/// Settings for dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Parameters)]
pub struct DropDownParameters {
    /// Field label.
    pub label: Option<String>,
    /// Placeholder shown with no selection.
    pub placeholder: Option<String>,
    /// Visual variant.
    pub variant: Option<String>,
    /// Dense rendering.
    pub dense: bool,
    /// Extra CSS class.
    pub class: Option<String>,
}

/// Settings for radio lists.
#[derive(Debug, Clone, Default, PartialEq, Parameters)]
pub struct RadioParameters {
    /// Group label.
    pub label: Option<String>,
    /// Lay options out horizontally.
    pub row: bool,
    /// Theme color.
    pub color: Option<String>,
    /// Extra CSS class.
    pub class: Option<String>,
}

/// Settings for [`Tab`](super::Tab).
#[derive(Debug, Clone, Default, PartialEq, Parameters)]
pub struct TabParameters {
    /// Index of the initially active tab.
    pub active_index: u32,
    /// Draw a border around the panel.
    pub outlined: bool,
    /// Extra CSS class.
    pub class: Option<String>,
}

/// Settings for grids.
///
/// The defaults come from the builder configuration; none of these are
/// derived from the grid's data.
#[derive(Debug, Clone, PartialEq, Parameters, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct GridParameters {
    /// Per-column filtering.
    pub allow_filtering: bool,
    /// Column show/hide picker.
    pub allow_column_picking: bool,
    /// Rows per page.
    pub page_size: u32,
    /// Paging controls.
    pub allow_paging: bool,
    /// Click-to-sort headers.
    pub allow_sorting: bool,
    /// Host filter mode name.
    pub filter_mode: String,
    /// Default column width.
    pub column_width: String,
    /// Choices offered in the page-size selector.
    pub page_size_options: Vec<u32>,
}

impl Default for GridParameters {
    fn default() -> Self {
        Self {
            allow_filtering: true,
            allow_column_picking: true,
            page_size: 2,
            allow_paging: true,
            allow_sorting: true,
            filter_mode: "SimpleWithMenu".to_string(),
            column_width: "300px".to_string(),
            page_size_options: vec![2, 10, 20, 30],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_trellis_core::{Parameters, Value};

    #[test]
    fn test_grid_parameter_keys() {
        assert_eq!(
            GridParameters::FIELDS,
            &[
                "AllowFiltering",
                "AllowColumnPicking",
                "PageSize",
                "AllowPaging",
                "AllowSorting",
                "FilterMode",
                "ColumnWidth",
                "PageSizeOptions",
            ]
        );
    }

    #[test]
    fn test_grid_defaults_project() {
        let map = GridParameters::default().project();
        assert_eq!(map["PageSize"], Value::Int(2));
        assert_eq!(map["FilterMode"], Value::from("SimpleWithMenu"));
        assert_eq!(
            map["PageSizeOptions"],
            Value::List(vec![
                Value::Int(2),
                Value::Int(10),
                Value::Int(20),
                Value::Int(30)
            ])
        );
    }

    #[test]
    fn test_optional_fields_project_as_none() {
        let map = LabelParameters {
            text: "Hi".into(),
            ..Default::default()
        }
        .project();
        assert_eq!(map["Typo"], Value::None);
        assert_eq!(map["Class"], Value::None);
    }
}
