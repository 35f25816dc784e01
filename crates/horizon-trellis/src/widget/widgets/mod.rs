//! Standard widgets for Horizon Trellis.
//!
//! This module provides the widget families a form is built from:
//!
//! - [`Stack`], [`DialogBox`]: Containers that fold their children in
//! - [`Button`], [`Label`]: Plain controls
//! - [`CheckBox`], [`TextField`], [`TextBox`], [`Picker`]: Bindable inputs
//! - [`DropDown`], [`RecordDropDown`], [`RadioList`]: Single selection
//! - [`Grid`], [`GridColumn`]: Tabular data
//! - [`Tab`]: Tab strip

mod bindable;
mod button;
mod check_box;
mod dialog;
mod drop_down;
mod grid;
mod grid_column;
mod label;
mod parameters;
mod picker;
mod radio_list;
mod selection;
mod stack;
mod tab;
mod text_box;
mod text_field;

pub use button::Button;
pub use check_box::CheckBox;
pub use dialog::DialogBox;
pub use drop_down::{DropDown, RecordDropDown};
pub use grid::Grid;
pub use grid_column::{GridColumn, DEFAULT_COLUMN_WIDTH};
pub use label::Label;
pub use parameters::{
    ButtonParameters, DialogParameters, DropDownParameters, GridParameters, InputParameters,
    LabelParameters, RadioParameters, StackParameters, TabParameters, TextParameters,
};
pub use picker::{DatePicker, DateTimePicker, Picker, PickerValue, TimePicker};
pub use radio_list::RadioList;
pub use stack::Stack;
pub use tab::{Tab, TabItem};
pub use text_box::TextBox;
pub use text_field::TextField;
