//! Prelude module for Horizon Trellis.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use horizon_trellis::prelude::*;
//! ```
//!
//! This provides access to:
//! - The builder session (`GuiBuilder`, `BuilderState`, `BuilderConfig`)
//! - Widget foundation (`Widget`, `WidgetBase`, `WidgetTree`)
//! - Every standard widget and its parameters
//! - Descriptor and value types (`RenderDescriptor`, `HostKind`, `Value`)
//! - The data layer (`Column`, `Record`, `RecordSource`, `Filter`)

// ============================================================================
// Builder Session
// ============================================================================

pub use crate::builder::{BuilderState, GuiBuilder};
pub use crate::config::BuilderConfig;
pub use crate::rules::{rule_fn, ParentageRule};

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use horizon_trellis_core::{ConnectionId, Property, ReadOnlyBinding, Signal, ValueBinding};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::{ContainerState, ConvertContext, Widget, WidgetBase, WidgetTree};

// ============================================================================
// Standard Widgets
// ============================================================================

pub use crate::widget::widgets::{
    Button, CheckBox, DatePicker, DateTimePicker, DialogBox, DropDown, Grid, GridColumn, Label,
    RadioList, RecordDropDown, Stack, Tab, TabItem, TextBox, TextField, TimePicker,
};

pub use crate::widget::widgets::{
    ButtonParameters, DialogParameters, DropDownParameters, GridParameters, InputParameters,
    LabelParameters, RadioParameters, StackParameters, TabParameters, TextParameters,
};

// ============================================================================
// Descriptors and Values
// ============================================================================

pub use horizon_trellis_core::{
    keys, AttributeMap, Callback, HostKind, NodeId, Parameters, RenderDescriptor, Row, ToValue,
    TrellisError, Value,
};

// ============================================================================
// Data Layer
// ============================================================================

pub use crate::data::{MemoryColumn, MemoryRecord, RecordList};
pub use horizon_trellis_core::{Column, Filter, Record, RecordSource};
