//! Core systems for Horizon Trellis.
//!
//! This crate provides the foundational pieces the widget crate is built on:
//!
//! - **Node Keys**: Stable arena identifiers for widget nodes
//! - **Property System**: Interior-mutable values with change detection
//! - **Signal/Slot System**: Synchronous change notification
//! - **Value Bindings**: Typed values linked to external data columns
//! - **Values**: The weakly typed payload carried by attribute maps
//! - **Render Descriptors**: The host-agnostic output handed to a renderer
//! - **Parameter Projection**: Flat configuration objects to attribute maps
//! - **Data Layer**: The column/record/source interfaces widgets read from
//!
//! # Binding Example
//!
//! ```
//! use horizon_trellis_core::ValueBinding;
//!
//! let binding = ValueBinding::bind(String::from("draft"), None).unwrap();
//! binding.on_change(|text| println!("now: {text}"));
//!
//! binding.set_value("final".to_string());
//! assert_eq!(binding.value(), "final");
//! ```
//!
//! # Projection Example
//!
//! ```
//! use horizon_trellis_core::{Parameters, Value};
//! use horizon_trellis_macros::Parameters;
//!
//! #[derive(Parameters, Default)]
//! struct LabelParameters {
//!     text: String,
//!     #[parameter(rename = "Class")]
//!     css_class: Option<String>,
//! }
//!
//! let params = LabelParameters { text: "Hello".into(), css_class: None };
//! let map = params.project();
//!
//! assert_eq!(LabelParameters::FIELDS, &["Text", "Class"]);
//! assert_eq!(map["Text"], Value::from("Hello"));
//! assert_eq!(map["Class"], Value::None);
//! ```

// Lets `#[derive(Parameters)]` expansions resolve inside this crate's own tests.
extern crate self as horizon_trellis_core;

pub mod binding;
pub mod data;
pub mod descriptor;
mod error;
pub mod logging;
pub mod node;
pub mod params;
pub mod property;
pub mod signal;
pub mod value;

pub use binding::{ReadOnlyBinding, ValueBinding};
pub use data::{Column, Filter, Record, RecordSource};
pub use descriptor::{keys, AttributeMap, HostKind, RenderDescriptor};
pub use error::{Result, TrellisError};
pub use logging::{TreeDebug, TreeFormatOptions, TreeSource, TreeStyle};
pub use node::NodeId;
pub use params::{project, Parameters};
pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use value::{CellTemplate, Callback, RecordSet, Row, ToValue, Value, ValueType};
