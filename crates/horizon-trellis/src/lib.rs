//! Horizon Trellis - declarative widget trees rendered to host-agnostic descriptors.
//!
//! This is the main umbrella crate that re-exports all public APIs.
//!
//! A [`GuiBuilder`] session creates widgets, arranges them under container
//! widgets and, on [`render`](GuiBuilder::render), converts the whole tree
//! into a [`RenderDescriptor`] for an external renderer. Widget settings are
//! plain structs deriving [`Parameters`]; their fields become the
//! descriptor's attributes.
//!
//! # Example
//!
//! ```
//! use horizon_trellis::prelude::*;
//!
//! let mut gui = GuiBuilder::new();
//! let form = gui.create_stack(StackParameters::default());
//! let size = gui
//!     .create_drop_down("M", vec!["S", "M", "L"], DropDownParameters::default(), None)
//!     .unwrap();
//! gui.add_child(form, size).unwrap();
//!
//! let layout = gui.render().unwrap();
//! let dropdowns = layout.find_all(HostKind::DropDownList);
//! assert_eq!(dropdowns[0].attribute(keys::SELECTED_VALUE), Some(&Value::from("M")));
//! ```

pub use horizon_trellis_core::*;
pub use horizon_trellis_macros::*;

pub mod builder;
pub mod config;
pub mod data;
pub mod prelude;
pub mod rules;
pub mod widget;

pub use builder::{BuilderState, GuiBuilder};
pub use config::{BuilderConfig, ConfigError};
