//! Widget system for Horizon Trellis.
//!
//! This module provides the widget architecture:
//!
//! - [`Widget`] trait: The base trait for all widgets
//! - [`WidgetBase`]: Common enable/hide state shared by every widget
//! - [`WidgetTree`]: The arena that owns widgets and their parent/child links
//! - [`ConvertContext`]: What a widget sees while it converts itself
//!
//! # Overview
//!
//! A widget never draws anything. It holds a configuration object and
//! possibly a value binding, and on request converts itself into a
//! [`RenderDescriptor`](horizon_trellis_core::RenderDescriptor) that an
//! external renderer turns into native controls.
//!
//! # Widget Tree
//!
//! Widgets live in a [`WidgetTree`] and refer to each other by
//! [`NodeId`](horizon_trellis_core::NodeId). Only container widgets
//! ([`Stack`](widgets::Stack), [`DialogBox`](widgets::DialogBox)) accept
//! children; adding a child anywhere else fails with `NotContainer`.
//!
//! ```
//! use horizon_trellis::widget::WidgetTree;
//! use horizon_trellis::widget::widgets::{Label, Stack, StackParameters};
//!
//! let mut tree = WidgetTree::new();
//! let form = tree.insert(Box::new(Stack::new(StackParameters::default())));
//! let title = tree.insert(Box::new(Label::new("Title")));
//! tree.add_child(form, title).unwrap();
//!
//! assert_eq!(tree.parent(title), Some(form));
//! assert!(tree.add_child(title, form).is_err());
//! ```

mod base;
mod context;
mod traits;
mod tree;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use base::WidgetBase;
pub use context::ConvertContext;
pub use traits::Widget;
pub use tree::{ContainerState, WidgetTree};
