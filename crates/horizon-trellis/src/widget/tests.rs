//! Tests for the widget system.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use horizon_trellis_core::{keys, HostKind, RenderDescriptor, Result, TrellisError, Value};

    use crate::widget::widgets::{
        Button, ButtonParameters, Label, Stack, StackParameters, TextField, TextParameters,
    };
    use crate::widget::{ContainerState, ConvertContext, Widget, WidgetBase, WidgetTree};

    /// A leaf widget that counts how often it is disposed.
    struct Probe {
        base: WidgetBase,
        disposed: Arc<AtomicUsize>,
    }

    impl Probe {
        fn new(disposed: &Arc<AtomicUsize>) -> Self {
            Self {
                base: WidgetBase::new(),
                disposed: Arc::clone(disposed),
            }
        }
    }

    impl Widget for Probe {
        fn widget_base(&self) -> &WidgetBase {
            &self.base
        }

        fn widget_base_mut(&mut self) -> &mut WidgetBase {
            &mut self.base
        }

        fn host_kind(&self) -> HostKind {
            HostKind::Label
        }

        fn convert(&self, cx: &ConvertContext<'_>) -> Result<RenderDescriptor> {
            Ok(cx.descriptor(self, Default::default()))
        }

        fn dispose(&mut self) {
            self.disposed.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn stack() -> Box<Stack> {
        Box::new(Stack::new(StackParameters::default()))
    }

    #[test]
    fn test_add_child_to_leaf_fails() {
        let mut tree = WidgetTree::new();
        let label = tree.insert(Box::new(Label::new("leaf")));
        let button = tree.insert(Box::new(Button::new(ButtonParameters::default())));
        let inner = tree.insert(stack());

        for child in [button, inner] {
            let err = tree.add_child(label, child).unwrap_err();
            assert_eq!(
                err,
                TrellisError::NotContainer {
                    node: label,
                    kind: HostKind::Label,
                }
            );
        }
        assert!(tree.children(label).is_empty());
    }

    #[test]
    fn test_add_child_rejects_cycles_and_unknown_ids() {
        let mut tree = WidgetTree::new();
        let outer = tree.insert(stack());
        let inner = tree.insert(stack());
        tree.add_child(outer, inner).unwrap();

        assert!(matches!(
            tree.add_child(inner, outer),
            Err(TrellisError::InvalidHierarchy { .. })
        ));
        assert!(matches!(
            tree.add_child(outer, outer),
            Err(TrellisError::InvalidHierarchy { .. })
        ));

        let gone = tree.insert(Box::new(Label::new("gone")));
        tree.destroy(gone).unwrap();
        assert_eq!(tree.add_child(outer, gone), Err(TrellisError::InvalidNode(gone)));
    }

    #[test]
    fn test_reparenting_moves_child() {
        let mut tree = WidgetTree::new();
        let first = tree.insert(stack());
        let second = tree.insert(stack());
        let label = tree.insert(Box::new(Label::new("moving")));

        tree.add_child(first, label).unwrap();
        tree.add_child(second, label).unwrap();

        assert!(tree.children(first).is_empty());
        assert_eq!(tree.children(second), &[label]);
        assert_eq!(tree.parent(label), Some(second));
    }

    #[test]
    fn test_container_state() {
        let mut tree = WidgetTree::new();
        let form = tree.insert(stack());
        let label = tree.insert(Box::new(Label::new("x")));

        assert_eq!(tree.container_state(form), Some(ContainerState::Empty));
        assert_eq!(tree.container_state(label), None);

        tree.add_child(form, label).unwrap();
        tree.detach(label);
        assert_eq!(tree.container_state(form), Some(ContainerState::Populated));
    }

    #[test]
    fn test_destroy_cascades_children_first() {
        let disposed = Arc::new(AtomicUsize::new(0));
        let mut tree = WidgetTree::new();
        let root = tree.insert(stack());
        let inner = tree.insert(stack());
        let a = tree.insert(Box::new(Probe::new(&disposed)));
        let b = tree.insert(Box::new(Probe::new(&disposed)));
        tree.add_child(root, inner).unwrap();
        tree.add_child(inner, a).unwrap();
        tree.add_child(root, b).unwrap();

        assert_eq!(tree.destroy(inner).unwrap(), 2);
        assert_eq!(disposed.load(Ordering::SeqCst), 1);
        assert!(!tree.contains(a));
        assert_eq!(tree.children(root), &[b]);

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(disposed.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_container_folds_visible_children() {
        let mut tree = WidgetTree::new();
        let form = tree.insert(stack());
        let shown = tree.insert(Box::new(Label::new("shown")));
        let hidden = tree.insert(Box::new(Label::new("hidden")));
        tree.add_child(form, shown).unwrap();
        tree.add_child(form, hidden).unwrap();
        tree.get_mut(hidden).unwrap().hide();

        let descriptor = tree.convert(form, None).unwrap();
        assert_eq!(descriptor.kind, HostKind::Stack);
        assert_eq!(descriptor.children().len(), 1);
        assert_eq!(
            descriptor.attribute(keys::CHILD_CONTENT),
            Some(&Value::Content(descriptor.children().to_vec()))
        );
    }

    #[test]
    fn test_empty_container_omits_child_content() {
        let mut tree = WidgetTree::new();
        let form = tree.insert(stack());
        let descriptor = tree.convert(form, None).unwrap();
        assert!(descriptor.attribute(keys::CHILD_CONTENT).is_none());
        assert!(descriptor.child_content.is_none());
    }

    #[test]
    fn test_disabled_and_autofocus() {
        let mut tree = WidgetTree::new();
        let field = tree.insert(Box::new(
            TextField::new("", TextParameters::default(), None).unwrap(),
        ));
        let label = tree.insert(Box::new(Label::new("not focusable")));
        tree.get_mut(field).unwrap().disable();

        let focused = tree.convert(field, Some(field)).unwrap();
        assert_eq!(focused.attribute(keys::DISABLED), Some(&Value::Bool(true)));
        assert_eq!(focused.attribute(keys::AUTO_FOCUS), Some(&Value::Bool(true)));

        let unfocused = tree.convert(field, None).unwrap();
        assert!(unfocused.attribute(keys::AUTO_FOCUS).is_none());

        let plain = tree.convert(label, Some(label)).unwrap();
        assert_eq!(plain.attribute(keys::DISABLED), Some(&Value::Bool(false)));
        assert!(plain.attribute(keys::AUTO_FOCUS).is_none());
    }

    #[test]
    fn test_convert_is_idempotent() {
        let mut tree = WidgetTree::new();
        let form = tree.insert(stack());
        let field = tree.insert(Box::new(
            TextField::new("hello", TextParameters::default(), None).unwrap(),
        ));
        tree.add_child(form, field).unwrap();

        assert_eq!(
            tree.convert(form, Some(field)).unwrap(),
            tree.convert(form, Some(field)).unwrap()
        );
    }

    #[test]
    fn test_typed_access() {
        let mut tree = WidgetTree::new();
        let label = tree.insert(Box::new(Label::new("before")));

        assert!(tree.widget::<Stack>(label).is_none());
        tree.widget_mut::<Label>(label).unwrap().set_text("after");
        assert_eq!(tree.widget::<Label>(label).unwrap().text(), "after");
    }
}
