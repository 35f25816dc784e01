//! Single selection over a fixed candidate list.
//!
//! Dropdowns and radio lists share this state. Candidates are shown to the
//! host as display texts, and the host reports a selection back as one of
//! those texts, so the texts must identify candidates uniquely: repeated
//! texts get a ` (2)`, ` (3)`, ... suffix.

use std::collections::HashSet;
use std::sync::Arc;

use horizon_trellis_core::logging::targets;
use horizon_trellis_core::{
    Callback, Column, Property, ReadOnlyBinding, Result, TrellisError, Value, ValueBinding,
    ValueType,
};

/// Make display texts unique by suffixing repeats.
pub(crate) fn disambiguate(raw: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut texts = Vec::with_capacity(raw.len());
    for text in raw {
        let mut candidate = text.clone();
        let mut n = 1;
        while taken.contains(&candidate) {
            n += 1;
            candidate = format!("{text} ({n})");
        }
        taken.insert(candidate.clone());
        texts.push(candidate);
    }
    texts
}

/// Selection state shared by the tabular selection widgets.
pub(crate) struct Selection<T> {
    values: Arc<[T]>,
    texts: Arc<[String]>,
    selected: Arc<Property<usize>>,
    binding: Arc<ValueBinding<T>>,
    on_change: Callback,
}

/// Construction input for [`Selection::new`].
pub(crate) struct Candidates<'a, T> {
    pub values: Vec<T>,
    pub texts: Vec<String>,
    pub default: &'a T,
    pub default_text: String,
    pub same: fn(&T, &T) -> bool,
}

impl<T: Clone + Send + Sync + 'static> Selection<T> {
    /// Validate the default and the bound column, then set up the binding.
    ///
    /// `widget` names the widget family for error messages.
    pub(crate) fn new(
        widget: &str,
        candidates: Candidates<'_, T>,
        column: Option<&Arc<dyn Column>>,
    ) -> Result<Self> {
        let Candidates {
            values,
            texts,
            default,
            default_text,
            same,
        } = candidates;
        let texts = disambiguate(texts);

        let Some(index) = values.iter().position(|v| same(v, default)) else {
            return Err(TrellisError::invalid_selection(default_text, texts));
        };

        if let Some(column) = column {
            let expected = ValueType::of::<T>();
            if column.value_type() != expected {
                return Err(TrellisError::bound_column_type(
                    column.title(),
                    format!("{widget}<{expected}>"),
                    column.value_type().name(),
                ));
            }
        }

        let binding = Arc::new(ValueBinding::bind(default.clone(), column)?);
        let values: Arc<[T]> = values.into();
        let texts: Arc<[String]> = texts.into();
        let selected = Arc::new(Property::new(index));

        let on_change = {
            let values = Arc::clone(&values);
            let texts = Arc::clone(&texts);
            let selected = Arc::clone(&selected);
            let binding = Arc::clone(&binding);
            Callback::new(move |reported| {
                let index = match reported {
                    Value::Text(text) => texts.iter().position(|t| t == text),
                    Value::Int(i) => usize::try_from(*i).ok().filter(|&i| i < values.len()),
                    _ => None,
                };
                match index {
                    Some(i) => {
                        selected.set_silent(i);
                        binding.set_value(values[i].clone());
                    }
                    None => tracing::debug!(
                        target: targets::BINDING,
                        %reported,
                        "ignoring selection that matches no candidate"
                    ),
                }
            })
        };

        Ok(Self {
            values,
            texts,
            selected,
            binding,
            on_change,
        })
    }

    pub(crate) fn values(&self) -> &[T] {
        &self.values
    }

    pub(crate) fn texts(&self) -> &[String] {
        &self.texts
    }

    pub(crate) fn selected_index(&self) -> usize {
        self.selected.get()
    }

    pub(crate) fn selected_text(&self) -> &str {
        &self.texts[self.selected_index()]
    }

    pub(crate) fn select_index(&self, index: usize) -> Result<()> {
        let Some(value) = self.values.get(index) else {
            return Err(TrellisError::invalid_selection(
                index.to_string(),
                self.texts.to_vec(),
            ));
        };
        self.selected.set_silent(index);
        self.binding.set_value(value.clone());
        Ok(())
    }

    pub(crate) fn select_text(&self, text: &str) -> Result<()> {
        match self.texts.iter().position(|t| t == text) {
            Some(index) => self.select_index(index),
            None => Err(TrellisError::invalid_selection(text, self.texts.to_vec())),
        }
    }

    pub(crate) fn items_value(&self) -> Value {
        Value::List(self.texts.iter().cloned().map(Value::Text).collect())
    }

    pub(crate) fn value(&self) -> T {
        self.binding.value()
    }

    pub(crate) fn binding(&self) -> ReadOnlyBinding<'_, T> {
        self.binding.read_only()
    }

    pub(crate) fn on_change(&self) -> &Callback {
        &self.on_change
    }

    pub(crate) fn dispose(&self) {
        self.binding.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(default: &i32) -> Result<Selection<i32>> {
        let values = vec![1, 2, 2, 3];
        Selection::new(
            "DropDown",
            Candidates {
                texts: values.iter().map(ToString::to_string).collect(),
                values,
                default,
                default_text: default.to_string(),
                same: |a, b| a == b,
            },
            None,
        )
    }

    #[test]
    fn test_disambiguate_suffixes_repeats() {
        let texts = disambiguate(vec!["A".into(), "B".into(), "A".into(), "A".into()]);
        assert_eq!(texts, vec!["A", "B", "A (2)", "A (3)"]);
    }

    #[test]
    fn test_disambiguate_avoids_existing_suffix() {
        let texts = disambiguate(vec!["A (2)".into(), "A".into(), "A".into()]);
        assert_eq!(texts, vec!["A (2)", "A", "A (3)"]);
    }

    #[test]
    fn test_default_must_be_a_candidate() {
        let err = numbers(&9).err().unwrap();
        assert_eq!(
            err,
            TrellisError::InvalidSelection {
                value: "9".into(),
                candidates: vec!["1".into(), "2".into(), "2 (2)".into(), "3".into()],
            }
        );
    }

    #[test]
    fn test_index_and_text_round_trip() {
        let selection = numbers(&2).unwrap();
        assert_eq!(selection.selected_index(), 1);
        assert_eq!(selection.selected_text(), "2");

        selection.select_text("2 (2)").unwrap();
        assert_eq!(selection.selected_index(), 2);

        for (index, text) in selection.texts().iter().enumerate() {
            selection.select_text(text).unwrap();
            assert_eq!(selection.selected_index(), index);
        }
    }

    #[test]
    fn test_host_callback_updates_binding() {
        let selection = numbers(&1).unwrap();
        selection.on_change().invoke(&Value::from("3"));
        assert_eq!(selection.value(), 3);
        assert_eq!(selection.selected_index(), 3);

        selection.on_change().invoke(&Value::from("nope"));
        assert_eq!(selection.selected_index(), 3);
    }

    #[test]
    fn test_select_index_out_of_range() {
        let selection = numbers(&1).unwrap();
        assert!(matches!(
            selection.select_index(4),
            Err(TrellisError::InvalidSelection { .. })
        ));
    }
}
