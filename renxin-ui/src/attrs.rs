//! Passthrough of native attributes given to a component with `attr:` prefix.
//!
//! Everything is forwarded to the rendered element as is, in the order the
//! caller wrote it. Two rules apply on top:
//! - `class` is dropped: styling of ui primitives is fixed.
//! - a typed prop that was actually set replaces the `attr:` entry of the same
//!   name. Unset props leave the `attr:` entry alone.
//!
//! The element is built from this single list, so no attribute is ever set
//! twice or removed after the spread.

use leptos::{Attribute, IntoAttribute, MaybeSignal, SignalGet};

use crate::ButtonType;

const STYLE_OVERRIDE_ATTR: &str = "class";

/// Attributes that survived [`strip_style_override`].
#[derive(Clone, Default)]
pub(crate) struct PassthroughAttrs {
    pub attrs: Vec<(&'static str, Attribute)>,
    /// How many `class` entries were removed.
    pub discarded: usize,
}

impl PassthroughAttrs {
    /// Put a typed prop in place of any `attr:` entry with the same name.
    fn replace(&mut self, name: &'static str, value: Attribute) {
        self.attrs
            .retain(|(existing, _)| !existing.trim().eq_ignore_ascii_case(name));
        self.attrs.push((name, value));
    }

    pub fn with_button_type(mut self, button_type: Option<ButtonType>) -> Self {
        if let Some(button_type) = button_type {
            self.replace("type", button_type.into_attribute());
        }
        self
    }

    pub fn with_disabled(mut self, disabled: Option<MaybeSignal<bool>>) -> Self {
        if let Some(disabled) = disabled {
            self.replace("disabled", (move || disabled.get()).into_attribute());
        }
        self
    }
}

/// Split away style override from the rest of attributes.
/// Values are never inspected, malformed ones are forwarded unchanged.
pub(crate) fn strip_style_override(attrs: Vec<(&'static str, Attribute)>) -> PassthroughAttrs {
    let total = attrs.len();
    let attrs: Vec<_> = attrs
        .into_iter()
        .filter(|(name, _)| !is_style_override(name))
        .collect();
    PassthroughAttrs {
        discarded: total - attrs.len(),
        attrs,
    }
}

fn is_style_override(name: &str) -> bool {
    name.trim().eq_ignore_ascii_case(STYLE_OVERRIDE_ATTR)
}

#[cfg(test)]
mod test {
    use leptos::Oco;

    use super::*;

    fn attr(value: &'static str) -> Attribute {
        Attribute::String(Oco::Borrowed(value))
    }

    fn names(attrs: &PassthroughAttrs) -> Vec<&'static str> {
        attrs.attrs.iter().map(|(name, _)| *name).collect()
    }

    fn value_of(attrs: &PassthroughAttrs, name: &str) -> Option<String> {
        attrs
            .attrs
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, value)| match value {
                Attribute::String(value) => Some(value.to_string()),
                _ => None,
            })
    }

    #[test]
    fn keeps_everything_but_class() {
        let attrs = vec![
            ("aria-label", attr("Close")),
            ("class", attr("red-button")),
            ("id", attr("close")),
            ("disabled", true.into_attribute()),
            ("data-testid", attr("")),
        ];
        let stripped = strip_style_override(attrs);

        assert_eq!(stripped.discarded, 1);
        assert_eq!(
            names(&stripped),
            ["aria-label", "id", "disabled", "data-testid"]
        );
    }

    #[test]
    fn class_is_matched_case_insensitive() {
        let stripped = strip_style_override(vec![
            ("CLASS", attr("a")),
            ("class", attr("b")),
            ("classname", attr("c")),
        ]);
        assert_eq!(stripped.discarded, 2);
        assert_eq!(names(&stripped), ["classname"]);
    }

    #[test]
    fn empty_input() {
        let stripped = strip_style_override(vec![]);
        assert_eq!(stripped.discarded, 0);
        assert!(stripped.attrs.is_empty());
    }

    #[test]
    fn unset_props_keep_attr_entries() {
        let merged = strip_style_override(vec![
            ("type", attr("submit")),
            ("disabled", true.into_attribute()),
        ])
        .with_button_type(None)
        .with_disabled(None);

        assert_eq!(names(&merged), ["type", "disabled"]);
        assert_eq!(value_of(&merged, "type").as_deref(), Some("submit"));
        assert!(matches!(merged.attrs[1].1, Attribute::Bool(true)));
    }

    #[test]
    fn set_props_replace_attr_entries() {
        let merged = strip_style_override(vec![
            ("TYPE", attr("submit")),
            ("id", attr("reset-all")),
            ("disabled", true.into_attribute()),
        ])
        .with_button_type(Some(ButtonType::Reset))
        .with_disabled(Some(false.into()));

        assert_eq!(names(&merged), ["id", "type", "disabled"]);
        assert_eq!(value_of(&merged, "type").as_deref(), Some("reset"));
    }

    #[test]
    fn typed_props_without_attrs() {
        let merged = strip_style_override(vec![]).with_button_type(Some(ButtonType::Button));
        assert_eq!(names(&merged), ["type"]);
    }
}
