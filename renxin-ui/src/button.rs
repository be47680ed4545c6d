use leptos::{
    component, create_node_ref, ev, html, view, Attribute, Callable, Callback, Children,
    IntoView, MaybeSignal, NodeRef,
};

use crate::{attrs::strip_style_override, style, ButtonType};

///
/// Native `<button>` with the fixed renxin style.
///
/// Every native attribute can be given with `attr:` prefix and lands on the
/// element unchanged. `button_type` and `disabled` win over `attr:type` and
/// `attr:disabled` only when they are set. The visual style can't be
/// customized: `class` prop and `attr:class` are accepted but discarded.
///
/// Pass `node_ref` to get hold of the rendered element, e.g. to focus it.
///
/// # Example:
/// ```no_build
/// use leptos::*;
/// use renxin_ui::{Button, ButtonType};
///
/// #[component]
/// fn toolbar() -> impl IntoView {
///     let (count, set_count) = create_signal(0);
///     view! {
///         <Button
///             button_type=ButtonType::Button
///             on_click=move |_| set_count.update(|c| *c += 1)
///             attr:aria-label="Increase"
///         >
///             "Clicked "{count}
///         </Button>
///     }
/// }
/// ```
#[component]
pub fn Button(
    /// Ignored: buttons always render with the fixed style.
    #[prop(optional, into)]
    class: Option<String>,
    #[prop(optional)] node_ref: Option<NodeRef<html::Button>>,
    #[prop(optional)] button_type: Option<ButtonType>,
    #[prop(optional, into)] disabled: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] on_click: Option<Callback<ev::MouseEvent>>,
    #[prop(optional, into)] on_focus: Option<Callback<ev::FocusEvent>>,
    #[prop(optional, into)] on_blur: Option<Callback<ev::FocusEvent>>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    if let Some(class) = class {
        tracing::debug!(%class, "button style override discarded");
    }
    let passthrough = strip_style_override(attributes)
        .with_button_type(button_type)
        .with_disabled(disabled);
    if passthrough.discarded > 0 {
        tracing::debug!(
            count = passthrough.discarded,
            "button `attr:class` override discarded"
        );
    }
    tracing::trace!(attrs = passthrough.attrs.len(), "render button");

    rcss_leptos::register_styles(style::chain());
    let node_ref = node_ref.unwrap_or_else(create_node_ref);
    let attrs = passthrough.attrs;

    view! {
        <button
            {..attrs}
            class=style::class_name()
            node_ref=node_ref
            on:click=move |e| {
                if let Some(on_click) = on_click {
                    on_click.call(e)
                }
            }
            on:focus=move |e| {
                if let Some(on_focus) = on_focus {
                    on_focus.call(e)
                }
            }
            on:blur=move |e| {
                if let Some(on_blur) = on_blur {
                    on_blur.call(e)
                }
            }
        >
            {children()}
        </button>
    }
}
