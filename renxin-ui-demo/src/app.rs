use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use renxin_ui::{Button, ButtonType, WithStyles};

#[component]
pub fn Counter() -> impl IntoView {
    let (count, set_count) = create_signal(0);
    let on_click = move |_: ev::MouseEvent| set_count.update(|count| *count += 1);

    view! {
        <Button button_type=ButtonType::Button on_click=on_click attr:aria-label="Increase">
            "Increase"
        </Button>
        <span>"Counter: "{count}</span>
    }
}

/// Second button moves focus to the first one through the forwarded reference.
#[component]
pub fn FocusDemo() -> impl IntoView {
    let target = create_node_ref::<html::Button>();
    let focus_target = move |_: ev::MouseEvent| {
        if let Some(button) = target.get() {
            if let Err(e) = button.focus() {
                logging::error!("failed to focus: {e:?}");
            }
        }
    };

    view! {
        <Button node_ref=target on_focus=|_| logging::log!("target focused")>
            "Target"
        </Button>
        <Button button_type=ButtonType::Button on_click=focus_target>
            "Focus the target"
        </Button>
    }
}

/// Class override is accepted but the button keeps its look.
#[component]
pub fn OverrideDemo() -> impl IntoView {
    view! {
        <Button class="red-button" attr:title="Still the default style">
            "Not red"
        </Button>
        <Button disabled=true>"Disabled"</Button>
    }
}

/// Button type picked from a `<select>`, parsed the same way a form value would be.
#[component]
pub fn TypeDemo() -> impl IntoView {
    let (kind, set_kind) = create_signal(ButtonType::Submit);
    let on_change = move |ev: ev::Event| match event_target_value(&ev).parse::<ButtonType>() {
        Ok(parsed) => set_kind.set(parsed),
        Err(e) => logging::warn!("{e}"),
    };
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        logging::log!("form submitted");
    };

    view! {
        <form on:submit=on_submit on:reset=|_| logging::log!("form reset")>
            <select on:change=on_change>
                <option value="submit" selected=true>"submit"</option>
                <option value="reset">"reset"</option>
                <option value="button">"button"</option>
            </select>
            {move || {
                let kind = kind.get();
                view! { <Button button_type=kind>{format!("I am a {kind} button")}</Button> }
            }}
        </form>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="renxin-ui demo"/>
        <WithStyles>
            <main>
                <section><Counter/></section>
                <section><FocusDemo/></section>
                <section><OverrideDemo/></section>
                <section><TypeDemo/></section>
            </main>
        </WithStyles>
    }
}
