use rcss::{extend::in_chain_ops::ScopeChainOps, extend::StyleChain, ScopeCommon};

rcss::css! {
    @rcss(pub struct ButtonStyle);
    .button {
        appearance: none;
        background-color: #FAFBFC;
        border: 1px solid rgba(27, 31, 35, 0.15);
        border-radius: 6px;
        box-shadow: rgba(27, 31, 35, 0.04) 0 1px 0, rgba(255, 255, 255, 0.25) 0 1px 0 inset;
        box-sizing: border-box;
        color: #24292F;
        cursor: pointer;
        display: inline-block;
        font-family: -apple-system, system-ui, "Segoe UI", Helvetica, Arial, sans-serif;
        font-size: 14px;
        font-weight: 500;
        line-height: 20px;
        padding: 6px 16px;
        position: relative;
        transition: background-color 0.2s cubic-bezier(0.3, 0, 0.5, 1);
    }

    .button:hover {
        background-color: #F3F4F6;
        transition-duration: 0.1s;
    }

    .button:focus-visible {
        outline: 2px solid #0969DA;
        outline-offset: 1px;
    }

    .button:disabled {
        background-color: #FAFBFC;
        border-color: rgba(27, 31, 35, 0.15);
        color: #959DA5;
        cursor: default;
    }

    .button:active {
        background-color: #EDEFF2;
        box-shadow: rgba(225, 228, 232, 0.2) 0 1px 0 inset;
        transition: none 0s;
    }
}

/// The style chain every button renders with.
/// There is no way to extend it from outside, see [`crate::Button`].
pub(crate) fn chain() -> StyleChain<ButtonStyle> {
    StyleChain::default()
}

/// Class list put on every rendered button: scope ids of the chain
/// followed by the `button` class.
pub fn class_name() -> String {
    let chain = chain();
    let scopes = chain.get_all_scopes().join(" ");
    format!("{scopes} {}", chain.button)
}

/// Css text of the button style.
pub fn stylesheet() -> &'static str {
    ButtonStyle::STYLE
}
