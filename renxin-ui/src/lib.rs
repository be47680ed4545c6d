//! Renxin ui primitives for leptos apps.
//!
//! For now it contains a single [`Button`]: a native `<button>` with a fixed
//! look, that forwards all other attributes and a reference to the element.
//!
//! Styles are registered through `rcss-leptos`, so the app root should be
//! wrapped in [`WithStyles`] to get them into the document head.
//!
//! # Example:
//! ```no_build
//! use leptos::*;
//! use renxin_ui::{Button, WithStyles};
//!
//! #[component]
//! fn app() -> impl IntoView {
//!     view! {
//!         <WithStyles>
//!             <Button on_click=|_| logging::log!("clicked")>"Click Me"</Button>
//!         </WithStyles>
//!     }
//! }
//! ```

mod attrs;
mod button;
mod button_type;
pub mod style;

pub use button::{Button, ButtonProps};
pub use button_type::{ButtonType, ButtonTypeError};
pub use rcss_leptos::WithStyles;
