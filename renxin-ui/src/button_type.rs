use std::{fmt, str::FromStr};

use leptos::{Attribute, IntoAttribute, Oco};
use thiserror::Error;

/// Value of the `type` attribute of a `<button>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonType {
    Button,
    Submit,
    Reset,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ButtonTypeError {
    #[error("Unknown button type: {0:?}, expected one of \"button\", \"submit\", \"reset\"")]
    Unknown(String),
}

impl ButtonType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonType {
    type Err = ButtonTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        [ButtonType::Button, ButtonType::Submit, ButtonType::Reset]
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ButtonTypeError::Unknown(s.to_owned()))
    }
}

impl IntoAttribute for ButtonType {
    fn into_attribute(self) -> Attribute {
        Attribute::String(Oco::Borrowed(self.as_str()))
    }

    fn into_attribute_boxed(self: Box<Self>) -> Attribute {
        (*self).into_attribute()
    }
}
