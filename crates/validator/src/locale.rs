//! Hardcoded per-locale issue messages.
//!
//! Every constraint set carries a [`Locale`]; validators render their issue
//! messages through [`Message::render`]. There is no runtime catalog loading.

use std::borrow::Cow;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Language used for issue messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (default).
    #[default]
    #[serde(rename = "en")]
    English,
    /// Korean.
    #[serde(rename = "ko")]
    Korean,
}

/// Message templates known to the built-in validators.
#[derive(Clone, Copy)]
pub(crate) enum Message<'a> {
    NotString,
    Required,
    MinLength(usize),
    MaxLength(usize),
    PatternMismatch,
    HexColor,
    NotNumber,
    Min(&'a dyn Display),
    Max(&'a dyn Display),
    NotInteger,
    EmailNotString,
    EmailRequired,
    EmailFormat,
    NotObject,
    InvalidValue,
}

impl Message<'_> {
    pub(crate) fn render(self, locale: Locale) -> Cow<'static, str> {
        match locale {
            Locale::English => self.english(),
            Locale::Korean => self.korean(),
        }
    }

    fn english(self) -> Cow<'static, str> {
        match self {
            Self::NotString => "Must be a string".into(),
            Self::Required => "This field is required".into(),
            Self::MinLength(min) => format!("Must be at least {min} characters").into(),
            Self::MaxLength(max) => format!("Must be at most {max} characters").into(),
            Self::PatternMismatch => "Invalid format".into(),
            Self::HexColor => "Must be a hex color like #1a2b3c".into(),
            Self::NotNumber => "Must be a valid number".into(),
            Self::Min(min) => format!("Must be at least {min}").into(),
            Self::Max(max) => format!("Must be at most {max}").into(),
            Self::NotInteger => "Must be an integer".into(),
            Self::EmailNotString => "Email must be a string".into(),
            Self::EmailRequired => "Email is required".into(),
            Self::EmailFormat => "Invalid email address".into(),
            Self::NotObject => "Must be an object".into(),
            Self::InvalidValue => "Invalid value".into(),
        }
    }

    fn korean(self) -> Cow<'static, str> {
        match self {
            Self::NotString => "문자열이어야 합니다.".into(),
            Self::Required => "필수 입력값입니다.".into(),
            Self::MinLength(min) => format!("최소 {min}자 이상이어야 합니다.").into(),
            Self::MaxLength(max) => format!("최대 {max}자까지 가능합니다.").into(),
            Self::PatternMismatch => "올바른 형식이 아닙니다.".into(),
            Self::HexColor => "올바른 색상 코드가 아닙니다.".into(),
            Self::NotNumber => "유효한 숫자가 아닙니다.".into(),
            Self::Min(min) => format!("{min} 이상이어야 합니다.").into(),
            Self::Max(max) => format!("{max} 이하여야 합니다.").into(),
            Self::NotInteger => "정수여야 합니다.".into(),
            Self::EmailNotString => "이메일은 문자열이어야 합니다.".into(),
            Self::EmailRequired => "이메일은 필수 입력값입니다.".into(),
            Self::EmailFormat => "유효한 이메일 형식이 아닙니다.".into(),
            Self::NotObject => "객체여야 합니다.".into(),
            Self::InvalidValue => "유효하지 않은 값입니다.".into(),
        }
    }
}
