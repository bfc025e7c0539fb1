//! Shorthand constructors for common form inputs.
//!
//! None of these carry a user-supplied pattern or bounds, so they cannot
//! fail and skip the checks of the constraint-set constructors. Each has a
//! `_with_locale` variant for non-English messages.

use crate::locale::Locale;
use crate::validators::{LengthMode, NumberField, StringField};

fn plain_string(required: bool, hex_color: bool, locale: Locale) -> StringField {
    StringField {
        required,
        min_length: None,
        max_length: None,
        pattern: None,
        hex_color,
        length_mode: LengthMode::default(),
        locale,
    }
}

/// A text input. With `required`, the empty string is rejected.
#[must_use]
pub fn text(required: bool) -> StringField {
    text_with_locale(required, Locale::default())
}

/// [`text`] with messages in `locale`.
#[must_use]
pub fn text_with_locale(required: bool, locale: Locale) -> StringField {
    plain_string(required, false, locale)
}

/// A number input. With `required`, values below `1` are rejected as well
/// as absent ones.
#[must_use]
pub fn number(required: bool) -> NumberField {
    number_with_locale(required, Locale::default())
}

/// [`number`] with messages in `locale`.
#[must_use]
pub fn number_with_locale(required: bool, locale: Locale) -> NumberField {
    NumberField {
        required,
        min: required.then_some(1.0),
        max: None,
        integer: false,
        locale,
    }
}

/// A colour input accepting `#rrggbb`.
#[must_use]
pub fn color() -> StringField {
    color_with_locale(Locale::default())
}

/// [`color`] with messages in `locale`.
#[must_use]
pub fn color_with_locale(locale: Locale) -> StringField {
    plain_string(false, true, locale)
}
