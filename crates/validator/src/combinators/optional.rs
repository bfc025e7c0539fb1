//! OPTIONAL combinator - accepts a missing value

use crate::foundation::{Input, Outcome, Validate};

/// Accepts the absent sentinel and `null` as `None`.
///
/// Any other input is handed to the inner validator and its output is
/// wrapped in `Some`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    inner: V,
}

impl<V> Optional<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Validate for Optional<V> {
    type Output = Option<V::Output>;

    fn validate(&self, input: Input<'_>) -> Outcome<Self::Output> {
        if input.is_nullish() {
            return Ok(None);
        }
        self.inner.validate(input).map(Some)
    }
}
