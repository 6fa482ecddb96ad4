//! Constant decoders that ignore their input.

use crate::foundation::{Decode, DecodeError, Outcome, Path};
use serde_json::Value;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Always succeeds with a clone of the wrapped value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Succeed<T> {
    value: T,
}

impl<T: Clone> Decode for Succeed<T> {
    type Output = T;

    fn decode(&self, _path: &Path, _node: &Value) -> Outcome<T> {
        Ok(self.value.clone())
    }
}

/// Creates a decoder that always yields `value`.
///
/// Typical uses are the seed of an `ap` chain and the success branch of a
/// `then` continuation.
pub fn succeed<T: Clone>(value: T) -> Succeed<T> {
    Succeed { value }
}

/// Always fails with a custom message at the current path.
pub struct Fail<T> {
    message: Cow<'static, str>,
    _output: PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<T> Decode for Fail<T> {
    type Output = T;

    fn decode(&self, path: &Path, _node: &Value) -> Outcome<T> {
        Err(DecodeError::custom(path.clone(), self.message.clone()))
    }
}

impl<T> Clone for Fail<T> {
    fn clone(&self) -> Self {
        Self {
            message: self.message.clone(),
            _output: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for Fail<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fail").field("message", &self.message).finish()
    }
}

/// Creates a decoder that always fails with `message`.
pub fn fail<T>(message: impl Into<Cow<'static, str>>) -> Fail<T> {
    Fail {
        message: message.into(),
        _output: PhantomData,
    }
}
