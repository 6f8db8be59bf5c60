//! Argument shapes accepted by [`Scope::tag`].
//!
//! A tag call carries zero, one, or two logical arguments, and their kinds
//! decide what the element becomes: a closure opens a nested block, an
//! [`Attrs`] value supplies attributes, a scalar becomes text content, and
//! `()` declares a bare self-closing tag. [`TagArgs`] encodes those
//! combinations so every accepted call resolves to exactly one shape and
//! every other combination is rejected at compile time.

use sprig_tree::{Attrs, Scalar};

use crate::Result;
use crate::scope::Scope;

/// What a block evaluates to: nothing, or a scalar for the owning element.
///
/// A block that makes no nested tag calls may still return a scalar, which
/// becomes the owning element's text content. Returning `()` leaves the
/// element self-closing.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockValue {
    /// The block produced no value.
    Empty,
    /// The block produced a scalar.
    Scalar(Scalar),
}

impl From<()> for BlockValue {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}

impl From<Scalar> for BlockValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for BlockValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<String> for BlockValue {
    fn from(value: String) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<i8> for BlockValue {
    fn from(value: i8) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<i16> for BlockValue {
    fn from(value: i16) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<i32> for BlockValue {
    fn from(value: i32) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<i64> for BlockValue {
    fn from(value: i64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<u8> for BlockValue {
    fn from(value: u8) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<u16> for BlockValue {
    fn from(value: u16) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<u32> for BlockValue {
    fn from(value: u32) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<f64> for BlockValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<bool> for BlockValue {
    fn from(value: bool) -> Self {
        Self::Scalar(value.into())
    }
}

/// Shape markers for [`TagArgs`] impl selection.
///
/// Scalar conversions and closures both need blanket impls, and those can
/// only coexist on a trait with a marker parameter telling them apart.
/// Inference picks the marker; callers never name these types.
pub mod shape {
    /// `tag(name, ())`: self-closing, no attributes.
    pub struct Empty;
    /// `tag(name, scalar)`: scalar text content.
    pub struct Text;
    /// `tag(name, attrs)`: attributes only, self-closing.
    pub struct AttrsOnly;
    /// `tag(name, (scalar, attrs))`: text content plus attributes.
    pub struct TextAttrs;
    /// `tag(name, block)`: nested block, no attributes.
    pub struct Block;
    /// `tag(name, (attrs, block))`: attributes plus nested block.
    pub struct AttrsBlock;
}

/// One argument shape accepted by a tag call.
///
/// The recognized forms:
///
/// - `()` (no arguments)
/// - a scalar, or `(scalar, Attrs)`
/// - [`Attrs`] alone
/// - a block closure, or `(Attrs, block)`
///
/// Anything else, such as two scalars or a scalar paired with a block,
/// matches no impl and is rejected at compile time.
pub trait TagArgs<Shape> {
    /// Create the element (and run its block, if any) under `scope`.
    fn apply(self, scope: &mut Scope, tag: String) -> Result<()>;
}

impl TagArgs<shape::Empty> for () {
    fn apply(self, scope: &mut Scope, tag: String) -> Result<()> {
        scope.open(tag, None, None);
        Ok(())
    }
}

impl<V> TagArgs<shape::Text> for V
where
    V: Into<Scalar>,
{
    fn apply(self, scope: &mut Scope, tag: String) -> Result<()> {
        scope.open(tag, None, Some(self.into()));
        Ok(())
    }
}

impl TagArgs<shape::AttrsOnly> for Attrs {
    fn apply(self, scope: &mut Scope, tag: String) -> Result<()> {
        scope.open(tag, Some(self), None);
        Ok(())
    }
}

impl<V> TagArgs<shape::TextAttrs> for (V, Attrs)
where
    V: Into<Scalar>,
{
    fn apply(self, scope: &mut Scope, tag: String) -> Result<()> {
        let (text, attrs) = self;
        scope.open(tag, Some(attrs), Some(text.into()));
        Ok(())
    }
}

impl<F, R> TagArgs<shape::Block> for F
where
    F: FnOnce(&mut Scope) -> Result<R>,
    R: Into<BlockValue>,
{
    fn apply(self, scope: &mut Scope, tag: String) -> Result<()> {
        let slot = scope.open(tag, None, None);
        scope.enclose(slot, self)
    }
}

impl<F, R> TagArgs<shape::AttrsBlock> for (Attrs, F)
where
    F: FnOnce(&mut Scope) -> Result<R>,
    R: Into<BlockValue>,
{
    fn apply(self, scope: &mut Scope, tag: String) -> Result<()> {
        let (attrs, block) = self;
        let slot = scope.open(tag, Some(attrs), None);
        scope.enclose(slot, block)
    }
}
