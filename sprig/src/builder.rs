//! The tree builder entry point.

use sprig_tree::Element;

use crate::Result;
use crate::args::BlockValue;
use crate::scope::Scope;

/// Builds element trees from nested blocks.
///
/// [`build`](Self::build) runs a block against a fresh [`Scope`] and
/// returns the finished root element. Every call is an independent
/// session, so one builder can produce any number of trees, and a failed
/// build leaves nothing behind for the next one to trip over. `build`
/// takes `&mut self`, so two in-flight builds can never share a session.
///
/// # Examples
///
/// ```
/// use sprig::{Scope, TreeBuilder};
///
/// let mut builder = TreeBuilder::new();
/// let tree = builder.build(|x| {
///     x.tag("report", |x: &mut Scope| x.tag("name", "X"))
/// })?;
///
/// assert_eq!(tree.render(), "<report>\n  <name>\n    X\n  </name>\n</report>");
/// # Ok::<(), sprig::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder;

impl TreeBuilder {
    /// Create a builder.
    pub fn new() -> Self {
        Self
    }

    /// Run one build session and return the root element.
    ///
    /// The block receives the session's [`Scope`] and declares elements
    /// through [`Scope::tag`]. The first element created becomes the
    /// root. The block's own return value is not attached to anything at
    /// the top level; returning `Ok(())` is the norm.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBuild`](crate::Error::EmptyBuild) when the
    /// block creates no elements, plus any error the block itself
    /// propagates.
    pub fn build<F, R>(&mut self, block: F) -> Result<Element>
    where
        F: FnOnce(&mut Scope) -> Result<R>,
        R: Into<BlockValue>,
    {
        let mut scope = Scope::new();
        let _ = block(&mut scope)?;
        scope.finish()
    }
}
