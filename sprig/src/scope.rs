//! One build session: the element log, depth tracking, and child
//! reconciliation.

use sprig_tree::{Attrs, Element, Scalar};

use crate::args::{BlockValue, TagArgs};
use crate::error::{Error, Result};
use crate::validate::validate_tag_name;

/// The builder handle passed to every block.
///
/// A `Scope` is one build session. It owns the session state: an
/// append-only log of every element created, the current nesting depth,
/// and the root slot. Only [`TreeBuilder`](crate::TreeBuilder) creates
/// one, so a session cannot be reset out from under a running block.
///
/// Structure is inferred, never passed: a tag call records its element at
/// the current depth, and when a block finishes, the entries logged one
/// level deeper during that block become the children of the element that
/// owns the block, in creation order.
#[derive(Debug)]
pub struct Scope {
    log: Vec<LogEntry>,
    depth: usize,
    root: Option<usize>,
}

/// One element creation: the depth it happened at, and the element itself
/// until a parent (or the session end) takes it out of the slot.
#[derive(Debug)]
struct LogEntry {
    depth: usize,
    element: Option<Element>,
}

impl Scope {
    pub(crate) fn new() -> Self {
        Self {
            log: Vec::new(),
            depth: 0,
            root: None,
        }
    }

    /// Declare an element named `name`.
    ///
    /// `args` selects one of the four call shapes:
    ///
    /// - `()` for self-closing: `tag("br", ())` renders `<br />`
    /// - a scalar for text content: `tag("expenses", 594)`
    /// - [`Attrs`] for attributes on a self-closing tag:
    ///   `tag("clearance", attrs([("level", "classified")]))`
    /// - a closure for a nested block: `tag("head", |x: &mut Scope| ...)`
    ///
    /// plus the two-argument tuples `(scalar, Attrs)` and
    /// `(Attrs, closure)`. Any other combination does not compile.
    ///
    /// The first element created in a session becomes the root. A block
    /// that makes nested tag calls produces children; its return value is
    /// then discarded, even if it is a scalar. A block that makes no calls
    /// may return a scalar to set text content, or `Ok(())` to leave the
    /// element self-closing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTag`] without creating an element when
    /// `name` is not usable as a tag name.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig::{Scope, TreeBuilder, attrs};
    ///
    /// let mut builder = TreeBuilder::new();
    /// let tree = builder.build(|x| {
    ///     x.tag("amounts", (attrs([("month", 1)]), |x: &mut Scope| {
    ///         x.tag("expenses", 5)?;
    ///         x.tag("revenue", 9)
    ///     }))
    /// })?;
    ///
    /// assert_eq!(
    ///     tree.render(),
    ///     "<amounts month=\"1\">\n  <expenses>\n    5\n  </expenses>\n  <revenue>\n    9\n  </revenue>\n</amounts>",
    /// );
    /// # Ok::<(), sprig::Error>(())
    /// ```
    pub fn tag<A, S>(&mut self, name: impl Into<String>, args: A) -> Result<()>
    where
        A: TagArgs<S>,
    {
        let name = name.into();
        if let Some(reason) = validate_tag_name(&name) {
            return Err(Error::InvalidTag { name, reason });
        }
        args.apply(self, name)
    }

    /// Create and log an element at the current depth. The first element
    /// logged in the session becomes the root.
    pub(crate) fn open(
        &mut self,
        tag: String,
        attrs: Option<Attrs>,
        text: Option<Scalar>,
    ) -> usize {
        let mut element = Element::new(tag);
        if let Some(attrs) = attrs {
            element = element.with_attrs(attrs);
        }
        if let Some(text) = text {
            element = element.with_text(text);
        }
        let slot = self.log.len();
        self.log.push(LogEntry {
            depth: self.depth,
            element: Some(element),
        });
        self.root.get_or_insert(slot);
        slot
    }

    /// Run `block` for the element in `slot` and attach what it produced:
    /// the elements logged one level deeper during the block, or the
    /// block's scalar value when it logged nothing.
    pub(crate) fn enclose<F, R>(&mut self, slot: usize, block: F) -> Result<()>
    where
        F: FnOnce(&mut Scope) -> Result<R>,
        R: Into<BlockValue>,
    {
        let child_depth = self.depth + 1;
        let mark = self.log.len();
        let value = self.descend(block)?;
        if self.log.len() > mark {
            let children = self.adopt(mark, child_depth);
            self.replace(slot, |element| element.with_children(children));
        } else if let BlockValue::Scalar(text) = value {
            self.replace(slot, |element| element.with_text(text));
        }
        Ok(())
    }

    /// Run `block` one level deeper. The depth is restored on every exit
    /// path, including unwinding.
    fn descend<F, R>(&mut self, block: F) -> Result<BlockValue>
    where
        F: FnOnce(&mut Scope) -> Result<R>,
        R: Into<BlockValue>,
    {
        struct Ascend<'a>(&'a mut Scope);

        impl Drop for Ascend<'_> {
            fn drop(&mut self) {
                self.0.depth -= 1;
            }
        }

        self.depth += 1;
        let guard = Ascend(self);
        block(&mut *guard.0).map(Into::into)
    }

    /// Take the elements logged at exactly `depth` since `mark`, in
    /// creation order. Deeper entries stay put; their slots were already
    /// emptied by their own parents.
    fn adopt(&mut self, mark: usize, depth: usize) -> Vec<Element> {
        self.log[mark..]
            .iter_mut()
            .filter(|entry| entry.depth == depth)
            .filter_map(|entry| entry.element.take())
            .collect()
    }

    fn replace(&mut self, slot: usize, f: impl FnOnce(Element) -> Element) {
        if let Some(element) = self.log[slot].element.take() {
            self.log[slot].element = Some(f(element));
        }
    }

    /// End the session, yielding the root element.
    pub(crate) fn finish(mut self) -> Result<Element> {
        let root = self.root.ok_or(Error::EmptyBuild)?;
        self.log[root].element.take().ok_or(Error::EmptyBuild)
    }
}
