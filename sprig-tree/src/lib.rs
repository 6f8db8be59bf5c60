//! Element tree data model for sprig.
//!
//! This crate provides the tree that the `sprig` builder produces: tagged
//! elements carrying optional attributes and one of three content states,
//! plus the indented text rendering of that tree.
//!
//! # Architecture
//!
//! ```text
//! nested blocks → sprig (construction) → sprig-tree (Element) → render() → text
//! ```
//!
//! The types here are plain values:
//! - No builder state or call interception (that lives in `sprig`)
//! - No validation beyond what the type shapes enforce
//! - Rendering never mutates the tree
//!
//! # Examples
//!
//! ```
//! use sprig_tree::{Attrs, Element};
//!
//! let tree = Element::new("amounts")
//!     .with_attrs(Attrs::new().set("month", 1))
//!     .with_children(vec![Element::new("expenses").with_text(5)]);
//!
//! assert_eq!(
//!     tree.render(),
//!     "<amounts month=\"1\">\n  <expenses>\n    5\n  </expenses>\n</amounts>",
//! );
//! ```

mod attrs;
mod element;
mod scalar;

pub use attrs::{Attrs, attrs};
pub use element::{Content, Element};
pub use scalar::Scalar;
