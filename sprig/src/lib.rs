//! Build trees of tagged elements from nested blocks and render them as
//! indented markup text.
//!
//! A build is one closure. Inside it, every [`Scope::tag`] call declares
//! an element, and nesting another closure inside a call declares that
//! element's children; there are no parent references and no node handles.
//! Structure is inferred from call order and nesting depth alone.
//!
//! # Module Organization
//!
//! - [`TreeBuilder`] - Runs build sessions and returns the root element
//! - [`Scope`] - The handle blocks receive; owns one session's state
//! - [`TagArgs`] / [`shape`] - The argument shapes a tag call accepts
//! - [`Element`] / [`Attrs`] / [`Scalar`] - The tree itself (re-exported
//!   from `sprig-tree`)
//!
//! # Examples
//!
//! ```
//! use sprig::{Scope, TreeBuilder, attrs};
//!
//! let mut builder = TreeBuilder::new();
//! let report = builder.build(|x| {
//!     x.tag("report", |x: &mut Scope| {
//!         x.tag("name", "X")?;
//!         x.tag("amounts", (attrs([("month", 1)]), |x: &mut Scope| {
//!             x.tag("expenses", 5)?;
//!             x.tag("revenue", 9)
//!         }))
//!     })
//! })?;
//!
//! println!("{report}");
//! // <report>
//! //   <name>
//! //     X
//! //   </name>
//! //   <amounts month="1">
//! //     <expenses>
//! //       5
//! //     </expenses>
//! //     <revenue>
//! //       9
//! //     </revenue>
//! //   </amounts>
//! // </report>
//! # Ok::<(), sprig::Error>(())
//! ```
//!
//! Tag names are plain strings, so words that are reserved in Rust need no
//! special treatment: `x.tag("class", "Class of 94")` just works.

mod args;
mod builder;
mod error;
mod scope;
mod validate;

pub use args::{BlockValue, TagArgs, shape};
pub use builder::TreeBuilder;
pub use error::{Error, Result};
pub use scope::Scope;

pub use sprig_tree::{Attrs, Content, Element, Scalar, attrs};
