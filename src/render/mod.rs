//! Rendering label trees as collapsible accordions.
//!
//! This module turns a [LabelTree](crate::model::LabelTree) into nested
//! groups on a [RenderSurface]. Every node becomes a group holding a
//! header (a toggle showing the label, plus the label's relocated checkbox)
//! and a collapsible content container, which in turn holds the groups of
//! the node's children.
//!
//! # Quick API
//! * [rebuild] - collect a flat checklist, parse it and render it in place
//! * [render] - render an already parsed tree
//!
//! # Surfaces
//! * [RenderSurface] - trait to implement for your own UI
//! * [Document] - in-memory element tree, serializable with [to_html]
//!
//! # Markup
//! With the default [RenderConfig], node `3.2` renders on a [Document] as
//! ```text
//! <div class="card">
//!   <div class="card-header"><div class="form-check">
//!     <input ... class="form-check-input">
//!     <div id="base-rw-3-2" class="form-check-label" data-toggle="collapse"
//!          data-target="#rw-3-2" aria-expanded="false" aria-controls="rw-3-2">3.2 Talk</div>
//!   </div></div>
//!   <div class="collapse" id="rw-3-2" aria-labelledby="base-rw-3-2" data-parent="#rw-3">
//!     <div> ...groups of 3.2.x... </div>
//!   </div>
//! </div>
//! ```

mod accordion;
mod config;
pub mod defs;
pub mod dom;
pub mod surface;
pub mod writer;

pub use self::accordion::{rebuild, render};
pub use self::config::RenderConfig;
pub use self::dom::{Document, ElementId};
pub use self::surface::{ContentSpec, HeaderSpec, RenderSurface};
pub use self::writer::{to_html, to_inner_html, to_text_outline, write_html_file};
