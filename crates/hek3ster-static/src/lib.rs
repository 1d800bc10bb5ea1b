//! Static site generator for the hek3ster landing page.
//!
//! Renders the content catalog through section templates, composes them into a
//! single anchored page and writes it out with its assets.

pub mod assets;
pub mod builder;
pub mod page;
pub mod sections;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use page::{
    check_anchors, compose, verify_document_anchors, AnchorError, ComposedPage, ComposedSection,
    PageError, PageMeta, SectionKind, NAVIGATION,
};
pub use sections::{status_marker, Marker, NavLink, RenderError};
pub use templates::TemplateEngine;
