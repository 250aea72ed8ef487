//! Rendering adapters producing HTML fragments.

pub mod html;
pub mod math;

pub use html::{css_ident, label_id, reference_link, Fragments, HtmlRenderer};
pub use math::MathBackend;
