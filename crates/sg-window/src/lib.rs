//! # sg-window — titled, bordered text windows
//!
//! The composition layer. A [`Window`] owns a title, its rows and the
//! geometry derived from them; a [`Session`] owns the output sink together
//! with the [`Styler`](sg_term::Styler) and [`BoxRenderer`](sg_box::BoxRenderer)
//! that write into it. Rendering a window is a fixed sequence of writes
//! through the session:
//!
//! ```text
//! frame style → top → title → splitter → rows… → bottom → resting style
//! ```
//!
//! - **[`window`]** — `Window`: content, running-max width, render passes
//! - **[`placement`]** — where a window is drawn (inline or anchored)
//! - **[`scheme`]** — the two styles a render pass switches between
//! - **[`session`]** — the sink plus its styler and renderer

pub mod placement;
pub mod scheme;
pub mod session;
pub mod window;

pub use placement::Placement;
pub use scheme::Scheme;
pub use session::Session;
pub use window::Window;
