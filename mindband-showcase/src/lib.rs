//! MindBand showcase library
//!
//! Behaviour behind the landing page's feature section: the wrap-around
//! watch-face carousel and the description panel that follows the last
//! clicked face, plus the small bits of page chrome around them. Rendering
//! is delegated to the surfaces in `mindband-contracts`; `infra::surfaces`
//! provides headless ones for the CLI and tests.
//!
//! Notes
//! - Pure decision logic (breakpoints, wrap arithmetic, heading text) is
//!   kept apart from the side-effecting controllers so it can be tested
//!   without a surface.
//! - Everything runs on the UI thread; no type here is shared across threads.

pub mod app;
pub mod cli;
pub mod domains;
pub mod error;
pub mod infra;

pub use app::{Outcome, Showcase, ShowcaseMessage};
pub use error::ShowcaseError;
