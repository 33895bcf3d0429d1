// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Page-indicator dots for paged views.
//!
//! A row of dots, one per page, with the current page highlighted and an
//! optional radius animation when the selection moves. The crate holds the
//! widget logic only; the host owns measurement timing, the frame clock and
//! the drawing surface.
//!
//! # Key entry points
//!
//! - [`indicator::DotsIndicator`] - the widget, driven through the
//!   [`indicator::PagerIndicator`] and [`indicator::IndicatorView`] traits
//! - [`options::Options`] - TOML-backed style and animation configuration,
//!   resolved into a pixel-space [`style::StyleConfig`]
//! - [`layout::measure`] - required widget size for a dot count
//! - [`render::draw_commands`] - one frame's ordered circle commands
//!
//! # Frame flow
//!
//! The host forwards pager events to the indicator, which updates its
//! [`selection::IndicatorState`] and, when animated, starts radius
//! interpolations on the [`animation::AnimationDriver`]. On every frame the
//! host calls [`indicator::DotsIndicator::on_frame`] to apply pending ticks,
//! then draws. Redraw and relayout requests are exposed as flags the host
//! consumes.

pub mod animation;
pub mod error;
pub mod indicator;
pub mod layout;
pub mod options;
pub mod render;
pub mod selection;
pub mod style;

pub use error::DotsError;
pub use indicator::{Canvas, DotsIndicator, IndicatorView, PagerIndicator};
pub use layout::Size;
pub use options::{Color, Density, Options};
pub use render::DrawCommand;
pub use style::StyleConfig;
