//! Focus and announcement helpers for Flyout widgets.
//!
//! This crate is split into two layers:
//! - [`FocusRing`], a cyclic focus cursor modelling wrap-around Tab order
//!   inside an open panel or overlay;
//! - [`Announcer`], a bounded queue of status [`Announcement`]s backing a
//!   screen-reader-style live status display.
//!
//! Both are UI-framework agnostic: widgets own a ring and advance it from
//! keyboard events, and the application renders `Announcer::latest` wherever
//! its status line lives.
//!
//! # Quick Example
//!
//! ```
//! use flyout_ui_access::{Announcement, Announcer, FocusRing};
//!
//! let mut ring = FocusRing::new(3);
//! assert_eq!(ring.advance(false), Some(0));
//! assert_eq!(ring.advance(true), Some(2));
//!
//! let mut announcer = Announcer::new();
//! announcer.announce(Announcement::polite("Navigation panel opened"));
//! assert_eq!(
//!     announcer.latest().map(|entry| entry.text()),
//!     Some("Navigation panel opened"),
//! );
//! ```

mod announce;
mod focus;

pub use announce::{Announcement, Announcer, Politeness};
pub use focus::FocusRing;
