//! This crate contains all shared UI for the seller portal: page controllers,
//! the form lifecycle, the portal context and the reusable components.

pub mod components;
pub mod controllers;
pub mod form;
pub mod nav;
pub mod notice;
pub mod timer;

mod context;
pub use context::{use_portal, PlatformStore, PortalContext, PortalProvider};

pub use form::{FieldRules, FieldStates, FormSpec, SubmitControl, SubmitLock, SubmitOutcome};
pub use nav::{nav_items, Destination, NavItem, Redirect};
pub use notice::{Notice, NoticeBanner, NoticeKind};

#[cfg(test)]
mod testing;
