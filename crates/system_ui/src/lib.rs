//! Shared UI primitive library for the desktop shell.
//!
//! The crate owns the centralized icon API and the structural Leptos
//! primitives carrying the stable `data-ui-*` DOM contract consumed by the
//! shell CSS layers. Shell components compose these primitives instead of
//! emitting ad hoc structural markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer};
