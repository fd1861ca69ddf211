//! Typed client for the donor API and the page flows built on it.
//!
//! Pages hold no authoritative data: every mutation is followed by a fresh
//! `list` call, and UI state (session flag, edit state, form contents) is
//! passed in explicitly.

pub mod admin;
pub mod api;
pub mod dialog;
pub mod form;
pub mod registration;
pub mod search;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;
