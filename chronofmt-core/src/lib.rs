//! Core items shared by `chronofmt` and its tooling.
//!
//! This crate is an implementation detail of `chronofmt` and should not be relied upon directly.
//! Its public API may change in any release.

#![no_std]

pub mod util;
