//! GrubZap Core - Shared types library.
//!
//! This crate provides the types and pure logic used by the storefront:
//! - [`types`] - Newtype wrappers for ids, prices, emails, and order statuses
//! - [`cart`] - The visitor's cart, its mutations, and its totals
//! - [`catalog`] - Menu, restaurant, blog, and profile records with their filters
//! - [`chat`] - The footer chat widget's canned mood replies
//! - [`filter`] - Case-insensitive substring matching shared by every listing
//!
//! # Architecture
//!
//! The core crate contains only types and logic - no I/O, no sessions,
//! no HTTP clients. Everything here is synchronous and deterministic.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod chat;
pub mod filter;
pub mod types;

pub use cart::{Cart, CartItem, CartTotals};
pub use types::*;
