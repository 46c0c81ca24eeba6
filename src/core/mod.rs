//! Core library components.
//!
//! This module contains the reusable logic for the encryption
//! container, key resolution, and .env parsing. Nothing here prints or
//! prompts except through injected capabilities, so the core stays
//! safely embeddable.

pub mod crypto;
pub mod env;
pub mod keys;
