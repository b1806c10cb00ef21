//! # IO Module
//!
//! Boundary between the `shared` DTOs the presentation layer speaks and the
//! domain models. Strings from the UI are parsed here and rejected when
//! malformed.

pub mod mappers;
