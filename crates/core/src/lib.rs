//! Domain types for the school content API.
//!
//! One module per entity; each entity maps to a single document collection
//! named after the lowercase of its type name (see [`collection::Collection`]).
//! Validation lives here as plain synchronous functions over the entity
//! structs. Nothing in this crate performs I/O.

pub mod classroom;
pub mod collection;
pub mod contact_message;
pub mod department;
pub mod email;
pub mod error;
pub mod event;
pub mod extracurricular;
pub mod news;
pub mod osis_member;
pub mod school_info;
pub mod teacher;
