//! Decentralized identifiers: resolution to identifier documents and the
//! registration contract.
//!
//! A DID resolves to a document listing the public keys its controller signs
//! with. Resolution goes through an [`IdentifierRepository`], registration is
//! left to a [`registrar::Registrar`] implementation per DID method.
//!
//! [`IdentifierRepository`]: crate::repository::IdentifierRepository

pub mod dto;
pub mod error;
pub mod model;
pub mod registrar;
pub mod resolver;

mod mapper;
