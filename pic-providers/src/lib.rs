//! Providers for the Portable Identity Card exchange core: key algorithms, key
//! storage, JOSE tokens, identifier resolution and response formatting.

pub mod common_dto;
pub mod common_models;
pub mod did;
pub mod exchange_protocol;
pub mod http_client;
pub mod jose;
pub mod key_algorithm;
pub mod key_storage;
pub mod repository;
pub mod response_formatter;
pub mod token_signer;
pub mod util;
