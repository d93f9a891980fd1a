//! Implementations of key algorithms.

pub mod provider;

pub mod eddsa;
pub mod es256;
pub mod es256k;
pub mod rsa;

mod elliptic;
