//! Services orchestrating the providers for host applications.

pub mod did_service;
pub mod error;
pub mod identifier_service;
pub mod response_service;

#[cfg(test)]
mod test;
