//! The **PIC Core** is the service layer of the Portable Identity Card
//! credential-exchange library.
//!
//! It wires the providers together and exposes three services:
//!
//! - [`DidService`][ds] resolves DIDs to identifier documents
//! - [`ResponseService`][rs] fetches issuance contracts and presentation
//!   requests, and answers them with signed self-issued responses
//! - [`IdentifierService`][is] derives pairwise identifiers and registers them
//!
//! The host application supplies the HTTP client, the key store holding its
//! seed secrets and the registrar for its DID method:
//!
//! ```ignore rust
//! /// `None` initializes the core with the default configuration
//! let core = PicCore::new(None, Arc::new(ReqwestClient::default()), key_store, registrar);
//! ```
//!
//! [ds]: service::did_service::DidService
//! [rs]: service::response_service::ResponseService
//! [is]: service::identifier_service::IdentifierService

use std::{collections::HashMap, sync::Arc};

use pic_crypto::imp::{
    hasher::sha256::SHA256,
    signer::{eddsa::EDDSASigner, es256::ES256Signer, es256k::ES256KSigner, rs256::RS256Signer},
    CryptoProviderImpl,
};
use pic_providers::{
    did::{registrar::Registrar, resolver::Resolver},
    http_client::HttpClient,
    key_algorithm::{
        imp::{
            eddsa::Eddsa, es256::Es256, es256k::Es256k, provider::KeyAlgorithmProviderImpl,
            rsa::Rsa,
        },
        model::KeyAlgorithmType,
        KeyAlgorithm,
    },
    key_storage::KeyStore,
    repository::imp::http::HttpRepository,
    response_formatter::oidc::OidcResponseFormatter,
    token_signer::imp::KeyStoreTokenSigner,
    util::key_verification::KeyVerification,
};

use config::PicCoreConfig;
use service::{
    did_service::DidService, identifier_service::IdentifierService,
    response_service::ResponseService,
};

pub mod config;
pub mod model;
pub mod service;

pub struct PicCore {
    pub did_service: DidService,
    pub response_service: ResponseService,
    pub identifier_service: IdentifierService,
}

impl PicCore {
    pub fn new(
        config: Option<PicCoreConfig>,
        client: Arc<dyn HttpClient>,
        key_store: Arc<dyn KeyStore>,
        registrar: Arc<dyn Registrar>,
    ) -> Self {
        let config = config.unwrap_or_default();

        // initialize crypto provider
        let crypto_provider = Arc::new(CryptoProviderImpl::new(
            HashMap::from_iter(vec![("sha-256".to_string(), Arc::new(SHA256 {}) as _)]),
            HashMap::from_iter(vec![
                ("ES256".to_string(), Arc::new(ES256Signer {}) as _),
                ("ES256K".to_string(), Arc::new(ES256KSigner {}) as _),
                ("Ed25519".to_string(), Arc::new(EDDSASigner {}) as _),
                ("RS256".to_string(), Arc::new(RS256Signer {}) as _),
            ]),
        ));

        // initialize key algorithm provider
        let key_algorithms: HashMap<String, Arc<dyn KeyAlgorithm>> = HashMap::from_iter(vec![
            (KeyAlgorithmType::Es256.to_string(), Arc::new(Es256) as _),
            (KeyAlgorithmType::Es256k.to_string(), Arc::new(Es256k) as _),
            (KeyAlgorithmType::Eddsa.to_string(), Arc::new(Eddsa) as _),
            (KeyAlgorithmType::Rs256.to_string(), Arc::new(Rsa::default()) as _),
        ]);
        let key_algorithm_provider = Arc::new(KeyAlgorithmProviderImpl::new(
            key_algorithms,
            crypto_provider.clone(),
        ));

        // network
        let repository = Arc::new(HttpRepository::new(client));
        let resolver = Arc::new(Resolver::new(
            config.resolver.resolver_url,
            repository.clone(),
        ));

        // signing and formatting
        let token_signer = Arc::new(KeyStoreTokenSigner::new(
            key_store.clone(),
            key_algorithm_provider.clone(),
        ));
        let formatter = Arc::new(OidcResponseFormatter::new(
            key_store.clone(),
            key_algorithm_provider.clone(),
            crypto_provider.clone(),
            token_signer,
        ));
        let verifier = Arc::new(KeyVerification {
            resolver: resolver.clone(),
            key_algorithm_provider: key_algorithm_provider.clone(),
        });

        let did_service = DidService::new(resolver);

        let response_service = ResponseService::new(
            repository,
            formatter,
            verifier,
            config.response.expires_in_minutes,
        );

        let identifier_service = IdentifierService::new(
            key_store,
            key_algorithm_provider,
            crypto_provider,
            registrar,
            config.identifier.did_method,
            config.identifier.key_algorithm,
        );

        Self {
            did_service,
            response_service,
            identifier_service,
        }
    }
}

#[cfg(test)]
mod test;
