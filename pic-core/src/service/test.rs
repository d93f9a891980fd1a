use std::{collections::HashMap, sync::Arc};

use pic_crypto::{
    imp::{hasher::sha256::SHA256, signer::es256::ES256Signer, CryptoProviderImpl},
    Signer, SignerError,
};
use pic_providers::{
    common_models::{
        contract::{InputContract, PicContract},
        did::{DidValue, Identifier},
        key::KeyReference,
    },
    did::{error::RegistrarError, registrar::MockRegistrar, resolver::Resolver},
    exchange_protocol::{
        error::ExchangeProtocolError,
        model::{
            IssuanceRequest, IssuanceResponse, OidcRequestContent, PresentationRequest,
            PresentationResponse,
        },
    },
    jose::{
        error::JoseError,
        jws::{verifier::MockTokenVerifier, JwsFormat, JwsHeader, JwsToken},
    },
    key_algorithm::{
        imp::{es256::Es256, es256k::Es256k, provider::KeyAlgorithmProviderImpl},
        KeyAlgorithm,
    },
    key_storage::{
        error::{KeyDerivationError, KeyStoreError},
        imp::in_memory::InMemoryKeyStore,
        model::{PrivateKey, SecretKey, StoredKey},
        KeyStore,
    },
    repository::{
        error::RepositoryError, model::ServiceResponse, MockCardRepository,
        MockIdentifierRepository,
    },
    response_formatter::oidc::OidcResponseFormatter,
    token_signer::imp::KeyStoreTokenSigner,
};
use serde_json::{json, Value};
use zeroize::Zeroizing;

use super::{
    did_service::DidService, error::ServiceError, identifier_service::IdentifierService,
    response_service::ResponseService,
};
use crate::config::IdentifierConfig;

const SEED: &str = "seed";

fn crypto() -> Arc<CryptoProviderImpl> {
    Arc::new(CryptoProviderImpl::new(
        HashMap::from([("sha-256".to_string(), Arc::new(SHA256 {}) as _)]),
        HashMap::from([("ES256".to_string(), Arc::new(ES256Signer {}) as Arc<dyn Signer>)]),
    ))
}

fn key_algorithm_provider() -> Arc<KeyAlgorithmProviderImpl> {
    Arc::new(KeyAlgorithmProviderImpl::new(
        HashMap::from([
            ("ES256".to_string(), Arc::new(Es256) as Arc<dyn KeyAlgorithm>),
            ("ES256K".to_string(), Arc::new(Es256k) as _),
        ]),
        crypto(),
    ))
}

fn responder() -> Identifier {
    Identifier {
        id: "did:ex:abc".into(),
        alias: "persona".to_string(),
        signature_key_reference: KeyReference::from("signature"),
        encryption_key_reference: KeyReference::from("signature"),
        recovery_key_reference: KeyReference::from("signature"),
    }
}

fn key_store_with_responder_key() -> Arc<InMemoryKeyStore> {
    let key = Es256.generate_key_pair().unwrap();
    let key_store = Arc::new(InMemoryKeyStore::new());
    key_store
        .save(
            &KeyReference::from("signature"),
            StoredKey::KeyPair(PrivateKey {
                kid: "sign".to_string(),
                key_type: "ES256".parse().unwrap(),
                public_key: key.public,
                private_key: key.private,
            }),
        )
        .unwrap();
    key_store
}

fn response_service(
    key_store: Arc<InMemoryKeyStore>,
    repository: MockCardRepository,
    verifier: MockTokenVerifier,
) -> ResponseService {
    let signer = Arc::new(KeyStoreTokenSigner::new(
        key_store.clone(),
        key_algorithm_provider(),
    ));
    let formatter = Arc::new(OidcResponseFormatter::new(
        key_store,
        key_algorithm_provider(),
        crypto(),
        signer,
    ));

    ResponseService::new(Arc::new(repository), formatter, Arc::new(verifier), 5)
}

fn sign_es256(payload: Value, kid: &str) -> String {
    let (private, public) = ES256Signer::random();
    let mut token = JwsToken::new(payload.to_string().as_bytes()).unwrap();
    token
        .sign(
            &JwsHeader {
                alg: "ES256".to_string(),
                kid: Some(kid.to_string()),
                typ: Some("JWT".to_string()),
            },
            None,
            |input| ES256Signer {}.sign(input, &public, &private),
        )
        .unwrap();
    token.serialize(JwsFormat::Compact).unwrap()
}

fn contract() -> PicContract {
    PicContract {
        id: "contract-1".to_string(),
        input: InputContract {
            id: "input-1".to_string(),
            credential_issuer: "https://issuer/issue".to_string(),
            issuer: "did:ion:issuer".to_string(),
            attestations: None,
        },
        display: json!({ "card": { "title": "Driver License" } }),
        schema: None,
    }
}

fn presentation_request() -> PresentationRequest {
    PresentationRequest::new(
        "request.token.value",
        OidcRequestContent {
            iss: Some("did:ion:verifier".to_string()),
            redirect_uri: "https://verifier/callback".to_string(),
            state: Some("state-1".to_string()),
            nonce: Some("nonce-1".to_string()),
            ..Default::default()
        },
    )
    .unwrap()
}

#[tokio::test]
async fn test_get_issuance_request() {
    let mut repository = MockCardRepository::new();
    repository
        .expect_get_contract()
        .withf(|url| url == "https://issuer/contract")
        .once()
        .returning(|_| Ok(contract()));

    let service = response_service(
        key_store_with_responder_key(),
        repository,
        MockTokenVerifier::new(),
    );

    let request = service
        .get_issuance_request("https://issuer/contract")
        .await
        .unwrap();

    assert_eq!(request.contract_url, "https://issuer/contract");
    assert_eq!(request.entity_identifier(), "did:ion:issuer");
}

#[tokio::test]
async fn test_get_presentation_request() {
    let token = sign_es256(
        json!({
            "iss": "did:ion:verifier",
            "redirect_uri": "https://verifier/callback",
            "nonce": "nonce-1",
            "state": "state-1"
        }),
        "did:ion:verifier#sign",
    );

    let mut repository = MockCardRepository::new();
    let served = token.to_owned();
    repository
        .expect_get_request()
        .once()
        .returning(move |_| Ok(served.to_owned()));

    let mut verifier = MockTokenVerifier::new();
    verifier
        .expect_verify()
        .withf(|issuer, kid, algorithm, _, _| {
            issuer == &Some(DidValue::from("did:ion:verifier"))
                && kid == &Some("did:ion:verifier#sign")
                && *algorithm == *"ES256"
        })
        .once()
        .returning(|_, _, _, _, _| Ok(()));

    let service = response_service(key_store_with_responder_key(), repository, verifier);

    let request = service
        .get_presentation_request("https://verifier/request")
        .await
        .unwrap();

    assert_eq!(request.serialized_token, token);
    assert_eq!(request.entity_identifier, "did:ion:verifier");
    assert_eq!(request.content.nonce.as_deref(), Some("nonce-1"));
}

#[tokio::test]
async fn test_get_presentation_request_without_requester() {
    let token = sign_es256(
        json!({
            "redirect_uri": "https://verifier/callback",
            "nonce": "nonce-1"
        }),
        "did:ion:verifier#sign",
    );

    let mut repository = MockCardRepository::new();
    repository
        .expect_get_request()
        .once()
        .returning(move |_| Ok(token.to_owned()));

    let mut verifier = MockTokenVerifier::new();
    verifier
        .expect_verify()
        .once()
        .returning(|_, _, _, _, _| Ok(()));

    let service = response_service(key_store_with_responder_key(), repository, verifier);

    let result = service
        .get_presentation_request("https://verifier/request")
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::ExchangeProtocol(
            ExchangeProtocolError::MissingRequester
        ))
    ));
}

#[tokio::test]
async fn test_get_presentation_request_rejects_bad_signature() {
    let token = sign_es256(json!({ "iss": "did:ion:verifier" }), "did:ion:verifier#sign");

    let mut repository = MockCardRepository::new();
    repository
        .expect_get_request()
        .once()
        .returning(move |_| Ok(token.to_owned()));

    let mut verifier = MockTokenVerifier::new();
    verifier
        .expect_verify()
        .once()
        .returning(|_, _, _, _, _| Err(SignerError::InvalidSignature));

    let service = response_service(key_store_with_responder_key(), repository, verifier);

    let result = service
        .get_presentation_request("https://verifier/request")
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Jose(JoseError::Signature(
            SignerError::InvalidSignature
        )))
    ));
}

#[tokio::test]
async fn test_send_presentation_response() {
    let mut repository = MockCardRepository::new();
    repository
        .expect_send_presentation_response()
        .withf(|url, _, state| {
            url == "https://verifier/callback" && state == &Some("state-1".to_string())
        })
        .once()
        .returning(|_, token, _| {
            let contents: Value = JwsToken::deserialize(token).unwrap().payload_as().unwrap();
            assert_eq!(contents["nonce"], "nonce-1");
            assert_eq!(contents["aud"], "https://verifier/callback");
            Ok(ServiceResponse {
                status: 200,
                body: String::new(),
            })
        });

    let service = response_service(
        key_store_with_responder_key(),
        repository,
        MockTokenVerifier::new(),
    );

    let response = service
        .send_presentation_response(
            PresentationResponse::new(presentation_request()),
            &responder(),
        )
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_send_issuance_response() {
    let credential = sign_es256(
        json!({
            "jti": "urn:pic:credential-1",
            "vc": {
                "@context": ["https://www.w3.org/2018/credentials/v1"],
                "type": ["VerifiableCredential", "DriverLicense"],
                "credentialSubject": { "name": "Jane Doe" }
            },
            "sub": "did:ex:abc",
            "iss": "did:ion:issuer",
            "iat": 1_600_000_000
        }),
        "did:ion:issuer#sign",
    );

    let mut repository = MockCardRepository::new();
    let issued = credential.to_owned();
    repository
        .expect_send_issuance_response()
        .withf(|url, token| url == "https://issuer/issue" && token.split('.').count() == 3)
        .once()
        .returning(move |_, _| {
            Ok(ServiceResponse {
                status: 200,
                body: json!({ "vc": issued }).to_string(),
            })
        });

    let service = response_service(
        key_store_with_responder_key(),
        repository,
        MockTokenVerifier::new(),
    );

    let card = service
        .send_issuance_response(
            IssuanceResponse::new(IssuanceRequest::new(contract(), "https://issuer/contract")),
            &responder(),
        )
        .await
        .unwrap();

    assert_eq!(card.card_type, "DriverLicense");
    assert_eq!(card.owner, DidValue::from("did:ex:abc"));
    assert_eq!(card.verifiable_credential.raw, credential);
    assert_eq!(card.verifiable_credential.jti, "urn:pic:credential-1");
    assert_eq!(card.display, Some(contract().display));
}

#[tokio::test]
async fn test_send_issuance_response_without_signing_key() {
    let mut repository = MockCardRepository::new();
    repository.expect_send_issuance_response().never();

    let service = response_service(
        Arc::new(InMemoryKeyStore::new()),
        repository,
        MockTokenVerifier::new(),
    );

    let result = service
        .send_issuance_response(
            IssuanceResponse::new(IssuanceRequest::new(contract(), "https://issuer/contract")),
            &responder(),
        )
        .await;

    assert!(matches!(result, Err(ServiceError::Crypto(_))));
}

fn identifier_service(key_store: Arc<InMemoryKeyStore>, registrar: MockRegistrar) -> IdentifierService {
    let config = IdentifierConfig::default();

    IdentifierService::new(
        key_store,
        key_algorithm_provider(),
        crypto(),
        Arc::new(registrar),
        config.did_method,
        config.key_algorithm,
    )
}

fn key_store_with_seed() -> Arc<InMemoryKeyStore> {
    let key_store = Arc::new(InMemoryKeyStore::new());
    key_store
        .save(
            &KeyReference::from(SEED),
            StoredKey::Secret(SecretKey {
                kid: SEED.to_string(),
                value: Zeroizing::new(b"0123456789abcdef0123456789abcdef".to_vec()),
            }),
        )
        .unwrap();
    key_store
}

#[tokio::test]
async fn test_create_pairwise_identifier_is_deterministic() {
    let key_store = key_store_with_seed();

    let mut registrar = MockRegistrar::new();
    registrar
        .expect_register()
        .withf(|identifier| {
            identifier.id.as_str().starts_with("did:ion:") && identifier.alias == "persona"
        })
        .times(3)
        .returning(Ok);

    let service = identifier_service(key_store.clone(), registrar);

    let first = service
        .create_pairwise_identifier(&KeyReference::from(SEED), "persona", "did:ion:peer-a")
        .await
        .unwrap();
    let second = service
        .create_pairwise_identifier(&KeyReference::from(SEED), "persona", "did:ion:peer-a")
        .await
        .unwrap();
    let other_peer = service
        .create_pairwise_identifier(&KeyReference::from(SEED), "persona", "did:ion:peer-b")
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_ne!(first.id, other_peer.id);
    assert_ne!(
        key_store
            .get_public_key(&first.signature_key_reference)
            .unwrap()
            .public_key,
        key_store
            .get_public_key(&other_peer.signature_key_reference)
            .unwrap()
            .public_key
    );
    // seed plus two distinct pairwise keys
    assert_eq!(key_store.list().unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_pairwise_identifier_uses_registered_id() {
    let mut registrar = MockRegistrar::new();
    registrar.expect_register().once().returning(|identifier| {
        Ok(Identifier {
            id: "did:ion:short-form".into(),
            ..identifier
        })
    });

    let service = identifier_service(key_store_with_seed(), registrar);

    let identifier = service
        .create_pairwise_identifier(&KeyReference::from(SEED), "persona", "did:ion:peer")
        .await
        .unwrap();

    assert_eq!(identifier.id, DidValue::from("did:ion:short-form"));
}

#[tokio::test]
async fn test_create_pairwise_identifier_registration_failed() {
    let mut registrar = MockRegistrar::new();
    registrar
        .expect_register()
        .once()
        .returning(|_| Err(RegistrarError::Conflict("did:ion:taken".to_string())));

    let service = identifier_service(key_store_with_seed(), registrar);

    let result = service
        .create_pairwise_identifier(&KeyReference::from(SEED), "persona", "did:ion:peer")
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Registrar(RegistrarError::Conflict(_)))
    ));
}

#[tokio::test]
async fn test_create_pairwise_identifier_without_seed() {
    let mut registrar = MockRegistrar::new();
    registrar.expect_register().never();

    let service = identifier_service(Arc::new(InMemoryKeyStore::new()), registrar);

    let result = service
        .create_pairwise_identifier(&KeyReference::from(SEED), "persona", "did:ion:peer")
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::KeyDerivation(KeyDerivationError::UnusableSeed(reference))) if reference == SEED
    ));
}

#[tokio::test]
async fn test_resolve_did_failure_keeps_identifier() {
    let mut repository = MockIdentifierRepository::new();
    repository
        .expect_resolve_identifier()
        .once()
        .returning(|_, _| Err(RepositoryError::Network("timeout".to_string())));

    let service = DidService::new(Arc::new(Resolver::new(
        "https://resolver.example/identifiers",
        Arc::new(repository),
    )));

    let result = service.resolve_did(&DidValue::from("did:ion:abc")).await;

    let Err(ServiceError::Resolver(error)) = result else {
        panic!("expected resolver error");
    };
    assert_eq!(error.identifier, "did:ion:abc");
    assert_eq!(error.cause, RepositoryError::Network("timeout".to_string()));
}

#[test]
fn test_key_store_error_converts() {
    let error: ServiceError = KeyStoreError::NotFound("signature".to_string()).into();
    assert_eq!(error.to_string(), "Key store error: `Key not found: `signature``");
}
