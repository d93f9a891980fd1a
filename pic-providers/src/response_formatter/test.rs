use std::{collections::HashMap, sync::Arc};

use maplit::btreemap;
use pic_crypto::{
    imp::{hasher::sha256::SHA256, signer::es256::ES256Signer, CryptoProviderImpl},
    Signer,
};
use serde_json::{json, Value};
use time::macros::datetime;

use super::{
    error::{CryptoError, FormatterError},
    model::{OidcResponseContent, VerifiablePresentationContent},
    oidc::OidcResponseFormatter,
    presentation::VerifiablePresentationFormatter,
    TokenLifetime,
};
use crate::{
    common_models::{
        card::{Card, VerifiableCredential},
        contract::{InputContract, PicContract},
        did::Identifier,
        key::KeyReference,
        PublicKeyJwk,
    },
    exchange_protocol::{
        model::{
            IssuanceRequest, IssuanceResponse, OidcRequestContent, PresentationRequest,
            PresentationResponse, Response,
        },
        VERIFIABLE_PRESENTATION_TYPE, VP_CONTEXT_URL,
    },
    jose::{
        decode_b64url,
        jws::{JwsFormat, JwsHeader, JwsToken},
    },
    key_algorithm::{
        imp::{es256::Es256, provider::KeyAlgorithmProviderImpl},
        model::KeyAlgorithmType,
        thumbprint::jwk_thumbprint,
        KeyAlgorithm,
    },
    key_storage::{
        error::KeyStoreError,
        imp::in_memory::InMemoryKeyStore,
        model::{PrivateKey, StoredKey},
        KeyStore,
    },
    token_signer::{
        error::TokenSignerError, imp::KeyStoreTokenSigner, MockTokenSigner, TokenSigner,
    },
};

struct TestContext {
    formatter: OidcResponseFormatter,
    presentation_formatter: VerifiablePresentationFormatter,
    public_key: Vec<u8>,
}

fn responder() -> Identifier {
    Identifier {
        id: "did:ex:abc".into(),
        alias: "persona".to_string(),
        signature_key_reference: KeyReference::from("signature"),
        encryption_key_reference: KeyReference::from("encryption"),
        recovery_key_reference: KeyReference::from("recovery"),
    }
}

fn crypto() -> Arc<CryptoProviderImpl> {
    Arc::new(CryptoProviderImpl::new(
        HashMap::from([("sha-256".to_string(), Arc::new(SHA256 {}) as _)]),
        HashMap::from([("ES256".to_string(), Arc::new(ES256Signer {}) as Arc<dyn Signer>)]),
    ))
}

fn key_algorithm_provider() -> Arc<KeyAlgorithmProviderImpl> {
    Arc::new(KeyAlgorithmProviderImpl::new(
        HashMap::from([("ES256".to_string(), Arc::new(Es256) as Arc<dyn KeyAlgorithm>)]),
        crypto(),
    ))
}

fn context() -> TestContext {
    let generated = Es256.generate_key_pair().unwrap();
    let key_store = Arc::new(InMemoryKeyStore::new());
    key_store
        .save(
            &KeyReference::from("signature"),
            StoredKey::KeyPair(PrivateKey {
                kid: "sign".to_string(),
                key_type: KeyAlgorithmType::Es256,
                public_key: generated.public.to_owned(),
                private_key: generated.private,
            }),
        )
        .unwrap();

    let signer: Arc<dyn TokenSigner> = Arc::new(KeyStoreTokenSigner::new(
        key_store.clone(),
        key_algorithm_provider(),
    ));

    TestContext {
        formatter: OidcResponseFormatter::new(
            key_store,
            key_algorithm_provider(),
            crypto(),
            signer.clone(),
        ),
        presentation_formatter: VerifiablePresentationFormatter::new(signer),
        public_key: generated.public,
    }
}

fn payload<T: serde::de::DeserializeOwned>(token: &str) -> T {
    JwsToken::deserialize(token).unwrap().payload_as().unwrap()
}

fn credential(credential_type: &str) -> VerifiableCredential {
    let (private, public) = ES256Signer::random();
    let mut token = JwsToken::new(
        json!({
            "jti": "urn:pic:credential-1",
            "vc": {
                "@context": [VP_CONTEXT_URL],
                "type": ["VerifiableCredential", credential_type],
                "credentialSubject": { "name": "Jane Doe" }
            },
            "sub": "did:ex:abc",
            "iss": "did:ion:issuer",
            "iat": 1_600_000_000
        })
        .to_string()
        .as_bytes(),
    )
    .unwrap();
    token
        .sign(
            &JwsHeader {
                alg: "ES256".to_string(),
                kid: Some("did:ion:issuer#sign".to_string()),
                typ: Some("JWT".to_string()),
            },
            None,
            |input| ES256Signer {}.sign(input, &public, &private),
        )
        .unwrap();

    VerifiableCredential::from_raw(token.serialize(JwsFormat::Compact).unwrap()).unwrap()
}

fn card(credential_type: &str) -> Card {
    Card {
        card_type: credential_type.to_string(),
        owner: "did:ex:abc".into(),
        verifiable_credential: credential(credential_type),
        display: None,
    }
}

fn issuance_response() -> IssuanceResponse {
    IssuanceResponse::new(IssuanceRequest::new(
        PicContract {
            id: "contract-1".to_string(),
            input: InputContract {
                id: "input-1".to_string(),
                credential_issuer: "https://issuer/issue".to_string(),
                issuer: "did:ion:issuer".to_string(),
                attestations: None,
            },
            display: json!({}),
            schema: None,
        },
        "https://issuer/contract",
    ))
}

fn presentation_response() -> PresentationResponse {
    PresentationResponse::new(PresentationRequest::new(
        "request.token.value",
        OidcRequestContent {
            iss: Some("did:ion:verifier".to_string()),
            redirect_uri: "https://verifier/callback".to_string(),
            state: Some("state-1".to_string()),
            nonce: Some("nonce-1".to_string()),
            ..Default::default()
        },
    )
    .unwrap())
}

#[test]
fn test_credential_from_raw() {
    let credential = credential("DriverLicense");

    assert_eq!(credential.jti, "urn:pic:credential-1");
    assert_eq!(credential.contents.iss, "did:ion:issuer");
    assert_eq!(
        credential.contents.vc.r#type,
        vec!["VerifiableCredential", "DriverLicense"]
    );
    assert_eq!(credential.contents.exp, None);
}

#[test]
fn test_token_lifetime_floors_to_seconds() {
    let lifetime = TokenLifetime::starting_at(datetime!(2020-09-13 12:26:40.999 UTC), 5);

    assert_eq!(lifetime.iat, 1_600_000_000);
    assert_eq!(lifetime.exp, 1_600_000_300);
}

#[tokio::test]
async fn test_issuance_response_end_to_end() {
    let context = context();
    let mut response = issuance_response();
    response
        .collected
        .cards
        .insert("DriverLicense".to_string(), card("DriverLicense"));
    let raw_credential = response.collected.cards["DriverLicense"]
        .verifiable_credential
        .raw
        .to_owned();

    let token = context
        .formatter
        .form_and_sign_response(&response.into(), &responder(), 5)
        .await
        .unwrap();

    let contents: Value = payload(&token);
    assert_eq!(contents["contract"], "https://issuer/contract");
    assert_eq!(contents["aud"], "https://issuer/issue");
    assert_eq!(contents["did"], "did:ex:abc");
    assert!(contents.get("nonce").is_none());
    assert!(contents.get("state").is_none());
    assert!(contents["attestations"]["selfIssued"].is_null());
    assert!(contents["attestations"]["tokens"].is_null());
    assert!(contents["sub_jwk"].get("d").is_none());

    let presentation_token = contents["attestations"]["presentations"]["DriverLicense"]
        .as_str()
        .unwrap();
    let presentation: VerifiablePresentationContent = payload(presentation_token);
    assert_eq!(presentation.vp.verifiable_credential, vec![raw_credential]);
    assert_eq!(presentation.vp.context, vec![VP_CONTEXT_URL]);
    assert_eq!(presentation.vp.r#type, vec![VERIFIABLE_PRESENTATION_TYPE]);
    assert_eq!(presentation.iss.as_str(), "did:ex:abc");
    assert_eq!(presentation.aud, "did:ion:issuer");

    // one clock sample for the whole response
    let contents: OidcResponseContent = payload(&token);
    assert_eq!(presentation.iat, contents.iat);
    assert_eq!(presentation.nbf, contents.iat);
    assert_eq!(presentation.exp, contents.exp);
    assert_ne!(presentation.jti, contents.jti);

    let parsed = JwsToken::deserialize(&token).unwrap();
    let signature = decode_b64url(&parsed.signatures[0].signature).unwrap();
    assert!(ES256Signer {}
        .verify(
            parsed.signing_input(&parsed.signatures[0].protected).as_bytes(),
            &signature,
            &context.public_key
        )
        .is_ok());
}

#[tokio::test]
async fn test_presentation_response_without_attestations() {
    let context = context();

    let token = context
        .formatter
        .form_and_sign_response(&presentation_response().into(), &responder(), 5)
        .await
        .unwrap();

    let contents: Value = payload(&token);
    assert_eq!(contents["nonce"], "nonce-1");
    assert_eq!(contents["state"], "state-1");
    assert_eq!(contents["aud"], "https://verifier/callback");
    assert!(contents.get("contract").is_none());
    assert_eq!(contents["attestations"], json!({}));

    let contents: OidcResponseContent = payload(&token);
    assert_eq!(contents.attestations.self_issued, None);
    assert_eq!(contents.attestations.tokens, None);
    assert_eq!(contents.attestations.presentations, None);
}

#[tokio::test]
async fn test_expiry_and_subject() {
    let context = context();

    let token = context
        .formatter
        .form_and_sign_response(&presentation_response().into(), &responder(), 5)
        .await
        .unwrap();

    let contents: OidcResponseContent = payload(&token);
    assert_eq!(contents.exp - contents.iat, 300);
    let jwk: PublicKeyJwk = contents.sub_jwk.into();
    assert_eq!(contents.sub, jwk_thumbprint(&jwk, &SHA256 {}).unwrap());
}

#[tokio::test]
async fn test_collected_tokens_and_claims_pass_through() {
    let context = context();
    let mut response: Response = presentation_response().into();
    response.collected_mut().id_tokens = btreemap! {
        "https://login.example".to_string() => "id.token.value".to_string(),
    };
    response.collected_mut().self_issued_claims = btreemap! {
        "name".to_string() => "Jane".to_string(),
    };

    let token = context
        .formatter
        .form_and_sign_response(&response, &responder(), 5)
        .await
        .unwrap();

    let contents: OidcResponseContent = payload(&token);
    assert_eq!(
        contents.attestations.tokens,
        Some(btreemap! {
            "https://login.example".to_string() => "id.token.value".to_string(),
        })
    );
    assert_eq!(
        contents.attestations.self_issued,
        Some(btreemap! { "name".to_string() => "Jane".to_string() })
    );
    assert_eq!(contents.attestations.presentations, None);
}

#[tokio::test]
async fn test_missing_signing_key() {
    let mut signer = MockTokenSigner::new();
    signer.expect_sign_with_identifier().never();

    let formatter = OidcResponseFormatter::new(
        Arc::new(InMemoryKeyStore::new()),
        key_algorithm_provider(),
        crypto(),
        Arc::new(signer),
    );

    let mut response = issuance_response();
    response
        .collected
        .cards
        .insert("DriverLicense".to_string(), card("DriverLicense"));

    let error = formatter
        .form_and_sign_response(&response.into(), &responder(), 5)
        .await
        .unwrap_err();

    assert_eq!(
        error,
        CryptoError {
            cause: FormatterError::KeyStore(KeyStoreError::NotFound("signature".to_string()))
        }
    );
    assert_eq!(error.to_string(), "Unable to sign response contents");
}

#[tokio::test]
async fn test_signer_failure() {
    let generated = Es256.generate_key_pair().unwrap();
    let mut signer = MockTokenSigner::new();
    signer
        .expect_sign_with_identifier()
        .once()
        .returning(|_, _| {
            Err(TokenSignerError::KeyStore(KeyStoreError::Unavailable(
                "locked".to_string(),
            )))
        });

    let key_store = Arc::new(InMemoryKeyStore::new());
    key_store
        .save(
            &KeyReference::from("signature"),
            StoredKey::KeyPair(PrivateKey {
                kid: "sign".to_string(),
                key_type: KeyAlgorithmType::Es256,
                public_key: generated.public,
                private_key: generated.private,
            }),
        )
        .unwrap();

    let formatter = OidcResponseFormatter::new(
        key_store,
        key_algorithm_provider(),
        crypto(),
        Arc::new(signer),
    );

    let error = formatter
        .form_and_sign_response(&presentation_response().into(), &responder(), 5)
        .await
        .unwrap_err();

    assert!(matches!(error.cause, FormatterError::TokenSigner(_)));
}

#[tokio::test]
async fn test_create_presentation_single_credential() {
    let context = context();
    let credential = credential("DriverLicense");

    let token = context
        .presentation_formatter
        .create_presentation(
            std::slice::from_ref(&credential),
            "did:ion:verifier",
            &responder(),
            5,
        )
        .await
        .unwrap();

    let presentation: VerifiablePresentationContent = payload(&token);
    assert_eq!(presentation.vp.verifiable_credential, vec![credential.raw]);
    assert_eq!(presentation.aud, "did:ion:verifier");
    assert_eq!(presentation.nbf, presentation.iat);
    assert_eq!(presentation.exp - presentation.iat, 300);
}

#[tokio::test]
async fn test_create_presentation_rejects_batches() {
    let context = context();
    let credentials = vec![credential("DriverLicense"), credential("Passport")];

    assert_eq!(
        Err(FormatterError::SingleCredentialRequired(2)),
        context
            .presentation_formatter
            .create_presentation(&credentials, "did:ion:verifier", &responder(), 5)
            .await
    );
    assert_eq!(
        Err(FormatterError::SingleCredentialRequired(0)),
        context
            .presentation_formatter
            .create_presentation(&[], "did:ion:verifier", &responder(), 5)
            .await
    );
}
