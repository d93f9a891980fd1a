use std::sync::Arc;

use pic_crypto::{imp::signer::es256k::ES256KSigner, Signer};
use pic_providers::{
    common_dto::PublicKeyJwkDTO,
    common_models::did::DidValue,
    did::registrar::MockRegistrar,
    http_client::imp::reqwest_client::ReqwestClient,
    jose::jws::{JwsFormat, JwsHeader, JwsToken},
    key_algorithm::{imp::es256k::Es256k, KeyAlgorithm},
    key_storage::imp::in_memory::InMemoryKeyStore,
};
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::{
    config::{PicCoreConfig, ResolverConfig},
    PicCore,
};

const VERIFIER: &str = "did:ion:verifier";

fn core_with_resolver(mock_server: &MockServer) -> PicCore {
    PicCore::new(
        Some(PicCoreConfig {
            resolver: ResolverConfig {
                resolver_url: format!("{}/1.0/identifiers", mock_server.uri()),
            },
            ..Default::default()
        }),
        Arc::new(ReqwestClient::default()),
        Arc::new(InMemoryKeyStore::new()),
        Arc::new(MockRegistrar::new()),
    )
}

/// Serves the verifier's document with its key under the legacy `P-256K` name.
async fn mount_verifier_document(mock_server: &MockServer, public_key: &[u8]) {
    let mut jwk = serde_json::to_value(PublicKeyJwkDTO::from(
        Es256k.bytes_to_jwk(public_key, None).unwrap(),
    ))
    .unwrap();
    jwk["crv"] = json!("P-256K");

    Mock::given(method("GET"))
        .and(path(format!("/1.0/identifiers/{VERIFIER}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "didDocument": {
                "id": VERIFIER,
                "publicKey": [{
                    "id": "#sign",
                    "type": "EcdsaSecp256k1VerificationKey2019",
                    "publicKeyJwk": jwk
                }]
            }
        })))
        .mount(mock_server)
        .await;
}

#[test]
fn test_config_defaults() {
    let config: PicCoreConfig =
        serde_json::from_value(json!({ "response": { "expiresInMinutes": 10 } })).unwrap();

    assert_eq!(config.response.expires_in_minutes, 10);
    assert_eq!(config.resolver, ResolverConfig::default());
    assert_eq!(config.identifier.did_method, "ion");
    assert_eq!(
        config.identifier.key_algorithm.named_curve.as_deref(),
        Some("P-256K")
    );
}

#[tokio::test]
async fn test_resolve_did_over_http() {
    let mock_server = MockServer::start().await;
    let (_, public_key) = ES256KSigner::random();
    mount_verifier_document(&mock_server, &public_key).await;

    let core = core_with_resolver(&mock_server);

    let document = core
        .did_service
        .resolve_did(&DidValue::from(VERIFIER))
        .await
        .unwrap();

    assert_eq!(document.id, DidValue::from(VERIFIER));
    assert_eq!(
        document.find_public_key(Some("did:ion:verifier#sign")).unwrap().id,
        "#sign"
    );
}

#[tokio::test]
async fn test_get_presentation_request_over_http() {
    let mock_server = MockServer::start().await;
    let (private_key, public_key) = ES256KSigner::random();
    mount_verifier_document(&mock_server, &public_key).await;

    let mut token = JwsToken::new(
        json!({
            "iss": VERIFIER,
            "client_id": "https://verifier/callback",
            "redirect_uri": "https://verifier/callback",
            "response_mode": "form_post",
            "nonce": "nonce-1",
            "state": "state-1"
        })
        .to_string()
        .as_bytes(),
    )
    .unwrap();
    token
        .sign(
            &JwsHeader {
                alg: "ES256K".to_string(),
                kid: Some(format!("{VERIFIER}#sign")),
                typ: Some("JWT".to_string()),
            },
            None,
            |input| ES256KSigner {}.sign(input, &public_key, &private_key),
        )
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/request"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(token.serialize(JwsFormat::Compact).unwrap()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let core = core_with_resolver(&mock_server);

    let request = core
        .response_service
        .get_presentation_request(&format!("{}/request", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(request.entity_identifier, VERIFIER);
    assert_eq!(request.content.redirect_uri, "https://verifier/callback");
    assert_eq!(request.content.state.as_deref(), Some("state-1"));
}
