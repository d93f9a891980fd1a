//! JWK coordinate handling shared by the short Weierstrass curves.

use ct_codecs::{Base64UrlSafeNoPadding, Decoder, Encoder};

use crate::{
    common_models::{PublicKeyJwk, PublicKeyJwkEllipticData},
    key_algorithm::error::KeyAlgorithmError,
};

const COORDINATE_LENGTH: usize = 32;

/// Uncompressed SEC1 point built from the `x` and `y` members.
pub(super) fn sec1_from_jwk(
    jwk: &PublicKeyJwk,
    accepted_curves: &[&str],
) -> Result<Vec<u8>, KeyAlgorithmError> {
    let PublicKeyJwk::Ec(data) = jwk else {
        return Err(KeyAlgorithmError::InvalidKey("invalid kty".to_string()));
    };

    if !accepted_curves.contains(&data.crv.as_str()) {
        return Err(KeyAlgorithmError::UnsupportedCurve(data.crv.to_owned()));
    }

    let x = decode_coordinate(&data.x)?;
    let y = decode_coordinate(
        data.y
            .as_ref()
            .ok_or(KeyAlgorithmError::InvalidKey("Y is missing".to_string()))?,
    )?;

    Ok([&[0x04], x.as_slice(), y.as_slice()].concat())
}

pub(super) fn jwk_from_coordinates(
    crv: &str,
    x: &[u8],
    y: &[u8],
    r#use: Option<String>,
) -> Result<PublicKeyJwk, KeyAlgorithmError> {
    Ok(PublicKeyJwk::Ec(PublicKeyJwkEllipticData {
        r#use,
        crv: crv.to_string(),
        x: Base64UrlSafeNoPadding::encode_to_string(x)
            .map_err(|e| KeyAlgorithmError::InvalidKey(e.to_string()))?,
        y: Some(
            Base64UrlSafeNoPadding::encode_to_string(y)
                .map_err(|e| KeyAlgorithmError::InvalidKey(e.to_string()))?,
        ),
    }))
}

fn decode_coordinate(value: &str) -> Result<Vec<u8>, KeyAlgorithmError> {
    let bytes = Base64UrlSafeNoPadding::decode_to_vec(value, None)
        .map_err(|e| KeyAlgorithmError::InvalidKey(e.to_string()))?;

    if bytes.len() != COORDINATE_LENGTH {
        return Err(KeyAlgorithmError::InvalidKey(format!(
            "invalid coordinate length {}",
            bytes.len()
        )));
    }

    Ok(bytes)
}
