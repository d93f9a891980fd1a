use super::PublicKeyJwkDTO;
use crate::common_models::{
    PublicKeyJwk, PublicKeyJwkEllipticData, PublicKeyJwkOctData, PublicKeyJwkRsaData,
};

impl From<PublicKeyJwk> for PublicKeyJwkDTO {
    fn from(value: PublicKeyJwk) -> Self {
        match value {
            PublicKeyJwk::Ec(PublicKeyJwkEllipticData { r#use, crv, x, y }) => Self::Ec {
                crv,
                x,
                y,
                key_use: r#use,
            },
            // OKP keys have no y coordinate
            PublicKeyJwk::Okp(PublicKeyJwkEllipticData { r#use, crv, x, .. }) => Self::Okp {
                crv,
                x,
                key_use: r#use,
            },
            PublicKeyJwk::Rsa(PublicKeyJwkRsaData { r#use, e, n }) => Self::Rsa {
                e,
                n,
                key_use: r#use,
            },
            PublicKeyJwk::Oct(PublicKeyJwkOctData { r#use, k }) => Self::Oct { k, key_use: r#use },
        }
    }
}

impl From<PublicKeyJwkDTO> for PublicKeyJwk {
    fn from(value: PublicKeyJwkDTO) -> Self {
        match value {
            PublicKeyJwkDTO::Ec {
                crv,
                x,
                y,
                key_use,
            } => Self::Ec(PublicKeyJwkEllipticData {
                r#use: key_use,
                crv,
                x,
                y,
            }),
            PublicKeyJwkDTO::Okp { crv, x, key_use } => Self::Okp(PublicKeyJwkEllipticData {
                r#use: key_use,
                crv,
                x,
                y: None,
            }),
            PublicKeyJwkDTO::Rsa { e, n, key_use } => Self::Rsa(PublicKeyJwkRsaData {
                r#use: key_use,
                e,
                n,
            }),
            PublicKeyJwkDTO::Oct { k, key_use } => Self::Oct(PublicKeyJwkOctData {
                r#use: key_use,
                k,
            }),
        }
    }
}
