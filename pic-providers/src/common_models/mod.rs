pub mod card;
pub mod contract;
pub mod did;
pub mod key;
pub mod macros;

/// Public half of a JSON web key. Private members are never represented here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicKeyJwk {
    Ec(PublicKeyJwkEllipticData),
    Rsa(PublicKeyJwkRsaData),
    Okp(PublicKeyJwkEllipticData),
    Oct(PublicKeyJwkOctData),
}

impl PublicKeyJwk {
    pub fn kty(&self) -> &'static str {
        match self {
            PublicKeyJwk::Ec(_) => "EC",
            PublicKeyJwk::Rsa(_) => "RSA",
            PublicKeyJwk::Okp(_) => "OKP",
            PublicKeyJwk::Oct(_) => "oct",
        }
    }

    pub fn crv(&self) -> Option<&str> {
        match self {
            PublicKeyJwk::Ec(data) | PublicKeyJwk::Okp(data) => Some(&data.crv),
            PublicKeyJwk::Rsa(_) | PublicKeyJwk::Oct(_) => None,
        }
    }

    /// The `use` member, usually `sig` for keys held by this wallet.
    pub fn key_use(&self) -> Option<&str> {
        let key_use = match self {
            PublicKeyJwk::Ec(data) | PublicKeyJwk::Okp(data) => &data.r#use,
            PublicKeyJwk::Rsa(data) => &data.r#use,
            PublicKeyJwk::Oct(data) => &data.r#use,
        };
        key_use.as_deref()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKeyJwkRsaData {
    pub r#use: Option<String>,
    pub e: String,
    pub n: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKeyJwkOctData {
    pub r#use: Option<String>,
    pub k: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKeyJwkEllipticData {
    pub r#use: Option<String>,
    pub crv: String,
    pub x: String,
    pub y: Option<String>,
}
