use hmac::Mac;

use super::{HmacSha256, HmacSha512};

pub fn create_hmac(key: &[u8], message: &[u8]) -> Option<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(key).ok()?;
    mac.update(message);
    Some(mac.finalize().into_bytes().to_vec())
}

pub fn create_hmac_sha512(key: &[u8], message: &[u8]) -> Option<Vec<u8>> {
    let mut mac = HmacSha512::new_from_slice(key).ok()?;
    mac.update(message);
    Some(mac.finalize().into_bytes().to_vec())
}

