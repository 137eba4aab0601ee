use std::fmt;
use std::str::FromStr;

use md5::Md5;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Hash algorithm not supported: {0:?}")]
pub struct UnknownAlgorithm(pub String);

/// Digest algorithms an essential hash can be computed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

const ALL: [HashAlgorithm; 12] = [
    HashAlgorithm::Md5,
    HashAlgorithm::Sha1,
    HashAlgorithm::Sha224,
    HashAlgorithm::Sha256,
    HashAlgorithm::Sha384,
    HashAlgorithm::Sha512,
    HashAlgorithm::Sha512_224,
    HashAlgorithm::Sha512_256,
    HashAlgorithm::Sha3_224,
    HashAlgorithm::Sha3_256,
    HashAlgorithm::Sha3_384,
    HashAlgorithm::Sha3_512,
];

impl HashAlgorithm {
    /// Every supported algorithm, in a stable order.
    pub fn supported() -> &'static [HashAlgorithm] {
        &ALL
    }

    /// Look an algorithm up by name, ignoring ASCII case.
    ///
    /// Canonical names are the ones [`HashAlgorithm::name`] returns; the
    /// dashed (`sha-256`) and slashed (`sha512/256`) spellings are accepted too.
    pub fn from_name(name: &str) -> Result<Self, UnknownAlgorithm> {
        let lowered = name.to_ascii_lowercase();
        let algorithm = match lowered.as_str() {
            "md5" => HashAlgorithm::Md5,
            "sha1" | "sha-1" => HashAlgorithm::Sha1,
            "sha224" | "sha-224" => HashAlgorithm::Sha224,
            "sha256" | "sha-256" => HashAlgorithm::Sha256,
            "sha384" | "sha-384" => HashAlgorithm::Sha384,
            "sha512" | "sha-512" => HashAlgorithm::Sha512,
            "sha512-224" | "sha512/224" | "sha-512/224" => HashAlgorithm::Sha512_224,
            "sha512-256" | "sha512/256" | "sha-512/256" => HashAlgorithm::Sha512_256,
            "sha3-224" => HashAlgorithm::Sha3_224,
            "sha3-256" => HashAlgorithm::Sha3_256,
            "sha3-384" => HashAlgorithm::Sha3_384,
            "sha3-512" => HashAlgorithm::Sha3_512,
            _ => return Err(UnknownAlgorithm(name.to_string())),
        };
        Ok(algorithm)
    }

    /// Canonical lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Sha512_224 => "sha512-224",
            HashAlgorithm::Sha512_256 => "sha512-256",
            HashAlgorithm::Sha3_224 => "sha3-224",
            HashAlgorithm::Sha3_256 => "sha3-256",
            HashAlgorithm::Sha3_384 => "sha3-384",
            HashAlgorithm::Sha3_512 => "sha3-512",
        }
    }

    /// Digest size in bytes.
    pub fn digest_len(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha224 | HashAlgorithm::Sha512_224 | HashAlgorithm::Sha3_224 => 28,
            HashAlgorithm::Sha256 | HashAlgorithm::Sha512_256 | HashAlgorithm::Sha3_256 => 32,
            HashAlgorithm::Sha384 | HashAlgorithm::Sha3_384 => 48,
            HashAlgorithm::Sha512 | HashAlgorithm::Sha3_512 => 64,
        }
    }

    /// Hash `bytes` and return the digest as lower-case hex.
    pub fn hex_digest(self, bytes: &[u8]) -> String {
        match self {
            HashAlgorithm::Md5 => hex_digest_with::<Md5>(bytes),
            HashAlgorithm::Sha1 => hex_digest_with::<Sha1>(bytes),
            HashAlgorithm::Sha224 => hex_digest_with::<Sha224>(bytes),
            HashAlgorithm::Sha256 => hex_digest_with::<Sha256>(bytes),
            HashAlgorithm::Sha384 => hex_digest_with::<Sha384>(bytes),
            HashAlgorithm::Sha512 => hex_digest_with::<Sha512>(bytes),
            HashAlgorithm::Sha512_224 => hex_digest_with::<Sha512_224>(bytes),
            HashAlgorithm::Sha512_256 => hex_digest_with::<Sha512_256>(bytes),
            HashAlgorithm::Sha3_224 => hex_digest_with::<Sha3_224>(bytes),
            HashAlgorithm::Sha3_256 => hex_digest_with::<Sha3_256>(bytes),
            HashAlgorithm::Sha3_384 => hex_digest_with::<Sha3_384>(bytes),
            HashAlgorithm::Sha3_512 => hex_digest_with::<Sha3_512>(bytes),
        }
    }
}

fn hex_digest_with<D: Digest>(bytes: &[u8]) -> String {
    let mut hasher = D::new();
    hasher.update(bytes);

    hex::encode(hasher.finalize())
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashAlgorithm::from_name(s)
    }
}

impl Serialize for HashAlgorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for HashAlgorithm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        HashAlgorithm::from_name(&name).map_err(serde::de::Error::custom)
    }
}
