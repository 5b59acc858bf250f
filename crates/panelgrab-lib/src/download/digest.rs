use sha2::{Digest, Sha256};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentDigest {
    pub bytes: u64,
    pub sha256: Vec<u8>,
}

impl ContentDigest {
    pub fn sha256_hex(&self) -> String {
        hex::encode(&self.sha256)
    }
}

/// Running byte count and SHA-256 over a streamed body.
pub struct ContentDigester {
    hasher: Sha256,
    bytes: u64,
}

impl ContentDigester {
    #[inline]
    pub fn new() -> Self {
        Self {
            hasher: Sha256::new(),
            bytes: 0,
        }
    }

    #[inline]
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        let data = data.as_ref();
        self.bytes += data.len() as u64;
        Digest::update(&mut self.hasher, data);
    }

    pub fn finish(self) -> ContentDigest {
        ContentDigest {
            bytes: self.bytes,
            sha256: self.hasher.finalize().to_vec(),
        }
    }
}

impl Default for ContentDigester {
    fn default() -> Self {
        Self::new()
    }
}
