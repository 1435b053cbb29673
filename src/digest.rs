use std::fmt;

/// The final hash state, `h0` through `h4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest(pub [u32;5]);

impl Digest {
    /// The digest as 20 bytes, each word big-endian, `h0` first.
    pub fn to_bytes(&self) -> [u8;20] {
        let mut bytes = [0u8;20];
        bytes.chunks_exact_mut(4)
            .zip(self.0.iter())
            .for_each(|(chunk, w)| chunk.copy_from_slice(&w.to_be_bytes()));
        bytes
    }

    /// 40 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl From<[u32;5]> for Digest {
    fn from(hash: [u32;5]) -> Digest {
        Digest(hash)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
