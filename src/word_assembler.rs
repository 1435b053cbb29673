use std::io::{BufReader, Read};

use crate::{Error, Result};

pub const BYTES_PER_WORD: usize = 4;

/// A message packed into big-endian 32 bit words, before padding.
///
/// When `byte_count` is not a multiple of four, the last word only holds the bytes actually
/// read, left aligned, with the low order bytes zero. The fields are only set here, so `words`
/// always holds exactly `ceil(byte_count / 4)` entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordSequence {
    words: Vec<u32>,
    byte_count: u64,
}

impl WordSequence {
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    pub fn byte_count(&self) -> u64 {
        self.byte_count
    }

    pub fn into_parts(self) -> (Vec<u32>, u64) {
        (self.words, self.byte_count)
    }
}

/// Pack up to four bytes into a word, most significant byte first.
fn pack_word(bytes: &[u8]) -> u32 {
    bytes.iter()
        .enumerate()
        .fold(0u32, |word, (i, &b)| word | (u32::from(b) << (8 * (BYTES_PER_WORD - 1 - i))))
}

/// Read `source` to the end, packing the bytes into words.
///
/// A failing read abandons the whole message; there is no partial result.
pub fn assemble_words<R: Read>(source: R) -> Result<WordSequence> {
    let mut words = Vec::new();
    let mut group = [0u8; BYTES_PER_WORD];
    let mut filled = 0;
    let mut byte_count: u64 = 0;

    for b in BufReader::new(source).bytes() {
        group[filled] = b.map_err(Error::SourceUnreadable)?;
        filled += 1;
        byte_count += 1;

        if filled == BYTES_PER_WORD {
            words.push(pack_word(&group));
            filled = 0;
        }
    }

    if filled > 0 {
        words.push(pack_word(&group[..filled]));
    }

    Ok(WordSequence{words, byte_count})
}

impl From<&[u8]> for WordSequence {
    fn from(msg: &[u8]) -> WordSequence {
        WordSequence{
            words: msg.chunks(BYTES_PER_WORD).map(pack_word).collect(),
            byte_count: msg.len() as u64,
        }
    }
}
