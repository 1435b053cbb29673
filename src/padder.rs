use crate::word_assembler::{WordSequence, BYTES_PER_WORD};

pub const WORDS_PER_BLOCK: usize = 16;

const MARKER: u32 = 0x80;
const LENGTH_WORDS: usize = 2;

/// A message with marker, zero fill and bit length appended, as whole blocks.
///
/// Never empty: even the empty message pads to one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedWords(Vec<[u32;WORDS_PER_BLOCK]>);

impl PaddedWords {
    /// All words of all blocks, in message order.
    pub fn to_words(&self) -> Vec<u32> {
        self.0.iter().flat_map(|block| block.iter().copied()).collect()
    }

    pub fn block_count(&self) -> usize {
        self.0.len()
    }

    /// The 16 word blocks, in message order.
    pub fn blocks(&self) -> impl Iterator<Item = &[u32;WORDS_PER_BLOCK]> {
        self.0.iter()
    }
}

/// The message length in bits as two words, most significant first.
fn length_words(byte_count: u64) -> [u32;LENGTH_WORDS] {
    let bit_len = byte_count.wrapping_mul(8);
    [(bit_len >> 32) as u32, bit_len as u32]
}

/// Pad a message to whole blocks.
///
/// The end of message marker is a single `1` bit right after the last message bit. If the message
/// ends mid-word it goes into the trailing partial word, otherwise it starts a new word. Zero words
/// follow until exactly two words are left in the final block, and those two hold the message
/// length in bits, most significant word first.
pub fn pad(message: WordSequence) -> PaddedWords {
    let (mut words, byte_count) = message.into_parts();

    debug_assert_eq!(words.len() as u64, (byte_count + 3) / 4, "word count for {} bytes", byte_count);

    let used = (byte_count % BYTES_PER_WORD as u64) as usize;
    if used == 0 {
        words.push(MARKER << 24);
    } else if let Some(last) = words.last_mut() {
        *last |= MARKER << (8 * (BYTES_PER_WORD - 1 - used));
    }

    let fill = (WORDS_PER_BLOCK - (words.len() + LENGTH_WORDS) % WORDS_PER_BLOCK) % WORDS_PER_BLOCK;
    words.resize(words.len() + fill, 0);
    words.extend_from_slice(&length_words(byte_count));

    let blocks = words.chunks_exact(WORDS_PER_BLOCK)
        .map(|chunk| {
            let mut block = [0u32;WORDS_PER_BLOCK];
            block.copy_from_slice(chunk);
            block
        })
        .collect();

    PaddedWords(blocks)
}
