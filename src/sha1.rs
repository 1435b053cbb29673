use crate::padder::{PaddedWords, WORDS_PER_BLOCK};

pub const H0: [u32;5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

const ROUNDS: usize = 80;

/// Expand one 16 word block into the 80 word message schedule.
pub fn message_schedule(block: &[u32;WORDS_PER_BLOCK]) -> [u32;ROUNDS] {
    let mut w: [u32;ROUNDS] = [0;ROUNDS];
    w[..WORDS_PER_BLOCK].copy_from_slice(block);

    for t in WORDS_PER_BLOCK..ROUNDS {
        w[t] = (w[t-3] ^ w[t-8] ^ w[t-14] ^ w[t-16]).rotate_left(1);
    }

    w
}

/// The nonlinear function of round `t` applied to `(x, y, z)`, and the round constant.
fn round_function(t: usize, x: u32, y: u32, z: u32) -> (u32, u32) {
    match t {
        0..=19 => (ch!(x, y, z), 0x5a827999),
        20..=39 => (parity!(x, y, z), 0x6ed9eba1),
        40..=59 => (maj!(x, y, z), 0x8f1bbcdc),
        _ => (parity!(x, y, z), 0xca62c1d6),
    }
}

/// Fold one block into the hash state.
pub fn sha1_block(hash: [u32;5], block: &[u32;WORDS_PER_BLOCK]) -> [u32;5] {
    let w = message_schedule(block);
    let mut r = hash;

    for t in 0..ROUNDS {
        let (f, k) = round_function(t, r[1], r[2], r[3]);
        let temp = r[0].rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(r[4])
            .wrapping_add(k)
            .wrapping_add(w[t]);

        // e = d, d = c, c = b <<< 30, b = a, a = temp
        r.rotate_right(1);
        r[2] = r[2].rotate_left(30);
        r[0] = temp;
    }

    let mut result = hash;
    result.iter_mut()
        .zip(r.iter())
        .for_each(|(h, v)| *h = h.wrapping_add(*v));

    result
}

/// Run every block of the padded message through the compression function, starting from `H0`.
pub fn compress(padded: &PaddedWords) -> [u32;5] {
    padded.blocks().fold(H0, sha1_block)
}
