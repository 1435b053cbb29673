mod primitives;
pub mod word_assembler;
pub mod padder;
pub mod sha1;
pub mod digest;
mod error;

use std::fmt;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::path::PathBuf;

use log::{debug, warn};

pub use digest::Digest;
pub use error::{Error, Result};

use padder::pad;
use sha1::compress;
use word_assembler::{assemble_words, WordSequence};

fn digest_words(message: WordSequence) -> Digest {
    let byte_count = message.byte_count();
    let padded = pad(message);
    debug!("{} bytes padded to {} blocks", byte_count, padded.block_count());

    Digest::from(compress(&padded))
}

/// SHA-1 of an in-memory message.
pub fn sha1(msg: &[u8]) -> Digest {
    digest_words(WordSequence::from(msg))
}

/// SHA-1 of everything `source` yields. A read failure means no digest at all.
pub fn sha1_reader<R: Read>(source: R) -> Result<Digest> {
    Ok(digest_words(assemble_words(source)?))
}

/// Something to hash: standard input, or a file named on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Source {
        if path.as_os_str() == "-" {
            Source::Stdin
        } else {
            Source::File(path)
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("-"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn hash_source(source: &Source) -> io::Result<Result<Digest>> {
    match source {
        Source::Stdin => Ok(sha1_reader(io::stdin())),
        Source::File(path) => Ok(sha1_reader(File::open(path)?)),
    }
}

/// Print `<digest>  <label>` to `out` for every source that can be hashed, in order.
///
/// Sources that can't be opened or read get a line on `err` prefixed by `program`, and processing
/// continues with the next one. Returns `Ok(true)` only if every source was hashed.
pub fn sum_sources<O: Write, E: Write>(program: &str, sources: &[Source], out: &mut O, err: &mut E) -> Result<bool> {
    let mut all_ok = true;

    for source in sources {
        debug!("hashing {}", source);

        match hash_source(source) {
            Ok(Ok(digest)) => {
                writeln!(out, "{}  {}", digest, source).map_err(Error::Output)?;
            }
            Ok(Err(e)) => {
                warn!("{}: {}", source, e);
                writeln!(err, "{}: {}: {}", program, source, e).map_err(Error::Output)?;
                all_ok = false;
            }
            Err(e) => {
                warn!("cannot open {}: {}", source, e);
                writeln!(err, "{}: {}: no such file or directory", program, source).map_err(Error::Output)?;
                all_ok = false;
            }
        }
    }

    out.flush().map_err(Error::Output)?;
    Ok(all_ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    extern crate rstest;
    use rstest::rstest;

    extern crate hex;

    #[rstest(input, expected,
        case::empty("", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
        case::one_char("a", "86f7e437faa5a7fce15d1ddcb9eaeaea377667b8"),
        case::abc("abc", "a9993e364706816aba3e25717850c26c9cd0d89d"),
        case::twoblock("abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq", "84983e441c3bd26ebaae4aa1f95129e5e54670f1"),
        case::fox("The quick brown fox jumps over the lazy dog", "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12"),
        case::fox_cog("The quick brown fox jumps over the lazy cog", "de9f2c7fd25e1b3afad3e85a0bd17d9b100db4b3"),
    )]
    fn test_sha1_vectors(input: &str, expected: &str) {
        assert_eq!(sha1(input.as_bytes()).to_hex(), expected);
        assert_eq!(sha1_reader(input.as_bytes()).unwrap().to_hex(), expected);
    }

    #[rstest(len, expected,
        case::marker_word_fills_block(52, "fd5ee7588cd129e12b886974621fd29facc78e19"),
        case::marker_byte_fills_block(55, "8ae2d46729cfe68ff927af5eec9c7d1b66d65ac2"),
        case::no_room_for_length(56, "636e2ec698dac903498e648bd2f3af641d3c88cb"),
        case::full_block(64, "c6138d514ffa2135bfce0ed0b8fac65669917ec7"),
    )]
    fn test_sha1_block_boundaries(len: u8, expected: &str) {
        let msg: Vec<u8> = (0..len).collect();
        assert_eq!(hex::encode(sha1(&msg).to_bytes()), expected);
    }

    #[test]
    fn test_sha1_million_a() {
        let msg = vec![b'a'; 1_000_000];
        assert_eq!(sha1_reader(&msg[..]).unwrap().to_hex(), "34aa973cd4c4daa4f61eeb2bdbad27316534016f");
    }

    #[test]
    fn test_sha1_is_deterministic() {
        let msg = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
        assert_eq!(sha1(msg), sha1(msg));
        assert_eq!(sha1_reader(&msg[..]).unwrap(), sha1(msg));
    }

    #[test]
    fn test_single_byte_change_changes_digest() {
        let corpus: [&[u8]; 4] = [b"a", b"abc", b"The quick brown fox jumps over the lazy dog", &[0u8; 64]];

        for &msg in corpus.iter() {
            let original = sha1(msg);
            for i in 0..msg.len() {
                let mut changed = msg.to_vec();
                changed[i] ^= 0x01;
                assert_ne!(sha1(&changed), original, "flipping byte {} of {:?}", i, msg);
            }
        }
    }

    #[test]
    fn test_source_from_dash_is_stdin() {
        assert_eq!(Source::from(PathBuf::from("-")), Source::Stdin);
        assert_eq!(Source::from(PathBuf::from("x")), Source::File(PathBuf::from("x")));
        assert_eq!(Source::Stdin.to_string(), "-");
    }

    #[test]
    fn test_sum_sources_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missingfile");
        let abc = dir.path().join("abc.txt");
        fs::write(&abc, "abc").unwrap();

        let sources = vec![Source::File(missing.clone()), Source::File(abc.clone())];
        let mut out = Vec::new();
        let mut err = Vec::new();

        let all_ok = sum_sources("sha1sum", &sources, &mut out, &mut err).unwrap();

        assert!(!all_ok);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("a9993e364706816aba3e25717850c26c9cd0d89d  {}\n", abc.display())
        );
        assert_eq!(
            String::from_utf8(err).unwrap(),
            format!("sha1sum: {}: no such file or directory\n", missing.display())
        );
    }

    #[test]
    fn test_sum_sources_reports_unreadable_source() {
        let dir = tempfile::tempdir().unwrap();
        let subdir = dir.path().join("subdir");
        let abc = dir.path().join("abc.txt");
        fs::create_dir(&subdir).unwrap();
        fs::write(&abc, "abc").unwrap();

        let sources = vec![Source::File(subdir.clone()), Source::File(abc.clone())];
        let mut out = Vec::new();
        let mut err = Vec::new();

        let all_ok = sum_sources("sha1sum", &sources, &mut out, &mut err).unwrap();

        assert!(!all_ok);
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert_eq!(out, format!("a9993e364706816aba3e25717850c26c9cd0d89d  {}\n", abc.display()));

        let err = String::from_utf8(err).unwrap();
        let prefix = format!("sha1sum: {}: read error: ", subdir.display());
        assert!(err.starts_with(&prefix), "err: {}", err);
        assert_eq!(err.lines().count(), 1, "err: {}", err);
    }

    #[test]
    fn test_sum_sources_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty");
        let a = dir.path().join("a");
        fs::write(&empty, "").unwrap();
        fs::write(&a, "a").unwrap();

        let sources = vec![Source::File(a.clone()), Source::File(empty.clone())];
        let mut out = Vec::new();
        let mut err = Vec::new();

        assert!(sum_sources("sha1sum", &sources, &mut out, &mut err).unwrap());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!(
                "86f7e437faa5a7fce15d1ddcb9eaeaea377667b8  {}\nda39a3ee5e6b4b0d3255bfef95601890afd80709  {}\n",
                a.display(),
                empty.display()
            )
        );
        assert!(err.is_empty());
    }
}
