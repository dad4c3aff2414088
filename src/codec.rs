//! The encode/decode engine.

use crate::alphabet::{calculate_offset, has_unique_chars, shuffle, to_id, to_number};
use crate::blocklist;
use crate::config::{DEFAULT_ALPHABET, IdOptions, MIN_ALPHABET_LENGTH};
use crate::error::{MixIdError, Result};

/// Stateless encoder/decoder built from validated [`IdOptions`].
///
/// The alphabet is permuted once at construction and the blocklist filtered
/// down to the words expressible in it; neither changes afterwards, so a
/// codec can be shared freely across threads. Each call derives its own
/// working copy of the alphabet.
pub struct IdCodec {
    alphabet: Vec<char>,
    min_length: usize,
    blocklist: Vec<String>,
}

impl IdCodec {
    /// Validate `options` and build a codec.
    ///
    /// Unset options resolve to the defaults described on [`IdOptions`].
    ///
    /// # Errors
    ///
    /// - [`MixIdError::InvalidAlphabet`] if the alphabet contains multibyte
    ///   characters.
    /// - [`MixIdError::AlphabetTooShort`] if it has fewer than
    ///   [`MIN_ALPHABET_LENGTH`] characters.
    /// - [`MixIdError::DuplicateAlphabetCharacters`] if any character
    ///   repeats.
    /// - [`MixIdError::MinLengthOutOfRange`] if the minimum length exceeds
    ///   the alphabet length.
    pub fn new(options: IdOptions) -> Result<Self> {
        let alphabet = options
            .alphabet
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_ALPHABET.to_owned());

        if alphabet.len() != alphabet.chars().count() {
            return Err(MixIdError::InvalidAlphabet);
        }

        let mut chars: Vec<char> = alphabet.chars().collect();

        if chars.len() < MIN_ALPHABET_LENGTH {
            return Err(MixIdError::AlphabetTooShort);
        }

        if !has_unique_chars(&chars) {
            return Err(MixIdError::DuplicateAlphabetCharacters);
        }

        let min_length = options.min_length.unwrap_or(0);
        if min_length > chars.len() {
            return Err(MixIdError::MinLengthOutOfRange { max: chars.len() });
        }

        let blocklist = match &options.blocklist {
            Some(words) => blocklist::filter(&chars, words.iter().map(String::as_str)),
            None => blocklist::filter(&chars, blocklist::DEFAULT_BLOCKLIST.iter().copied()),
        };

        shuffle(&mut chars);

        Ok(Self {
            alphabet: chars,
            min_length,
            blocklist,
        })
    }

    /// Encode `numbers` into an ID string.
    ///
    /// An empty slice encodes to an empty string. The result always decodes
    /// back to `numbers`, is at least `min_length` characters long, and
    /// never matches the blocklist.
    ///
    /// # Errors
    ///
    /// [`MixIdError::BlocklistExhausted`] if blocklist regeneration runs out
    /// of candidate IDs. Unreachable with the default blocklist; requires an
    /// adversarial blocklist covering essentially the whole ID space.
    pub fn encode(&self, numbers: &[u64]) -> Result<String> {
        if numbers.is_empty() {
            return Ok(String::new());
        }

        self.encode_numbers(numbers)
    }

    /// One full encoding attempt per loop iteration; regeneration restarts
    /// the iteration with an adjusted number sequence instead of recursing.
    fn encode_numbers(&self, numbers: &[u64]) -> Result<String> {
        let mut numbers = numbers.to_vec();
        let mut partitioned = false;

        loop {
            // alphabet is never empty after validation
            let offset = calculate_offset(&self.alphabet, &numbers).unwrap_or(0);

            let mut alphabet = self.alphabet.clone();
            alphabet.rotate_left(offset);

            let prefix = alphabet[0];
            let partition = alphabet[1];
            alphabet.drain(..2);

            let mut id = vec![prefix];
            for (i, &number) in numbers.iter().enumerate() {
                id.extend(to_id(number, &alphabet[..alphabet.len() - 1]));

                if i < numbers.len() - 1 {
                    let separator = if partitioned && i == 0 {
                        partition
                    } else {
                        alphabet[alphabet.len() - 1]
                    };
                    id.push(separator);
                    shuffle(&mut alphabet);
                }
            }

            if self.min_length > id.len() {
                if !partitioned {
                    numbers.insert(0, 0);
                    partitioned = true;
                    continue;
                }

                let mut padded = Vec::with_capacity(self.min_length);
                padded.push(id[0]);
                padded.extend_from_slice(&alphabet[..self.min_length - id.len()]);
                padded.extend_from_slice(&id[1..]);
                id = padded;
            }

            let id: String = id.into_iter().collect();
            if blocklist::is_blocked(&self.blocklist, &id) {
                if partitioned {
                    if numbers[0] == u64::MAX {
                        return Err(MixIdError::BlocklistExhausted);
                    }
                    numbers[0] += 1;
                } else {
                    numbers.insert(0, 0);
                    partitioned = true;
                }
                continue;
            }

            return Ok(id);
        }
    }

    /// Decode `id` back into its number sequence.
    ///
    /// Decoding is a best-effort parse: it never fails and never panics.
    /// Malformed input — a character outside the alphabet, or a structurally
    /// broken chunk — yields an empty vec, as does the empty string.
    #[must_use]
    pub fn decode(&self, id: &str) -> Vec<u64> {
        let mut numbers = Vec::new();

        if id.is_empty() {
            return numbers;
        }

        let id_chars: Vec<char> = id.chars().collect();
        if !id_chars.iter().all(|c| self.alphabet.contains(c)) {
            return numbers;
        }

        let Some(offset) = self.alphabet.iter().position(|&c| c == id_chars[0]) else {
            return numbers;
        };

        let mut alphabet = self.alphabet.clone();
        alphabet.rotate_left(offset);
        let partition = alphabet[1];
        alphabet.drain(..2);

        let mut rest: Vec<char> = id_chars[1..].to_vec();

        // An interior partition character marks the end of the padding
        // segment reserved by a minimum-length or regeneration pass.
        if let Some(index) = rest.iter().position(|&c| c == partition) {
            if index > 0 && index < rest.len() - 1 {
                rest.drain(..=index);
                shuffle(&mut alphabet);
            }
        }

        while !rest.is_empty() {
            let separator = alphabet[alphabet.len() - 1];
            let chunk_end = rest
                .iter()
                .position(|&c| c == separator)
                .unwrap_or(rest.len());

            if chunk_end == 0 {
                return Vec::new();
            }

            let digits = &alphabet[..alphabet.len() - 1];
            let chunk = &rest[..chunk_end];
            if !chunk.iter().all(|c| digits.contains(c)) {
                return Vec::new();
            }

            numbers.push(to_number(chunk, digits));

            if chunk_end < rest.len() {
                rest.drain(..=chunk_end);
                shuffle(&mut alphabet);
            } else {
                rest.clear();
            }
        }

        numbers
    }
}
