//! Pure decimal/binary/octal/hex rendering of a [`BigInt`].
//!
//! Rendering never depends on anything beyond a [`BigInt`]'s `used_bits`/
//! `simulate_abs` accessors; it owns no state and has no host-I/O hooks, locale
//! awareness, or parsing counterpart (deliberately out of scope, see the crate's
//! top-level documentation).

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::bigint::BigInt;
use crate::word::Word;

/// A radix recognized by [`to_string_radix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    /// The numeric radix (2, 8, 10, or 16).
    fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    /// Digit group size counted from the least-significant end, for the
    /// separator-insertion rule. Binary groups by whole words instead (see
    /// [`render_binary`]), so this is unused for that variant.
    fn group_size(self) -> usize {
        match self {
            Base::Binary => 0,
            Base::Octal => 2,
            Base::Decimal => 3,
            Base::Hexadecimal => 2,
        }
    }
}

fn digit_char(d: u8) -> char {
    if d < 10 {
        (b'0' + d) as char
    } else {
        (b'A' + (d - 10)) as char
    }
}

/// Render `value` in `base`, with an optional separator character inserted
/// between digit groups (every `group_size()` digits for octal/decimal/hex,
/// every word for binary).
///
/// Zero always renders as the single digit `"0"` in octal/decimal/hex, or as
/// `W` zero characters in binary (binary deliberately does not strip the
/// leading zero word for the zero case, unlike the general "suppress a zero
/// leading word" rule for nonzero values — see [`render_binary`]).
pub fn to_string_radix<W: Word>(value: &BigInt<W>, base: Base, separator: Option<char>) -> String {
    match base {
        Base::Binary => render_binary(value, separator),
        _ => render_digits(value, base, separator),
    }
}

/// Binary rendering: word-by-word, most significant used word to least, `W`
/// bits per word, MSB to LSB within each word.
fn render_binary<W: Word>(value: &BigInt<W>, separator: Option<char>) -> String {
    let bits_per_word = W::BITS;
    let used_words = value.used_words();

    let mut out = String::new();
    if value.is_negative() {
        out.push('-');
    }

    if used_words == 0 {
        // Zero: W zero characters, no suppression.
        for _ in 0..bits_per_word {
            out.push('0');
        }
        return out;
    }

    let mut top = used_words - 1;
    // Suppress a zero leading word, if any (rare, at the used_words boundary).
    while top > 0 && value.simulate_abs(top) == W::zero() {
        top -= 1;
    }

    let mut first = true;
    for i in (0..=top).rev() {
        if !first {
            if let Some(sep) = separator {
                out.push(sep);
            }
        }
        first = false;
        let word = value.simulate_abs(i);
        for b in (0..bits_per_word).rev() {
            out.push(if word.test_bit(b) { '1' } else { '0' });
        }
    }
    out
}

/// Octal/decimal/hex rendering: process the used bits MSB-first through a
/// little-endian digit vector, doubling (in the target base) and adding the
/// next bit at each step.
fn render_digits<W: Word>(value: &BigInt<W>, base: Base, separator: Option<char>) -> String {
    let radix = base.radix();
    let group = base.group_size();
    let bits = value.used_bits();
    let bits_per_word = W::BITS as usize;

    // Little-endian digit vector, least significant digit first.
    let mut digits: Vec<u8> = vec![0];

    for i in (0..bits).rev() {
        let mut carry = 0u32;
        for d in digits.iter_mut() {
            let v = (*d as u32) * 2 + carry;
            *d = (v % radix) as u8;
            carry = v / radix;
        }
        while carry > 0 {
            digits.push((carry % radix) as u8);
            carry /= radix;
        }

        let word_idx = i / bits_per_word;
        let bit_idx = (i % bits_per_word) as u32;
        if value.simulate_abs(word_idx).test_bit(bit_idx) {
            let mut carry = 1u32;
            let mut idx = 0;
            while carry > 0 {
                if idx == digits.len() {
                    digits.push(0);
                }
                let v = digits[idx] as u32 + carry;
                digits[idx] = (v % radix) as u8;
                carry = v / radix;
                idx += 1;
            }
        }
    }

    let mut reversed = String::new();
    if value.is_negative() {
        reversed.push('-');
    }
    for (count, &d) in digits.iter().enumerate() {
        if count > 0 && group > 0 && count % group == 0 {
            if let Some(sep) = separator {
                reversed.push(sep);
            }
        }
        reversed.push(digit_char(d));
    }

    // `reversed` holds the sign (if any) followed by least-significant-digit-first
    // text; reverse the whole thing to get natural reading order. A leading sign
    // character survives the reversal trick by ending up first again only because
    // we special-case it below.
    if value.is_negative() {
        let body: String = reversed[1..].chars().rev().collect();
        format!("-{body}")
    } else {
        reversed.chars().rev().collect()
    }
}

#[cfg(test)]
mod tests;
