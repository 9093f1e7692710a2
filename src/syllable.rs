//! Spelling check of a finished syllable against Vietnamese onset/coda clusters.

use crate::cvc::extract_cvc;
use crate::tone::is_valid_tone;
use crate::vowels::{row_of, tone_of};

const VALID_ONSETS: [&str; 27] = [
    "b", "c", "ch", "d", "đ", "g", "gh", "gi", "h", "k", "kh", "l", "m", "n", "ng", "ngh", "nh",
    "p", "ph", "qu", "r", "s", "t", "th", "tr", "v", "x",
];

const VALID_CODAS: [&str; 8] = ["c", "ch", "m", "n", "ng", "nh", "p", "t"];

/// Lowercase letter with vowel marks and tones removed. Đ folds to đ.
#[inline]
fn strip(c: char) -> char {
    match row_of(c) {
        Some(row) => row.vowel().plain(),
        None if c == 'Đ' => 'đ',
        None => c.to_ascii_lowercase(),
    }
}

fn cluster_in(cluster: &[char], table: &[&str]) -> bool {
    table
        .iter()
        .any(|pattern| cluster.iter().map(|&c| strip(c)).eq(pattern.chars()))
}

// Onsets opening with a stripped letter whose UTF-8 lead byte is 0xC4 are let
// through. That covers đ but also everything else in U+0100..=U+013F.
fn has_c4_lead(cluster: &[char]) -> bool {
    let Some(&first) = cluster.first() else {
        return false;
    };
    let mut buf = [0u8; 4];
    strip(first).encode_utf8(&mut buf);
    buf[0] == 0xC4
}

/// Whether `letters` spell a legal Vietnamese syllable.
///
/// Words without a vowel yet are still being typed and count as valid.
pub fn is_valid_syllable(letters: &[char]) -> bool {
    if letters.is_empty() {
        return true;
    }
    let Some(info) = extract_cvc(letters) else {
        return true;
    };

    let onset = &letters[info.onset.clone()];
    if !onset.is_empty() && !cluster_in(onset, &VALID_ONSETS) && !has_c4_lead(onset) {
        return false;
    }

    let coda = &letters[info.coda.clone()];
    if !coda.is_empty() && !cluster_in(coda, &VALID_CODAS) {
        return false;
    }

    letters.iter().all(|&c| {
        let tone = tone_of(c);
        tone.is_none() || is_valid_tone(letters, tone)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(s: &str) -> bool {
        let letters: Vec<char> = s.chars().collect();
        is_valid_syllable(&letters)
    }

    #[test]
    fn accepts_real_syllables() {
        for s in [
            "việt", "nghiêng", "Trường", "quyển", "giặt", "khuya", "đường", "Đang", "ươ", "a",
            "chanh", "gì", "thích",
        ] {
            assert!(valid(s), "{s}");
        }
    }

    #[test]
    fn incomplete_words_are_provisionally_valid() {
        assert!(valid(""));
        assert!(valid("ngh"));
        assert!(valid("str"));
    }

    #[test]
    fn rejects_foreign_onsets() {
        for s in ["clear", "blob", "flan", "string", "wa", "fa"] {
            assert!(!valid(s), "{s}");
        }
    }

    #[test]
    fn rejects_foreign_codas() {
        for s in ["cas", "tab", "anh k", "tonk", "mal"] {
            assert!(!valid(s), "{s}");
        }
    }

    #[test]
    fn rejects_tone_not_allowed_by_coda() {
        assert!(!valid("tàc"));
        assert!(!valid("hỏp"));
        assert!(valid("tác"));
        assert!(valid("hộp"));
    }

    #[test]
    fn onset_lead_byte_quirk() {
        // đ followed by anything passes the onset check.
        assert!(valid("đra"));
        // So do other letters from U+0100..=U+013F.
        assert!(valid("ća"));
        // U+0140 encodes with lead byte 0xC5 and is rejected.
        assert!(!valid("ŀa"));
    }
}
