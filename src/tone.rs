//! Tone placement and application ("freedom typing").
//!
//! A tone key may arrive at any point while the word is typed. The mark always
//! lands on the vowel Vietnamese orthography wants, and moves when later
//! letters change the nucleus.

use crate::cvc::extract_cvc;
use crate::engine::Outcome;
use crate::vowels::{Tone, Vowel, is_vowel, row_of, tone_of, with_tone};
use crate::word::{TransformKind, Word};

/// Index of the vowel that should carry the tone, if there is a vowel at all.
pub fn find_tone_position(letters: &[char]) -> Option<usize> {
    let cs = letters.iter().position(|&c| is_vowel(c))?;
    let mut ce = cs;
    while ce + 1 < letters.len() && is_vowel(letters[ce + 1]) {
        ce += 1;
    }

    // ơ and ê always win.
    for i in cs..=ce {
        if let Some(row) = row_of(letters[i]) {
            if matches!(row.vowel(), Vowel::Ow | Vowel::Ee) {
                return Some(i);
            }
        }
    }

    let cluster_len = ce - cs + 1;
    if cluster_len == 2 {
        if let (Some(r1), Some(r2)) = (row_of(letters[cs]), row_of(letters[ce])) {
            let (b1, b2) = (r1.vowel(), r2.vowel());
            // oa, oe, uy, uê ... -> second vowel
            if matches!(b1, Vowel::O | Vowel::Oo | Vowel::Ow)
                && matches!(b2, Vowel::A | Vowel::Aw | Vowel::Aa | Vowel::E | Vowel::Ee)
            {
                return Some(ce);
            }
            if matches!(b1, Vowel::U | Vowel::Uw)
                && matches!(b2, Vowel::Y | Vowel::E | Vowel::Ee | Vowel::Ow | Vowel::A)
            {
                return Some(ce);
            }
        }
        let has_coda = letters[ce + 1..].iter().any(|&c| !is_vowel(c));
        return Some(if has_coda { ce } else { cs });
    }

    if cluster_len >= 3 {
        return Some(cs + 1);
    }
    Some(cs)
}

/// Closed syllables ending in c, k, p, t or ch only take sắc or nặng (or no tone).
pub fn is_valid_tone(letters: &[char], tone: Tone) -> bool {
    if matches!(tone, Tone::None | Tone::Sac | Tone::Nang) {
        return true;
    }
    let Some(info) = extract_cvc(letters) else {
        return true;
    };
    !has_stop_coda(&letters[info.coda])
}

fn has_stop_coda(coda: &[char]) -> bool {
    match coda {
        [c] => matches!(c.to_ascii_lowercase(), 'c' | 'k' | 'p' | 't'),
        [c, h] => c.eq_ignore_ascii_case(&'c') && h.eq_ignore_ascii_case(&'h'),
        _ => false,
    }
}

/// First letter carrying a tone mark, with that tone.
pub(crate) fn toned_letter(letters: &[char]) -> Option<(usize, Tone)> {
    letters.iter().enumerate().find_map(|(i, &c)| {
        let tone = tone_of(c);
        (!tone.is_none()).then_some((i, tone))
    })
}

/// Applies `tone` to `word` on behalf of `key`.
///
/// Pressing the key of the tone already on the word removes it and reports
/// [`Outcome::Undone`]. `Tone::None` clears any tone.
pub fn apply_tone(word: &mut Word, tone: Tone, key: char) -> Outcome {
    let Some(pos) = find_tone_position(word.letters()) else {
        return Outcome::NoChange;
    };
    let Some(row) = row_of(word.letters()[pos]) else {
        return Outcome::NoChange;
    };
    if !tone.is_none() && !is_valid_tone(word.letters(), tone) {
        log::trace!("tone {tone:?} rejected by coda of {word}");
        return Outcome::NoChange;
    }

    let existing = toned_letter(word.letters());

    if tone.is_none() {
        let Some((p, _)) = existing else {
            return Outcome::NoChange;
        };
        let plain = with_tone(word.letters()[p], Tone::None);
        word.replace(p, plain, TransformKind::ToneChange, key);
        log::debug!("tone cleared: {word}");
        return Outcome::Transformed;
    }

    if let Some((p, current)) = existing {
        if current == tone {
            let plain = with_tone(word.letters()[p], Tone::None);
            word.replace(p, plain, TransformKind::Undo, key);
            log::debug!("tone {tone:?} undone: {word}");
            return Outcome::Undone;
        }
        if p != pos {
            let plain = with_tone(word.letters()[p], Tone::None);
            word.replace(p, plain, TransformKind::ToneChange, key);
        }
    }

    word.replace(pos, row.form(tone), TransformKind::ToneChange, key);
    log::debug!("tone {tone:?} applied: {word}");
    Outcome::Transformed
}

/// Moves an existing tone to the position it belongs to now. Idempotent.
/// Returns whether anything moved.
pub fn normalize_tone(word: &mut Word) -> bool {
    let Some(target) = find_tone_position(word.letters()) else {
        return false;
    };
    let Some((p, tone)) = toned_letter(word.letters()) else {
        return false;
    };
    if p == target {
        return false;
    }
    let from = with_tone(word.letters()[p], Tone::None);
    let to = with_tone(word.letters()[target], tone);
    word.set(p, from);
    word.set(target, to);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn word(s: &str) -> Word {
        s.parse().unwrap()
    }

    #[test]
    fn single_vowel_takes_the_tone() {
        assert_eq!(find_tone_position(&chars("ca")), Some(1));
        assert_eq!(find_tone_position(&chars("tac")), Some(1));
        assert_eq!(find_tone_position(&chars("ngh")), None);
    }

    #[test]
    fn horn_o_and_circumflex_e_have_priority() {
        assert_eq!(find_tone_position(&chars("viêt")), Some(2));
        assert_eq!(find_tone_position(&chars("ươi")), Some(1));
        assert_eq!(find_tone_position(&chars("khuyên")), Some(4));
    }

    #[test]
    fn two_vowel_patterns_take_second() {
        assert_eq!(find_tone_position(&chars("hoa")), Some(2));
        assert_eq!(find_tone_position(&chars("khoe")), Some(3));
        assert_eq!(find_tone_position(&chars("thuy")), Some(3));
        assert_eq!(find_tone_position(&chars("mua")), Some(2));
    }

    #[test]
    fn other_pairs_depend_on_coda() {
        assert_eq!(find_tone_position(&chars("tai")), Some(1));
        assert_eq!(find_tone_position(&chars("mây")), Some(1));
        assert_eq!(find_tone_position(&chars("toan")), Some(2));
        assert_eq!(find_tone_position(&chars("ai")), Some(0));
        assert_eq!(find_tone_position(&chars("tiêng")), Some(2));
    }

    #[test]
    fn long_cluster_takes_second_letter() {
        assert_eq!(find_tone_position(&chars("khuya")), Some(3));
        assert_eq!(find_tone_position(&chars("ngoai")), Some(3));
    }

    #[test]
    fn stop_codas_restrict_tones() {
        for w in ["tac", "tak", "hop", "mat", "sach", "SACH", "Hop"] {
            let letters = chars(w);
            for tone in [Tone::Huyen, Tone::Hoi, Tone::Nga] {
                assert!(!is_valid_tone(&letters, tone), "{w} {tone:?}");
            }
            for tone in [Tone::None, Tone::Sac, Tone::Nang] {
                assert!(is_valid_tone(&letters, tone), "{w} {tone:?}");
            }
        }
    }

    #[test]
    fn open_and_nasal_codas_take_any_tone() {
        for w in ["ca", "can", "cam", "canh", "cang", "ngh", "tach"] {
            let letters = chars(w);
            let all_ok = Tone::ALL.iter().all(|&t| is_valid_tone(&letters, t));
            assert_eq!(all_ok, w != "tach", "{w}");
        }
    }

    #[test]
    fn apply_then_same_tone_undoes() {
        let mut w = word("ca");
        assert_eq!(apply_tone(&mut w, Tone::Sac, 's'), Outcome::Transformed);
        assert_eq!(w.to_string(), "cá");
        assert_eq!(apply_tone(&mut w, Tone::Sac, 's'), Outcome::Undone);
        assert_eq!(w.to_string(), "ca");
        assert_eq!(w.history().last().map(|t| t.kind), Some(TransformKind::Undo));
    }

    #[test]
    fn different_tone_replaces() {
        let mut w = word("cá");
        assert_eq!(apply_tone(&mut w, Tone::Huyen, 'f'), Outcome::Transformed);
        assert_eq!(w.to_string(), "cà");
    }

    #[test]
    fn clearing_tone() {
        let mut w = word("cà");
        assert_eq!(apply_tone(&mut w, Tone::None, 'z'), Outcome::Transformed);
        assert_eq!(w.to_string(), "ca");
        assert_eq!(apply_tone(&mut w, Tone::None, 'z'), Outcome::NoChange);
    }

    #[test]
    fn invalid_tone_is_a_no_op() {
        let mut w = word("tac");
        assert_eq!(apply_tone(&mut w, Tone::Huyen, 'f'), Outcome::NoChange);
        assert_eq!(w.to_string(), "tac");
        assert!(w.history().is_empty());
    }

    #[test]
    fn stray_tone_is_moved_not_duplicated() {
        // Tone typed before the nucleus was complete.
        let mut w = word("hóa");
        assert_eq!(apply_tone(&mut w, Tone::Hoi, 'r'), Outcome::Transformed);
        assert_eq!(w.to_string(), "hoả");
        assert_eq!(w.letters().iter().filter(|&&c| !tone_of(c).is_none()).count(), 1);
    }

    #[test]
    fn moving_a_stray_tone_is_logged() {
        let mut w = word("hóa");
        assert_eq!(apply_tone(&mut w, Tone::Hoi, 'r'), Outcome::Transformed);
        let log: Vec<_> = w
            .history()
            .iter()
            .map(|t| (t.kind, t.position, t.old, t.new))
            .collect();
        assert_eq!(
            log,
            vec![
                (TransformKind::ToneChange, 1, Some('ó'), 'o'),
                (TransformKind::ToneChange, 2, Some('a'), 'ả'),
            ]
        );
    }

    #[test]
    fn double_press_matches_the_tone_anywhere_in_the_word() {
        // After a backspace the sắc can sit on ô while the slot is u. Pressing s
        // again takes the tone off instead of adding a second one.
        let mut w = word("muố");
        assert_eq!(find_tone_position(w.letters()), Some(1));
        assert_eq!(apply_tone(&mut w, Tone::Sac, 's'), Outcome::Undone);
        assert_eq!(w.to_string(), "muô");
        assert!(toned_letter(w.letters()).is_none());
    }

    #[test]
    fn normalize_moves_tone_and_is_idempotent() {
        let mut w = word("hóa");
        assert!(normalize_tone(&mut w));
        assert_eq!(w.to_string(), "hoá");
        let once = w.clone();
        assert!(!normalize_tone(&mut w));
        assert_eq!(w, once);
    }

    #[test]
    fn normalize_without_tone_is_a_no_op() {
        let mut w = word("hoa");
        assert!(!normalize_tone(&mut w));
        assert_eq!(w.to_string(), "hoa");
    }
}
