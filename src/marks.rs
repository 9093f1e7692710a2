//! Vowel-shape marks (circumflex, breve, horn) and the đ stroke.

use crate::tone::normalize_tone;
use crate::vowels::{Row, Vowel, row_of, tone_of};
use crate::word::{TransformKind, Word};

/// `c` (a vowel in `row`) redrawn as `vowel`, keeping its case and tone.
#[inline(always)]
fn reshape(row: Row, c: char, vowel: Vowel) -> char {
    row.with_vowel(vowel).form(tone_of(c))
}

/// aa, ee, oo: toggles the circumflex on the last letter when `key` repeats it.
pub fn double_vowel(word: &mut Word, key: char) -> bool {
    let Some(last) = word.last() else {
        return false;
    };
    let Some(row) = row_of(last) else {
        return false;
    };
    let target = match (key.to_ascii_lowercase(), row.vowel()) {
        ('a', Vowel::A) => Vowel::Aa,
        ('a', Vowel::Aa) => Vowel::A,
        ('e', Vowel::E) => Vowel::Ee,
        ('e', Vowel::Ee) => Vowel::E,
        ('o', Vowel::O) => Vowel::Oo,
        ('o', Vowel::Oo) => Vowel::O,
        _ => return false,
    };

    let pos = word.len() - 1;
    word.replace(pos, reshape(row, last, target), TransformKind::MarkChange, key);
    normalize_tone(word);
    true
}

/// The `w` key: ươ shortcuts first, then the nearest a/o/u gets a breve or horn.
pub fn w_key(word: &mut Word, key: char) -> bool {
    if w_pair(word, key) || w_nearest(word, key) {
        normalize_tone(word);
        return true;
    }
    false
}

fn w_pair(word: &mut Word, key: char) -> bool {
    let &[.., c1, c2] = word.letters() else {
        return false;
    };
    let (Some(r1), Some(r2)) = (row_of(c1), row_of(c2)) else {
        return false;
    };
    let (p1, p2) = (word.len() - 2, word.len() - 1);

    match (r1.vowel(), r2.vowel()) {
        (Vowel::U, Vowel::O) => {
            word.replace(p1, reshape(r1, c1, Vowel::Uw), TransformKind::MarkChange, key);
            word.replace(p2, reshape(r2, c2, Vowel::Ow), TransformKind::MarkChange, key);
        }
        (Vowel::Uw, Vowel::O) => {
            word.replace(p2, reshape(r2, c2, Vowel::Ow), TransformKind::MarkChange, key);
        }
        (Vowel::U, Vowel::Ow) => {
            word.replace(p1, reshape(r1, c1, Vowel::Uw), TransformKind::MarkChange, key);
        }
        (Vowel::Uw, Vowel::Ow) => {
            word.replace(p1, reshape(r1, c1, Vowel::U), TransformKind::Undo, key);
            word.replace(p2, reshape(r2, c2, Vowel::O), TransformKind::Undo, key);
        }
        _ => return false,
    }
    true
}

fn w_nearest(word: &mut Word, key: char) -> bool {
    for i in (0..word.len()).rev() {
        let c = word.letters()[i];
        let Some(row) = row_of(c) else {
            continue;
        };
        let target = match row.vowel() {
            Vowel::A => Vowel::Aw,
            Vowel::Aw => Vowel::A,
            Vowel::O => Vowel::Ow,
            Vowel::Ow => Vowel::O,
            Vowel::U => Vowel::Uw,
            Vowel::Uw => Vowel::U,
            _ => continue,
        };
        word.replace(i, reshape(row, c, target), TransformKind::MarkChange, key);
        return true;
    }
    false
}

/// dd: toggles the stroke on the nearest d/đ, keeping case.
pub fn d_stroke(word: &mut Word, key: char) -> bool {
    for i in (0..word.len()).rev() {
        let toggled = match word.letters()[i] {
            'd' => 'đ',
            'D' => 'Đ',
            'đ' => 'd',
            'Đ' => 'D',
            _ => continue,
        };
        word.replace(i, toggled, TransformKind::StrokeToggle, key);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        s.parse().unwrap()
    }

    #[test]
    fn double_vowel_toggles_circumflex() {
        let mut w = word("ca");
        assert!(double_vowel(&mut w, 'a'));
        assert_eq!(w.to_string(), "câ");
        assert!(double_vowel(&mut w, 'a'));
        assert_eq!(w.to_string(), "ca");
    }

    #[test]
    fn double_vowel_keeps_tone_and_case() {
        let mut w = word("VÉ");
        assert!(double_vowel(&mut w, 'E'));
        assert_eq!(w.to_string(), "VẾ");

        let mut w = word("Ò");
        assert!(double_vowel(&mut w, 'o'));
        assert_eq!(w.to_string(), "Ồ");
    }

    #[test]
    fn double_vowel_only_looks_at_last_letter() {
        let mut w = word("an");
        assert!(!double_vowel(&mut w, 'a'));
        let mut w = word("ca");
        assert!(!double_vowel(&mut w, 'e'));
        let mut w = Word::new();
        assert!(!double_vowel(&mut w, 'a'));
    }

    #[test]
    fn double_vowel_moves_tone_to_new_priority_vowel() {
        // tone on i while the nucleus is "ie"; ê takes it over.
        let mut w = word("tíe");
        assert!(double_vowel(&mut w, 'e'));
        assert_eq!(w.to_string(), "tiế");
    }

    #[test]
    fn uow_shortcut() {
        let mut w = word("huo");
        assert!(w_key(&mut w, 'w'));
        assert_eq!(w.to_string(), "hươ");
    }

    #[test]
    fn uow_shortcut_keeps_case_per_letter() {
        let mut w = word("uO");
        assert!(w_key(&mut w, 'w'));
        assert_eq!(w.to_string(), "ưƠ");
    }

    #[test]
    fn w_completes_half_done_pairs() {
        let mut w = word("ưo");
        assert!(w_key(&mut w, 'w'));
        assert_eq!(w.to_string(), "ươ");

        let mut w = word("uơ");
        assert!(w_key(&mut w, 'w'));
        assert_eq!(w.to_string(), "ươ");
    }

    #[test]
    fn w_on_full_pair_undoes() {
        let mut w = word("ươ");
        assert!(w_key(&mut w, 'w'));
        assert_eq!(w.to_string(), "uo");
        assert!(w.history().iter().all(|t| t.kind == TransformKind::Undo));
    }

    #[test]
    fn w_falls_back_to_nearest_vowel() {
        let mut w = word("tan");
        assert!(w_key(&mut w, 'w'));
        assert_eq!(w.to_string(), "tăn");

        let mut w = word("mui");
        assert!(w_key(&mut w, 'w'));
        assert_eq!(w.to_string(), "mưi");

        let mut w = word("tho");
        assert!(w_key(&mut w, 'W'));
        assert_eq!(w.to_string(), "thơ");
        assert!(w_key(&mut w, 'w'));
        assert_eq!(w.to_string(), "tho");
    }

    #[test]
    fn w_without_target_vowel() {
        let mut w = word("ki");
        assert!(!w_key(&mut w, 'w'));
        let mut w = Word::new();
        assert!(!w_key(&mut w, 'w'));
    }

    #[test]
    fn w_keeps_tone() {
        let mut w = word("tá");
        assert!(w_key(&mut w, 'w'));
        assert_eq!(w.to_string(), "tắ");
    }

    #[test]
    fn d_stroke_toggles_nearest_d() {
        let mut w = word("d");
        assert!(d_stroke(&mut w, 'd'));
        assert_eq!(w.to_string(), "đ");
        assert!(d_stroke(&mut w, 'd'));
        assert_eq!(w.to_string(), "d");

        let mut w = word("Dang");
        assert!(d_stroke(&mut w, 'd'));
        assert_eq!(w.to_string(), "Đang");
        assert_eq!(w.history()[0].kind, TransformKind::StrokeToggle);

        let mut w = word("ban");
        assert!(!d_stroke(&mut w, 'd'));
    }
}
