use core::fmt;
use core::str::FromStr;

use crate::buffers::{
    HistoryLog, LetterBuffer, OutBuffer, new_history_log, new_letter_buffer, new_out_buffer,
    push_letter, push_record,
};
use crate::vowels::Tone;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformKind {
    Append,
    ToneChange,
    MarkChange,
    StrokeToggle,
    Undo,
}

/// One entry of a word's history. `old` is `None` for appends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transformation {
    pub kind: TransformKind,
    pub position: usize,
    pub old: Option<char>,
    pub new: char,
    pub key: char,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("word buffer is full, dropped {rejected:?}")]
pub struct CapacityError {
    pub rejected: char,
}

/// The syllable being typed.
///
/// Holds at most [`WORD_CAPACITY`](crate::WORD_CAPACITY) letters and at most one
/// tone mark. The caller owns it and resets it at every word break.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    letters: LetterBuffer,
    cancelled_tone: Tone,
    history: HistoryLog,
}

impl Default for Word {
    fn default() -> Self {
        Self::new()
    }
}

impl Word {
    pub fn new() -> Self {
        Self {
            letters: new_letter_buffer(),
            cancelled_tone: Tone::None,
            history: new_history_log(),
        }
    }

    /// Empties the word and forgets any cancelled tone and history.
    pub fn reset(&mut self) {
        self.letters.clear();
        self.cancelled_tone = Tone::None;
        self.history.clear();
    }

    #[inline(always)]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline(always)]
    pub fn last(&self) -> Option<char> {
        self.letters.last().copied()
    }

    /// Tone most recently removed by a double press, or `Tone::None`.
    #[inline(always)]
    pub fn cancelled_tone(&self) -> Tone {
        self.cancelled_tone
    }

    #[inline(always)]
    pub(crate) fn set_cancelled_tone(&mut self, tone: Tone) {
        self.cancelled_tone = tone;
    }

    #[inline(always)]
    pub fn history(&self) -> &[Transformation] {
        &self.history
    }

    /// Appends a letter typed by `c` itself.
    pub fn push(&mut self, c: char) -> Result<(), CapacityError> {
        push_letter(&mut self.letters, c).map_err(|rejected| CapacityError { rejected })?;
        self.record(TransformKind::Append, self.letters.len() - 1, None, c, c);
        Ok(())
    }

    /// Removes the last letter (backspace).
    pub fn pop(&mut self) -> Option<char> {
        self.letters.pop()
    }

    /// Overwrites the letter at `pos` and logs it. Returns the previous letter.
    pub(crate) fn replace(
        &mut self,
        pos: usize,
        c: char,
        kind: TransformKind,
        key: char,
    ) -> char {
        let old = core::mem::replace(&mut self.letters[pos], c);
        self.record(kind, pos, Some(old), c, key);
        old
    }

    /// Overwrites the letter at `pos` without logging (tone re-placement).
    #[inline(always)]
    pub(crate) fn set(&mut self, pos: usize, c: char) {
        self.letters[pos] = c;
    }

    fn record(
        &mut self,
        kind: TransformKind,
        position: usize,
        old: Option<char>,
        new: char,
        key: char,
    ) {
        push_record(
            &mut self.history,
            Transformation {
                kind,
                position,
                old,
                new,
                key,
            },
        );
    }

    /// UTF-8 rendering of the letters.
    pub fn encode_utf8(&self) -> OutBuffer {
        let mut out = new_out_buffer();
        self.encode_utf8_into(&mut out);
        out
    }

    /// Like [`Word::encode_utf8`], reusing `out`.
    pub fn encode_utf8_into(&self, out: &mut OutBuffer) {
        out.clear();
        for &c in self.letters.iter() {
            let _ = out.push(c);
        }
    }
}

impl FromStr for Word {
    type Err = CapacityError;

    /// Seeds a word with the given letters, as if typed without transformation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut word = Word::new();
        for c in s.chars() {
            push_letter(&mut word.letters, c).map_err(|rejected| CapacityError { rejected })?;
        }
        Ok(word)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for &c in self.letters.iter() {
            f.write_char(c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffers::{HISTORY_CAPACITY, WORD_CAPACITY};
    use crate::vowels::rows;

    #[test]
    fn push_stops_at_capacity() {
        let mut w = Word::new();
        for _ in 0..WORD_CAPACITY {
            w.push('a').unwrap();
        }
        assert_eq!(w.push('b'), Err(CapacityError { rejected: 'b' }));
        assert_eq!(w.len(), WORD_CAPACITY);
    }

    #[test]
    fn history_drops_records_past_capacity() {
        let mut w = Word::new();
        for i in 0..HISTORY_CAPACITY + 10 {
            w.push('a').unwrap();
            w.pop();
            assert!(w.history().len() <= HISTORY_CAPACITY, "after {i}");
        }
        assert_eq!(w.history().len(), HISTORY_CAPACITY);
        assert!(w.is_empty());
    }

    #[test]
    fn reset_clears_everything() {
        let mut w: Word = "ca".parse().unwrap();
        w.push('s').unwrap();
        w.set_cancelled_tone(Tone::Sac);
        w.reset();
        assert!(w.is_empty());
        assert_eq!(w.cancelled_tone(), Tone::None);
        assert!(w.history().is_empty());
    }

    #[test]
    fn utf8_round_trips_every_vowel_form() {
        for row in rows() {
            for tone in Tone::ALL {
                let c = row.form(tone);
                let mut w = Word::new();
                w.push(c).unwrap();
                let out = w.encode_utf8();
                assert_eq!(out.len(), c.len_utf8());
                let back = core::str::from_utf8(out.as_bytes()).unwrap();
                assert_eq!(back.chars().collect::<Vec<_>>(), vec![c]);
            }
        }
    }

    #[test]
    fn utf8_handles_all_widths() {
        let w: Word = "ađệ😀".parse().unwrap();
        let out = w.encode_utf8();
        assert_eq!(out.as_bytes().len(), 1 + 2 + 3 + 4);
        assert_eq!(&out[..], "ađệ😀");
        assert_eq!(w.to_string(), "ađệ😀");
    }

    #[test]
    fn seeding_past_capacity_fails() {
        let long: String = core::iter::repeat('x').take(WORD_CAPACITY + 1).collect();
        assert!(long.parse::<Word>().is_err());
    }
}
