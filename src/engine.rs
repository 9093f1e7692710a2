use crate::buffers::{OutBuffer, WORD_CAPACITY, new_out_buffer};
use crate::inject::InjectionSink;
use crate::marks::{d_stroke, double_vowel, w_key};
use crate::modes::{InputMode, is_telex_key, tone_for_key};
use crate::tone::{apply_tone, normalize_tone};
use crate::vowels::Tone;
use crate::word::Word;

/// What a keystroke did to the word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum Outcome {
    /// Nothing happened; the key should be inserted as typed.
    NoChange,
    /// The word was rewritten in place; the display must be resynchronized.
    Transformed,
    /// A tone was removed by a double press and the key itself has already
    /// been appended to the word. Resynchronize, but do not insert the key again.
    Undone,
}

impl Outcome {
    #[inline(always)]
    pub fn is_change(self) -> bool {
        !matches!(self, Outcome::NoChange)
    }
}

/// Empties `word` at a word break.
#[inline]
pub fn reset(word: &mut Word) {
    word.reset();
}

/// Runs one keystroke through the Telex rules.
///
/// Tone keys (s f r x j z) are tried first, then a/e/o doubling, the `w` key
/// and the `d` stroke. The word grows by at most one letter.
pub fn process(word: &mut Word, key: char) -> Outcome {
    log::trace!("process {key:?} on {word}");
    if word.len() >= WORD_CAPACITY {
        log::trace!("word at capacity, '{key}' ignored");
        return Outcome::NoChange;
    }

    if let Some(tone) = tone_for_key(key) {
        // A tone removed by double press stays off for repeats of its key.
        if !tone.is_none() && tone == word.cancelled_tone() {
            return Outcome::NoChange;
        }
        match apply_tone(word, tone, key) {
            Outcome::Undone => {
                word.set_cancelled_tone(tone);
                let _ = word.push(key);
                return Outcome::Undone;
            }
            Outcome::Transformed => {
                word.set_cancelled_tone(Tone::None);
                return Outcome::Transformed;
            }
            Outcome::NoChange => {}
        }
    }

    let changed = match key.to_ascii_lowercase() {
        'a' | 'e' | 'o' => double_vowel(word, key),
        'w' => w_key(word, key),
        'd' => d_stroke(word, key),
        _ => false,
    };
    if changed {
        log::debug!("'{key}' -> {word}");
        Outcome::Transformed
    } else {
        Outcome::NoChange
    }
}

/// A typing session for one text field.
///
/// Owns the word being typed and the input mode. Keys that reach the field
/// are fed in order; whenever the word is rewritten, the session tells the
/// [`InjectionSink`] how to bring the field back in sync.
pub struct TelexEngine {
    word: Word,
    mode: InputMode,
    normalize_on_append: bool,
    out_buffer: OutBuffer,
}

impl Default for TelexEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TelexEngine {
    pub fn new() -> Self {
        Self::with_mode(InputMode::Vietnamese)
    }

    pub fn with_mode(mode: InputMode) -> Self {
        Self {
            word: Word::new(),
            mode,
            normalize_on_append: true,
            out_buffer: new_out_buffer(),
        }
    }

    /// Whether a plainly appended letter may move an existing tone.
    pub fn set_normalize_on_append(&mut self, on: bool) {
        self.normalize_on_append = on;
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Switches mode. The current word is dropped either way.
    pub fn set_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            log::info!("input mode: {mode:?}");
        }
        self.mode = mode;
        self.word.reset();
    }

    pub fn toggle_mode(&mut self) -> InputMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Word break: space, enter, navigation, punctuation or an inactivity timeout.
    pub fn word_break(&mut self) {
        reset(&mut self.word);
    }

    pub fn clear(&mut self) {
        self.word_break();
        self.out_buffer.clear();
    }

    pub fn backspace(&mut self) {
        self.word.pop();
        if self.word.is_empty() {
            self.word.reset();
        }
    }

    /// The current word as text.
    pub fn render(&mut self) -> &str {
        self.word.encode_utf8_into(&mut self.out_buffer);
        &self.out_buffer
    }

    /// Handles a key that has just been typed into the field.
    ///
    /// Anything but an ASCII letter ends the word. On [`Outcome::Transformed`]
    /// and [`Outcome::Undone`] the sink has been asked to erase the old word
    /// plus the typed key and write the new word.
    pub fn feed<S: InjectionSink>(
        &mut self,
        key: char,
        sink: &mut S,
    ) -> Result<Outcome, S::Error> {
        if !key.is_ascii_alphabetic() {
            self.word_break();
            return Ok(Outcome::NoChange);
        }

        if self.mode == InputMode::English {
            self.append(key);
            return Ok(Outcome::NoChange);
        }

        let old_len = self.word.len();
        if is_telex_key(key) && !self.word.is_empty() {
            let outcome = process(&mut self.word, key);
            if outcome.is_change() {
                self.sync(old_len, sink)?;
                return Ok(outcome);
            }
        }

        if self.append(key) && self.normalize_on_append && normalize_tone(&mut self.word) {
            self.sync(old_len, sink)?;
            return Ok(Outcome::Transformed);
        }
        Ok(Outcome::NoChange)
    }

    fn append(&mut self, key: char) -> bool {
        match self.word.push(key) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("{e}");
                false
            }
        }
    }

    fn sync<S: InjectionSink>(&mut self, old_len: usize, sink: &mut S) -> Result<(), S::Error> {
        self.word.encode_utf8_into(&mut self.out_buffer);
        sink.replace(old_len + 1, &self.out_buffer)
    }
}
