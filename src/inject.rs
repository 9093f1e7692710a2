//! The port through which rewritten words reach the target application.

use core::convert::Infallible;

/// Something that can rewrite the text just before the input cursor.
///
/// The engine calls it once per transformed keystroke with the number of
/// characters to erase (the word as it was, plus the key that was just typed)
/// and the text that replaces them.
pub trait InjectionSink {
    type Error;

    /// Removes `erase` characters before the cursor, then inserts `text`.
    fn replace(&mut self, erase: usize, text: &str) -> Result<(), Self::Error>;
}

impl<S: InjectionSink + ?Sized> InjectionSink for &mut S {
    type Error = S::Error;

    #[inline]
    fn replace(&mut self, erase: usize, text: &str) -> Result<(), Self::Error> {
        (**self).replace(erase, text)
    }
}

/// Drops every edit. For callers that only read the word back.
#[derive(Clone, Copy, Debug, Default)]
pub struct Discard;

impl InjectionSink for Discard {
    type Error = Infallible;

    #[inline(always)]
    fn replace(&mut self, _erase: usize, _text: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// In-memory stand-in for a text field: keys typed into it land at the end,
/// and edits from the engine rewrite its tail.
#[cfg(feature = "std")]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

#[cfg(feature = "std")]
impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A key reaching the field directly, before the engine sees it.
    pub fn type_char(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[cfg(feature = "std")]
impl InjectionSink for TextBuffer {
    type Error = Infallible;

    fn replace(&mut self, erase: usize, text: &str) -> Result<(), Self::Error> {
        for _ in 0..erase {
            if self.text.pop().is_none() {
                break;
            }
        }
        self.text.push_str(text);
        Ok(())
    }
}
