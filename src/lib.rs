//! Vietnamese Telex input engine.
//!
//! A [`Word`] holds the syllable being typed. Every key goes through
//! [`process`], which places tones where they belong no matter when the tone
//! key arrives, toggles circumflex/breve/horn marks and the đ stroke, and
//! undoes a tone on a double press. [`TelexEngine`] wraps one word into a
//! typing session that reports edits through an [`InjectionSink`].
//!
//! ```
//! use telex_engine::{Outcome, Word, process};
//!
//! let mut word = Word::new();
//! for key in "viee".chars() {
//!     if process(&mut word, key) == Outcome::NoChange {
//!         word.push(key).unwrap();
//!     }
//! }
//! assert_eq!(word.to_string(), "viê");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod buffers;
mod cvc;
mod engine;
mod inject;
mod marks;
mod modes;
mod syllable;
mod tone;
mod vowels;
mod word;

#[cfg(feature = "std")]
pub mod config;

pub use buffers::{HISTORY_CAPACITY, OutBuffer, WORD_CAPACITY};
pub use cvc::{CvcInfo, extract_cvc};
pub use engine::{Outcome, TelexEngine, process, reset};
pub use inject::{Discard, InjectionSink};
pub use marks::{d_stroke, double_vowel, w_key};
pub use modes::{InputMode, is_telex_key, tone_for_key};
pub use syllable::is_valid_syllable;
pub use tone::{apply_tone, find_tone_position, is_valid_tone, normalize_tone};
pub use vowels::{Row, Tone, Vowel, compose, is_vowel, row_of, rows, tone_of, with_tone};
pub use word::{CapacityError, TransformKind, Transformation, Word};

#[cfg(feature = "std")]
pub use config::Config;
#[cfg(feature = "std")]
pub use inject::TextBuffer;
