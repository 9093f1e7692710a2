//! Onset / nucleus / coda decomposition of a syllable.

use core::ops::Range;

use crate::vowels::is_vowel;

/// Half-open index ranges of the three consonant/vowel clusters of a word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CvcInfo {
    pub onset: Range<usize>,
    pub nucleus: Range<usize>,
    pub coda: Range<usize>,
}

impl CvcInfo {
    /// Decomposes `letters`, whether or not a nucleus exists yet.
    pub fn scan(letters: &[char]) -> Self {
        let len = letters.len();
        let mut i = 0;

        while i < len && !is_vowel(letters[i]) {
            i += 1;
        }
        let mut onset = 0..i;

        let nucleus_start = i;
        while i < len && is_vowel(letters[i]) {
            i += 1;
        }
        let mut nucleus = nucleus_start..i;

        // "gi" and "qu" act as onsets when another vowel follows.
        if onset.len() == 1 && nucleus.len() > 1 {
            let first = letters[onset.start];
            let second = letters[nucleus.start];
            let digraph = matches!(
                (first, second),
                ('g' | 'G', 'i' | 'I') | ('q' | 'Q', 'u' | 'U')
            );
            if digraph {
                onset.end += 1;
                nucleus.start += 1;
            }
        }

        Self {
            onset,
            nucleus,
            coda: i..len,
        }
    }

    #[inline(always)]
    pub fn has_onset(&self) -> bool {
        !self.onset.is_empty()
    }

    #[inline(always)]
    pub fn has_nucleus(&self) -> bool {
        !self.nucleus.is_empty()
    }

    #[inline(always)]
    pub fn has_coda(&self) -> bool {
        !self.coda.is_empty()
    }
}

/// Decomposes `letters`; `None` while there is no vowel yet (word still undecidable).
pub fn extract_cvc(letters: &[char]) -> Option<CvcInfo> {
    let info = CvcInfo::scan(letters);
    info.has_nucleus().then_some(info)
}
