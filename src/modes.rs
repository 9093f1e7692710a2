use crate::vowels::Tone;

pub const IS_TONE_KEY: u8 = 1 << 0; // s, f, r, x, j, z
pub const IS_MARK_KEY: u8 = 1 << 1; // a, e, o, w, d

/// Whether keystrokes are transformed or passed through untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum InputMode {
    #[default]
    Vietnamese,
    English,
}

impl InputMode {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            InputMode::Vietnamese => InputMode::English,
            InputMode::English => InputMode::Vietnamese,
        }
    }
}

// Both tables are indexed by the lowercased ASCII key.
pub const CLASSIFY_TELEX: [u8; 256] = {
    let mut t = [0u8; 256];
    t[b's' as usize] = IS_TONE_KEY;
    t[b'f' as usize] = IS_TONE_KEY;
    t[b'r' as usize] = IS_TONE_KEY;
    t[b'x' as usize] = IS_TONE_KEY;
    t[b'j' as usize] = IS_TONE_KEY;
    t[b'z' as usize] = IS_TONE_KEY;

    t[b'a' as usize] = IS_MARK_KEY;
    t[b'e' as usize] = IS_MARK_KEY;
    t[b'o' as usize] = IS_MARK_KEY;
    t[b'w' as usize] = IS_MARK_KEY;
    t[b'd' as usize] = IS_MARK_KEY;
    t
};

pub const TONE_TELEX: [u8; 256] = {
    let mut t = [0u8; 256];
    t[b's' as usize] = 1;
    t[b'f' as usize] = 2;
    t[b'r' as usize] = 3;
    t[b'x' as usize] = 4;
    t[b'j' as usize] = 5;
    t[b'z' as usize] = 0;
    t
};

#[inline(always)]
fn classify(key: char) -> u8 {
    if key.is_ascii() {
        CLASSIFY_TELEX[key.to_ascii_lowercase() as usize]
    } else {
        0
    }
}

/// Any key that can trigger a transformation.
#[inline(always)]
pub fn is_telex_key(key: char) -> bool {
    classify(key) != 0
}

/// Tone requested by `key`, case-insensitive. `z` asks for `Tone::None`.
#[inline]
pub fn tone_for_key(key: char) -> Option<Tone> {
    if classify(key) & IS_TONE_KEY == 0 {
        return None;
    }
    Tone::from_index(TONE_TELEX[key.to_ascii_lowercase() as usize])
}
