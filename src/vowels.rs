//! Vietnamese vowel table: every base vowel in both cases with all six tone forms.
//!
//! The table is a 24×6 grid. A [`Row`] is one letter in one case, a column is
//! one [`Tone`]. Each letter is stored as an explicit record keyed by [`Vowel`],
//! so nothing here recovers a letter from index arithmetic.

/// The six Vietnamese tones. `None` is the level tone (no mark).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tone {
    #[default]
    None = 0,
    /// sắc
    Sac = 1,
    /// huyền
    Huyen = 2,
    /// hỏi
    Hoi = 3,
    /// ngã
    Nga = 4,
    /// nặng
    Nang = 5,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::None,
        Tone::Sac,
        Tone::Huyen,
        Tone::Hoi,
        Tone::Nga,
        Tone::Nang,
    ];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(i: u8) -> Option<Tone> {
        match i {
            0 => Some(Tone::None),
            1 => Some(Tone::Sac),
            2 => Some(Tone::Huyen),
            3 => Some(Tone::Hoi),
            4 => Some(Tone::Nga),
            5 => Some(Tone::Nang),
            _ => None,
        }
    }

    #[inline(always)]
    pub const fn is_none(self) -> bool {
        matches!(self, Tone::None)
    }
}

/// The twelve base vowel letters, ignoring case and tone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vowel {
    /// a
    A,
    /// ă
    Aw,
    /// â
    Aa,
    /// e
    E,
    /// ê
    Ee,
    /// i
    I,
    /// o
    O,
    /// ô
    Oo,
    /// ơ
    Ow,
    /// u
    U,
    /// ư
    Uw,
    /// y
    Y,
}

impl Vowel {
    pub const ALL: [Vowel; 12] = [
        Vowel::A,
        Vowel::Aw,
        Vowel::Aa,
        Vowel::E,
        Vowel::Ee,
        Vowel::I,
        Vowel::O,
        Vowel::Oo,
        Vowel::Ow,
        Vowel::U,
        Vowel::Uw,
        Vowel::Y,
    ];

    /// Lowercase ASCII letter with every mark stripped (ă, â -> a; ơ, ô -> o ...).
    #[inline]
    pub const fn plain(self) -> char {
        match self {
            Vowel::A | Vowel::Aw | Vowel::Aa => 'a',
            Vowel::E | Vowel::Ee => 'e',
            Vowel::I => 'i',
            Vowel::O | Vowel::Oo | Vowel::Ow => 'o',
            Vowel::U | Vowel::Uw => 'u',
            Vowel::Y => 'y',
        }
    }

    #[inline(always)]
    fn record(self) -> &'static VowelRecord {
        &VOWEL_TABLE[self as usize]
    }
}

struct VowelRecord {
    vowel: Vowel,
    lower: [char; 6],
    upper: [char; 6],
}

impl VowelRecord {
    #[inline(always)]
    fn forms(&self, upper: bool) -> &[char; 6] {
        if upper { &self.upper } else { &self.lower }
    }
}

// Ordered like `Vowel`; columns follow `Tone`.
static VOWEL_TABLE: [VowelRecord; 12] = [
    VowelRecord {
        vowel: Vowel::A,
        lower: ['a', 'á', 'à', 'ả', 'ã', 'ạ'],
        upper: ['A', 'Á', 'À', 'Ả', 'Ã', 'Ạ'],
    },
    VowelRecord {
        vowel: Vowel::Aw,
        lower: ['ă', 'ắ', 'ằ', 'ẳ', 'ẵ', 'ặ'],
        upper: ['Ă', 'Ắ', 'Ằ', 'Ẳ', 'Ẵ', 'Ặ'],
    },
    VowelRecord {
        vowel: Vowel::Aa,
        lower: ['â', 'ấ', 'ầ', 'ẩ', 'ẫ', 'ậ'],
        upper: ['Â', 'Ấ', 'Ầ', 'Ẩ', 'Ẫ', 'Ậ'],
    },
    VowelRecord {
        vowel: Vowel::E,
        lower: ['e', 'é', 'è', 'ẻ', 'ẽ', 'ẹ'],
        upper: ['E', 'É', 'È', 'Ẻ', 'Ẽ', 'Ẹ'],
    },
    VowelRecord {
        vowel: Vowel::Ee,
        lower: ['ê', 'ế', 'ề', 'ể', 'ễ', 'ệ'],
        upper: ['Ê', 'Ế', 'Ề', 'Ể', 'Ễ', 'Ệ'],
    },
    VowelRecord {
        vowel: Vowel::I,
        lower: ['i', 'í', 'ì', 'ỉ', 'ĩ', 'ị'],
        upper: ['I', 'Í', 'Ì', 'Ỉ', 'Ĩ', 'Ị'],
    },
    VowelRecord {
        vowel: Vowel::O,
        lower: ['o', 'ó', 'ò', 'ỏ', 'õ', 'ọ'],
        upper: ['O', 'Ó', 'Ò', 'Ỏ', 'Õ', 'Ọ'],
    },
    VowelRecord {
        vowel: Vowel::Oo,
        lower: ['ô', 'ố', 'ồ', 'ổ', 'ỗ', 'ộ'],
        upper: ['Ô', 'Ố', 'Ồ', 'Ổ', 'Ỗ', 'Ộ'],
    },
    VowelRecord {
        vowel: Vowel::Ow,
        lower: ['ơ', 'ớ', 'ờ', 'ở', 'ỡ', 'ợ'],
        upper: ['Ơ', 'Ớ', 'Ờ', 'Ở', 'Ỡ', 'Ợ'],
    },
    VowelRecord {
        vowel: Vowel::U,
        lower: ['u', 'ú', 'ù', 'ủ', 'ũ', 'ụ'],
        upper: ['U', 'Ú', 'Ù', 'Ủ', 'Ũ', 'Ụ'],
    },
    VowelRecord {
        vowel: Vowel::Uw,
        lower: ['ư', 'ứ', 'ừ', 'ử', 'ữ', 'ự'],
        upper: ['Ư', 'Ứ', 'Ừ', 'Ử', 'Ữ', 'Ự'],
    },
    VowelRecord {
        vowel: Vowel::Y,
        lower: ['y', 'ý', 'ỳ', 'ỷ', 'ỹ', 'ỵ'],
        upper: ['Y', 'Ý', 'Ỳ', 'Ỷ', 'Ỹ', 'Ỵ'],
    },
];

/// One letter in one case: a row of the vowel grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Row {
    vowel: Vowel,
    upper: bool,
}

impl Row {
    #[inline(always)]
    pub const fn new(vowel: Vowel, upper: bool) -> Self {
        Self { vowel, upper }
    }

    /// Base letter of this row, ignoring tone and case.
    #[inline(always)]
    pub const fn vowel(self) -> Vowel {
        self.vowel
    }

    #[inline(always)]
    pub const fn is_upper(self) -> bool {
        self.upper
    }

    /// Position in the 24×6 grid.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.vowel as usize * 2 + self.upper as usize
    }

    #[inline(always)]
    pub fn form(self, tone: Tone) -> char {
        self.vowel.record().forms(self.upper)[tone.index()]
    }

    /// Same row, different base letter (e.g. a -> ă keeping case).
    #[inline(always)]
    pub const fn with_vowel(self, vowel: Vowel) -> Self {
        Self { vowel, upper: self.upper }
    }

    fn tone_of(self, c: char) -> Tone {
        self.vowel
            .record()
            .forms(self.upper)
            .iter()
            .position(|&f| f == c)
            .and_then(|i| Tone::from_index(i as u8))
            .unwrap_or(Tone::None)
    }
}

/// All 24 rows, lowercase before uppercase for each letter.
pub fn rows() -> impl Iterator<Item = Row> {
    Vowel::ALL
        .into_iter()
        .flat_map(|v| [Row::new(v, false), Row::new(v, true)])
}

/// Finds the row holding `c`, in any tone. Plain ASCII vowels skip the scan.
#[inline]
pub fn row_of(c: char) -> Option<Row> {
    if c.is_ascii() {
        let vowel = match c.to_ascii_lowercase() {
            'a' => Vowel::A,
            'e' => Vowel::E,
            'i' => Vowel::I,
            'o' => Vowel::O,
            'u' => Vowel::U,
            'y' => Vowel::Y,
            _ => return None,
        };
        return Some(Row::new(vowel, c.is_ascii_uppercase()));
    }

    for record in VOWEL_TABLE.iter() {
        if record.lower.contains(&c) {
            return Some(Row::new(record.vowel, false));
        }
        if record.upper.contains(&c) {
            return Some(Row::new(record.vowel, true));
        }
    }
    None
}

/// Tone carried by `c`; `Tone::None` for unmarked vowels and anything that is not a vowel.
#[inline]
pub fn tone_of(c: char) -> Tone {
    match row_of(c) {
        Some(row) => row.tone_of(c),
        None => Tone::None,
    }
}

#[inline(always)]
pub fn is_vowel(c: char) -> bool {
    row_of(c).is_some()
}

#[inline(always)]
pub fn compose(vowel: Vowel, upper: bool, tone: Tone) -> char {
    Row::new(vowel, upper).form(tone)
}

/// Replaces the tone on a vowel, keeping letter and case. Other characters pass through.
#[inline]
pub fn with_tone(c: char, tone: Tone) -> char {
    match row_of(c) {
        Some(row) => row.form(tone),
        None => c,
    }
}
