use crate::word::Transformation;

/// Hard ceiling on letters in one word. Real syllables never get close.
pub const WORD_CAPACITY: usize = 31;

/// Transformation records kept per word; later records are dropped.
pub const HISTORY_CAPACITY: usize = 64;

/// Bytes needed to render a full word (four UTF-8 bytes per letter at most).
pub const OUT_CAPACITY: usize = 128;

#[cfg(feature = "heapless")]
pub type LetterBuffer = heapless::Vec<char, WORD_CAPACITY>;

#[cfg(feature = "heapless")]
pub type HistoryLog = heapless::Vec<Transformation, HISTORY_CAPACITY>;

#[cfg(feature = "heapless")]
pub type OutBuffer = heapless::String<OUT_CAPACITY>;

#[cfg(not(feature = "heapless"))]
pub type LetterBuffer = Vec<char>;

#[cfg(not(feature = "heapless"))]
pub type HistoryLog = Vec<Transformation>;

#[cfg(not(feature = "heapless"))]
pub type OutBuffer = String;

#[cfg(all(not(feature = "std"), not(feature = "heapless")))]
compile_error!(
    "no_std build requires `heapless` feature (use --no-default-features --features heapless)"
);

#[cfg(feature = "heapless")]
#[inline(always)]
pub fn new_letter_buffer() -> LetterBuffer {
    LetterBuffer::new()
}

#[cfg(feature = "heapless")]
#[inline(always)]
pub fn new_history_log() -> HistoryLog {
    HistoryLog::new()
}

#[cfg(feature = "heapless")]
#[inline(always)]
pub fn new_out_buffer() -> OutBuffer {
    OutBuffer::new()
}

#[cfg(not(feature = "heapless"))]
#[inline(always)]
pub fn new_letter_buffer() -> LetterBuffer {
    Vec::with_capacity(WORD_CAPACITY)
}

#[cfg(not(feature = "heapless"))]
#[inline(always)]
pub fn new_history_log() -> HistoryLog {
    Vec::with_capacity(HISTORY_CAPACITY)
}

#[cfg(not(feature = "heapless"))]
#[inline(always)]
pub fn new_out_buffer() -> OutBuffer {
    String::with_capacity(OUT_CAPACITY)
}

/// Appends a letter unless the buffer already holds [`WORD_CAPACITY`] letters.
#[cfg(feature = "heapless")]
#[inline(always)]
pub fn push_letter(buf: &mut LetterBuffer, c: char) -> Result<(), char> {
    buf.push(c)
}

#[cfg(not(feature = "heapless"))]
#[inline(always)]
pub fn push_letter(buf: &mut LetterBuffer, c: char) -> Result<(), char> {
    if buf.len() >= WORD_CAPACITY {
        return Err(c);
    }
    buf.push(c);
    Ok(())
}

/// Appends a record unless the log is full. Overflow is silent.
#[inline(always)]
pub fn push_record(log: &mut HistoryLog, record: Transformation) {
    if log.len() < HISTORY_CAPACITY {
        let _ = log.push(record);
    }
}
