//! Byte cursor over a format string.
//!
//! The cursor advances byte-by-byte. Reading past the end yields `0x00`,
//! which no directive predicate accepts, so scanning loops terminate without
//! explicit bounds checks. Use [`Cursor::is_eof`] to tell a real NUL byte
//! from the end of input.

/// Cursor over the bytes of a `&str`.
///
/// The cursor is [`Copy`], so a directive scan can snapshot the position of
/// its `%` and rewind on demand.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    ///
    /// # Panics
    /// Panics if `source` is longer than `u32::MAX` bytes.
    pub fn new(source: &'a str) -> Self {
        assert!(
            u32::try_from(source.len()).is_ok(),
            "format string exceeds 4 GiB"
        );
        Self { source, pos: 0 }
    }

    /// Returns the byte at the current position, or `0x00` past the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.source.as_bytes().get(pos as usize).copied().unwrap_or(0)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Total source length in bytes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source length is checked to fit in u32 at construction"
    )]
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source.len() as u32
    }

    /// Extract `start..end` as `&str`.
    ///
    /// Callers only cut at ASCII bytes (`%` and directive characters) or at
    /// the end of a full UTF-8 character, so the range is always on char
    /// boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start as usize..end as usize]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// `pred(0)` must return `false`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance past one full UTF-8 character.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "a char is at most 4 bytes"
    )]
    pub fn advance_char(&mut self) {
        let width = self.source[self.pos as usize..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.pos += width as u32;
    }

    /// Advance to the next `%` using `memchr`, or to EOF if there is none.
    ///
    /// Returns `true` when a `%` was found.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < source_len which fits in u32"
    )]
    pub fn eat_until_percent(&mut self) -> bool {
        let remaining = &self.source.as_bytes()[self.pos as usize..];
        if let Some(offset) = memchr::memchr(b'%', remaining) {
            self.pos += offset as u32;
            true
        } else {
            self.pos = self.source_len();
            false
        }
    }
}
