use unicode_segmentation::UnicodeSegmentation;

/// Grapheme-level reader over the source string.
///
/// Positions handed out by [`Cursor::pos`] are byte offsets into the source,
/// always on a grapheme cluster boundary.
pub struct Cursor<'src> {
    source: &'src str,
    graphemes: Vec<(usize, &'src str)>,
    index: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            graphemes: source.grapheme_indices(true).collect(),
            index: 0,
        }
    }

    /// Current byte position in the source.
    pub fn pos(&self) -> usize {
        self.graphemes
            .get(self.index)
            .map_or(self.source.len(), |&(offset, _)| offset)
    }

    /// Peek at the current grapheme without advancing.
    pub fn peek(&self) -> Option<&'src str> {
        self.graphemes.get(self.index).map(|&(_, g)| g)
    }

    /// Advance one grapheme and return it.
    pub fn advance(&mut self) -> Option<&'src str> {
        let grapheme = self.peek()?;
        self.index += 1;
        Some(grapheme)
    }

    /// Advance if the current grapheme is exactly `expected`.
    pub fn match_grapheme(&mut self, expected: &str) -> bool {
        if self.peek() == Some(expected) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Return a slice of the source from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.pos()]
    }

    /// Whether the cursor has reached the end.
    pub fn is_at_end(&self) -> bool {
        self.index >= self.graphemes.len()
    }
}
