//! Text input editing (pure state transitions).
//!
//! Backs both search boxes and the bulk exception editor. The cursor is a
//! char index, not a byte index, so Arabic names edit correctly.

/// Editable text with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    /// Cursor position in chars, `0..=char_count`.
    cursor: usize,
    multiline: bool,
}

impl TextInput {
    /// Empty single-line input.
    pub fn single_line() -> Self {
        Self::default()
    }

    /// Empty multi-line input; Enter inserts a newline.
    pub fn multi_line() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    /// Single-line input pre-filled with `text`, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            multiline: false,
        }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether Enter inserts a newline.
    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

/// Insert a character at the cursor and advance it.
pub fn handle_char_input(mut input: TextInput, ch: char) -> TextInput {
    if ch == '\n' && !input.multiline {
        return input;
    }
    let at = input.byte_offset(input.cursor);
    input.text.insert(at, ch);
    input.cursor += 1;
    input
}

/// Insert a newline (multi-line inputs only).
pub fn handle_newline(input: TextInput) -> TextInput {
    handle_char_input(input, '\n')
}

/// Delete the character before the cursor.
pub fn handle_backspace(mut input: TextInput) -> TextInput {
    if input.cursor == 0 {
        return input;
    }
    let at = input.byte_offset(input.cursor - 1);
    input.text.remove(at);
    input.cursor -= 1;
    input
}

/// Move the cursor one char left, saturating at 0.
pub fn handle_cursor_left(mut input: TextInput) -> TextInput {
    input.cursor = input.cursor.saturating_sub(1);
    input
}

/// Move the cursor one char right, saturating at the end.
pub fn handle_cursor_right(mut input: TextInput) -> TextInput {
    let max = input.text.chars().count();
    input.cursor = (input.cursor + 1).min(max);
    input
}

/// Drop all text, keeping the line mode.
pub fn clear(input: TextInput) -> TextInput {
    TextInput {
        multiline: input.multiline,
        ..TextInput::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(input: TextInput, s: &str) -> TextInput {
        s.chars().fold(input, handle_char_input)
    }

    #[test]
    fn typing_appends_and_advances() {
        let input = typed(TextInput::single_line(), "abc");
        assert_eq!(input.text(), "abc");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn multibyte_text_edits_by_char() {
        // GIVEN an Arabic name with the cursor after the second letter
        let input = typed(TextInput::single_line(), "أمل");
        let input = handle_cursor_left(input);

        // WHEN inserting and deleting around the cursor
        let input = handle_char_input(input, 'ـ');
        assert_eq!(input.text(), "أمـل");
        let input = handle_backspace(input);

        // THEN the original text is restored
        assert_eq!(input.text(), "أمل");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let input = handle_backspace(TextInput::single_line());
        assert_eq!(input, TextInput::single_line());
    }

    #[test]
    fn cursor_saturates_at_both_ends() {
        let input = typed(TextInput::single_line(), "ab");
        let input = handle_cursor_right(input);
        assert_eq!(input.cursor(), 2);
        let input = handle_cursor_left(handle_cursor_left(handle_cursor_left(input)));
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn newline_only_in_multiline() {
        let single = handle_newline(typed(TextInput::single_line(), "11"));
        assert_eq!(single.text(), "11");

        let multi = typed(handle_newline(typed(TextInput::multi_line(), "11")), "13");
        assert_eq!(multi.text(), "11\n13");
    }

    #[test]
    fn clear_keeps_mode() {
        let input = clear(typed(TextInput::multi_line(), "x"));
        assert!(input.text().is_empty());
        assert!(input.is_multiline());
    }

    #[test]
    fn with_text_puts_cursor_at_end() {
        let input = TextInput::with_text("سارة");
        assert_eq!(input.cursor(), 4);
    }
}
