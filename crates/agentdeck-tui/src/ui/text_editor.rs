/// Multi-line text editor backing the message composer and modal inputs.
///
/// `cursor` is a byte offset into `text` and every operation keeps it on a
/// char boundary.
#[derive(Debug, Default)]
pub struct TextEditor {
    pub text: String,
    pub cursor: usize,
}

impl TextEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn handle_paste(&mut self, pasted: &str) {
        for c in pasted.chars().filter(|c| *c != '\r') {
            self.insert_char(c);
        }
    }

    pub fn delete_char_before(&mut self) {
        if let Some(prev) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.text.remove(self.cursor);
        }
    }

    pub fn delete_char_at(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.text[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    /// Jump left over whitespace, then to the start of the previous word
    pub fn move_word_left(&mut self) {
        while let Some(prev) = self.text[..self.cursor].chars().next_back() {
            if !prev.is_whitespace() {
                break;
            }
            self.cursor -= prev.len_utf8();
        }
        while let Some(prev) = self.text[..self.cursor].chars().next_back() {
            if prev.is_whitespace() {
                break;
            }
            self.cursor -= prev.len_utf8();
        }
    }

    /// Jump right over the current word, then over trailing whitespace
    pub fn move_word_right(&mut self) {
        while let Some(next) = self.text[self.cursor..].chars().next() {
            if next.is_whitespace() {
                break;
            }
            self.cursor += next.len_utf8();
        }
        while let Some(next) = self.text[self.cursor..].chars().next() {
            if !next.is_whitespace() {
                break;
            }
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_to_line_start(&mut self) {
        self.cursor = self.text[..self.cursor].rfind('\n').map(|i| i + 1).unwrap_or(0);
    }

    pub fn move_to_line_end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.text.len());
    }

    /// Delete to end of line; at the end of a line the newline itself goes
    pub fn kill_to_line_end(&mut self) {
        let line_end = self.text[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.text.len());
        if line_end == self.cursor {
            self.delete_char_at();
        } else {
            self.text.drain(self.cursor..line_end);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Take the buffer out, leaving the editor empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with(text: &str) -> TextEditor {
        let mut ed = TextEditor::new();
        ed.handle_paste(text);
        ed
    }

    #[test]
    fn test_insert_and_delete_multibyte() {
        let mut ed = TextEditor::new();
        ed.insert_char('é');
        ed.insert_char('x');
        assert_eq!(ed.text, "éx");
        ed.delete_char_before();
        ed.delete_char_before();
        assert_eq!(ed.text, "");
        assert_eq!(ed.cursor, 0);
    }

    #[test]
    fn test_paste_strips_carriage_returns() {
        let ed = editor_with("a\r\nb");
        assert_eq!(ed.text, "a\nb");
    }

    #[test]
    fn test_word_motion() {
        let mut ed = editor_with("hello brave world");
        ed.move_word_left();
        assert_eq!(&ed.text[ed.cursor..], "world");
        ed.move_word_left();
        assert_eq!(&ed.text[ed.cursor..], "brave world");
        ed.move_word_right();
        assert_eq!(&ed.text[ed.cursor..], "world");
    }

    #[test]
    fn test_line_start_and_end() {
        let mut ed = editor_with("one\ntwo three");
        ed.move_to_line_start();
        assert_eq!(&ed.text[ed.cursor..], "two three");
        ed.move_to_line_end();
        assert_eq!(ed.cursor, ed.text.len());
    }

    #[test]
    fn test_kill_to_line_end_then_joins_lines() {
        let mut ed = editor_with("one\ntwo");
        ed.cursor = 1;
        ed.kill_to_line_end();
        assert_eq!(ed.text, "o\ntwo");
        // Cursor now sits at the line end; a second kill removes the newline
        ed.kill_to_line_end();
        assert_eq!(ed.text, "otwo");
    }

    #[test]
    fn test_line_count() {
        assert_eq!(TextEditor::new().line_count(), 1);
        assert_eq!(editor_with("a\nb\nc").line_count(), 3);
    }

    #[test]
    fn test_take_resets_editor() {
        let mut ed = editor_with("draft");
        assert_eq!(ed.take(), "draft");
        assert!(ed.text.is_empty());
        assert_eq!(ed.cursor, 0);
    }
}
