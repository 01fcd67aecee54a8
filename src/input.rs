//! Single-line text input with a cursor and a focus flag

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Byte offset into `value`, always on a char boundary
    cursor: usize,
    focused: bool,
    placeholder: &'static str,
}

impl TextInput {
    pub fn new(placeholder: &'static str) -> Self {
        TextInput {
            placeholder,
            ..TextInput::default()
        }
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the content and move the cursor to the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    /// Cursor position in characters, for placing the terminal cursor
    pub fn cursor_column(&self) -> usize {
        self.value[..self.cursor].chars().count()
    }

    /// Apply one key event. Returns whether it was consumed.
    ///
    /// Unfocused inputs and Ctrl/Alt chords are ignored.
    pub fn update(&mut self, key: &KeyEvent) -> bool {
        if !self.focused || key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.value.insert(self.cursor, c);
                self.cursor += c.len_utf8();
            }
            KeyCode::Backspace => {
                let Some(prev) = self.prev_boundary() else {
                    return false;
                };
                self.value.remove(prev);
                self.cursor = prev;
            }
            KeyCode::Delete => {
                if self.cursor >= self.value.len() {
                    return false;
                }
                self.value.remove(self.cursor);
            }
            KeyCode::Left => match self.prev_boundary() {
                Some(prev) => self.cursor = prev,
                None => return false,
            },
            KeyCode::Right => match self.next_boundary() {
                Some(next) => self.cursor = next,
                None => return false,
            },
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.len(),
            _ => return false,
        }
        true
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor].char_indices().last().map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut TextInput, code: KeyCode) -> bool {
        input.update(&KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            press(input, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_unfocused_input_ignores_keys() {
        let mut input = TextInput::new("url");
        assert!(!press(&mut input, KeyCode::Char('a')));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_typing_and_cursor_editing() {
        let mut input = TextInput::new("url");
        input.focus();
        type_str(&mut input, "helo");
        press(&mut input, KeyCode::Left);
        type_str(&mut input, "l");
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor_column(), 4);

        press(&mut input, KeyCode::Home);
        press(&mut input, KeyCode::Delete);
        press(&mut input, KeyCode::End);
        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.value(), "ell");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new("");
        input.focus();
        type_str(&mut input, "héllo→");
        press(&mut input, KeyCode::Backspace);
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.value(), "hllo");
        assert_eq!(input.cursor_column(), 1);
    }

    #[test]
    fn test_control_chords_are_not_text() {
        let mut input = TextInput::new("");
        input.focus();
        assert!(!input.update(&KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL)));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_set_value_moves_cursor_to_end() {
        let mut input = TextInput::new("");
        input.set_value("abc");
        assert_eq!(input.cursor_column(), 3);
        input.focus();
        assert!(!press(&mut input, KeyCode::Right));
    }
}
