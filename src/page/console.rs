/// Narration accumulated since the last game start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Console {
    text: String,
}

impl Console {
    pub fn new() -> Self {
        Console::default()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn replace(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_append_concatenates() {
        let mut console = Console::new();
        console.append("Starting a new random game...\n");
        console.append("P1's turn\n");
        assert_eq!(console.text(), "Starting a new random game...\nP1's turn\n");
    }

    #[test]
    fn test_clear_and_replace() {
        let mut console = Console::new();
        console.append("old game");
        console.clear();
        assert!(console.is_empty());

        console.append("abc");
        console.replace("xyz");
        assert_eq!(console.text(), "xyz");
        assert_eq!(console.len(), 3);
    }
}
