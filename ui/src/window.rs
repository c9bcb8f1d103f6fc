use std::fmt;

use engine::Alignment;
use util::StrExt;

/// A text area that widgets are drawn into.
///
/// Lines wider than the window are cut off. If the window has a fixed
/// height, lines past the bottom are dropped.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Window {
    width: usize,
    height: Option<usize>,
    lines: Vec<String>,
}

impl Window {
    pub fn new(width: usize) -> Self {
        Window {
            width,
            ..Default::default()
        }
    }

    /// Fix the number of lines in the window.
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self.lines.truncate(height);
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height.unwrap_or(self.lines.len())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Return whether there's room for another line.
    pub fn is_full(&self) -> bool {
        self.height.is_some_and(|h| self.lines.len() >= h)
    }

    /// Write a line of text, text codes are stripped.
    ///
    /// Return false if the window is full and the line was dropped.
    pub fn write(&mut self, text: &str, align: Alignment) -> bool {
        if self.is_full() {
            return false;
        }

        let text: String =
            text.strip_text_codes().chars().take(self.width).collect();
        let slack = self.width - text.chars().count();
        let left = match align {
            Alignment::Left => 0,
            Alignment::Center => slack / 2,
            Alignment::Right => slack,
        };

        self.lines.push(format!(
            "{}{text}{}",
            " ".repeat(left),
            " ".repeat(slack - left)
        ));
        true
    }

    pub fn write_center(&mut self, text: &str) -> bool {
        self.write(text, Alignment::Center)
    }
}

/// Draw the window with a single line box border.
impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blank = " ".repeat(self.width);
        let bar = "─".repeat(self.width);

        writeln!(f, "┌{bar}┐")?;
        for y in 0..self.height() {
            let line = self.lines.get(y).unwrap_or(&blank);
            writeln!(f, "│{line}│")?;
        }
        write!(f, "└{bar}┘")
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn alignment() {
        let mut win = Window::new(7);
        win.write("ab", Alignment::Left);
        win.write("ab", Alignment::Center);
        win.write("ab", Alignment::Right);
        win.write(r"\c[2]abcdefghij\c[0]", Alignment::Center);

        assert_eq!(win.lines(), &["ab     ", "  ab   ", "     ab", "abcdefg"]);
    }

    #[test]
    fn fixed_height() {
        let mut win = Window::new(3).with_height(2);
        assert!(win.write("a", Alignment::Left));
        assert!(!win.is_full());
        assert!(win.write("b", Alignment::Left));
        assert!(!win.write("c", Alignment::Left));
        assert_eq!(win.lines().len(), 2);

        win.clear();
        win.write("x", Alignment::Right);
        assert_eq!(
            win.to_string(),
            "┌───┐\n\
             │  x│\n\
             │   │\n\
             └───┘"
        );
    }
}
