use util::StrExt;

use crate::Window;

/// Something that can be drawn into a text window.
pub trait Widget {
    fn render(&self, win: &mut Window);

    /// Suggest a window height for this widget.
    fn preferred_height(&self, _width: usize) -> Option<usize> {
        None
    }
}

/// Left-justified, word-wrapped text.
impl Widget for str {
    fn render(&self, win: &mut Window) {
        if win.width() == 0 {
            return;
        }
        for line in self.strip_text_codes().wrap(win.width()) {
            if !win.write(&line, engine::Alignment::Left) {
                break;
            }
        }
    }

    fn preferred_height(&self, width: usize) -> Option<usize> {
        Some(self.strip_text_codes().wrap(width.max(1)).len())
    }
}

/// Centered, word-wrapped text.
pub struct Centered<'a>(pub &'a str);

impl Widget for Centered<'_> {
    fn render(&self, win: &mut Window) {
        if win.width() == 0 {
            return;
        }
        for line in self.0.strip_text_codes().wrap(win.width()) {
            if !win.write_center(&line) {
                break;
            }
        }
    }

    fn preferred_height(&self, width: usize) -> Option<usize> {
        self.0.preferred_height(width)
    }
}
