use engine::Settings;

use crate::{Widget, Window};

/// Notification shown when a fast travel point is discovered.
pub struct Toast<'a> {
    heading: &'a str,
    name: &'a str,
}

impl<'a> Toast<'a> {
    pub fn new(settings: &'a Settings, name: &'a str) -> Self {
        Toast {
            heading: &settings.toast_text,
            name,
        }
    }

    /// Draw the toast into a new window of the given width.
    pub fn window(&self, width: usize) -> Window {
        let mut ret = Window::new(width).with_height(2);
        self.render(&mut ret);
        ret
    }
}

impl Widget for Toast<'_> {
    fn render(&self, win: &mut Window) {
        win.write_center(self.heading);
        win.write_center(self.name);
    }

    fn preferred_height(&self, _width: usize) -> Option<usize> {
        Some(2)
    }
}
