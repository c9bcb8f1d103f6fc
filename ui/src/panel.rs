//! Side panels of the fast travel menu showing the selected point.

use engine::{Data, TravelPoint};

use crate::{Centered, Widget, Window};

/// Price of travelling to the selected point.
pub struct CostPanel<'a> {
    pub point: Option<&'a TravelPoint>,
    pub data: &'a Data,
}

impl Widget for CostPanel<'_> {
    fn render(&self, win: &mut Window) {
        let Some(point) = self.point else {
            return;
        };
        let settings = &self.data.settings;
        let cost = &point.cost;

        win.write_center(&settings.cost_text);
        if cost.is_free() {
            win.write_center(&settings.free_text);
        }
        if cost.gold > 0 {
            win.write_center(&format!("{}{}", cost.gold, settings.currency_unit));
        }
        if cost.item_amount > 0 {
            win.write_center(&format!(
                "{}x {}",
                cost.item_amount,
                self.data.item_name(cost.item)
            ));
        }
    }

    fn preferred_height(&self, _width: usize) -> Option<usize> {
        Some(self.data.settings.cost_window_lines as usize)
    }
}

pub struct DescriptionPanel<'a>(pub Option<&'a TravelPoint>);

impl Widget for DescriptionPanel<'_> {
    fn render(&self, win: &mut Window) {
        if let Some(point) = self.0 {
            point.description.render(win);
        }
    }

    fn preferred_height(&self, _width: usize) -> Option<usize> {
        Some(2)
    }
}

/// Shows the picture file name of the point, there's no pixel output.
pub struct ImagePanel<'a>(pub Option<&'a TravelPoint>);

impl Widget for ImagePanel<'_> {
    fn render(&self, win: &mut Window) {
        match self.0 {
            Some(point) if !point.image.is_empty() => {
                Centered(&format!("[{}]", point.image)).render(win)
            }
            _ => {}
        }
    }
}
