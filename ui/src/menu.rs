use std::fmt::Write;

use engine::{Session, TravelPoint, ALL_CATEGORIES};
use util::{write, writeln};

use crate::{
    panel::{CostPanel, DescriptionPanel, ImagePanel},
    InputAction, Widget, Window,
};

/// Which part of the menu takes input.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Focus {
    Categories,
    List,
}

/// What the menu wants the game to do.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum SceneAction {
    /// Travel to the named point.
    Travel(String),
    /// Leave the menu.
    Close,
}

/// A row in the point list.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Entry {
    pub name: String,
    /// Whether the party can afford the trip.
    pub enabled: bool,
}

/// The fast travel menu.
///
/// With the category bar shown the menu starts with the bar focused, and
/// the list shows the points of the category under the bar cursor. Without
/// it, the list of all discovered points is focused right away.
#[derive(Clone, Debug)]
pub struct FastTravelScene {
    /// Category bar entries, `None` when the bar is hidden.
    categories: Option<Vec<String>>,
    category: usize,
    entries: Vec<Entry>,
    cursor: Option<usize>,
    focus: Focus,
}

impl FastTravelScene {
    /// Open the menu, an empty `categories` shows every category that has
    /// discovered points.
    pub fn new(session: &Session, categories: &[String]) -> Self {
        let mut ret = if session.data().settings.show_categories {
            let categories = if categories.is_empty() {
                session
                    .registry()
                    .categories()
                    .into_iter()
                    .map(|c| c.to_owned())
                    .collect()
            } else {
                categories.to_vec()
            };

            FastTravelScene {
                categories: Some(categories),
                category: 0,
                entries: Vec::new(),
                cursor: None,
                focus: Focus::Categories,
            }
        } else {
            FastTravelScene {
                categories: None,
                category: 0,
                entries: Vec::new(),
                cursor: Some(0),
                focus: Focus::List,
            }
        };

        ret.refresh(session);
        ret
    }

    /// Rebuild the point list from the session.
    pub fn refresh(&mut self, session: &Session) {
        let Some(category) = self.category() else {
            self.entries.clear();
            return;
        };

        self.entries = session
            .registry()
            .by_category(category)
            .map(|p| Entry {
                name: p.name().to_owned(),
                enabled: session.can_afford(p),
            })
            .collect();
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Category bar entries, empty when the bar is hidden.
    pub fn categories(&self) -> &[String] {
        self.categories.as_deref().unwrap_or_default()
    }

    /// Category the list is showing.
    pub fn category(&self) -> Option<&str> {
        match &self.categories {
            Some(cats) => cats.get(self.category).map(|c| c.as_str()),
            None => Some(ALL_CATEGORIES),
        }
    }

    pub fn selected(&self) -> Option<&Entry> {
        self.cursor.and_then(|i| self.entries.get(i))
    }

    pub fn selected_point<'a>(
        &self,
        session: &'a Session,
    ) -> Option<&'a TravelPoint> {
        self.selected()
            .and_then(|e| session.registry().find(&e.name))
    }

    pub fn input(
        &mut self,
        session: &Session,
        action: InputAction,
    ) -> Option<SceneAction> {
        use InputAction::*;

        match (self.focus, action) {
            (Focus::Categories, Left | Right) => {
                let n = self.categories().len();
                if n > 0 {
                    self.category = if action == Left {
                        (self.category + n - 1) % n
                    } else {
                        (self.category + 1) % n
                    };
                    self.refresh(session);
                }
            }
            (Focus::Categories, Confirm) => {
                if self.category().is_some() {
                    self.focus = Focus::List;
                    self.cursor = Some(0);
                }
            }
            (Focus::Categories, Cancel) => return Some(SceneAction::Close),
            (Focus::List, Up | Down) => {
                let n = self.entries.len();
                if n > 0 {
                    let i = self.cursor.unwrap_or(0).min(n - 1);
                    self.cursor = Some(if action == Up {
                        (i + n - 1) % n
                    } else {
                        (i + 1) % n
                    });
                }
            }
            (Focus::List, Confirm) => match self.selected() {
                Some(e) if e.enabled => {
                    return Some(SceneAction::Travel(e.name.clone()));
                }
                Some(e) => log::debug!("Can't afford travel to {:?}", e.name),
                None => {}
            },
            (Focus::List, Cancel) => {
                if self.categories.is_none() {
                    return Some(SceneAction::Close);
                }
                self.cursor = None;
                self.focus = Focus::Categories;
            }
            _ => {}
        }

        None
    }

    /// Draw the menu as text.
    pub fn render(&self, session: &Session, width: usize) -> String {
        let settings = &session.data().settings;
        let point = self.selected_point(session);
        let mut ret = String::new();

        if let Some(cats) = &self.categories {
            let bar: Vec<String> = cats
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    if i == self.category {
                        format!("[{c}]")
                    } else {
                        format!(" {c} ")
                    }
                })
                .collect();
            let mut win = Window::new(width).with_height(1);
            win.write_center(&bar.join(" "));
            writeln!(ret, "{win}");
        }

        // Two columns for the cursor and the can't afford mark.
        let mut names = Window::new(width.saturating_sub(2));
        for e in &self.entries {
            names.write(&e.name, settings.list_alignment);
        }
        let mut list = Window::new(width).with_height(self.entries.len().max(1));
        for (i, (e, line)) in self.entries.iter().zip(names.lines()).enumerate()
        {
            let cursor = if self.cursor == Some(i) { '>' } else { ' ' };
            let mark = if e.enabled { ' ' } else { '-' };
            list.write(&format!("{cursor}{mark}{line}"), Default::default());
        }
        writeln!(ret, "{list}");

        if settings.use_costs {
            let panel = CostPanel {
                point,
                data: session.data(),
            };
            let mut win = Window::new(width)
                .with_height(panel.preferred_height(width).unwrap_or(1));
            panel.render(&mut win);
            writeln!(ret, "{win}");
        }

        let panel = DescriptionPanel(point);
        let mut win = Window::new(width)
            .with_height(panel.preferred_height(width).unwrap_or(1));
        panel.render(&mut win);
        writeln!(ret, "{win}");

        let mut win = Window::new(width).with_height(1);
        ImagePanel(point).render(&mut win);
        write!(ret, "{win}");

        ret
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use engine::{Data, PointSpec};
    use pretty_assertions::assert_eq;

    use super::*;
    use InputAction::*;

    fn data(show_categories: bool) -> Data {
        let mut ret = Data::default();
        ret.settings.show_categories = show_categories;
        for (name, category, gold_cost, discovered) in [
            ("Harbor", "Towns", 0, true),
            ("Old Mill", "Wilds", 0, false),
            ("Ferry", "Coast", 100, true),
            ("Castle", "Towns", 0, true),
        ] {
            ret.fast_travel_points.insert(
                name.into(),
                PointSpec {
                    category: category.into(),
                    gold_cost,
                    discovered,
                    description: format!("This is {name}."),
                    ..Default::default()
                },
            );
        }
        ret
    }

    fn names(scene: &FastTravelScene) -> Vec<&str> {
        scene.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn without_categories() {
        let session = Session::new(Arc::new(data(false)));
        // Category arguments don't matter without the bar.
        let mut scene = FastTravelScene::new(&session, &["Towns".into()]);

        assert_eq!(scene.focus(), Focus::List);
        assert!(scene.categories().is_empty());
        assert_eq!(names(&scene), vec!["Harbor", "Ferry", "Castle"]);
        assert_eq!(scene.selected().unwrap().name, "Harbor");

        assert_eq!(scene.input(&session, Up), None);
        assert_eq!(scene.selected().unwrap().name, "Castle");
        scene.input(&session, Down);
        scene.input(&session, Down);
        assert_eq!(scene.selected().unwrap().name, "Ferry");

        // Party has no gold.
        assert!(!scene.selected().unwrap().enabled);
        assert_eq!(scene.input(&session, Confirm), None);

        scene.input(&session, Down);
        assert_eq!(
            scene.input(&session, Confirm),
            Some(SceneAction::Travel("Castle".into()))
        );
        assert_eq!(scene.input(&session, Cancel), Some(SceneAction::Close));
    }

    #[test]
    fn with_categories() {
        let mut session = Session::new(Arc::new(data(true)));
        session.party.gold = 100;
        let mut scene = FastTravelScene::new(&session, &[]);

        assert_eq!(scene.focus(), Focus::Categories);
        assert_eq!(scene.categories(), &["Towns", "Coast"]);
        assert_eq!(names(&scene), vec!["Harbor", "Castle"]);
        assert_eq!(scene.selected(), None);

        scene.input(&session, Left);
        assert_eq!(scene.category(), Some("Coast"));
        assert_eq!(names(&scene), vec!["Ferry"]);
        // Up and down don't move the bar.
        scene.input(&session, Down);
        assert_eq!(scene.category(), Some("Coast"));

        scene.input(&session, Confirm);
        assert_eq!(scene.focus(), Focus::List);
        assert_eq!(scene.selected_point(&session).unwrap().name(), "Ferry");
        assert!(scene.selected().unwrap().enabled);

        // Back to the bar, selection gets cleared.
        assert_eq!(scene.input(&session, Cancel), None);
        assert_eq!(scene.focus(), Focus::Categories);
        assert_eq!(scene.selected(), None);

        assert_eq!(scene.input(&session, Cancel), Some(SceneAction::Close));
    }

    #[test]
    fn explicit_categories() {
        let session = Session::new(Arc::new(data(true)));
        let mut scene = FastTravelScene::new(
            &session,
            &["Wilds".into(), "Nowhere".into()],
        );

        // Undiscovered points don't show.
        assert_eq!(names(&scene), Vec::<&str>::new());
        scene.input(&session, Confirm);
        assert_eq!(scene.input(&session, Down), None);
        assert_eq!(scene.input(&session, Confirm), None);
        assert_eq!(scene.selected(), None);

        // Nothing discovered, nothing on the bar.
        let session = Session::new(Arc::new(Data {
            settings: data(true).settings,
            ..Default::default()
        }));
        let empty = FastTravelScene::new(&session, &[]);
        assert_eq!(empty.category(), None);
        assert!(empty.entries().is_empty());
    }

    #[test]
    fn render() {
        let session = Session::new(Arc::new(data(false)));
        let scene = FastTravelScene::new(&session, &[]);
        let text = scene.render(&session, 20);

        assert_eq!(
            text,
            "\
┌────────────────────┐
│> Harbor            │
│ -Ferry             │
│  Castle            │
└────────────────────┘
┌────────────────────┐
│       Costs:       │
│        None        │
│                    │
└────────────────────┘
┌────────────────────┐
│This is Harbor.     │
│                    │
└────────────────────┘
┌────────────────────┐
│                    │
└────────────────────┘"
        );
    }
}
