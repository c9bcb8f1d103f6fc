//! Text user interface for the fast travel menu

pub mod prelude {
    pub use crate::{
        FastTravelScene, InputAction, InputMap, SceneAction, Toast, Widget,
        Window,
    };
}

pub mod anim;

mod input;
pub use input::{InputAction, InputMap};

mod menu;
pub use menu::{Entry, FastTravelScene, Focus, SceneAction};

pub mod panel;

mod toast;
pub use toast::Toast;

mod widget;
pub use widget::{Centered, Widget};

mod window;
pub use window::Window;
