//! Screen implementations. Each screen is a top-level Component.

pub mod dashboard;
pub mod entities;

use crate::component::Component;
use crate::screen::ScreenId;

use self::dashboard::DashboardScreen;
use self::entities::EntityScreen;

/// Create all four screens.
pub fn create_screens() -> Vec<(ScreenId, Box<dyn Component>)> {
    ScreenId::ALL
        .iter()
        .map(|&id| {
            let screen: Box<dyn Component> = match id.kind() {
                Some(kind) => Box::new(EntityScreen::new(kind)),
                None => Box::new(DashboardScreen::new()),
            };
            (id, screen)
        })
        .collect()
}
