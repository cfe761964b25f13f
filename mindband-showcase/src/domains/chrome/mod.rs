//! Page chrome around the showcase: theme switch, burger menu, dialogs.

pub mod dialogs;
pub mod menu;
pub mod theme;

pub use dialogs::DialogSet;
pub use menu::{BarAnimation, MenuToggle};
pub use theme::{Palette, ThemeMode};

/// Chrome state owned by the application.
#[derive(Debug, Clone, Default)]
pub struct Chrome {
    pub theme: ThemeMode,
    pub menu: MenuToggle,
    pub dialogs: DialogSet,
}
