pub mod commitments_screen;
pub mod dashboard_screen;
pub mod login_screen;
pub mod stats_screen;

/// Top-level views. Dialogs live in `state::Modal` and are drawn on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    Commitments,
    Stats,
}

impl Screen {
    /// Screens reachable with the number keys, in tab order
    pub const TABS: [Screen; 3] = [Screen::Dashboard, Screen::Commitments, Screen::Stats];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Dashboard => "Dashboard",
            Screen::Commitments => "Commitments",
            Screen::Stats => "Stats",
        }
    }
}
