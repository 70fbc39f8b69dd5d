// Static pages rendered by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Game,
    Settings,
    Help,
    About,
}

impl Page {
    pub const ALL: [Page; 5] = [Page::Home, Page::Game, Page::Settings, Page::Help, Page::About];

    // Human-readable title shown in the document head.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Game => "Play",
            Page::Settings => "Settings",
            Page::Help => "How to play",
            Page::About => "About",
        }
    }
}
