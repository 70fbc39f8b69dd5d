// Compiled page templates. Each page extends `game/base.html`.

use crate::domain::Page;
use crate::interface_adapters::routes::{SAVE_SETTINGS_PATH, STATIC_PATH, page_routes};
use askama::Template;

// Navigation entry rendered by the base layout.
pub struct NavLink {
    pub path: &'static str,
    pub title: &'static str,
}

// Values every page shares through the base layout.
struct Layout<'a> {
    site_name: &'a str,
    title: &'a str,
    nav: Vec<NavLink>,
}

impl<'a> Layout<'a> {
    fn new(page: Page, site_name: &'a str) -> Self {
        Self {
            site_name,
            title: page.title(),
            nav: nav_links(),
        }
    }
}

#[derive(Template)]
#[template(path = "game/home.html")]
struct HomeTemplate<'a> {
    layout: Layout<'a>,
}

#[derive(Template)]
#[template(path = "game/game.html")]
struct GameTemplate<'a> {
    layout: Layout<'a>,
    settings_endpoint: &'a str,
    static_root: &'a str,
}

#[derive(Template)]
#[template(path = "game/settings.html")]
struct SettingsTemplate<'a> {
    layout: Layout<'a>,
    settings_endpoint: &'a str,
}

#[derive(Template)]
#[template(path = "game/help.html")]
struct HelpTemplate<'a> {
    layout: Layout<'a>,
}

#[derive(Template)]
#[template(path = "game/about.html")]
struct AboutTemplate<'a> {
    layout: Layout<'a>,
}

// Navigation built from the page entries of the routing table.
pub fn nav_links() -> Vec<NavLink> {
    page_routes()
        .map(|(page, path)| NavLink {
            path,
            title: page.title(),
        })
        .collect()
}

// Render the template backing a page.
pub fn render_page(page: Page, site_name: &str) -> askama::Result<String> {
    let layout = Layout::new(page, site_name);
    match page {
        Page::Home => HomeTemplate { layout }.render(),
        Page::Game => GameTemplate {
            layout,
            settings_endpoint: SAVE_SETTINGS_PATH,
            static_root: STATIC_PATH,
        }
        .render(),
        Page::Settings => SettingsTemplate {
            layout,
            settings_endpoint: SAVE_SETTINGS_PATH,
        }
        .render(),
        Page::Help => HelpTemplate { layout }.render(),
        Page::About => AboutTemplate { layout }.render(),
    }
}
