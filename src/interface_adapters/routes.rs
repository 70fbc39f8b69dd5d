use crate::domain::Page;
use crate::interface_adapters::handlers::pages::page_response;
use crate::interface_adapters::handlers::settings::save_settings_handler;
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    extract::State,
    handler::Handler,
    routing::{MethodRouter, any, get},
};
use std::sync::Arc;
use tower_http::services::ServeDir;

// Path the settings screen posts to.
pub const SAVE_SETTINGS_PATH: &str = "/save-settings/";
// Prefix the browser assets are served under.
pub const STATIC_PATH: &str = "/static";

// HTTP methods a route answers on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMethod {
    Get,
    Any,
}

// What a route dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Page(Page),
    SaveSettings,
    // Files under the configured static directory.
    StaticAssets,
}

// One entry of the routing table.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub method: RouteMethod,
    pub path: &'static str,
    pub endpoint: Endpoint,
}

// The full route surface of the site.
pub const ROUTES: &[Route] = &[
    Route {
        method: RouteMethod::Get,
        path: "/",
        endpoint: Endpoint::Page(Page::Home),
    },
    Route {
        method: RouteMethod::Get,
        path: "/game/",
        endpoint: Endpoint::Page(Page::Game),
    },
    Route {
        method: RouteMethod::Get,
        path: "/settings/",
        endpoint: Endpoint::Page(Page::Settings),
    },
    Route {
        method: RouteMethod::Get,
        path: "/help/",
        endpoint: Endpoint::Page(Page::Help),
    },
    Route {
        method: RouteMethod::Get,
        path: "/about/",
        endpoint: Endpoint::Page(Page::About),
    },
    Route {
        method: RouteMethod::Any,
        path: SAVE_SETTINGS_PATH,
        endpoint: Endpoint::SaveSettings,
    },
    Route {
        method: RouteMethod::Get,
        path: STATIC_PATH,
        endpoint: Endpoint::StaticAssets,
    },
];

// Pages in table order with the path each one is served on.
pub fn page_routes() -> impl Iterator<Item = (Page, &'static str)> {
    ROUTES.iter().filter_map(|route| match route.endpoint {
        Endpoint::Page(page) => Some((page, route.path)),
        _ => None,
    })
}

// Build the HTTP router from the routing table.
pub fn app(state: Arc<AppState>) -> Router {
    ROUTES
        .iter()
        .fold(Router::new(), |router, route| mount(router, route, &state))
        .with_state(state)
}

fn mount(router: Router<Arc<AppState>>, route: &Route, state: &AppState) -> Router<Arc<AppState>> {
    match route.endpoint {
        Endpoint::Page(page) => router.route(
            route.path,
            on(
                route.method,
                move |State(state): State<Arc<AppState>>| async move { page_response(page, &state) },
            ),
        ),
        Endpoint::SaveSettings => router.route(route.path, on(route.method, save_settings_handler)),
        // ServeDir answers GET and HEAD itself; other methods get 405.
        Endpoint::StaticAssets => {
            router.nest_service(route.path, ServeDir::new(&state.static_dir))
        }
    }
}

fn on<H, T>(method: RouteMethod, handler: H) -> MethodRouter<Arc<AppState>>
where
    H: Handler<T, Arc<AppState>>,
    T: 'static,
{
    match method {
        RouteMethod::Get => get(handler),
        RouteMethod::Any => any(handler),
    }
}
