// Interface adapters: HTTP protocol, handlers, templates and routing.

pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
pub mod templates;
