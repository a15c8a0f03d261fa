//! Shared fixtures for integration tests.

use path_router::config::{parse_config, RouterConfig};
use path_router::Router;

/// A route file exercising constraints, defaults, args and both pattern kinds.
pub const ROUTES: &str = r#"
[server]
bind_address = "127.0.0.1:0"
request_timeout_secs = 5

[[routes]]
name = "home"
pattern = "/"
action = "Home"

[[routes]]
name = "user_show"
pattern = "/users/:id"
action = "UserShow"

[routes.constraints]
id = "[0-9]+"

[routes.defaults]
format = "html"

[routes.args]
layout = "main"

[[routes]]
name = "user_by_slug"
pattern = "/users/:slug"
action = "UserBySlug"

[[routes]]
name = "post_export"
pattern = "/users/:id/posts/:post_id.:ext"
action = "PostExport"

[routes.defaults]
ext = "json"

[[routes]]
name = "archive"
pattern = "/archive/:year/:page"
action = "Archive"

[routes.defaults]
page = 1
"#;

#[allow(dead_code)]
pub fn config() -> RouterConfig {
    parse_config(ROUTES).unwrap()
}

#[allow(dead_code)]
pub fn router() -> Router {
    Router::from_config(&config().routes).unwrap()
}
