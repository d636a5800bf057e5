//! Shared fixtures for integration tests.

use switch_dispatch::{Dispatcher, SwitchBuilder};

/// Paths and values of the reference four-entry table.
#[allow(dead_code)]
pub const SAMPLE: [(&str, &str); 4] = [("ACF", "acf"), ("ACV", "acv"), ("AG", "ag"), ("EC", "ec")];

#[allow(dead_code)]
pub fn keys(path: &str) -> Vec<char> {
    path.chars().collect()
}

#[allow(dead_code)]
pub fn sample_builder() -> SwitchBuilder<char, String> {
    let mut builder = SwitchBuilder::new();
    for (path, value) in SAMPLE {
        builder.add(path.chars(), value.to_string());
    }
    builder
}

#[allow(dead_code)]
pub fn sample_dispatcher() -> Dispatcher<char, String> {
    sample_builder().build()
}

/// A segmented routing table exercising replace flags and the empty path.
#[allow(dead_code)]
pub const ROUTES_TOML: &str = r#"
[keys]
mode = "segments"
separator = "/"

[logging]
level = "debug"

[[entries]]
path = ""
value = "index"

[[entries]]
path = "users/list"
value = "list_users"

[[entries]]
path = "users/show"
value = "show_user"

[[entries]]
path = "users/list"
value = "ignored"
replace = false

[[entries]]
path = "orders"
value = "orders_v1"

[[entries]]
path = "orders"
value = "orders_v2"

[[entries]]
path = "orders/open"
value = "open_orders"
"#;
