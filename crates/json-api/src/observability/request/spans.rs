//! HTTP span helpers.

use uuid::Uuid;

/// Collapse UUID path segments so metrics and span names group by route.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut route = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            route.push('/');
        }

        if Uuid::parse_str(segment).is_ok() {
            route.push_str("{id}");
        } else {
            route.push_str(segment);
        }
    }

    route
}
