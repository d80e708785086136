//! HTTP span helpers.

/// Label shared by every path the router does not serve.
const UNMATCHED_ROUTE: &str = "/{unmatched}";

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) route: &'static str,
    pub(super) span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let route = route_label(path);
    let span_name = format!("{method} {route}");

    RequestSpanName { route, span_name }
}

/// Map a request path onto one of the served route templates.
///
/// Labels come from a fixed set so clients cannot mint new metric series.
fn route_label(path: &str) -> &'static str {
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());

    match (segments.next(), segments.next(), segments.next()) {
        (None, _, _) => "/",
        (Some("recipes"), None, _) => "/recipes",
        (Some("recipes"), Some(_), None) => "/recipes/{id}",
        (Some("healthcheck"), None, _) => "/healthcheck",
        (Some("metrics"), None, _) => "/metrics",
        (Some("api-doc"), Some("openapi.json"), None) => "/api-doc/openapi.json",
        (Some("docs"), _, _) => "/docs",
        _ => UNMATCHED_ROUTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_ids_share_one_route() {
        let names = request_span_name("GET", "/recipes/42");

        assert_eq!(names.route, "/recipes/{id}");
        assert_eq!(names.span_name, "GET /recipes/{id}");
    }

    #[test]
    fn malformed_recipe_ids_share_the_id_route() {
        assert_eq!(route_label("/recipes/abc"), "/recipes/{id}");
        assert_eq!(route_label("/recipes/x1/"), "/recipes/{id}");
    }

    #[test]
    fn served_routes_keep_their_template() {
        assert_eq!(route_label("/"), "/");
        assert_eq!(route_label("/recipes"), "/recipes");
        assert_eq!(route_label("/recipes/"), "/recipes");
        assert_eq!(route_label("/healthcheck"), "/healthcheck");
        assert_eq!(route_label("/api-doc/openapi.json"), "/api-doc/openapi.json");
        assert_eq!(route_label("/docs/index.css"), "/docs");
    }

    #[test]
    fn unknown_paths_fold_into_one_route() {
        assert_eq!(route_label("/wp-admin"), UNMATCHED_ROUTE);
        assert_eq!(route_label("/recipes/1/steps"), UNMATCHED_ROUTE);
        assert_eq!(route_label("/api-doc/other.json"), UNMATCHED_ROUTE);
    }
}
