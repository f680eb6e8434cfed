use aura_router::{Route, Rule, SimpleRequest};

fn new_route(path: &str) -> Route {
    let mut route = Route::new();
    route.set_name("test").unwrap().set_path(path).unwrap();
    route
}

fn new_request(path: &str, server: &[(&str, &str)]) -> SimpleRequest {
    let mut request = SimpleRequest::new("GET", path);
    for &(k, v) in server {
        request = request.with_server(k, v);
    }
    request
}

fn is_match(rule: Rule, proto: &Route, request: &SimpleRequest) -> bool {
    let mut route = proto.candidate();
    let matched = rule.evaluate(&mut route, request);
    if matched {
        assert_eq!(route.failed_rule(), None);
    } else {
        assert_eq!(route.failed_rule(), Some(rule));
    }
    matched
}

#[test]
fn rule_pipeline_order() {
    assert_eq!(
        Rule::PIPELINE,
        [
            Rule::Path,
            Rule::Server,
            Rule::Method,
            Rule::Secure,
            Rule::Accept
        ]
    );
    assert_eq!(Rule::Method.to_string(), "method");
}

#[test]
fn rule_method() {
    let mut proto = new_route("/foo/bar/baz");
    proto.set_methods(vec!["POST"]);

    let request = SimpleRequest::new("POST", "/foo/bar/baz");
    assert!(is_match(Rule::Method, &proto, &request));

    let request = SimpleRequest::new("GET", "/foo/bar/baz");
    assert!(!is_match(Rule::Method, &proto, &request));

    let mut proto = new_route("/foo/bar/baz");
    proto.set_methods(vec!["GET", "POST"]);

    for &(method, expected) in &[("GET", true), ("POST", true), ("PUT", false), ("get", false)] {
        let request = SimpleRequest::new(method, "/foo/bar/baz");
        assert_eq!(is_match(Rule::Method, &proto, &request), expected, "{}", method);
    }

    let proto = new_route("/foo/bar/baz");
    for &method in &["GET", "PUT", "DELETE", "PROPFIND"] {
        let request = SimpleRequest::new(method, "/foo/bar/baz");
        assert!(is_match(Rule::Method, &proto, &request));
    }
}

#[test]
fn rule_secure_https() {
    let mut proto = new_route("/foo/bar/baz");
    proto.set_secure(true);

    assert!(is_match(Rule::Secure, &proto, &new_request("/foo/bar/baz", &[("HTTPS", "on")])));
    assert!(!is_match(Rule::Secure, &proto, &new_request("/foo/bar/baz", &[("HTTPS", "off")])));

    let mut proto = new_route("/foo/bar/baz");
    proto.set_secure(false);

    assert!(is_match(Rule::Secure, &proto, &new_request("/foo/bar/baz", &[("HTTPS", "off")])));
    assert!(!is_match(Rule::Secure, &proto, &new_request("/foo/bar/baz", &[("HTTPS", "on")])));
}

#[test]
fn rule_secure_server_port() {
    let mut proto = new_route("/foo/bar/baz");
    proto.set_secure(true);

    assert!(is_match(Rule::Secure, &proto, &new_request("/foo/bar/baz", &[("SERVER_PORT", "443")])));
    assert!(!is_match(Rule::Secure, &proto, &new_request("/foo/bar/baz", &[("SERVER_PORT", "80")])));

    let mut proto = new_route("/foo/bar/baz");
    proto.set_secure(false);

    assert!(is_match(Rule::Secure, &proto, &new_request("/foo/bar/baz", &[("SERVER_PORT", "80")])));
    assert!(!is_match(Rule::Secure, &proto, &new_request("/foo/bar/baz", &[("SERVER_PORT", "443")])));
    assert!(!is_match(
        Rule::Secure,
        &proto,
        &new_request("/foo/bar/baz", &[("HTTPS", "off"), ("SERVER_PORT", "443")])
    ));
}

#[test]
fn rule_secure_indifferent() {
    let proto = new_route("/foo/bar/baz");
    for server in &[
        &[][..],
        &[("HTTPS", "on")][..],
        &[("SERVER_PORT", "443")][..],
        &[("SERVER_PORT", "80")][..],
    ] {
        assert!(is_match(Rule::Secure, &proto, &new_request("/foo/bar/baz", server)));
    }
}

#[test]
fn rule_path_captures() {
    let mut proto = new_route("/blog/{id}/{slug}");
    proto.add_tokens(vec![("id", r"\d+")]);
    proto.add_defaults(vec![("format", "html")]);

    let mut route = proto.candidate();
    assert!(Rule::Path.evaluate(&mut route, &new_request("/blog/42/hello", &[])));
    let attrs: Vec<_> = route.attributes().iter().collect();
    assert_eq!(
        attrs,
        vec![
            ("format", &"html".to_owned()),
            ("id", &"42".to_owned()),
            ("slug", &"hello".to_owned())
        ]
    );

    let mut route = proto.candidate();
    assert!(!Rule::Path.evaluate(&mut route, &new_request("/blog/abc/hello", &[])));
    assert_eq!(route.failed_rule(), Some(Rule::Path));
    assert_eq!(route.attributes().len(), 1);
}

#[test]
fn rule_path_wildcard() {
    let mut proto = new_route("/files");
    proto.set_wildcard("rest");

    let mut route = proto.candidate();
    assert!(Rule::Path.evaluate(&mut route, &new_request("/files/a/b/c", &[])));
    assert_eq!(route.attributes().get("rest").map(String::as_str), Some("a/b/c"));

    let mut route = proto.candidate();
    assert!(Rule::Path.evaluate(&mut route, &new_request("/files", &[])));
    assert_eq!(route.attributes().get("rest"), None);

    let mut route = proto.candidate();
    assert!(!Rule::Path.evaluate(&mut route, &new_request("/filesystem", &[])));
}

#[test]
fn rule_path_uncompilable_route_fails() {
    let mut proto = new_route("/blog/{id}");
    proto.add_tokens(vec![("id", "(")]);
    assert!(!is_match(Rule::Path, &proto, &new_request("/blog/1", &[])));
}

#[test]
fn rule_server() {
    let mut proto = new_route("/foo");
    proto.add_server(vec![("HTTP_HOST", r"^(www\.)?example\.com$")]);

    let mut route = proto.candidate();
    let request = new_request("/foo", &[("HTTP_HOST", "www.example.com")]);
    assert!(Rule::Server.evaluate(&mut route, &request));
    assert_eq!(
        route.attributes().get("HTTP_HOST").map(String::as_str),
        Some("www.example.com")
    );

    assert!(!is_match(Rule::Server, &proto, &new_request("/foo", &[("HTTP_HOST", "example.org")])));
    assert!(!is_match(Rule::Server, &proto, &new_request("/foo", &[])));

    // no constraints: always passes
    let proto = new_route("/foo");
    assert!(is_match(Rule::Server, &proto, &new_request("/foo", &[])));
}

#[test]
fn rule_server_absent_value_is_empty() {
    let mut proto = new_route("/foo");
    proto.add_server(vec![("HTTP_X_TRACE", ".*")]);

    let mut route = proto.candidate();
    assert!(Rule::Server.evaluate(&mut route, &new_request("/foo", &[])));
    assert_eq!(route.attributes().get("HTTP_X_TRACE").map(String::as_str), Some(""));

    let mut proto = new_route("/foo");
    proto.add_server(vec![("HTTP_X_TRACE", "^$")]);
    assert!(is_match(Rule::Server, &proto, &new_request("/foo", &[])));
    assert!(!is_match(Rule::Server, &proto, &new_request("/foo", &[("HTTP_X_TRACE", "abc")])));
}

#[test]
fn rule_server_all_keys_must_match() {
    let mut proto = new_route("/foo");
    proto.add_server(vec![("HTTP_HOST", "example"), ("SERVER_PORT", "^8080$")]);

    let ok = new_request("/foo", &[("HTTP_HOST", "example.com"), ("SERVER_PORT", "8080")]);
    assert!(is_match(Rule::Server, &proto, &ok));

    let bad = new_request("/foo", &[("HTTP_HOST", "example.com"), ("SERVER_PORT", "80")]);
    assert!(!is_match(Rule::Server, &proto, &bad));
}

#[test]
fn rule_accept() {
    let mut proto = new_route("/foo");
    proto.add_accept(vec!["application/json", "text/csv"]);

    let cases: &[(Option<&str>, bool)] = &[
        (None, true),
        (Some(""), true),
        (Some("application/json"), true),
        (Some("text/html, text/csv;q=0.5"), true),
        (Some("text/*"), true),
        (Some("*/*"), true),
        (Some("text/html"), false),
        (Some("application/json;q=0"), false),
        (Some("image/*, text/html"), false),
    ];

    for &(accept, expected) in cases {
        let mut request = SimpleRequest::new("GET", "/foo");
        if let Some(accept) = accept {
            request = request.with_accept(accept);
        }
        assert_eq!(is_match(Rule::Accept, &proto, &request), expected, "{:?}", accept);
    }

    // no declared types: anything goes
    let proto = new_route("/foo");
    let request = SimpleRequest::new("GET", "/foo").with_accept("image/png");
    assert!(is_match(Rule::Accept, &proto, &request));

    // a route accepting anything
    let mut proto = new_route("/foo");
    proto.add_accept(vec!["*/*"]);
    assert!(is_match(Rule::Accept, &proto, &request));
}
