//! Pattern-compiler properties exercised through the public `Route` surface:
//! captures, wildcards, display rendering and the construction error
//! taxonomy.

use strada_router::{pattern_from_name, PathPattern, Route, RouterError, TAIL_PARAM};

fn handler() {}

#[test]
fn test_good_matches() {
    let cases: &[(&str, &str, &[(&str, &str)])] = &[
        ("/foo/:id", "/foo/123", &[("id", "123")]),
        ("/foo/{id}", "/foo/123", &[("id", "123")]),
        (
            "/foo/:id/ufo/:b",
            "/foo/223/ufo/a13",
            &[("id", "223"), ("b", "a13")],
        ),
        (
            "/foo/{id}/ufo/{b}",
            "/foo/223/ufo/a13",
            &[("id", "223"), ("b", "a13")],
        ),
        (
            "/foo/:id/ufo/:b",
            "/Foo/223/Ufo/a13",
            &[("id", "223"), ("b", "a13")],
        ),
        ("/:a", "/Something", &[("a", "Something")]),
        ("/{a}", "/Something", &[("a", "Something")]),
    ];

    for &(pattern, candidate, expected) in cases {
        let route = Route::new(pattern, handler).unwrap();
        let found = route
            .matches(candidate)
            .unwrap_or_else(|| panic!("{pattern} should match {candidate}"));

        let values = found.values().expect("parameterized route yields values");
        let got: Vec<(&str, &str)> = values.iter().collect();
        assert_eq!(got, expected, "{pattern} vs {candidate}");
    }
}

#[test]
fn test_parameterless_match_yields_no_values() {
    let route = Route::new("/alive", handler).unwrap();
    let found = route.matches("/alive").unwrap();
    assert!(found.values().is_none());

    let found = route.matches("/ALIVE").unwrap();
    assert!(found.values().is_none());
}

#[test]
fn test_bad_matches() {
    let cases = [
        ("/foo/:id", "/fo/123"),
        ("/foo/:id/ufo/:b", "/foo/223/uof/a13"),
        ("/:a", "/"),
    ];

    for (pattern, candidate) in cases {
        let route = Route::new(pattern, handler).unwrap();
        assert!(
            route.matches(candidate).is_none(),
            "{pattern} should not match {candidate}"
        );
    }
}

#[test]
fn test_captured_segment_never_contains_slash() {
    let route = Route::new("/cats/:cat_id/friends/:friend_id", handler).unwrap();
    assert!(route.matches("/cats/1/2/friends/3").is_none());

    let found = route.matches("/cats/1/friends/2").unwrap();
    for (_, value) in found.values().unwrap().iter() {
        assert!(!value.contains('/'));
    }
}

#[test]
fn test_tail_capture_has_no_leading_slash() {
    let route = Route::new("/files/*", handler).unwrap();

    for candidate in ["/files", "/files/", "/files//", "/files/a", "/files/a/b/c"] {
        let found = route.matches(candidate).unwrap();
        let tail = found.get(TAIL_PARAM).unwrap();
        assert!(!tail.starts_with('/'), "tail for {candidate}: {tail:?}");
    }
}

#[test]
fn test_wildcard_tail_may_be_empty() {
    let route = Route::new("/files/*", handler).unwrap();
    let found = route.matches("/files").unwrap();

    // An empty tail is still a capture: the mapping is present.
    let values = found.values().unwrap();
    assert_eq!(values.get(TAIL_PARAM), Some(""));
    assert_eq!(values.len(), 1);
}

#[test]
fn test_param_names_in_pattern_order() {
    let route = Route::new("/a/:first/b/{second}/c/:third", handler).unwrap();
    assert_eq!(route.param_names(), ["first", "second", "third"]);
    assert!(route.has_params());

    let found = route.matches("/a/1/b/2/c/3").unwrap();
    let names: Vec<&str> = found.values().unwrap().iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn test_display_patterns() {
    let cases = [
        ("/", "/"),
        ("/api/v1/help", "/api/v1/help"),
        ("/api/cats/:cat_id", "/api/cats/{cat_id}"),
        ("/api/cats/:cat_id/friends", "/api/cats/{cat_id}/friends"),
        (
            "/api/cats/:cat_id/friends/:friend_id",
            "/api/cats/{cat_id}/friends/{friend_id}",
        ),
        ("/api/cats/{cat_id}", "/api/cats/{cat_id}"),
    ];

    for (pattern, expected) in cases {
        let route = Route::new(pattern, handler).unwrap();
        assert_eq!(route.display_pattern(), expected);
    }
}

#[test]
fn test_pattern_normalization_is_observable() {
    let route = Route::new("/Api/Cats//", handler).unwrap();
    assert_eq!(route.pattern(), "/api/cats");
}

#[test]
fn test_repeated_parameter_name_is_construction_error() {
    for pattern in ["/:a/:a", "/foo/:a/ufo/:a", "/:foo/a/:foo"] {
        let err = Route::new(pattern, handler as fn()).unwrap_err();
        match err {
            RouterError::DuplicateParameter { name, .. } => {
                assert!(!name.is_empty());
            }
            other => panic!("expected duplicate parameter error for {pattern}, got {other}"),
        }
    }
}

#[test]
fn test_multiple_wildcards_are_construction_error() {
    for pattern in ["*/*", "/a/*/b/*", "**"] {
        let err = Route::new(pattern, handler as fn()).unwrap_err();
        assert!(
            matches!(err, RouterError::InvalidPattern { .. }),
            "expected invalid pattern error for {pattern}"
        );
    }
}

#[test]
fn test_malformed_capture_is_construction_error() {
    let err = Route::new("/users/{id", handler as fn()).unwrap_err();
    assert!(matches!(err, RouterError::InvalidPattern { .. }));
}

#[test]
fn test_path_pattern_is_usable_directly() {
    let pattern = PathPattern::new("/posts/:id").unwrap();
    assert_eq!(pattern.pattern(), "/posts/:id");
    assert_eq!(pattern.param_names(), ["id"]);

    let params = pattern.match_path("/posts/7").unwrap();
    assert_eq!(params.parse::<u32>("id"), Some(7));
}

#[test]
fn test_name_derivation() {
    assert_eq!(pattern_from_name("index"), "/");
    assert_eq!(pattern_from_name("home"), "/home");
    assert_eq!(pattern_from_name("hello_world"), "/hello-world");
    assert_eq!(pattern_from_name("get_cat_by_id"), "/get-cat-by-id");
}

#[test]
fn test_derived_pattern_compiles_like_explicit_one() {
    let derived = Route::from_handler_name("hello_world", handler).unwrap();
    let explicit = Route::new("/hello-world", handler).unwrap();

    assert_eq!(derived.pattern(), explicit.pattern());
    assert!(derived.matches("/Hello-World/").is_some());
}
