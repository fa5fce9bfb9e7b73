//! End-to-end tests that chain parsing, updates and rebuilding the way a
//! navigation layer would.

use toolbox_url::*;

#[test]
fn test_switch_tool_tab_and_back() {
    let current = "https://toolbox.example.com/tools/timestamp?tz=UTC&unit=ms#result";

    let switched = update_url_params(current, &QueryParams::from([("unit", "s")]));
    assert_eq!(
        switched,
        "https://toolbox.example.com/tools/timestamp?tz=UTC&unit=s#result"
    );

    let restored = update_url_params(&switched, &QueryParams::from([("unit", "ms")]));
    assert_eq!(restored, current);
}

#[test]
fn test_parse_modify_rebuild() {
    let parsed = parse_url("/tools/encoding?input=caf%C3%A9&mode=encode");
    assert_eq!(get_param(&parsed.query, "input"), Some(&QueryValue::from("café")));

    let query = set_param(&parsed.query, "mode", "decode");
    let query = remove_param(&query, "input");
    let query = set_param(&query, "history", vec!["a", "b"]);

    let url = build_url(&UrlParts {
        path: parsed.path.clone(),
        params: Some(query),
        ..UrlParts::default()
    });
    assert_eq!(url, "/tools/encoding?mode=decode&history=a&history=b");

    // The parsed query is untouched by the updates above.
    assert_eq!(parsed.query.len(), 2);
}

#[test]
fn test_values_survive_url_round_trip() {
    let tricky = QueryParams::from([
        ("json", QueryValue::from(r#"{"a":[1,2],"b":"x&y"}"#)),
        ("expr", QueryValue::from("1 + 1 = 2")),
        ("ids", QueryValue::from(vec!["10", "20"])),
    ]);

    let url = update_url_params("https://example.com/viewer", &tricky);
    let parsed = parse_url(&url);

    assert_eq!(parsed.path, "/viewer");
    assert_eq!(parsed.query, tricky);
}

#[test]
fn test_malformed_input_never_fails() {
    let inputs = [
        "%",
        "?%",
        "a=%zz&b=%E0%A4%A",
        "https://",
        "://missing-scheme",
        "#",
        "?&=&",
        "http://[::1",
    ];

    for input in inputs {
        let parsed = parse_url(input);
        let rebuilt = update_url_params(input, &QueryParams::new());
        assert!(parsed.hash.len() <= input.len(), "unexpected hash for: {}", input);
        assert!(rebuilt.len() <= input.len() * 3 + 8, "unexpected rebuild for: {}", input);
    }

    let parsed = parse_url("a=%zz&b=%E0%A4%A");
    assert_eq!(parsed.query.get("a"), Some(&QueryValue::from("%zz")));
    assert_eq!(parsed.query.get("b"), Some(&QueryValue::from("%E0%A4%A")));
}

#[test]
fn test_raw_options_round_trip() {
    let parsed = parse_url_with("/p?a=%41&b=x+y", &ParseQueryOptions::raw());
    assert_eq!(parsed.query.get("a"), Some(&QueryValue::from("%41")));

    let unencoded = StringifyQueryOptions {
        encode: false,
        ..StringifyQueryOptions::default()
    };
    let url = update_url_params_with(
        "/p?a=%41&b=x+y",
        &QueryParams::new(),
        &ParseQueryOptions::raw(),
        &unencoded,
    );
    assert_eq!(url, "/p?a=%41&b=x+y");
}
