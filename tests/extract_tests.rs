// Extraction and rendering against a saved pkg.go.dev search page

use gosearch::{extract_packages, render_results};

const SEARCH_PAGE: &str = include_str!("fixtures/search_results.html");

#[test]
fn test_extracts_every_snippet_in_order() {
    let records = extract_packages(SEARCH_PAGE).unwrap();
    let paths: Vec<&str> = records.iter().map(|r| r.path()).collect();
    assert_eq!(
        paths,
        vec![
            "github.com/gorilla/mux",
            "github.com/julienschmidt/httprouter",
            "net/http",
        ]
    );
}

#[test]
fn test_full_snippet_fields() {
    let records = extract_packages(SEARCH_PAGE).unwrap();
    let mux = &records[0];
    assert_eq!(
        mux.synopsis(),
        "Package mux implements a request router and dispatcher."
    );
    assert_eq!(mux.version(), "v1.8.1");
    assert_eq!(mux.published(), "Oct 18, 2023");
    assert_eq!(mux.imported_by(), "21,672");
    assert_eq!(mux.license(), "BSD-3-Clause");
    assert_eq!(mux.url(), "https://pkg.go.dev/github.com/gorilla/mux");
}

#[test]
fn test_snippet_without_license() {
    let records = extract_packages(SEARCH_PAGE).unwrap();
    let httprouter = &records[1];
    assert_eq!(httprouter.version(), "v1.3.0");
    assert_eq!(httprouter.license(), "");
}

#[test]
fn test_standard_library_snippet_uses_href() {
    let records = extract_packages(SEARCH_PAGE).unwrap();
    let http = &records[2];
    assert_eq!(http.path(), "net/http");
    assert_eq!(http.url(), "https://pkg.go.dev/net/http");
    assert_eq!(http.synopsis(), "");
    assert_eq!(http.version(), "");
    assert_eq!(http.license(), "BSD-3-Clause");
}

#[test]
fn test_url_always_derived_from_path() {
    for record in extract_packages(SEARCH_PAGE).unwrap() {
        assert_eq!(record.url(), format!("https://pkg.go.dev/{}", record.path()));
    }
}

#[test]
fn test_render_fixture() {
    colored::control::set_override(false);
    let records = extract_packages(SEARCH_PAGE).unwrap();
    let mut out = Vec::new();
    render_results(&mut out, &records).unwrap();
    let text = String::from_utf8(out).unwrap();

    let expected = "\
github.com/gorilla/mux (v1.8.1)
  Imports: 21,672 | License: BSD-3-Clause | Updated: Oct 18, 2023
  Package mux implements a request router and dispatcher.

github.com/julienschmidt/httprouter (v1.3.0)
  Imports: 4,301 | Updated: Sep 29, 2019
  Package httprouter is a trie based high performance HTTP request router.

net/http
  License: BSD-3-Clause
  (No description available)

";
    assert_eq!(text, expected);
}
