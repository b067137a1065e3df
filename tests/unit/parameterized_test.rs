//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same routing logic with different inputs.

use repo_catalog::server::dispatch;
use test_case::test_case;
use tiny_http::Method;

use crate::common::{new_repo, store};

// =============================================================================
// Unknown routes
// =============================================================================

#[test_case(Method::Get, "/" ; "root")]
#[test_case(Method::Get, "/repository" ; "singular collection")]
#[test_case(Method::Get, "/repositories/repo-1" ; "get single record")]
#[test_case(Method::Patch, "/repositories/repo-1" ; "patch instead of put")]
#[test_case(Method::Put, "/repositories" ; "put on collection")]
#[test_case(Method::Delete, "/repositories" ; "delete collection")]
#[test_case(Method::Get, "/repositories/repo-1/like" ; "get like")]
#[test_case(Method::Post, "/repositories/repo-1" ; "post to record")]
#[test_case(Method::Put, "/repositories/repo-1/extra" ; "nested path")]
#[test_case(Method::Post, "/repositories//like" ; "empty id")]
fn test_unknown_route_is_404(method: Method, url: &str) {
    let mut store = store();
    store.create(new_repo("A", "B", &[]));

    let reply = dispatch(&mut store, &method, url, "{}");

    assert_eq!(reply.status, 404);
    let body = reply.json().unwrap();
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("API endpoint not found"), "{message}");
    assert_eq!(store.list()[0].likes, 0);
}

// =============================================================================
// Status codes
// =============================================================================

#[test_case(Method::Get, "/repositories", "", 200 ; "list")]
#[test_case(Method::Post, "/repositories", r#"{"title": "x"}"#, 201 ; "create")]
#[test_case(Method::Put, "/repositories/repo-1", r#"{"url": "y"}"#, 200 ; "update")]
#[test_case(Method::Put, "/repositories/repo-1", "", 200 ; "update with empty body")]
#[test_case(Method::Delete, "/repositories/repo-1", "", 204 ; "delete")]
#[test_case(Method::Post, "/repositories/repo-1/like", "", 200 ; "like")]
#[test_case(Method::Put, "/repositories/REPO-1", "{}", 404 ; "ids are case sensitive")]
fn test_status_codes(method: Method, url: &str, body: &str, expected: u16) {
    let mut store = store();
    store.create(new_repo("A", "B", &[]));

    let reply = dispatch(&mut store, &method, url, body);
    assert_eq!(reply.status, expected);
}
