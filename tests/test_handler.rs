use docroot::http::request::{Request, RequestBuilder};
use docroot::http::response::StatusCode;
use docroot::server::{DocumentRoot, StaticFiles};
use tempfile::TempDir;

fn files_in(dir: &TempDir) -> StaticFiles {
    StaticFiles::new(DocumentRoot::new(dir.path()))
}

fn get(target: &str, accept: Option<&str>) -> Request {
    let builder = RequestBuilder::new().target(target);
    let builder = match accept {
        Some(accept) => builder.header("Accept", accept),
        None => builder,
    };
    builder.build().unwrap()
}

#[tokio::test]
async fn test_serves_file_with_exact_length() {
    let dir = TempDir::new().unwrap();
    let contents: Vec<u8> = (0..=255u8).cycle().take(3000).collect();
    std::fs::write(dir.path().join("blob.bin"), &contents).unwrap();

    let response = files_in(&dir).respond(&get("/blob.bin", Some("*/*"))).await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.header("Content-Length"), Some("3000"));
    assert_eq!(&response.body[..], &contents[..]);
}

#[tokio::test]
async fn test_serves_empty_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("empty.txt"), b"").unwrap();

    let response = files_in(&dir).respond(&get("/empty.txt", Some("*/*"))).await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.header("Content-Length"), Some("0"));
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();

    for accept in ["*/*", "text/html"] {
        let response = files_in(&dir).respond(&get("/nope.html", Some(accept))).await;
        assert_eq!(response.status, StatusCode::NotFound);
    }
}

#[tokio::test]
async fn test_missing_accept_is_not_acceptable_even_if_file_exists() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), b"<h1>hi</h1>").unwrap();

    let response = files_in(&dir).respond(&get("/index.html", None)).await;

    assert_eq!(response.status, StatusCode::NotAcceptable);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_mismatched_accept_is_not_acceptable() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), b"<h1>hi</h1>").unwrap();

    let response = files_in(&dir)
        .respond(&get("/index.html", Some("application/json")))
        .await;

    assert_eq!(response.status, StatusCode::NotAcceptable);
}

#[tokio::test]
async fn test_negotiation_checked_before_existence() {
    let dir = TempDir::new().unwrap();

    let response = files_in(&dir)
        .respond(&get("/missing.html", Some("application/json")))
        .await;

    assert_eq!(response.status, StatusCode::NotAcceptable);
}

#[tokio::test]
async fn test_matching_accept_serves_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), b"<h1>hi</h1>").unwrap();

    let response = files_in(&dir).respond(&get("/index.html", Some("text/html"))).await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(&response.body[..], b"<h1>hi</h1>");
}

#[tokio::test]
async fn test_query_string_is_ignored() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.txt"), b"abc").unwrap();

    let response = files_in(&dir).respond(&get("/a.txt?v=2", Some("*/*"))).await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(&response.body[..], b"abc");
}

#[tokio::test]
async fn test_nested_file() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("docs")).unwrap();
    std::fs::write(dir.path().join("docs").join("guide.txt"), b"read me").unwrap();

    let response = files_in(&dir).respond(&get("/docs/guide.txt", Some("*/*"))).await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(&response.body[..], b"read me");
}

#[tokio::test]
async fn test_unreadable_target_is_internal_error() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();

    let response = files_in(&dir).respond(&get("/sub", Some("*/*"))).await;

    assert_eq!(response.status, StatusCode::InternalServerError);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_same_request_twice_is_identical() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.txt"), b"same every time").unwrap();
    let files = files_in(&dir);
    let request = get("/a.txt", Some("text/txt"));

    let first = files.respond(&request).await;
    let second = files.respond(&request).await;

    assert_eq!(first.status, second.status);
    assert_eq!(first.headers, second.headers);
    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn test_dotted_directory_with_trailing_slash_negotiates() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("v1.2")).unwrap();

    let response = files_in(&dir).respond(&get("/v1.2/", Some("text/html"))).await;

    // Negotiation passes (no extension); the directory itself cannot be read.
    assert_eq!(response.status, StatusCode::InternalServerError);
}
