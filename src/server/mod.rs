//! HTTP server exposing the feed at `/rss`

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::FeedSite;

/// Server state
struct ServerState {
    site: FeedSite,
}

/// Build the router: a single `/rss` route answering any method
pub fn router(site: FeedSite) -> Router {
    let state = Arc::new(ServerState { site });

    Router::new()
        .route("/rss", any(rss_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the feed server
pub async fn start(site: &FeedSite, ip: &str, port: u16) -> Result<()> {
    let app = router(site.clone());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    tracing::info!("Serving {:?} at http://{}:{}/rss", site.content_dir, ip, port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Regenerate the feed for every request
async fn rss_handler(State(state): State<Arc<ServerState>>) -> Response {
    let site = state.site.clone();
    let result = tokio::task::spawn_blocking(move || site.generate()).await;

    match result {
        Ok(Ok(xml)) => xml.into_response(),
        Ok(Err(e)) => {
            // Unreadable content directory or a broken serializer takes the
            // whole process down
            tracing::error!("{}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Feed generation task failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Feed generation failed").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeedConfig;
    use std::fs;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    async fn spawn_server(files: &[(&str, &str)]) -> (tempfile::TempDir, SocketAddr) {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir(&content).unwrap();
        for (name, body) in files {
            fs::write(content.join(name), body).unwrap();
        }

        let site = FeedSite::with_config(dir.path(), FeedConfig::default());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(site)).await.unwrap();
        });

        (dir, addr)
    }

    /// Send a bare HTTP/1.1 request and return (status line, body)
    async fn request(addr: SocketAddr, method: &str, path: &str) -> (String, String) {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let req = format!(
            "{} {} HTTP/1.1\r\nHost: localhost\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            method, path
        );
        stream.write_all(req.as_bytes()).await.unwrap();

        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();

        let (head, body) = raw.split_once("\r\n\r\n").unwrap();
        let status = head.lines().next().unwrap().to_string();
        (status, body.to_string())
    }

    const POST: &str = "---\ntitle: \"A\"\nPubDate: \"2024-01-15\"\ntags: [\"x\"]\nauthor: \"B\"\n---\n# Hello\n";

    #[tokio::test]
    async fn test_get_rss() {
        let (_dir, addr) = spawn_server(&[("hello.md", POST)]).await;
        let (status, body) = request(addr, "GET", "/rss").await;
        assert!(status.contains("200"), "unexpected status: {}", status);

        let channel = rss::Channel::read_from(body.as_bytes()).unwrap();
        assert_eq!(channel.title(), "DevOps Weekly Updates");
        assert_eq!(channel.items().len(), 1);
        assert_eq!(
            channel.items()[0].link(),
            Some("http://devops.elliottmgmt.com/hello.md")
        );
    }

    #[tokio::test]
    async fn test_any_method() {
        let (_dir, addr) = spawn_server(&[("hello.md", POST)]).await;
        let (status, body) = request(addr, "POST", "/rss").await;
        assert!(status.contains("200"));
        assert!(body.contains("<rss"));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (_dir, addr) = spawn_server(&[]).await;
        let (status, _) = request(addr, "GET", "/feed.xml").await;
        assert!(status.contains("404"));
    }

    #[tokio::test]
    async fn test_empty_directory_serves_empty_feed() {
        let (_dir, addr) = spawn_server(&[]).await;
        let (_, body) = request(addr, "GET", "/rss").await;
        let channel = rss::Channel::read_from(body.as_bytes()).unwrap();
        assert!(channel.items().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_requests() {
        let (_dir, addr) = spawn_server(&[
            ("one.md", "---\ntitle: One\nPubDate: 2024-01-01\n---\nfirst"),
            ("two.md", "---\ntitle: Two\nPubDate: 2024-01-08\n---\nsecond"),
        ])
        .await;

        let requests: Vec<_> = (0..8)
            .map(|_| tokio::spawn(request(addr, "GET", "/rss")))
            .collect();

        for handle in requests {
            let (status, body) = handle.await.unwrap();
            assert!(status.contains("200"));
            let channel = rss::Channel::read_from(body.as_bytes()).unwrap();
            assert_eq!(channel.items().len(), 2);
        }
    }

    #[tokio::test]
    async fn test_reflects_content_changes() {
        let (dir, addr) = spawn_server(&[]).await;
        let (_, body) = request(addr, "GET", "/rss").await;
        assert!(rss::Channel::read_from(body.as_bytes())
            .unwrap()
            .items()
            .is_empty());

        fs::write(dir.path().join("content/new.md"), POST).unwrap();
        let (_, body) = request(addr, "GET", "/rss").await;
        let channel = rss::Channel::read_from(body.as_bytes()).unwrap();
        assert_eq!(channel.items().len(), 1);
    }
}
