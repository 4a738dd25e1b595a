// Failure logging keeps the span fields of the operation that failed.

use std::io;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use recipe_panel::{ChannelReloader, MemorySurface, PanelConfig, RecipeId, RecipePanel};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter(Arc::clone(&self.0))
    }
}

impl io::Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn failed_view_is_logged_with_recipe_id() {
    let router = axum::Router::new().route(
        "/api/recipe/get-partial/{id}",
        get(|| async { StatusCode::NOT_FOUND }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let sink = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_ansi(false)
        .with_max_level(Level::WARN)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let config = PanelConfig {
        base_url: format!("http://{}", addr),
        ..PanelConfig::default()
    };
    let (reloader, _reloads) = ChannelReloader::new();
    let panel = RecipePanel::new(
        &config,
        Arc::new(MemorySurface::default()),
        Arc::new(reloader),
    )
    .unwrap();
    panel.fetch_and_render_recipe(&RecipeId::from("999")).await;

    let bytes = sink.0.lock().expect("lock output").clone();
    let text = String::from_utf8(bytes).expect("utf8 log output");
    let line = text
        .lines()
        .find(|l| l.contains("non-success status"))
        .expect("warn line for the failed request");
    assert!(line.contains("WARN"), "line was: {line}");
    assert!(line.contains("recipe_id=999"), "line was: {line}");
    assert!(line.contains("status=404"), "line was: {line}");
}
