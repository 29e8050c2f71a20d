use camp_api::{serve, AppState};
use camp_core::db::open_db_in_memory;
use rusqlite::Connection;
use tokio::net::TcpListener;

/// Starts the API on an ephemeral port over a fresh in-memory database.
///
/// `setup` runs against the connection before the server takes it.
pub async fn spawn_app(setup: impl FnOnce(&Connection)) -> String {
    let conn = open_db_in_memory().expect("in-memory database should open");
    setup(&conn);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("listener has an address");
    tokio::spawn(serve(listener, AppState::new(conn), std::future::pending()));

    format!("http://{addr}")
}
