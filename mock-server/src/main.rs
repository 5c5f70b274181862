use mock_server::{Db, Stub};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");

    let db = Db::default();
    if let Ok(path) = std::env::var("MOCK_STUBS") {
        let raw = tokio::fs::read_to_string(&path).await?;
        let stubs: Vec<Stub> = serde_json::from_str(&raw)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        println!("loaded {} stubs from {path}", stubs.len());
        let mut state = db.write().await;
        for stub in stubs {
            state.add_stub(stub);
        }
    }

    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr}");
    mock_server::run(listener, db).await
}
