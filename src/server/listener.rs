use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{Instrument, info, info_span, warn};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::site::Site;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let site = Arc::new(Site::from_config(&cfg.static_files)?);
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!(
        "Listening on {}, serving {}",
        cfg.server.listen_addr,
        site.root.display()
    );

    serve(listener, site).await
}

/// Accept loop. Each connection gets its own task and nothing is shared
/// between tasks except the read-only `Site`.
pub async fn serve(listener: TcpListener, site: Arc<Site>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!(error = %e, "Failed to accept connection");
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let site = site.clone();
        tokio::spawn(
            async move {
                let mut conn = Connection::new(socket, site);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {:#}", peer, e);
                }
            }
            .instrument(info_span!("conn", %peer)),
        );
    }
}
