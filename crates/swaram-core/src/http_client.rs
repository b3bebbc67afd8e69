use std::time::Duration;

use reqwest::Client;

/// Build the client shared by every upstream call
///
/// `timeout` bounds the whole exchange, body included. Redirects are never
/// followed, so a 3xx surfaces as a non-success status.
pub(crate) fn build(timeout: Duration) -> anyhow::Result<Client> {
    Client::builder()
        .user_agent(concat!("swaram/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::none())
        .pool_idle_timeout(Some(Duration::from_secs(30)))
        .tcp_nodelay(true)
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build upstream HTTP client: {e}"))
}
