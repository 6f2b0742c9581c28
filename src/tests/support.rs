use std::time::Duration;

use wiremock::MockServer;

use crate::{Client, ClientConfig};

pub const TEST_TOKEN: &str = "abc123";

pub fn client_for(server: &MockServer) -> Client {
    Client::new(ClientConfig {
        base_url: server.uri(),
        api_token: Some(TEST_TOKEN.to_string()),
        timeout: Duration::from_secs(5),
    })
    .expect("client should build")
}
