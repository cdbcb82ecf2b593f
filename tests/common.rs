#![allow(dead_code)] // not every test binary uses every helper

use alblearn::client::{ApiClient, Session};
use axum::Router;
use axum_test::{TestServer, TestServerConfig, Transport};

/// Runs a stub AlbLearn backend on a random local port, so the real HTTP
/// client is exercised end to end.
pub fn spawn_stub(router: Router) -> TestServer {
    let config = TestServerConfig {
        transport: Some(Transport::HttpRandomPort),
        ..TestServerConfig::default()
    };
    TestServer::new_with_config(router, config).expect("stub server starts")
}

pub fn client_for(server: &TestServer) -> ApiClient {
    client_with_session(server, Session::new())
}

pub fn client_with_session(server: &TestServer, session: Session) -> ApiClient {
    let address = server
        .server_address()
        .expect("stub server has an address")
        .to_string();
    ApiClient::new(address.trim_end_matches('/'), session).expect("client builds")
}
