use std::net::SocketAddr;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "huddle-server",
    about = "Signaling and presence server for huddle video rooms"
)]
pub struct ServerConfig {
    /// Address the HTTP/WebSocket listener binds to.
    #[arg(long, default_value = "0.0.0.0:2000")]
    pub bind: SocketAddr,

    /// Usernames to create in the in-memory user store at startup.
    #[arg(long, value_delimiter = ',')]
    pub seed_users: Vec<String>,
}
