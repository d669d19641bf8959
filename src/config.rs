//! Server configuration from command-line flags and environment.

use clap::Parser;
use std::net::{IpAddr, SocketAddr};

use crate::error::{WebError, WebResult};

#[derive(Parser, Debug, Clone)]
#[command(name = "course-catalog")]
#[command(about = "Course catalog with mock signup, login and learner dashboard", long_about = None)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "CATALOG_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "CATALOG_PORT", default_value_t = 8080)]
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> WebResult<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| WebError::InvalidAddress(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}
