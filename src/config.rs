
use clap::Parser;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Runtime configuration for the HTTP server. Every option can also
/// be supplied through the environment.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "calc-service", version, about = "Evaluates arithmetic expressions over HTTP")]
pub struct Config {
  /// Address to listen on.
  #[arg(long, env = "CALC_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
  pub host: IpAddr,
  /// Port to listen on.
  #[arg(short, long, env = "CALC_PORT", default_value_t = 8080)]
  pub port: u16,
}

impl Config {
  pub fn socket_addr(&self) -> SocketAddr {
    SocketAddr::new(self.host, self.port)
  }
}
