use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// A simple HTTP server for file listing, uploading, and downloading.
#[derive(Parser, Debug, Clone)]
#[command(name = "hfs", version, about)]
pub struct Config {
    /// Directory to serve files from
    #[arg(short = 'd', long = "dir-to-serve", default_value = ".")]
    pub dir_to_serve: PathBuf,

    /// IP address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    pub listen_ip: IpAddr,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    pub listen_port: u16,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Pin the served directory to an absolute path. Called once before the
    /// listener starts; the path never changes afterwards.
    pub fn resolve_served_dir(&mut self) -> std::io::Result<()> {
        self.dir_to_serve = std::fs::canonicalize(&self.dir_to_serve)?;
        Ok(())
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen_ip, self.listen_port)
    }
}
