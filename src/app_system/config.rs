use clap::Parser;
use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_HTTP_PORT: u16 = 8080;
pub const DEFAULT_BUFFER_SIZE: usize = 32;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "beer-stock", about = "Beer stock inventory service", version)]
pub struct AppConfig {
    #[arg(
        long,
        env = "BEER_STOCK_HTTP_BIND",
        value_name = "ADDR",
        default_value_t = default_http_bind(),
        help = "Address the HTTP API listens on"
    )]
    pub http_bind: SocketAddr,
    #[arg(
        long,
        env = "BEER_STOCK_BUFFER_SIZE",
        value_name = "N",
        default_value_t = DEFAULT_BUFFER_SIZE,
        value_parser = parse_buffer_size,
        help = "Capacity of the storage actor's request queue"
    )]
    pub buffer_size: usize,
    #[arg(
        long,
        env = "BEER_STOCK_LOG",
        value_name = "FILTER",
        default_value = DEFAULT_LOG_FILTER,
        help = "Log filter used when RUST_LOG is unset"
    )]
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http_bind: default_http_bind(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

fn default_http_bind() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_HTTP_PORT))
}

fn parse_buffer_size(value: &str) -> Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("`{}` is not a valid buffer size", value))?;
    if size == 0 {
        return Err("buffer size must be at least 1".to_string());
    }
    Ok(size)
}
