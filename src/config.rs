use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PAGE_SIZE: usize = 6;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub fixture_path: Option<PathBuf>,
    pub page_size: usize,
    pub fetch_delay: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let fixture_path = env::var("CATALOG_FIXTURE")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        let page_size = match env::var("CATALOG_PAGE_SIZE") {
            Ok(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| anyhow::anyhow!("CATALOG_PAGE_SIZE must be a positive integer, got {raw:?}"))?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };
        let fetch_delay = env::var("CATALOG_FETCH_DELAY_MS")
            .ok()
            .and_then(|ms| ms.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::ZERO);
        Ok(Self {
            host,
            port,
            fixture_path,
            page_size,
            fetch_delay,
        })
    }
}
