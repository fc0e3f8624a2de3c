#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub serve: bool,
    pub max_body_size: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let serve = lookup("FITTRACK_SERVE")
            .map(|s| parse_flag(&s))
            .unwrap_or(false);

        let max_body_size_kb = lookup("MAX_BODY_SIZE_KB")
            .and_then(|s| s.parse().ok())
            .unwrap_or(64);

        Self {
            port,
            serve,
            max_body_size: max_body_size_kb * 1024,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
