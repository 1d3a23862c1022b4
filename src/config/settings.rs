use log::debug;

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "MOJOB_API_URL";

pub struct ClientSettings {
    /// Prefix for every endpoint path, expected to end with `/`
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.mojob.io/".to_string(),
            user_agent: "MojobListings/1.0".to_string(),
            timeout_secs: 30,
        }
    }
}

pub struct AppConfig {
    pub client: ClientSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            client: ClientSettings::default(),
        }
    }

    /// Defaults, with the base URL taken from `MOJOB_API_URL` when set
    pub fn from_env() -> Self {
        Self::new().with_base_url(std::env::var(BASE_URL_ENV).ok())
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|url| !url.is_empty()) {
            debug!("Using base URL {}", url);
            self.client.base_url = url;
        }
        self
    }
}
