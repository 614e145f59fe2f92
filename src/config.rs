use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    // Search engine settings
    pub engine: String,
    pub endpoint: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub probe_timeout_ms: u64,

    // Feature toggle (catalog/search/disable_cache_on_failure)
    pub disable_cache_on_failure: bool,

    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: "elasticsearch7".to_string(),
            endpoint: "http://127.0.0.1:9200".to_string(),
            username: None,
            password: None,
            probe_timeout_ms: 2000,
            disable_cache_on_failure: false,
            debug: false,
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    from_lookup(|key| std::env::var(key).ok())
}

fn from_lookup<F>(lookup: F) -> anyhow::Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let engine = lookup("SEARCH_FPC_ENGINE").unwrap_or_else(|| "elasticsearch7".to_string());

    let endpoint =
        lookup("SEARCH_FPC_ENDPOINT").unwrap_or_else(|| "http://127.0.0.1:9200".to_string());

    let username = lookup("SEARCH_FPC_USERNAME");
    let password = lookup("SEARCH_FPC_PASSWORD");

    let probe_timeout_ms = lookup("SEARCH_FPC_PROBE_TIMEOUT_MS")
        .unwrap_or_else(|| "2000".to_string())
        .parse()
        .unwrap_or(2000);

    let disable_cache_on_failure = lookup("SEARCH_FPC_DISABLE_CACHE_ON_FAILURE")
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false);

    let debug = lookup("DEBUG").is_some();

    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        anyhow::bail!("SEARCH_FPC_ENDPOINT must be an http(s) URL, got {:?}", endpoint);
    }

    Ok(Config {
        engine,
        endpoint,
        username,
        password,
        probe_timeout_ms,
        disable_cache_on_failure,
        debug,
    })
}
