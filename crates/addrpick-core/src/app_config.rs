pub const DEFAULT_DAWA_BASE_URL: &str = "https://api.dataforsyningen.dk";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub dawa_base_url: String,
    /// Base URL of the utility-operator proxy. `None` when the variable is
    /// unset or blank, which turns the whole secondary lookup off.
    pub elnet_proxy_base: Option<String>,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub result_rows: usize,
}

impl AppConfig {
    #[must_use]
    pub fn secondary_lookup_enabled(&self) -> bool {
        self.elnet_proxy_base.is_some()
    }
}
