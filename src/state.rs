// src/state.rs

/// Display settings resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub currency_symbol: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Settings {
            // Source locale bills in rupees
            currency_symbol: std::env::var("CURRENCY_SYMBOL")
                .unwrap_or_else(|_| "₹".to_string()),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}
