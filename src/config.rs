use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub test_merchant_email: String,
    pub test_api_key: String,
    pub test_api_secret: String,
    pub simulation: SimulationConfig,
}

/// Knobs for the simulated settlement engine. Test mode pins the outcome
/// and delay; otherwise delays and outcomes are drawn per payment.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub test_mode: bool,
    pub test_payment_success: bool,
    pub test_processing_delay_ms: u64,
    pub processing_delay_min_ms: u64,
    pub processing_delay_max_ms: u64,
    pub upi_success_rate: f64,
    pub card_success_rate: f64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            test_merchant_email: std::env::var("TEST_MERCHANT_EMAIL")
                .unwrap_or_else(|_| "test@example.com".to_string()),
            test_api_key: std::env::var("TEST_API_KEY")
                .unwrap_or_else(|_| "key_test_abc123".to_string()),
            test_api_secret: std::env::var("TEST_API_SECRET")
                .unwrap_or_else(|_| "secret_test_xyz789".to_string()),
            simulation: SimulationConfig::from_env(),
        }
    }
}

impl SimulationConfig {
    pub fn from_env() -> Self {
        Self {
            test_mode: env_parse("TEST_MODE", false),
            test_payment_success: env_parse("TEST_PAYMENT_SUCCESS", true),
            test_processing_delay_ms: env_parse("TEST_PROCESSING_DELAY", 1000),
            processing_delay_min_ms: env_parse("PROCESSING_DELAY_MIN", 5000),
            processing_delay_max_ms: env_parse("PROCESSING_DELAY_MAX", 10000),
            upi_success_rate: env_parse("UPI_SUCCESS_RATE", 0.90),
            card_success_rate: env_parse("CARD_SUCCESS_RATE", 0.95),
        }
    }
}

fn env_parse<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<T>().ok())
        .unwrap_or(default)
}
