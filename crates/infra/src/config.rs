use tracing::warn;

const DEFAULT_VIES_URL: &str =
    "https://ec.europa.eu/taxation_customs/vies/services/checkVatService";

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Endpoint of the VIES SOAP service used for VAT verification
    pub vies_url: String,
    /// Upper bound in seconds for a single verification call. A stalled
    /// registry degrades latency but can never hang a request.
    pub vies_timeout_secs: u64,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let vies_url = std::env::var("VIES_URL").unwrap_or_else(|_| DEFAULT_VIES_URL.into());

        let default_timeout = "10";
        let vies_timeout_secs =
            std::env::var("VIES_TIMEOUT_SECS").unwrap_or(default_timeout.into());
        let vies_timeout_secs = match vies_timeout_secs.parse::<u64>() {
            Ok(timeout) if timeout > 0 => timeout,
            _ => {
                warn!(
                    "The given VIES_TIMEOUT_SECS: {} is not valid, falling back to the default: {}.",
                    vies_timeout_secs, default_timeout
                );
                default_timeout.parse::<u64>().unwrap()
            }
        };

        Self {
            port,
            vies_url,
            vies_timeout_secs,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
