use dotenv::dotenv;
use log::warn;
use std::env;

pub const PROXIES_TXT_FILE: &str = "proxies.txt";
pub const LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub proxies_txt_file: String,
    pub log_level: String,
}

impl Config {
    // Load the .env file, then read every setting from the environment
    pub fn load() -> Config {
        dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| match lookup(key) {
            Some(val) if !val.is_empty() => val,
            Some(_) => {
                warn!("{} is empty, using default {}", key, default);
                default.to_string()
            }
            None => default.to_string(),
        };

        Config {
            proxies_txt_file: var_or("PROXY_TEXT_FILE", PROXIES_TXT_FILE),
            log_level: var_or("LOG_LEVEL", LOG_LEVEL),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_fixed_file() {
        let config = Config::default();

        assert_eq!(config.proxies_txt_file, "proxies.txt");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn environment_overrides_defaults() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("PROXY_TEXT_FILE", "/tmp/list.txt"),
            ("LOG_LEVEL", "debug"),
        ]);

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.proxies_txt_file, "/tmp/list.txt");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn empty_values_fall_back() {
        let config = Config::from_lookup(|key| {
            if key == "PROXY_TEXT_FILE" {
                Some(String::new())
            } else {
                None
            }
        });

        assert_eq!(config.proxies_txt_file, "proxies.txt");
    }
}
