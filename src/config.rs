use anyhow::{Context, Result, anyhow, bail};
use std::env;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 300;
const DEFAULT_CLOCK_TICK_SECS: u64 = 60;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// A shop the board can be pointed at.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Short code used to pick the shop at startup, e.g. `"3"`
    pub code: String,
    pub name: String,
    /// `location_id` value in the appointment store
    pub business_id: String,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub api_key: String,
    pub fetch_timeout: Duration,
}

/// Process configuration. Built once in `main` and never changed.
#[derive(Debug, Clone)]
pub struct Config {
    pub location: Location,
    pub store: StoreConfig,
    pub bind_addr: String,
    pub refresh_interval: Duration,
    pub clock_tick: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| anyhow!("{key} is not set"))
        };
        let seconds = |key: &str, default: u64| -> Result<Duration> {
            match lookup(key) {
                Some(raw) => {
                    let secs: u64 = raw
                        .trim()
                        .parse()
                        .with_context(|| format!("{key} must be a whole number of seconds"))?;
                    if secs == 0 {
                        bail!("{key} must be greater than zero");
                    }
                    Ok(Duration::from_secs(secs))
                }
                None => Ok(Duration::from_secs(default)),
            }
        };

        let locations = parse_locations(&required("BOARD_LOCATIONS")?)?;
        let location = match lookup("BOARD_LOCATION") {
            Some(code) => select_location(&locations, code.trim())?,
            None => locations[0].clone(),
        };

        Ok(Config {
            location,
            store: StoreConfig {
                url: required("SUPABASE_URL")?,
                api_key: required("SUPABASE_ANON_KEY")?,
                fetch_timeout: seconds("FETCH_TIMEOUT_SECS", DEFAULT_FETCH_TIMEOUT_SECS)?,
            },
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            refresh_interval: seconds("REFRESH_INTERVAL_SECS", DEFAULT_REFRESH_INTERVAL_SECS)?,
            clock_tick: seconds("CLOCK_TICK_SECS", DEFAULT_CLOCK_TICK_SECS)?,
        })
    }
}

/// Parses `code|name|business_id` entries separated by `;`.
pub fn parse_locations(raw: &str) -> Result<Vec<Location>> {
    let mut locations: Vec<Location> = Vec::new();

    for entry in raw.split(';').map(str::trim).filter(|e| !e.is_empty()) {
        let parts: Vec<&str> = entry.split('|').map(str::trim).collect();
        let [code, name, business_id] = parts[..] else {
            bail!("location entry {entry:?} must look like code|name|business_id");
        };
        if code.is_empty() || business_id.is_empty() {
            bail!("location entry {entry:?} is missing its code or business id");
        }
        if locations.iter().any(|l| l.code == code) {
            bail!("location code {code} is listed twice");
        }

        locations.push(Location {
            code: code.to_string(),
            name: name.to_string(),
            business_id: business_id.to_string(),
        });
    }

    if locations.is_empty() {
        bail!("no locations configured");
    }

    Ok(locations)
}

fn select_location(locations: &[Location], code: &str) -> Result<Location> {
    locations
        .iter()
        .find(|l| l.code == code)
        .cloned()
        .ok_or_else(|| anyhow!("unknown location code {code}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    const BASE: [(&str, &str); 3] = [
        ("SUPABASE_URL", "https://example.supabase.co"),
        ("SUPABASE_ANON_KEY", "anon"),
        ("BOARD_LOCATIONS", "1|Main Street|biz-100; 2|Airport|biz-200"),
    ];

    #[test]
    fn test_defaults() {
        let config = load(&BASE).unwrap();
        assert_eq!(config.location.code, "1");
        assert_eq!(config.location.business_id, "biz-100");
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.refresh_interval, Duration::from_secs(300));
        assert_eq!(config.clock_tick, Duration::from_secs(60));
        assert_eq!(config.store.fetch_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_selects_location_by_code() {
        let mut vars = BASE.to_vec();
        vars.push(("BOARD_LOCATION", "2"));
        vars.push(("REFRESH_INTERVAL_SECS", "120"));
        let config = load(&vars).unwrap();
        assert_eq!(config.location.name, "Airport");
        assert_eq!(config.refresh_interval, Duration::from_secs(120));
    }

    #[test]
    fn test_unknown_location_is_rejected() {
        let mut vars = BASE.to_vec();
        vars.push(("BOARD_LOCATION", "9"));
        assert!(load(&vars).is_err());
    }

    #[test]
    fn test_missing_store_settings() {
        assert!(load(&BASE[1..]).is_err());
        assert!(load(&BASE[..2]).is_err());
    }

    #[test]
    fn test_bad_interval() {
        let mut vars = BASE.to_vec();
        vars.push(("CLOCK_TICK_SECS", "0"));
        assert!(load(&vars).is_err());

        let mut vars = BASE.to_vec();
        vars.push(("CLOCK_TICK_SECS", "soon"));
        assert!(load(&vars).is_err());
    }

    #[test]
    fn test_parse_locations() {
        let locations = parse_locations("7|Eastside|4821;").unwrap();
        assert_eq!(
            locations,
            vec![Location {
                code: "7".into(),
                name: "Eastside".into(),
                business_id: "4821".into(),
            }]
        );

        assert!(parse_locations("").is_err());
        assert!(parse_locations("1|Only two").is_err());
        assert!(parse_locations("1|A|x;1|B|y").is_err());
    }
}
