use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

/// Public forecast endpoint used when no override is provisioned.
const DEFAULT_WEATHER_API_URL: &str = "https://api.weatherapi.com/v1/forecast.json";

#[derive(Debug, Default, Serialize)]
struct DesktopBootstrapConfig {
    weather_api_key: Option<String>,
    weather_api_url: Option<String>,
}

fn main() {
    println!("cargo:rerun-if-env-changed=WEATHER_API_KEY");
    println!("cargo:rerun-if-env-changed=WEATHER_API_URL");

    if let Err(error) = write_desktop_bootstrap_config() {
        println!("cargo:warning=failed to generate desktop bootstrap config: {error}");
    }
}

fn write_desktop_bootstrap_config() -> io::Result<()> {
    load_workspace_dotenv();

    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    fs::create_dir_all(&out_dir)?;

    let config = DesktopBootstrapConfig {
        weather_api_key: env_var_trimmed("WEATHER_API_KEY"),
        weather_api_url: env_var_trimmed("WEATHER_API_URL")
            .or_else(|| Some(DEFAULT_WEATHER_API_URL.to_string())),
    };

    let content = serde_json::to_string_pretty(&config)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error.to_string()))?;
    fs::write(out_dir.join("weather-bootstrap.json"), content)?;
    Ok(())
}

fn load_workspace_dotenv() {
    let manifest_dir =
        env::var_os("CARGO_MANIFEST_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from);
    let candidate = manifest_dir.join("..").join("..").join(".env");
    if candidate.exists() {
        let _ = dotenvy::from_path(candidate);
    }
}

fn env_var_trimmed(name: &str) -> Option<String> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
