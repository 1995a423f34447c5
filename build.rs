use std::env;
use std::fs;
use std::path::Path;

// Variables que AppConfig::from_env() lee con option_env!
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL",
    "GEOCODING_URL",
    "TILE_URL",
    "LOGIN_PAGE",
    "NETWORK_TIMEOUT_SECONDS",
    "DEFAULT_MAP_CENTER_LAT",
    "DEFAULT_MAP_CENTER_LNG",
    "DEFAULT_MAP_ZOOM",
    "ENABLE_LOGGING",
];

fn main() {
    // Cargar variables de entorno desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !CONFIG_KEYS.contains(&key) {
                        println!("cargo:warning=Variable desconocida en .env: {}", key);
                        continue;
                    }

                    // El entorno del proceso tiene prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default values (backend de producción).");
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
