use std::env;
use std::fs;
use std::path::Path;

// Claves que la app lee con option_env! (ver src/config.rs)
const KNOWN_KEYS: &[&str] = &[
    "BACKEND_URL_DEVELOPMENT",
    "BACKEND_URL_PRODUCTION",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "DEFAULT_COUNTRY_CODE",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No .env file found. Using default values. Copy .env.example to .env to configure the backend URL.");
        return;
    }

    println!("cargo:rerun-if-changed=.env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=.env could not be read, using default values");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !KNOWN_KEYS.contains(&key) {
            println!("cargo:warning=Ignoring unknown .env key: {}", key);
            continue;
        }

        // Las variables del entorno real tienen prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
