use std::{
    collections::HashMap,
    env, fs,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use directories::BaseDirs;

/// Layered settings: built-in defaults, then the rc file, then the process
/// environment (which always wins).
#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
}

impl Config {
    pub fn load() -> Self {
        let mut map = default_map();
        let config_path = default_config_path();

        // Read .stackenvrc if exists
        if config_path.exists() {
            if let Ok(file) = fs::File::open(&config_path) {
                let reader = BufReader::new(file);
                for line in reader.lines().flatten() {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some((k, v)) = line.split_once('=') {
                        map.insert(k.trim().to_string(), v.trim().to_string());
                    }
                }
            }
        }

        // Overlay environment variables (take precedence)
        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self { inner: map }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        // ENV first
        if let Ok(v) = env::var(key) {
            return Some(v);
        }
        self.inner.get(key).cloned()
    }

    pub fn get_path(&self, key: &str) -> Option<PathBuf> {
        self.get(key).map(PathBuf::from)
    }
}

fn is_config_key(k: &str) -> bool {
    // The AWS_* names match what the AWS CLI itself honors.
    const KEYS: &[&str] = &[
        "DEFAULT_MANAGER",
        "DEFAULT_ENVIRONMENT",
        "AWS_SHARED_CREDENTIALS_FILE",
        "AWS_CONFIG_FILE",
    ];

    KEYS.contains(&k) || k.starts_with("STACKENV_")
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("stackenv").join(".stackenvrc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();

    // Manager and environment carry no defaults; their absence routes to a prompt.
    if let Some(base) = BaseDirs::new() {
        let aws = base.home_dir().join(".aws");
        m.insert(
            "AWS_SHARED_CREDENTIALS_FILE".into(),
            aws.join("credentials").to_string_lossy().into_owned(),
        );
        m.insert(
            "AWS_CONFIG_FILE".into(),
            aws.join("config").to_string_lossy().into_owned(),
        );
    }

    m
}
