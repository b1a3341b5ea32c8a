use std::path::PathBuf;
use std::time::Duration;

/// Typed server configuration, read once at startup.
///
/// Every field has a default good enough for local development; production
/// overrides come from the environment (or a `.env` file via dotenvy).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Bind port (`PORT`, default `4000`).
    pub port: u16,
    /// Origins the browser client may call from (`CORS_ORIGINS`,
    /// comma-separated).
    pub cors_origins: Vec<String>,
    /// Whole-request deadline in seconds (`REQUEST_TIMEOUT_SECS`).
    ///
    /// Keep this above `generation.timeout_secs`: a slow render should hit
    /// the subprocess deadline (and return its structured error) before
    /// the HTTP layer cuts the request off.
    pub request_timeout_secs: u64,
    /// Content roots video files are served from (`VIDEO_DIRS`,
    /// comma-separated). Lookup walks them in order, first match wins.
    pub video_dirs: Vec<PathBuf>,
    /// Settings for the external rendering script.
    pub generation: GenerationSettings,
}

/// Settings for the generation invoker.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    /// Interpreter the rendering script runs under (`PYTHON_BIN`).
    pub python_bin: String,
    /// Path to the rendering script (`GENERATION_SCRIPT`).
    pub script_path: String,
    /// Wall-clock seconds a render may take before it is killed
    /// (`GENERATION_TIMEOUT_SECS`).
    pub timeout_secs: u64,
    /// How many renders may run at once (`MAX_CONCURRENT_GENERATIONS`).
    pub max_concurrent: usize,
}

impl GenerationSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.into())
}

/// Split a comma-separated env value, dropping empty entries.
fn env_list(name: &str, default: &str) -> Vec<String> {
    env_or(name, default)
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// | Env var                      | Default                 |
    /// |------------------------------|-------------------------|
    /// | `HOST`                       | `0.0.0.0`               |
    /// | `PORT`                       | `4000`                  |
    /// | `CORS_ORIGINS`               | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`       | `330`                   |
    /// | `VIDEO_DIRS`                 | `content/videos_dir`    |
    /// | `PYTHON_BIN`                 | `python3`               |
    /// | `GENERATION_SCRIPT`          | `manim/main.py`         |
    /// | `GENERATION_TIMEOUT_SECS`    | `300`                   |
    /// | `MAX_CONCURRENT_GENERATIONS` | `2`                     |
    ///
    /// Malformed numeric values abort startup rather than fall back
    /// silently.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "4000")
                .parse()
                .expect("PORT must be a valid port number"),
            cors_origins: env_list("CORS_ORIGINS", "http://localhost:5173"),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", "330")
                .parse()
                .expect("REQUEST_TIMEOUT_SECS must be a number of seconds"),
            video_dirs: env_list("VIDEO_DIRS", "content/videos_dir")
                .into_iter()
                .map(PathBuf::from)
                .collect(),
            generation: GenerationSettings {
                python_bin: env_or("PYTHON_BIN", "python3"),
                script_path: env_or("GENERATION_SCRIPT", "manim/main.py"),
                timeout_secs: env_or("GENERATION_TIMEOUT_SECS", "300")
                    .parse()
                    .expect("GENERATION_TIMEOUT_SECS must be a number of seconds"),
                max_concurrent: env_or("MAX_CONCURRENT_GENERATIONS", "2")
                    .parse()
                    .expect("MAX_CONCURRENT_GENERATIONS must be a positive integer"),
            },
        }
    }
}
