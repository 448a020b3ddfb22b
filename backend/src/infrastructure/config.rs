use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Server settings.
///
/// Sources, later ones winning: built-in defaults, an optional
/// `course-server.{toml,json,yaml}` in the working directory, and
/// `COURSE_SERVER_*` environment variables (`COURSE_SERVER_BIND_ADDR`, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub bind_addr: String,
    pub video_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub log_filter: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::with_name("course-server").required(false))
            .add_source(Environment::with_prefix("COURSE_SERVER").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("bind_addr", "0.0.0.0:8080")?
            .set_default("video_dir", "data/videos")?
            .set_default("max_upload_bytes", 512_i64 * 1024 * 1024)?
            .set_default("log_filter", "course_server=info,tower_http=info")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn defaults_are_usable_on_their_own() {
        let cfg: AppConfig = AppConfig::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.bind_addr, "0.0.0.0:8080");
        assert_eq!(cfg.video_dir, PathBuf::from("data/videos"));
        assert_eq!(cfg.max_upload_bytes, 512 * 1024 * 1024);
    }

    #[test]
    fn file_source_overrides_defaults() {
        let cfg: AppConfig = AppConfig::defaults()
            .unwrap()
            .add_source(File::from_str(
                "bind_addr = \"127.0.0.1:9000\"\nvideo_dir = \"/srv/videos\"",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.bind_addr, "127.0.0.1:9000");
        assert_eq!(cfg.video_dir, PathBuf::from("/srv/videos"));
        assert_eq!(cfg.log_filter, "course_server=info,tower_http=info");
    }
}
