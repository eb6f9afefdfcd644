use clap::Parser;
use once_cell::sync::Lazy;

pub static APP_CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenvy::dotenv().ok();
    // Library crate: configured from env vars and defaults, never argv.
    Config::parse_from(["careerdisha-notify"])
});

#[derive(Debug, Parser)]
pub struct Config {
    #[clap(long, env, default_value = ".careerdisha")]
    pub notify_storage_dir: String,

    #[clap(long, env, default_value = "info")]
    pub log_level: String,
}
