use log::LevelFilter;

const LOG_TARGET: &str = env!("CARGO_CRATE_NAME");

pub fn init(level: LevelFilter) {
    let default_filter = format!("{LOG_TARGET}={}", level.as_str().to_ascii_lowercase());

    let result = if std::env::var_os("RUST_LOG").is_some() {
        env_logger::try_init()
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
            .try_init()
    };

    if let Err(error) = result {
        eprintln!("logger already initialized: {error}");
    }
}
