use tracing_subscriber::EnvFilter;

/// `RUST_LOG` で制御 (既定は warn)。盤面の表示と混ざらないよう stderr に出す
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
