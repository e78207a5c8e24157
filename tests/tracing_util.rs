use tracing_subscriber::EnvFilter;

/// Installs a thread-default subscriber for the duration of a test so
/// dispatch logging is captured (and visible with `--nocapture`).
pub struct TestTracing {
    _guard: tracing::subscriber::DefaultGuard,
}

impl TestTracing {
    pub fn init() -> Self {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        Self { _guard: guard }
    }
}
