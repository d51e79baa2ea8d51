use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a `WARN`-level subscriber once per test binary.
///
/// Override with `RUST_LOG` (e.g. `RUST_LOG=meshgraph=debug`).
pub fn init_tracing() {
    INIT.call_once(|| {
        let env_filter = tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    });
}
