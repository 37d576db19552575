/// Installs the global fmt subscriber
///
/// Safe to call more than once; only the first call installs anything,
/// so every test binary can call it from its setup.
pub fn init_tracing() {
    if tracing_subscriber::fmt().try_init().is_ok() {
        tracing::debug!("tracing initialized");
    }
}
