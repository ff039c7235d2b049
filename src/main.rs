#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    donut_runner::run()
}

// The browser build starts from `wasm_start` in the library
#[cfg(target_arch = "wasm32")]
fn main() {}
