#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod cursor;
mod logging;
mod motion;
mod profile;
mod scene;
mod theme;
mod ticker;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
mod server;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
