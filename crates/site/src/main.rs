//! Entrypoint for the `site_app` browser build.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("site_app has no native UI; build it for wasm32 with the `csr` feature.");
}
