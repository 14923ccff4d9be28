//! Render the page wired up to the motion-wasm runtime.
//!
//! Build the runtime first, then run this:
//!
//! ```text
//! wasm-pack build site/wasm --target web --out-dir ../../dist/motion
//! cargo run --example with_motion
//! ```
//!
//! The emitted `index.html` loads the runtime as a module script; serve
//! the directory with any static file server to see the animations.

use topnotch_landing::{render_page, MotionAssets, PageContext};

fn main() {
    let assets = MotionAssets {
        runtime_path: "./motion/motion_wasm.js".into(),
        ..Default::default()
    };
    let ctx = PageContext::default().with_assets(assets);

    let html = render_page(&ctx);

    let output_path = "index.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
    println!("Expects the runtime at ./motion/motion_wasm.js");
}
