//! Render the landing page to a static HTML file.
//!
//! Run with: `cargo run --example render_page`

use topnotch_landing::{render_page, PageContext};

fn main() {
    // Default context: current year, no animation runtime. The motion
    // descriptors are still in the markup, they just stay inert.
    let html = render_page(&PageContext::default());

    let output_path = "index.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
