//! CSS for the landing page.
//!
//! One inline constant keeps the rendered document self-contained: no
//! external stylesheet requests, no build-time CSS tooling.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use topnotch_landing::styles::PAGE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```

/// Complete CSS for the page - light slate/sky theme.
///
/// Elements carrying a `data-animate` descriptor get their initial and
/// transition styles from the motion runtime at load time, not from here;
/// without the runtime everything below renders at full opacity.
pub const PAGE_CSS: &str = r#"
:root {
    --slate-900: #0f172a;
    --slate-800: #1e293b;
    --slate-600: #475569;
    --slate-500: #64748b;
    --slate-300: #cbd5e1;
    --slate-200: #e2e8f0;
    --slate-100: #f1f5f9;
    --slate-50: #f8fafc;
    --sky-900: #0c4a6e;
    --sky-500: #0ea5e9;
    --sky-100: #e0f2fe;
    --yellow-300: #fde047;
    --radius-card: 1rem;
    --radius-panel: 1.5rem;
    --container-max: 72rem;
    --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--slate-900);
    background: var(--slate-100);
    line-height: 1.5;
}

.page {
    position: relative;
    min-height: 100vh;
}

.page-backdrop {
    position: absolute;
    inset: 0 0 auto 0;
    height: 420px;
    z-index: -1;
    background: linear-gradient(to bottom, rgba(186, 230, 253, 0.7), var(--slate-100), transparent);
}

/* ---- header ---- */

.site-header {
    border-bottom: 1px solid var(--slate-200);
    background: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(8px);
}

.header-inner {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 1.25rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.brand {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    color: var(--slate-900);
    text-decoration: none;
    font-weight: 600;
    font-size: 1.125rem;
}

.brand-mark {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 9999px;
    background: var(--slate-900);
    color: #fff;
}

.header-nav {
    display: flex;
    align-items: center;
    gap: 2rem;
    font-size: 0.875rem;
    font-weight: 500;
}

.nav-link {
    position: relative;
    color: var(--slate-600);
    text-decoration: none;
    transition: color 0.2s;
}

.nav-link:hover {
    color: var(--slate-900);
}

.nav-link-active {
    color: var(--slate-900);
}

.nav-link-active::after {
    content: "";
    position: absolute;
    left: 0;
    bottom: -0.5rem;
    height: 2px;
    width: 100%;
    background: #38bdf8;
}

/* ---- primitives ---- */

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    border: none;
    border-radius: 9999px;
    font-family: inherit;
    font-weight: 600;
    cursor: pointer;
    transition: background 0.2s, color 0.2s, border-color 0.2s;
}

.btn-filled {
    background: var(--slate-900);
    color: #fff;
}

.btn-filled:hover {
    background: var(--slate-800);
}

.btn-outline {
    background: transparent;
    color: var(--slate-900);
    border: 1px solid var(--slate-300);
}

.btn-outline:hover {
    border-color: var(--slate-500);
}

.btn-ghost {
    background: transparent;
    color: #0284c7;
    padding: 0;
}

.btn-ghost:hover {
    color: #0369a1;
}

.btn-sm { padding: 0.5rem 1.25rem; font-size: 0.8125rem; }
.btn-md { padding: 0.625rem 1.5rem; font-size: 0.875rem; }
.btn-lg { padding: 0.75rem 2rem; font-size: 0.875rem; }
.btn-block { width: 100%; justify-content: space-between; }

.card {
    background: #fff;
    border: 1px solid var(--slate-200);
    border-radius: var(--radius-card);
    overflow: hidden;
}

.card-header { padding: 1.25rem 1.25rem 1rem; display: grid; gap: 0.5rem; }
.card-title { margin: 0; font-size: 1.125rem; font-weight: 600; color: var(--slate-900); }
.card-description { margin: 0; font-size: 0.875rem; color: var(--slate-600); }
.card-content { padding: 0 1.25rem 1.25rem; display: grid; gap: 0.75rem; }

.badge {
    display: inline-block;
    width: fit-content;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    background: var(--sky-100);
    color: var(--slate-900);
    font-size: 0.75rem;
    font-weight: 600;
}

.badge-hero {
    background: rgba(255, 255, 255, 0.2);
    color: #fff;
}

.avatar {
    position: relative;
    display: inline-block;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 9999px;
    overflow: hidden;
    background: var(--slate-200);
    flex-shrink: 0;
}

.avatar-fallback {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 0.8125rem;
    font-weight: 600;
    color: var(--slate-600);
}

.avatar-image {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.separator {
    height: 1px;
    width: 100%;
    background: var(--slate-200);
}

.separator-vertical {
    height: 2rem;
    width: 1px;
}

.figure { display: block; }

.figure-fill {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.star-rating {
    display: inline-flex;
    align-items: center;
    gap: 0.25rem;
    color: var(--yellow-300);
}

.star { display: inline-flex; }

/* ---- sections ---- */

.page-main {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 4rem 1.5rem;
    display: grid;
    gap: 5rem;
}

.section-header { display: grid; gap: 0.75rem; max-width: 48rem; }
.section-title { margin: 0; font-size: 2rem; font-weight: 600; color: var(--slate-900); }
.section-copy { margin: 0; font-size: 1rem; color: var(--slate-600); }

.card-grid {
    display: grid;
    gap: 1.5rem;
    grid-template-columns: repeat(3, minmax(0, 1fr));
}

.hero {
    position: relative;
    overflow: hidden;
    border-radius: var(--radius-panel);
    padding: 2.5rem;
    color: #fff;
    background: linear-gradient(135deg, var(--slate-900), var(--slate-800), var(--sky-900));
    box-shadow: 0 25px 50px -12px rgba(15, 23, 42, 0.4);
}

.hero-glow {
    position: absolute;
    right: 2.5rem;
    top: 2.5rem;
    width: 10rem;
    height: 10rem;
    border-radius: 9999px;
    background: rgba(56, 189, 248, 0.4);
    filter: blur(64px);
}

.hero-grid {
    display: grid;
    gap: 3rem;
    grid-template-columns: 1.1fr 0.9fr;
}

.hero-copy { display: grid; gap: 2rem; align-content: start; }
.hero-title { margin: 0; font-size: 3.25rem; font-weight: 600; letter-spacing: -0.02em; }
.hero-subtitle { margin: 0; max-width: 36rem; color: var(--sky-100); font-size: 1.125rem; }
.hero-actions { display: flex; align-items: center; gap: 1rem; flex-wrap: wrap; }
.hero-reviews { display: flex; align-items: center; gap: 0.75rem; font-size: 0.875rem; color: var(--sky-100); }
.reviews-count { margin: 0; font-weight: 500; color: #fff; }
.reviews-note { margin: 0; font-size: 0.75rem; color: rgba(224, 242, 254, 0.8); }

.hero-media { position: relative; min-height: 380px; }

.hero-photo {
    position: absolute;
    inset: 0;
    overflow: hidden;
    border-radius: var(--radius-panel);
    border: 1px solid rgba(255, 255, 255, 0.15);
    background: rgba(255, 255, 255, 0.05);
}

.hero-float-card {
    position: absolute;
    right: 1.5rem;
    top: 2rem;
    width: 16rem;
    color: var(--slate-900);
    border-color: rgba(255, 255, 255, 0.4);
    background: rgba(255, 255, 255, 0.85);
    backdrop-filter: blur(8px);
}

.float-card-rating {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 0.875rem;
    color: var(--slate-600);
}

.trust, .value {
    display: grid;
    gap: 3rem;
    grid-template-columns: 1.1fr 0.9fr;
    border-radius: var(--radius-panel);
    background: #fff;
    padding: 2.5rem;
    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
}

.trust-copy, .value-copy { display: grid; gap: 1.5rem; align-content: start; }
.trust-proof { display: flex; align-items: center; gap: 1.5rem; flex-wrap: wrap; font-size: 0.875rem; color: var(--slate-600); }
.trust-rating, .trust-licensed { display: flex; align-items: center; gap: 0.5rem; }
.trust-licensed svg { color: var(--sky-500); }
.trust-gallery { display: grid; gap: 1.5rem; grid-template-columns: repeat(2, minmax(0, 1fr)); }
.trust-card .card-content { padding-top: 1rem; font-size: 0.875rem; color: var(--slate-600); }
.trust-card-muted { background: var(--slate-50); }
.trust-photo { position: relative; height: 13rem; }

.solutions, .blog { display: grid; gap: 2rem; }

.solution-photo { position: relative; height: 14rem; }

.solution-chip {
    position: absolute;
    right: 1rem;
    top: 1rem;
    display: flex;
    align-items: center;
    justify-content: center;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.9);
    color: var(--slate-900);
    box-shadow: 0 1px 3px rgba(15, 23, 42, 0.2);
}

.blog-photo { position: relative; height: 12rem; }
.blog-meta { display: flex; justify-content: space-between; font-size: 0.75rem; color: var(--slate-500); }
.blog-footer { text-align: center; }

.stats {
    display: grid;
    gap: 1.5rem;
    grid-template-columns: repeat(3, minmax(0, 1fr));
    border-radius: var(--radius-panel);
    background: #fff;
    padding: 2.5rem;
    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
}

.stat-card { background: var(--slate-50); }
.stat-card .card-title { font-size: 2.25rem; }

.value-list { margin: 0; padding: 0; list-style: none; display: grid; gap: 0.75rem; font-size: 0.875rem; color: var(--slate-600); }
.value-item { display: flex; align-items: flex-start; gap: 0.75rem; }
.value-item svg { color: var(--sky-500); flex-shrink: 0; margin-top: 0.125rem; }
.value-media { display: grid; gap: 1.5rem; }
.value-photo { position: relative; height: 14rem; overflow: hidden; border-radius: var(--radius-panel); }

.warranty-card {
    display: flex;
    align-items: center;
    gap: 1rem;
    padding: 1.5rem;
    background: var(--slate-50);
}

.warranty-photo img { border-radius: 9999px; object-fit: cover; }
.warranty-title { margin: 0; font-size: 0.875rem; font-weight: 600; color: var(--slate-900); }
.warranty-copy { margin: 0; font-size: 0.875rem; color: var(--slate-600); }

.testimonials { display: grid; gap: 1.5rem; }
.testimonial-card .card-content { padding-top: 1.5rem; gap: 1.25rem; }
.testimonial-quote { margin: 0; font-size: 0.875rem; color: var(--slate-600); }
.testimonial-person { display: flex; align-items: center; gap: 1rem; }
.testimonial-name { margin: 0; font-size: 0.875rem; font-weight: 600; color: var(--slate-900); }
.testimonial-role { margin: 0; font-size: 0.875rem; color: var(--slate-500); }

.contact {
    position: relative;
    overflow: hidden;
    border-radius: var(--radius-panel);
    background: var(--sky-100);
    padding: 2.5rem;
}

.contact-glow {
    position: absolute;
    left: 2.5rem;
    top: 2.5rem;
    width: 8rem;
    height: 8rem;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.6);
    filter: blur(40px);
}

.contact-grid {
    position: relative;
    display: grid;
    gap: 2rem;
    grid-template-columns: 1.1fr 0.9fr;
}

.contact-copy { display: grid; gap: 1rem; }

.contact-pill {
    display: inline-flex;
    width: fit-content;
    border-radius: 9999px;
    background: #fff;
    padding: 1rem 1.5rem;
    box-shadow: 0 10px 15px -3px rgba(15, 23, 42, 0.1);
}

.contact-pill-title { margin: 0; font-size: 0.875rem; font-weight: 600; color: var(--slate-900); }
.contact-pill-copy { margin: 0; font-size: 0.75rem; color: var(--slate-500); }
.contact-actions { display: flex; align-items: center; justify-content: flex-end; gap: 1rem; flex-wrap: wrap; }

.site-footer {
    color: var(--slate-200);
    background: linear-gradient(135deg, var(--slate-900), var(--slate-900), var(--slate-800));
}

.footer-inner {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 4rem 1.5rem;
    display: grid;
    gap: 1.5rem;
}

.footer-top { display: flex; align-items: center; justify-content: space-between; gap: 1rem; flex-wrap: wrap; }
.footer-title { margin: 0 0 0.5rem; font-size: 1.5rem; font-weight: 600; color: #fff; }
.footer-copy { margin: 0; max-width: 36rem; font-size: 0.875rem; color: var(--slate-300); }
.footer-cta { background: #fff; color: var(--slate-900); }
.site-footer .separator { background: var(--slate-800); }
.footer-bottom { display: flex; align-items: center; justify-content: space-between; gap: 1rem; flex-wrap: wrap; font-size: 0.875rem; color: #94a3b8; }
.footer-legal { margin: 0; }
.footer-links { display: flex; gap: 1.5rem; }
.footer-link { color: inherit; text-decoration: none; }
.footer-link:hover { color: #fff; }

/* ---- responsive ---- */

@media (max-width: 900px) {
    .hero-grid, .trust-grid, .contact-grid, .trust, .value { grid-template-columns: 1fr; }
    .card-grid, .stats { grid-template-columns: 1fr; }
    .header-nav { display: none; }
    .hero-title { font-size: 2.25rem; }
}
"#;
