#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod pages;
mod relay;
mod theme;

use std::sync::OnceLock;

use anyhow::Context;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::{ContentStore, SiteConfig};
use tracing_subscriber::EnvFilter;

/// Optional JSON override for the site configuration, embedded at build time
const SITE_CONFIG_JSON: &str = include_str!("../site.json");

/// Browser build of the email relay widget
const EMAILJS_SRC: &str = "https://cdn.jsdelivr.net/npm/@emailjs/browser@4/dist/email.min.js";

static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();
static EMPTY_STORE: ContentStore = ContentStore::empty();

/// Site configuration (embedded override on top of defaults)
pub fn site_config() -> &'static SiteConfig {
    SITE_CONFIG.get_or_init(|| {
        SiteConfig::from_json(SITE_CONFIG_JSON).unwrap_or_else(|e| {
            tracing::error!("Ignoring invalid site.json: {}", e);
            SiteConfig::default()
        })
    })
}

/// Page content; an unloadable store leaves the data-driven sections empty
pub fn content_store() -> &'static ContentStore {
    ContentStore::global().unwrap_or(&EMPTY_STORE)
}

fn load_content() -> anyhow::Result<()> {
    ContentStore::global().context("failed to load embedded content")?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = load_content() {
        tracing::error!("{:#}", e);
    }
    let site = site_config();
    tracing::info!(
        service = %site.relay.service_id,
        template = %site.relay.template_id,
        "Starting portfolio"
    );

    // The relay widget must be on the page before the first submission
    let config = Config::new()
        .with_custom_head(format!(r#"<script src="{EMAILJS_SRC}"></script>"#))
        .with_window(
            WindowBuilder::new()
                .with_title("Portfolio")
                .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
