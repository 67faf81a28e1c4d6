//! # CLI Layer
//!
//! This module is **one possible UI client** for blogview; it is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the `tracing` subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API and loaded configuration
//! - `handle_*()`: Per-command handlers that call the API and print output

use super::render::{
    print_messages, render_config, render_post_detail, render_post_list, render_tags,
};
use super::setup::{Cli, Commands};
use blogview::api::{BlogApi, ConfigAction, ListQuery};
use blogview::commands::list::NO_MATCHES;
use blogview::config::{self, BlogConfig, API_URL_ENV};
use blogview::enrich::Enricher;
use blogview::error::Result;
use blogview::source::http::HttpSource;
use blogview::store::BlogStore;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: BlogApi<HttpSource>,
    preview_length: usize,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search, tag }) => handle_list(&mut ctx, search, tag),
        Some(Commands::View { selector }) => handle_view(&mut ctx, &selector),
        Some(Commands::Tags) => handle_tags(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None, None),
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config::config_dir()?;
    let config = BlogConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!(path = %config_dir.display(), error = %e, "ignoring unreadable config");
        BlogConfig::default()
    });

    let env_url = std::env::var(API_URL_ENV).ok();
    let api_url = config::resolve_api_url(cli.api_url.as_deref(), env_url.as_deref(), &config);
    debug!(%api_url, config_dir = %config_dir.display(), "initialising client");

    let enricher = Enricher::new().with_words_per_minute(config.words_per_minute);
    let store = BlogStore::with_enricher(HttpSource::new(&api_url), enricher);

    Ok(AppContext {
        api: BlogApi::new(store, config_dir),
        preview_length: config.preview_length,
        use_color: !cli.no_color && console::colors_enabled(),
    })
}

fn handle_list(ctx: &mut AppContext, search: Option<String>, tag: Option<String>) -> Result<()> {
    let result = ctx.api.list_posts(ListQuery { search, tag })?;
    if !result.listed_posts.is_empty() {
        print!(
            "{}",
            render_post_list(
                &result.listed_posts,
                NO_MATCHES,
                ctx.preview_length,
                ctx.use_color
            )
        );
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let result = ctx.api.view_post(selector)?;
    let output = render_post_detail(&result.listed_posts, ctx.use_color);
    print!("{}", output);
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_tags(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_tags()?;
    print!(
        "{}",
        render_tags(&result.tags, result.selected_tag.as_deref(), ctx.use_color)
    );
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, ctx.use_color));
        }
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}
