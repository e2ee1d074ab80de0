use super::context::AppContext;
use super::prompts;
use crate::output::{new_table, Output};
use cineverse_config::{Config, CredentialStore, API_KEY_ENV};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use owo_colors::OwoColorize;
use serde_json::json;

pub fn show_config(ctx: &AppContext, output: &Output) -> Result<()> {
    let config_file = ctx.paths.config_file();
    let config = &ctx.config;
    let api_key = load_credentials(ctx)?.resolve_catalog_api_key();
    let storage_dir = config.storage_dir(&ctx.paths);

    if !output.is_human() {
        output.data(&json!({
            "configFile": config_file.display().to_string(),
            "configFileExists": config_file.exists(),
            "storageDir": storage_dir.display().to_string(),
            "apiKeyConfigured": api_key.is_some(),
            "config": config,
        }));
        return Ok(());
    }

    if output.is_quiet() {
        return Ok(());
    }

    println!("\n{}", "Configuration".bright_cyan().bold());
    if !config_file.exists() {
        output.warn(format!(
            "No configuration file at {}, using defaults. Create one with: cineverse config init",
            config_file.display()
        ));
    }

    let mut table = new_table(["Setting", "Value"]);
    let rows = [
        ("Config file", config_file.display().to_string()),
        ("Catalog URL", config.catalog.base_url.clone()),
        ("Timeout", format!("{}s", config.catalog.timeout_seconds)),
        ("User agent", config.catalog.user_agent.clone()),
        (
            "API key",
            api_key.as_deref().map(mask_string).unwrap_or_else(|| "<not set>".to_string()),
        ),
        ("Storage", storage_dir.display().to_string()),
        ("Share URL", config.share.base_url.clone()),
        ("App name", config.share.app_name.clone()),
        (
            "Log file",
            config
                .logging
                .file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| format!("<stderr> (e.g. {})", ctx.paths.default_log_file().display())),
        ),
    ];
    for (setting, value) in rows {
        table.add_row(vec![setting.to_string(), value]);
    }
    output.table(&table);
    Ok(())
}

pub fn set_api_key(ctx: &AppContext, key: Option<String>, output: &Output) -> Result<()> {
    let key = match key {
        Some(key) => key,
        None => prompts::prompt_password("Catalog API key")?,
    };
    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(eyre!("API key cannot be empty"));
    }

    let mut store = load_credentials(ctx)?;
    store.set_catalog_api_key(key);
    store
        .save()
        .map_err(|e| eyre!("Failed to save credentials: {}", e))?;

    output.success(format!("API key saved to {}", ctx.paths.credentials_file().display()));
    if std::env::var(API_KEY_ENV).is_ok_and(|v| !v.trim().is_empty()) {
        output.warn(format!("{} is set and takes precedence over the stored key", API_KEY_ENV));
    }
    Ok(())
}

pub fn clear_api_key(ctx: &AppContext, output: &Output) -> Result<()> {
    let mut store = load_credentials(ctx)?;
    if !store.remove_catalog_api_key() {
        output.info("No stored API key to remove");
        return Ok(());
    }
    store
        .save()
        .map_err(|e| eyre!("Failed to save credentials: {}", e))?;
    output.success("Stored API key removed");
    Ok(())
}

pub fn init_config(ctx: &AppContext, force: bool, output: &Output) -> Result<()> {
    let config_file = ctx.paths.config_file();
    if config_file.exists() && !force {
        output.warn(format!(
            "Configuration already exists at {}. Use --force to overwrite",
            config_file.display()
        ));
        return Ok(());
    }

    ctx.paths
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create directories: {}", e))?;
    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to write {}: {}", config_file.display(), e))?;

    output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}

fn load_credentials(ctx: &AppContext) -> Result<CredentialStore> {
    let mut store = CredentialStore::new(ctx.paths.credentials_file());
    store
        .load()
        .map_err(|e| eyre!("Failed to read credentials: {}", e))?;
    Ok(store)
}

fn mask_string(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}
