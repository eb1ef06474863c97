use anyhow::{Context, Result};
use linemark_config::Config;
use linemark_engine::{HtmlRenderer, Markdown};
use std::{
    env, fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};

fn usage(program: &str) {
    eprintln!("Usage: {program} [PATTERN...]");
    eprintln!("       {program} --init");
    eprintln!("Renders each matching file, or stdin when no pattern is given.");
    eprintln!("Options are read from {}", Config::config_path().display());
}

/// Writes a default config file unless one already exists.
fn init_config() -> Result<()> {
    let config_path = Config::config_path();
    if config_path.exists() {
        log::warn!("{} already exists", config_path.display());
        return Ok(());
    }
    Config::default().save()?;
    log::info!("Wrote default config to {}", config_path.display());
    Ok(())
}

/// Loads the config file, falling back to defaults when it is missing or
/// broken.
fn load_config() -> Config {
    match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            log::warn!("{e}; using defaults");
            Config::default()
        }
    }
}

/// Expands every argument as a glob pattern. Directories are skipped.
fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let mut matched = false;
        for entry in glob::glob(pattern).with_context(|| format!("Invalid pattern '{pattern}'"))? {
            let path = entry?;
            if path.is_file() {
                matched = true;
                files.push(path);
            }
        }
        if !matched {
            log::warn!("No files match '{pattern}'");
        }
    }
    Ok(files)
}

fn render_file(markdown: &mut Markdown, config: &Config, path: &Path) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let html = markdown.load_with_id(&text, path.display().to_string());

    match config.output_path(path) {
        Some(target) => {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, html)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            log::info!("Rendered {} to {}", path.display(), target.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        usage(&args[0]);
        return Ok(());
    }
    if args.len() == 2 && args[1] == "--init" {
        return init_config();
    }

    let config = load_config();
    let mut markdown = Markdown::with_options(HtmlRenderer, config.options.clone());

    if args.len() == 1 {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        io::stdout().write_all(markdown.load(&text).as_bytes())?;
        return Ok(());
    }

    let files = expand_patterns(&args[1..])?;
    if files.is_empty() {
        eprintln!("Error: no input files");
        usage(&args[0]);
        process::exit(1);
    }

    for path in &files {
        render_file(&mut markdown, &config, path)?;
    }
    Ok(())
}
