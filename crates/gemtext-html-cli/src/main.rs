use anyhow::{Context, Result};
use gemtext_html_config::Config;
use gemtext_html_engine::{RenderOptions, io, to_html_with};
use std::{
    env,
    io::{Write, stdout},
    path::Path,
};

const USAGE: &str = "gem converts files from Gemtext into HTML.\n\
                     Usage: gem [input gemtext file] [output HTML file]";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();
    log::debug!("Config path: {}", config_path.display());

    run(&args, &config_path, &mut stdout().lock());
}

/// Failures are reported on `out` as a single line; the process still exits cleanly.
fn run(args: &[String], config_path: &Path, out: &mut impl Write) {
    let message = match args {
        [_, input, output] => match convert_file(Path::new(input), Path::new(output), config_path)
        {
            Ok(()) => return,
            Err(e) => {
                log::error!("{e:#}");
                one_line(&format!("{e:#}"))
            }
        },
        _ => USAGE.to_string(),
    };

    if let Err(e) = writeln!(out, "{message}") {
        log::error!("Failed to write to stdout: {e}");
    }
}

// Parse errors carry multi-line snippets
fn one_line(message: &str) -> String {
    message.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn convert_file(input: &Path, output: &Path, config_path: &Path) -> Result<()> {
    let options = load_render_options(config_path)
        .with_context(|| format!("Failed to load config for {}", input.display()))?;

    log::info!("Converting {} to {}", input.display(), output.display());
    let gemtext = io::read_file(input)
        .with_context(|| format!("Failed to convert {}", input.display()))?;
    let html = to_html_with(&gemtext, &options);
    log::debug!(
        "Rendered {} bytes of gemtext into {} bytes of HTML",
        gemtext.len(),
        html.len()
    );

    io::write_file(output, &html)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}

fn load_render_options(config_path: &Path) -> Result<RenderOptions> {
    match Config::load_from_path(config_path)? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            Ok(config.render)
        }
        None => {
            log::debug!("No config file found, using default render options");
            Ok(RenderOptions::default())
        }
    }
}
