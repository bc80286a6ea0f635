//! Environment diagnostics

use pagesense::config::Config;
use pagesense::error::Result;
use pagesense::fetch::{check_renderer, RendererStatus};

pub fn cmd_doctor() -> Result<()> {
    println!("\npagesense doctor\n");

    println!("  pagesense binary: v{}", env!("CARGO_PKG_VERSION"));

    let node = std::process::Command::new("node").arg("--version").output();
    match node {
        Ok(o) if o.status.success() => {
            let v = String::from_utf8_lossy(&o.stdout);
            println!("  Node.js: {}", v.trim());
        }
        _ => println!("  Node.js: NOT INSTALLED (only needed for --js)"),
    }

    match check_renderer() {
        RendererStatus::Ready => println!("  Renderer: ready"),
        status => println!("  Renderer: not ready - {}", status.install_instructions()),
    }

    let config_path = Config::config_path()?;
    let state = if config_path.exists() { "" } else { " (not present, using defaults)" };
    println!("  Config: {}{}", config_path.display(), state);

    println!();
    Ok(())
}
