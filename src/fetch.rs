//! Page fetch capability: navigate to a URL, query element text, read the
//! page markup.
//!
//! Two engines implement [`PageSession`]: a plain HTTP fetch (ureq) and a
//! JavaScript renderer (Playwright via a Node subprocess). Sessions are
//! one-per-request and never shared between concurrent analyses; the
//! orchestrator closes them exactly once on every exit path.

use std::process::Command;
use std::time::Duration;

use crate::config::Config;
use crate::error::{PagesenseError, Result};
use crate::extract::select_texts;

/// User-Agent sent with plain HTTP fetches
const USER_AGENT: &str = "Mozilla/5.0 (compatible; pagesense/0.1)";

/// A browser-like session over one page.
///
/// `navigate` must be called before the query methods. `close` releases
/// whatever the session holds and must be invoked exactly once.
pub trait PageSession {
    /// Navigate to a URL and load its content
    fn navigate(&mut self, url: &str) -> Result<()>;

    /// Text of every element matching a CSS selector, whitespace-normalized
    fn element_texts(&self, selector: &str) -> Result<Vec<String>>;

    /// Raw HTML of the loaded page
    fn page_markup(&self) -> Result<String>;

    /// Release the session. Called exactly once, on every exit path.
    fn close(&mut self);
}

/// Which fetch engine to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Http,
    Rendered,
}

/// Open a fresh session for one analysis request
pub fn open_session(engine: Engine, config: &Config) -> Box<dyn PageSession> {
    match engine {
        Engine::Http => Box::new(HttpSession::new(config.timeout_secs)),
        Engine::Rendered => Box::new(RenderSession::new(config.timeout_secs, config.settle_ms)),
    }
}

/// Plain HTTP session. Markup is whatever the server returns; no scripts run,
/// so there is no settle delay to wait out.
pub struct HttpSession {
    agent: ureq::Agent,
    html: Option<String>,
}

impl HttpSession {
    pub fn new(timeout_secs: u64) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(timeout_secs)))
            .build()
            .into();
        Self { agent, html: None }
    }

    fn loaded_html(&self) -> Result<&str> {
        self.html
            .as_deref()
            .ok_or_else(|| PagesenseError::SessionError("no page loaded - navigate first".into()))
    }
}

impl PageSession for HttpSession {
    fn navigate(&mut self, url: &str) -> Result<()> {
        let response = self
            .agent
            .get(url)
            .header("User-Agent", USER_AGENT)
            .call()?;
        self.html = Some(response.into_body().read_to_string()?);
        Ok(())
    }

    fn element_texts(&self, selector: &str) -> Result<Vec<String>> {
        select_texts(self.loaded_html()?, selector)
    }

    fn page_markup(&self) -> Result<String> {
        Ok(self.loaded_html()?.to_string())
    }

    fn close(&mut self) {
        // Nothing held open beyond the agent's pooled connections
        self.html = None;
    }
}

/// Rendered session: loads the page in headless Chromium through a Node
/// subprocess, waits a fixed settle delay for dynamic content, then captures
/// the final markup.
pub struct RenderSession {
    timeout_secs: u64,
    settle_ms: u64,
    html: Option<String>,
}

impl RenderSession {
    pub fn new(timeout_secs: u64, settle_ms: u64) -> Self {
        Self {
            timeout_secs,
            settle_ms,
            html: None,
        }
    }

    fn loaded_html(&self) -> Result<&str> {
        self.html
            .as_deref()
            .ok_or_else(|| PagesenseError::SessionError("no page loaded - navigate first".into()))
    }
}

impl PageSession for RenderSession {
    fn navigate(&mut self, url: &str) -> Result<()> {
        let data_dir = Config::data_dir()?;
        let script_path = data_dir.join("render.mjs");

        if !script_path.exists() {
            ensure_render_script()?;
        }

        // Run from the data directory so Node.js can find local node_modules
        let output = Command::new("node")
            .arg(&script_path)
            .arg(url)
            .arg((self.timeout_secs * 1000).to_string())
            .arg(self.settle_ms.to_string())
            .current_dir(&data_dir)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // The script reports failures as JSON on stderr
            if let Ok(err) = serde_json::from_str::<serde_json::Value>(&stderr) {
                let msg = err["error"].as_str().unwrap_or("unknown error");
                return Err(PagesenseError::RenderError(msg.to_string()));
            }
            return Err(PagesenseError::RenderError(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let result: serde_json::Value = serde_json::from_str(&stdout)?;

        self.html = Some(result["html"].as_str().unwrap_or("").to_string());
        Ok(())
    }

    fn element_texts(&self, selector: &str) -> Result<Vec<String>> {
        select_texts(self.loaded_html()?, selector)
    }

    fn page_markup(&self) -> Result<String> {
        Ok(self.loaded_html()?.to_string())
    }

    fn close(&mut self) {
        // The subprocess exits after capture; nothing stays open
        self.html = None;
    }
}

/// Headless render script. Navigates, waits the settle delay, and prints the
/// final page state as JSON on stdout (errors as JSON on stderr).
const RENDER_SCRIPT: &str = r#"import { chromium } from "playwright";

const [url, timeoutMs, settleMs] = process.argv.slice(2);

let browser;
try {
  browser = await chromium.launch({ headless: true });
  const page = await browser.newPage();
  await page.goto(url, { timeout: Number(timeoutMs), waitUntil: "domcontentloaded" });
  await page.waitForTimeout(Number(settleMs));
  const html = await page.content();
  const title = await page.title();
  console.log(JSON.stringify({ url: page.url(), title, html }));
} catch (err) {
  console.error(JSON.stringify({ error: String((err && err.message) || err) }));
  process.exitCode = 1;
} finally {
  if (browser) await browser.close();
}
"#;

/// Ensure the render script exists in the data directory
pub fn ensure_render_script() -> Result<()> {
    let script_path = Config::data_dir()?.join("render.mjs");
    if let Some(parent) = script_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&script_path, RENDER_SCRIPT)?;
    Ok(())
}

/// Status of the JavaScript renderer installation
#[derive(Debug, Clone, PartialEq)]
pub enum RendererStatus {
    Ready,
    NodeMissing,
    PlaywrightMissing,
    BrowserMissing,
}

impl RendererStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, RendererStatus::Ready)
    }

    pub fn install_instructions(&self) -> &'static str {
        match self {
            RendererStatus::Ready => "Renderer is ready",
            RendererStatus::NodeMissing => "Install Node.js: https://nodejs.org/",
            RendererStatus::PlaywrightMissing => "Run: npm install -g playwright",
            RendererStatus::BrowserMissing => "Run: npx playwright install chromium",
        }
    }
}

/// Check whether the JavaScript renderer can run
pub fn check_renderer() -> RendererStatus {
    let node_available = Command::new("node")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);

    if !node_available {
        return RendererStatus::NodeMissing;
    }

    let playwright_available = Command::new("npx")
        .args(["playwright", "--version"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);

    if !playwright_available {
        return RendererStatus::PlaywrightMissing;
    }

    for path in browser_cache_paths() {
        if std::path::Path::new(&path).exists() {
            return RendererStatus::Ready;
        }
    }

    RendererStatus::BrowserMissing
}

/// Possible Playwright browser cache paths
fn browser_cache_paths() -> Vec<String> {
    let home = std::env::var("HOME").unwrap_or_default();

    vec![
        // Linux
        format!("{}/.cache/ms-playwright", home),
        // macOS
        format!("{}/Library/Caches/ms-playwright", home),
    ]
}
