use anyhow::{Context, Result};
use hearth_api::HearthConfig;

pub fn render(config: &HearthConfig) -> Result<String> { toml::to_string_pretty(config).context("failed to render configuration") }
