use anyhow::{Result, anyhow};

pub fn encode(id: i64) -> String { hearth_slug::encode(id) }

pub fn decode(slug: &str) -> Result<u64> {
    hearth_slug::decode_str(slug).ok_or_else(|| anyhow!("`{slug}` is not a gallery slug"))
}
