use anyhow::{Result, bail};
use hearth_api::{ApiClient, HearthConfig, HttpClient, Property};
use hearth_scroll::InfiniteScroll;
use tracing::info;

/// Walk the properties resource one page at a time and print each listing.
pub async fn properties<C: HttpClient>(
    client: &ApiClient<C>,
    config: &HearthConfig,
    pages: u32,
    limit: Option<u32>,
) -> Result<()> {
    let mut options = config.scroll;
    if let Some(limit) = limit {
        options = options.limit(limit);
    }
    let scroll = InfiniteScroll::new(client.properties(), options);

    for _ in 0..pages {
        if !scroll.load_more().await {
            break;
        }
        if let Some(err) = scroll.error() {
            bail!("failed to load page {}: {err}", scroll.page());
        }
    }

    scroll.with_items(|items| {
        for property in items {
            println!("{}", summary(property));
        }
    });
    info!(shown = scroll.len(), more = scroll.has_more(), "listing done");
    Ok(())
}

pub async fn property<C: HttpClient>(client: &ApiClient<C>, slug: &str) -> Result<()> {
    match client.property_by_slug(slug).await? {
        Some(property) => {
            println!("{}", summary(&property));
            println!("  {}", property.address);
            if let Some(ref description) = property.description {
                println!("  {description}");
            }
            Ok(())
        }
        None => bail!("no property behind slug `{slug}`"),
    }
}

fn summary(property: &Property) -> String {
    format!("{:<10} {:<14} {}  {}", property.gallery_path(), property.price.to_string(), property.title, property.address.city)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_includes_gallery_path() {
        let property: Property = serde_json::from_value(serde_json::json!({
            "id": 29,
            "title": "Casa com quintal",
            "kind": "house",
            "price": { "amount": 680000, "currency": "BRL" },
            "address": { "city": "Florianópolis" }
        }))
        .unwrap();

        let line = summary(&property);
        assert!(line.starts_with("/gallery/qf7yrw"));
        assert!(line.contains("BRL 680000.00"));
        assert!(line.ends_with("Casa com quintal  Florianópolis"));
    }
}
