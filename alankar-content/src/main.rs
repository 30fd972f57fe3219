use alankar_client::ClientConfig;
use alankar_content::{ContentFamily, ContentService, setup_environment};
use serde_json::{Map, Value, json};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. dotenv + logging
    let config = setup_environment()?;

    // 2. optional family selector
    let families = match std::env::args().nth(1) {
        Some(arg) => vec![arg.parse::<ContentFamily>()?],
        None => ContentFamily::ALL.to_vec(),
    };

    // 3. service over the configured source
    let service = ContentService::from_config(&ClientConfig::from_env(), &config)?;
    tracing::info!(
        configured = service.is_configured(),
        environment = %config.environment,
        "Resolving content"
    );

    let mut content = Map::new();
    let mut provenance = Map::new();
    for family in families {
        let data = resolve(&service, family).await?;
        content.insert(family.to_string(), data);
        provenance.insert(
            family.to_string(),
            serde_json::to_value(service.provenance(family).await)?,
        );
    }
    content.insert("provenance".into(), Value::Object(provenance));

    println!("{}", serde_json::to_string_pretty(&Value::Object(content))?);
    Ok(())
}

async fn resolve(service: &ContentService, family: ContentFamily) -> serde_json::Result<Value> {
    match family {
        ContentFamily::Menu => {
            let menu = service.menu_data().await;
            Ok(json!({
                "categories": menu.categories,
                "signatureDishes": service.signature_dishes().await,
                "latestDishes": service.latest_dishes().await,
            }))
        }
        ContentFamily::Ambiance => serde_json::to_value(&service.ambiance_data().await.groups),
        ContentFamily::Locations => serde_json::to_value(&*service.locations_data().await),
        ContentFamily::Testimonials => serde_json::to_value(&*service.testimonials_data().await),
        ContentFamily::ContactInfo => serde_json::to_value(&*service.contact_info_data().await),
    }
}
