//! The one-shot `search` subcommand.

use anyhow::Context;

use gottago_core::{build_search_query, AppConfig, ReferencePoint};
use gottago_geocode::GeocodeClient;
use gottago_session::{category_insight, urgency_insight, SearchSession};
use gottago_yelp::YelpClient;

use crate::render;
use crate::SearchArgs;

pub(crate) async fn run(config: &AppConfig, args: &SearchArgs) -> anyhow::Result<()> {
    let Some(point) = resolve_reference_point(config, args).await? else {
        return Ok(());
    };

    let mut session = SearchSession::new();
    session.set_reference_point(point);
    session.set_radius_km(args.radius_km);

    println!("{}", urgency_insight(args.urgency));
    println!("{}", category_insight(args.category));

    let client = yelp_client(config)?;
    let query = build_search_query(args.category, args.urgency);
    let request = session.request(query)?;
    let response = client.chat(&request).await.context("upstream search failed")?;
    session.absorb(args.category, &response);

    render::print_places(args.category, session.places(args.category));
    Ok(())
}

pub(crate) fn yelp_client(config: &AppConfig) -> anyhow::Result<YelpClient> {
    let key = config
        .yelp_api_key
        .as_deref()
        .context("YELP_API_KEY is not set; add it to your environment or .env")?;
    Ok(YelpClient::with_base_url(
        key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.yelp_base_url,
    )?)
}

/// Resolves the search center from explicit coordinates or a geocoded
/// address. Geocoding misses are a printed status line, not a failure.
pub(crate) async fn resolve_reference_point(
    config: &AppConfig,
    args: &SearchArgs,
) -> anyhow::Result<Option<ReferencePoint>> {
    if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
        return Ok(Some(ReferencePoint::new(lat, lng, "Your location")));
    }

    let Some(location) = args.location.as_deref() else {
        anyhow::bail!("set a search center with --location or --lat/--lng");
    };

    let geocoder = GeocodeClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.geocode_base_url,
    )?;

    match geocoder.search(location).await {
        Ok(Some(found)) => {
            println!("Using: {}", found.display_name);
            Ok(Some(ReferencePoint::new(
                found.coordinates.latitude,
                found.coordinates.longitude,
                found.display_name,
            )))
        }
        Ok(None) => {
            println!("Couldn't find that location.");
            Ok(None)
        }
        Err(err) => {
            tracing::debug!(error = %err, "geocoding failed");
            println!("Geocoding failed. Try a more specific address.");
            Ok(None)
        }
    }
}
