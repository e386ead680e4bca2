//! The interactive `chat` subcommand: one search, then follow-up turns
//! threading the upstream session identifier.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};

use gottago_core::{build_search_query, AppConfig};
use gottago_session::{suggested_questions, SearchSession};

use crate::render;
use crate::search::{resolve_reference_point, yelp_client};
use crate::SearchArgs;

pub(crate) async fn run(config: &AppConfig, args: &SearchArgs) -> anyhow::Result<()> {
    let Some(point) = resolve_reference_point(config, args).await? else {
        return Ok(());
    };

    let mut session = SearchSession::new();
    session.set_reference_point(point);
    session.set_radius_km(args.radius_km);

    let client = yelp_client(config)?;

    let query = build_search_query(args.category, args.urgency);
    let request = session.request(query)?;
    let response = client.chat(&request).await.context("initial search failed")?;
    session.absorb(args.category, &response);
    render::print_places(args.category, session.places(args.category));

    println!("\nTry asking:");
    for question in suggested_questions(args.category) {
        println!("  - {question}");
    }
    println!("\nAsk a follow-up question (blank line to quit):");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let message = line.trim();
        if message.is_empty() || message == "quit" || message == "exit" {
            break;
        }

        let request = session.request(message)?;
        match client.chat(&request).await {
            Ok(response) => {
                let reply = session.complete_turn(args.category, message, &response);
                println!("\n{reply}\n");
                render::print_places(args.category, session.places(args.category));
            }
            Err(err) => {
                tracing::debug!(error = %err, "follow-up turn failed");
                println!("Sorry, I had trouble processing that. Can you try rephrasing your question?");
            }
        }
    }

    Ok(())
}
