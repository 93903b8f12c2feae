//! CLI command implementations.

use std::fs;
use std::path::Path;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use graphlens_analytics::{
    by_keyword, by_type, neighborhood, relation_frequency, summarize, top_by_degree,
    top_by_source_count, LinkDirection, RELATION_PREFIX_LEN,
};
use graphlens_client::{export_snapshot, load_snapshot, GraphClient};
use graphlens_core::{Entity, GraphSnapshot, TypeLexicon};

use crate::config::{Settings, CONFIG_FILE};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Write a starter config file.
pub fn init(path: &Path) -> Result<()> {
    let config_path = path.join(CONFIG_FILE);

    if config_path.exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    let default_config = serde_json::json!({
        "url": "http://localhost:9380",
        "api_key": "",
        "dataset": ""
    });
    fs::write(&config_path, serde_json::to_string_pretty(&default_config)?)?;

    println!("{} Wrote {}", "✓".green(), config_path.display());
    println!(
        "  Fill in {} and {}, then run {}",
        "api_key".cyan(),
        "dataset".cyan(),
        "graphlens stats".cyan()
    );

    Ok(())
}

/// List the datasets visible to the configured API key.
pub fn datasets(settings: &Settings) -> Result<()> {
    let client = client_for(settings)?;

    let spinner = fetch_spinner("Listing datasets...")?;
    let datasets = client.list_datasets()?;
    spinner.finish_and_clear();

    if settings.json {
        println!("{}", serde_json::to_string_pretty(&datasets)?);
        return Ok(());
    }

    if datasets.is_empty() {
        println!("No datasets visible to this API key");
        return Ok(());
    }

    println!("Found {} datasets:\n", datasets.len());
    for dataset in datasets {
        println!(
            "  {} {} {}",
            dataset.name.cyan(),
            dataset.id.dimmed(),
            format!(
                "({} documents, {} chunks)",
                dataset.document_count, dataset.chunk_count
            )
            .dimmed()
        );
    }

    Ok(())
}

/// Summary statistics for the graph.
pub fn stats(settings: &Settings) -> Result<()> {
    let snapshot = load_graph(settings)?;
    let summary = summarize(&snapshot);
    let relations = relation_frequency(&snapshot, RELATION_PREFIX_LEN);
    let (localized, total) = TypeLexicon::new().coverage(&snapshot);

    if settings.json {
        let output = serde_json::json!({
            "summary": summary,
            "relation_frequency": relations,
            "localized_types": { "translated": localized, "total": total },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Graph Statistics".cyan().bold());
    println!();
    println!("  {} {}", "Entities:".dimmed(), summary.entity_count);
    println!("  {} {}", "Relations:".dimmed(), summary.relation_count);
    println!(
        "  {} {} ({:.1}%)",
        "With sources:".dimmed(),
        summary.sourced_count,
        summary.coverage_rate * 100.0
    );
    println!(
        "  {} {}/{} entities",
        "Localized types:".dimmed(),
        localized,
        total
    );

    if !summary.type_distribution.is_empty() {
        println!("\n{}", "Entity types:".cyan());
        let mut shares: Vec<_> = summary.type_distribution.iter().collect();
        shares.sort_by(|a, b| b.1.count.cmp(&a.1.count));
        for (label, share) in shares {
            println!(
                "  {} {} ({:.1}%)",
                label.yellow(),
                share.count,
                share.percent
            );
        }
    }

    if !relations.is_empty() {
        println!("\n{}", "Most common relations:".cyan());
        let mut pairs: Vec<_> = relations.iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(a.1));
        for (description, count) in pairs.iter().take(5) {
            println!("  {} × {}", count.to_string().yellow(), description);
        }
    }

    Ok(())
}

/// Best-connected entities by degree.
pub fn hubs(settings: &Settings, top: usize) -> Result<()> {
    let snapshot = load_graph(settings)?;
    let ranks = top_by_degree(&snapshot, top);

    if settings.json {
        println!("{}", serde_json::to_string_pretty(&ranks)?);
        return Ok(());
    }

    if ranks.is_empty() {
        println!("Graph has no entities");
        return Ok(());
    }

    println!("{}", "Best-connected entities".cyan().bold());
    println!();
    for rank in ranks {
        println!(
            "  {} {} {}",
            rank.name.cyan(),
            format!("({})", rank.type_label).yellow(),
            format!("{} connections", rank.degree).dimmed()
        );
    }

    Ok(())
}

/// Entities of one type, by importance.
pub fn filter(settings: &Settings, kind: &str, top: usize) -> Result<()> {
    let snapshot = load_graph(settings)?;
    let matches = by_type(&snapshot, kind)?;

    if settings.json {
        let shown: Vec<&Entity> = matches.iter().take(top).copied().collect();
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No entities of type \"{}\"", kind);
        return Ok(());
    }

    println!("Found {} entities of type \"{}\":\n", matches.len(), kind);
    for entity in matches.iter().take(top) {
        println!(
            "  {} {}",
            entity.name.cyan(),
            format!("(importance {:.3})", entity.importance).dimmed()
        );
    }
    if matches.len() > top {
        println!("  ... and {} more", matches.len() - top);
    }

    Ok(())
}

/// Entities matching a keyword in name or description.
pub fn search(settings: &Settings, keyword: &str) -> Result<()> {
    let snapshot = load_graph(settings)?;
    let matches = by_keyword(&snapshot, keyword)?;

    if settings.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No matches found for \"{}\"", keyword);
        return Ok(());
    }

    println!("Found {} matches:\n", matches.len());
    for entity in matches {
        println!(
            "  {} {}",
            entity.name.cyan(),
            format!("({})", entity.type_label).yellow()
        );
        if !entity.description.is_empty() {
            let preview: String = entity.description.chars().take(80).collect();
            println!("    {}", preview.dimmed());
        }
    }

    Ok(())
}

/// Entities with the most source-document references.
pub fn sources(settings: &Settings, top: usize) -> Result<()> {
    let snapshot = load_graph(settings)?;
    let ranked = top_by_source_count(&snapshot, top);

    if settings.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("No entities carry source references");
        return Ok(());
    }

    println!("{}", "Best-sourced entities".cyan().bold());
    println!();
    for entity in ranked {
        println!(
            "  {} {} {}",
            entity.name.cyan(),
            format!("({})", entity.type_label).yellow(),
            format!("{} documents", entity.source_refs.len()).dimmed()
        );
    }

    Ok(())
}

/// Direct relations of one entity.
pub fn neighbors(settings: &Settings, entity_id: &str) -> Result<()> {
    let snapshot = load_graph(settings)?;
    let links = neighborhood(&snapshot, entity_id)?;

    if settings.json {
        println!("{}", serde_json::to_string_pretty(&links)?);
        return Ok(());
    }

    let name = snapshot
        .get(entity_id)
        .map(|e| e.name.as_str())
        .unwrap_or(entity_id);

    if links.is_empty() {
        println!("\"{}\" has no relations", name);
        return Ok(());
    }

    println!("Relations of {}:\n", name.cyan().bold());
    for link in links {
        let arrow = match link.direction {
            LinkDirection::Outgoing => "→".green(),
            LinkDirection::Incoming => "←".yellow(),
        };
        print!(
            "  {} {} {}",
            arrow,
            link.other_id.cyan(),
            format!("({})", link.other_type).yellow()
        );
        if !link.relation.is_empty() {
            let preview: String = link.relation.chars().take(40).collect();
            print!(" — {}", preview.dimmed());
        }
        println!();
    }

    Ok(())
}

/// Fetch the graph and write it to a snapshot file.
pub fn export(settings: &Settings, output: &Path) -> Result<()> {
    let snapshot = load_graph(settings)?;
    export_snapshot(&snapshot, output)?;
    println!(
        "{} Exported {} entities, {} relations to {}",
        "✓".green(),
        snapshot.entity_count().to_string().cyan(),
        snapshot.relation_count().to_string().cyan(),
        output.display()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Loads the snapshot: from the `--input` file when given, otherwise by
/// fetching from the configured API.
fn load_graph(settings: &Settings) -> Result<GraphSnapshot> {
    let lexicon = TypeLexicon::new();

    if let Some(input) = &settings.input {
        return Ok(load_snapshot(input, &lexicon)?);
    }

    let client = client_for(settings)?;
    let dataset = settings
        .dataset
        .as_deref()
        .ok_or("no dataset configured; pass --dataset or run `graphlens init`")?;

    let spinner = fetch_spinner("Fetching knowledge graph...")?;
    let snapshot = client.fetch_snapshot(dataset, &lexicon);
    spinner.finish_and_clear();

    Ok(snapshot?)
}

fn client_for(settings: &Settings) -> Result<GraphClient> {
    let url = settings
        .url
        .as_deref()
        .ok_or("no API URL configured; pass --url or run `graphlens init`")?;
    let api_key = settings
        .api_key
        .as_deref()
        .ok_or("no API key configured; pass --api-key or set GRAPHLENS_API_KEY")?;
    Ok(GraphClient::new(url, api_key))
}

fn fetch_spinner(message: &'static str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message);
    Ok(spinner)
}
