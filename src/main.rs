mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use atelier::content::{project_type_label, Lang};
use atelier::media::MediaKind;
use atelier::Atelier;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let lang: Lang = cli.lang.into();
    let site = Atelier::new(&cli.base_url)?;

    match cli.command {
        Commands::Themes => {
            for theme in site.themes(lang) {
                println!(
                    "{:<5} {} ({} projects)",
                    theme.id.as_str(),
                    theme.title,
                    theme.projects.len()
                );
            }
        }
        Commands::Projects { theme } => {
            for th in site.themes(lang) {
                if let Some(filter) = &theme {
                    if th.id.as_str() != filter {
                        continue;
                    }
                }
                for project in &th.projects {
                    if cli.json {
                        println!("{}", serde_json::to_string(project)?);
                    } else {
                        println!(
                            "{:<24} {:<12} {}",
                            project.slug,
                            project.status.label(lang),
                            project.title
                        );
                    }
                }
            }
        }
        Commands::Search { query } => {
            let results = site.search(lang, &query);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("no matches");
            } else {
                for result in results {
                    let subtitle = result.subtitle.as_deref().unwrap_or("");
                    println!(
                        "{:>3}  {:<8} {}  {}",
                        result.score,
                        result.kind.label(),
                        result.title,
                        subtitle
                    );
                }
            }
        }
        Commands::Media { slug } => {
            let groups = site.groups(lang, &slug).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&groups)?);
            } else {
                for kind in MediaKind::ALL {
                    let list = groups.get(kind);
                    if list.is_empty() {
                        continue;
                    }
                    println!("{}:", kind.as_str());
                    for group in list {
                        println!("  {} ({} items)", group.label, group.items.len());
                        for item in &group.items {
                            println!("    {item}");
                        }
                    }
                }
            }
        }
        Commands::Brief { slug } => {
            let text = site.brief(lang, &slug).await?;
            if text.is_empty() {
                // same fallback the site renders when the brief is missing
                println!("{}", project_type_label(&slug));
            } else {
                println!("{text}");
            }
        }
        Commands::Overview { slug } => match site.overview(lang, &slug).await? {
            Some(text) if !text.is_empty() => println!("{text}"),
            Some(_) => println!("overview not found"),
            None => println!("no overview configured"),
        },
        Commands::Updates { slug } => match site.updates_log(lang, &slug).await? {
            Some(text) if !text.is_empty() => println!("{text}"),
            Some(_) => println!("updates log not found"),
            None => println!("no remote updates log configured"),
        },
        Commands::Stats => {
            let stats = site.stats();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("themes:               {}", stats.themes);
                println!("projects:             {}", stats.projects);
                println!("tags:                 {}", stats.tags);
                println!("text cache entries:   {}", stats.text_cache_entries);
                println!("media index entries:  {}", stats.media_index_entries);
            }
        }
    }
    Ok(())
}
