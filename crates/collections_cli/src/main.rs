use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use collections_core::catalog::RegionTokenCatalog;
use collections_core::core_api::{Engine, MenuSources};
use collections_core::region::ChatlogId;
use collections_core::save;
use serde::Deserialize;

use collections_render::{JsonStyle, TextStyle, render_json, render_region_panel, render_text};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Progression file with one record per line.
    #[arg(value_name = "PROGRESSION")]
    path: PathBuf,
    /// Host data file: token cache, story regions, region names and menu
    /// entry sources.
    #[arg(long = "host-data", value_name = "JSON")]
    host_data: PathBuf,
    /// Campaign whose save state should be indexed.
    #[arg(long, default_value = "Spear")]
    campaign: String,
    /// Print the resolved pearl labels.
    #[arg(long)]
    pearls: bool,
    /// Print the resolved chatlog labels.
    #[arg(long)]
    chatlogs: bool,
    /// Print the uncollected-regions panel.
    #[arg(long)]
    panel: bool,
    /// Print everything as JSON instead of text.
    #[arg(long)]
    json: bool,
}

/// Host-owned inputs the in-game menu would deliver through its caches.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HostData {
    menu: MenuSources,
    token_cache: Vec<(String, Vec<ChatlogId>)>,
    story_regions: Vec<String>,
    unique_chatlogs: BTreeSet<ChatlogId>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.json && (cli.pearls || cli.chatlogs || cli.panel) {
        eprintln!("--json cannot be combined with --pearls/--chatlogs/--panel");
        process::exit(2);
    }

    let host_data = read_host_data(&cli.host_data);
    let progression = fs::read_to_string(&cli.path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", cli.path.display());
        process::exit(1);
    });
    let lines: Vec<String> = progression.lines().map(ToOwned::to_owned).collect();

    let catalog = RegionTokenCatalog::from_cache(
        host_data.token_cache,
        &host_data.story_regions,
        &host_data.unique_chatlogs,
    );

    let engine = Engine::new();
    let mut session = engine.open_menu(host_data.menu);

    match save::find_campaign_save(&lines, &cli.campaign) {
        Some(blob) => {
            if let Err(e) = session.load_panel(blob, &catalog) {
                eprintln!("warning: uncollected-regions panel disabled: {e}");
            }
        }
        None => {
            eprintln!(
                "warning: no save state found for campaign {}; uncollected-regions panel disabled",
                cli.campaign
            );
        }
    }

    if cli.json {
        let value = render_json(&session, JsonStyle::default());
        let rendered = serde_json::to_string_pretty(&value).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    if cli.pearls || cli.chatlogs || cli.panel {
        if cli.pearls {
            for (index, label) in session.pearl_labels().iter().enumerate() {
                println!("pearl[{index}]={label}");
            }
        }
        if cli.chatlogs {
            for (index, label) in session.chatlog_labels().iter().enumerate() {
                println!("chatlog[{index}]={label}");
            }
        }
        if cli.panel {
            print!("{}", render_region_panel(session.panel_snapshot().as_ref()));
        }
        return;
    }

    print!("{}", render_text(&session, TextStyle::default()));
}

fn read_host_data(path: &PathBuf) -> HostData {
    let raw = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", path.display());
        process::exit(1);
    });
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        eprintln!("Error parsing {}: {e}", path.display());
        process::exit(1);
    })
}
