//! Team Board CLI
//!
//! Browse the catalog, build and save compositions, inspect their synergies.

use anyhow::{bail, Context, Result};
use board_core::board::BOARD_SLOTS;
use board_core::{
    filter_champions, group_by_cost, BoardConfig, BoardState, BoardStats, Catalog,
    CatalogSearch, ChampionRecord, CompositionStore, FileBackend, SavedComposition,
    SearchResults, Session, StoreError, SynergyTally,
};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing_subscriber::EnvFilter;

/// Hex cells per board row
const ROW_WIDTH: usize = 7;

#[derive(Parser)]
#[command(name = "board")]
#[command(
    about = "Team composition board: champions, synergies and saved teams",
    long_about = None
)]
struct Cli {
    /// YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog JSON (overrides config; embedded demo catalog by default)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Directory of the saved-composition blob (overrides config)
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List champions grouped by cost
    Catalog {
        /// Filter by name or trait
        #[arg(long, short)]
        query: Option<String>,
    },

    /// Search the catalog as you type, one query per line (Ctrl-D quits)
    Search,

    /// Build a board and save it under NAME
    Save {
        name: String,

        /// Put CHAMPION in SLOT (0-27), e.g. --place 3=Ahri
        #[arg(long = "place", value_parser = parse_placement)]
        placements: Vec<(usize, String)>,

        /// Put CHAMPION in the first empty slot
        #[arg(long = "add")]
        additions: Vec<String>,
    },

    /// Load NAME and print board, synergies and stats
    Show {
        name: String,

        /// Print synergies and stats as JSON
        #[arg(long)]
        json: bool,
    },

    /// List saved compositions
    List,

    /// Delete a saved composition
    Delete { name: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config =
        BoardConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(dir) = cli.store_dir {
        config.store_dir = dir;
    }
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }

    let catalog = load_catalog(&config)?;
    let store = CompositionStore::with_key(
        FileBackend::new(&config.store_dir),
        config.storage_key.clone(),
    );
    let mut session = Session::new(catalog, store);

    match cli.command {
        Commands::Catalog { query } => {
            let champions = filter_champions(session.catalog(), query.as_deref().unwrap_or(""));
            if champions.is_empty() {
                println!("No champions match");
            }
            print!("{}", render_rows(&champions));
        }

        Commands::Search => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .context("Failed to start search runtime")?;
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            runtime.block_on(search_loop(
                Arc::clone(session.catalog()),
                config.search_debounce(),
                input,
                std::io::stdout(),
            ))?;
        }

        Commands::Save { name, placements, additions } => {
            for (slot, champ) in placements {
                let champion = session.champion(&champ)?;
                session.place(slot, champion);
            }
            for champ in additions {
                if session.add_by_name(&champ)?.is_none() {
                    bail!("Board is full, cannot add {}", champ);
                }
            }

            match session.save(&name) {
                Ok(saved) => println!("✅ Team saved as {:?}", saved),
                Err(StoreError::InvalidName) => println!("Team name is empty, nothing saved"),
                Err(e) => return Err(e).context("Failed to save team"),
            }
        }

        Commands::Show { name, json } => {
            session.load(&name).with_context(|| format!("Failed to load team {:?}", name))?;
            if json {
                let out = serde_json::json!({
                    "board": session.board().slot_names(),
                    "synergies": session.synergies(),
                    "stats": session.stats(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!("{}", render_board(session.board()));
                println!();
                print!("{}", render_synergies(session.synergies()));
                println!();
                print!("{}", render_stats(session.stats().as_ref()));
            }
        }

        Commands::List => {
            let entries = session.saved_entries()?;
            if entries.is_empty() {
                println!("No saved teams");
            }
            print!("{}", render_saved_list(&entries));
        }

        Commands::Delete { name } => {
            if session.delete(&name)? {
                println!("Deleted {:?}", name);
            } else {
                println!("No saved team named {:?}", name);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn load_catalog(config: &BoardConfig) -> Result<Arc<Catalog>> {
    match &config.catalog_path {
        Some(path) => {
            let catalog = Catalog::from_json_file(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?;
            Ok(Arc::new(catalog))
        }
        None => Catalog::demo().context("Failed to load embedded demo catalog"),
    }
}

/// Feed each input line to a debounced search and print results as they
/// settle. The last query is allowed to settle before returning at end of input.
async fn search_loop<R, W>(
    catalog: Arc<Catalog>,
    delay: Duration,
    input: R,
    mut out: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut search = CatalogSearch::new(catalog, delay);
    let mut results = search.subscribe();
    let mut lines = input.lines();

    loop {
        tokio::select! {
            biased;

            changed = results.changed() => {
                changed.context("Search results channel closed")?;
                write!(out, "{}", render_results(&results.borrow_and_update()))?;
            }
            line = lines.next_line() => match line.context("Failed to read query")? {
                Some(query) => search.on_query(&query),
                None => break,
            },
        }
    }

    if search.is_pending() {
        results.changed().await.context("Search results channel closed")?;
        write!(out, "{}", render_results(&results.borrow_and_update()))?;
    } else if results.has_changed().context("Search results channel closed")? {
        write!(out, "{}", render_results(&results.borrow_and_update()))?;
    }
    out.flush()?;
    Ok(())
}

/// "SLOT=CHAMPION"
fn parse_placement(s: &str) -> Result<(usize, String), String> {
    let (slot, champ) =
        s.split_once('=').ok_or_else(|| format!("expected SLOT=CHAMPION, got {:?}", s))?;
    let slot: usize = slot.trim().parse().map_err(|_| format!("invalid slot {:?}", slot))?;
    if !BoardState::is_valid_slot(slot) {
        return Err(format!("slot {} out of range 0-{}", slot, BOARD_SLOTS - 1));
    }
    let champ = champ.trim();
    if champ.is_empty() {
        return Err("champion name is empty".to_string());
    }
    Ok((slot, champ.to_string()))
}

/// One "Cost N: a, b" line per cost tier
fn render_rows(champions: &[Arc<ChampionRecord>]) -> String {
    group_by_cost(champions)
        .into_iter()
        .map(|(cost, row)| {
            let names: Vec<_> = row.iter().map(|c| c.name.as_str()).collect();
            format!("Cost {}: {}\n", cost, names.join(", "))
        })
        .collect()
}

fn render_results(results: &SearchResults) -> String {
    if results.champions.is_empty() {
        return format!("🔍 {:?}: no champions match\n", results.query);
    }
    format!(
        "🔍 {:?}: {} found\n{}",
        results.query,
        results.champions.len(),
        render_rows(&results.champions)
    )
}

fn render_saved_list(entries: &[(String, SavedComposition)]) -> String {
    entries
        .iter()
        .map(|(name, entry)| format!("{:?}  (saved {})\n", name, entry.saved_at.to_rfc3339()))
        .collect()
}

fn render_board(board: &BoardState) -> String {
    let mut out = String::new();
    for (row, cells) in board.slots().chunks(ROW_WIDTH).enumerate() {
        // offset odd rows like a hex grid
        if row % 2 == 1 {
            out.push_str("      ");
        }
        let cells: Vec<String> = cells
            .iter()
            .map(|cell| match cell {
                Some(c) => format!("[{:^10}]", truncate(&c.name, 10)),
                None => format!("[{:^10}]", ""),
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

fn render_synergies(tally: &SynergyTally) -> String {
    match tally {
        SynergyTally::NoChampions => "Add champions to see synergies\n".to_string(),
        SynergyTally::Traits(traits) if traits.is_empty() => "No known traits\n".to_string(),
        SynergyTally::Traits(traits) => traits
            .iter()
            .map(|t| {
                let state =
                    if t.is_active() { format!("tier {}", t.tier) } else { "inactive".to_string() };
                format!("{:<14} {:>5}  {}\n", t.trait_name, t.progress(), state)
            })
            .collect(),
    }
}

fn render_stats(stats: Option<&BoardStats>) -> String {
    match stats {
        None => "No champions selected\n".to_string(),
        Some(s) => format!(
            "Champions      {}\nTotal Cost     {}g\nAvg Cost       {:.1}★\nCost Breakdown {}\n",
            s.count_label(),
            s.total_cost,
            s.average_cost,
            s.cost_breakdown_label()
        ),
    }
}

fn truncate(name: &str, max: usize) -> String {
    name.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::{MemoryBackend, Session};

    fn demo_session() -> Session<MemoryBackend> {
        Session::new(Catalog::demo().unwrap(), CompositionStore::new(MemoryBackend::new()))
    }

    fn search_output(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_placement() {
        assert_eq!(parse_placement("3=Ahri").unwrap(), (3, "Ahri".to_string()));
        assert_eq!(parse_placement("27 = Lee Sin").unwrap(), (27, "Lee Sin".to_string()));
        assert!(parse_placement("28=Ahri").is_err());
        assert!(parse_placement("x=Ahri").is_err());
        assert!(parse_placement("3").is_err());
        assert!(parse_placement("3= ").is_err());
    }

    #[test]
    fn test_render_board_has_four_rows() {
        let mut session = demo_session();
        session.add_by_name("Zed").unwrap();
        let out = render_board(session.board());
        assert_eq!(out.lines().count(), BOARD_SLOTS / ROW_WIDTH);
        assert!(out.lines().next().unwrap().contains("Zed"));
    }

    #[test]
    fn test_render_empty_state() {
        let session = demo_session();
        assert_eq!(render_synergies(session.synergies()), "Add champions to see synergies\n");
        assert_eq!(render_stats(session.stats().as_ref()), "No champions selected\n");
    }

    #[test]
    fn test_render_synergies_and_stats() {
        let mut session = demo_session();
        session.add_by_name("Akali").unwrap();
        session.add_by_name("Kennen").unwrap();

        let synergies = render_synergies(session.synergies());
        assert!(synergies.lines().next().unwrap().starts_with("Ninja"));
        assert!(synergies.contains("2/4"));

        let stats = render_stats(session.stats().as_ref());
        assert!(stats.contains("2/28"));
        assert!(stats.contains("7g"));
        assert!(stats.contains("3★: 1 | 4★: 1"));
    }

    #[test]
    fn test_saved_list_shows_names_as_stored() {
        let mut session = demo_session();
        session.add_by_name("Zed").unwrap();
        session.save(" Reroll").unwrap();
        session.save("Fast 8").unwrap();

        let out = render_saved_list(&session.saved_entries().unwrap());
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("\" Reroll\"  (saved "));
        assert!(lines[1].starts_with("\"Fast 8\"  (saved "));
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_loop_prints_only_settled_query() {
        let catalog = Catalog::demo().unwrap();
        let input: &[u8] = b"n\nni\nninja\n";
        let mut out = Vec::new();

        search_loop(catalog, Duration::from_millis(200), input, &mut out).await.unwrap();

        let out = search_output(out);
        assert_eq!(out.matches("🔍").count(), 1);
        assert!(out.starts_with("🔍 \"ninja\": 3 found\n"));
        assert!(out.contains("Cost 3: Akali\n"));
        assert!(out.contains("Cost 5: Zed\n"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_loop_prints_each_pause() {
        let catalog = Catalog::demo().unwrap();
        let (reader, mut writer) = tokio::io::duplex(64);
        let typist = tokio::spawn(async move {
            use tokio::io::AsyncWriteExt;
            writer.write_all(b"zed\n").await.unwrap();
            tokio::time::sleep(Duration::from_secs(1)).await;
            writer.write_all(b"xyz\n").await.unwrap();
        });

        let mut out = Vec::new();
        let input = tokio::io::BufReader::new(reader);
        search_loop(catalog, Duration::from_millis(200), input, &mut out).await.unwrap();
        typist.await.unwrap();

        let out = search_output(out);
        assert_eq!(
            out,
            "🔍 \"zed\": 1 found\nCost 5: Zed\n🔍 \"xyz\": no champions match\n"
        );
    }

    #[test]
    fn test_cli_parses_save_command() {
        let cli = Cli::try_parse_from([
            "board", "save", "Ninjas", "--place", "0=Zed", "--add", "Akali", "--add", "Kennen",
        ])
        .unwrap();
        match cli.command {
            Commands::Save { name, placements, additions } => {
                assert_eq!(name, "Ninjas");
                assert_eq!(placements, vec![(0, "Zed".to_string())]);
                assert_eq!(additions, vec!["Akali".to_string(), "Kennen".to_string()]);
            }
            _ => panic!("expected save command"),
        }

        assert!(Cli::try_parse_from(["board", "save", "X", "--place", "40=Zed"]).is_err());
        let search = Cli::try_parse_from(["board", "search"]).unwrap();
        assert!(matches!(search.command, Commands::Search));
    }
}
