use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sitesearch::datasets::{self, Dataset};
use sitesearch::{
    redirect_to_results, Autocomplete, DocumentIndex, DropdownView, Key, NavigateFn,
    ResultsPage, ResultsView, SearchConfig,
};

mod cli;
use cli::display::{
    category_badge, effect_label, error_label, row, section_bot, section_mid, section_top,
    state_label, themed, truncate, BOLD, CYAN, DIM, GRAY, GREEN, YELLOW,
};
use cli::{Cli, Commands, SourceArgs};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            query,
            source,
            json,
        } => run_search(&query, &source, json),
        Commands::Results {
            query,
            url,
            source,
            json,
        } => run_results(&query, url, &source, json),
        Commands::Inspect { source } => run_inspect(&source),
        Commands::Replay {
            query,
            keys,
            click,
            source,
        } => run_replay(&query, &keys, click, &source),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", error_label(&format!("{:#}", e)));
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(source: &SourceArgs) -> Result<SearchConfig> {
    match &source.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SearchConfig::default()),
    }
}

fn load_index(source: &SourceArgs, default: Dataset) -> Result<(String, DocumentIndex)> {
    match &source.docs {
        Some(path) => {
            let index = DocumentIndex::load(path)
                .with_context(|| format!("loading documents {}", path.display()))?;
            Ok((path.display().to_string(), index))
        }
        None => {
            let dataset = source.dataset.unwrap_or(default);
            Ok((dataset.name().to_string(), dataset.load()))
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// search
// ═══════════════════════════════════════════════════════════════════════════

fn run_search(query: &str, source: &SourceArgs, json: bool) -> Result<()> {
    let config = load_config(source)?;
    let (name, index) = load_index(source, Dataset::Navbar)?;

    let mut widget = Autocomplete::from_config(index, &config, None, NavigateFn(|_: &str| {}));
    widget.set_query(query);
    let view = widget.view();

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    section_top(&format!("SEARCH {:?} in {}", query, name));
    print_dropdown(&view, config.min_query_chars);
    section_bot();
    Ok(())
}

fn print_dropdown(view: &DropdownView, min_query_chars: usize) {
    match view {
        DropdownView::Hidden => row(&themed(
            GRAY,
            &[DIM],
            &format!("(closed: type at least {} characters)", min_query_chars),
        )),
        DropdownView::NoResults { message } => row(&themed(YELLOW, &[], message)),
        DropdownView::Results { rows } => {
            for (i, result) in rows.iter().enumerate() {
                let marker = if result.selected { "▶" } else { " " };
                row(&format!(
                    "{} {}. {} {}",
                    marker,
                    i + 1,
                    themed(GREEN, &[BOLD], &truncate(&result.title, 44)),
                    category_badge(&result.category)
                ));
                row(&format!(
                    "     {}",
                    themed(GRAY, &[], &truncate(&result.description, 60))
                ));
                row(&format!("     {}", themed(CYAN, &[], &result.href)));
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// results
// ═══════════════════════════════════════════════════════════════════════════

fn run_results(query: &str, url: bool, source: &SourceArgs, json: bool) -> Result<()> {
    let config = load_config(source)?;
    let (name, index) = load_index(source, Dataset::ResultsPage)?;
    let page = ResultsPage::new(index, &config);
    let view = if url {
        page.render_url(query)
    } else {
        page.render(query)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    section_top(&format!("RESULTS PAGE ({})", name));
    match &view {
        ResultsView::Prompt { fallbacks } => {
            row("Enter a search term to find guides and answers.");
            print_fallbacks(fallbacks);
        }
        ResultsView::NoMatches { query, fallbacks } => {
            row(&themed(YELLOW, &[], &format!("No results found for {:?}", query)));
            print_fallbacks(fallbacks);
        }
        ResultsView::Groups {
            query,
            total,
            groups,
        } => {
            row(&format!("{} result(s) for {:?}", total, query));
            for group in groups {
                section_mid(&format!("{} ({})", group.category, group.documents.len()));
                for doc in &group.documents {
                    row(&themed(GREEN, &[BOLD], &truncate(&doc.title, 60)));
                    row(&format!("  {}", themed(GRAY, &[], &truncate(&doc.description, 60))));
                    row(&format!("  {}", themed(CYAN, &[], &doc.href)));
                }
            }
        }
    }
    section_bot();
    Ok(())
}

fn print_fallbacks(fallbacks: &[sitesearch::FallbackLink]) {
    for link in fallbacks {
        row(&format!("  → {} {}", link.label, themed(CYAN, &[], &link.href)));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// inspect
// ═══════════════════════════════════════════════════════════════════════════

fn run_inspect(source: &SourceArgs) -> Result<()> {
    let (name, index) = load_index(source, Dataset::Navbar)?;

    section_top(&format!("INDEX {}", name));
    row(&format!("documents   {}", index.len()));
    let categories = index.categories();
    row(&format!("categories  {}", categories.len()));
    for category in categories {
        let count = index.iter().filter(|doc| doc.category == category).count();
        row(&format!("  {} {}", category_badge(category), count));
    }

    section_mid("COMPILED-IN LISTS");
    let report = datasets::divergence(&datasets::navbar(), &datasets::results_page());
    if report.is_empty() {
        row("navbar and results-page lists are identical");
    }
    for href in &report.navbar_only {
        row(&format!("  navbar only        {}", href));
    }
    for href in &report.results_page_only {
        row(&format!("  results-page only  {}", href));
    }
    for href in &report.mismatched {
        row(&format!("  fields differ      {}", href));
    }
    section_bot();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// replay
// ═══════════════════════════════════════════════════════════════════════════

fn run_replay(query: &str, keys: &[Key], click: Option<usize>, source: &SourceArgs) -> Result<()> {
    let config = load_config(source)?;
    let (name, index) = load_index(source, Dataset::Navbar)?;

    let redirects = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&redirects);
    let on_search = redirect_to_results(config.results_path.clone(), move |href: &str| {
        sink.borrow_mut().push(href.to_string())
    });
    let mut widget = Autocomplete::from_config(
        index,
        &config,
        Some(on_search),
        NavigateFn(|_: &str| {}),
    );

    section_top(&format!("REPLAY on {}", name));
    widget.set_query(query);
    row(&format!("type {:?} → {}", query, state_label(widget.state())));
    print_dropdown(&widget.view(), config.min_query_chars);

    for &key in keys {
        let effect = widget.key_down(key);
        section_mid(&format!("{:?} → {}", key, effect_label(&effect)));
        row(&format!("state {}", state_label(widget.state())));
        print_dropdown(&widget.view(), config.min_query_chars);
    }
    if let Some(row_index) = click {
        let effect = widget.click_result(row_index);
        section_mid(&format!("click row {} → {}", row_index, effect_label(&effect)));
        row(&format!("state {}", state_label(widget.state())));
    }

    section_mid("FINAL");
    row(&format!("query {:?}", widget.query()));
    for href in redirects.borrow().iter() {
        row(&format!("location → {}", themed(CYAN, &[], href)));
    }
    section_bot();
    Ok(())
}
