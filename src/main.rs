use anyhow::{Context, Result};
use clap::Parser;
use iconsift::search::utils::resolve_terms;
use iconsift::{
    categories, display_tags, expand, load_config, load_index, load_index_with_base,
    pretty_name, score_breakdown, search, IndexRow, SearchConfig,
};
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{
    contribution, pad_right, row, score_value, section_bot, section_top, styled, themed,
    truncate, BLUE, BOLD, DIM,
};
use cli::{Cli, Commands, SearchArgs};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    // RUST_LOG wins when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search(args) => run_search(args),
        Commands::Categories { index, json } => run_categories(&index, json),
        Commands::Expand {
            query,
            config,
            json,
        } => run_expand(&query, config.as_deref(), json),
    }
}

fn read_config(path: Option<&Path>) -> Result<SearchConfig> {
    match path {
        Some(path) => load_config(path)
            .with_context(|| format!("could not load config {}", path.display())),
        None => {
            tracing::debug!("no config given, using defaults");
            Ok(SearchConfig::default())
        }
    }
}

fn read_index(path: &Path, base: Option<&str>) -> Result<Vec<IndexRow>> {
    let rows = match base {
        Some(base) => load_index_with_base(path, base),
        None => load_index(path),
    };
    rows.with_context(|| format!("could not load index {}", path.display()))
}

fn run_search(args: SearchArgs) -> Result<()> {
    let index = read_index(&args.index, args.base.as_deref())?;
    let mut config = read_config(args.config.as_deref())?;
    if let Some(distance) = args.fuzzy {
        config = config.with_fuzzy(distance);
    }

    let results = search(&index, &config, &args.query, args.categories.as_slice(), args.limit);

    if args.json {
        let out = serde_json::to_string_pretty(&results).context("could not serialize results")?;
        println!("{}", out);
        return Ok(());
    }

    section_top(&format!("RESULTS \"{}\"", truncate(&args.query, 40)));
    if results.is_empty() {
        row(&styled(&[DIM], "  no matching icons"));
    }

    let terms = resolve_terms(&args.query, &config.synonyms);
    for (rank, result) in results.iter().enumerate() {
        let title = themed(BLUE, &[BOLD], &truncate(&pretty_name(&result.row.file_name), 26));
        row(&format!(
            " {:>3} {}  {} {} {}",
            rank + 1,
            score_value(result.score),
            pad_right(&title, 26),
            pad_right(&truncate(&result.row.category, 14), 14),
            truncate(&result.row.file_name, 22),
        ));

        if args.explain {
            let parts = score_breakdown(&terms, &result.row, &config);
            let weights = &config.weights;
            row(&format!(
                "       overlap {} x {} = {}   filename {} = {}   category {:.3} x {} = {}",
                parts.overlap,
                weights.overlap,
                contribution(parts.overlap as f64 * weights.overlap),
                u8::from(parts.filename_hit),
                contribution(if parts.filename_hit { weights.filename } else { 0.0 }),
                parts.category_boost,
                weights.category,
                contribution(parts.category_boost * weights.category),
            ));
        }

        let tags = display_tags(&result.row.tokens);
        if !tags.is_empty() {
            row(&styled(&[DIM], &truncate(&format!("       {}", tags.join(", ")), 78)));
        }
    }

    row(&styled(
        &[DIM],
        &format!(
            "  {} shown · {} icons indexed · terms: {}",
            results.len(),
            index.len(),
            truncate(&terms.join(" "), 30)
        ),
    ));
    section_bot();

    Ok(())
}

fn run_categories(index_path: &Path, json: bool) -> Result<()> {
    let index = read_index(index_path, None)?;
    let names = categories(&index);

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    section_top("CATEGORIES");
    for name in &names {
        let count = index.iter().filter(|r| &r.category == name).count();
        let label = if name.is_empty() { "(none)" } else { name.as_str() };
        row(&format!("  {} {:>6}", pad_right(&truncate(label, 60), 60), count));
    }
    section_bot();

    Ok(())
}

fn run_expand(query: &str, config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = read_config(config_path)?;
    let terms: Vec<String> = expand(query, &config.synonyms).into_iter().collect();

    if json {
        println!("{}", serde_json::to_string(&terms)?);
    } else {
        for term in &terms {
            println!("{}", term);
        }
    }

    Ok(())
}
