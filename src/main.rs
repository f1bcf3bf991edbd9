use clap::{Parser, Subcommand};
use folio::{
    values, Category, ContentConfig, ContentRepository, Note, Project, Status, Strictness,
};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio", about = "Load and validate portfolio projects and notes")]
struct Cli {
    #[arg(long, env = "FOLIO_CONTENT", default_value = "content", global = true)]
    content: PathBuf,

    #[arg(
        long,
        env = "FOLIO_ASSETS",
        global = true,
        help = "Directory screenshots resolve against [default: public/ next to the content root]"
    )]
    assets: Option<PathBuf>,

    #[arg(
        long,
        env = "FOLIO_STRICTNESS",
        value_enum,
        default_value_t = Strictness::Lenient,
        global = true,
        help = "Skip invalid files (lenient) or fail on the first one (strict)"
    )]
    strictness: Strictness,

    #[arg(short, long, global = true, help = "Log debug output")]
    verbose: bool,

    #[arg(short, long, global = true, help = "Only log warnings and errors")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load all content and check slugs are unique
    Validate,
    /// List projects
    Projects {
        #[arg(long, value_parser = parse_status)]
        status: Option<Status>,
        #[arg(long, help = "Show a single project")]
        slug: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// List notes, newest first
    Notes {
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,
        #[arg(long, help = "Show a single note")]
        slug: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// List note categories in use
    Categories {
        #[arg(long, help = "Show the number of notes in each category")]
        count: bool,
    },
}

fn parse_status(s: &str) -> Result<Status, String> {
    s.parse()
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse()
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let mut config = ContentConfig::new(cli.content).with_strictness(cli.strictness);
    if let Some(assets) = cli.assets {
        config = config.with_assets(assets);
    }
    let repo = ContentRepository::new(config);

    let result = match cli.command {
        Command::Validate => run_validate(&repo),
        Command::Projects { status, slug, json } => run_projects(&repo, status, slug, json),
        Command::Notes {
            category,
            slug,
            json,
        } => run_notes(&repo, category, slug, json),
        Command::Categories { count } => run_categories(&repo, count),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run_validate(repo: &ContentRepository) -> folio::Result<ExitCode> {
    let summary = repo.validate_all()?;
    println!("✓ Content validation passed");
    println!("  - {} projects validated", summary.projects);
    println!("  - {} notes validated", summary.notes);
    Ok(ExitCode::from(0))
}

fn run_projects(
    repo: &ContentRepository,
    status: Option<Status>,
    slug: Option<String>,
    json: bool,
) -> folio::Result<ExitCode> {
    let projects: Vec<Project> = match (slug, status) {
        (Some(slug), _) => repo.find_project(&slug)?.into_iter().collect(),
        (None, Some(status)) => repo.projects_by_status(status)?,
        (None, None) => repo.list_projects()?,
    };

    print_records(&projects, json, |p: &Project| {
        format!("{}\t{}\t{}\t{}", p.slug, p.year, p.status, p.title)
    })
}

fn run_notes(
    repo: &ContentRepository,
    category: Option<Category>,
    slug: Option<String>,
    json: bool,
) -> folio::Result<ExitCode> {
    let notes: Vec<Note> = match (slug, category) {
        (Some(slug), _) => repo.find_note(&slug)?.into_iter().collect(),
        (None, Some(category)) => repo.notes_by_category(category)?,
        (None, None) => repo.list_notes()?,
    };

    print_records(&notes, json, |n: &Note| {
        format!("{}\t{}\t{}\t{}", n.published_at, n.slug, n.category, n.title)
    })
}

fn run_categories(repo: &ContentRepository, show_count: bool) -> folio::Result<ExitCode> {
    let notes = repo.list_notes()?;
    let counts = values::category_counts(&notes);

    if counts.is_empty() {
        return Ok(ExitCode::from(1));
    }

    for line in values::format_counts(&counts, show_count) {
        println!("{}", line);
    }

    Ok(ExitCode::from(0))
}

fn print_records<T: Serialize>(
    records: &[T],
    json: bool,
    line: impl Fn(&T) -> String,
) -> folio::Result<ExitCode> {
    if json {
        match serde_json::to_string_pretty(records) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: {}", e);
                return Ok(ExitCode::from(2));
            }
        }
    } else {
        for record in records {
            println!("{}", line(record));
        }
    }

    if records.is_empty() {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::from(0))
    }
}
