use clap::Parser;
use sheetwright::{
    discover, readers_by_extension, BatchConfig, BatchDriver, BuildOptions, ContentLibrary,
    SheetBuilder, SheetError,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Prepare Dungeons and Dragons character sheets as PDFs.
#[derive(Parser, Debug)]
#[command(name = "make-sheets", version, about)]
struct Cli {
    /// File with character definition, or directory containing such files
    filename: Vec<PathBuf>,

    /// Order spells by level in the feature pages.
    #[arg(short = 'S', long = "spells-by-level")]
    spell_order: bool,

    /// Provide verbose logging, build sequentially and keep temporary files.
    #[arg(short, long)]
    debug: bool,

    /// Directory the sheets are written to.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Number of worker threads (defaults to the number of CPUs).
    #[arg(short = 'j', long)]
    jobs: Option<usize>,
}

fn main() -> Result<(), SheetError> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let known_extensions: Vec<&str> = readers_by_extension().keys().copied().collect();
    let candidates = discover(&cli.filename, &known_extensions)?;

    let library = Arc::new(ContentLibrary::standard()?);
    let builder = SheetBuilder::new(library)?;

    let options = BuildOptions {
        debug: cli.debug,
        spell_order: cli.spell_order,
        output_dir: cli.output_dir,
    };
    let mut config = BatchConfig { debug: cli.debug, ..Default::default() };
    if let Some(jobs) = cli.jobs {
        config.workers = jobs.max(1);
    }

    BatchDriver::new(builder, options, config).run(candidates)?;
    Ok(())
}
