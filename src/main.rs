use anyhow::Context;
use clap::Parser;
use iconpack::{Config, Pipeline};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "iconpack",
    version,
    author,
    about = "Build a JSON icon pack from a folder of SVG icons",
    long_about = "Build a JSON icon pack for diagram renderers from a folder of SVG icons.\n\n\
    The tool walks the source directory depth-first, turns directory names into \
    category segments and file names of the form <digits>-icon-service-<name>.svg \
    into icon identifiers, and writes a single pack file.\n\n\
    USAGE EXAMPLES:\n  \
      # Build from ./azure-icons into ./custom-azure-icons.json\n  \
      iconpack\n\n  \
      # Build an AWS pack\n  \
      iconpack --dir ./aws-icons --out ./aws.json --prefix aws\n\n  \
      # Fail when two files map to the same identifier\n  \
      iconpack --strict"
)]
struct Cli {
    /// Root directory holding the source icons
    #[arg(
        short,
        long,
        env = "ICONPACK_DIR",
        default_value = "./azure-icons",
        value_name = "PATH"
    )]
    dir: PathBuf,

    /// Output file for the generated pack
    #[arg(
        short,
        long,
        env = "ICONPACK_OUT",
        default_value = "./custom-azure-icons.json",
        value_name = "PATH"
    )]
    out: PathBuf,

    /// Prefix used to qualify icon references
    #[arg(short, long, env = "ICONPACK_PREFIX", default_value = "azure")]
    prefix: String,

    /// Width recorded for every icon
    #[arg(long, env = "ICONPACK_WIDTH", default_value_t = 24)]
    width: u32,

    /// Height recorded for every icon
    #[arg(long, env = "ICONPACK_HEIGHT", default_value_t = 24)]
    height: u32,

    /// Literal between the ordering digits and the service name
    #[arg(long, env = "ICONPACK_MARKER", default_value = "icon-service-")]
    marker: String,

    /// Drawable file extension, without the leading dot
    #[arg(long, env = "ICONPACK_EXT", default_value = "svg")]
    ext: String,

    /// Spaces per indentation level in the JSON output
    #[arg(long, env = "ICONPACK_INDENT", default_value_t = 4)]
    indent: usize,

    /// Fail when two files map to the same identifier
    #[arg(long, env = "ICONPACK_STRICT")]
    strict: bool,

    /// Back up an existing output file before replacing it
    #[arg(long, env = "ICONPACK_BACKUP")]
    backup: bool,

    /// Dry run (don't write the pack)
    #[arg(long, env = "ICONPACK_DRY_RUN")]
    dry_run: bool,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose)?;

    let config = Config::builder()
        .root_dir(cli.dir)
        .output_file(cli.out)
        .prefix(cli.prefix)
        .icon_width(cli.width)
        .icon_height(cli.height)
        .marker(cli.marker)
        .extension(cli.ext)
        .indent(cli.indent)
        .strict(cli.strict)
        .backup_existing(cli.backup)
        .dry_run(cli.dry_run)
        .build()
        .context("Failed to build configuration")?;

    let stats = Pipeline::new(config)
        .context("Failed to create pipeline")?
        .run()
        .context("Icon pack generation failed")?;

    stats.print_summary();

    Ok(())
}

fn setup_tracing(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => EnvFilter::new("iconpack=info"),
        1 => EnvFilter::new("iconpack=debug"),
        _ => EnvFilter::new("iconpack=trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_thread_ids(false))
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
