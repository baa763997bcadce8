use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use sha2::Digest as _;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dailylift-assets", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the icon set (icon, adaptive icon, splash icon, favicon).
    Icons(IconsArgs),
    /// Render the store-listing screenshots and feature graphic.
    StoreListing(StoreListingArgs),
    /// Render the icon set and the store listing.
    All(AllArgs),
    /// Render a single shareable quote card.
    Card(CardArgs),
}

#[derive(Args, Debug)]
struct ConfigArg {
    /// Generator config JSON. Missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct IconsArgs {
    #[command(flatten)]
    config: ConfigArg,

    /// Output directory (overrides `icons_dir`).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct StoreListingArgs {
    #[command(flatten)]
    config: ConfigArg,

    /// Output root; screenshots go to `<out>/screenshots`.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Render screenshots in parallel.
    #[arg(long)]
    parallel: bool,

    /// Print diagnostics about font resolution (source, family name + SHA-256 of font bytes).
    #[arg(long)]
    dump_fonts: bool,
}

#[derive(Parser, Debug)]
struct AllArgs {
    #[command(flatten)]
    config: ConfigArg,

    /// Render screenshots in parallel.
    #[arg(long)]
    parallel: bool,
}

#[derive(Parser, Debug)]
struct CardArgs {
    #[command(flatten)]
    config: ConfigArg,

    /// Quote index in the app library (0-based).
    #[arg(long)]
    quote: usize,

    /// Palette index in the app library (0-based).
    #[arg(long, default_value_t = 0)]
    palette: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Icons(args) => cmd_icons(args),
        Command::StoreListing(args) => cmd_store_listing(args),
        Command::All(args) => cmd_all(args),
        Command::Card(args) => cmd_card(args),
    }
}

fn load_config(arg: &ConfigArg) -> anyhow::Result<dailylift_assets::GeneratorConfig> {
    match &arg.config {
        Some(path) => dailylift_assets::GeneratorConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display())),
        None => Ok(dailylift_assets::GeneratorConfig::default()),
    }
}

fn cmd_icons(args: IconsArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let out = args.out.unwrap_or(cfg.icons_dir);
    let written = dailylift_assets::generate_icons(&out)?;
    report(&written);
    Ok(())
}

fn cmd_store_listing(args: StoreListingArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.config)?;
    if let Some(out) = &args.out {
        cfg.screenshots_dir = out.join("screenshots");
        cfg.listing_dir = out.clone();
    }
    cfg.parallel |= args.parallel;

    if args.dump_fonts {
        dump_font_diagnostics(&cfg.fonts)?;
    }

    let written = dailylift_assets::generate_store_listing(&cfg)?;
    report(&written);
    Ok(())
}

fn cmd_all(args: AllArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.config)?;
    cfg.parallel |= args.parallel;

    let mut written = dailylift_assets::generate_icons(&cfg.icons_dir)?;
    written.extend(dailylift_assets::generate_store_listing(&cfg)?);
    report(&written);
    Ok(())
}

fn cmd_card(args: CardArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let written = dailylift_assets::generate_card(&cfg.fonts, args.quote, args.palette, &args.out)?;
    report(std::slice::from_ref(&written));
    Ok(())
}

fn report(written: &[dailylift_assets::WrittenFile]) {
    for f in written {
        eprintln!("wrote {} ({}x{})", f.path.display(), f.width, f.height);
    }
}

fn dump_font_diagnostics(fonts: &dailylift_assets::FontConfig) -> anyhow::Result<()> {
    let mut engine = dailylift_assets::TextEngine::new();
    let books = [
        (
            "screenshot",
            dailylift_assets::FontBook::screenshot(&mut engine, fonts),
        ),
        (
            "feature_graphic",
            dailylift_assets::FontBook::feature_graphic(&mut engine, fonts),
        ),
    ];

    eprintln!("text font diagnostics:");
    for (name, book) in &books {
        eprintln!("  {name}:");
        for (role, face) in book.iter() {
            eprintln!("    {}:", role.name());
            eprintln!("      font_source: {}", face.source());
            eprintln!("      size_px:     {}", face.size_px());
            if let Some(family) = face.family() {
                eprintln!("      family:      {family}");
            }
            if let Some(bytes) = face.font_bytes() {
                eprintln!("      sha256:      {}", sha256_hex(bytes));
            }
        }
    }

    warn_missing_font_dir(&fonts.dir);
    Ok(())
}

fn warn_missing_font_dir(dir: &Path) {
    if !dir.is_dir() {
        tracing::warn!(dir = %dir.display(), "font directory not found, using builtin bitmap face");
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
