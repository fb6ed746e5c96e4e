use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "carousel", version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Compositor configuration JSON. Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the font files. Overrides the configuration.
    #[arg(long, global = true)]
    fonts_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the branded headline slide.
    Headline(HeadlineArgs),
    /// Draw a title and body over a background image.
    Overlay(OverlayArgs),
    /// Render every slide and the caption of one post from a strategy JSON.
    Post(PostArgs),
}

#[derive(Parser, Debug)]
struct HeadlineArgs {
    /// Headline text.
    #[arg(long)]
    text: String,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct OverlayArgs {
    /// Background raster.
    #[arg(long)]
    background: PathBuf,

    /// Title text.
    #[arg(long, default_value = "")]
    title: String,

    /// Body text.
    #[arg(long, default_value = "")]
    body: String,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PostArgs {
    /// Content strategy JSON.
    #[arg(long)]
    strategy: PathBuf,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// Directory of pre-generated `bg_NN.png` backgrounds. Flat gray backgrounds when omitted.
    #[arg(long)]
    backgrounds: Option<PathBuf>,

    /// Post number used in file names.
    #[arg(long, default_value_t = 1)]
    post: usize,

    /// Write into `<out-dir>/output_<STAMP>` instead of `<out-dir>`.
    #[arg(long)]
    stamp: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carousel=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = load_config(&cli.global)?;
    match cli.cmd {
        Command::Headline(args) => cmd_headline(&cfg, args),
        Command::Overlay(args) => cmd_overlay(&cfg, args),
        Command::Post(args) => cmd_post(&cfg, args),
    }
}

fn load_config(global: &GlobalArgs) -> anyhow::Result<carousel::CompositorConfig> {
    let mut cfg = match &global.config {
        Some(path) => carousel::CompositorConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => carousel::CompositorConfig::default(),
    };
    if let Some(dir) = &global.fonts_dir {
        cfg.fonts_dir = dir.clone();
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_headline(cfg: &carousel::CompositorConfig, args: HeadlineArgs) -> anyhow::Result<()> {
    let renderer = carousel::BrandedSlideRenderer::from_config(cfg)?;
    renderer
        .try_render(&args.text, &args.out)
        .with_context(|| format!("render headline slide '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_overlay(cfg: &carousel::CompositorConfig, args: OverlayArgs) -> anyhow::Result<()> {
    let compositor = carousel::OverlayCompositor::from_config(cfg);
    compositor
        .try_render(&args.background, &args.title, &args.body, &args.out)
        .with_context(|| format!("render overlay slide '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_post(cfg: &carousel::CompositorConfig, args: PostArgs) -> anyhow::Result<()> {
    let strategy = carousel::ContentStrategy::from_path(&args.strategy)
        .with_context(|| format!("load strategy '{}'", args.strategy.display()))?;
    for index in strategy.empty_slides() {
        eprintln!("note: slide {} has no title or text", index + 2);
    }

    let out_dir = match &args.stamp {
        Some(stamp) => carousel::create_output_folder(&args.out_dir, stamp)?,
        None => args.out_dir.clone(),
    };

    let builder = carousel::CarouselBuilder::from_config(cfg)?;
    let report = match &args.backgrounds {
        Some(dir) => {
            let mut source = carousel::DirectoryBackgrounds::new(dir);
            builder.render_post(&strategy, args.post, &out_dir, &mut source)?
        }
        None => {
            let mut source = carousel::SolidBackground::default();
            builder.render_post(&strategy, args.post, &out_dir, &mut source)?
        }
    };

    for slide in &report.slides {
        eprintln!("wrote {}", slide.display());
    }
    for failure in &report.failures {
        eprintln!(
            "skipped slide {:02} ({}): {}",
            failure.index, failure.kind, failure.message
        );
    }
    match (&report.caption, &report.caption_error) {
        (Some(path), _) => eprintln!("wrote {}", path.display()),
        (None, Some(err)) => eprintln!("caption not written: {err}"),
        (None, None) => {}
    }
    Ok(())
}
