use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use pixelset::{
    BreakpointTransform, ImageSource, LayoutMode, LocalPipelineTransform, PixelsetConfig,
    PostIndex, PresentationHints, RemoteUrlTransform, Resolver,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pixelset", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve `<img>` attributes for one image request (JSON on stdout).
    Resolve(ResolveArgs),
    /// Print the breakpoints a layout would use.
    Breakpoints(BreakpointsArgs),
    /// List published posts, optionally filtered and paginated.
    Posts(PostsArgs),
    /// Rank posts related to one post.
    Related(RelatedArgs),
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Request JSON: `{ "image": ..., "layout": ..., "hints": {...} }`.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Settings JSON. Relative pipeline paths resolve against its directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Breakpoint transform to use.
    #[arg(long, value_enum, default_value_t = TransformChoice::Auto)]
    transform: TransformChoice,
}

#[derive(Parser, Debug)]
struct BreakpointsArgs {
    /// Layout mode (fixed, constrained, fullWidth, cover, responsive, contained).
    #[arg(long, value_parser = parse_layout)]
    layout: LayoutMode,

    /// Declared width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Candidate widths, comma separated.
    #[arg(long, value_delimiter = ',')]
    widths: Option<Vec<u32>>,
}

#[derive(Parser, Debug)]
struct PostsArgs {
    /// Posts JSON (array of posts).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Only posts in this category.
    #[arg(long, conflicts_with = "tag")]
    category: Option<String>,

    /// Only posts with this tag.
    #[arg(long)]
    tag: Option<String>,

    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Posts per page.
    #[arg(long, default_value_t = 10)]
    per_page: usize,
}

#[derive(Parser, Debug)]
struct RelatedArgs {
    /// Posts JSON (array of posts).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Slug of the post to find relatives for.
    #[arg(long)]
    slug: String,

    /// Maximum number of related posts.
    #[arg(long, default_value_t = 3)]
    limit: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TransformChoice {
    /// No srcset.
    None,
    /// Site-local image pipeline.
    Local,
    /// CDN URL rewriting.
    Remote,
    /// Remote for absolute http(s) URLs, local otherwise.
    Auto,
}

#[derive(Debug, serde::Deserialize)]
struct ResolveRequest {
    image: ImageSource,
    layout: LayoutMode,
    #[serde(default)]
    hints: PresentationHints,
}

fn parse_layout(s: &str) -> Result<LayoutMode, String> {
    LayoutMode::parse(s).ok_or_else(|| format!("unknown layout '{s}'"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args),
        Command::Breakpoints(args) => cmd_breakpoints(args),
        Command::Posts(args) => cmd_posts(args),
        Command::Related(args) => cmd_related(args),
    }
}

fn read_request_json(path: &Path) -> anyhow::Result<ResolveRequest> {
    let f = File::open(path).with_context(|| format!("open request '{}'", path.display()))?;
    let r = BufReader::new(f);
    let req: ResolveRequest =
        serde_json::from_reader(r).with_context(|| "parse request JSON")?;
    Ok(req)
}

fn load_config(args: &ResolveArgs) -> anyhow::Result<PixelsetConfig> {
    let (cfg, base) = match &args.config {
        Some(path) => (
            PixelsetConfig::from_path(path)?,
            path.parent().unwrap_or_else(|| Path::new(".")),
        ),
        None => (
            PixelsetConfig::default(),
            args.in_path.parent().unwrap_or_else(|| Path::new(".")),
        ),
    };
    Ok(cfg.rebase(base))
}

fn make_transform(
    choice: TransformChoice,
    image: &ImageSource,
    cfg: &PixelsetConfig,
) -> anyhow::Result<Option<Box<dyn BreakpointTransform>>> {
    let choice = match choice {
        TransformChoice::Auto if image.is_remote() => TransformChoice::Remote,
        TransformChoice::Auto => TransformChoice::Local,
        other => other,
    };
    let transform: Box<dyn BreakpointTransform> = match choice {
        TransformChoice::Remote if cfg.remote.enabled => Box::new(RemoteUrlTransform::new()),
        TransformChoice::Local => Box::new(LocalPipelineTransform::new(cfg.local.clone())?),
        _ => return Ok(None),
    };
    Ok(Some(transform))
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let req = read_request_json(&args.in_path)?;
    let cfg = load_config(&args)?;
    let resolver = Resolver::new(cfg.resolver.clone())?;
    let transform = make_transform(args.transform, &req.image, &cfg)?;

    let rt = tokio::runtime::Runtime::new().context("start async runtime")?;
    let resolved = rt.block_on(resolver.resolve(
        &req.image,
        req.layout,
        &req.hints,
        transform.as_deref(),
    ))?;

    if let Some(d) = &resolved.diagnostic {
        eprintln!("warning: {d}");
    }
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}

fn cmd_breakpoints(args: BreakpointsArgs) -> anyhow::Result<()> {
    let out = pixelset::resolve_breakpoints(args.width, args.widths.as_deref(), args.layout);
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}

fn cmd_posts(args: PostsArgs) -> anyhow::Result<()> {
    let index = PostIndex::from_path(&args.in_path)?;
    let posts = match (&args.category, &args.tag) {
        (Some(c), _) => index.by_category(c),
        (None, Some(t)) => index.by_tag(t),
        (None, None) => index.published(),
    };
    let page = pixelset::paginate(&posts, args.page, args.per_page)?;
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}

fn cmd_related(args: RelatedArgs) -> anyhow::Result<()> {
    let index = PostIndex::from_path(&args.in_path)?;
    let related = index.related(&args.slug, args.limit)?;
    println!("{}", serde_json::to_string_pretty(&related)?);
    Ok(())
}
