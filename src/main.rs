use anyhow::{Context, Result, bail};
use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

use mindfield::client::QueryClient;
use mindfield::config::AtlasConfig;
use mindfield::dispatch::{self, OutputContent, OutputRegion, RenderContext, StatusRegion};
use mindfield::model::QueryRequest;
use mindfield::response;
use mindfield::svg::SvgSurface;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render MindField bridge responses as text, HTML or SVG", long_about = None)]
struct Cli {
    /// Configuration file (TOML). Missing file means defaults.
    #[arg(short, long, value_name = "FILE", default_value = "mindfield.toml")]
    config: Utf8PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send a query to the bridge and render the answer
    Query {
        /// Free-text query
        #[arg(value_name = "TEXT")]
        text: String,

        /// API base URL, e.g. http://127.0.0.1:5050
        #[arg(long)]
        api_base: Option<String>,

        #[command(flatten)]
        out: OutputArgs,
    },
    /// Render a saved response body
    Render {
        /// JSON response file
        #[arg(value_name = "RESPONSE_JSON")]
        file: Utf8PathBuf,

        #[command(flatten)]
        out: OutputArgs,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Write the constellation as SVG
    #[arg(long, value_name = "FILE")]
    svg: Option<Utf8PathBuf>,

    /// Write the output region markup as HTML
    #[arg(long, value_name = "FILE")]
    html: Option<Utf8PathBuf>,

    /// Surface width in pixels
    #[arg(long)]
    width: Option<f64>,

    /// Surface height in pixels
    #[arg(long)]
    height: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut config = AtlasConfig::load_from(&cli.config)
        .with_context(|| format!("Failed to load config {}", cli.config))?;

    let (result, out) = match cli.command {
        Command::Query {
            text,
            api_base,
            out,
        } => {
            if api_base.is_some() {
                config.api_base = api_base;
            }
            let Some(request) = QueryRequest::from_input(&text) else {
                bail!("Query is empty");
            };
            let client = QueryClient::from_config(&config).context("Failed to build client")?;
            (client.query(&request), out)
        }
        Command::Render { file, out } => {
            let body =
                std::fs::read_to_string(&file).with_context(|| format!("Open {}", file))?;
            (response::decode(&body), out)
        }
    };

    if let Some(width) = out.width {
        config.surface.width = width;
    }
    if let Some(height) = out.height {
        config.surface.height = height;
    }
    let style = config.constellation_style()?;

    let mut status = StatusRegion::new();
    let mut output = OutputRegion::new();
    let mut surface = SvgSurface::new(config.surface);
    let summary = {
        let mut ctx = RenderContext::new(&mut status, &mut output, &mut surface).with_style(&style);
        dispatch::begin_query(&mut ctx);
        dispatch::complete(result, &mut ctx)
    };

    eprintln!("{}", status.text());
    match output.content() {
        OutputContent::Empty => {}
        OutputContent::Formatted { fragments, .. } => {
            for fragment in fragments {
                println!("{}", fragment.text);
            }
        }
        OutputContent::Message(message) => println!("{message}"),
    }
    if let Some(path) = &out.html {
        std::fs::write(path, output.html()).with_context(|| format!("Write {}", path))?;
    }

    let Some(summary) = summary else {
        bail!("Query failed");
    };
    if summary.drew_surface() {
        println!("{} points, {} edges", summary.points, summary.edges);
        if let Some(path) = &out.svg {
            std::fs::write(path, surface.finish()).with_context(|| format!("Write {}", path))?;
        }
    } else if let Some(path) = &out.svg {
        log::warn!("text response has no constellation; {path} not written");
    }
    Ok(())
}
