use std::{
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
};

use clap::{
    Parser,
    Subcommand,
};
use folio::{
    config::SiteConfig,
    core::FolioError,
    logging,
    render::Site,
    server,
    view::detail::DetailPage,
};
use tracing::{
    error,
    info,
};

/// Static portfolio site generator and preview server.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Configuration file (.hjson or .json); defaults to ./folio.hjson when present
    #[arg(short, long, global = true, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every page into the output directory
    Build {
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Serve the site locally, rendering pages per request
    Serve {
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print every project slug in catalog order
    List {
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Validate the data file and plan every project page
    Check {
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), FolioError> {
    let mut config = SiteConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Build { data, out } => {
            apply_data(&mut config, data);
            if let Some(out) = out {
                config.output_dir = out;
            }
            let site = Site::load(config)?;
            let manifest = site.build(&site.config.output_dir)?;
            info!(
                "Wrote {} pages and copied {} files to {}",
                manifest.pages.len(),
                manifest.files_copied,
                site.config.output_dir.display()
            );
        }
        Command::Serve { data, host, port } => {
            apply_data(&mut config, data);
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let addr = config.bind_address();
            let site = Arc::new(Site::load(config)?);
            server::serve(site, &addr).await?;
        }
        Command::List { data } => {
            apply_data(&mut config, data);
            let site = Site::load(config)?;
            for project in site.catalog.projects() {
                let marker = if site.curation.is_hidden(&project.slug) { " (hidden)" } else { "" };
                println!("{}{}", project.slug, marker);
            }
        }
        Command::Check { data } => {
            apply_data(&mut config, data);
            let site = Site::load(config)?;
            for slug in site.catalog.slugs() {
                let page = DetailPage::resolve(&site.catalog, slug)?;
                info!("{}: {}", slug, page.section_titles().join(", "));
            }
            let visible = site.curation.visible(&site.catalog);
            info!(
                "{} projects valid, {} shown on the home page",
                site.catalog.len(),
                visible.len()
            );
        }
    }
    Ok(())
}

fn apply_data(config: &mut SiteConfig, data: Option<PathBuf>) {
    if let Some(data) = data {
        config.data_file = data;
    }
}
