use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ares::assistant::KnowledgeBase;
use ares::config::ServerConfig;
use ares::models::{RecommendInput, RocketGeometryParams};
use ares::{api, optimizer, visualizer, AresError};

#[derive(Parser)]
#[command(name = "ares")]
#[command(about = "AI rocket and habitat design assistant")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the ARES web server
    Serve {
        /// Port for HTTP API (overrides ARES_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Bind address (overrides ARES_HOST)
        #[arg(long)]
        host: Option<String>,
    },
    /// Ask the knowledge assistant a question
    Ask {
        /// Question text
        query: Vec<String>,
    },
    /// Recommend a habitat layout for the given mission parameters
    Recommend {
        #[arg(long, default_value_t = 4)]
        crew_size: u32,

        /// Cylinder radius in meters
        #[arg(long, default_value_t = 4.0)]
        radius: f64,

        /// Target NHV utilization in percent
        #[arg(long, default_value_t = 95)]
        nhv_target: u32,
    },
    /// Print rocket geometry as JSON
    Rocket {
        #[command(flatten)]
        params: RocketArgs,

        /// Print a Plotly figure instead of raw geometry
        #[arg(long)]
        figure: bool,
    },
}

#[derive(Args)]
struct RocketArgs {
    #[arg(long, default_value_t = 10.0)]
    height: f64,
    #[arg(long, default_value_t = 1.0)]
    body_radius: f64,
    #[arg(long, default_value_t = 2.0)]
    nose_height: f64,
    #[arg(long, default_value_t = 3)]
    fin_count: u32,
    #[arg(long, default_value_t = 0.5)]
    fin_height: f64,
    #[arg(long, default_value_t = 0.5)]
    flame_radius: f64,
    #[arg(long, default_value_t = 1.0)]
    flame_height: f64,
}

impl From<RocketArgs> for RocketGeometryParams {
    fn from(args: RocketArgs) -> Self {
        Self {
            height: args.height,
            body_radius: args.body_radius,
            nose_height: args.nose_height,
            fin_count: args.fin_count,
            fin_height: args.fin_height,
            flame_radius: args.flame_radius,
            flame_height: args.flame_height,
        }
    }
}

/// Initialize tracing with output to stderr (for one-shot commands) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "ares=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // One-shot commands print results on stdout
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting ARES server on {}", config.bind_addr());

    let app = api::create_router(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("ARES server listening on http://{}", config.bind_addr());

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = !matches!(cli.command, None | Some(Commands::Serve { .. }));
    init_tracing(use_stderr);

    let mut config = ServerConfig::from_env();

    match cli.command {
        Some(Commands::Serve { port, host }) => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            serve(config).await?;
        }
        Some(Commands::Ask { query }) => match KnowledgeBase::default().answer(&query.join(" ")) {
            Ok(reply) => println!("{}", reply.answer),
            Err(AresError::MissingQuery) => eprintln!("{}", AresError::MissingQuery),
            Err(e) => return Err(e.into()),
        },
        Some(Commands::Recommend {
            crew_size,
            radius,
            nhv_target,
        }) => {
            let input = RecommendInput {
                crew_size,
                radius,
                nhv_target,
            };
            let recommendation = optimizer::recommend(&config.optimizer, &input)?;
            print!("{}", optimizer::report::render_report(&recommendation));
        }
        Some(Commands::Rocket { params, figure }) => {
            let geometry = visualizer::render(&params.into())?;
            let json = if figure {
                serde_json::to_string_pretty(&visualizer::to_figure(&geometry))?
            } else {
                serde_json::to_string_pretty(&geometry)?
            };
            println!("{}", json);
        }
        None => {
            // Default: start server
            serve(config).await?;
        }
    }

    Ok(())
}
