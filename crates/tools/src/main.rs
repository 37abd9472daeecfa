use std::num::NonZeroU32;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use feed::{DEFAULT_ENDPOINT, FeedClient, FeedQuery, SeismicEvent};
use foundation::math::{FOCUS_RADIUS, MARKER_RADIUS, geodesy};
use panels::{PanelPresenter, RecordingSurface, TimeDisplay};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tools::report::{detail_card, list_table};

/// Recent earthquakes from the terminal.
#[derive(Debug, Parser)]
#[command(name = "quakes", version)]
struct Cli {
    /// Event feed query endpoint.
    #[arg(long, env = "QUAKES_ENDPOINT", default_value = DEFAULT_ENDPOINT, global = true)]
    endpoint: String,

    /// Print times in UTC instead of the local zone.
    #[arg(long, global = true)]
    utc: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct FeedArgs {
    /// Maximum number of events, newest first.
    #[arg(long, default_value_t = NonZeroU32::new(20).unwrap_or(NonZeroU32::MIN))]
    limit: NonZeroU32,

    /// Minimum magnitude.
    #[arg(long = "min-mag", default_value_t = 2.5)]
    min_mag: f64,
}

impl FeedArgs {
    fn query(&self) -> FeedQuery {
        FeedQuery::new(self.limit, self.min_mag)
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List recent events.
    List {
        #[command(flatten)]
        feed: FeedArgs,
        /// Emit the decoded events as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show the detail card of one event from the list.
    Show {
        /// Position in the list, starting at 0.
        index: usize,
        #[command(flatten)]
        feed: FeedArgs,
    },
    /// Project a coordinate onto the globe.
    Project {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        #[arg(long, default_value_t = MARKER_RADIUS)]
        radius: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let time_display = if cli.utc {
        TimeDisplay::utc()
    } else {
        TimeDisplay::Local
    };
    let mut presenter =
        PanelPresenter::with_time_display(RecordingSurface::default(), time_display);

    match cli.command {
        Command::List { feed, json } => {
            let events = fetch(&cli.endpoint, &feed).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else {
                presenter.list_all(&events);
                print!("{}", list_table(&presenter.surface().list));
            }
        }
        Command::Show { index, feed } => {
            let events = fetch(&cli.endpoint, &feed).await?;
            let Some(event) = events.get(index) else {
                bail!("no event at index {index} ({} fetched)", events.len());
            };
            presenter.present(event);
            print!("{}", detail_card(presenter.surface()));
            if let Some((lat, lon)) = event.coordinates() {
                let eye = geodesy::project(lat, lon, FOCUS_RADIUS);
                println!("Camera:    ({:.4}, {:.4}, {:.4})", eye.x, eye.y, eye.z);
            }
        }
        Command::Project { lat, lon, radius } => {
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                bail!("coordinate out of range: lat {lat}, lon {lon}");
            }
            let p = geodesy::project(lat, lon, radius);
            println!("{:.6} {:.6} {:.6}", p.x, p.y, p.z);
            if let Some((back_lat, back_lon)) = geodesy::unproject(p) {
                info!(lat = back_lat, lon = back_lon, "round trip");
            }
        }
    }
    Ok(())
}

async fn fetch(endpoint: &str, args: &FeedArgs) -> anyhow::Result<Vec<SeismicEvent>> {
    let client = FeedClient::new(endpoint);
    let query = args.query();
    let events = client
        .fetch(&query)
        .await
        .with_context(|| format!("fetching {}", query.url(endpoint)))?;
    info!(count = events.len(), "fetched events");
    Ok(events)
}
