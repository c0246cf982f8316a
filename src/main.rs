use clap::{Parser, Subcommand, ValueEnum};
use rental_scout::config::Config;
use rental_scout::models::{Property, User, UserRole};
use rental_scout::search::{CriteriaForm, SearchSession, SortOrder};
use rental_scout::session::Session;
use rental_scout::storage::LocalStore;
use rental_scout::transactions::TransactionBook;
use rental_scout::{display, listings};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rental-scout")]
#[command(about = "Search rental listings and inspect transactions")]
struct Args {
    /// Result order: newest, price-low, price-high or verified
    #[arg(long, global = true)]
    sort: Option<SortOrder>,

    /// Also write the shown listings to this JSON file
    #[arg(long, global = true)]
    export: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every listing
    List,
    /// Filter listings with the advanced search criteria
    Search(SearchArgs),
    /// Match a keyword against title, location and property type
    Quick {
        #[arg(default_value = "")]
        query: String,
    },
    /// Show one transaction by id
    Transaction { id: String },
    /// Remember a user in the local store
    Login {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, value_enum)]
        role: RoleArg,
    },
    /// Forget the stored user
    Logout,
    Whoami,
}

/// Numeric fields stay strings so typos are coerced the way the web form does
#[derive(clap::Args)]
struct SearchArgs {
    #[arg(long, default_value = "")]
    location: String,
    #[arg(long, default_value = "")]
    min_price: String,
    #[arg(long, default_value = "")]
    max_price: String,
    #[arg(long = "type", default_value = "")]
    property_type: String,
    #[arg(long, default_value = "")]
    bedrooms: String,
    #[arg(long, default_value = "")]
    bathrooms: String,
    #[arg(long, default_value = "")]
    min_area: String,
    #[arg(long, default_value = "")]
    max_area: String,
    /// Required amenity; repeat for several
    #[arg(long = "amenity")]
    amenities: Vec<String>,
    #[arg(long)]
    verified_only: bool,
    #[arg(long)]
    available_now: bool,
}

impl From<SearchArgs> for CriteriaForm {
    fn from(args: SearchArgs) -> Self {
        CriteriaForm {
            location: args.location,
            min_price: args.min_price,
            max_price: args.max_price,
            property_type: args.property_type,
            bedrooms: args.bedrooms,
            bathrooms: args.bathrooms,
            min_area: args.min_area,
            max_area: args.max_area,
            amenities: args.amenities,
            verified_only: args.verified_only,
            available_now: args.available_now,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Tenant,
    Landlord,
}

impl From<RoleArg> for UserRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Tenant => UserRole::Tenant,
            RoleArg::Landlord => UserRole::Landlord,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so listing output can be piped
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let mut store = LocalStore::open(&config.store_path).await?;
    info!("🏠 Rental Scout (store: {})", store.path().display());

    match args.command {
        Command::List => {
            let mut session = SearchSession::new(listings::load_catalog(&config).await?);
            show(&mut session, args.sort, args.export.as_deref()).await?;
        }
        Command::Search(search_args) => {
            let criteria = CriteriaForm::from(search_args).into_criteria();
            let mut session = SearchSession::new(listings::load_catalog(&config).await?);
            session.search(&criteria);
            show(&mut session, args.sort, args.export.as_deref()).await?;
        }
        Command::Quick { query } => {
            let mut session = SearchSession::new(listings::load_catalog(&config).await?);
            session.quick_search(&query);
            if !session.query().is_empty() {
                info!("Quick search for '{}'", session.query());
            }
            show(&mut session, args.sort, args.export.as_deref()).await?;
        }
        Command::Transaction { id } => {
            let user = Session::new(&mut store).current_user();
            let book = TransactionBook::load(&store, user.as_ref())?;
            let catalog = listings::load_catalog(&config).await?;
            let lookup = book.lookup(&id, &catalog);
            print!("{}", display::transaction_lookup(&lookup));
        }
        Command::Login { name, email, role } => {
            let user = User {
                name,
                email,
                role: Some(role.into()),
            };
            Session::new(&mut store).login(user).await?;
            println!("Logged in.");
        }
        Command::Logout => {
            Session::new(&mut store).logout().await?;
            println!("Logged out.");
        }
        Command::Whoami => match Session::new(&mut store).current_user() {
            Some(user) => println!(
                "{} <{}>{}",
                user.name,
                user.email,
                user.role
                    .map(|r| format!(" ({:?})", r).to_lowercase())
                    .unwrap_or_default()
            ),
            None => println!("Not logged in."),
        },
    }

    Ok(())
}

async fn show(
    session: &mut SearchSession,
    sort: Option<SortOrder>,
    export: Option<&Path>,
) -> anyhow::Result<()> {
    if let Some(order) = sort {
        session.sort(order);
    }

    println!("{}\n", session.summary());
    print!("{}", display::property_list(session.shown()));

    if let Some(path) = export {
        save_listings(path, session.shown()).await?;
    }
    Ok(())
}

async fn save_listings(path: &Path, properties: &[Property]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(properties)?;
    tokio::fs::write(path, json).await?;
    info!("💾 Saved {} listings to {}", properties.len(), path.display());
    Ok(())
}
