mod state;

use clap::{Parser, Subcommand, ValueEnum};

use ecoponto_core::{load_app_config, WasteCategory};
use ecoponto_places::CityResolver;

use crate::state::{CitySearchOutcome, SearchState, ViewMode};

#[derive(Debug, Parser)]
#[command(name = "ecoponto-cli")]
#[command(about = "Encontre pontos de coleta de lixo eletrônico")]
struct Cli {
    /// Emit results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output layout: `map` prints the map center plus one marker line per
/// location, `list` prints full cards.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewArg {
    Map,
    List,
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Map => ViewMode::Map,
            ViewArg::List => ViewMode::List,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every disposal point in the seed dataset
    List {
        #[arg(long, value_enum, default_value_t = ViewArg::List)]
        view: ViewArg,
    },
    /// Print the closed set of waste categories and their CLI slugs
    Categories,
    /// Filter the seed dataset by free text and/or categories
    Search {
        /// Free-text query (matches name, address, materials, description)
        query: Option<String>,

        /// Category slug (e.g. "pilhas"); repeat to select several
        #[arg(long = "category", value_name = "SLUG")]
        categories: Vec<WasteCategory>,

        #[arg(long, value_enum, default_value_t = ViewArg::List)]
        view: ViewArg,
    },
    /// Replace the dataset with geocoded results for a city, then filter
    City {
        /// City name, e.g. "Itajaí"
        name: String,

        /// Free-text query applied to the resolved dataset
        #[arg(long)]
        query: Option<String>,

        /// Category slug; repeat to select several
        #[arg(long = "category", value_name = "SLUG")]
        categories: Vec<WasteCategory>,

        #[arg(long, value_enum, default_value_t = ViewArg::Map)]
        view: ViewArg,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List { view } => {
            let mut state = SearchState::new();
            state.set_view_mode(view.into());
            render_results(&state, cli.json)?;
        }
        Commands::Categories => {
            for category in WasteCategory::ALL {
                println!("{:<18} {}", category.slug(), category.label());
            }
        }
        Commands::Search {
            query,
            categories,
            view,
        } => {
            let state = build_state(query, categories, view);
            render_results(&state, cli.json)?;
        }
        Commands::City {
            name,
            query,
            categories,
            view,
        } => {
            let config = load_app_config()?;
            let resolver = CityResolver::new(&config)?;
            let mut state = build_state(query, categories, view);

            match state.run_city_search(&resolver, &name).await {
                Ok(CitySearchOutcome::NoResults) => {
                    println!("Nenhum ponto de coleta encontrado em {name}.");
                }
                Ok(_) => {}
                Err(error) => {
                    eprintln!(
                        "Busca remota falhou: {error}. Exibindo os pontos de coleta de Penha, SC."
                    );
                }
            }
            render_results(&state, cli.json)?;
        }
    }

    Ok(())
}

fn build_state(
    query: Option<String>,
    categories: Vec<WasteCategory>,
    view: ViewArg,
) -> SearchState {
    let mut state = SearchState::new();
    if let Some(query) = query {
        state.set_text_query(query);
    }
    for category in categories {
        state.toggle_category(category);
    }
    state.set_view_mode(view.into());
    state
}

fn render_results(state: &SearchState, json: bool) -> anyhow::Result<()> {
    debug_assert!(!state.is_busy(), "render only after a search has settled");
    tracing::debug!(
        query = state.text_query(),
        categories = ?state.selected_categories(),
        active = state.active_locations().len(),
        "rendering filtered locations"
    );

    let locations = state.filtered_locations();

    if json {
        println!("{}", serde_json::to_string_pretty(&locations)?);
        return Ok(());
    }

    if locations.is_empty() {
        println!("Nenhum local encontrado.");
        return Ok(());
    }

    let label = if locations.len() == 1 {
        "local encontrado"
    } else {
        "locais encontrados"
    };
    println!("{} {label}", locations.len());

    match state.view_mode() {
        ViewMode::Map => {
            let center = state.map_center();
            println!("Centro do mapa: {:.4}, {:.4}", center.lat, center.lng);
            for location in &locations {
                println!(
                    "  ({:.4}, {:.4}) [{}] {}",
                    location.coordinates.lat,
                    location.coordinates.lng,
                    location.id,
                    location.name
                );
            }
        }
        ViewMode::List => {
            for location in &locations {
                println!();
                println!("[{}] {}", location.id, location.name);
                println!("  {}", location.address);
                println!("  {}", location.opening_hours);
                if let Some(phone) = &location.phone {
                    println!("  Telefone: {phone}");
                }
                println!(
                    "  Materiais aceitos: {}",
                    location.accepted_materials.join(", ")
                );
                println!(
                    "  Categorias: {}",
                    location
                        .categories
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                println!("  {}", location.description);
            }
        }
    }

    Ok(())
}
