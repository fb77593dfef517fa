//! Portfolio Projection CLI
//!
//! Command-line interface for projecting a portfolio month by month

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use portfolio_projection::{
    params::{validate, RawParams},
    projection::ProjectionEngine,
    report::{self, ChartData, ReportConfig},
    state::{StateStore, Theme},
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "portfolio-projection",
    about = "Monthly projection of an investment portfolio with contributions, fees and inflation"
)]
struct Cli {
    /// State file holding the last parameters and theme
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a projection; omitted values come from the saved state
    Project(ProjectArgs),
    /// Set the display theme
    Theme {
        #[arg(value_enum)]
        theme: Theme,
    },
    /// Print the saved state
    State,
}

#[derive(Args, Debug)]
struct ProjectArgs {
    #[arg(long)]
    initial_capital: Option<f64>,
    #[arg(long)]
    monthly_contribution: Option<f64>,
    #[arg(long, allow_hyphen_values = true, help = "Gross annual return in percent, e.g. 7")]
    gross_annual_return: Option<f64>,
    #[arg(long, help = "Annual fee (TER) in percent, e.g. 0.2")]
    annual_fee: Option<f64>,
    #[arg(long, help = "Annual inflation in percent")]
    annual_inflation: Option<f64>,
    #[arg(long, help = "Horizon in whole years, 1 to 50")]
    years: Option<f64>,

    /// Table page to show
    #[arg(long, default_value_t = 1)]
    page: usize,
    /// Months per table page
    #[arg(long)]
    page_size: Option<usize>,
    /// Export the full series as CSV
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Print the projection as JSON instead of tables
    #[arg(long)]
    json: bool,
    /// Draw a text chart of contributed vs. total value
    #[arg(long)]
    chart: bool,
    /// Save these parameters for the next run
    #[arg(long)]
    save: bool,
}

impl ProjectArgs {
    fn merge(&self, saved: RawParams) -> RawParams {
        RawParams {
            initial_capital: self.initial_capital.unwrap_or(saved.initial_capital),
            monthly_contribution: self.monthly_contribution.unwrap_or(saved.monthly_contribution),
            gross_annual_return: self.gross_annual_return.unwrap_or(saved.gross_annual_return),
            annual_fee: self.annual_fee.unwrap_or(saved.annual_fee),
            annual_inflation: self.annual_inflation.unwrap_or(saved.annual_inflation),
            years: self.years.unwrap_or(saved.years),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let store = cli.state.clone().map(StateStore::new).unwrap_or_else(StateStore::from_env);

    match cli.command {
        Command::Project(args) => run_project(&store, &args),
        Command::Theme { theme } => {
            store
                .save_theme(theme)
                .with_context(|| format!("failed to save theme to {}", store.path().display()))?;
            println!("Theme set to {:?}", theme);
            Ok(())
        }
        Command::State => {
            let state = store.load();
            println!("{}", serde_json::to_string_pretty(&state)?);
            Ok(())
        }
    }
}

fn run_project(store: &StateStore, args: &ProjectArgs) -> Result<()> {
    let saved = store.load();
    let raw = args.merge(saved.params);

    let params = match validate(&raw) {
        Ok(params) => params,
        Err(errors) => {
            eprintln!("Invalid input:");
            for err in errors.errors() {
                eprintln!("  {}: {}", err.field, err.message);
            }
            std::process::exit(2);
        }
    };

    let engine = ProjectionEngine::default();
    let projection = engine.project(&params);

    let mut config = ReportConfig::default();
    if let Some(size) = args.page_size {
        config.page_size = size;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else {
        println!("Projection ({} years, {} months)", params.years, projection.summary.total_months);
        println!("{}\n", report::render_summary(&projection.summary));

        let page = report::page(&projection.series, args.page, config.page_size);
        println!("{}", report::render_page(&page));

        if args.chart {
            let data = ChartData::from_series(&projection.series);
            println!(
                "\n{}",
                report::render_chart(&data, config.chart_width, config.chart_height, saved.theme)
            );
        }
    }

    if let Some(path) = &args.csv {
        report::export_series(path, &projection.series, config.csv_decimals)
            .with_context(|| format!("failed to export CSV to {}", path.display()))?;
        if !args.json {
            println!("\nFull series written to: {}", path.display());
        }
    }

    if args.save {
        store
            .save_params(raw)
            .with_context(|| format!("failed to save state to {}", store.path().display()))?;
    }

    Ok(())
}
