use std::env;
use std::error::Error;
use std::io;

use anyhow::bail;
use chrono::NaiveDate;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use resale::clock::SystemClock;
use resale::estimator::{PriceEstimator, PricingConfig, PricingInput};
use resale::input::{PromptTarget, Session, SessionError};
use resale::print;

const MAX_SCHEDULE_YEARS: u16 = 50;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// purchase price in GBP
    #[clap(short = 'p', long)]
    price: Option<String>,

    /// purchase date, in YYYY-MM-DD format
    #[clap(short = 'd', long)]
    date: Option<String>,

    /// condition: 'new', 'like new', 'good', 'fair' or 'poor'
    #[clap(short = 'c', long)]
    condition: Option<String>,

    /// fraction of the sale price retained by the marketplace
    #[clap(long = "fee-rate")]
    fee_rate: Option<f64>,

    /// print the result as JSON
    #[clap(long)]
    json: bool,

    /// also tabulate prices for every condition
    #[clap(long = "all-conditions")]
    all_conditions: bool,

    /// also tabulate prices for each year of age up to this many years
    #[clap(long)]
    schedule: Option<u16>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if let Some(years) = self.schedule {
            if years == 0 || years > MAX_SCHEDULE_YEARS {
                bail!("the schedule must span 1 to {MAX_SCHEDULE_YEARS} years");
            }
        }
        Ok(())
    }

    fn config(&self) -> PricingConfig {
        let mut config = PricingConfig::default();
        if let Some(fee_rate) = self.fee_rate {
            config.platform_fee_rate = fee_rate;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let config = args.config();
    config.validate()?;
    let estimator = PriceEstimator::new(SystemClock).with_config(config);
    let input = read_input(&args, estimator.today())?;
    debug!("today: {}, input: {input:?}", estimator.today());

    let result = estimator.estimate(&input);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print::write_result(&mut io::stdout().lock(), &result)?;
    }

    if args.all_conditions {
        let rows = estimator.estimate_all_conditions(input.purchase_price, input.purchase_date);
        let table = print::tabulate_conditions(&rows);
        info!("\n{}", Console::default().render(&table));
    }
    if let Some(years) = args.schedule {
        let rows = estimator.schedule(&input, years);
        let table = print::tabulate_schedule(&rows);
        info!(
            "{} schedule:\n{}",
            input.condition,
            Console::default().render(&table)
        );
    }

    Ok(())
}

/// Takes each value from its flag when given, prompting for the rest.
fn read_input(args: &Args, today: NaiveDate) -> Result<PricingInput, SessionError> {
    let stdin = io::stdin();
    let prompts = PromptTarget::for_output(args.json).writer();
    let mut session = Session::new(stdin.lock(), prompts);
    session.complete(
        args.price.as_deref(),
        args.date.as_deref(),
        args.condition.as_deref(),
        today,
    )
}
