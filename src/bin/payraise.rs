//! Command-line companion for the PayRaise Calculator site.
//!
//! Runs the calculators from a terminal and prints the structured data,
//! sitemap and page list the server would publish.
//!
//! # Usage
//!
//! ```bash
//! # Apply a 5% raise (prompts for anything missing)
//! cargo run --bin payraise -- calc raise --salary 50000 --percent 5
//!
//! # Compare a salary between two cities
//! cargo run --bin payraise -- calc cost-of-living --salary 80000 --from austin --to seattle
//!
//! # Print the JSON-LD for a tool page
//! cargo run --bin payraise -- schema tool pay-raise-calculator
//!
//! # Print sitemap.xml
//! cargo run --bin payraise -- sitemap
//! ```
//!
//! # Environment Variables
//!
//! `SITE_URL` and `SITE_NAME` are read the same way as the server.

use payraise_calculator::application::services::ContentService;
use payraise_calculator::config::Config;
use payraise_calculator::domain::calculators::cost_of_living::{CITIES, compare_cities};
use payraise_calculator::domain::calculators::hourly::{
    PayBreakdown, WorkSchedule, annual_to_hourly, hourly_to_annual,
};
use payraise_calculator::domain::calculators::inflation::{InflationInput, calculate_inflation};
use payraise_calculator::domain::calculators::promotion::{PromotionLevel, calculate_promotion};
use payraise_calculator::domain::calculators::raise::{
    INDUSTRIES, RaiseInput, calculate_raise, compare_to_industry, find_industry,
    raise_percentage,
};
use payraise_calculator::domain::calculators::total_compensation::{
    CompensationPackage, calculate_total_compensation,
};
use payraise_calculator::domain::entities::SiteIdentity;
use payraise_calculator::domain::seo::schema::{self, StructuredData};
use payraise_calculator::domain::seo::render_sitemap;
use payraise_calculator::infrastructure::content::StaticContentRepository;
use payraise_calculator::utils::format::{
    format_currency, format_currency_whole, format_percent, format_points,
};
use payraise_calculator::web::structured_data;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::{Input, Select};
use std::sync::Arc;

/// Salary calculators and SEO tooling for PayRaise Calculator.
#[derive(Parser)]
#[command(name = "payraise")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Run a calculator
    Calc {
        #[command(subcommand)]
        calculator: CalcCommand,
    },

    /// Print the JSON-LD a page publishes
    Schema {
        kind: SchemaKind,

        /// Content slug, required for tool, article and guide
        slug: Option<String>,
    },

    /// Print sitemap.xml
    Sitemap,

    /// List every routable page
    Pages,
}

/// Calculator subcommands. Missing numbers are prompted for.
#[derive(Subcommand)]
enum CalcCommand {
    /// Apply a percentage raise
    Raise {
        #[arg(short, long)]
        salary: Option<f64>,

        #[arg(short, long, allow_hyphen_values = true)]
        percent: Option<f64>,

        /// Industry slug to benchmark against (e.g. technology)
        #[arg(short, long)]
        industry: Option<String>,
    },

    /// Raise percentage between an old and a new salary
    RaisePercentage {
        #[arg(long)]
        old: Option<f64>,

        #[arg(long)]
        new: Option<f64>,
    },

    /// Adjust a raise for inflation
    Inflation {
        #[arg(short, long)]
        salary: Option<f64>,

        #[arg(short, long, allow_hyphen_values = true)]
        raise: Option<f64>,

        #[arg(short, long, allow_hyphen_values = true)]
        inflation: Option<f64>,

        #[arg(short, long, default_value_t = 1)]
        years: u32,
    },

    /// Convert an hourly wage to every pay period
    Hourly {
        #[arg(short, long)]
        rate: Option<f64>,

        #[arg(long, default_value_t = 40.0)]
        hours: f64,

        #[arg(long, default_value_t = 52.0)]
        weeks: f64,
    },

    /// Convert an annual salary to every pay period
    Salary {
        #[arg(short, long)]
        annual: Option<f64>,

        #[arg(long, default_value_t = 40.0)]
        hours: f64,

        #[arg(long, default_value_t = 52.0)]
        weeks: f64,
    },

    /// Equivalent salary in another city
    CostOfLiving {
        #[arg(short, long)]
        salary: Option<f64>,

        /// City slug (e.g. austin)
        #[arg(long)]
        from: Option<String>,

        /// City slug (e.g. seattle)
        #[arg(long)]
        to: Option<String>,
    },

    /// Raise range for a promotion
    Promotion {
        #[arg(short, long)]
        salary: Option<f64>,

        /// Promotion level slug (e.g. mid-to-senior)
        #[arg(short, long)]
        level: Option<String>,

        /// Offered salary to assess against the band
        #[arg(short, long)]
        offer: Option<f64>,
    },

    /// Sum a compensation package
    TotalCompensation {
        #[arg(long)]
        base: Option<f64>,

        #[arg(long, default_value_t = 0.0)]
        bonus: f64,

        #[arg(long, default_value_t = 0.0)]
        equity: f64,

        /// Retirement match, percent of base
        #[arg(long = "match", default_value_t = 0.0)]
        match_percent: f64,

        #[arg(long, default_value_t = 0.0)]
        benefits: f64,

        #[arg(long, default_value_t = 0.0)]
        other: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemaKind {
    Tool,
    Article,
    Guide,
    Faq,
    Organization,
    Website,
}

type Service = ContentService<StaticContentRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env();
    config.validate()?;
    let site = config.site_identity()?;
    let service = ContentService::new(Arc::new(StaticContentRepository::new()));

    match cli.command {
        Commands::Calc { calculator } => handle_calc(calculator)?,
        Commands::Schema { kind, slug } => handle_schema(&site, &service, kind, slug).await?,
        Commands::Sitemap => {
            let entries = service.sitemap_entries().await?;
            print!("{}", render_sitemap(&site, &entries));
        }
        Commands::Pages => handle_pages(&site, &service).await?,
    }

    Ok(())
}

/// Uses the given value or asks for one.
fn value_or_prompt(value: Option<f64>, prompt: &str) -> Result<f64> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<f64>::new().with_prompt(prompt).interact_text()?),
    }
}

/// Uses the given slug or offers a picker over `choices`.
fn slug_or_select(value: Option<String>, prompt: &str, choices: &[(&str, &str)]) -> Result<String> {
    if let Some(v) = value {
        return Ok(v);
    }

    let labels: Vec<&str> = choices.iter().map(|(_, label)| *label).collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(choices[index].0.to_string())
}

fn print_row(label: &str, value: impl std::fmt::Display) {
    println!("  {:<30} {}", label.bright_white(), value.to_string().bright_yellow().bold());
}

fn handle_calc(command: CalcCommand) -> Result<()> {
    match command {
        CalcCommand::Raise {
            salary,
            percent,
            industry,
        } => {
            let input = RaiseInput {
                current_salary: value_or_prompt(salary, "Current salary")?,
                raise_percent: value_or_prompt(percent, "Raise (%)")?,
            };
            let result = calculate_raise(&input)?;

            println!("{}", "Pay raise".bright_blue().bold());
            println!();
            print_row("New salary", format_currency(result.new_salary));
            print_row("Annual increase", format_currency(result.increase_amount));
            print_row("Monthly increase", format_currency(result.monthly_increase));
            print_row("New monthly pay", format_currency(result.new_monthly_salary));
            print_row("New hourly rate", format_currency(result.new_hourly_rate));

            if let Some(slug) = industry {
                let comparison = compare_to_industry(result.raise_percent, find_industry(&slug)?);
                println!();
                print_row(
                    &format!("{} average", comparison.industry),
                    format_percent(comparison.benchmark_percent, 1),
                );
                print_row("Difference", format_points(comparison.difference_points));
                println!("  {}", comparison.verdict.label().green());
            }
        }
        CalcCommand::RaisePercentage { old, new } => {
            let result = raise_percentage(
                value_or_prompt(old, "Old salary")?,
                value_or_prompt(new, "New salary")?,
            )?;

            println!("{}", "Raise percentage".bright_blue().bold());
            println!();
            print_row("Raise", format_percent(result.raise_percent, 2));
            print_row("Increase", format_currency(result.increase_amount));
        }
        CalcCommand::Inflation {
            salary,
            raise,
            inflation,
            years,
        } => {
            let result = calculate_inflation(&InflationInput {
                current_salary: value_or_prompt(salary, "Current salary")?,
                raise_percent: value_or_prompt(raise, "Raise (%)")?,
                inflation_rate: value_or_prompt(inflation, "Inflation rate (%)")?,
                years,
            })?;

            println!("{}", "Inflation-adjusted raise".bright_blue().bold());
            println!();
            print_row("New salary", format_currency(result.new_salary));
            print_row("Real raise", format_percent(result.real_raise_percent, 2));
            print_row("Salary to keep pace", format_currency(result.salary_to_keep_pace));
            print_row(
                "In today's dollars",
                format_currency(result.real_value_of_new_salary),
            );
            print_row(
                "Purchasing power change",
                format_currency(result.purchasing_power_change),
            );
            if result.beats_inflation {
                println!("  {}", "Your raise beats inflation".green());
            } else {
                println!("  {}", "Your raise does not keep up with inflation".red());
            }
        }
        CalcCommand::Hourly { rate, hours, weeks } => {
            let breakdown = hourly_to_annual(
                value_or_prompt(rate, "Hourly rate")?,
                WorkSchedule::new(hours, weeks),
            )?;
            print_breakdown("Hourly to salary", &breakdown);
        }
        CalcCommand::Salary {
            annual,
            hours,
            weeks,
        } => {
            let breakdown = annual_to_hourly(
                value_or_prompt(annual, "Annual salary")?,
                WorkSchedule::new(hours, weeks),
            )?;
            print_breakdown("Salary to hourly", &breakdown);
        }
        CalcCommand::CostOfLiving { salary, from, to } => {
            let cities: Vec<(&str, &str)> = CITIES.iter().map(|c| (c.slug, c.name)).collect();
            let salary = value_or_prompt(salary, "Current salary")?;
            let from = slug_or_select(from, "Current city", &cities)?;
            let to = slug_or_select(to, "New city", &cities)?;
            let result = compare_cities(salary, &from, &to)?;

            println!("{}", "Cost of living".bright_blue().bold());
            println!();
            print_row("Equivalent salary", format_currency_whole(result.equivalent_salary));
            print_row("Difference", format_currency_whole(result.difference));
            print_row("Change", format_percent(result.percent_difference, 1));
        }
        CalcCommand::Promotion {
            salary,
            level,
            offer,
        } => {
            let levels: Vec<(&str, &str)> = PromotionLevel::ALL
                .iter()
                .map(|l| (l.slug(), l.label()))
                .collect();
            let salary = value_or_prompt(salary, "Current salary")?;
            let level = PromotionLevel::from_slug(&slug_or_select(level, "Promotion", &levels)?)?;
            let result = calculate_promotion(salary, level, offer)?;

            println!("{}", level.label().bright_blue().bold());
            println!();
            print_row("Low", format_currency_whole(result.low_salary));
            print_row("Typical", format_currency_whole(result.typical_salary));
            print_row("High", format_currency_whole(result.high_salary));
            if let Some(assessment) = result.offer {
                println!();
                print_row("Offer raise", format_percent(assessment.raise_percent, 1));
                println!("  {}", assessment.position.label().green());
            }
        }
        CalcCommand::TotalCompensation {
            base,
            bonus,
            equity,
            match_percent,
            benefits,
            other,
        } => {
            let summary = calculate_total_compensation(&CompensationPackage {
                base_salary: value_or_prompt(base, "Base salary")?,
                annual_bonus: bonus,
                equity_per_year: equity,
                retirement_match_percent: match_percent,
                benefits_value: benefits,
                other_compensation: other,
            })?;

            println!("{}", "Total compensation".bright_blue().bold());
            println!();
            print_row("Total", format_currency(summary.total));
            print_row("Monthly", format_currency(summary.monthly_total));
            print_row("Retirement match", format_currency(summary.retirement_match));
            print_row("Base share", format_percent(summary.base_share_percent, 1));
        }
    }

    Ok(())
}

fn print_breakdown(title: &str, breakdown: &PayBreakdown) {
    println!("{}", title.bright_blue().bold());
    println!();
    print_row("Hourly", format_currency(breakdown.hourly));
    print_row("Daily", format_currency(breakdown.daily));
    print_row("Weekly", format_currency(breakdown.weekly));
    print_row("Bi-weekly", format_currency(breakdown.biweekly));
    print_row("Semi-monthly", format_currency(breakdown.semi_monthly));
    print_row("Monthly", format_currency(breakdown.monthly));
    print_row("Annual", format_currency(breakdown.annual));
}

async fn handle_schema(
    site: &SiteIdentity,
    service: &Service,
    kind: SchemaKind,
    slug: Option<String>,
) -> Result<()> {
    let require_slug = || slug.clone().context("This schema kind needs a content slug");

    let data: StructuredData = match kind {
        SchemaKind::Tool => {
            let tool = service.get_tool(&require_slug()?).await?;
            structured_data::for_tool(site, &tool)
        }
        SchemaKind::Article => {
            let article = service.get_article(&require_slug()?).await?;
            structured_data::for_article(site, &article)
        }
        SchemaKind::Guide => {
            let guide = service.get_guide(&require_slug()?).await?;
            structured_data::for_guide(site, &guide)
        }
        SchemaKind::Faq => schema::faq_page(site, &service.faqs().await?).into(),
        SchemaKind::Organization => schema::organization(site).into(),
        SchemaKind::Website => schema::website(site).into(),
    };

    println!("{}", data.to_pretty_json());
    Ok(())
}

/// Lists routable pages with their sitemap priority.
///
/// # Output Format
///
/// ```text
/// Pages
///
///   Priority  URL
///   ────────────────────────────────────────────
///   1.0       https://www.payraisecalculator.com/
/// ```
async fn handle_pages(site: &SiteIdentity, service: &Service) -> Result<()> {
    let entries = service.sitemap_entries().await?;

    println!("{}", "Pages".bright_blue().bold());
    println!();
    println!(
        "  {:<9} {}",
        "Priority".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for entry in &entries {
        println!(
            "  {:<9} {}",
            format!("{:.1}", entry.priority).bright_black(),
            site.absolute_url(&entry.path).cyan()
        );
    }

    println!();
    println!(
        "  Total: {}  ({} industries, {} cities in the calculators)",
        entries.len().to_string().bright_white().bold(),
        INDUSTRIES.len(),
        CITIES.len()
    );

    Ok(())
}
