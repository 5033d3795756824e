mod app;
mod catalog;
mod config;
mod filter;
mod i18n;
mod models;
mod nav;
mod tui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use app::App;
use catalog::Catalog;
use config::{Config, APPLY_URL};
use filter::FilterState;
use i18n::{chrome, job_type_label, translations, Language};
use models::{JobPosting, JobType};

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "Multilingual job board - browse, search and filter openings")]
struct Cli {
    /// Display language
    #[arg(short, long, global = true, env = "JOBBOARD_LANG", value_enum, default_value_t = Language::Lo)]
    lang: Language,

    /// Path to a JSON job fixture (defaults to the built-in one)
    #[arg(long, global = true, env = "JOBBOARD_DATA")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse jobs interactively (default)
    Browse,

    /// List jobs matching the filters
    List {
        /// Match against job title or company name (case-insensitive)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Employment type (full-time, part-time, contract, freelance)
        #[arg(short = 't', long = "type", value_parser = parse_job_type)]
        job_type: Option<JobType>,

        /// Exact category name
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show job details
    Show {
        /// Job ID
        id: String,
    },

    /// Show hot jobs and recent openings
    Featured,

    /// List job categories
    Categories,

    /// List supported languages
    Languages,
}

fn parse_job_type(s: &str) -> Result<JobType, String> {
    JobType::parse(s).ok_or_else(|| {
        let valid: Vec<&str> = JobType::ALL.iter().map(|t| t.as_str()).collect();
        format!("unknown job type '{}' (expected one of: {})", s, valid.join(", "))
    })
}

/// Only the TUI owns the terminal; print commands log if they can.
fn requires_logging(command: &Commands) -> bool {
    matches!(command, Commands::Browse)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new(cli.lang, cli.data);
    let command = cli.command.unwrap_or(Commands::Browse);
    if requires_logging(&command) {
        config.init_logging()?;
    } else if let Err(e) = config.init_logging() {
        eprintln!("warning: logging disabled: {:#}", e);
    }
    info!(lang = %config.language, data = ?config.data_path, "starting jobboard");

    let catalog = config.load_catalog()?;

    match command {
        Commands::Browse => {
            let mut app = App::new(catalog, &config);
            tui::run(&mut app)?;
        }

        Commands::List { query, job_type, category } => {
            if let Some(name) = &category {
                if !catalog.has_category(name) {
                    match catalog.suggest_category(name) {
                        Some(suggestion) => println!("Unknown category '{}'. Did you mean '{}'?", name, suggestion),
                        None => println!("Unknown category '{}'.", name),
                    }
                }
            }
            let state = FilterState { query, job_type, category };
            let jobs = filter::filter_jobs(&catalog.jobs, &state);
            print_job_table(&jobs, config.language);
        }

        Commands::Show { id } => match catalog.get(&id) {
            Some(job) => print_job(job, config.language),
            None => println!("Job '{}' not found.", id),
        },

        Commands::Featured => {
            let t = translations(config.language);
            let c = chrome(config.language);
            println!("{}", t.hot_jobs);
            print_job_table(&filter::featured(&catalog.jobs, config.featured_limit), config.language);
            println!("\n{}", c.recent_openings);
            print_job_table(&filter::recent(&catalog.jobs, config.recent_limit), config.language);
        }

        Commands::Categories => {
            print_categories(&catalog, config.language);
        }

        Commands::Languages => {
            for lang in Language::ALL {
                let marker = if lang == config.language { "*" } else { " " };
                println!("{} {:<4} {} {}", marker, lang.code(), lang.flag(), lang.label());
            }
        }
    }

    Ok(())
}

fn print_job_table(jobs: &[&JobPosting], lang: Language) {
    if jobs.is_empty() {
        println!("{}", chrome(lang).no_jobs_found);
        return;
    }
    println!("{:<5} {:<28} {:<22} {:<18} {:<12} {:<28}", "ID", "TITLE", "COMPANY", "CATEGORY", "TYPE", "SALARY");
    println!("{}", "-".repeat(118));
    for job in jobs {
        let title = if job.is_hot {
            format!("* {}", job.title)
        } else {
            job.title.clone()
        };
        println!(
            "{:<5} {:<28} {:<22} {:<18} {:<12} {:<28}",
            job.id,
            truncate(&title, 26),
            truncate(&job.company_name, 20),
            truncate(&job.category, 16),
            job_type_label(job.job_type, lang),
            truncate(&job.salary_range, 28)
        );
    }
}

fn print_job(job: &JobPosting, lang: Language) {
    let t = translations(lang);
    let c = chrome(lang);
    println!("Job #{}", job.id);
    println!("{}: {}", t.job_title, job.title);
    println!("Company: {}", job.company_name);
    println!("Logo: {}", job.company_logo);
    println!("Type: {}", job_type_label(job.job_type, lang));
    println!("Category: {}", job.category);
    println!("{}: {}, {}", t.location, job.location, job.country);
    println!("{}: {}", t.salary, job.salary_range);
    println!("Posted: {}", job.posted_date);
    if job.is_hot {
        println!("{}", c.hot_badge);
    }
    println!("\n--- {} ---\n{}", c.description, textwrap::fill(&job.description, 78));
    if !job.requirements.is_empty() {
        println!("\n--- {} ---", c.requirements);
        for req in &job.requirements {
            println!("  - {}", req);
        }
    }
    println!("\n{}: {}", t.apply_now, APPLY_URL);
}

fn print_categories(catalog: &Catalog, lang: Language) {
    let c = chrome(lang);
    println!("{}", translations(lang).categories);
    for cat in &catalog.categories {
        println!("  {} {:<24} {:>5} {}", cat.icon, truncate(&cat.name, 22), cat.count, c.jobs_suffix);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Senior Software Engineer", 10), "Senior ...");
        assert_eq!(truncate("ວຽກເຕັມເວລາວຽກເຕັມເວລາ", 8).chars().count(), 8);
    }

    #[test]
    fn test_parse_job_type_error_lists_options() {
        assert_eq!(parse_job_type("contract"), Ok(JobType::Contract));
        let err = parse_job_type("gig").unwrap_err();
        assert!(err.contains("Full-time, Part-time, Contract, Freelance"));
    }

    #[test]
    fn test_cli_parses_list_flags() {
        let cli = Cli::try_parse_from(["jobboard", "--lang", "en", "list", "-q", "driver", "-t", "full-time"]).unwrap();
        assert_eq!(cli.lang, Language::En);
        match cli.command {
            Some(Commands::List { query, job_type, category }) => {
                assert_eq!(query, "driver");
                assert_eq!(job_type, Some(JobType::FullTime));
                assert!(category.is_none());
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_only_browse_requires_logging() {
        assert!(requires_logging(&Commands::Browse));
        assert!(!requires_logging(&Commands::Languages));
        assert!(!requires_logging(&Commands::Show { id: "1".to_string() }));

        let cli = Cli::try_parse_from(["jobboard", "categories"]).unwrap();
        assert!(!requires_logging(&cli.command.unwrap_or(Commands::Browse)));
        let cli = Cli::try_parse_from(["jobboard"]).unwrap();
        assert!(requires_logging(&cli.command.unwrap_or(Commands::Browse)));
    }

    #[test]
    fn test_cli_rejects_unknown_language() {
        assert!(Cli::try_parse_from(["jobboard", "--lang", "fr"]).is_err());
    }
}
