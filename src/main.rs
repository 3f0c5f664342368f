use anyhow::{Context, Result};
use clap::Parser;
use git_extract::cli::{self, Args, Command};
use git_extract::config::Settings;
use git_extract::Repository;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();
    }

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: Args) -> Result<()> {
    let settings = match args.config {
        Some(ref path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    let directory = match args.repo_path {
        Some(ref repo) => repo.clone(),
        None => std::env::current_dir()?,
    };

    // The command line wins over the config file
    let binary_path = args.binary_path.or(settings.binary_path);

    let repo = Repository::open(&directory, binary_path.as_deref())
        .with_context(|| format!("Failed to open repository at {}", directory.display()))?;

    let rendered = match args.command {
        Command::Commits { range } => {
            let commits = repo.get_commits(&range.join(" "))?;
            log::debug!("Extracted {} commits", commits.len());
            cli::render_commits(&commits, args.format)?
        }
        Command::Branches { include, exclude } => {
            let include = include.or(settings.branches.include);
            let exclude = exclude.or(settings.branches.exclude);
            let branches = repo.get_branches(include.as_deref(), exclude.as_deref())?;
            log::debug!("Extracted {} branches", branches.len());
            cli::render_branches(&branches, args.format)?
        }
    };

    if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else if !rendered.is_empty() {
        println!("{}", rendered);
    }

    Ok(())
}
