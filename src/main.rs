use anyhow::{Context, Result};
use bbs_repos::commands::validators;
use bbs_repos::{commands::*, config::Config, constants};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bbs-repos")]
#[command(about = "A cli tool to list Bitbucket Server repositories and open pull requests")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command
#[derive(Args)]
struct ConnectionArgs {
    /// Configuration file path
    #[arg(short, long, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
    config: String,

    /// App password (overrides the config file and environment)
    #[arg(long)]
    app_password: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List repositories on the server
    Ls {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Only list repositories of this project
        #[arg(short, long)]
        project: Option<String>,

        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Clone every repository on the server
    Clone {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Only clone repositories of this project
        #[arg(short, long)]
        project: Option<String>,

        /// Directory to clone into
        #[arg(short, long, default_value_t = constants::config::DEFAULT_CLONE_DIR.to_string())]
        output_dir: String,

        /// Execute operations in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Push HEAD to a branch and open a pull request for it
    Push {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Branch to push to and open the pull request from
        #[arg(short, long)]
        branch: String,

        /// Branch to open the pull request into (default: upstream of the current branch)
        #[arg(long)]
        target_branch: Option<String>,

        /// Create the pull request as draft
        #[arg(long)]
        draft: bool,

        /// Add the server's default reviewers
        #[arg(long)]
        default_reviewers: bool,

        /// Working copy to push from
        #[arg(long, default_value = ".")]
        repo_path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    execute_command(cli.command).await
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(connection: &ConnectionArgs) -> Result<bbs_repos::Settings> {
    let config =
        Config::load_with_app_password(&connection.config, connection.app_password.as_deref())
            .with_context(|| format!("Failed to load config from {}", connection.config))?;
    Ok(config.bitbucket)
}

async fn execute_command(command: Commands) -> Result<()> {
    match command {
        Commands::Ls {
            connection,
            project,
            json,
        } => {
            validators::validate_project_key(&project)?;
            let mut settings = load_settings(&connection)?;
            if let Some(project) = project {
                settings = settings.with_project(project);
            }

            let context = CommandContext {
                settings,
                parallel: false, // List command doesn't need parallel execution
            };
            ListCommand { json }.execute(&context).await?;
        }
        Commands::Clone {
            connection,
            project,
            output_dir,
            parallel,
        } => {
            validators::validate_project_key(&project)?;
            validators::validate_output_directory(&output_dir)?;
            let mut settings = load_settings(&connection)?;
            if let Some(project) = project {
                settings = settings.with_project(project);
            }

            let context = CommandContext { settings, parallel };
            CloneCommand {
                output_dir: PathBuf::from(output_dir),
            }
            .execute(&context)
            .await?;
        }
        Commands::Push {
            connection,
            branch,
            target_branch,
            draft,
            default_reviewers,
            repo_path,
        } => {
            validators::validate_branch_name("branch", &branch)?;
            if let Some(target) = &target_branch {
                validators::validate_branch_name("target-branch", target)?;
            }

            let mut settings = load_settings(&connection)?;
            if draft {
                settings = settings.as_draft();
            }
            if default_reviewers {
                settings = settings.with_default_reviewers();
            }

            let context = CommandContext {
                settings,
                parallel: false,
            };
            PushCommand {
                branch_name: branch,
                target_branch,
                repo_path,
            }
            .execute(&context)
            .await?;
        }
    }

    Ok(())
}
