//! Hirelink CLI - command-line client for the Hirelink recruitment platform

use clap::Parser;
use log::LevelFilter;

use hirelink::cli::{
    self, ApplicationCommands, AssignmentCommands, CategoryCommands, Cli, Commands, GlobalOptions,
    JobCommands, RequestCommands, WorkerCommands,
    assignment::AssignmentScope,
    job::JobFilters,
};
use hirelink::client::models::{CreateJobRequest, UpdateJobRequest};
use hirelink::error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err.user_message());
        std::process::exit(1);
    }
}

/// `--debug` forces debug output; otherwise `RUST_LOG` decides, defaulting to warnings.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { email, password } => cli::auth::login(&opts, email, password).await,
        Commands::Register {
            first_name,
            last_name,
            email,
            role,
            password,
        } => cli::auth::register(&opts, first_name, last_name, email, role, password).await,
        Commands::Logout => cli::auth::logout(&opts).await,
        Commands::Status => cli::status::run(&opts).await,
        Commands::Dashboard => cli::dashboard::run(&opts).await,
        Commands::Worker(cmd) => match cmd {
            WorkerCommands::List { available } => cli::worker::list(&opts, available).await,
            WorkerCommands::Get { id } => cli::worker::get(&opts, id).await,
            WorkerCommands::Me => cli::worker::me(&opts).await,
            WorkerCommands::ToggleAvailability => cli::worker::toggle_availability(&opts).await,
            WorkerCommands::Create { profile, photo } => {
                cli::worker::create(&opts, &profile, photo.as_deref()).await
            }
            WorkerCommands::Update { profile } => cli::worker::update(&opts, &profile).await,
        },
        Commands::Job(cmd) => match cmd {
            JobCommands::List {
                search,
                category,
                location,
                active,
                pagination,
            } => {
                let filters = JobFilters {
                    search,
                    category,
                    location,
                    active,
                };
                cli::job::list(&opts, &filters, &pagination).await
            }
            JobCommands::Mine => cli::job::mine(&opts).await,
            JobCommands::Get { id } => cli::job::get(&opts, id).await,
            JobCommands::Create {
                title,
                description,
                category,
                location,
                salary,
            } => {
                let request = CreateJobRequest {
                    title,
                    description,
                    location,
                    salary,
                    category_id: category,
                };
                cli::job::create(&opts, request).await
            }
            JobCommands::Update {
                id,
                title,
                description,
                category,
                location,
                salary,
            } => {
                let request = UpdateJobRequest {
                    title,
                    description,
                    location,
                    salary,
                    category_id: category,
                };
                cli::job::update(&opts, id, request).await
            }
            JobCommands::ToggleActive { id } => cli::job::toggle_active(&opts, id).await,
            JobCommands::Delete { id, yes } => cli::job::delete(&opts, id, yes).await,
        },
        Commands::Application(cmd) => match cmd {
            ApplicationCommands::Apply {
                job_id,
                cover_letter,
            } => cli::application::apply(&opts, job_id, cover_letter).await,
            ApplicationCommands::Mine => cli::application::mine(&opts).await,
            ApplicationCommands::Status { id, status } => {
                cli::application::set_status(&opts, id, status).await
            }
        },
        Commands::Assignment(cmd) => match cmd {
            AssignmentCommands::Worker { id } => {
                cli::assignment::list(&opts, AssignmentScope::Worker(id)).await
            }
            AssignmentCommands::Job { id } => {
                cli::assignment::list(&opts, AssignmentScope::Job(id)).await
            }
            AssignmentCommands::Recruiter { id } => {
                cli::assignment::list(&opts, AssignmentScope::Recruiter(id)).await
            }
            AssignmentCommands::Status { id, status } => {
                cli::assignment::set_status(&opts, id, status).await
            }
        },
        Commands::Category(cmd) => match cmd {
            CategoryCommands::List => cli::category::list(&opts).await,
            CategoryCommands::Create { name, description } => {
                cli::category::create(&opts, name, description).await
            }
        },
        Commands::Request(cmd) => match cmd {
            RequestCommands::List { pending } => cli::request::list(&opts, pending).await,
            RequestCommands::Send {
                receiver_id,
                message,
            } => cli::request::send(&opts, receiver_id, message).await,
            RequestCommands::Respond { id, status } => {
                cli::request::respond(&opts, id, status).await
            }
        },
    }
}
