//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::client::models::{ApplicationStatus, AssignmentStatus, ConnectionStatus, Role};

pub mod application;
pub mod args;
pub mod assignment;
pub mod auth;
pub mod category;
pub mod context;
pub mod dashboard;
pub mod job;
pub mod request;
pub mod status;
pub mod worker;

pub use args::{GlobalOptions, OutputFormat, PaginationArgs};
pub use context::AppContext;

/// Hirelink - command-line client for the Hirelink recruitment platform
#[derive(Parser, Debug)]
#[command(name = "hirelink")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "HIRELINK_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "HIRELINK_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "HIRELINK_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "HIRELINK_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session token
    Login {
        /// Account email (prompted if omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Account password (prompted if omitted)
        #[arg(long, env = "HIRELINK_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Create an account and sign in
    Register {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long, short = 'e')]
        email: String,

        /// Account type (worker, recruiter)
        #[arg(long, default_value = "worker")]
        role: Role,

        /// Password (prompted twice if omitted)
        #[arg(long, env = "HIRELINK_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Forget the stored session token
    Logout,

    /// Show session and configuration status
    Status,

    /// Available workers and pending connection requests
    Dashboard,

    /// Browse and manage worker profiles
    #[command(subcommand)]
    Worker(WorkerCommands),

    /// Browse and manage job postings
    #[command(subcommand)]
    Job(JobCommands),

    /// Job applications
    #[command(subcommand)]
    Application(ApplicationCommands),

    /// Work assignments
    #[command(subcommand)]
    Assignment(AssignmentCommands),

    /// Job categories
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Connection requests between recruiters and workers
    #[command(subcommand)]
    Request(RequestCommands),
}

/// Worker subcommands
#[derive(Subcommand, Debug)]
pub enum WorkerCommands {
    /// List worker profiles
    #[command(visible_alias = "ls")]
    List {
        /// Only workers currently available
        #[arg(long, short = 'a')]
        available: bool,
    },

    /// Show one worker profile
    Get {
        /// Worker ID
        id: i64,
    },

    /// Show your own worker profile
    Me,

    /// Flip your availability for new work
    ToggleAvailability,

    /// Create your worker profile
    #[command(after_help = "EXAMPLES:\n  \
            hirelink worker create --first-name Sam --last-name Hill --skills welding,rigging\n  \
            hirelink worker create --first-name Sam --last-name Hill --photo ./sam.jpg")]
    Create {
        #[command(flatten)]
        profile: WorkerProfileArgs,

        /// Profile picture to upload with the profile
        #[arg(long)]
        photo: Option<PathBuf>,
    },

    /// Change fields of your worker profile
    Update {
        #[command(flatten)]
        profile: WorkerProfileArgs,
    },
}

/// Worker profile fields; on update only the given ones are sent
#[derive(Args, Debug, Clone, Default)]
pub struct WorkerProfileArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long, short = 'l')]
    pub location: Option<String>,

    /// Trade or craft
    #[arg(long)]
    pub profession: Option<String>,

    /// Comma-separated skills
    #[arg(long, value_delimiter = ',')]
    pub skills: Option<Vec<String>>,

    /// Years of experience
    #[arg(long)]
    pub experience: Option<u32>,

    #[arg(long)]
    pub bio: Option<String>,
}

/// Job subcommands
#[derive(Subcommand, Debug)]
pub enum JobCommands {
    /// List job postings
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            hirelink job list --search plumber\n  \
            hirelink job list --category 3 --active true\n  \
            hirelink job list --page 2 --limit 20 --format json"
    )]
    List {
        /// Free-text search
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Filter by category ID
        #[arg(long, short = 'c')]
        category: Option<i64>,

        /// Filter by location
        #[arg(long, short = 'l')]
        location: Option<String>,

        /// Filter by active flag
        #[arg(long)]
        active: Option<bool>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// List jobs you posted
    Mine,

    /// Show one job
    Get {
        /// Job ID
        id: i64,
    },

    /// Post a new job
    Create {
        /// Job title
        title: String,

        #[arg(long, short = 'd')]
        description: String,

        /// Category ID
        #[arg(long, short = 'c')]
        category: i64,

        #[arg(long, short = 'l')]
        location: Option<String>,

        #[arg(long)]
        salary: Option<f64>,
    },

    /// Change fields of a job posting
    Update {
        /// Job ID
        id: i64,

        #[arg(long, short = 't')]
        title: Option<String>,

        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Category ID
        #[arg(long, short = 'c')]
        category: Option<i64>,

        #[arg(long, short = 'l')]
        location: Option<String>,

        #[arg(long)]
        salary: Option<f64>,
    },

    /// Open or close a job posting
    ToggleActive {
        /// Job ID
        id: i64,
    },

    /// Delete a job posting
    Delete {
        /// Job ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Application subcommands
#[derive(Subcommand, Debug)]
pub enum ApplicationCommands {
    /// Apply to a job
    Apply {
        /// Job ID
        job_id: i64,

        #[arg(long, short = 'm')]
        cover_letter: Option<String>,
    },

    /// List your applications
    Mine,

    /// Set the status of an application
    Status {
        /// Application ID
        id: i64,

        /// New status (pending, accepted, rejected)
        status: ApplicationStatus,
    },
}

/// Work assignment subcommands
#[derive(Subcommand, Debug)]
pub enum AssignmentCommands {
    /// Assignments of a worker
    Worker {
        /// Worker ID
        id: i64,
    },

    /// Assignments on a job
    Job {
        /// Job ID
        id: i64,
    },

    /// Assignments created by a recruiter
    Recruiter {
        /// Recruiter ID
        id: i64,
    },

    /// Set the status of an assignment
    Status {
        /// Assignment ID
        id: i64,

        /// New status (pending, in-progress, completed, cancelled)
        status: AssignmentStatus,
    },
}

/// Job category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List categories
    #[command(visible_alias = "ls")]
    List,

    /// Create a category
    Create {
        /// Category name
        name: String,

        #[arg(long, short = 'd')]
        description: Option<String>,
    },
}

/// Connection request subcommands
#[derive(Subcommand, Debug)]
pub enum RequestCommands {
    /// List connection requests
    #[command(visible_alias = "ls")]
    List {
        /// Only pending requests addressed to you
        #[arg(long)]
        pending: bool,
    },

    /// Send a connection request to a worker
    Send {
        /// Receiving user ID
        receiver_id: i64,

        #[arg(long, short = 'm')]
        message: Option<String>,
    },

    /// Accept or reject a request
    #[command(after_help = "EXAMPLES:\n  \
            hirelink request respond 12 accept\n  \
            hirelink request respond 12 reject")]
    Respond {
        /// Request ID
        id: i64,

        /// Decision (accept, reject)
        status: ConnectionStatus,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_request_respond() {
        let cli = Cli::try_parse_from(["hirelink", "request", "respond", "12", "accept"]).unwrap();
        match cli.command {
            Commands::Request(RequestCommands::Respond { id, status }) => {
                assert_eq!(id, 12);
                assert_eq!(status, ConnectionStatus::Accepted);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_assignment_status_with_dash() {
        let cli =
            Cli::try_parse_from(["hirelink", "assignment", "status", "4", "in-progress"]).unwrap();
        match cli.command {
            Commands::Assignment(AssignmentCommands::Status { status, .. }) => {
                assert_eq!(status, AssignmentStatus::InProgress);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hirelink",
            "worker",
            "list",
            "--format",
            "json",
            "--api-url",
            "http://api.test",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.api_url.as_deref(), Some("http://api.test"));
    }

    #[test]
    fn test_parse_worker_update_splits_skills() {
        let cli = Cli::try_parse_from([
            "hirelink",
            "worker",
            "update",
            "--skills",
            "welding,rigging",
            "--experience",
            "4",
        ])
        .unwrap();
        match cli.command {
            Commands::Worker(WorkerCommands::Update { profile }) => {
                assert_eq!(
                    profile.skills,
                    Some(vec!["welding".to_string(), "rigging".to_string()])
                );
                assert_eq!(profile.experience, Some(4));
                assert!(profile.first_name.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_job_create_requires_category() {
        assert!(
            Cli::try_parse_from(["hirelink", "job", "create", "Roofer", "-d", "Fix roofs"])
                .is_err()
        );
    }

    #[test]
    fn test_invalid_status_rejected() {
        assert!(Cli::try_parse_from(["hirelink", "application", "status", "1", "maybe"]).is_err());
    }
}
