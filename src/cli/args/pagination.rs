//! Pagination argument types for CLI commands

use clap::Args;

/// Page selection forwarded to list endpoints that support it.
///
/// ```ignore
/// List {
///     #[command(flatten)]
///     pagination: PaginationArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Maximum results per page
    #[arg(long, short = 'n')]
    pub limit: Option<u32>,

    /// Page number (1-indexed)
    #[arg(long, short = 'p')]
    pub page: Option<u32>,
}
