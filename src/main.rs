//! sncat - ServiceNow Service Catalog from the command line
//!
//! CLI binary over the `sn_catalog` adapters. Each command prints the
//! operation outcome as JSON.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use sn_catalog::catalog::{
    CreateCategoryParams, ListCategoriesParams, ListItemsParams, MoveItemsParams,
    UpdateCategoryParams,
};
use sn_catalog::types::ItemType;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "sncat")]
#[command(about = "ServiceNow Service Catalog - list, manage and submit catalog items")]
#[command(version)]
struct Cli {
    /// Instance URL or name (defaults to SERVICENOW_INSTANCE_URL)
    #[arg(short, long, global = true)]
    instance: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Catalog items
    Items {
        #[command(subcommand)]
        action: ItemsAction,
    },

    /// Catalog categories
    Categories {
        #[command(subcommand)]
        action: CategoriesAction,
    },

    /// Submit a catalog item or record producer
    Submit {
        /// Catalog item or record producer sys_id
        item_id: String,

        /// Submit as a record producer instead of ordering an item
        #[arg(long)]
        producer: bool,

        /// Variable value as KEY=VALUE (repeatable; VALUE is parsed as JSON when possible)
        #[arg(long = "var", value_name = "KEY=VALUE")]
        vars: Vec<String>,

        /// Variables as a JSON object
        #[arg(long, value_name = "JSON")]
        variables: Option<String>,

        /// Quantity to order (items only)
        #[arg(long)]
        quantity: Option<u32>,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Args)]
struct PageArgs {
    /// Maximum number of records to return
    #[arg(long, default_value_t = 10)]
    limit: u32,

    /// Offset for pagination
    #[arg(long, default_value_t = 0)]
    offset: u32,

    /// Search term
    #[arg(short, long)]
    query: Option<String>,

    /// Include inactive records
    #[arg(long)]
    all: bool,
}

#[derive(Subcommand)]
enum ItemsAction {
    /// List catalog items
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Filter by category sys_id
        #[arg(long)]
        category: Option<String>,
    },
    /// Show a catalog item
    Get {
        /// Catalog item sys_id
        item_id: String,
    },
    /// Move catalog items to another category
    Move {
        /// Target category sys_id
        #[arg(long = "to", value_name = "CATEGORY_ID")]
        target_category_id: String,

        /// Catalog item sys_ids
        #[arg(required = true)]
        item_ids: Vec<String>,
    },
}

#[derive(Args)]
struct CategoryFieldArgs {
    /// Description
    #[arg(long)]
    description: Option<String>,

    /// Parent category sys_id
    #[arg(long)]
    parent: Option<String>,

    /// Icon
    #[arg(long)]
    icon: Option<String>,

    /// Sort order
    #[arg(long)]
    order: Option<i64>,
}

#[derive(Subcommand)]
enum CategoriesAction {
    /// List catalog categories
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Create a catalog category
    Create {
        /// Title
        #[arg(long)]
        title: String,

        #[command(flatten)]
        fields: CategoryFieldArgs,

        /// Create the category inactive
        #[arg(long)]
        inactive: bool,
    },
    /// Update a catalog category
    Update {
        /// Category sys_id
        category_id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        fields: CategoryFieldArgs,

        /// New active flag
        #[arg(long)]
        active: Option<bool>,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test authentication
    Test,
    /// Show authentication setup instructions
    Setup,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "sn_catalog=warn,sncat=warn",
        1 => "sn_catalog=info,sncat=info",
        _ => "sn_catalog=debug,sncat=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let instance = cli.instance.as_deref();

    match cli.command {
        Commands::Items { action } => match action {
            ItemsAction::List { page, category } => {
                let params = ListItemsParams {
                    limit: page.limit,
                    offset: page.offset,
                    category,
                    query: page.query,
                    active: !page.all,
                };
                cli::run_items_list(instance, &params).await
            }
            ItemsAction::Get { item_id } => cli::run_items_get(instance, &item_id).await,
            ItemsAction::Move {
                target_category_id,
                item_ids,
            } => {
                let params = MoveItemsParams {
                    item_ids,
                    target_category_id,
                };
                cli::run_items_move(instance, &params).await
            }
        },
        Commands::Categories { action } => match action {
            CategoriesAction::List { page } => {
                let params = ListCategoriesParams {
                    limit: page.limit,
                    offset: page.offset,
                    query: page.query,
                    active: !page.all,
                };
                cli::run_categories_list(instance, &params).await
            }
            CategoriesAction::Create {
                title,
                fields,
                inactive,
            } => {
                let params = CreateCategoryParams {
                    description: fields.description,
                    parent: fields.parent,
                    icon: fields.icon,
                    active: !inactive,
                    order: fields.order,
                    ..CreateCategoryParams::new(title)
                };
                cli::run_categories_create(instance, &params).await
            }
            CategoriesAction::Update {
                category_id,
                title,
                fields,
                active,
            } => {
                let params = UpdateCategoryParams {
                    category_id,
                    title,
                    description: fields.description,
                    parent: fields.parent,
                    icon: fields.icon,
                    active,
                    order: fields.order,
                };
                cli::run_categories_update(instance, &params).await
            }
        },
        Commands::Submit {
            item_id,
            producer,
            vars,
            variables,
            quantity,
        } => {
            let item_type = if producer {
                ItemType::Producer
            } else {
                ItemType::Item
            };
            cli::run_submit(
                instance,
                &item_id,
                item_type,
                variables.as_deref(),
                &vars,
                quantity,
            )
            .await
        }
        Commands::Auth { action } => {
            match action {
                AuthAction::Test => cli::run_auth_test(instance).await?,
                AuthAction::Setup => cli::run_auth_setup(),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
