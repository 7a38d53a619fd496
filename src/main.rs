use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use std::net::SocketAddr;
use std::process;
use terminal_size::{terminal_size, Width};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use rosterly::api::{self, ApiClient};
use rosterly::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use rosterly::handlers;
use rosterly::models::{AppState, CardFields, EditSession, Member, NewMemberDraft, Status};
use rosterly::search::filter_members;

// Embed the default assets in the binary
const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");
const CARD_SCRIPT: &str = include_str!("../static/app.js");

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);

    let client = reqwest::Client::builder()
        .user_agent(format!("Rosterly/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client");

    AppState {
        api: ApiClient::new(client, config::get_api_base_url()),
        public_base_url: config::get_public_base_url(),
        custom_css: None,
    }
}

fn build_app(state: AppState) -> Router {
    // Always serve styles.css - use custom if provided, otherwise use embedded default
    let stylesheet_content = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    let app = Router::new()
        .route("/", get(handlers::dashboard::dashboard_get))
        .route("/members", post(handlers::members::members_create))
        .route("/members/:member_id/save", post(handlers::members::member_save))
        .route(
            "/members/:member_id/delete",
            post(handlers::members::member_delete),
        )
        .route(
            "/static/styles.css",
            get(move || {
                let css = stylesheet_content.clone();
                async move { ([(CONTENT_TYPE, "text/css")], css) }
            }),
        )
        .route(
            "/static/app.js",
            get(|| async { ([(CONTENT_TYPE, "text/javascript")], CARD_SCRIPT) }),
        )
        .layer(TraceLayer::new_for_http());

    app.nest_service(
        "/static",
        ServiceBuilder::new()
            .layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("public, max-age=31536000, immutable"),
            ))
            .service(ServeDir::new("static")),
    )
    .with_state(state)
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!(
                    "{} {}: {}",
                    yansi::Paint::red("Failed to read custom stylesheet at"),
                    path,
                    e
                );
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_app(state.clone());
    tracing::info!(%addr, backend = %state.api.base_url(), "Starting Rosterly server");
    println!(
        "{} {}",
        yansi::Paint::new("Dashboard running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new(
                    "Please stop any process using this port, or start the server with a different --port value."
                )
                .yellow()
            );
            process::exit(1);
        }
    }
}

fn print_members(members: &[Member]) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w - 4);
    }
    table.set_header(vec!["ID", "Name", "Email", "Role", "Status"]);
    for m in members {
        table.add_row(vec![
            m.id.as_str(),
            m.name.as_str(),
            m.email.as_str(),
            m.role.as_str(),
            m.status.as_str(),
        ]);
    }
    println!("\n{table}\n");
}

fn exit_with_api_error(action: &str, e: api::ApiError) -> ! {
    tracing::error!(error = %e, "{action} failed");
    eprintln!("{}: {}", yansi::Paint::new(action).red(), e);
    process::exit(1);
}

// Starter records the dashboard demos ship with; Marcus needs a status
// fix-up after creation because create always starts members as Active.
const SEED_MEMBERS: &[(&str, &str, &str, &str)] = &[
    ("Alex Rivera", "alex.rivera@example.com", "Admin", "Active"),
    ("Sarah Chen", "s.chen@design.co", "Editor", "Active"),
    ("Marcus Wright", "m.wright@tech.io", "Viewer", "Inactive"),
    ("Elena Rodriguez", "elena.rod@startup.com", "Editor", "Active"),
];

#[derive(Parser)]
#[command(
    name = "rosterly",
    author,
    version,
    about = "Rosterly member-directory admin",
    long_about = r#"Rosterly: a self-hosted admin dashboard for a member directory.

The `serve` command runs a local web dashboard (searchable grid of editable
member cards) against the REST backend configured via API_BASE_URL; the
`members` subcommands perform the same list/add/update/remove operations from
the terminal. Use `--env-file` or environment variables to point at the
backend.

Examples:
  1) Run the dashboard (dev):
      cargo run -- serve --host 127.0.0.1 --port 8080
  2) List members from a script:
      rosterly members list --query editor
  3) Load the demo directory into a fresh backend:
      rosterly members seed
"#,
    after_help = "Use `rosterly <subcommand> --help` for subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web dashboard
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration (env vars / backend connectivity)
    #[command(
        about = "Validate configuration and ensure backend connectivity.",
        long_about = "Check that API_BASE_URL is set and that the configured members resource answers a list request."
    )]
    CheckConfig { env_file: Option<String> },
    /// Manage members via the configured backend
    #[command(
        about = "Manage directory members via the backend (list, add, update, remove, seed)",
        long_about = "These commands perform the same actions the dashboard performs; they make API requests using the configured backend. Be careful with commands that mutate state (update, remove)."
    )]
    Members {
        #[command(subcommand)]
        sub: MemberCommands,
    },
}

#[derive(Subcommand)]
enum MemberCommands {
    /// List members (optional --query to filter)
    #[command(
        about = "List members",
        long_about = "List the member directory. `--query` filters by case-insensitive substring match on name, email, or role, the same filter the dashboard search box applies."
    )]
    List {
        /// Filter by name, email, or role substring
        #[arg(long, short = 'q')]
        query: Option<String>,
    },
    /// Add a member (role: admin|editor|viewer)
    #[command(
        about = "Add a member",
        long_about = "Create a member with the given name, email, and role. New members start with status Active; the backend assigns the id."
    )]
    Add {
        name: String,
        email: String,
        role: String,
    },
    /// Update a member's fields
    #[command(
        about = "Update a member",
        long_about = "Read the record, apply the provided field overrides, and PUT the full record back. With no overrides (or overrides equal to the current values) nothing is sent."
    )]
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Remove a member
    #[command(about = "Remove a member", long_about = "Permanently delete a member by id.")]
    Remove { id: String },
    /// Create the demo directory (four starter members)
    #[command(
        about = "Create the demo directory",
        long_about = "Create the four starter members the dashboard demos ship with. Existing records are left alone; duplicates are possible on repeated runs."
    )]
    Seed,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    // Serve the dashboard by default when no subcommand is given
    if cli.command.is_none() {
        let state = build_state_from_env(None);
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    }
    match cli.command.unwrap() {
        Commands::Serve {
            host,
            port,
            env_file,
            stylesheet,
        } => {
            let state = build_state_from_env(env_file.as_deref());
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig { env_file } => {
            config::load_env_file(env_file.as_deref());
            if std::env::var("API_BASE_URL").unwrap_or_default().trim().is_empty() {
                eprintln!(
                    "{}",
                    yansi::Paint::new(format!(
                        "API_BASE_URL is not configured; falling back to {}",
                        config::LOCAL_API_FALLBACK
                    ))
                    .yellow()
                );
            }
            let state = build_state_from_env(None);
            match api::list_members(&state.api).await {
                Ok(members) => {
                    println!(
                        "{}",
                        yansi::Paint::new(format!(
                            "Configuration looks valid ({} members returned)",
                            members.len()
                        ))
                        .green()
                    );
                }
                Err(e) => {
                    eprintln!(
                        "{}: {}",
                        yansi::Paint::new("Configuration appears invalid").red(),
                        e
                    );
                    process::exit(1);
                }
            }
        }
        Commands::Members { sub } => {
            let state = build_state_from_env(None);
            match sub {
                MemberCommands::List { query } => {
                    let all = match api::list_members(&state.api).await {
                        Ok(all) => all,
                        Err(e) => exit_with_api_error("Could not list members", e),
                    };
                    let q = query.unwrap_or_default();
                    let members = filter_members(&all, &q);
                    print_members(&members);
                    if !q.is_empty() {
                        println!(
                            "{}",
                            yansi::Paint::new(format!(
                                "Showing {} of {} members matching '{}'",
                                members.len(),
                                all.len(),
                                q
                            ))
                            .dim()
                        );
                    }
                }
                MemberCommands::Add { name, email, role } => {
                    let draft = NewMemberDraft { name, email, role };
                    let new_member = match draft.validate() {
                        Ok(valid) => valid,
                        Err(notice) => {
                            eprintln!("{}", yansi::Paint::new(notice).red());
                            process::exit(1);
                        }
                    };
                    match api::create_member(&state.api, &new_member).await {
                        Ok(created) => {
                            println!(
                                "{} '{}' {} (id {})",
                                yansi::Paint::new("Member").green(),
                                created.name,
                                yansi::Paint::new("added").green(),
                                created.id
                            );
                        }
                        Err(e) => exit_with_api_error("Could not add member", e),
                    }
                }
                MemberCommands::Update {
                    id,
                    name,
                    email,
                    role,
                    status,
                } => {
                    let all = match api::list_members(&state.api).await {
                        Ok(all) => all,
                        Err(e) => exit_with_api_error("Could not load members", e),
                    };
                    let existing = match all.into_iter().find(|m| m.id == id) {
                        Some(m) => m,
                        None => {
                            eprintln!(
                                "{} '{}' {}",
                                yansi::Paint::new("Member").red(),
                                id,
                                yansi::Paint::new("not found").red()
                            );
                            process::exit(1);
                        }
                    };
                    let working_role = match role {
                        Some(r) => match r.parse() {
                            Ok(r) => r,
                            Err(e) => {
                                eprintln!("{}", yansi::Paint::new(e).red());
                                process::exit(1);
                            }
                        },
                        None => existing.role,
                    };
                    let new_status: Status = match status {
                        Some(s) => match s.parse() {
                            Ok(s) => s,
                            Err(e) => {
                                eprintln!("{}", yansi::Paint::new(e).red());
                                process::exit(1);
                            }
                        },
                        None => existing.status,
                    };
                    let session = EditSession::new(
                        CardFields::of(&existing),
                        CardFields {
                            name: name.unwrap_or_else(|| existing.name.clone()),
                            email: email.unwrap_or_else(|| existing.email.clone()),
                            role: working_role,
                        },
                    );
                    let record = match session.saved_record(
                        &existing.id,
                        new_status,
                        existing.avatar_url.clone(),
                    ) {
                        Some(record) => record,
                        None if new_status != existing.status => Member {
                            status: new_status,
                            ..existing.clone()
                        },
                        None => {
                            println!(
                                "{}",
                                yansi::Paint::new(format!("Nothing to change for '{}'", id)).dim()
                            );
                            return;
                        }
                    };
                    match api::update_member(&state.api, &existing.id, &record).await {
                        Ok(updated) => {
                            println!(
                                "{} '{}' {}",
                                yansi::Paint::new("Member").green(),
                                updated.name,
                                yansi::Paint::new("updated").green()
                            );
                        }
                        Err(e) => exit_with_api_error("Could not update member", e),
                    }
                }
                MemberCommands::Remove { id } => match api::remove_member(&state.api, &id).await {
                    Ok(()) => {
                        println!(
                            "{} '{}' {}",
                            yansi::Paint::new("Member").green(),
                            id,
                            yansi::Paint::new("removed").green()
                        );
                    }
                    Err(e) => exit_with_api_error("Could not remove member", e),
                },
                MemberCommands::Seed => {
                    let mut failures = 0usize;
                    for (name, email, role, status) in SEED_MEMBERS {
                        let draft = NewMemberDraft {
                            name: name.to_string(),
                            email: email.to_string(),
                            role: role.to_string(),
                        };
                        let new_member = draft.validate().expect("seed entries are complete");
                        let created = match api::create_member(&state.api, &new_member).await {
                            Ok(created) => created,
                            Err(e) => {
                                eprintln!(
                                    "{} {}: {}",
                                    yansi::Paint::new("Failed to seed").red(),
                                    name,
                                    e
                                );
                                failures += 1;
                                continue;
                            }
                        };
                        let wanted: Status = status.parse().expect("seed statuses are valid");
                        if wanted != created.status {
                            let record = Member {
                                status: wanted,
                                ..created.clone()
                            };
                            if let Err(e) =
                                api::update_member(&state.api, &created.id, &record).await
                            {
                                eprintln!(
                                    "{} {}: {}",
                                    yansi::Paint::new("Failed to set status for").red(),
                                    name,
                                    e
                                );
                                failures += 1;
                                continue;
                            }
                        }
                        println!(
                            "{} {} ({})",
                            yansi::Paint::new("Seeded").green(),
                            name,
                            created.id
                        );
                    }
                    if failures > 0 {
                        process::exit(1);
                    }
                }
            }
        }
    }
}
