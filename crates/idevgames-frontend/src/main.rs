use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use eyre::Result;

use idevgames_client::{Environment, HttpClient, SnippetApi};
use idevgames_core::{Icon, routes};
use idevgames_frontend::config::{self, API_URL_ENV, FrontendConfig};
use idevgames_frontend::form::SnippetForm;
use idevgames_frontend::list::{ListFooter, ListParams};
use idevgames_frontend::pages::{self, Homepage};
use idevgames_frontend::render;
use idevgames_frontend::AppContext;

#[derive(Parser)]
#[command(name = "idevgames", version, about = "Browse and edit iDevGames snippets")]
struct Cli {
    /// Server base URL. Defaults to the saved config, then IDEVGAMES_ENV.
    #[arg(long, global = true, env = API_URL_ENV)]
    api_url: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// The newest uDevGames entries and links.
    Home,
    /// One page of a taxonomy.
    List {
        taxonomy: String,
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long)]
        show_hidden: bool,
    },
    Show { id: i32 },
    /// Share a new snippet (editors only).
    New {
        taxonomy: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Change an existing snippet (editors only).
    Edit {
        id: i32,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Print the GitHub URL to log in with.
    Login,
    /// Finish logging in with the code GitHub redirected back with.
    Callback { code: String },
    Logout,
    Whoami,
    /// The icons a snippet may use.
    Icons,
    /// Show the saved config, with the session redacted.
    Config {
        /// Delete the saved config instead, logging this machine out.
        #[arg(long)]
        reset: bool,
    },
}

/// Unset fields keep their current (or blank) value.
#[derive(Args)]
struct FieldArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    shared_by: Option<String>,
    #[arg(long)]
    href: Option<String>,
    /// e.g. 2021-01-23
    #[arg(long)]
    shared_on: Option<String>,
    #[arg(long)]
    summary: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    icon: Option<Icon>,
    #[arg(long)]
    hidden: Option<bool>,
}

impl FieldArgs {
    fn apply(self, form: &mut SnippetForm) {
        if let Some(v) = self.title {
            form.title = v;
        }
        if let Some(v) = self.shared_by {
            form.shared_by = v;
        }
        if let Some(v) = self.href {
            form.href = v;
        }
        if let Some(v) = self.shared_on {
            form.shared_on = v;
        }
        if let Some(v) = self.summary {
            form.summary = v;
        }
        if let Some(v) = self.description {
            form.description = v;
        }
        if let Some(v) = self.icon {
            form.icon = v;
        }
        if let Some(v) = self.hidden {
            form.hidden = v;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut saved = config::load_or_default()?;
    let api_url = saved.resolve_api_url(cli.api_url.clone(), Environment::from_env());
    let client = Arc::new(HttpClient::new(saved.client_config(&api_url)?)?);
    if let Some(cookie) = saved.session_cookie.as_deref() {
        client.restore_cookies(cookie);
    }
    tracing::debug!(api_url = %api_url, "starting");

    let api: Arc<dyn SnippetApi> = client.clone();
    let ctx = AppContext::new(api);

    let current_path = match &cli.command {
        Command::Callback { .. } => routes::GITHUB_CALLBACK,
        _ => routes::HOME,
    };
    ctx.session.probe(current_path).await;
    let is_admin = ctx.session.is_admin().await;

    match cli.command {
        Command::Home => {
            let home = Homepage::new(&ctx);
            home.load().await;
            for section in &home.sections {
                println!("== {} ==", section.heading);
                let params = section.list.params().await;
                let state = section.list.state().await;
                print!(
                    "{}",
                    render::snippet_list(params.as_ref(), &state, ListFooter::MoreLink, is_admin)
                );
                println!();
            }
            println!("{}", render::session_button(&ctx.session.state().await));
        }
        Command::List {
            taxonomy,
            page,
            show_hidden,
        } => {
            let params = ListParams::new(&taxonomy, page, show_hidden);
            let view = pages::snippets_page(&ctx, params.clone()).await;
            let state = view.state().await;
            print!(
                "{}",
                render::snippet_list(Some(&params), &state, view.footer(), is_admin)
            );
        }
        Command::Show { id } => {
            let snippet = pages::single_snippet(&ctx, id).await?;
            println!("{}", render::short_snippet(&snippet, is_admin));
            if !snippet.description.is_empty() {
                println!();
                println!("{}", snippet.description);
            }
        }
        Command::New { taxonomy, fields } => {
            let mut form = pages::new_snippet_form(&ctx, jiff::Zoned::now().date()).await?;
            fields.apply(&mut form);
            let created = pages::create_snippet(&ctx, &taxonomy, &form).await?;
            println!("{}", render::short_snippet(&created.snippet, is_admin));
            println!("edit at {}", created.edit_route);
        }
        Command::Edit { id, fields } => {
            let mut edit = pages::edit_snippet_form(&ctx, id).await?;
            let mut form = edit.form.clone();
            fields.apply(&mut form);
            pages::update_snippet(&ctx, &mut edit, form).await?;
            println!("{}", render::short_snippet(&edit.snippet, is_admin));
        }
        Command::Login => {
            let url = ctx.session.begin_login().await?;
            println!("Open {url}");
            println!("then run `idevgames callback <code>` with the code from the redirect.");
        }
        Command::Callback { code } => {
            let state = ctx.session.complete_callback(&code).await?;
            persist_session(&mut saved, &client)?;
            println!("{}", render::session_button(&state));
        }
        Command::Logout => {
            ctx.session.logout().await?;
            persist_session(&mut saved, &client)?;
            println!("{}", render::session_button(&ctx.session.state().await));
        }
        Command::Whoami => {
            let state = ctx.session.state().await;
            println!("{}", render::session_button(&state));
            let permissions = state.permissions();
            if !permissions.is_empty() {
                let tokens: Vec<&str> = permissions.iter().collect();
                println!("permissions: {}", tokens.join(", "));
            }
        }
        Command::Icons => {
            for icon in Icon::all() {
                println!("{:<12} {}", icon.display_name(), icon.path());
            }
        }
        Command::Config { reset: true } => {
            if config::delete_config()? {
                println!("Saved config removed.");
            } else {
                println!("No saved config.");
            }
        }
        Command::Config { reset: false } => {
            let info = config::config_info(&saved);
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Save the jar's session cookie so the next run stays logged in.
fn persist_session(saved: &mut FrontendConfig, client: &HttpClient) -> Result<()> {
    saved.session_cookie = client.cookie_header();
    config::save_config(saved)
}
