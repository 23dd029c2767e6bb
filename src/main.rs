use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_client::config::AppConfig;
use portfolio_client::contact_form::adapter::outgoing::HttpFormSubmitter;
use portfolio_client::contact_form::{
    ContactFormSchema, ContactFormService, FieldName, SubmitOutcome,
};
use portfolio_client::projects::adapter::outgoing::{RemoteProjectFeed, StoredProjectCache};
use portfolio_client::projects::ProjectsPageService;
use portfolio_client::resume::adapter::outgoing::{RemoteResumeFeed, StoredResumeCache};
use portfolio_client::resume::ResumePageService;
use portfolio_client::shared::clock::SystemClock;
use portfolio_client::shared::remote::HttpJsonSource;
use portfolio_client::shared::storage::JsonFileStore;
use portfolio_client::theme::adapter::outgoing::{
    FixedColorScheme, ImmediateTransitions, InMemoryDocumentRoot,
};
use portfolio_client::theme::{CustomTheme, Preset, ThemeService};

type Store = Arc<JsonFileStore>;
type Projects = ProjectsPageService<StoredProjectCache<Store>, RemoteProjectFeed<HttpJsonSource>>;
type Resume = ResumePageService<StoredResumeCache<Store>, RemoteResumeFeed<HttpJsonSource>>;

#[derive(Parser, Debug)]
#[command(
    name = "portfolio",
    version,
    about = "Headless driver for the portfolio site's page controllers"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the projects grid.
    Projects(LoadArgs),
    /// Render the resume sections.
    Resume(LoadArgs),
    /// Render both pages; remote loads run concurrently.
    Pages(LoadArgs),
    /// Inspect or change the persisted theme.
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Validate (and optionally submit) the contact form.
    Contact(ContactArgs),
}

#[derive(Args, Debug)]
struct LoadArgs {
    /// Fetch from the remote document instead of the local cache.
    #[arg(long)]
    remote: bool,
}

#[derive(Subcommand, Debug)]
enum ThemeAction {
    Show,
    Preset {
        #[arg(value_parser = ["light", "dark"])]
        name: String,
    },
    Custom {
        #[arg(long, default_value = "light")]
        bg: String,
        #[arg(long, default_value = "dark")]
        text: String,
        #[arg(long, default_value = "modern")]
        font: String,
    },
}

#[derive(Args, Debug)]
struct ContactArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    message: String,
    /// Post the form to CONTACT_FORM_ACTION when it validates.
    #[arg(long)]
    submit: bool,
}

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env().context("Invalid configuration")?;
    info!(store = %config.store_path.display(), "Starting portfolio client");

    let store: Store = Arc::new(JsonFileStore::open(&config.store_path));

    match cli.command {
        Command::Projects(args) => {
            let page = projects_page(&config, store);
            if args.remote {
                page.load_remote().await;
            } else {
                page.load_local();
            }
            println!("{}", page.region().to_html());
        }
        Command::Resume(args) => {
            let page = resume_page(&config, store);
            if args.remote {
                page.load_remote().await;
            } else {
                page.load_local();
            }
            println!("{}", page.region().to_html());
        }
        Command::Pages(args) => {
            let projects = projects_page(&config, store.clone());
            let resume = resume_page(&config, store);
            if args.remote {
                futures::future::join(projects.load_remote(), resume.load_remote()).await;
            } else {
                projects.load_local();
                resume.load_local();
            }
            println!("{}\n{}", projects.region().to_html(), resume.region().to_html());
        }
        Command::Theme { action } => run_theme(&config, store, action),
        Command::Contact(args) => run_contact(&config, args).await?,
    }

    Ok(())
}

fn projects_page(config: &AppConfig, store: Store) -> Projects {
    ProjectsPageService::new(
        StoredProjectCache::new(store),
        RemoteProjectFeed::new(HttpJsonSource::new(config.projects_url.clone())),
    )
}

fn resume_page(config: &AppConfig, store: Store) -> Resume {
    ResumePageService::new(
        StoredResumeCache::new(store),
        RemoteResumeFeed::new(HttpJsonSource::new(config.resume_url.clone())),
    )
}

fn run_theme(config: &AppConfig, store: Store, action: ThemeAction) {
    let mut theme = ThemeService::init(
        store,
        InMemoryDocumentRoot::new(),
        ImmediateTransitions,
        &FixedColorScheme::new(config.prefers_dark),
    );

    match action {
        ThemeAction::Show => {}
        ThemeAction::Preset { name } => {
            if let Some(preset) = Preset::parse(&name) {
                theme.select_preset(preset);
            }
        }
        ThemeAction::Custom { bg, text, font } => {
            theme.apply_custom(CustomTheme::new(&bg, &text, &font));
        }
    }

    println!("data-theme=\"{}\"", theme.active().as_str());
    let style = theme.document().style_text();
    if !style.is_empty() {
        println!("style=\"{}\"", style);
    }
}

async fn run_contact(config: &AppConfig, args: ContactArgs) -> anyhow::Result<()> {
    let schema = ContactFormSchema::with_message_max(config.message_max_length)?;
    let mut form = ContactFormService::new(schema, SystemClock);

    form.input(FieldName::Name, args.name);
    form.input(FieldName::Email, args.email);
    form.input(FieldName::Phone, args.phone);
    form.input(FieldName::Msg, args.message);

    let outcome = match (&config.contact_form_action, args.submit) {
        (Some(action), true) => form
            .submit_with(&HttpFormSubmitter::new(action.clone()))
            .await
            .context("Contact form submission failed")?,
        _ => form.submit(),
    };

    match outcome {
        SubmitOutcome::Blocked { focus, .. } => {
            println!("error: {}", form.error_text());
            println!("focus: {}", focus.as_str());
        }
        SubmitOutcome::Ready(submission) => {
            println!("{}", form.info().text);
            println!("form-errors: {}", submission.form_errors);
        }
    }

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
