use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use contact_client::{ContactFormView, HttpTransport, SubmissionController, SubmitOutcome};
use shared::domain::{FormField, FormSchema};
use storage::{MemoryPreferences, PreferenceStore, Storage};
use theme_engine::{DocumentRoot, ThemeController, ThemeToggleView, ToggleIcon};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;

use config::{load_settings, normalize_database_url, Settings, DEFAULT_SETTINGS_FILE};

#[derive(Parser, Debug)]
#[command(about = "Theme and contact tooling for the studio site")]
struct Cli {
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect or flip the persisted light/dark mode.
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Send one contact message to the configured endpoint.
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        app_interest: Option<String>,
        #[arg(long)]
        endpoint: Option<String>,
        /// Use the form variant without an app-interest field.
        #[arg(long)]
        basic: bool,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum ThemeAction {
    Show,
    Toggle,
    Css,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = load_settings(&cli.config);

    match cli.command {
        Command::Theme { action } => run_theme(&settings, action).await,
        Command::Contact {
            name,
            email,
            message,
            app_interest,
            endpoint,
            basic,
        } => {
            let mut settings = settings;
            if let Some(endpoint) = endpoint {
                settings.contact_endpoint = endpoint;
            }
            let schema = if basic {
                FormSchema::basic()
            } else {
                FormSchema::canonical()
            };
            run_contact(&settings, schema, [name, email, message], app_interest).await
        }
    }
}

/// Opens the configured preference database, or an in-memory store when it
/// cannot be opened so the theme still works for this run.
async fn open_preferences(settings: &Settings) -> Arc<dyn PreferenceStore> {
    let database_url = normalize_database_url(&settings.database_url);
    match Storage::new(&database_url).await {
        Ok(storage) => Arc::new(storage),
        Err(error) => {
            warn!(
                %database_url,
                %error,
                "failed to open preference database; theme will not be remembered"
            );
            Arc::new(MemoryPreferences::new())
        }
    }
}

async fn run_theme(settings: &Settings, action: ThemeAction) -> Result<()> {
    let store = open_preferences(settings).await;
    let mut theme = ThemeController::initialize(store, DocumentRoot::new()).await;
    theme.mount().await;

    match action {
        ThemeAction::Show => {
            let view = ThemeToggleView::for_mode(theme.current_mode());
            let icon = match view.highlighted {
                ToggleIcon::Sun => "sun",
                ToggleIcon::Moon => "moon",
            };
            println!("mode={} highlighted={icon}", theme.current_mode());
        }
        ThemeAction::Toggle => {
            let mode = theme.toggle().await;
            info!(%mode, persisted = theme.is_persistent(), "theme toggled");
            println!("mode={mode}");
        }
        ThemeAction::Css => {
            print!("{}", theme.surface().to_css());
            println!("class=\"{}\"", theme.surface().class_attribute());
        }
    }

    Ok(())
}

async fn run_contact(
    settings: &Settings,
    schema: FormSchema,
    [name, email, message]: [String; 3],
    app_interest: Option<String>,
) -> Result<()> {
    if let Some(interest) = &app_interest {
        if !schema.classification_options.contains(interest) {
            bail!(
                "unknown app interest '{interest}'; expected one of: {}",
                schema.classification_options.join(", ")
            );
        }
    }

    let transport = HttpTransport::with_timeout(settings.base_url()?, settings.request_timeout())
        .context("failed to build http client")?;
    let controller =
        SubmissionController::new(settings.submission_config(schema), Arc::new(transport));

    controller.update_field(FormField::Name, name);
    controller.update_field(FormField::Email, email);
    controller.update_field(FormField::Message, message);
    if let Some(interest) = app_interest {
        controller.update_field(FormField::Classification, interest);
    }
    controller.form().validate()?;

    let outcome = controller.submit().await;
    let view = ContactFormView::from_controller(&controller);
    let notice = view
        .notice
        .as_ref()
        .map(|notice| notice.text().to_string())
        .unwrap_or_default();

    match outcome {
        SubmitOutcome::Delivered => {
            println!("{} {notice}", view.button_label);
            Ok(())
        }
        SubmitOutcome::Failed => bail!("{notice}"),
        SubmitOutcome::Rejected => bail!("a submission is already in progress"),
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
