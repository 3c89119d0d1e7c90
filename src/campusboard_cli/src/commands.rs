use std::process::ExitCode;

use campusboard_adapters::{ClientSettings, CookieFileTokenStore, ReqwestServiceClient};
use campusboard_application::{
    CreatePostForm, PostField, Resolution, SignUpField, SignUpForm, SubmitRejected,
};
use campusboard_core::{RequestBuilder, SessionToken, TokenStore};
use color_eyre::eyre::{Result, WrapErr};

use crate::cli::{Cli, Commands, SessionAction};

/// Everything a command needs, wired from settings.
pub struct App {
    settings: ClientSettings,
    token_store: CookieFileTokenStore,
    client: ReqwestServiceClient,
}

impl App {
    pub fn from_settings(settings: ClientSettings) -> Result<Self> {
        let token_store = CookieFileTokenStore::new(settings.session.store_path.clone());
        let client = ReqwestServiceClient::with_timeout(settings.timeout())
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self {
            settings,
            token_store,
            client,
        })
    }

    fn request_builder(&self) -> RequestBuilder<CookieFileTokenStore> {
        RequestBuilder::new(self.settings.api_target(), self.token_store.clone())
    }

    fn token_name(&self) -> &str {
        &self.settings.session.token_name
    }
}

pub fn load_settings(cli: &Cli) -> Result<ClientSettings> {
    let mut settings = match &cli.config {
        Some(path) => ClientSettings::load_from(path),
        None => ClientSettings::load(),
    }
    .wrap_err("Failed to load configuration")?;

    if let Some(domain) = &cli.domain {
        settings.api.domain = Some(domain.clone());
    }

    Ok(settings)
}

pub async fn run(app: &App, command: Commands) -> Result<ExitCode> {
    let succeeded = match command {
        Commands::Signup {
            email,
            username,
            password,
        } => sign_up(app, email, username, password).await,
        Commands::Post {
            label,
            title,
            content,
        } => create_post(app, label, title, content).await,
        Commands::Session { action } => session(app, action),
    }?;

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn sign_up(app: &App, email: String, username: String, password: String) -> Result<bool> {
    let mut form = SignUpForm::new(app.client.clone(), app.request_builder());
    form.open();
    form.set_field(SignUpField::Email, email);
    form.set_field(SignUpField::Username, username);
    form.set_field(SignUpField::Password, password);

    let outcome = form.submit().await;
    if let Ok(Resolution::Succeeded) = outcome {
        match form.registration() {
            Some(registration) => println!(
                "Account created for {} <{}>",
                registration.username, registration.email
            ),
            None => println!("Account created"),
        }
        return Ok(true);
    }

    report_failure(outcome, form.error_message());
    Ok(false)
}

async fn create_post(app: &App, label: String, title: String, content: String) -> Result<bool> {
    let mut form = CreatePostForm::new(app.client.clone(), app.request_builder());
    form.open();
    form.set_field(PostField::Label, label);
    form.set_field(PostField::Title, title);
    form.set_field(PostField::Content, content);

    let outcome = form.submit().await;
    if let Ok(Resolution::Succeeded) = outcome {
        if let Some(target) = form.take_redirect() {
            println!("{target}");
        }
        return Ok(true);
    }

    report_failure(outcome, form.error_message());
    Ok(false)
}

fn report_failure(outcome: std::result::Result<Resolution, SubmitRejected>, message: &str) {
    match outcome {
        Err(SubmitRejected::Incomplete) => eprintln!("Label, title and content are required"),
        Err(SubmitRejected::Misconfigured(e)) => {
            tracing::error!(error = %e, "Client is misconfigured");
            eprintln!("{message} ({e}; set CAMPUSBOARD__API__DOMAIN or pass --domain)");
        }
        Err(SubmitRejected::InFlight) => eprintln!("A submission is already in flight"),
        Ok(Resolution::Stale) => eprintln!("Submission was discarded"),
        _ => eprintln!("{message}"),
    }
}

fn session(app: &App, action: SessionAction) -> Result<bool> {
    match action {
        SessionAction::Set { token } => {
            app.token_store
                .save(app.token_name(), SessionToken::new(token))
                .wrap_err("Failed to store session token")?;
            println!("Session token stored");
        }
        SessionAction::Clear => {
            app.token_store
                .remove(app.token_name())
                .wrap_err("Failed to clear session token")?;
            println!("Session token cleared");
        }
        SessionAction::Show => {
            let token = app
                .token_store
                .load(app.token_name())
                .wrap_err("Failed to read session token")?;
            match token {
                Some(token) if !token.is_empty() => println!("Session token present"),
                _ => println!("No session token"),
            }
        }
    }

    Ok(true)
}
