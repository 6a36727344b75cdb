//! uaem-survey - terminal client for the UAEM teacher evaluation.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use uaem_survey::adapters::render::render;
use uaem_survey::adapters::terminal::{parse_command, CommandError};
use uaem_survey::adapters::{
    ApiClient, FileActivityLog, FileSessionStore, HttpAuthGateway, HttpCatalogSource,
    HttpSurveyGateway, MockCatalogSource, MockSurveyGateway,
};
use uaem_survey::application::{
    LoadSurveyCommand, LoadSurveyError, LoadSurveyHandler, LoginCommand, LoginError, LoginHandler,
    LogoutHandler, SubmitEvaluationsHandler, SurveySession,
};
use uaem_survey::config::{AppConfig, ConfigError};
use uaem_survey::domain::catalog::fallback_professors;
use uaem_survey::domain::foundation::{
    DomainError, ErrorCode, ProfessorId, Role, SessionUser, UserId,
};
use uaem_survey::domain::survey::Effect;
use uaem_survey::ports::{
    ActivityLog, ActivityLogError, ApiError, CatalogSource, SessionStore, SessionStoreError,
    SurveyGateway,
};

#[derive(Debug, Parser)]
#[command(name = "uaem-survey", version, about = "UAEM teacher evaluation survey client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Log in as a student and store the session locally
    Login {
        #[arg(long)]
        matricula: String,
        #[arg(long)]
        name: String,
    },
    /// Answer the evaluation survey interactively
    Run {
        /// Use the bundled catalog and a simulated backend
        #[arg(long)]
        offline: bool,
    },
    /// Forget the stored session
    Logout,
    /// Show recent activity, newest first
    Activity {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Login(#[from] LoginError),

    #[error(transparent)]
    Load(#[from] LoadSurveyError),

    #[error(transparent)]
    Session(#[from] SessionStoreError),

    #[error(transparent)]
    Activity(#[from] ActivityLogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Login { .. } => "login",
            Command::Run { .. } => "run",
            Command::Logout => "logout",
            Command::Activity { .. } => "activity",
        }
    }
}

impl From<CliError> for DomainError {
    fn from(err: CliError) -> Self {
        match err {
            CliError::Login(e) => e.into(),
            CliError::Load(e) => e.into(),
            CliError::Config(e) => DomainError::new(ErrorCode::ValidationFailed, e.to_string()),
            CliError::Api(e) if e.requires_login() => {
                DomainError::new(ErrorCode::Unauthorized, e.to_string())
            }
            CliError::Api(e) => DomainError::new(ErrorCode::InternalError, e.to_string()),
            CliError::Session(e) => DomainError::new(ErrorCode::StorageError, e.to_string()),
            CliError::Activity(e) => DomainError::new(ErrorCode::StorageError, e.to_string()),
            CliError::Io(e) => DomainError::new(ErrorCode::InternalError, e.to_string()),
        }
    }
}

/// Process exit status for a failed command.
fn exit_code(code: ErrorCode) -> ExitCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::OutOfRange => ExitCode::from(2),
        ErrorCode::Unauthorized | ErrorCode::Forbidden => ExitCode::from(3),
        ErrorCode::StorageError | ErrorCode::InternalError => ExitCode::FAILURE,
    }
}

/// Ports shared by every subcommand.
struct Context {
    config: AppConfig,
    store: Arc<dyn SessionStore>,
    activity: Arc<dyn ActivityLog>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            let error = DomainError::from(CliError::from(e));
            eprintln!("error: {}", error);
            return exit_code(error.code);
        }
    };
    init_tracing(&config);

    let ctx = Context {
        store: Arc::new(FileSessionStore::new(&config.storage.session_path)),
        activity: Arc::new(FileActivityLog::new(
            &config.storage.activity_log_path,
            config.storage.activity_log_capacity,
        )),
        config,
    };

    let command = cli.command.name();
    let result = match cli.command {
        Command::Login { matricula, name } => login(&ctx, matricula, name).await,
        Command::Run { offline } => run(&ctx, offline).await,
        Command::Logout => logout(&ctx).await,
        Command::Activity { limit } => activity(&ctx, limit).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let error = DomainError::from(e).with_detail("command", command);
            tracing::error!(code = %error.code, command, message = %error.message, "command failed");
            eprintln!("error: {}", error);
            if error.code == ErrorCode::Unauthorized {
                eprintln!("Log in with `uaem-survey login` ({})", ctx.config.client.login_path);
            }
            exit_code(error.code)
        }
    }
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.client.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn api_client(ctx: &Context) -> Result<Arc<ApiClient>, CliError> {
    let session = ctx.store.load().await?;
    Ok(Arc::new(ApiClient::new(&ctx.config.api, session, ctx.store.clone())?))
}

async fn login(ctx: &Context, matricula: String, name: String) -> Result<(), CliError> {
    let client = Arc::new(ApiClient::new(&ctx.config.api, None, ctx.store.clone())?);
    let handler = LoginHandler::new(
        Arc::new(HttpAuthGateway::new(client)),
        ctx.store.clone(),
        ctx.activity.clone(),
    );

    let session = handler.handle(LoginCommand { matricula, name }).await?;
    println!("Welcome, {} ({})", session.user.full_name(), session.user.role.label());
    Ok(())
}

async fn logout(ctx: &Context) -> Result<(), CliError> {
    let client = api_client(ctx).await?;
    let handler = LogoutHandler::new(
        Arc::new(HttpAuthGateway::new(client)),
        ctx.store.clone(),
        ctx.activity.clone(),
    );

    if handler.handle().await? {
        println!("Logged out.");
    } else {
        println!("No active session.");
    }
    Ok(())
}

async fn activity(ctx: &Context, limit: usize) -> Result<(), CliError> {
    let entries = ctx.activity.recent(limit).await?;
    if entries.is_empty() {
        println!("No recorded activity.");
    }
    for entry in entries {
        println!(
            "{}  {:<16}  {}  {}",
            entry.timestamp.to_rfc3339(),
            entry.kind.as_str(),
            entry.user_name,
            entry.description
        );
    }
    Ok(())
}

fn offline_student() -> SessionUser {
    SessionUser {
        id: UserId::new(0),
        first_name: "Offline".to_string(),
        last_name: "Student".to_string(),
        email: None,
        matricula: None,
        role: Role::Student,
    }
}

async fn run(ctx: &Context, offline: bool) -> Result<(), CliError> {
    let (source, gateway, user) = if offline {
        let professors: Vec<ProfessorId> = fallback_professors().iter().map(|p| p.id).collect();
        let user = ctx
            .store
            .load()
            .await?
            .map(|s| s.user)
            .unwrap_or_else(offline_student);
        (
            Arc::new(MockCatalogSource::new()) as Arc<dyn CatalogSource>,
            Arc::new(MockSurveyGateway::new().with_pending_for(&professors)) as Arc<dyn SurveyGateway>,
            Some(user),
        )
    } else {
        let client = api_client(ctx).await?;
        let user = client.session().map(|s| s.user.clone());
        (
            Arc::new(HttpCatalogSource::new(client.clone())) as Arc<dyn CatalogSource>,
            Arc::new(HttpSurveyGateway::new(client)) as Arc<dyn SurveyGateway>,
            user,
        )
    };

    let loaded = LoadSurveyHandler::new(source)
        .handle(LoadSurveyCommand { user })
        .await?;
    if loaded.origins.any_fallback() {
        println!("Some survey data could not be loaded; showing the bundled defaults.\n");
    }

    let submitter = Arc::new(SubmitEvaluationsHandler::new(gateway, ctx.activity.clone()));
    let mut session = SurveySession::new(loaded, submitter);

    println!("{}", render(session.wizard(), session.student()));
    println!("Commands: a <prof#> <1-5> | c <prof#> <text> | n | p | s | y | x | q");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let intent = match parse_command(&line).and_then(|c| c.into_intent(session.wizard())) {
            Ok(Some(intent)) => intent,
            Ok(None) => return Ok(()),
            Err(CommandError::Empty) => continue,
            Err(e) => {
                println!("! {}", e);
                continue;
            }
        };

        let effects = session.dispatch(intent).await;
        println!("{}", render(session.wizard(), session.student()));

        for effect in effects {
            match effect {
                Effect::Alert(message) => println!("*** {} ***", message),
                Effect::Redirect => {
                    println!("Returning to {}", ctx.config.client.redirect_to);
                    return Ok(());
                }
                Effect::ScrollToTop | Effect::Dispatch(_) => {}
            }
        }
    }
    Ok(())
}
