mod common;
mod config;
mod error;
mod headless;
mod network;
mod ui;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use eframe::egui;
use tokio::sync::mpsc;

use config::AppConfig;
use error::AppError;
use network::{ApiClient, BackendApi};
use ui::DashboardApp;
use ui::state::AppState;
use ui::text::Locale;

#[derive(Parser)]
#[command(
    name = "bot_admin_dashboard",
    version,
    about = "Admin dashboard for a Telegram broadcast bot"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Backend origin, overrides the config file
    #[arg(long, env = "BOT_ADMIN_API_URL", value_name = "URL")]
    api_url: Option<String>,
    /// Interface language, overrides the config file
    #[arg(long, env = "BOT_ADMIN_LOCALE", value_enum)]
    locale: Option<Locale>,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
enum Mode {
    /// Load once and print the dashboard figures (no UI)
    Stats,
    /// Broadcast a message without opening the window
    Send {
        /// Message text, sent exactly as given
        text: String,
    },
    /// Write the effective configuration to the config file
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config).with_overrides(cli.api_url, cli.locale);

    if cli.mode == Some(Mode::InitConfig) {
        config::save_config(&cli.config, &app_config).map_err(|source| AppError::Config {
            path: cli.config.clone(),
            source,
        })?;
        log::info!("Wrote configuration to {}", cli.config);
        return Ok(());
    }

    let http = network::transport::build_http_client(&app_config).map_err(AppError::HttpClient)?;
    let api = BackendApi::new(http, &app_config.api_base_url);

    let outcome = match cli.mode {
        Some(Mode::Stats) => headless::run_stats(&api).await.map(|_| ()),
        Some(Mode::Send { text }) => headless::run_send(&api, &app_config, text)
            .await
            .map(|_| ()),
        Some(Mode::InitConfig) => Ok(()),
        None => return Ok(run_dashboard(api, app_config).await?),
    };

    if let Err(err) = &outcome {
        log::error!("{err}");
    }
    Ok(outcome?)
}

async fn run_dashboard(api: BackendApi, app_config: AppConfig) -> Result<(), eframe::Error> {
    // UI -> worker
    let (cmd_tx, cmd_rx) = mpsc::channel(16);
    // worker -> UI
    let (event_tx, event_rx) = mpsc::channel(16);

    tokio::spawn(ApiClient::new(api, event_tx, cmd_rx).run());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        app_config.locale.labels().app_title,
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("DashboardApp should only be initialized once");

            log::info!("Dashboard started against {}", app_config.api_base_url);

            let state = AppState::new(app_config.notification_ttl());
            Ok(Box::new(DashboardApp::new(
                cc,
                state,
                app_config.locale.labels(),
                cmd_tx.clone(),
                event_receiver,
            )))
        }),
    )
}
