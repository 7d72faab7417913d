mod config;
mod ui;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::GameSession;
use common::log;
use common::logger::{self, LogLevel};
use eframe::egui;

use config::{CONFIG_FILE, Config, get_config_manager};
use ui::TicTacToeApp;

const WINDOW_TITLE: &str = "TicTacToe_Game";

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Fixes the random source that picks the starting player.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };

    let config_manager = get_config_manager(&args.config);
    let (config, config_error) = match config_manager.get_or_create_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    logger::init_logger(prefix, config.log_level);
    if let Some(e) = config_error {
        log!("Failed to load config from {}: {}, using defaults", args.config, e);
    } else {
        log!("Loaded config from {}", args.config);
    }
    if config.log_level == LogLevel::Debug {
        log!("Debug logging enabled");
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let session = GameSession::with_cell_size(rng, config.game.first_player, config.window.cell_size);
    log!(
        "Round {} started with seed {}, {} moves first",
        session.round(),
        session.seed(),
        session.board().current_player()
    );

    let board_size = session.board_size_px() as f32;
    let app = TicTacToeApp::new(session, &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_size, board_size])
            .with_resizable(false)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;

    log!("Window closed");

    Ok(())
}
