mod colors;
mod config;
mod offline;
mod state;
mod ui;

use clap::Parser;
use common::{log, logger};
use eframe::egui;

use config::{get_config_manager, Screen, CONFIG_FILE};
use offline::spawn_snake_session;
use state::SharedState;
use ui::ArcadeApp;

#[derive(Parser)]
#[command(name = "mini_arcade")]
struct Args {
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,
    /// Screen to open instead of the one used last time.
    #[arg(long, value_enum)]
    screen: Option<Screen>,
    /// Fixed seed for food placement.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Arcade".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(&args.config).get_config()?;
    log!("Loaded config from {}", args.config);

    let screen = args.screen.or(config.last_screen).unwrap_or(Screen::Menu);

    let shared_state = SharedState::new();
    let command_sender = spawn_snake_session(
        config.snake.clone(),
        config.high_score_file.clone(),
        args.seed,
        shared_state.clone(),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 760.0])
            .with_title(screen.title()),
        ..Default::default()
    };

    eframe::run_native(
        "Mini Arcade",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ArcadeApp::new(
                screen,
                &config,
                args.config,
                shared_state,
                command_sender,
            )))
        }),
    )?;

    Ok(())
}
