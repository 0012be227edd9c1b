use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use agentdeck_core::constants::DEFAULT_REPLY_DELAY_MS;
use agentdeck_core::tracing_setup::init_tracing;
use agentdeck_core::{ConversationStore, CoreConfig};

use agentdeck_tui::runtime::run_app;
use agentdeck_tui::ui::{self, App};

#[derive(Parser)]
#[command(name = "agentdeck", about = "Terminal manager for simulated AI agents")]
struct Cli {
    /// Delay before a simulated agent reply arrives, in milliseconds
    #[arg(long, default_value_t = DEFAULT_REPLY_DELAY_MS)]
    reply_delay_ms: u64,

    /// Directory the attachment picker opens in (defaults to your home)
    #[arg(long)]
    start_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    // Restore the terminal before showing any panic, or the message is lost
    // to the alternate screen.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        eprintln!("\n\n=== PANIC ===");
        eprintln!("{}", panic_info);
        eprintln!("=============\n");
        original_hook(panic_info);
    }));

    let mut config = CoreConfig::new(cli.reply_delay_ms);
    if let Some(dir) = cli.start_dir {
        config = config.with_start_dir(dir);
    }

    let mut store = ConversationStore::new(&config);
    let reply_rx = store
        .take_reply_rx()
        .ok_or_else(|| anyhow::anyhow!("Store already has an active reply receiver"))?;

    let mut app = App::new(store, config);
    let mut terminal = ui::terminal::init()?;

    let result = run_app(&mut terminal, &mut app, reply_rx).await;

    ui::terminal::restore()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
