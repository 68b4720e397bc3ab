//! Entry point for the folio portfolio desktop app.

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use folio_app::components::App;
use folio_ui::FilePreferences;

/// App-specific CSS embedded at compile time.
const APP_CSS: &str = include_str!("../assets/styles.css");

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Single-page personal portfolio")]
struct Args {
    /// Remove the persisted appearance preference before starting
    #[arg(long)]
    clean: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let args = Args::parse();

    if args.clean {
        let prefs = FilePreferences::new(FilePreferences::default_path());
        match prefs.clear() {
            Ok(()) => tracing::info!("--clean: appearance preference removed"),
            Err(err) => tracing::error!("failed to clear appearance preference: {err}"),
        }
    }

    tracing::info!("Starting folio");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Yashwanth Chunchula - Portfolio")
                        .with_inner_size(LogicalSize::new(1280, 860)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700;800&display=swap" rel="stylesheet">
                    <style>{}</style>
                    <style>{}</style>
                    "#,
                    folio_ui::SHARED_CSS,
                    APP_CSS,
                )),
        )
        .launch(App);
}
