#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use vcb::domain::config::ShellConfig;
use vcb::kernel::config::load_config;
use vcb_desktop::DesktopApp;
use vcb_logger::Logger;

fn main() -> anyhow::Result<()> {
    // Optional first argument: path to the config file.
    let (config, load_error) = match load_config::<ShellConfig>(std::env::args_os().nth(1)) {
        Ok(config) => (config, None),
        Err(err) => (ShellConfig::default(), Some(err)),
    };

    let _logger = Logger::from_config(env!("CARGO_PKG_NAME"), &config.log)?;

    if let Some(err) = load_error {
        tracing::warn!(error = %err, "Falling back to default shell configuration");
    }
    tracing::info!(brand = %config.brand.label, "Launching desktop shell");

    DesktopApp::new(config).launch(vcb::ui::App);

    Ok(())
}
