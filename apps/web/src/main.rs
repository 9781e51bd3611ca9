use dioxus::logger::tracing::Level;

/// Browser entry point. The shell runs with default configuration; the router follows
/// the browser history, so links navigate without reloading the page.
fn main() -> anyhow::Result<()> {
    dioxus::logger::init(Level::INFO)?;
    dioxus::LaunchBuilder::web().launch(vcb::ui::App);
    Ok(())
}
