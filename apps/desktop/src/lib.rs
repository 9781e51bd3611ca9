use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use vcb::domain::config::ShellConfig;

/// Desktop launcher: a native window hosting the shell in a webview.
///
/// The shell configuration is handed to the component tree as root context.
#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
    config: ShellConfig,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

impl DesktopApp {
    /// Takes window geometry from the `window` section of `config`.
    #[must_use]
    pub fn new(config: ShellConfig) -> Self {
        let window = &config.window;
        Self { title: window.title.clone(), width: window.width, height: window.height, config }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Opens the window and blocks until it is closed.
    pub fn launch(self, root: fn() -> Element) {
        tracing::debug!(title = %self.title, width = self.width, height = self.height, "Opening window");

        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        LaunchBuilder::desktop().with_cfg(cfg).with_context(self.config).launch(root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_comes_from_config() {
        let mut config = ShellConfig::default();
        config.window.title = "Night Shift".to_owned();
        config.window.width = 640.0;

        let app = DesktopApp::new(config);
        assert_eq!(app.title, "Night Shift");
        assert!((app.width - 640.0).abs() < f64::EPSILON);
        assert!((app.height - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn overrides_replace_config_values() {
        let app = DesktopApp::default().with_title("Calls").with_size(300.0, 200.0);
        assert_eq!(app.title, "Calls");
        assert!((app.width - 300.0).abs() < f64::EPSILON);
        assert!((app.height - 200.0).abs() < f64::EPSILON);
        assert_eq!(app.config, ShellConfig::default());
    }
}
