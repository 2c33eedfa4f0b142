use derivative::Derivative;

// Runtime switches for the menu loop
#[derive(Derivative, Debug, Clone, Copy, PartialEq, Eq)]
#[derivative(Default)]
pub struct Settings {
    // Clear the terminal after each finished action
    #[derivative(Default(value = "true"))]
    pub clear_screen: bool,
    // Style warnings and priority highlights with ANSI colors
    #[derivative(Default(value = "true"))]
    pub color: bool,
}

impl Settings {
    // Settings for the given command line flags.
    // Clearing and colors only make sense when talking to a terminal, and
    // NO_COLOR turns colors off as well.
    pub fn for_terminal(no_clear: bool, no_color: bool, is_tty: bool) -> Settings {
        let mut settings = Settings::default();
        if no_clear || !is_tty {
            settings.clear_screen = false;
        }
        if no_color || !is_tty || std::env::var_os("NO_COLOR").is_some() {
            settings.color = false;
        }
        settings
    }

    // Plain settings for scripted sessions
    #[cfg(test)]
    pub fn plain() -> Settings {
        Settings {
            clear_screen: false,
            color: false,
        }
    }
}
