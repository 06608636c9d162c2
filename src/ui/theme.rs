use crate::config::ThresholdsConfig;

/// Named text styles used by the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Reset,
    Bright,
    Dim,
    Cyan,
    Yellow,
    Red,
    Green,
    Blue,
}

impl Style {
    pub fn ansi(self) -> &'static str {
        match self {
            Style::Reset => "\x1b[0m",
            Style::Bright => "\x1b[1m",
            Style::Dim => "\x1b[2m",
            Style::Cyan => "\x1b[36m",
            Style::Yellow => "\x1b[33m",
            Style::Red => "\x1b[31m",
            Style::Green => "\x1b[32m",
            Style::Blue => "\x1b[34m",
        }
    }
}

/// Maps styles to escape sequences. The plain palette emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub const fn ansi() -> Self {
        Palette { enabled: true }
    }

    pub const fn plain() -> Self {
        Palette { enabled: false }
    }

    pub fn for_choice(choice: ColorChoice, stdout_is_terminal: bool) -> Self {
        match choice {
            ColorChoice::Always => Palette::ansi(),
            ColorChoice::Never => Palette::plain(),
            ColorChoice::Auto if stdout_is_terminal => Palette::ansi(),
            ColorChoice::Auto => Palette::plain(),
        }
    }

    pub fn code(&self, style: Style) -> &'static str {
        if self.enabled { style.ansi() } else { "" }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn from_config_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "auto" => ColorChoice::Auto,
            "never" | "mono" | "off" => ColorChoice::Never,
            _ => ColorChoice::Always,
        }
    }
}

/// Three-tier bar color by fraction of the largest value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub alert: f64,
    pub warning: f64,
}

impl Default for Gradient {
    fn default() -> Self {
        Gradient::from(&ThresholdsConfig::default())
    }
}

impl From<&ThresholdsConfig> for Gradient {
    fn from(config: &ThresholdsConfig) -> Self {
        Gradient {
            alert: config.alert,
            warning: config.warning,
        }
    }
}

impl Gradient {
    pub fn style(&self, ratio: f64) -> Style {
        if ratio > self.alert {
            Style::Red
        } else if ratio > self.warning {
            Style::Yellow
        } else {
            Style::Green
        }
    }
}
