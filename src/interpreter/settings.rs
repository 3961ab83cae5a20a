use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct Settings {
    inner: FxHashMap<Setting, bool>,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            inner: FxHashMap::default(),
        }
    }

    pub fn enable(&mut self, setting: Setting) {
        self.inner.insert(setting, true);
    }

    pub fn disable(&mut self, setting: Setting) {
        self.inner.insert(setting, false);
    }

    pub fn is_enabled(&self, setting: &Setting) -> bool {
        self.inner.get(setting).copied().unwrap_or(false)
    }

    /// All known settings with their current state, ordered by name.
    pub fn as_vec(&self) -> Vec<(Setting, bool)> {
        let mut all: Vec<_> = self.inner.iter().map(|(s, on)| (s.clone(), *on)).collect();
        all.sort_by_key(|(s, _)| s.to_string());
        all
    }
}

impl Default for Settings {
    fn default() -> Settings {
        let mut settings = Settings::new();

        settings.disable(Setting::Debug);

        settings
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Setting {
    /// Show the tokens and the parsed term of every line before evaluating it
    Debug,
}

impl std::str::FromStr for Setting {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Setting::Debug),
            other => Err(format!("Unknown setting {}", other)),
        }
    }
}

impl std::fmt::Display for Setting {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Setting::Debug => "debug",
        };

        fmt.write_str(name)
    }
}
