use tracing::{debug, warn};

/// Section shown when the page loads.
pub const DEFAULT_SECTION: &str = "profile";

/// Tab-style switcher: exactly one section of the page is visible at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionNavigator {
    sections: Vec<String>,
    active: Option<usize>,
}

impl SectionNavigator {
    /// Starts on `default`, or on the first section if `default` is unknown.
    pub fn new<I, S>(sections: I, default: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections: Vec<String> = sections.into_iter().map(Into::into).collect();
        let default = normalize(default);
        let active = sections
            .iter()
            .position(|s| s == default)
            .or(if sections.is_empty() { None } else { Some(0) });
        Self { sections, active }
    }

    /// Shows `id` and hides every other section. Accepts `"#id"` as found in
    /// nav-link hrefs. Unknown ids leave the current section in place.
    pub fn activate(&mut self, id: &str) -> bool {
        let id = normalize(id);
        match self.sections.iter().position(|s| s == id) {
            Some(index) => {
                debug!(section = id, "Activating section");
                self.active = Some(index);
                true
            }
            None => {
                warn!(section = id, "Unknown section");
                false
            }
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.sections[i].as_str())
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.active() == Some(normalize(id))
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// `href` of the nav link pointing at `id`.
    pub fn href(id: &str) -> String {
        format!("#{}", normalize(id))
    }
}

fn normalize(id: &str) -> &str {
    id.trim().trim_start_matches('#')
}
