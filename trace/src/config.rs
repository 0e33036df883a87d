/// Config controls how a StatusRegistry hands out statuses.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Config {
    /// empty_description_is_absent makes an empty description behave like a
    /// missing one, so `create(code, Some(""))` returns the shared template.
    ///
    /// When false, an empty description produces a new Status whose
    /// description is `Some("")`.
    pub empty_description_is_absent: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            empty_description_is_absent: true,
        }
    }
}

impl Config {
    /// is_absent reports whether a description should be treated as missing.
    pub(crate) fn is_absent(&self, description: Option<&str>) -> bool {
        match description {
            None => true,
            Some(d) => d.is_empty() && self.empty_description_is_absent,
        }
    }
}
