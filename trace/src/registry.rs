use std::collections::btree_map;
use std::collections::BTreeMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use log::{debug, trace, warn};

use crate::config::Config;
use crate::status::Status;
use crate::status_codes::{CanonicalCode, StatusCanonicalCode};

lazy_static! {
    /// Process-wide registry for StatusCanonicalCode.
    static ref REGISTRY: StatusRegistry = StatusRegistry::new();
}

/// global_registry returns the process-wide registry used by `Status::create`.
///
/// It is built on first use and never changes afterwards.
pub fn global_registry() -> &'static StatusRegistry {
    &REGISTRY
}

/// StatusRegistry holds one description-less Status per canonical code.
///
/// Every code yielded by `C::iter()` when the registry is built gets a
/// template, including codes added to the enumeration after this crate was
/// written. The contents never change after construction, so a registry can
/// be read from any number of threads without locking.
#[derive(Clone, Debug)]
pub struct StatusRegistry<C: CanonicalCode = StatusCanonicalCode> {
    config: Config,
    unset: Arc<Status<C>>,
    ok: Arc<Status<C>>,
    error: Arc<Status<C>>,
    templates: BTreeMap<C, Arc<Status<C>>>,
}

impl<C: CanonicalCode> StatusRegistry<C> {
    /// new builds a registry with the default Config.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// with_config builds a registry with the given Config.
    pub fn with_config(config: Config) -> Self {
        let unset = Arc::new(Status::new(C::UNSET, None));
        let ok = Arc::new(Status::new(C::OK, None));
        let error = Arc::new(Status::new(C::ERROR, None));

        let mut templates = BTreeMap::new();
        templates.insert(C::UNSET, Arc::clone(&unset));
        templates.insert(C::OK, Arc::clone(&ok));
        templates.insert(C::ERROR, Arc::clone(&error));

        // The code set may be newer than this crate.
        for code in C::iter() {
            templates.entry(code).or_insert_with(|| {
                trace!("synthesizing status template for {:?}", code);
                Arc::new(Status::new(code, None))
            });
        }
        debug!("built {} status templates", templates.len());

        StatusRegistry {
            config,
            unset,
            ok,
            error,
            templates,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// unset returns the default template.
    pub fn unset(&self) -> Arc<Status<C>> {
        Arc::clone(&self.unset)
    }

    pub fn ok(&self) -> Arc<Status<C>> {
        Arc::clone(&self.ok)
    }

    pub fn error(&self) -> Arc<Status<C>> {
        Arc::clone(&self.error)
    }

    /// template returns the description-less Status for the code.
    ///
    /// A code missing from the registry means its enumeration's `iter()`
    /// skipped it; a fresh Status is returned in that case.
    pub fn template(&self, code: C) -> Arc<Status<C>> {
        match self.templates.get(&code) {
            Some(status) => Arc::clone(status),
            None => {
                warn!("no status template for {:?}, enumeration is incomplete", code);
                Arc::new(Status::new(code, None))
            }
        }
    }

    /// create returns a Status for the code with an optional description.
    ///
    /// Without a description (see `Config::empty_description_is_absent`) the
    /// shared template is returned. A description always yields a new Status,
    /// even when it matches an earlier one.
    pub fn create(&self, code: C, description: Option<&str>) -> Arc<Status<C>> {
        match description {
            Some(d) if !self.config.is_absent(description) => {
                Arc::new(Status::new(code, Some(d.to_string())))
            }
            _ => self.template(code),
        }
    }

    /// len returns the number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// iter visits every template in code order.
    pub fn iter(&self) -> Iter<'_, C> {
        Iter(self.templates.iter())
    }
}

impl<C: CanonicalCode> Default for StatusRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iter iterates over the templates of a StatusRegistry.
pub struct Iter<'a, C>(btree_map::Iter<'a, C, Arc<Status<C>>>);

impl<'a, C: CanonicalCode> Iterator for Iter<'a, C> {
    type Item = (C, &'a Arc<Status<C>>);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(code, status)| (*code, status))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, C: CanonicalCode> IntoIterator for &'a StatusRegistry<C> {
    type Item = (C, &'a Arc<Status<C>>);
    type IntoIter = Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
