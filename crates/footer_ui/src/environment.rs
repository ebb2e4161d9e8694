use std::rc::Rc;

use footer_host::{AnalyticsService, FooterConfig, Intl};

#[derive(Clone)]
/// Collaborators injected into [`crate::SiteFooter`] on every render.
pub struct FooterEnvironment {
    /// Validated site configuration.
    pub config: Rc<FooterConfig>,
    /// Active locale and message catalog.
    pub intl: Intl,
    /// Fire-and-forget analytics collector.
    pub analytics: Rc<dyn AnalyticsService>,
}

impl FooterEnvironment {
    /// Bundles the footer's collaborators.
    pub fn new(config: FooterConfig, intl: Intl, analytics: Rc<dyn AnalyticsService>) -> Self {
        Self {
            config: Rc::new(config),
            intl,
            analytics,
        }
    }

    /// Returns the same environment rendering in another locale.
    pub fn with_locale(&self, locale: impl Into<String>) -> Self {
        Self {
            config: Rc::clone(&self.config),
            intl: self.intl.with_locale(locale),
            analytics: Rc::clone(&self.analytics),
        }
    }
}
