//! Route classification

use crate::config::{MatchMode, RoutesConfig};

/// Disposition of a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Accessible without any session
    Public,
    /// Requires a verified session
    Protected,
    /// Matched neither list; passed through unchanged
    Unclassified,
}

/// Stateless path classifier built from the configured route lists
///
/// Classification is computed fresh per request and has no persistence.
#[derive(Debug, Clone)]
pub struct RouteClassifier {
    public: Vec<String>,
    protected: Vec<String>,
    exclude: Vec<String>,
    mode: MatchMode,
}

impl RouteClassifier {
    pub fn from_config(routes: &RoutesConfig) -> Self {
        Self {
            public: routes.public.clone(),
            protected: routes.protected.clone(),
            exclude: routes.exclude.clone(),
            mode: routes.match_mode,
        }
    }

    /// Paths the guard skips entirely (static assets, API routes)
    ///
    /// Always prefix-matched, regardless of the configured mode.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclude.iter().any(|p| path.starts_with(p.as_str()))
    }

    /// Classify a request path
    ///
    /// The public list is checked first and short-circuits all further
    /// checks; then the protected list; anything else is unclassified.
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.matches(&self.public, path) {
            RouteClass::Public
        } else if self.matches(&self.protected, path) {
            RouteClass::Protected
        } else {
            RouteClass::Unclassified
        }
    }

    fn matches(&self, patterns: &[String], path: &str) -> bool {
        match self.mode {
            MatchMode::Prefix => patterns.iter().any(|p| path.starts_with(p.as_str())),
            MatchMode::Substring => patterns.iter().any(|p| path.contains(p.as_str())),
        }
    }
}
