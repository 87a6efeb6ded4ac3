// ABOUTME: Keeps the embedded webview on the backend origin.
// ABOUTME: Foreign navigations are cancelled and handed to the user's default browser.

use url::{Origin, Url};

/// Opens URLs outside the application.
pub trait ExternalBrowser: Send + Sync {
    fn open(&self, url: &Url);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    OpenExternally,
    /// Cancelled with nothing opened, for schemes a browser should not be handed.
    Block,
}

/// Navigation policy for a window loaded from `origin`.
pub struct NavigationGuard<B> {
    origin: Origin,
    browser: B,
}

impl<B: ExternalBrowser> NavigationGuard<B> {
    pub fn new(loaded: &Url, browser: B) -> Self {
        Self {
            origin: loaded.origin(),
            browser,
        }
    }

    pub fn decide(&self, target: &Url) -> NavigationDecision {
        // The window starts on about:blank before its storage is cleared.
        if target.as_str() == "about:blank" {
            return NavigationDecision::Allow;
        }
        if target.origin() == self.origin {
            return NavigationDecision::Allow;
        }
        match target.scheme() {
            "http" | "https" | "mailto" => NavigationDecision::OpenExternally,
            _ => NavigationDecision::Block,
        }
    }

    /// Webview navigation hook: returns whether the webview may proceed.
    pub fn intercept(&self, target: &Url) -> bool {
        match self.decide(target) {
            NavigationDecision::Allow => true,
            NavigationDecision::OpenExternally => {
                self.browser.open(target);
                false
            }
            NavigationDecision::Block => {
                log::warn!("[Navigation] Blocked navigation to {}", target);
                false
            }
        }
    }
}
