//! Navigation decisions for the kiosk surface.

use std::path::PathBuf;
use std::sync::Arc;

use crate::resolver::ContentResolver;

use super::target::{classify, NavTarget, OriginPolicy};

/// What the surface should do with a navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavDecision {
    /// Let the webview perform the navigation itself.
    Allow,

    /// Replace the surface content with a resolved local document.
    LoadLocal {
        path: PathBuf,
        fragment: Option<String>,
    },

    /// Hand the URL to the platform's external handler.
    OpenExternal(String),

    /// Suppress the navigation entirely.
    Cancel,
}

/// Classifies navigation targets and turns them into decisions.
///
/// Pure decision logic: no window handle, no side effects, so the full
/// routing table is testable without a webview.
pub struct NavigationInterceptor {
    resolver: Arc<ContentResolver>,
    policy: OriginPolicy,
}

impl NavigationInterceptor {
    pub fn new(resolver: Arc<ContentResolver>, policy: OriginPolicy) -> Self {
        Self { resolver, policy }
    }

    pub fn resolver(&self) -> &ContentResolver {
        &self.resolver
    }

    /// Decision for a will-navigate event on the current surface.
    pub fn decide_navigate(&self, raw: &str) -> NavDecision {
        match classify(raw, &self.policy) {
            NavTarget::Canonical { path, fragment } => {
                tracing::info!(url = raw, path, "canonical URL remapped to local content");
                NavDecision::LoadLocal {
                    path: self.resolver.resolve(&path),
                    fragment,
                }
            }
            NavTarget::WebExternal(url) => {
                tracing::info!(url = %url, "external URL delegated to system browser");
                NavDecision::OpenExternal(url)
            }
            NavTarget::LocalFile { path, fragment } => NavDecision::LoadLocal {
                path: self.resolver.resolve(&path),
                fragment,
            },
            NavTarget::InContent { .. } => NavDecision::Allow,
            NavTarget::Other => {
                tracing::warn!(url = raw, "unhandled navigation target cancelled");
                NavDecision::Cancel
            }
        }
    }

    /// Decision for a new-window request. The kiosk owns exactly one
    /// surface, so this never yields `Allow`: in-content targets load into
    /// the existing surface instead.
    pub fn decide_new_window(&self, raw: &str) -> NavDecision {
        match classify(raw, &self.policy) {
            NavTarget::Canonical { path, fragment }
            | NavTarget::InContent { path, fragment } => NavDecision::LoadLocal {
                path: self.resolver.resolve(&path),
                fragment,
            },
            NavTarget::LocalFile { path, fragment } => NavDecision::LoadLocal {
                path: self.resolver.resolve(&path),
                fragment,
            },
            NavTarget::WebExternal(url) => {
                tracing::info!(url = %url, "new-window request delegated to system browser");
                NavDecision::OpenExternal(url)
            }
            NavTarget::Other => NavDecision::Cancel,
        }
    }
}
