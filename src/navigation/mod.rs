//! Navigation interception for the kiosk surface.
//!
//! The hosted content carries three kinds of links: canonical web URLs
//! pointing at the public site, genuinely external web links, and local
//! paths. This module classifies each navigation target into a tagged
//! variant, decides what the single kiosk surface should do with it, and
//! executes that decision against the window.

mod interceptor;
mod surface;
mod target;

#[cfg(test)]
mod tests;

pub use interceptor::{NavDecision, NavigationInterceptor};
pub use surface::SurfaceNavigator;
pub use target::{classify, NavTarget, OriginPolicy};
