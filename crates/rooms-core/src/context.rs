use std::{fmt, sync::Arc};

/// Room URL templating.
///
/// Maps a room name to the externally reachable URL the room is served under.
pub trait RoomUrl: Send + Sync {
    fn room_url(&self, name: &str) -> String;
}

/// Default template: `<base>/<name>/`.
#[derive(Debug, Clone)]
pub struct UrlTemplate {
    base: String,
}

impl UrlTemplate {
    /// Create a template rooted at `base`; trailing slashes are ignored.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }
}

impl RoomUrl for UrlTemplate {
    fn room_url(&self, name: &str) -> String {
        format!("{}/{}/", self.base, name)
    }
}

/// Process-level settings every label operation depends on.
///
/// Passed explicitly to the codec, discovery and manager instead of living in global state,
/// so each of them can be exercised against fixture configurations.
#[derive(Clone)]
pub struct LabelContext {
    instance_name: String,
    urls: Arc<dyn RoomUrl>,
}

impl LabelContext {
    /// Create a new context with the given instance name and URL template.
    pub fn new(instance_name: impl Into<String>, urls: Arc<dyn RoomUrl>) -> Self {
        Self {
            instance_name: instance_name.into(),
            urls,
        }
    }

    /// Shortcut for a context using [`UrlTemplate`] rooted at `base_url`.
    pub fn with_base_url(instance_name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::new(instance_name, Arc::new(UrlTemplate::new(base_url)))
    }

    /// Name of the instance this process manages.
    pub fn instance_name(&self) -> &str {
        &self.instance_name
    }

    /// URL for the room with the given name.
    pub fn room_url(&self, name: &str) -> String {
        self.urls.room_url(name)
    }

    /// Replace the URL template and return updated context.
    pub fn with_urls(mut self, urls: Arc<dyn RoomUrl>) -> Self {
        self.urls = urls;
        self
    }
}

impl fmt::Debug for LabelContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelContext")
            .field("instance_name", &self.instance_name)
            .field("urls", &"<template>")
            .finish()
    }
}

impl fmt::Display for LabelContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LabelContext(instance={})", self.instance_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl RoomUrl for Fixed {
        fn room_url(&self, name: &str) -> String {
            format!("fixed://{name}")
        }
    }

    #[test]
    fn template_joins_base_and_name() {
        let t = UrlTemplate::new("http://rooms.local");
        assert_eq!(t.room_url("r1"), "http://rooms.local/r1/");
    }

    #[test]
    fn template_ignores_trailing_slashes() {
        let t = UrlTemplate::new("http://rooms.local//");
        assert_eq!(t.room_url("r1"), "http://rooms.local/r1/");
    }

    #[test]
    fn with_urls_replaces_template() {
        let ctx = LabelContext::with_base_url("main", "http://x").with_urls(Arc::new(Fixed));
        assert_eq!(ctx.instance_name(), "main");
        assert_eq!(ctx.room_url("r1"), "fixed://r1");
    }

    #[test]
    fn display_includes_instance() {
        let ctx = LabelContext::with_base_url("main", "http://x");
        assert_eq!(ctx.to_string(), "LabelContext(instance=main)");
    }
}
