use dioxus::prelude::*;
use shared::page::{CurrentUser, PageProps, ThirdPartyAuth};

/// Page-wide values handed down from the host page.
#[derive(Clone, Debug, PartialEq)]
pub struct GlobalAppContext {
    pub api_base_url: String,
    pub current_user: Option<CurrentUser>,
    pub spotify_auth: Option<ThirdPartyAuth>,
    pub youtube_auth: Option<ThirdPartyAuth>,
}

impl GlobalAppContext {
    pub fn from_props(props: &PageProps, origin: &str) -> Self {
        Self {
            api_base_url: props.api_base_url(origin),
            current_user: props.current_user.clone(),
            spotify_auth: props.spotify.clone(),
            youtube_auth: props.youtube.clone(),
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.current_user
            .as_ref()
            .map(|u| u.name.as_str())
            .filter(|n| !n.is_empty())
    }

    pub fn is_logged_in(&self) -> bool {
        self.username().is_some()
    }
}

pub fn use_global_app_context() -> Option<GlobalAppContext> {
    try_use_context::<GlobalAppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_page_props() {
        let props = PageProps {
            current_user: Some(CurrentUser {
                id: Some(1),
                name: "rob".to_string(),
                auth_token: None,
            }),
            ..Default::default()
        };
        let ctx = GlobalAppContext::from_props(&props, "https://listenbrainz.org");
        assert_eq!(ctx.api_base_url, "https://listenbrainz.org/1");
        assert_eq!(ctx.username(), Some("rob"));
    }

    #[test]
    fn anonymous_without_user() {
        let ctx = GlobalAppContext::from_props(&PageProps::default(), "http://localhost:8080");
        assert!(!ctx.is_logged_in());
    }
}
