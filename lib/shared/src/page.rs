use serde::{Deserialize, Serialize};

/// The logged in user, as handed to the page by the host.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub auth_token: Option<String>,
}

/// Credentials for a third party music service (Spotify, YouTube).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThirdPartyAuth {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub permission: Vec<String>,
}

/// Values the host page bootstraps the view with.
///
/// None of these influence how releases are selected; they are carried
/// through to the surrounding components unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageProps {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub current_user: Option<CurrentUser>,
    #[serde(default)]
    pub spotify: Option<ThirdPartyAuth>,
    #[serde(default)]
    pub youtube: Option<ThirdPartyAuth>,
    #[serde(default)]
    pub sentry_dsn: Option<String>,
    #[serde(default)]
    pub sentry_traces_sample_rate: Option<f64>,
}

impl PageProps {
    /// API base URL: the configured one, else `/1` under the page origin.
    pub fn api_base_url(&self, origin: &str) -> String {
        match self.api_url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => format!("{}/1", origin.trim_end_matches('/')),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_falls_back_to_origin() {
        let props = PageProps::default();
        assert_eq!(
            props.api_base_url("https://listenbrainz.org"),
            "https://listenbrainz.org/1"
        );
        assert_eq!(
            props.api_base_url("https://listenbrainz.org/"),
            "https://listenbrainz.org/1"
        );
    }

    #[test]
    fn configured_api_url_wins() {
        let props = PageProps {
            api_url: Some("https://api.example.org/1".to_string()),
            ..Default::default()
        };
        assert_eq!(props.api_base_url("http://localhost"), "https://api.example.org/1");
    }

    #[test]
    fn deserializes_partial_props() {
        let props: PageProps = serde_json::from_str(
            r#"{"current_user": {"name": "rob", "auth_token": "t"}, "sentry_traces_sample_rate": 0.2}"#,
        )
        .unwrap();
        assert_eq!(props.current_user.unwrap().name, "rob");
        assert_eq!(props.sentry_traces_sample_rate, Some(0.2));
        assert!(props.spotify.is_none());
    }
}
