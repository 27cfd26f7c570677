//! Latest video title from the church's YouTube channel, read through the rss2json proxy.

use serde::Deserialize;

/// YouTube channel whose uploads are shown as the latest sermon.
pub(crate) const CHANNEL_ID: &str = "UC3dKXfaGzFL_YvslCMCUtdg";

const PROXY_URL: &str = "https://api.rss2json.com/v1/api.json";
const YOUTUBE_FEED_URL: &str = "https://www.youtube.com/feeds/videos.xml";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to request feed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("feed has no items")]
    Empty,
}

#[derive(Deserialize, Debug)]
struct FeedResponse {
    items: Vec<FeedItem>,
}

#[derive(Deserialize, Debug)]
struct FeedItem {
    title: String,
}

/// Proxy URL returning the channel's upload feed as JSON.
pub(crate) fn proxy_url(proxy: &str, channel_id: &str) -> Result<url::Url, url::ParseError> {
    let mut feed = url::Url::parse(YOUTUBE_FEED_URL)?;
    feed.query_pairs_mut().append_pair("channel_id", channel_id);

    let mut url = url::Url::parse(proxy)?;
    url.query_pairs_mut().append_pair("rss_url", feed.as_str());
    Ok(url)
}

/// Fetches the feed behind a proxy endpoint.
#[derive(Clone, Debug)]
pub(crate) struct Feed {
    client: reqwest::Client,
    url: url::Url,
}

impl Feed {
    /// Feed of the church channel through the public proxy.
    pub(crate) fn new(client: reqwest::Client) -> Result<Self, url::ParseError> {
        Ok(Self::with_url(client, proxy_url(PROXY_URL, CHANNEL_ID)?))
    }

    pub(crate) fn with_url(client: reqwest::Client, url: url::Url) -> Self {
        Self { client, url }
    }

    /// Return the title of the first item in the feed.
    pub(crate) async fn latest_title(&self) -> Result<String, Error> {
        let response: FeedResponse = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .items
            .into_iter()
            .next()
            .map(|item| item.title)
            .ok_or(Error::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::routing::get;

    async fn serve(body: &'static str) -> url::Url {
        let app = Router::new().route(
            "/v1/api.json",
            get(move || async move {
                ([(axum::http::header::CONTENT_TYPE, "application/json")], body)
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });
        url::Url::parse(&format!("http://{addr}/v1/api.json")).unwrap()
    }

    #[test]
    fn proxy_url_encodes_feed_url() {
        let url = proxy_url(PROXY_URL, CHANNEL_ID).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.rss2json.com/v1/api.json?rss_url=https%3A%2F%2Fwww.youtube.com%2Ffeeds%2Fvideos.xml%3Fchannel_id%3DUC3dKXfaGzFL_YvslCMCUtdg"
        );
    }

    #[tokio::test]
    async fn first_item_title() {
        let url = serve(
            r#"{"status":"ok","items":[{"title":"Domingo de Ramos","link":"x"},{"title":"older"}]}"#,
        )
        .await;
        let feed = Feed::with_url(reqwest::Client::new(), url);
        assert_eq!(feed.latest_title().await.unwrap(), "Domingo de Ramos");
    }

    #[tokio::test]
    async fn empty_items() {
        let url = serve(r#"{"status":"ok","items":[]}"#).await;
        let feed = Feed::with_url(reqwest::Client::new(), url);
        assert!(matches!(feed.latest_title().await, Err(Error::Empty)));
    }

    #[tokio::test]
    async fn malformed_json() {
        let url = serve(r#"{"status":"error","message":"rate limited"}"#).await;
        let feed = Feed::with_url(reqwest::Client::new(), url);
        assert!(matches!(feed.latest_title().await, Err(Error::Request(_))));
    }

    #[tokio::test]
    async fn unreachable_proxy() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = url::Url::parse(&format!("http://{addr}/v1/api.json")).unwrap();
        let feed = Feed::with_url(reqwest::Client::new(), url);
        assert!(matches!(feed.latest_title().await, Err(Error::Request(_))));
    }
}
