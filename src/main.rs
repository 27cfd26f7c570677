mod assets;
mod config;
mod extract;
mod feed;
mod images;
mod pages;
mod partials;
mod site;
mod sunday;
mod tools;
mod ui;

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::Result;
use axum::Router;
use axum::extract::FromRef;
use axum::routing::get;
use clap::{Parser, Subcommand};
use jiff::tz::TimeZone;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::feed::Feed;

#[derive(Clone)]
struct AppState {
    /// Source of the latest video title.
    feed: Feed,
    /// Time zone deciding the current day for service dates.
    tz: TimeZone,
}

impl FromRef<AppState> for Feed {
    fn from_ref(state: &AppState) -> Self {
        state.feed.clone()
    }
}

impl FromRef<AppState> for TimeZone {
    fn from_ref(state: &AppState) -> Self {
        state.tz.clone()
    }
}

#[derive(Parser)]
#[command(about = "Greater Love Church website")]
struct Cli {
    /// Site directory with images and stylesheets, overrides GREATERLOVE_SITE_DIR.
    #[arg(long, global = true)]
    site_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the website (default).
    Serve,
    /// Inspect and organize the images directory.
    Images {
        #[command(subcommand)]
        command: ImagesCommand,
    },
    /// Check stylesheets.
    Css {
        #[command(subcommand)]
        command: CssCommand,
    },
}

#[derive(Subcommand)]
enum ImagesCommand {
    /// Categorize all images and write a report.
    Scan,
    /// Move images into per-category directories. Dry run unless `--apply` is given.
    Organize {
        #[arg(long)]
        apply: bool,
    },
}

#[derive(Subcommand)]
enum CssCommand {
    /// Report image references that do not exist on disk.
    Verify,
}

fn router(state: AppState, site_dir: &Path) -> Router {
    Router::new()
        .route("/", get(pages::index::index))
        .route("/index.html", get(pages::index::index))
        .route("/about.html", get(pages::about::about))
        .route("/sermons.html", get(pages::sermons::sermons))
        .route("/ministries.html", get(pages::ministries::ministries))
        .route("/contact.html", get(pages::contact::contact))
        .route("/donations.html", get(pages::donations::donations))
        .route("/f/nav", get(partials::header::nav))
        .route("/f/latest-video", get(partials::events::latest_video))
        .route("/app.js", get(assets::app_js))
        .fallback_service(ServeDir::new(site_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn serve(config: Config) -> Result<()> {
    let feed = Feed::new(reqwest::Client::new())?;
    let state = AppState {
        feed,
        tz: config.tz.clone(),
    };

    let app = router(state, &config.site_dir);

    let addr = SocketAddr::new(Ipv4Addr::LOCALHOST.into(), config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(site_dir = ?config.site_dir, "serving on {addr:?}");
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;

    if let Some(site_dir) = cli.site_dir {
        config.site_dir = site_dir;
    }

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Images {
            command: ImagesCommand::Scan,
        } => tools::scan(&config.site_dir),
        Command::Images {
            command: ImagesCommand::Organize { apply },
        } => tools::organize(&config.site_dir, apply),
        Command::Css {
            command: CssCommand::Verify,
        } => tools::verify_css(&config.site_dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn app() -> (Router, tempfile::TempDir) {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("main.css"), "body {}").unwrap();

        // Nothing listens on a port we just released.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let url = url::Url::parse(&format!("http://{addr}/v1/api.json")).unwrap();

        let state = AppState {
            feed: Feed::with_url(reqwest::Client::new(), url),
            tz: TimeZone::UTC,
        };
        (router(state, dir.path()), dir)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn index_has_event_slots() {
        let (app, _dir) = app().await;
        let (status, html) = get(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"id="nextEvent""#), "{html}");
        assert!(html.contains(r#"id="lastEvent""#), "{html}");
        assert!(html.contains(r#"id="lastEvent-title""#), "{html}");
        assert!(
            html.contains(r#"<li class="header__list active"><a href="index.html">Home</a></li>"#),
            "{html}"
        );
    }

    #[tokio::test]
    async fn page_highlights_its_entry() {
        let (app, _dir) = app().await;
        let (status, html) = get(app, "/sermons.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches("header__list active").count(), 1, "{html}");
        assert!(html.contains(r#"<li class="header__list active"><a href="sermons.html">"#), "{html}");
    }

    #[tokio::test]
    async fn donations_highlight_nothing() {
        let (app, _dir) = app().await;
        let (_, html) = get(app, "/donations.html").await;
        assert!(!html.contains("header__list active"), "{html}");
    }

    #[tokio::test]
    async fn menu_query_opens_menu() {
        let (app, _dir) = app().await;
        let (_, html) = get(app, "/contact.html?menu=open").await;
        assert!(html.contains(r#"<body class="overflow-hidden">"#), "{html}");
        assert!(html.contains(r#"aria-expanded="true""#), "{html}");
    }

    #[tokio::test]
    async fn nav_fragment() {
        let (app, _dir) = app().await;
        let (status, html) = get(app.clone(), "/f/nav?page=MINISTERIOS").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!html.contains("<html"), "{html}");
        assert!(html.contains(r#"<li class="header__list active"><a href="ministries.html">"#), "{html}");

        let (_, html) = get(app.clone(), "/f/nav?page=EVENTOS").await;
        assert!(!html.contains("header__list active"), "{html}");

        let (_, html) = get(app, "/f/nav").await;
        assert!(!html.contains("header__list active"), "{html}");
    }

    #[tokio::test]
    async fn failed_feed_is_not_swapped() {
        let (app, _dir) = app().await;
        let (status, body) = get(app, "/f/latest-video").await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn script_and_static_files() {
        let (app, _dir) = app().await;
        let (status, script) = get(app.clone(), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(script.contains("syncHeaders"));

        let (status, css) = get(app.clone(), "/main.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(css, "body {}");

        let (status, _) = get(app, "/images/missing.png").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
