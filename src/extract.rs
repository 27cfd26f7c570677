use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use crate::ui::MenuState;

#[derive(Deserialize)]
struct MenuQuery {
    menu: Option<String>,
}

/// Extract the mobile menu state requested through the `menu` query parameter. A missing or
/// unparseable query yields a closed menu.
#[derive(Debug)]
pub(crate) struct Menu(pub MenuState);

impl<S> FromRequestParts<S> for Menu
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let menu = Query::<MenuQuery>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|Query(query)| query.menu)
            .map(|value| MenuState::from_query(&value))
            .unwrap_or_default();

        Ok(Menu(menu))
    }
}
