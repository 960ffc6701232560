//! Launch-link parsing for opening registry windows from the site URL.
//!
//! `/?open=about_me,contact` opens the named windows at boot;
//! `&maximized=true` opens them maximized. The query string is the only
//! launch surface, so parsing stays a small hand-rolled pass over `&`-split
//! pairs.

use desktop_content::{ContentId, UnknownContentId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Windows requested by the current URL.
pub struct LaunchRequest {
    /// Registry windows to open, in link order.
    pub open: Vec<ContentId>,
    /// Whether the requested windows open maximized.
    pub maximized: bool,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a launch link is rejected.
pub enum LaunchLinkError {
    /// A slug in the `open` list does not name a registry item.
    #[error(transparent)]
    UnknownContentId(#[from] UnknownContentId),
}

/// Parses a launch request out of a query string.
///
/// Returns `Ok(None)` when the query carries no `open` key (the common case:
/// a plain visit). Unrelated keys are ignored; malformed boolean values fall
/// back to `false`.
///
/// # Errors
///
/// Returns [`LaunchLinkError::UnknownContentId`] when any requested slug is
/// not in the registry.
pub fn parse_launch_request(query: &str) -> Result<Option<LaunchRequest>, LaunchLinkError> {
    let mut open = None;
    let mut maximized = false;

    for pair in query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
    {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "open" => {
                let ids = value
                    .split(',')
                    .filter(|slug| !slug.is_empty())
                    .map(ContentId::from_slug)
                    .collect::<Result<Vec<_>, _>>()?;
                open = Some(ids);
            }
            "maximized" => {
                maximized = value.trim() == "true";
            }
            _ => {}
        }
    }

    Ok(open
        .filter(|ids| !ids.is_empty())
        .map(|open| LaunchRequest { open, maximized }))
}

/// Returns the launch request encoded in the current URL, if any.
///
/// # Errors
///
/// Propagates [`parse_launch_request`] errors so the caller can log them.
pub fn current_launch_request() -> Result<Option<LaunchRequest>, LaunchLinkError> {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return Ok(None);
        };
        let Ok(search) = window.location().search() else {
            return Ok(None);
        };
        return parse_launch_request(&search);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_an_open_list_with_the_maximized_flag() {
        let request = parse_launch_request("?open=about_me,contact&maximized=true")
            .expect("valid link")
            .expect("request present");
        assert_eq!(request.open, vec![ContentId::AboutMe, ContentId::Contact]);
        assert!(request.maximized);
    }

    #[test]
    fn plain_visits_carry_no_request() {
        assert_eq!(parse_launch_request(""), Ok(None));
        assert_eq!(parse_launch_request("?utm_source=mail"), Ok(None));
        assert_eq!(parse_launch_request("?open="), Ok(None));
    }

    #[test]
    fn unknown_slugs_are_rejected() {
        let err = parse_launch_request("?open=about_me,minesweeper").expect_err("closed registry");
        assert_eq!(
            err,
            LaunchLinkError::UnknownContentId(UnknownContentId("minesweeper".to_string()))
        );
    }

    #[test]
    fn malformed_maximized_values_fall_back_to_windowed() {
        let request = parse_launch_request("?open=my_skills&maximized=totally")
            .expect("valid link")
            .expect("request present");
        assert!(!request.maximized);
    }
}
