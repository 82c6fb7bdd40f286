//! Model metadata and lazy, page-by-page enumeration.

use std::collections::VecDeque;

use futures_util::stream::{self, Stream};
use serde::Deserialize;

use crate::{AiError, ModelCatalog};

/// Metadata for one model. Fields the server omits stay `None`/empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelInfo {
    /// Resource name, e.g. `models/gemini-2.0-flash`.
    pub name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub supported_generation_methods: Vec<String>,
    pub input_token_limit: Option<u64>,
    pub output_token_limit: Option<u64>,
}

impl ModelInfo {
    pub fn supports(&self, method: &str) -> bool {
        self.supported_generation_methods.iter().any(|m| m == method)
    }
}

/// One page of a model listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelPage {
    pub models: Vec<ModelInfo>,
    pub next_page_token: Option<String>,
}

impl ModelPage {
    /// Token for the following page; an empty token means there is none.
    pub fn next_token(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

enum Cursor {
    Start,
    Next(String),
    Done,
}

struct PagerState<'a, C: ?Sized> {
    catalog: &'a C,
    buffer: VecDeque<ModelInfo>,
    cursor: Cursor,
}

/// Enumerate every model in `catalog`, fetching pages only as the stream is
/// polled. The stream ends after the last page or after the first error.
pub fn model_stream<C>(catalog: &C) -> impl Stream<Item = Result<ModelInfo, AiError>> + Send + '_
where
    C: ModelCatalog + ?Sized,
{
    let state = PagerState {
        catalog,
        buffer: VecDeque::new(),
        cursor: Cursor::Start,
    };

    stream::unfold(state, |mut state| async move {
        loop {
            if let Some(model) = state.buffer.pop_front() {
                return Some((Ok(model), state));
            }

            let token = match std::mem::replace(&mut state.cursor, Cursor::Done) {
                Cursor::Done => return None,
                Cursor::Start => None,
                Cursor::Next(token) => Some(token),
            };

            match state.catalog.fetch_page(token.as_deref()).await {
                Ok(page) => {
                    if let Some(next) = page.next_token() {
                        if token.as_deref() != Some(next) {
                            state.cursor = Cursor::Next(next.to_string());
                        }
                    }
                    state.buffer.extend(page.models);
                }
                Err(e) => return Some((Err(e), state)),
            }
        }
    })
}
