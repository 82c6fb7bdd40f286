//! Formatting for the model listing script.

use std::io::Write;

use futures_util::{pin_mut, Stream, StreamExt};
use memchat_ai::{AiError, ModelInfo};

const RULE_WIDTH: usize = 80;

/// Why a listing stopped early.
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("Error fetching models: {0}")]
    Remote(#[from] AiError),
    #[error("Error writing output: {0}")]
    Io(#[from] std::io::Error),
}

fn limit_label(limit: Option<u64>) -> String {
    limit.map_or_else(|| "N/A".to_string(), |n| n.to_string())
}

/// Render one model's metadata block (without the separator rule).
pub fn format_model(model: &ModelInfo) -> String {
    let mut out = format!("Name: {}\n", model.name);
    if let Some(display) = &model.display_name {
        out.push_str(&format!("   Display Name: {display}\n"));
    }
    if let Some(description) = model.description.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!("   Description: {description}\n"));
    }
    out.push_str(&format!(
        "   Supported Generation Methods: [{}]\n",
        model.supported_generation_methods.join(", ")
    ));
    out.push_str(&format!(
        "   Input Token Limit: {}\n",
        limit_label(model.input_token_limit)
    ));
    out.push_str(&format!(
        "   Output Token Limit: {}\n",
        limit_label(model.output_token_limit)
    ));
    out
}

/// Drain `models`, writing each entry as it arrives. With `method` set, only
/// models supporting that generation method are written. Returns how many
/// were written; the first remote error stops the listing.
pub async fn write_models<S, W>(
    models: S,
    method: Option<&str>,
    out: &mut W,
) -> Result<usize, ListingError>
where
    S: Stream<Item = Result<ModelInfo, AiError>>,
    W: Write,
{
    pin_mut!(models);

    writeln!(out, "Available Models:")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    let mut count = 0;
    while let Some(model) = models.next().await {
        let model = model?;
        if method.is_some_and(|m| !model.supports(m)) {
            continue;
        }
        write!(out, "{}", format_model(&model))?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        count += 1;
    }

    if count == 0 {
        writeln!(out, "(no models available)")?;
    }
    Ok(count)
}
