//! Text rendering of PixelDojo results. Pure functions; the output wording is
//! what tool clients see verbatim.

use crate::{
    catalog,
    models::{CreditBalance, GenerationResult, ModelDescriptor},
};
use std::fmt::Write;

const RETENTION_NOTE: &str =
    "Note: Generated images are stored for 24 hours. Please download any images you wish to keep.";
const COST_NOTE: &str =
    "Note: The average cost is 1 credit per image, or 1.5 credits for Flux 1.1 Pro Ultra.";
const CATALOG_HINT: &str =
    "For detailed information about a specific model, use the model_id parameter.";

/// The header counts the images actually returned, not the number requested.
pub fn format_generation(model: &str, result: &GenerationResult) -> String {
    let mut out = format!("Generated {} image(s) using {}:\n\n", result.images.len(), model);
    for (index, image) in result.images.iter().enumerate() {
        let _ = writeln!(out, "Image {}: {}", index + 1, image);
    }
    let _ = write!(out, "\nCredits used: {}", result.credits_used);
    let _ = write!(out, "\nCredits remaining: {}", result.credits_remaining);
    out.push_str("\n\n");
    out.push_str(RETENTION_NOTE);
    out
}

pub fn format_credits(balance: &CreditBalance) -> String {
    let mut out = String::from("# PixelDojo Credit Information\n\n");
    let _ = writeln!(out, "**Credits Remaining**: {}", balance.remaining);
    let _ = writeln!(out, "**Credits Used This Month**: {}", balance.used);
    let _ = writeln!(out, "**Monthly Allocation**: {}", balance.monthly_allocation);
    let _ = writeln!(out, "**Renewal Date**: {}", balance.renewal_date);
    out.push('\n');
    out.push_str(COST_NOTE);
    out
}

/// Overview of every model when `model_id` is `None` or empty, otherwise the
/// detail block for that one model.
pub fn format_model_catalog(model_id: Option<&str>) -> String {
    match model_id.filter(|id| !id.is_empty()) {
        Some(id) => match catalog::find_model(id) {
            Some(model) => format_model_detail(model),
            None => format!("Unknown model: {}", id),
        },
        None => format_model_overview(catalog::supported_models()),
    }
}

fn format_model_detail(model: &ModelDescriptor) -> String {
    let mut out = format!("# {} ({})\n{}\n\n", model.display_name, model.id, model.description);
    out.push_str("**Features**:\n");
    for feature in model.features {
        let _ = writeln!(out, "- {}", feature);
    }
    let _ = writeln!(out, "\n**Credit Cost**: {}", model.cost_label());
    out
}

fn format_model_overview(models: &[ModelDescriptor]) -> String {
    let mut out = String::from("# PixelDojo AI Models\n\n");
    for model in models {
        let _ = writeln!(out, "## {} ({})", model.display_name, model.id);
        let _ = writeln!(out, "{}", model.summary);
        let _ = writeln!(out, "- {}\n", model.cost_label());
    }
    out.push_str(CATALOG_HINT);
    out.push('\n');
    out
}
