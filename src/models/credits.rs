use super::image::zero_credits;
use serde::Deserialize;
use serde_json::Number;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreditBalance {
    #[serde(rename = "credits_remaining", default = "zero_credits")]
    pub remaining: Number,
    #[serde(rename = "credits_used", default = "zero_credits")]
    pub used: Number,
    #[serde(default = "zero_credits")]
    pub monthly_allocation: Number,
    #[serde(default = "unknown_date")]
    pub renewal_date: String,
}

fn unknown_date() -> String {
    "Unknown".to_string()
}
