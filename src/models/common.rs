use serde::Serialize;

/// Fixed description of one PixelDojo model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    /// One-liner used in the catalog overview.
    pub summary: &'static str,
    /// Longer text used when a single model is described.
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub credit_cost: f64,
}

impl ModelDescriptor {
    /// "1 credit per image", "1.5 credits per image".
    pub fn cost_label(&self) -> String {
        let unit = if self.credit_cost == 1.0 {
            "credit"
        } else {
            "credits"
        };
        format!("{} {} per image", self.credit_cost, unit)
    }
}
