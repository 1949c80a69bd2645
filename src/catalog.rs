use crate::models::ModelDescriptor;

/// Every model the service accepts, in the order they are presented.
pub static MODELS: [ModelDescriptor; 4] = [
    ModelDescriptor {
        id: "flux-pro",
        display_name: "Flux Pro",
        summary: "High-quality image generation with balanced performance and cost.",
        description: "High-quality image generation with balanced performance and cost.",
        features: &[
            "High-quality image generation",
            "Fast processing time (typically 2-5 seconds)",
            "Excellent for most general purposes",
        ],
        credit_cost: 1.0,
    },
    ModelDescriptor {
        id: "flux-1.1-pro",
        display_name: "Flux 1.1 Pro",
        summary: "Enhanced version with improved detail rendering and composition.",
        description: "Enhanced version of Flux Pro with improved detail rendering and composition.",
        features: &[
            "Better detail retention than Flux Pro",
            "Improved composition and coherence",
            "Excellent text rendering",
        ],
        credit_cost: 1.0,
    },
    ModelDescriptor {
        id: "flux-1.1-pro-ultra",
        display_name: "Flux 1.1 Pro Ultra",
        summary: "The highest quality model with exceptional detail and photorealism.",
        description: "The highest quality model available, with exceptional detail and photorealism.",
        features: &[
            "Ultra-high detail and photorealism",
            "Best for complex scenes",
            "Superior composition",
            "Extended context understanding",
        ],
        credit_cost: 1.5,
    },
    ModelDescriptor {
        id: "flux-dev-single-lora",
        display_name: "Flux Dev Single LoRA",
        summary: "Experimental model with specialized capabilities (beta).",
        description: "Experimental model with specialized capabilities (beta).",
        features: &[
            "Fine-tuned for specific use cases",
            "Single LoRA adaptation",
            "Specialized outputs",
            "Experimental features",
        ],
        credit_cost: 1.0,
    },
];

pub fn supported_models() -> &'static [ModelDescriptor] {
    &MODELS
}

/// Exact, case-sensitive lookup.
pub fn find_model(id: &str) -> Option<&'static ModelDescriptor> {
    MODELS.iter().find(|model| model.id == id)
}

pub fn model_ids() -> Vec<&'static str> {
    MODELS.iter().map(|model| model.id).collect()
}
