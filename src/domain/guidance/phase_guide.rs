//! Per-phase skincare guide.

use serde::Serialize;

use crate::domain::cycle::CyclePhase;

/// Static guidance copy for one phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseGuide {
    pub phase: CyclePhase,
    pub label: &'static str,
    pub title: &'static str,
    /// One-line summary shown next to the cycle tracker.
    pub summary: &'static str,
    /// What the skin is likely doing in this phase.
    pub description: &'static str,
    pub skin_tips: &'static [&'static str],
    pub avoid_ingredients: &'static [&'static str],
    pub recommend_ingredients: &'static [&'static str],
}

impl PhaseGuide {
    /// Guide for `phase`.
    pub fn for_phase(phase: CyclePhase) -> &'static PhaseGuide {
        match phase {
            CyclePhase::Menstruation => &MENSTRUATION,
            CyclePhase::Follicular => &FOLLICULAR,
            CyclePhase::Ovulation => &OVULATION,
            CyclePhase::Luteal => &LUTEAL,
        }
    }
}

static MENSTRUATION: PhaseGuide = PhaseGuide {
    phase: CyclePhase::Menstruation,
    label: "Menstruation",
    title: "Menstruation Phase",
    summary: "Flow phase - time to rest and take care of yourself.",
    description: "Your skin may be more sensitive and prone to inflammation.",
    skin_tips: &[
        "Use gentle, fragrance-free cleansers",
        "Avoid harsh exfoliants",
        "Focus on hydration and soothing ingredients",
        "Treat yourself to a calming mask",
    ],
    avoid_ingredients: &["Retinol", "AHAs/BHAs", "Benzoyl peroxide"],
    recommend_ingredients: &["Ceramides", "Hyaluronic acid", "Aloe vera", "Centella asiatica"],
};

static FOLLICULAR: PhaseGuide = PhaseGuide {
    phase: CyclePhase::Follicular,
    label: "Follicular",
    title: "Follicular Phase",
    summary: "Dynamic phase - energy is building, skin usually clear.",
    description: "Your skin is starting to glow with increased estrogen levels.",
    skin_tips: &[
        "Great time to exfoliate",
        "Add antioxidants to your routine",
        "Incorporate vitamin C products",
        "Hydrate well from inside out",
    ],
    avoid_ingredients: &["Heavy occlusives if acne-prone"],
    recommend_ingredients: &["Vitamin C", "Niacinamide", "Peptides", "Gentle AHAs"],
};

static OVULATION: PhaseGuide = PhaseGuide {
    phase: CyclePhase::Ovulation,
    label: "Ovulation",
    title: "Ovulation Phase",
    summary: "Peak energy and glow - your skin is at its best!",
    description: "Your skin is at its peak condition with high estrogen and testosterone.",
    skin_tips: &[
        "Perfect time for photos or special events",
        "Make sure to wear SPF as skin is more photosensitive",
        "Stay hydrated",
        "Continue with antioxidant protection",
    ],
    avoid_ingredients: &["Excessive oil-stripping products"],
    recommend_ingredients: &["SPF", "Antioxidants", "Vitamin E", "Hyaluronic acid"],
};

static LUTEAL: PhaseGuide = PhaseGuide {
    phase: CyclePhase::Luteal,
    label: "Luteal",
    title: "Luteal Phase",
    summary: "Wind-down phase - watch for hormonal breakouts.",
    description: "Your skin may become oilier and more prone to breakouts as progesterone rises.",
    skin_tips: &[
        "Start acne prevention protocol",
        "Use oil-control products",
        "Introduce salicylic acid treatments",
        "Focus on gentle cleansing",
    ],
    avoid_ingredients: &["Heavy moisturizers", "Comedogenic ingredients"],
    recommend_ingredients: &["Salicylic acid", "Tea tree oil", "Zinc", "Clay masks"],
};
