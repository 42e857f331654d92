//! Deterministic generation of demo catalog data.
//!
//! Two runs with the same seed produce identical datasets, which keeps
//! demos and the headless smoke test reproducible.

use rand::prelude::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

/// Subject pools for exam titles.
const SUBJECTS: &[&str] = &[
    "Algebra",
    "Geometry",
    "Calculus",
    "Statistics",
    "Physics",
    "Chemistry",
    "Biology",
    "History",
    "Geography",
    "Economics",
    "Programming",
    "Reasoning",
];

/// Exam level qualifiers.
const LEVELS: &[&str] = &["Foundation", "Intermediate", "Advanced", "Mock", "Final"];

/// Catalog categories.
const CATEGORIES: &[&str] = &["School", "College", "Competitive", "Professional"];

/// Subscription plan tiers.
const PLAN_TYPES: &[&str] = &["Silver", "Gold", "Platinum"];

/// Plan durations in months.
const PLAN_MONTHS: &[u32] = &[1, 3, 6, 12];

/// Study material formats.
const MATERIAL_FORMATS: &[&str] = &["pdf", "video", "audio"];

/// One subscription plan attached to an exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOption {
    /// Plan tier name.
    pub plan_type: String,
    /// Duration in months.
    pub plan_month: u32,
    /// Price in USD.
    pub price: f64,
}

/// One study material attached to an exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material title.
    pub title: String,
    /// Delivery format.
    pub format: String,
    /// Page count (zero for non-paged formats).
    pub pages: u32,
}

/// One exam record in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exam {
    /// Stable unique identifier.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Catalog category.
    pub category: String,
    /// Base price in USD.
    pub price: f64,
    /// Whether the exam is visible to students.
    pub published: bool,
    /// Subscription plans (detail rows), possibly empty.
    #[serde(default)]
    pub plans: Vec<PlanOption>,
    /// Study materials (detail rows), possibly empty.
    #[serde(default)]
    pub materials: Vec<Material>,
}

/// Generates `count` exam records from the given seed.
///
/// Roughly half the exams carry subscription plans, a quarter carry
/// study materials instead (a different detail field set, so the nested
/// table adapts per row), and the rest are leaf-only.
#[must_use]
pub fn generate(seed: u64, count: usize) -> Vec<Exam> {
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut exams = Vec::with_capacity(count);

    for id in 1..=count as u64 {
        let subject = SUBJECTS.choose(&mut rng).copied().unwrap_or("General");
        let level = LEVELS.choose(&mut rng).copied().unwrap_or("Mock");
        let category = CATEGORIES.choose(&mut rng).copied().unwrap_or("School");
        let price = f64::from(rng.random_range(5..60)) - 0.01;

        let roll = rng.random_range(0..4);
        let plans = if roll < 2 {
            let n: usize = rng.random_range(1..=3);
            (0..n)
                .map(|i| {
                    let plan_type = PLAN_TYPES[i.min(PLAN_TYPES.len() - 1)];
                    let plan_month = PLAN_MONTHS.choose(&mut rng).copied().unwrap_or(1);
                    PlanOption {
                        plan_type: plan_type.to_string(),
                        plan_month,
                        price: price * f64::from(plan_month) * 0.8,
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        let materials = if roll == 2 {
            let n: usize = rng.random_range(1..=2);
            (0..n)
                .map(|i| {
                    let format = MATERIAL_FORMATS.choose(&mut rng).copied().unwrap_or("pdf");
                    Material {
                        title: format!("{subject} notes vol. {}", i + 1),
                        format: format.to_string(),
                        pages: if format == "pdf" {
                            rng.random_range(20..200)
                        } else {
                            0
                        },
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        exams.push(Exam {
            id,
            title: format!("{subject} {level} Exam"),
            category: category.to_string(),
            price,
            published: rng.random_ratio(3, 4),
            plans,
            materials,
        });
    }

    exams
}
