//! Static catalog of calculators and articles offered by site search.
//!
//! Declaration order is the "popular" order shown for an empty query.

use serde::Serialize;

/// Kind of page a catalog entry points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Calculator,
    Article,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Calculator => "calculator",
            Self::Article => "article",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub kind: EntryKind,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        kind: EntryKind::Calculator,
        title: "Basic Calculator",
        description: "Perform basic arithmetic operations with our user-friendly calculator.",
        url: "calculators/basic-calculator.html",
        icon: "fas fa-calculator",
    },
    CatalogEntry {
        kind: EntryKind::Calculator,
        title: "Scientific Calculator",
        description: "Advanced mathematical functions including trigonometry and logarithms.",
        url: "#",
        icon: "fas fa-square-root-alt",
    },
    CatalogEntry {
        kind: EntryKind::Calculator,
        title: "Percentage Calculator",
        description: "Calculate percentages, percentage increase, and percentage decrease easily.",
        url: "calculators/percentage-calculator.html",
        icon: "fas fa-percent",
    },
    CatalogEntry {
        kind: EntryKind::Calculator,
        title: "Compound Interest Calculator",
        description: "Calculate compound interest for investments and savings planning.",
        url: "calculators/compound-interest-calculator.html",
        icon: "fas fa-chart-line",
    },
    CatalogEntry {
        kind: EntryKind::Calculator,
        title: "Unit Converter",
        description: "Convert between different units of measurement quickly and accurately.",
        url: "#",
        icon: "fas fa-ruler",
    },
    CatalogEntry {
        kind: EntryKind::Calculator,
        title: "Geometry Calculator",
        description: "Calculate area, perimeter, and volume for various geometric shapes.",
        url: "#",
        icon: "fas fa-shapes",
    },
    CatalogEntry {
        kind: EntryKind::Article,
        title: "Understanding Compound Interest: A Complete Guide",
        description: "Learn how compound interest works and discover strategies to maximize your investments and savings growth over time.",
        url: "articles/understanding-compound-interest.html",
        icon: "fas fa-book",
    },
    CatalogEntry {
        kind: EntryKind::Article,
        title: "Essential Geometry Formulas Every Student Should Know",
        description: "A comprehensive collection of geometry formulas for calculating area, perimeter, volume, and surface area of common shapes.",
        url: "articles/geometry-formulas-guide.html",
        icon: "fas fa-book",
    },
    CatalogEntry {
        kind: EntryKind::Article,
        title: "Quadratic Equations Explained: Methods and Applications",
        description: "Master quadratic equations with step-by-step explanations, multiple solving methods, and real-world applications.",
        url: "articles/geometry-formulas-guide.html",
        icon: "fas fa-book",
    },
    CatalogEntry {
        kind: EntryKind::Article,
        title: "Probability Basics: From Theory to Practice",
        description: "Understand probability concepts, learn calculation methods, and explore practical applications in everyday life.",
        url: "articles/probability-basics.html",
        icon: "fas fa-book",
    },
    CatalogEntry {
        kind: EntryKind::Article,
        title: "Introduction to Derivatives: Concepts and Applications",
        description: "Learn the fundamentals of derivatives, including rules, techniques, and real-world applications in various fields.",
        url: "articles/derivatives-introduction.html",
        icon: "fas fa-book",
    },
    CatalogEntry {
        kind: EntryKind::Article,
        title: "Financial Mathematics: Making Smart Money Decisions",
        description: "Explore mathematical concepts behind personal finance, including loans, mortgages, and investment calculations.",
        url: "articles/financial-mathematics.html",
        icon: "fas fa-book",
    },
];
