//! Fixed seed dataset for the rater store
//!
//! The store is populated from this data once, at context construction.
//! Timestamps are expressed relative to `now` so the trailing-week dashboard
//! window always has content.

use chrono::{DateTime, Duration, Utc};

use super::types::{
    ComparisonItem, ComparisonTask, Difficulty, Rating, RatingChoice, RaterProfile,
};

/// Everything the rater store starts with.
#[derive(Debug, Clone)]
pub struct RaterSeed {
    pub tasks: Vec<ComparisonTask>,
    pub ratings: Vec<Rating>,
    pub profile: RaterProfile,
}

fn task(
    id: &str,
    category: &str,
    difficulty: Difficulty,
    prompt: &str,
    a: (&str, &str),
    b: (&str, &str),
) -> ComparisonTask {
    ComparisonTask {
        id: id.to_string(),
        prompt: prompt.to_string(),
        category: category.to_string(),
        response_a: ComparisonItem {
            content: a.0.to_string(),
            source: a.1.to_string(),
        },
        response_b: ComparisonItem {
            content: b.0.to_string(),
            source: b.1.to_string(),
        },
        difficulty,
    }
}

/// The standard rater dataset: eight tasks across four categories, three of
/// them already rated in earlier sittings.
pub fn rater_seed(now: DateTime<Utc>) -> RaterSeed {
    let tasks = vec![
        task(
            "task-001",
            "Code Generation",
            Difficulty::Medium,
            "Write a Python function that merges two sorted lists into one sorted list.",
            (
                "def merge(a, b):\n    out = []\n    i = j = 0\n    while i < len(a) and j < len(b):\n        if a[i] <= b[j]:\n            out.append(a[i]); i += 1\n        else:\n            out.append(b[j]); j += 1\n    return out + a[i:] + b[j:]",
                "atlas-72b",
            ),
            (
                "def merge(a, b):\n    return sorted(a + b)",
                "nova-large",
            ),
        ),
        task(
            "task-002",
            "Creative Writing",
            Difficulty::Easy,
            "Write a two-sentence opening for a mystery novel set in a lighthouse.",
            (
                "The lamp had burned for ninety years without fail, which is why the town noticed the darkness before they noticed the body. Keeper Aldous Finch had not missed a night since the war.",
                "atlas-72b",
            ),
            (
                "It was a dark and stormy night at the lighthouse. The keeper was dead.",
                "nova-large",
            ),
        ),
        task(
            "task-003",
            "Summarization",
            Difficulty::Medium,
            "Summarize the causes of the 2008 financial crisis in one paragraph for a high-school student.",
            (
                "Banks lent mortgages to people who could not repay them, then bundled those loans into investments sold as safe. When home prices fell, the bundles lost value at once, and because banks had borrowed heavily against them, losses spread through the whole financial system.",
                "nova-large",
            ),
            (
                "The 2008 crisis happened because of subprime mortgages, securitization, excessive leverage, ratings failures, and a housing bubble, which together caused a systemic banking collapse.",
                "atlas-72b",
            ),
        ),
        task(
            "task-004",
            "Reasoning",
            Difficulty::Hard,
            "A bat and a ball cost $1.10 together. The bat costs $1.00 more than the ball. How much does the ball cost? Explain.",
            (
                "The ball costs $0.05. If the ball were $0.10 the bat would be $1.10 and the total $1.20. Let b be the ball: b + (b + 1.00) = 1.10, so 2b = 0.10 and b = 0.05.",
                "atlas-72b",
            ),
            (
                "The ball costs $0.10, because $1.10 minus the $1.00 bat leaves $0.10.",
                "nova-large",
            ),
        ),
        task(
            "task-005",
            "Code Generation",
            Difficulty::Hard,
            "Implement an LRU cache in JavaScript with O(1) get and put.",
            (
                "class LRU {\n  constructor(cap) { this.cap = cap; this.map = new Map(); }\n  get(k) {\n    if (!this.map.has(k)) return -1;\n    const v = this.map.get(k);\n    this.map.delete(k); this.map.set(k, v);\n    return v;\n  }\n  put(k, v) {\n    if (this.map.has(k)) this.map.delete(k);\n    else if (this.map.size === this.cap) this.map.delete(this.map.keys().next().value);\n    this.map.set(k, v);\n  }\n}",
                "nova-large",
            ),
            (
                "class LRU {\n  constructor(cap) { this.cap = cap; this.entries = []; }\n  get(k) {\n    const e = this.entries.find(e => e.k === k);\n    return e ? e.v : -1;\n  }\n  put(k, v) {\n    this.entries.push({ k, v });\n    if (this.entries.length > this.cap) this.entries.shift();\n  }\n}",
                "atlas-72b",
            ),
        ),
        task(
            "task-006",
            "Summarization",
            Difficulty::Easy,
            "Condense this instruction into a single sentence: water the plant twice a week, keep it out of direct sun, and rotate the pot monthly.",
            (
                "Water the plant twice weekly, keep it in indirect light, and rotate the pot once a month.",
                "atlas-72b",
            ),
            (
                "Care for the plant by watering it regularly and keeping it healthy.",
                "nova-large",
            ),
        ),
        task(
            "task-007",
            "Creative Writing",
            Difficulty::Medium,
            "Write a limerick about a forgetful astronaut.",
            (
                "An astronaut prone to forget\nLeft his helmet at home with regret.\nAt the airlock he froze,\nTapped the glass of his nose,\nAnd walked back for the thing he'd not set.",
                "nova-large",
            ),
            (
                "There once was an astronaut in space,\nWho forgot many things in his place.\nHe forgot his own name,\nAnd it was a shame,\nBecause he was lost in space.",
                "atlas-72b",
            ),
        ),
        task(
            "task-008",
            "Reasoning",
            Difficulty::Medium,
            "If all bloops are razzies and some razzies are lazzies, are all bloops necessarily lazzies?",
            (
                "No. Every bloop is a razzie, but only some razzies are lazzies, and those may be razzies that are not bloops. Nothing forces the bloop subset to overlap the lazzie subset.",
                "atlas-72b",
            ),
            (
                "Yes, since bloops are razzies and razzies are lazzies, bloops are lazzies by transitivity.",
                "nova-large",
            ),
        ),
    ];

    let profile = RaterProfile {
        name: "Alex Chen".to_string(),
        email: "alex.chen@example.com".to_string(),
        expertise: vec![
            "code-review".to_string(),
            "technical-writing".to_string(),
        ],
        total_ratings: 3,
        average_time_ms: 47_000,
        agreement_rate: 0.86,
    };

    let ratings = vec![
        Rating {
            id: "rating-seed-001".to_string(),
            task_id: "task-001".to_string(),
            choice: RatingChoice::A,
            confidence: 4,
            reasoning: "A is O(n) and preserves the merge semantics; B re-sorts and hides the cost."
                .to_string(),
            time_spent_ms: 42_000,
            rated_at: now - Duration::days(2) - Duration::hours(3),
            rater_name: profile.name.clone(),
        },
        Rating {
            id: "rating-seed-002".to_string(),
            task_id: "task-002".to_string(),
            choice: RatingChoice::A,
            confidence: 5,
            reasoning: "A builds intrigue from a concrete detail; B is cliché on both sentences."
                .to_string(),
            time_spent_ms: 61_000,
            rated_at: now - Duration::days(1) - Duration::hours(6),
            rater_name: profile.name.clone(),
        },
        Rating {
            id: "rating-seed-003".to_string(),
            task_id: "task-003".to_string(),
            choice: RatingChoice::Tie,
            confidence: 3,
            reasoning: "A reads better for the audience, B is more complete; net wash.".to_string(),
            time_spent_ms: 38_000,
            rated_at: now - Duration::hours(20),
            rater_name: profile.name.clone(),
        },
    ];

    RaterSeed {
        tasks,
        ratings,
        profile,
    }
}
