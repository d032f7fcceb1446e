//! Built-in records used when no valid persisted collection exists.

use crate::domain::{
    AnalysisResult, BusinessArea, GroundedAnswer, ProblemAnalysis, RecordResult, Solution,
    SolutionRecord, SolutionStep, Source,
};

fn step(title: &str, description: &str) -> SolutionStep {
    SolutionStep { title: title.to_string(), description: description.to_string() }
}

pub fn seed_records() -> Vec<SolutionRecord> {
    vec![
        SolutionRecord {
            id: "sol-seed-0002".to_string(),
            timestamp: "2024-05-14T16:30:00.000Z".to_string(),
            company_type: "E-commerce".to_string(),
            niche: "Handmade jewelry".to_string(),
            problem_description: "Our online store gets visits but very few of them turn into purchases, especially on mobile.".to_string(),
            business_area: BusinessArea::Sales,
            result: RecordResult::Grounded(GroundedAnswer {
                answer: "Mobile conversion usually suffers from slow pages and long checkouts. Compress product images, offer guest checkout and add wallet payments, then measure the funnel step by step to find where buyers leave.".to_string(),
                sources: vec![
                    Source {
                        title: Some("Checkout usability guidelines".to_string()),
                        uri: "https://baymard.com/research/checkout-usability".to_string(),
                    },
                    Source { title: None, uri: "https://web.dev/explore/fast".to_string() },
                ],
            }),
        },
        SolutionRecord {
            id: "sol-seed-0001".to_string(),
            timestamp: "2024-05-02T09:15:00.000Z".to_string(),
            company_type: "Restaurant".to_string(),
            niche: "Healthy fast food".to_string(),
            problem_description: "Lunch traffic is strong but dinner sales have dropped 35% in six months and the evening staff is often idle.".to_string(),
            business_area: BusinessArea::Marketing,
            result: RecordResult::Analysis(AnalysisResult {
                problem_analysis: ProblemAnalysis {
                    identified_problem: "The brand is perceived as a lunch-only option, so there is no reason to visit in the evening.".to_string(),
                    impact: "Idle evening capacity raises the cost per meal and caps monthly revenue.".to_string(),
                },
                short_term_solution: Solution {
                    title: "Evening combo campaign".to_string(),
                    summary: "Launch a dinner-specific offer and promote it to existing lunch customers.".to_string(),
                    steps: vec![
                        step("Design the combo", "Create two dinner bundles with a drink and dessert at a fixed price."),
                        step("Reach lunch regulars", "Hand out dinner coupons with every lunch order for four weeks."),
                        step("Track redemptions", "Count coupon use per day to see which bundle works."),
                    ],
                    is_premium: None,
                },
                long_term_solution: Solution {
                    title: "Reposition as an all-day brand".to_string(),
                    summary: "Adjust menu, ambience and messaging so the restaurant is a natural dinner choice.".to_string(),
                    steps: vec![
                        step("Extend the menu", "Add warm dishes that fit an evening meal."),
                        step("Change the ambience", "Use softer lighting and music after 6 pm."),
                        step("Partner with delivery apps", "Run dinner-only promotions on delivery platforms."),
                    ],
                    is_premium: Some(true),
                },
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::seed_records;
    use std::collections::HashSet;

    #[test]
    fn seed_is_non_empty_with_unique_ids() {
        let seed = seed_records();
        assert!(!seed.is_empty());
        let ids: HashSet<&str> = seed.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), seed.len());
    }
}
