//! Inline site content.
//!
//! The catalog is compiled into the binary; editing copy means editing this
//! file.

use chrono::NaiveDate;

use crate::domain::calculators::CalculatorKind;
use crate::domain::entities::{Article, Faq, Guide, GuideStep, Section, Tool};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn tools() -> Vec<Tool> {
    vec![
        Tool {
            slug: "pay-raise-calculator".to_string(),
            name: "Pay Raise Calculator".to_string(),
            title: "Pay Raise Calculator: See Your New Salary".to_string(),
            description: "Calculate your new salary after a percentage raise, with monthly and hourly equivalents and an industry benchmark.".to_string(),
            keywords: "pay raise calculator, salary increase calculator, raise percentage, new salary after raise".to_string(),
            calculator: CalculatorKind::Raise,
            intro: "Enter your current salary and the raise you were offered to see your new pay and how it compares with the average raise in your industry.".to_string(),
            features: vec![],
            faqs: vec![
                Faq::new(
                    "How is a percentage raise calculated?",
                    "Multiply your current salary by one plus the raise percentage divided by 100. A 5% raise on $50,000 gives $52,500.",
                ),
                Faq::new(
                    "What is a good annual raise?",
                    "Average merit raises sit between 3% and 5% in most industries. Anything above your industry average is a strong result.",
                ),
            ],
            updated: date(2024, 9, 3),
        },
        Tool {
            slug: "inflation-raise-calculator".to_string(),
            name: "Inflation Raise Calculator".to_string(),
            title: "Inflation-Adjusted Raise Calculator".to_string(),
            description: "Find out whether your raise beats inflation and what your new salary is worth in today's money.".to_string(),
            keywords: "inflation raise calculator, real raise, cost of living raise, COLA calculator".to_string(),
            calculator: CalculatorKind::Inflation,
            intro: "A raise only improves your living standard if it outpaces rising prices. Compare your raise with the inflation rate over one or more years.".to_string(),
            features: strings(&[
                "Real raise after inflation",
                "Salary needed to keep pace with prices",
                "Multi-year purchasing power projection",
                "Free to use with no sign-up required",
            ]),
            faqs: vec![Faq::new(
                "What is a real raise?",
                "A real raise is your raise after removing inflation. If pay rises 5% while prices rise 3%, your real raise is about 1.9%.",
            )],
            updated: date(2024, 8, 14),
        },
        Tool {
            slug: "hourly-to-salary-calculator".to_string(),
            name: "Hourly to Salary Calculator".to_string(),
            title: "Hourly to Salary Calculator".to_string(),
            description: "Convert an hourly wage to an annual salary, or a salary to an hourly rate, with weekly and monthly pay.".to_string(),
            keywords: "hourly to salary, salary to hourly, hourly wage calculator, annual salary calculator".to_string(),
            calculator: CalculatorKind::Hourly,
            intro: "Convert between hourly pay and annual salary using your real working schedule.".to_string(),
            features: strings(&[
                "Hourly to annual and annual to hourly",
                "Custom hours per week and weeks per year",
                "Daily, weekly, bi-weekly and monthly pay",
            ]),
            faqs: vec![Faq::new(
                "How many working hours are in a year?",
                "A full-time schedule of 40 hours for 52 weeks is 2,080 hours.",
            )],
            updated: date(2024, 7, 22),
        },
        Tool {
            slug: "cost-of-living-calculator".to_string(),
            name: "Cost of Living Calculator".to_string(),
            title: "Cost of Living Salary Calculator".to_string(),
            description: "Compare what your salary is worth in another city using cost-of-living indices.".to_string(),
            keywords: "cost of living calculator, salary comparison by city, relocation salary calculator".to_string(),
            calculator: CalculatorKind::CostOfLiving,
            intro: "Moving cities? See the salary you need in your new city to keep the same standard of living.".to_string(),
            features: strings(&[
                "Major US city cost indices",
                "Equivalent salary in the destination",
                "Percentage difference between cities",
            ]),
            faqs: vec![Faq::new(
                "What does a cost of living index mean?",
                "It compares the price of housing, food, transport and services with the national average, which is set to 100.",
            )],
            updated: date(2024, 6, 30),
        },
        Tool {
            slug: "promotion-raise-calculator".to_string(),
            name: "Promotion Raise Calculator".to_string(),
            title: "Promotion Raise Calculator".to_string(),
            description: "Estimate the typical salary range for your next promotion and check whether an offer is fair.".to_string(),
            keywords: "promotion raise calculator, promotion salary increase, how much raise for promotion".to_string(),
            calculator: CalculatorKind::Promotion,
            intro: "Promotions usually come with a bigger raise than annual reviews. Pick your career step to see the typical range.".to_string(),
            features: vec![],
            faqs: vec![Faq::new(
                "How much of a raise should a promotion bring?",
                "Most promotions bring a 10% to 20% raise; moves into management and executive roles often go higher.",
            )],
            updated: date(2024, 9, 18),
        },
        Tool {
            slug: "total-compensation-calculator".to_string(),
            name: "Total Compensation Calculator".to_string(),
            title: "Total Compensation Calculator".to_string(),
            description: "Add up base salary, bonus, equity, retirement match and benefits to see your full compensation.".to_string(),
            keywords: "total compensation calculator, total rewards, compare job offers, salary plus benefits".to_string(),
            calculator: CalculatorKind::TotalCompensation,
            intro: "Base salary is only part of the picture. Add every component of an offer to compare packages fairly.".to_string(),
            features: strings(&[
                "Base, bonus and equity in one total",
                "Retirement match from a percentage",
                "Monthly total and base salary share",
            ]),
            faqs: vec![],
            updated: date(2024, 5, 11),
        },
    ]
}

pub fn articles() -> Vec<Article> {
    vec![
        Article {
            slug: "how-to-ask-for-a-raise".to_string(),
            title: "How to Ask for a Raise (and Get It)".to_string(),
            description: "A practical playbook for preparing, timing and running the conversation about a raise.".to_string(),
            keywords: "how to ask for a raise, salary negotiation, raise conversation".to_string(),
            author: Some("Jordan Ellis".to_string()),
            category: "Negotiation".to_string(),
            published: date(2024, 2, 12),
            modified: Some(date(2024, 8, 1)),
            reading_minutes: 7,
            sections: vec![
                Section::new(
                    "Build your case first",
                    &[
                        "Collect concrete results from the past year: revenue influenced, projects shipped, costs saved.",
                        "Pair every result with a number. Managers take numbers upstairs; adjectives stay in the room.",
                    ],
                ),
                Section::new(
                    "Know your market rate",
                    &[
                        "Check salary surveys and job listings for your role and city, then run the figures through the raise calculator to translate a target into a percentage.",
                    ],
                ),
                Section::new(
                    "Pick the right moment",
                    &[
                        "Budget planning season and the weeks after a big win are the best times to ask.",
                    ],
                ),
            ],
        },
        Article {
            slug: "average-raise-by-industry".to_string(),
            title: "Average Raise by Industry".to_string(),
            description: "How typical annual raises differ between technology, finance, healthcare, education and other industries.".to_string(),
            keywords: "average raise, average salary increase, raise by industry, merit increase".to_string(),
            author: None,
            category: "Salary Data".to_string(),
            published: date(2024, 4, 3),
            modified: None,
            reading_minutes: 5,
            sections: vec![
                Section::new(
                    "The big picture",
                    &[
                        "Most employers budget between 3% and 5% for merit increases. Fast-growing sectors such as technology sit at the top of that range.",
                    ],
                ),
                Section::new(
                    "Where public sector pay lands",
                    &[
                        "Government and education raises are often set by pay scales and tend to trail private industry by a point or more.",
                    ],
                ),
            ],
        },
        Article {
            slug: "raise-vs-inflation".to_string(),
            title: "Is Your Raise Keeping Up With Inflation?".to_string(),
            description: "Why a raise below the inflation rate is a pay cut in disguise, and how to measure your real raise.".to_string(),
            keywords: "raise vs inflation, real wage, cost of living adjustment, COLA".to_string(),
            author: Some("Priya Raman".to_string()),
            category: "Inflation".to_string(),
            published: date(2024, 6, 19),
            modified: None,
            reading_minutes: 6,
            sections: vec![
                Section::new(
                    "Nominal versus real",
                    &[
                        "Your nominal raise is the number on your pay slip. Your real raise subtracts the growth in prices over the same period.",
                    ],
                ),
                Section::new(
                    "Cost-of-living adjustments",
                    &[
                        "A COLA is a raise intended only to offset inflation. It protects purchasing power but does not reward performance.",
                    ],
                ),
            ],
        },
        Article {
            slug: "negotiating-a-promotion-salary".to_string(),
            title: "Negotiating Your Salary After a Promotion".to_string(),
            description: "Promotion raises are negotiable. Here is how to benchmark the offer and ask for more.".to_string(),
            keywords: "promotion salary negotiation, promotion raise, negotiate promotion pay".to_string(),
            author: None,
            category: "Negotiation".to_string(),
            published: date(2024, 9, 9),
            modified: Some(date(2024, 9, 20)),
            reading_minutes: 6,
            sections: vec![Section::new(
                "Benchmark the band",
                &[
                    "Each career step has a typical raise range. An offer at the bottom of the band leaves room to negotiate.",
                    "Anchor the conversation on the scope of the new role rather than on your current salary.",
                ],
            )],
        },
    ]
}

pub fn guides() -> Vec<Guide> {
    vec![
        Guide {
            slug: "salary-negotiation-guide".to_string(),
            title: "Salary Negotiation Guide".to_string(),
            description: "A step-by-step method for negotiating a higher salary, from research to the final offer.".to_string(),
            keywords: "salary negotiation guide, negotiate salary steps, counter offer".to_string(),
            level: "Beginner".to_string(),
            published: date(2024, 1, 15),
            modified: Some(date(2024, 7, 2)),
            estimated_minutes: 20,
            steps: vec![
                GuideStep::new("Research the market", "Gather salary data for your role, level and city from at least three sources."),
                GuideStep::new("Set your numbers", "Choose a target, an opening ask slightly above it, and a walk-away minimum."),
                GuideStep::new("Make the ask", "State your number with your strongest evidence, then stop talking and listen."),
                GuideStep::new("Handle the counter", "Trade on other levers such as bonus, equity or start date if base salary is fixed."),
                GuideStep::new("Get it in writing", "Confirm the agreed salary and effective date by email."),
            ],
            sections: vec![Section::new(
                "Before you start",
                &["Negotiation is a normal part of hiring and reviews. Employers expect it."],
            )],
        },
        Guide {
            slug: "relocation-salary-guide".to_string(),
            title: "Relocating for Work: Adjusting Your Salary".to_string(),
            description: "How to work out the salary you need when moving to a more or less expensive city.".to_string(),
            keywords: "relocation salary, moving salary adjustment, cost of living raise".to_string(),
            level: "Intermediate".to_string(),
            published: date(2024, 3, 8),
            modified: None,
            estimated_minutes: 15,
            steps: vec![
                GuideStep::new("Find both city indices", "Look up the cost-of-living index of your current and destination cities."),
                GuideStep::new("Compute the equivalent salary", "Multiply your salary by the destination index divided by your current index."),
                GuideStep::new("Add moving costs", "Ask for a relocation package to cover one-off moving expenses."),
            ],
            sections: vec![],
        },
        Guide {
            slug: "understanding-total-compensation".to_string(),
            title: "Understanding Total Compensation".to_string(),
            description: "What counts toward total compensation and how to value bonuses, equity and benefits.".to_string(),
            keywords: "total compensation explained, total rewards, equity value, benefits value".to_string(),
            level: "Beginner".to_string(),
            published: date(2024, 5, 27),
            modified: None,
            estimated_minutes: 12,
            steps: vec![],
            sections: vec![
                Section::new(
                    "Cash compensation",
                    &["Base salary and bonuses are the most predictable parts of a package."],
                ),
                Section::new(
                    "Equity",
                    &["Value vesting equity at its current price and divide grants by the vesting period to get a yearly figure."],
                ),
                Section::new(
                    "Benefits",
                    &["Health insurance, retirement matching and paid leave can add 20% to 30% on top of base salary."],
                ),
            ],
        },
    ]
}

pub fn faqs() -> Vec<Faq> {
    vec![
        Faq::new(
            "Are the calculators free?",
            "Yes. Every calculator is free to use and requires no account.",
        ),
        Faq::new(
            "How accurate are the results?",
            "The calculators apply standard formulas to the numbers you enter. Results are estimates before tax.",
        ),
        Faq::new(
            "Where do the cost-of-living figures come from?",
            "City indices are composite estimates relative to a national average of 100 and are reviewed periodically.",
        ),
        Faq::new(
            "What is a COLA?",
            "A cost-of-living adjustment is a salary change intended to offset regional or inflationary cost differences.",
        ),
        Faq::new(
            "Do you store the numbers I enter?",
            "No. Calculations happen per request and nothing is saved.",
        ),
    ]
}
