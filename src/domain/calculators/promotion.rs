//! Promotion raise bands by career step.

use serde::Serialize;

use super::error::{
    CalculatorError, CalculatorResult, ensure_non_negative, ensure_positive, ensure_results,
};

/// Typical raise range, in percent, for one career step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PromotionBand {
    pub low_percent: f64,
    pub typical_percent: f64,
    pub high_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromotionLevel {
    EntryToMid,
    MidToSenior,
    SeniorToLead,
    LeadToManager,
    ManagerToDirector,
    DirectorToVp,
}

impl PromotionLevel {
    pub const ALL: [PromotionLevel; 6] = [
        Self::EntryToMid,
        Self::MidToSenior,
        Self::SeniorToLead,
        Self::LeadToManager,
        Self::ManagerToDirector,
        Self::DirectorToVp,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::EntryToMid => "entry-to-mid",
            Self::MidToSenior => "mid-to-senior",
            Self::SeniorToLead => "senior-to-lead",
            Self::LeadToManager => "lead-to-manager",
            Self::ManagerToDirector => "manager-to-director",
            Self::DirectorToVp => "director-to-vp",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::EntryToMid => "Entry level to mid level",
            Self::MidToSenior => "Mid level to senior",
            Self::SeniorToLead => "Senior to lead / principal",
            Self::LeadToManager => "Lead to manager",
            Self::ManagerToDirector => "Manager to director",
            Self::DirectorToVp => "Director to vice president",
        }
    }

    pub fn band(&self) -> PromotionBand {
        let (low_percent, typical_percent, high_percent) = match self {
            Self::EntryToMid => (8.0, 10.0, 15.0),
            Self::MidToSenior => (10.0, 12.0, 18.0),
            Self::SeniorToLead => (10.0, 15.0, 20.0),
            Self::LeadToManager => (12.0, 18.0, 25.0),
            Self::ManagerToDirector => (15.0, 20.0, 30.0),
            Self::DirectorToVp => (20.0, 25.0, 40.0),
        };
        PromotionBand {
            low_percent,
            typical_percent,
            high_percent,
        }
    }

    pub fn from_slug(slug: &str) -> CalculatorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.slug() == slug)
            .ok_or_else(|| CalculatorError::UnknownPromotionLevel(slug.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BandPosition {
    Below,
    Within,
    Above,
}

impl BandPosition {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Below => "Below the typical range",
            Self::Within => "Within the typical range",
            Self::Above => "Above the typical range",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferAssessment {
    pub offered_salary: f64,
    pub raise_percent: f64,
    pub position: BandPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromotionResult {
    pub level: PromotionLevel,
    pub current_salary: f64,
    pub band: PromotionBand,
    pub low_salary: f64,
    pub typical_salary: f64,
    pub high_salary: f64,
    pub offer: Option<OfferAssessment>,
}

/// Projects the salary range for a promotion and, when an offer is given,
/// places it against the band.
///
/// # Errors
///
/// Rejects negative salaries. Assessing an offer divides by the current
/// salary, which must then be greater than zero.
pub fn calculate_promotion(
    current_salary: f64,
    level: PromotionLevel,
    offered_salary: Option<f64>,
) -> CalculatorResult<PromotionResult> {
    let current = ensure_non_negative("current_salary", current_salary)?;
    let band = level.band();
    let apply = |percent: f64| current * (1.0 + percent / 100.0);

    let offer = match offered_salary {
        Some(offered) => {
            let offered = ensure_non_negative("offered_salary", offered)?;
            let base = ensure_positive("current_salary", current)?;
            let raise_percent = (offered - base) / base * 100.0;
            ensure_results(&[("offered_salary", raise_percent)])?;
            let position = if raise_percent < band.low_percent {
                BandPosition::Below
            } else if raise_percent > band.high_percent {
                BandPosition::Above
            } else {
                BandPosition::Within
            };
            Some(OfferAssessment {
                offered_salary: offered,
                raise_percent,
                position,
            })
        }
        None => None,
    };

    let high_salary = apply(band.high_percent);
    ensure_results(&[("high_salary", high_salary)])?;

    Ok(PromotionResult {
        level,
        current_salary: current,
        band,
        low_salary: apply(band.low_percent),
        typical_salary: apply(band.typical_percent),
        high_salary,
        offer,
    })
}
