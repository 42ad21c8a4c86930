use serde::{Deserialize, Serialize};

use crate::recommend::Recommendation;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub recommendations: Vec<Recommendation>,
    pub error: Option<String>,
}

impl RecommendationResponse {
    pub fn found(recommendations: Vec<Recommendation>) -> Self {
        Self {
            recommendations,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            recommendations: Vec::new(),
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NameParams {
    pub name: Option<String>,
    pub k: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryParams {
    pub platform: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<String>,
    pub k: Option<usize>,
}
