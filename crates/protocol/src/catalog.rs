//! Project and unit catalog types.

use serde::{Deserialize, Serialize};

use crate::status::{ProjectStatus, UnitStatus};

/// A sellable residential unit inside a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: i64,
    pub project_id: i64,
    pub unit_code: String,
    pub floor: i32,
    pub area_m2: f64,
    pub bedrooms: u32,
    /// Price in tomans.
    pub price: i64,
    pub status: UnitStatus,
}

/// A floor plan attached to a project, optionally web-viewable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    pub id: i64,
    pub title: String,
    pub level: String,
    pub file_format: String,
    pub source_url: String,
    #[serde(default)]
    pub viewer_url: Option<String>,
    #[serde(default)]
    pub viewer_urn: Option<String>,
}

/// Catalog listing entry with availability aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub address: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub available_units: u32,
    #[serde(default)]
    pub min_price: Option<i64>,
}

/// Full project detail including plans and units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub address: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub plans: Vec<FloorPlan>,
    pub units: Vec<Unit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_detail_parses_service_shape() {
        let body = r#"{
            "id": 1,
            "title": "Baran Tower",
            "slug": "baran-tower",
            "description": "desc",
            "address": "Tehran",
            "status": "active",
            "cover_image": null,
            "plans": [{
                "id": 3,
                "title": "Type A",
                "level": "5",
                "file_format": "dwg",
                "source_url": "https://files.example/plan-a.dwg",
                "viewer_url": null,
                "viewer_urn": null
            }],
            "units": [{
                "id": 42,
                "project_id": 1,
                "unit_code": "A-501",
                "floor": 5,
                "area_m2": 104.5,
                "bedrooms": 2,
                "price": 9800000000,
                "status": "available"
            }]
        }"#;
        let parsed: ProjectDetail = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.units.len(), 1);
        assert_eq!(parsed.units[0].status, UnitStatus::Available);
        assert_eq!(parsed.plans[0].file_format, "dwg");
    }
}
