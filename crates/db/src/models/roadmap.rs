//! Roadmap and step catalog models and DTOs.

use serde::{Deserialize, Serialize};
use skillkart_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `roadmaps` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Roadmap {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `steps` table. `position` is 1-based within the roadmap.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Step {
    pub id: DbId,
    pub roadmap_id: DbId,
    pub position: i32,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A roadmap with its ordered steps.
#[derive(Debug, Clone, Serialize)]
pub struct RoadmapDetail {
    #[serde(flatten)]
    pub roadmap: Roadmap,
    pub steps: Vec<Step>,
}

/// DTO for one step in a [`CreateRoadmap`] request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStep {
    pub title: String,
    pub description: Option<String>,
}

/// DTO for creating a roadmap together with its steps.
///
/// Steps are stored in the order given, with positions starting at 1.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoadmap {
    pub title: String,
    pub description: Option<String>,
    pub steps: Vec<CreateStep>,
}
