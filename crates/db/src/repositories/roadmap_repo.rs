//! Repository for the `roadmaps` and `steps` tables.

use skillkart_core::types::DbId;
use sqlx::PgPool;

use crate::models::roadmap::{CreateRoadmap, Roadmap, RoadmapDetail, Step};

/// Column list for `roadmaps` queries.
const ROADMAP_COLUMNS: &str = "id, title, description, created_by, created_at, updated_at";

/// Column list for `steps` queries.
const STEP_COLUMNS: &str = "id, roadmap_id, position, title, description, created_at, updated_at";

/// Provides catalog operations for roadmaps and their steps.
pub struct RoadmapRepo;

impl RoadmapRepo {
    /// Insert a roadmap and all of its steps in one transaction.
    ///
    /// Step positions are assigned 1..=n in input order.
    pub async fn create_with_steps(
        pool: &PgPool,
        created_by: Option<DbId>,
        input: &CreateRoadmap,
    ) -> Result<RoadmapDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO roadmaps (title, description, created_by)
             VALUES ($1, $2, $3)
             RETURNING {ROADMAP_COLUMNS}"
        );
        let roadmap = sqlx::query_as::<_, Roadmap>(&query)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(created_by)
            .fetch_one(&mut *tx)
            .await?;

        let step_query = format!(
            "INSERT INTO steps (roadmap_id, position, title, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {STEP_COLUMNS}"
        );
        let mut steps = Vec::with_capacity(input.steps.len());
        for (i, step) in input.steps.iter().enumerate() {
            let created = sqlx::query_as::<_, Step>(&step_query)
                .bind(roadmap.id)
                .bind(i as i32 + 1)
                .bind(step.title.trim())
                .bind(&step.description)
                .fetch_one(&mut *tx)
                .await?;
            steps.push(created);
        }

        tx.commit().await?;
        Ok(RoadmapDetail { roadmap, steps })
    }

    /// Find a roadmap by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Roadmap>, sqlx::Error> {
        let query = format!("SELECT {ROADMAP_COLUMNS} FROM roadmaps WHERE id = $1");
        sqlx::query_as::<_, Roadmap>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all roadmaps, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Roadmap>, sqlx::Error> {
        let query = format!("SELECT {ROADMAP_COLUMNS} FROM roadmaps ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, Roadmap>(&query).fetch_all(pool).await
    }

    /// List the steps of a roadmap in position order.
    pub async fn list_steps(pool: &PgPool, roadmap_id: DbId) -> Result<Vec<Step>, sqlx::Error> {
        let query = format!(
            "SELECT {STEP_COLUMNS} FROM steps WHERE roadmap_id = $1 ORDER BY position ASC"
        );
        sqlx::query_as::<_, Step>(&query)
            .bind(roadmap_id)
            .fetch_all(pool)
            .await
    }

    /// Find a single step by ID.
    pub async fn find_step(pool: &PgPool, step_id: DbId) -> Result<Option<Step>, sqlx::Error> {
        let query = format!("SELECT {STEP_COLUMNS} FROM steps WHERE id = $1");
        sqlx::query_as::<_, Step>(&query)
            .bind(step_id)
            .fetch_optional(pool)
            .await
    }
}
