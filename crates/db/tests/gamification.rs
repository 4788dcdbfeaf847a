//! Repository tests for enrollments, progress records, the XP ledger, and badges.

use skillkart_core::badges::{BadgeDefinition, DEFAULT_BADGES};
use skillkart_core::progress::ProgressStatus;
use skillkart_db::models::roadmap::{CreateRoadmap, CreateStep, RoadmapDetail};
use skillkart_db::models::user::{CreateUser, User};
use skillkart_db::repositories::{
    BadgeRepo, EnrollmentRepo, ProgressRepo, RoadmapRepo, UserRepo, XpRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const LEARNER_ROLE_ID: i64 = 2;

async fn new_learner(pool: &PgPool, username: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "not-a-real-hash".to_string(),
            role_id: LEARNER_ROLE_ID,
        },
    )
    .await
    .unwrap()
}

async fn new_roadmap(pool: &PgPool, title: &str, steps: &[&str]) -> RoadmapDetail {
    let input = CreateRoadmap {
        title: title.to_string(),
        description: None,
        steps: steps
            .iter()
            .map(|t| CreateStep {
                title: t.to_string(),
                description: None,
            })
            .collect(),
    };
    RoadmapRepo::create_with_steps(pool, None, &input)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Roadmaps
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_roadmap_steps_positioned_in_order(pool: PgPool) {
    let detail = new_roadmap(&pool, "Rust", &["Install", "Ownership", "Traits"]).await;

    let positions: Vec<i32> = detail.steps.iter().map(|s| s.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);

    let listed = RoadmapRepo::list_steps(&pool, detail.roadmap.id).await.unwrap();
    let titles: Vec<&str> = listed.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Install", "Ownership", "Traits"]);

    let step = RoadmapRepo::find_step(&pool, listed[1].id).await.unwrap().unwrap();
    assert_eq!(step.roadmap_id, detail.roadmap.id);
}

// ---------------------------------------------------------------------------
// Enrollments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_start_enrollment_is_idempotent(pool: PgPool) {
    let user = new_learner(&pool, "idem").await;
    let roadmap = new_roadmap(&pool, "Go", &["Hello"]).await;

    let first = EnrollmentRepo::start(&pool, user.id, roadmap.roadmap.id)
        .await
        .unwrap();
    let second = EnrollmentRepo::start(&pool, user.id, roadmap.roadmap.id)
        .await
        .unwrap();

    assert!(first.inserted);
    assert!(!second.inserted);
    assert_eq!(first.enrollment, second.enrollment);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM enrollments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_enrollment_overview_counts(pool: PgPool) {
    let user = new_learner(&pool, "overview").await;
    let roadmap = new_roadmap(&pool, "SQL", &["Select", "Join", "Index"]).await;
    let enrollment = EnrollmentRepo::start(&pool, user.id, roadmap.roadmap.id)
        .await
        .unwrap()
        .enrollment;

    let mut conn = pool.acquire().await.unwrap();
    for (step, status) in [
        (&roadmap.steps[0], ProgressStatus::Completed),
        (&roadmap.steps[1], ProgressStatus::InProgress),
    ] {
        ProgressRepo::lock_or_create(&mut *conn, enrollment.id, step.id)
            .await
            .unwrap();
        ProgressRepo::set_status(&mut *conn, enrollment.id, step.id, status)
            .await
            .unwrap();
    }
    drop(conn);

    let overviews = EnrollmentRepo::list_overviews_for_user(&pool, user.id)
        .await
        .unwrap();
    assert_eq!(overviews.len(), 1);
    assert_eq!(overviews[0].roadmap_title, "SQL");
    assert_eq!(overviews[0].total_steps, 3);
    assert_eq!(overviews[0].completed_steps, 1);
    assert_eq!(overviews[0].in_progress_steps, 1);
}

// ---------------------------------------------------------------------------
// Progress records
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_lock_or_create_reports_previous_status(pool: PgPool) {
    let user = new_learner(&pool, "prev").await;
    let roadmap = new_roadmap(&pool, "C", &["Pointers"]).await;
    let step_id = roadmap.steps[0].id;
    let enrollment_id = EnrollmentRepo::start(&pool, user.id, roadmap.roadmap.id)
        .await
        .unwrap()
        .enrollment
        .id;

    let mut conn = pool.acquire().await.unwrap();

    let previous = ProgressRepo::lock_or_create(&mut *conn, enrollment_id, step_id)
        .await
        .unwrap();
    assert_eq!(previous, None, "first call creates the record");

    ProgressRepo::set_status(&mut *conn, enrollment_id, step_id, ProgressStatus::Completed)
        .await
        .unwrap();

    let previous = ProgressRepo::lock_or_create(&mut *conn, enrollment_id, step_id)
        .await
        .unwrap();
    assert_eq!(previous, Some(ProgressStatus::Completed));

    // Blind overwrite: completed may go back to in_progress.
    let record =
        ProgressRepo::set_status(&mut *conn, enrollment_id, step_id, ProgressStatus::InProgress)
            .await
            .unwrap();
    assert_eq!(record.status, "in_progress");
    drop(conn);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM progress_records")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1, "one record per (enrollment, step)");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_step_progress_defaults_to_not_started(pool: PgPool) {
    let user = new_learner(&pool, "defaults").await;
    let roadmap = new_roadmap(&pool, "Zig", &["Build", "Comptime"]).await;
    let enrollment_id = EnrollmentRepo::start(&pool, user.id, roadmap.roadmap.id)
        .await
        .unwrap()
        .enrollment
        .id;

    let mut conn = pool.acquire().await.unwrap();
    ProgressRepo::lock_or_create(&mut *conn, enrollment_id, roadmap.steps[1].id)
        .await
        .unwrap();
    ProgressRepo::set_status(
        &mut *conn,
        enrollment_id,
        roadmap.steps[1].id,
        ProgressStatus::Completed,
    )
    .await
    .unwrap();
    drop(conn);

    let steps = ProgressRepo::list_step_progress(&pool, enrollment_id, roadmap.roadmap.id)
        .await
        .unwrap();
    let statuses: Vec<&str> = steps.iter().map(|s| s.status.as_str()).collect();
    assert_eq!(statuses, vec!["not_started", "completed"]);
    assert!(steps[0].updated_at.is_none());

    let found = ProgressRepo::find(&pool, enrollment_id, roadmap.steps[1].id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.status, "completed");

    assert_eq!(
        ProgressRepo::count_completed_for_user(&pool, user.id)
            .await
            .unwrap(),
        1
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_status_rejected_by_schema(pool: PgPool) {
    let user = new_learner(&pool, "badstatus").await;
    let roadmap = new_roadmap(&pool, "Haskell", &["Monads"]).await;
    let enrollment_id = EnrollmentRepo::start(&pool, user.id, roadmap.roadmap.id)
        .await
        .unwrap()
        .enrollment
        .id;

    let result = sqlx::query(
        "INSERT INTO progress_records (enrollment_id, step_id, status) VALUES ($1, $2, 'done')",
    )
    .bind(enrollment_id)
    .bind(roadmap.steps[0].id)
    .execute(&pool)
    .await;

    let err = result.unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23514"), "check violation");
}

// ---------------------------------------------------------------------------
// XP ledger
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_total_xp_is_sum_of_entries(pool: PgPool) {
    let user = new_learner(&pool, "xpsum").await;
    let other = new_learner(&pool, "xpother").await;

    assert_eq!(XpRepo::total_for_user(&pool, user.id).await.unwrap(), 0);

    for points in [10, 25, 7] {
        XpRepo::append(&pool, user.id, "Completed step 1", points)
            .await
            .unwrap();
    }
    XpRepo::append(&pool, other.id, "Completed step 1", 100)
        .await
        .unwrap();

    assert_eq!(XpRepo::total_for_user(&pool, user.id).await.unwrap(), 42);

    let history = XpRepo::list_for_user(&pool, user.id).await.unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].points, 7, "newest entry first");
    assert_eq!(history.iter().map(|e| e.points as i64).sum::<i64>(), 42);
}

// ---------------------------------------------------------------------------
// Badges
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_defaults_twice_keeps_one_row_per_name(pool: PgPool) {
    let first = BadgeRepo::seed_defaults(&pool, DEFAULT_BADGES).await.unwrap();
    let second = BadgeRepo::seed_defaults(&pool, DEFAULT_BADGES).await.unwrap();

    assert_eq!(first, DEFAULT_BADGES.len() as u64);
    assert_eq!(second, 0);

    let badges = BadgeRepo::list(&pool).await.unwrap();
    assert_eq!(badges.len(), DEFAULT_BADGES.len());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_badges_listed_oldest_first(pool: PgPool) {
    let defs = [
        BadgeDefinition {
            name: "First",
            description: "one",
        },
        BadgeDefinition {
            name: "Second",
            description: "two",
        },
        BadgeDefinition {
            name: "Third",
            description: "three",
        },
    ];
    // Separate statements so created_at is non-decreasing in insert order.
    for def in &defs {
        BadgeRepo::seed_defaults(&pool, std::slice::from_ref(def))
            .await
            .unwrap();
    }

    let names: Vec<String> = BadgeRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.name)
        .collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_award_is_idempotent(pool: PgPool) {
    BadgeRepo::seed_defaults(&pool, DEFAULT_BADGES).await.unwrap();
    let user = new_learner(&pool, "awardee").await;
    let badge = BadgeRepo::find_by_name(&pool, "Getting Started")
        .await
        .unwrap()
        .unwrap();

    let first = BadgeRepo::award(&pool, user.id, badge.id).await.unwrap();
    assert!(first.is_some());
    for _ in 0..3 {
        let again = BadgeRepo::award(&pool, user.id, badge.id).await.unwrap();
        assert!(again.is_none());
    }

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_badges WHERE user_id = $1")
        .bind(user.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let statuses = BadgeRepo::list_for_user(&pool, user.id).await.unwrap();
    assert_eq!(statuses.len(), DEFAULT_BADGES.len());
    let earned: Vec<&str> = statuses
        .iter()
        .filter(|s| s.earned)
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(earned, vec!["Getting Started"]);
    assert!(statuses.iter().filter(|s| !s.earned).all(|s| s.earned_at.is_none()));
}
