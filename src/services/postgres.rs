use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;
use crate::core::Coordinate;
use crate::models::{Candidate, Place, PlaceImage, PlaceKind, ReferencePlace};

/// Errors that can occur when reading places from PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Read-only PostgreSQL client over the platform's place tables
///
/// The schema belongs to the back-office application; this client only
/// resolves reference places and loads candidate lists.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client and open the pool
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout_secs: u64,
        idle_timeout_secs: u64,
    ) -> Result<Self, PostgresError> {
        let pool = pool_options(max_connections, min_connections, acquire_timeout_secs, idle_timeout_secs)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a client whose connections open on first use
    pub fn lazy(database_url: &str, max_connections: u32) -> Result<Self, PostgresError> {
        let pool = pool_options(max_connections, 0, 5, 600).connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            acquire_timeout_secs.unwrap_or(5),
            idle_timeout_secs.unwrap_or(600),
        )
        .await
    }

    /// Resolve the reference place a nearby lookup starts from
    pub async fn get_reference(
        &self,
        kind: PlaceKind,
        slug: &str,
    ) -> Result<ReferencePlace, PostgresError> {
        // Parks group by themselves, hotels and places by their park
        let group_column = if kind.is_grouped_by_park() { "park_id" } else { "id" };
        let query = format!(
            r#"
            SELECT id::bigint AS id, {group}::bigint AS group_id, latitude, longitude
            FROM {table}
            WHERE slug = $1
            "#,
            group = group_column,
            table = kind.table(),
        );

        let row = sqlx::query(&query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PostgresError::NotFound(format!("{} '{}'", kind, slug)))?;

        let latitude: Option<String> = row.try_get("latitude")?;
        let longitude: Option<String> = row.try_get("longitude")?;

        Ok(ReferencePlace {
            id: row.try_get("id")?,
            kind,
            group_id: row.try_get("group_id")?,
            coordinate: Coordinate::parse(latitude.as_deref(), longitude.as_deref()).ok(),
        })
    }

    /// Load candidate places of `target` kind sharing the reference's park
    ///
    /// `group_id` is ignored for parks, which are not grouped.
    pub async fn list_candidates(
        &self,
        target: PlaceKind,
        group_id: Option<i64>,
        exclude_id: Option<i64>,
    ) -> Result<Vec<Candidate>, PostgresError> {
        let (images_table, images_fk) = target.images_table();
        let grouped = target.is_grouped_by_park();
        let filter = if grouped {
            "($1::bigint IS NULL OR p.park_id = $1) AND ($2::bigint IS NULL OR p.id <> $2)"
        } else {
            "($1::bigint IS NULL OR p.id <> $1)"
        };

        let query = format!(
            r#"
            SELECT
                p.id::bigint AS id,
                p.name,
                COALESCE(p.description, '') AS description,
                p.slug,
                p.latitude,
                p.longitude,
                COALESCE(
                    json_agg(
                        json_build_object('id', i.id::bigint, 'url', i.url, 'altText', i.alt_text)
                        ORDER BY i.id
                    ) FILTER (WHERE i.id IS NOT NULL),
                    '[]'::json
                ) AS images
            FROM {table} p
            LEFT JOIN {images_table} i ON i.{images_fk} = p.id
            WHERE {filter}
            GROUP BY p.id
            ORDER BY p.id
            "#,
            table = target.table(),
            images_table = images_table,
            images_fk = images_fk,
            filter = filter,
        );

        let group_id = if grouped { group_id } else { None };

        let mut statement = sqlx::query(&query);
        if grouped {
            statement = statement.bind(group_id);
        }
        let rows = statement.bind(exclude_id).fetch_all(&self.pool).await?;

        let candidates = rows
            .iter()
            .map(|row| place_from_row(row).map(Candidate::from))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            "Loaded {} {} candidates (park: {:?})",
            candidates.len(),
            target,
            group_id
        );

        Ok(candidates)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn pool_options(
    max_connections: u32,
    min_connections: u32,
    acquire_timeout_secs: u64,
    idle_timeout_secs: u64,
) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(min_connections)
        .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(idle_timeout_secs))
        .test_before_acquire(true)
}

fn place_from_row(row: &PgRow) -> Result<Place, sqlx::Error> {
    let Json(images): Json<Vec<PlaceImage>> = row.try_get("images")?;

    Ok(Place {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        slug: row.try_get("slug")?,
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
        images: Some(images),
    })
}
