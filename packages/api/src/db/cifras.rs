use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use store::{Cifra, CifraDraft, CifraError, CifraStore};
use uuid::Uuid;

const COLUMNS: &str = "id, titulo, autor, texto, video_url, created_at";

/// A row of the `cifras` table.
#[derive(Debug, FromRow)]
struct CifraRow {
    id: Uuid,
    titulo: String,
    autor: String,
    texto: String,
    video_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<CifraRow> for Cifra {
    fn from(row: CifraRow) -> Self {
        Cifra {
            id: row.id.to_string(),
            titulo: row.titulo,
            autor: row.autor,
            texto: row.texto,
            video_url: row.video_url,
            created_at: row.created_at,
        }
    }
}

/// [`CifraStore`] over the shared PostgreSQL pool.
#[derive(Clone, Copy, Debug)]
pub struct PgCifraStore {
    pool: &'static PgPool,
}

impl PgCifraStore {
    pub fn new(pool: &'static PgPool) -> Self {
        Self { pool }
    }
}

impl CifraStore for PgCifraStore {
    async fn list(&self) -> Result<Vec<Cifra>, CifraError> {
        let rows: Vec<CifraRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM cifras ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await
        .map_err(CifraError::storage)?;

        Ok(rows.into_iter().map(Cifra::from).collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Cifra>, CifraError> {
        // Ids that are not UUIDs cannot exist in the table.
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let row: Option<CifraRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM cifras WHERE id = $1"))
                .bind(id)
                .fetch_optional(self.pool)
                .await
                .map_err(CifraError::storage)?;

        Ok(row.map(Cifra::from))
    }

    async fn insert(&self, autor: &str, draft: &CifraDraft) -> Result<Cifra, CifraError> {
        let row: CifraRow = sqlx::query_as(&format!(
            "INSERT INTO cifras (titulo, autor, texto, video_url) VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(&draft.titulo)
        .bind(autor)
        .bind(&draft.texto)
        .bind(&draft.video_url)
        .fetch_one(self.pool)
        .await
        .map_err(CifraError::storage)?;

        Ok(row.into())
    }

    async fn update(&self, id: &str, draft: &CifraDraft) -> Result<Cifra, CifraError> {
        let id = Uuid::parse_str(id).map_err(|_| CifraError::NotFound)?;

        let row: Option<CifraRow> = sqlx::query_as(&format!(
            "UPDATE cifras SET titulo = $2, texto = $3, video_url = $4 WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(&draft.titulo)
        .bind(&draft.texto)
        .bind(&draft.video_url)
        .fetch_optional(self.pool)
        .await
        .map_err(CifraError::storage)?;

        row.map(Cifra::from).ok_or(CifraError::NotFound)
    }

    async fn delete(&self, id: &str) -> Result<(), CifraError> {
        let id = Uuid::parse_str(id).map_err(|_| CifraError::NotFound)?;

        let result = sqlx::query("DELETE FROM cifras WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(CifraError::storage)?;

        if result.rows_affected() == 0 {
            return Err(CifraError::NotFound);
        }
        Ok(())
    }
}
