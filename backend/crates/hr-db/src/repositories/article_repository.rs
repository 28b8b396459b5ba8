use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_timestamp, parse_uuid};

use hr_core::Article;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "articles";

#[derive(FromRow)]
struct ArticleRow {
    id: String,
    title: String,
    summary: String,
    body: String,
    published_at: i64,
}

impl TryFrom<ArticleRow> for Article {
    type Error = crate::DbError;

    fn try_from(row: ArticleRow) -> DbErrorResult<Self> {
        Ok(Article {
            id: parse_uuid(TABLE, &row.id)?,
            title: row.title,
            summary: row.summary,
            body: row.body,
            published_at: parse_timestamp(TABLE, row.published_at)?,
        })
    }
}

/// Articles are public content published out of band; the RPC surface only reads them.
pub struct ArticleRepository {
    pool: SqlitePool,
}

impl ArticleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, article: &Article) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO articles (id, title, summary, body, published_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(article.id.to_string())
        .bind(&article.title)
        .bind(&article.summary)
        .bind(&article.body)
        .bind(article.published_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
              SELECT id, title, summary, body, published_at
              FROM articles
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Article::try_from).transpose()
    }

    pub async fn list(&self, offset: i64, limit: i64) -> DbErrorResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            r#"
              SELECT id, title, summary, body, published_at
              FROM articles
              ORDER BY published_at DESC, id DESC
              LIMIT ? OFFSET ?
              "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
