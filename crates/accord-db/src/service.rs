//! Service layer: generic CRUD over any [`Resource`].
//!
//! `AccordService` wraps `AccordDb` together with the paging limits the API is
//! configured with. Every statement is assembled from the resource's column
//! description; user input only ever reaches SQL as bound parameters, and sort
//! columns are checked against the resource's sortable set before being
//! interpolated.

use accord_config::{AccordConfig, ApiConfig};
use accord_core::enums::EntityKind;
use accord_core::errors::CoreError;
use accord_core::query::ListQuery;
use accord_core::responses::ListResponse;
use accord_core::validate::Validate;

use crate::AccordDb;
use crate::error::DatabaseError;
use crate::helpers::escape_like;
use crate::resource::Resource;

/// Page-size policy applied to every list call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_limit: u32,
    pub max_limit: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

impl From<&ApiConfig> for PageLimits {
    fn from(config: &ApiConfig) -> Self {
        Self {
            default_limit: config.default_limit,
            max_limit: config.max_limit,
        }
    }
}

pub struct AccordService {
    db: AccordDb,
    limits: PageLimits,
}

impl AccordService {
    #[must_use]
    pub const fn new(db: AccordDb, limits: PageLimits) -> Self {
        Self { db, limits }
    }

    /// Open the configured database and apply its paging limits.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn from_config(config: &AccordConfig) -> Result<Self, DatabaseError> {
        let db = AccordDb::open(&config.database).await?;
        Ok(Self::new(db, PageLimits::from(&config.api)))
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &AccordDb {
        &self.db
    }

    #[must_use]
    pub const fn limits(&self) -> PageLimits {
        self.limits
    }

    /// One page of `R`, filtered by `search` and ordered by `sortby`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` for a sort on a non-sortable column.
    pub async fn list<R: Resource>(
        &self,
        query: &ListQuery,
    ) -> Result<ListResponse<R>, DatabaseError> {
        self.list_filtered::<R>(None, query).await
    }

    /// One page of the children of `parent_id` (e.g. the SOWs of an MSA).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the parent does not exist and
    /// `DatabaseError::InvalidState` if `R` has no parent resource.
    pub async fn list_by_parent<R: Resource>(
        &self,
        parent_id: i64,
        query: &ListQuery,
    ) -> Result<ListResponse<R>, DatabaseError> {
        let parent = R::PARENT.ok_or_else(|| {
            DatabaseError::InvalidState(format!("{} has no parent resource", R::KIND))
        })?;
        if !self.exists(parent.kind, parent_id).await? {
            return Err(DatabaseError::NotFound {
                kind: parent.kind,
                id: parent_id,
            });
        }
        self.list_filtered::<R>(Some((parent.column, parent_id)), query)
            .await
    }

    async fn list_filtered<R: Resource>(
        &self,
        parent: Option<(&'static str, i64)>,
        query: &ListQuery,
    ) -> Result<ListResponse<R>, DatabaseError> {
        let limit = query.effective_limit(self.limits.default_limit, self.limits.max_limit);
        let order = match query.sort_spec() {
            Some(spec) if R::is_sortable(&spec.column) => {
                format!("{} {}, id ASC", spec.column, spec.direction.as_sql())
            }
            Some(spec) => {
                return Err(CoreError::InvalidSort {
                    resource: R::KIND.route().to_string(),
                    column: spec.column,
                }
                .into());
            }
            None => "id ASC".to_string(),
        };

        let mut clauses = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some((column, parent_id)) = parent {
            params.push(libsql::Value::Integer(parent_id));
            clauses.push(format!("{column} = ?{}", params.len()));
        }
        if let Some(term) = query.search_term() {
            params.push(libsql::Value::Text(format!("%{}%", escape_like(term))));
            let idx = params.len();
            let any_column = R::SEARCH_COLUMNS
                .iter()
                .map(|col| format!("{col} LIKE ?{idx} ESCAPE '\\'"))
                .collect::<Vec<_>>()
                .join(" OR ");
            clauses.push(format!("({any_column})"));
        }

        let where_sql = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };
        let table = R::KIND.table();

        let mut rows = self
            .db
            .conn()
            .query(
                &format!("SELECT COUNT(*) FROM {table}{where_sql}"),
                libsql::params_from_iter(params.clone()),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let total = u64::try_from(row.get::<i64>(0)?)
            .map_err(|e| DatabaseError::Query(format!("negative row count: {e}")))?;

        let sql = format!(
            "SELECT {cols} FROM {table}{where_sql} ORDER BY {order} LIMIT {limit} OFFSET {skip}",
            cols = R::select_columns(),
            skip = query.skip,
        );
        let mut rows = self
            .db
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut data = Vec::new();
        while let Some(row) = rows.next().await? {
            data.push(R::from_row(&row)?);
        }

        tracing::debug!(
            resource = %R::KIND,
            skip = query.skip,
            limit,
            returned = data.len(),
            total,
            "listed"
        );

        Ok(ListResponse {
            data,
            total,
            skip: query.skip,
            limit,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no row has this id.
    pub async fn get<R: Resource>(&self, id: i64) -> Result<R, DatabaseError> {
        let mut rows = self
            .db
            .conn()
            .query(
                &format!(
                    "SELECT {} FROM {} WHERE id = ?1",
                    R::select_columns(),
                    R::KIND.table()
                ),
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            kind: R::KIND,
            id,
        })?;
        R::from_row(&row)
    }

    /// Validate and insert a new row, returning it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` for invalid input and
    /// `DatabaseError::Constraint` when a referenced parent does not exist.
    pub async fn create<R: Resource>(&self, input: &R::Input) -> Result<R, DatabaseError> {
        input.validate()?;
        let values = Self::bind_checked::<R>(input)?;

        let placeholders = (1..=values.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({placeholders}) RETURNING id",
            R::KIND.table(),
            R::COLUMNS.join(", ")
        );

        let id = {
            let mut rows = self
                .db
                .conn()
                .query(&sql, libsql::params_from_iter(values))
                .await
                .map_err(DatabaseError::classify)?;
            let row = rows
                .next()
                .await
                .map_err(DatabaseError::classify)?
                .ok_or(DatabaseError::NoResult)?;
            row.get::<i64>(0)?
        };

        tracing::debug!(resource = %R::KIND, id, "created");
        self.get::<R>(id).await
    }

    /// Replace every writable column of row `id`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no row has this id, plus the
    /// errors of [`Self::create`].
    pub async fn update<R: Resource>(&self, id: i64, input: &R::Input) -> Result<R, DatabaseError> {
        input.validate()?;
        let mut values = Self::bind_checked::<R>(input)?;

        let sets = R::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{col} = ?{}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        values.push(libsql::Value::Integer(id));
        let sql = format!(
            "UPDATE {} SET {sets} WHERE id = ?{}",
            R::KIND.table(),
            values.len()
        );

        let changed = self
            .db
            .conn()
            .execute(&sql, libsql::params_from_iter(values))
            .await
            .map_err(DatabaseError::classify)?;
        if changed == 0 {
            return Err(DatabaseError::NotFound { kind: R::KIND, id });
        }

        tracing::debug!(resource = %R::KIND, id, "updated");
        self.get::<R>(id).await
    }

    /// Delete row `id`. Dependent rows follow the schema's `ON DELETE` rules.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if nothing was deleted, and
    /// `DatabaseError::Constraint` if other rows still reference this one.
    pub async fn delete<R: Resource>(&self, id: i64) -> Result<(), DatabaseError> {
        let changed = self
            .db
            .conn()
            .execute(
                &format!("DELETE FROM {} WHERE id = ?1", R::KIND.table()),
                libsql::params![id],
            )
            .await
            .map_err(DatabaseError::classify)?;
        if changed == 0 {
            return Err(DatabaseError::NotFound { kind: R::KIND, id });
        }

        tracing::info!(resource = %R::KIND, id, "deleted");
        Ok(())
    }

    /// Total number of rows of `R`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count<R: Resource>(&self) -> Result<u64, DatabaseError> {
        self.count_table(R::KIND).await
    }

    async fn count_table(&self, kind: EntityKind) -> Result<u64, DatabaseError> {
        let mut rows = self
            .db
            .conn()
            .query(&format!("SELECT COUNT(*) FROM {}", kind.table()), ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        u64::try_from(row.get::<i64>(0)?)
            .map_err(|e| DatabaseError::Query(format!("negative row count: {e}")))
    }

    /// Whether a row of the given kind exists.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn exists(&self, kind: EntityKind, id: i64) -> Result<bool, DatabaseError> {
        let mut rows = self
            .db
            .conn()
            .query(
                &format!("SELECT 1 FROM {} WHERE id = ?1", kind.table()),
                libsql::params![id],
            )
            .await?;
        Ok(rows.next().await?.is_some())
    }

    fn bind_checked<R: Resource>(input: &R::Input) -> Result<Vec<libsql::Value>, DatabaseError> {
        let values = R::bind(input)?;
        if values.len() != R::COLUMNS.len() {
            return Err(DatabaseError::InvalidState(format!(
                "{} bound {} values for {} columns",
                R::KIND,
                values.len(),
                R::COLUMNS.len()
            )));
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use accord_core::entities::{Msa, Sow, Vendor, VendorInput};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{seed_msa, seed_sow, seed_vendor, test_service};

    #[tokio::test]
    async fn list_by_parent_requires_existing_parent() {
        let svc = test_service().await;
        let result = svc.list_by_parent::<Sow>(404, &ListQuery::default()).await;
        assert!(matches!(
            result,
            Err(DatabaseError::NotFound {
                kind: EntityKind::Msa,
                id: 404
            })
        ));
    }

    #[tokio::test]
    async fn list_by_parent_rejects_top_level_resource() {
        let svc = test_service().await;
        let result = svc.list_by_parent::<Vendor>(1, &ListQuery::default()).await;
        assert!(matches!(result, Err(DatabaseError::InvalidState(_))));
    }

    #[tokio::test]
    async fn list_by_parent_scopes_rows() {
        let svc = test_service().await;
        let vendor = seed_vendor(&svc, "Fabrikam").await;
        let first = seed_msa(&svc, vendor.id, "First").await;
        let second = seed_msa(&svc, vendor.id, "Second").await;
        seed_sow(&svc, first.id, "A").await;
        seed_sow(&svc, first.id, "B").await;
        seed_sow(&svc, second.id, "C").await;

        let page = svc
            .list_by_parent::<Sow>(first.id, &ListQuery::default())
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        assert!(page.data.iter().all(|sow| sow.msa_id == first.id));
    }

    #[tokio::test]
    async fn limit_is_capped_by_service_limits() {
        let db = AccordDb::open_local(":memory:").await.unwrap();
        let svc = AccordService::new(
            db,
            PageLimits {
                default_limit: 2,
                max_limit: 3,
            },
        );
        let vendor = seed_vendor(&svc, "Northwind").await;
        for i in 0..5 {
            seed_msa(&svc, vendor.id, &format!("MSA {i}")).await;
        }

        let defaulted = svc.list::<Msa>(&ListQuery::default()).await.unwrap();
        assert_eq!(defaulted.data.len(), 2);
        assert_eq!(defaulted.limit, 2);

        let capped = svc.list::<Msa>(&ListQuery::page(0, 50)).await.unwrap();
        assert_eq!(capped.data.len(), 3);
        assert_eq!(capped.limit, 3);
        assert_eq!(capped.total, 5);
    }

    #[tokio::test]
    async fn create_and_update_validate_input() {
        let svc = test_service().await;
        let blank = VendorInput {
            name: "   ".into(),
            ..VendorInput::default()
        };
        let created = svc.create::<Vendor>(&blank).await;
        assert!(matches!(
            created,
            Err(DatabaseError::Core(CoreError::Validation(_)))
        ));
        assert_eq!(svc.count::<Vendor>().await.unwrap(), 0);

        let vendor = seed_vendor(&svc, "Adatum").await;
        let updated = svc.update::<Vendor>(vendor.id, &blank).await;
        assert!(matches!(
            updated,
            Err(DatabaseError::Core(CoreError::Validation(_)))
        ));
        assert_eq!(svc.get::<Vendor>(vendor.id).await.unwrap().name, "Adatum");
    }

    #[tokio::test]
    async fn count_and_exists() {
        let svc = test_service().await;
        assert_eq!(svc.count::<Vendor>().await.unwrap(), 0);

        let vendor = seed_vendor(&svc, "Litware").await;
        assert_eq!(svc.count::<Vendor>().await.unwrap(), 1);
        assert!(svc.exists(EntityKind::Vendor, vendor.id).await.unwrap());
        assert!(!svc.exists(EntityKind::Vendor, vendor.id + 1).await.unwrap());
    }
}
