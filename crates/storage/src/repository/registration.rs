use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Registration, payment_status};

/// Repository for registration database operations
pub struct RegistrationRepository<'a> {
    pool: &'a PgPool,
}

/// Aggregates for the attendance dashboard.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct AttendanceCounts {
    pub total: i64,
    pub completed: i64,
    pub checked_in: i64,
}

/// Aggregates for the platform commission dashboard.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommissionTotals {
    pub total_commission: Decimal,
    pub total_net: Decimal,
    pub total_collected: Decimal,
    pub completed_count: i64,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, reg: &Registration) -> Result<Registration> {
        let created = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations (
                id, first_name, last_name, national_id, competition_number,
                phone, email, categories, league, coupon_code,
                base_price, discount, final_price, commission, net_to_organizer,
                payment_status, qr_payload, check_in, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17, $18, $19)
            RETURNING *
            "#,
        )
        .bind(reg.id)
        .bind(&reg.first_name)
        .bind(&reg.last_name)
        .bind(&reg.national_id)
        .bind(&reg.competition_number)
        .bind(&reg.phone)
        .bind(&reg.email)
        .bind(&reg.categories)
        .bind(&reg.league)
        .bind(&reg.coupon_code)
        .bind(reg.base_price)
        .bind(reg.discount)
        .bind(reg.final_price)
        .bind(reg.commission)
        .bind(reg.net_to_organizer)
        .bind(&reg.payment_status)
        .bind(&reg.qr_payload)
        .bind(reg.check_in)
        .bind(reg.created_at)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Registration> {
        let registration =
            sqlx::query_as::<_, Registration>("SELECT * FROM registrations WHERE id = $1")
                .bind(id)
                .fetch_optional(self.pool)
                .await?
                .ok_or(StorageError::NotFound)?;

        Ok(registration)
    }

    pub async fn list(&self) -> Result<Vec<Registration>> {
        let registrations = sqlx::query_as::<_, Registration>(
            "SELECT * FROM registrations ORDER BY created_at DESC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(registrations)
    }

    pub async fn set_preference_id(&self, id: Uuid, preference_id: &str) -> Result<()> {
        let result = sqlx::query("UPDATE registrations SET preference_id = $2 WHERE id = $1")
            .bind(id)
            .bind(preference_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Transition `pending -> completed`. The WHERE clause makes the
    /// read-modify-write atomic at the row level; `None` means the row was
    /// not pending (already completed, or missing).
    pub async fn complete(&self, id: Uuid, payment_id: Option<&str>) -> Result<Option<Registration>> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            UPDATE registrations
            SET payment_status = $2,
                payment_id = COALESCE($3, payment_id)
            WHERE id = $1 AND payment_status = $4
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payment_status::COMPLETED)
        .bind(payment_id)
        .bind(payment_status::PENDING)
        .fetch_optional(self.pool)
        .await?;

        Ok(registration)
    }

    /// Stamp the check-in. `None` means the preconditions (paid, not yet
    /// checked in) did not hold; nothing was mutated.
    pub async fn check_in(&self, id: Uuid) -> Result<Option<Registration>> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            UPDATE registrations
            SET check_in = TRUE,
                check_in_time = now()
            WHERE id = $1 AND payment_status = $2 AND check_in = FALSE
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payment_status::COMPLETED)
        .fetch_optional(self.pool)
        .await?;

        Ok(registration)
    }

    pub async fn attendance_counts(&self) -> Result<AttendanceCounts> {
        let counts = sqlx::query_as::<_, AttendanceCounts>(
            r#"
            SELECT COUNT(*) AS total,
                   COUNT(*) FILTER (WHERE payment_status = $1) AS completed,
                   COUNT(*) FILTER (WHERE check_in) AS checked_in
            FROM registrations
            "#,
        )
        .bind(payment_status::COMPLETED)
        .fetch_one(self.pool)
        .await?;

        Ok(counts)
    }

    pub async fn commission_totals(&self) -> Result<CommissionTotals> {
        let totals = sqlx::query_as::<_, CommissionTotals>(
            r#"
            SELECT COALESCE(SUM(commission), 0) AS total_commission,
                   COALESCE(SUM(net_to_organizer), 0) AS total_net,
                   COALESCE(SUM(final_price), 0) AS total_collected,
                   COUNT(*) AS completed_count
            FROM registrations
            WHERE payment_status = $1
            "#,
        )
        .bind(payment_status::COMPLETED)
        .fetch_one(self.pool)
        .await?;

        Ok(totals)
    }

    pub async fn delete_many(&self, ids: &[Uuid]) -> Result<u64> {
        let result = sqlx::query("DELETE FROM registrations WHERE id = ANY($1)")
            .bind(ids)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
