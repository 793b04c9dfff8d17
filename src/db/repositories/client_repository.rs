use std::convert::TryFrom;

use rusqlite::{named_params, Connection, OptionalExtension, Row};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::client::{ClientCalculations, ClientInfo, ClientRecord, ClientStatus};
use crate::models::cost::{ConsultingInputs, CostInputs};

const BASE_SELECT: &str = r#"
    SELECT
        id,
        name,
        company,
        email,
        phone,
        title,
        problem_statement,
        cost_inputs,
        consulting_inputs,
        calculations,
        status,
        created_at,
        updated_at
    FROM clients
"#;

#[derive(Debug, Clone)]
pub struct ClientRow {
    pub id: String,
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub title: Option<String>,
    pub problem_statement: Option<String>,
    pub cost_inputs: String,
    pub consulting_inputs: String,
    pub calculations: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl ClientRow {
    pub fn from_record(record: &ClientRecord) -> AppResult<Self> {
        Ok(Self {
            id: record.id.clone(),
            name: record.client_info.name.clone(),
            company: optional_column(&record.client_info.company),
            email: optional_column(&record.client_info.email),
            phone: optional_column(&record.client_info.phone),
            title: optional_column(&record.client_info.title),
            problem_statement: optional_column(&record.client_info.problem_statement),
            cost_inputs: serialize_struct(&record.cost_inputs)?,
            consulting_inputs: serialize_struct(&record.consulting_inputs)?,
            calculations: record
                .calculations
                .as_ref()
                .map(serialize_struct)
                .transpose()?,
            status: record.status.as_str().to_string(),
            created_at: record.created_at.clone(),
            updated_at: record.updated_at.clone(),
        })
    }

    pub fn into_record(self) -> AppResult<ClientRecord> {
        let status = ClientStatus::parse(&self.status).ok_or_else(|| {
            AppError::database(format!("unknown client status '{}'", self.status))
        })?;

        Ok(ClientRecord {
            id: self.id,
            client_info: ClientInfo {
                name: self.name,
                company: self.company.unwrap_or_default(),
                email: self.email.unwrap_or_default(),
                phone: self.phone.unwrap_or_default(),
                title: self.title.unwrap_or_default(),
                problem_statement: self.problem_statement.unwrap_or_default(),
            },
            cost_inputs: deserialize_struct::<CostInputs>(&self.cost_inputs)?,
            consulting_inputs: deserialize_struct::<ConsultingInputs>(&self.consulting_inputs)?,
            calculations: self
                .calculations
                .as_deref()
                .map(deserialize_struct::<ClientCalculations>)
                .transpose()?,
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl TryFrom<&Row<'_>> for ClientRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(ClientRow {
            id: row.get("id")?,
            name: row.get("name")?,
            company: row.get("company")?,
            email: row.get("email")?,
            phone: row.get("phone")?,
            title: row.get("title")?,
            problem_statement: row.get("problem_statement")?,
            cost_inputs: row.get("cost_inputs")?,
            consulting_inputs: row.get("consulting_inputs")?,
            calculations: row.get("calculations")?,
            status: row.get("status")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

pub struct ClientRepository;

impl ClientRepository {
    /// Idempotent upsert keyed by id; the whole row is replaced, so the
    /// last save wins.
    pub fn upsert(conn: &Connection, row: &ClientRow) -> AppResult<()> {
        conn.execute(
            r#"
                INSERT INTO clients (
                    id,
                    name,
                    company,
                    email,
                    phone,
                    title,
                    problem_statement,
                    cost_inputs,
                    consulting_inputs,
                    calculations,
                    status,
                    created_at,
                    updated_at
                ) VALUES (
                    :id,
                    :name,
                    :company,
                    :email,
                    :phone,
                    :title,
                    :problem_statement,
                    :cost_inputs,
                    :consulting_inputs,
                    :calculations,
                    :status,
                    :created_at,
                    :updated_at
                )
                ON CONFLICT(id) DO UPDATE SET
                    name = excluded.name,
                    company = excluded.company,
                    email = excluded.email,
                    phone = excluded.phone,
                    title = excluded.title,
                    problem_statement = excluded.problem_statement,
                    cost_inputs = excluded.cost_inputs,
                    consulting_inputs = excluded.consulting_inputs,
                    calculations = excluded.calculations,
                    status = excluded.status,
                    updated_at = excluded.updated_at
            "#,
            named_params! {
                ":id": &row.id,
                ":name": &row.name,
                ":company": &row.company,
                ":email": &row.email,
                ":phone": &row.phone,
                ":title": &row.title,
                ":problem_statement": &row.problem_statement,
                ":cost_inputs": &row.cost_inputs,
                ":consulting_inputs": &row.consulting_inputs,
                ":calculations": &row.calculations,
                ":status": &row.status,
                ":created_at": &row.created_at,
                ":updated_at": &row.updated_at,
            },
        )?;
        Ok(())
    }

    pub fn find_by_id(conn: &Connection, id: &str) -> AppResult<Option<ClientRow>> {
        let sql = format!("{BASE_SELECT} WHERE id = :id");
        let mut stmt = conn.prepare(&sql)?;
        let row = stmt
            .query_row(named_params! { ":id": id }, |row| ClientRow::try_from(row))
            .optional()?;
        Ok(row)
    }

    pub fn list_all(conn: &Connection) -> AppResult<Vec<ClientRow>> {
        let sql = format!("{BASE_SELECT} ORDER BY updated_at DESC, id ASC");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| ClientRow::try_from(row))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn delete(conn: &Connection, id: &str) -> AppResult<bool> {
        let affected = conn.execute(
            "DELETE FROM clients WHERE id = :id",
            named_params! { ":id": id },
        )?;
        Ok(affected > 0)
    }

    pub fn count_by_status(conn: &Connection, status: &str) -> AppResult<i64> {
        let count = conn.query_row(
            "SELECT COUNT(*) FROM clients WHERE status = :status",
            named_params! { ":status": status },
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

fn optional_column(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn serialize_struct<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string(value)?)
}

fn deserialize_struct<T: DeserializeOwned>(raw: &str) -> AppResult<T> {
    Ok(serde_json::from_str(raw)?)
}
