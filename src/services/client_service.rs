use chrono::Utc;
use tracing::{debug, info};

use crate::db::repositories::client_repository::{ClientRepository, ClientRow};
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::client::{
    ClientCalculations, ClientCreateInput, ClientRecord, ClientStatus, ClientUpdateInput,
};
use crate::services::{cost_model, opportunity_ranker, roi_model};

/// CRUD over client engagement records. Every save recomputes the
/// calculations from the current inputs and re-derives the status, so
/// the persisted record is always consistent with the model.
#[derive(Clone)]
pub struct ClientService {
    db: DbPool,
}

impl ClientService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub fn create_client(&self, input: ClientCreateInput) -> AppResult<ClientRecord> {
        let now = Utc::now().to_rfc3339();
        let mut record = ClientRecord {
            id: uuid::Uuid::new_v4().to_string(),
            client_info: input.client_info,
            cost_inputs: input.cost_inputs.unwrap_or_default(),
            consulting_inputs: input.consulting_inputs.unwrap_or_default(),
            calculations: None,
            status: ClientStatus::Draft,
            created_at: now.clone(),
            updated_at: now,
        };

        normalize_client_info(&mut record)?;
        refresh_calculations(&mut record)?;

        self.persist(&record)?;
        info!(target: "app::client", client_id = %record.id, status = record.status.as_str(), "client created");
        Ok(record)
    }

    pub fn update_client(&self, id: &str, update: ClientUpdateInput) -> AppResult<ClientRecord> {
        let mut record = self.get_client(id)?;

        if let Some(client_info) = update.client_info {
            record.client_info = client_info;
        }
        if let Some(cost_inputs) = update.cost_inputs {
            record.cost_inputs = cost_inputs;
        }
        if let Some(consulting_inputs) = update.consulting_inputs {
            record.consulting_inputs = consulting_inputs;
        }
        if let Some(status) = update.status {
            // Draft/completed hand control back to derivation below.
            record.status = status;
        }

        record.updated_at = Utc::now().to_rfc3339();
        normalize_client_info(&mut record)?;
        refresh_calculations(&mut record)?;

        self.persist(&record)?;
        info!(target: "app::client", client_id = %record.id, status = record.status.as_str(), "client updated");
        Ok(record)
    }

    pub fn get_client(&self, id: &str) -> AppResult<ClientRecord> {
        let row = self
            .db
            .with_connection(|conn| ClientRepository::find_by_id(conn, id))?
            .ok_or_else(AppError::not_found)?;
        let record = row.into_record()?;
        debug!(target: "app::client", client_id = %record.id, "client fetched");
        Ok(record)
    }

    pub fn list_clients(&self) -> AppResult<Vec<ClientRecord>> {
        let rows = self
            .db
            .with_connection(|conn| ClientRepository::list_all(conn))?;
        let clients = rows
            .into_iter()
            .map(|row| row.into_record())
            .collect::<AppResult<Vec<_>>>()?;
        debug!(target: "app::client", count = clients.len(), "clients listed");
        Ok(clients)
    }

    pub fn delete_client(&self, id: &str) -> AppResult<()> {
        let deleted = self
            .db
            .with_connection(|conn| ClientRepository::delete(conn, id))?;
        if !deleted {
            return Err(AppError::not_found());
        }
        info!(target: "app::client", client_id = %id, "client deleted");
        Ok(())
    }

    /// Idempotent upsert keyed by client id; last write wins.
    fn persist(&self, record: &ClientRecord) -> AppResult<()> {
        let row = ClientRow::from_record(record)?;
        self.db
            .with_connection(|conn| ClientRepository::upsert(conn, &row))
    }

    pub fn pool(&self) -> &DbPool {
        &self.db
    }
}

fn normalize_client_info(record: &mut ClientRecord) -> AppResult<()> {
    let info = &mut record.client_info;
    info.name = info.name.trim().to_string();
    if info.name.is_empty() {
        return Err(AppError::validation("client name must not be empty"));
    }
    info.company = info.company.trim().to_string();
    info.email = info.email.trim().to_string();
    info.phone = info.phone.trim().to_string();
    info.title = info.title.trim().to_string();
    info.problem_statement = info.problem_statement.trim().to_string();
    Ok(())
}

/// Runs the full model pipeline over the record's inputs and derives
/// the status: completed iff the computed total cost is positive,
/// draft otherwise, unless a manual status (pending/archived) is set.
fn refresh_calculations(record: &mut ClientRecord) -> AppResult<()> {
    let cost = cost_model::compute_costs(&record.cost_inputs)?;
    let roi_scenarios = roi_model::compute_roi(
        cost.total_waste,
        &record.consulting_inputs,
        record.cost_inputs.projects_per_year,
    )?;
    let opportunities =
        opportunity_ranker::rank_opportunities(&cost.waste_breakdown, cost.total_waste);

    if !record.status.is_manual() {
        record.status = if cost.total_cost > 0 {
            ClientStatus::Completed
        } else {
            ClientStatus::Draft
        };
    }

    record.calculations = Some(ClientCalculations {
        cost,
        roi_scenarios,
        opportunities,
    });
    Ok(())
}
