use serde::{Deserialize, Serialize};

/// Identity key of a job (`workAssignmentId`).
pub type JobId = String;

/// A posted work assignment as returned by the public listing service.
///
/// Field names follow the service's camelCase JSON. Unknown fields are ignored
/// on decode; optional fields are omitted on encode so a stored record
/// round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub work_assignment_id: JobId,
    pub wa_readable_id: String,
    pub work_assignment_name: String,
    pub hourly_wage: Money,
    pub salary: Money,
    pub job_location: JobLocation,
    /// Job start, epoch milliseconds.
    pub period_from: i64,
    /// Listing publish time, epoch milliseconds.
    pub date_published: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_link: Option<String>,
}

impl Job {
    pub fn id(&self) -> &str {
        &self.work_assignment_id
    }

    /// Identity comparison. The only equality used for favorites and list dedup.
    pub fn same_id(&self, other: &Job) -> bool {
        self.work_assignment_id == other.work_assignment_id
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.work_assignment_id == id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_address: Option<String>,
    pub city: String,
    pub zip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_id: Option<i64>,
}
