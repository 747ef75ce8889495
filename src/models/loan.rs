//! Loan (borrow) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::Resource;

/// A media lent to a borrower
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: i64,
    /// User borrowing the media
    pub borrower_id: i64,
    pub media_id: i64,
    pub start_loan_date: Option<NaiveDate>,
    /// Date the media is due back
    pub end_loan_date: Option<NaiveDate>,
}

/// Create or replace loan request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_loan_period"))]
pub struct LoanPayload {
    pub borrower_id: i64,
    pub media_id: i64,
    pub start_loan_date: Option<NaiveDate>,
    pub end_loan_date: Option<NaiveDate>,
}

fn validate_loan_period(loan: &LoanPayload) -> Result<(), ValidationError> {
    match (loan.start_loan_date, loan.end_loan_date) {
        (Some(start), Some(end)) if end < start => {
            let mut error = ValidationError::new("loan_period");
            error.message = Some("End of loan precedes its start".into());
            Err(error)
        }
        _ => Ok(()),
    }
}

impl Resource for Loan {
    type Payload = LoanPayload;
    /// A borrower holds at most one loan per media
    type Key = (i64, i64);

    const NAME: &'static str = "Loan";
    const COLLECTION: &'static str = "loans";

    fn id(&self) -> i64 {
        self.id
    }

    fn key(&self) -> (i64, i64) {
        (self.borrower_id, self.media_id)
    }

    fn payload_key(payload: &LoanPayload) -> (i64, i64) {
        (payload.borrower_id, payload.media_id)
    }

    fn from_payload(id: i64, payload: LoanPayload) -> Self {
        Self {
            id,
            borrower_id: payload.borrower_id,
            media_id: payload.media_id,
            start_loan_date: payload.start_loan_date,
            end_loan_date: payload.end_loan_date,
        }
    }
}
