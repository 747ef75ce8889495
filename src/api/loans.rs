//! Loan management endpoints

use super::resource::resource_endpoints;
use crate::models::{Loan, LoanPayload};

resource_endpoints! {
    resource = Loan,
    payload = LoanPayload,
    service = loans,
    tag = "loans",
    collection_path = "/services/loans/",
    record_path = "/services/loans/{id}",
}
