//! Loans table mapping

use super::postgres::{PgQueryAs, PgResource};
use crate::models::{Loan, LoanPayload};

impl PgResource for Loan {
    const TABLE: &'static str = "loans";
    const COLUMNS: &'static [&'static str] =
        &["borrower_id", "media_id", "start_loan_date", "end_loan_date"];
    const KEY_FILTER: &'static str = "borrower_id = $1 AND media_id = $2";

    fn bind_payload<'q>(query: PgQueryAs<'q, Self>, payload: &'q LoanPayload) -> PgQueryAs<'q, Self> {
        query
            .bind(payload.borrower_id)
            .bind(payload.media_id)
            .bind(payload.start_loan_date)
            .bind(payload.end_loan_date)
    }

    fn bind_key<'q>(query: PgQueryAs<'q, Self>, key: &'q (i64, i64)) -> PgQueryAs<'q, Self> {
        let (borrower_id, media_id) = *key;
        query.bind(borrower_id).bind(media_id)
    }
}
