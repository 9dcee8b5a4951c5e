/// Invoice primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar dates (`DATE` columns) carry no timezone.
pub type Date = chrono::NaiveDate;
