/// All entity identifiers (books, shops, customers, salesmen) are INT columns.
pub type DbId = i32;

/// Calendar dates (publication dates, sale dates) carry no time zone.
pub type Date = chrono::NaiveDate;
