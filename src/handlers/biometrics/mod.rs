pub mod filtered_records;
pub mod ingest_record;
pub mod inspect_collection;
pub mod raw_records;
pub mod recent_records;
