mod export;

pub use export::CSV_HEADER;
pub use export::ExportManager;
