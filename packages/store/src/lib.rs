pub mod aggregate;
pub mod dates;
pub mod delimited;
pub mod derive;
pub mod form;
pub mod models;
pub mod page;
pub mod remote;
pub mod resource;

pub use aggregate::{sum_by, totals_by, StorageUsage, MAX_UPLOAD_BYTES, STORAGE_QUOTA_BYTES};
pub use delimited::{export_expenses, parse_expenses, CsvError, ExpenseDraft};
pub use derive::{derive, CategoryFilter, Criteria, DateRange, SortOrder, ViewRecord};
pub use form::FormState;
pub use models::{
    AlbumRecord, ExpenseRecord, FileRecord, NoteRecord, PhotoRecord, TaskRecord, TaskStatus,
    UserInfo,
};
pub use page::{paginate, total_pages, Page};
pub use remote::{Rejection, RemoteResult};
pub use resource::ResourceStore;
