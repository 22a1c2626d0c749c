//! # In-memory workspace backend
//!
//! The collaborator the server functions in [`crate`] delegate to: one
//! [`Workspace`] holds every account and a per-user [`Space`] of resource
//! collections behind a single `RwLock`. Ids are allocated from a per-space
//! counter, so they are unique within each user's collections and never
//! client-generated.
//!
//! Business rules live here and surface as [`Rejection`] values — the
//! explicit failure variant of every operation. Nothing in this module
//! panics on user input, and nothing here is a persistence layer: state
//! lives for the process lifetime only.

use std::collections::HashMap;
use std::sync::OnceLock;

use chrono::Utc;
use tokio::sync::RwLock;

use store::{
    AlbumRecord, ExpenseRecord, FileRecord, NoteRecord, PhotoRecord, Rejection, RemoteResult,
    TaskRecord, TaskStatus, UserInfo, MAX_UPLOAD_BYTES, STORAGE_QUOTA_BYTES,
};

/// A registered account. Server-side only; [`Account::to_info`] projects
/// the client-safe subset.
#[derive(Clone, Debug)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: i64,
}

impl Account {
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.clone(),
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }
}

/// An uploaded file: listed metadata plus the bytes returned on download.
#[derive(Clone, Debug)]
struct StoredFile {
    meta: FileRecord,
    bytes: Vec<u8>,
}

/// One user's resource collections.
#[derive(Default)]
struct Space {
    next_id: u64,
    notes: Vec<NoteRecord>,
    tasks: Vec<TaskRecord>,
    expenses: Vec<ExpenseRecord>,
    files: Vec<StoredFile>,
    photos: Vec<PhotoRecord>,
    albums: Vec<AlbumRecord>,
}

impl Space {
    fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
struct State {
    accounts: Vec<Account>,
    spaces: HashMap<String, Space>,
}

/// The process-wide workspace backend.
#[derive(Default)]
pub struct Workspace {
    state: RwLock<State>,
}

static WORKSPACE: OnceLock<Workspace> = OnceLock::new();

/// The lazily initialized singleton used by the server functions.
pub fn workspace() -> &'static Workspace {
    WORKSPACE.get_or_init(Workspace::default)
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

fn reject(msg: &str) -> Rejection {
    Rejection::new(msg)
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    // ----- accounts -----

    /// Register a new account. The password is already hashed by the caller.
    pub async fn register(
        &self,
        username: String,
        first_name: String,
        last_name: String,
        email: String,
        password_hash: String,
    ) -> RemoteResult<UserInfo> {
        let username = username.trim().to_string();
        let email = email.trim().to_lowercase();
        if username.is_empty() {
            return Err(reject("Username is required"));
        }
        if email.is_empty() || !email.contains('@') {
            return Err(reject("Invalid email address"));
        }

        let mut state = self.state.write().await;
        if state
            .accounts
            .iter()
            .any(|a| a.username.eq_ignore_ascii_case(&username))
        {
            return Err(reject("Username is already taken"));
        }
        if state.accounts.iter().any(|a| a.email == email) {
            return Err(reject("An account with this email already exists"));
        }

        let account = Account {
            id: uuid::Uuid::new_v4().to_string(),
            username,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email,
            password_hash,
            created_at: now_ms(),
        };
        let info = account.to_info();
        state.spaces.insert(account.id.clone(), Space::default());
        state.accounts.push(account);
        Ok(info)
    }

    /// Find an account by username or email for the login path.
    pub async fn login_lookup(&self, username_or_email: &str) -> Option<Account> {
        let needle = username_or_email.trim();
        let state = self.state.read().await;
        state
            .accounts
            .iter()
            .find(|a| {
                a.username.eq_ignore_ascii_case(needle)
                    || a.email.eq_ignore_ascii_case(needle)
            })
            .cloned()
    }

    pub async fn account_info(&self, id: &str) -> Option<UserInfo> {
        let state = self.state.read().await;
        state.accounts.iter().find(|a| a.id == id).map(Account::to_info)
    }

    pub async fn password_hash(&self, id: &str) -> Option<String> {
        let state = self.state.read().await;
        state
            .accounts
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.password_hash.clone())
    }

    pub async fn set_password_hash(&self, id: &str, hash: String) -> RemoteResult<()> {
        let mut state = self.state.write().await;
        let account = state
            .accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| reject("Account not found"))?;
        account.password_hash = hash;
        Ok(())
    }

    pub async fn update_profile(
        &self,
        id: &str,
        first_name: String,
        last_name: String,
        email: String,
    ) -> RemoteResult<UserInfo> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(reject("Invalid email address"));
        }
        let mut state = self.state.write().await;
        if state
            .accounts
            .iter()
            .any(|a| a.id != id && a.email == email)
        {
            return Err(reject("An account with this email already exists"));
        }
        let account = state
            .accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| reject("Account not found"))?;
        account.first_name = first_name.trim().to_string();
        account.last_name = last_name.trim().to_string();
        account.email = email;
        Ok(account.to_info())
    }

    // ----- notes -----

    pub async fn list_notes(&self, uid: &str) -> Vec<NoteRecord> {
        let state = self.state.read().await;
        state
            .spaces
            .get(uid)
            .map(|s| s.notes.clone())
            .unwrap_or_default()
    }

    pub async fn create_note(
        &self,
        uid: &str,
        title: String,
        content: String,
    ) -> RemoteResult<u64> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(reject("Note title and content cannot be empty"));
        }
        let mut state = self.state.write().await;
        let space = state.spaces.entry(uid.to_string()).or_default();
        let id = space.alloc_id();
        let now = now_ms();
        space.notes.push(NoteRecord {
            id,
            title,
            content,
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    pub async fn update_note(
        &self,
        uid: &str,
        id: u64,
        title: String,
        content: String,
    ) -> RemoteResult<()> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(reject("Note title and content cannot be empty"));
        }
        let mut state = self.state.write().await;
        let space = state.spaces.entry(uid.to_string()).or_default();
        let note = space
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| reject("Note not found"))?;
        note.title = title;
        note.content = content;
        note.updated_at = now_ms();
        Ok(())
    }

    pub async fn delete_note(&self, uid: &str, id: u64) -> RemoteResult<()> {
        let mut state = self.state.write().await;
        let space = state.spaces.entry(uid.to_string()).or_default();
        let before = space.notes.len();
        space.notes.retain(|n| n.id != id);
        if space.notes.len() == before {
            return Err(reject("Note not found"));
        }
        Ok(())
    }

    // ----- tasks -----

    pub async fn list_tasks(&self, uid: &str) -> Vec<TaskRecord> {
        let state = self.state.read().await;
        state
            .spaces
            .get(uid)
            .map(|s| s.tasks.clone())
            .unwrap_or_default()
    }

    pub async fn create_task(
        &self,
        uid: &str,
        title: String,
        description: String,
        due_date: Option<i64>,
    ) -> RemoteResult<u64> {
        if title.trim().is_empty() {
            return Err(reject("Task title cannot be empty"));
        }
        let mut state = self.state.write().await;
        let space = state.spaces.entry(uid.to_string()).or_default();
        let id = space.alloc_id();
        let now = now_ms();
        space.tasks.push(TaskRecord {
            id,
            title,
            description,
            status: TaskStatus::Todo,
            due_date,
            created_at: now,
            updated_at: now,
            owner: uid.to_string(),
        });
        Ok(id)
    }

    /// Full-record replacement, the update contract for every resource.
    pub async fn update_task(
        &self,
        uid: &str,
        id: u64,
        title: String,
        description: String,
        status: TaskStatus,
        due_date: Option<i64>,
    ) -> RemoteResult<()> {
        if title.trim().is_empty() {
            return Err(reject("Task title cannot be empty"));
        }
        let mut state = self.state.write().await;
        let space = state.spaces.entry(uid.to_string()).or_default();
        let task = space
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| reject("Task not found"))?;
        task.title = title;
        task.description = description;
        task.status = status;
        task.due_date = due_date;
        task.updated_at = now_ms();
        Ok(())
    }

    pub async fn delete_task(&self, uid: &str, id: u64) -> RemoteResult<()> {
        let mut state = self.state.write().await;
        let space = state.spaces.entry(uid.to_string()).or_default();
        let before = space.tasks.len();
        space.tasks.retain(|t| t.id != id);
        if space.tasks.len() == before {
            return Err(reject("Task not found"));
        }
        Ok(())
    }

    // ----- expenses -----

    pub async fn list_expenses(&self, uid: &str) -> Vec<ExpenseRecord> {
        let state = self.state.read().await;
        state
            .spaces
            .get(uid)
            .map(|s| s.expenses.clone())
            .unwrap_or_default()
    }

    pub async fn create_expense(
        &self,
        uid: &str,
        amount: f64,
        category: String,
        description: String,
        date: i64,
    ) -> RemoteResult<u64> {
        validate_expense(amount, &category)?;
        let mut state = self.state.write().await;
        let space = state.spaces.entry(uid.to_string()).or_default();
        let id = space.alloc_id();
        space.expenses.push(ExpenseRecord {
            id,
            amount,
            category: category.trim().to_string(),
            description,
            date,
        });
        Ok(id)
    }

    pub async fn update_expense(
        &self,
        uid: &str,
        id: u64,
        amount: f64,
        category: String,
        description: String,
        date: i64,
    ) -> RemoteResult<()> {
        validate_expense(amount, &category)?;
        let mut state = self.state.write().await;
        let space = state.spaces.entry(uid.to_string()).or_default();
        let expense = space
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| reject("Expense not found"))?;
        expense.amount = amount;
        expense.category = category.trim().to_string();
        expense.description = description;
        expense.date = date;
        Ok(())
    }

    pub async fn delete_expense(&self, uid: &str, id: u64) -> RemoteResult<()> {
        let mut state = self.state.write().await;
        let space = state.spaces.entry(uid.to_string()).or_default();
        let before = space.expenses.len();
        space.expenses.retain(|e| e.id != id);
        if space.expenses.len() == before {
            return Err(reject("Expense not found"));
        }
        Ok(())
    }

    /// Import expenses from delimited-text lines; returns the number of
    /// records created. A malformed row rejects the whole import.
    pub async fn import_expenses(&self, uid: &str, lines: Vec<String>) -> RemoteResult<u64> {
        let drafts =
            store::parse_expenses(&lines).map_err(|e| Rejection::new(e.to_string()))?;
        let mut state = self.state.write().await;
        let space = state.spaces.entry(uid.to_string()).or_default();
        let count = drafts.len() as u64;
        for draft in drafts {
            let id = space.alloc_id();
            space.expenses.push(ExpenseRecord {
                id,
                amount: draft.amount,
                category: draft.category,
                description: draft.description,
                date: draft.date,
            });
        }
        Ok(count)
    }

    pub async fn export_expenses(&self, uid: &str) -> RemoteResult<String> {
        let expenses = self.list_expenses(uid).await;
        store::export_expenses(&expenses).map_err(|e| Rejection::new(e.to_string()))
    }

    // ----- files -----

    pub async fn list_files(&self, uid: &str) -> Vec<FileRecord> {
        let state = self.state.read().await;
        state
            .spaces
            .get(uid)
            .map(|s| s.files.iter().map(|f| f.meta.clone()).collect())
            .unwrap_or_default()
    }

    pub async fn upload_file(
        &self,
        uid: &str,
        name: String,
        content_type: String,
        data: Vec<u8>,
    ) -> RemoteResult<u64> {
        if name.trim().is_empty() {
            return Err(reject("File name is required"));
        }
        let size = data.len() as u64;
        if size > MAX_UPLOAD_BYTES {
            return Err(reject(
                "File size exceeds the maximum allowed size of 10 MB",
            ));
        }
        let mut state = self.state.write().await;
        let space = state.spaces.entry(uid.to_string()).or_default();
        let used: u64 = space.files.iter().map(|f| f.meta.size).sum();
        if used + size > STORAGE_QUOTA_BYTES {
            return Err(reject(
                "Uploading this file would exceed your storage quota of 100 MB",
            ));
        }
        let id = space.alloc_id();
        space.files.push(StoredFile {
            meta: FileRecord {
                id,
                name,
                content_type,
                size,
                created_at: now_ms(),
            },
            bytes: data,
        });
        Ok(id)
    }

    pub async fn download_file(&self, uid: &str, id: u64) -> RemoteResult<Vec<u8>> {
        let state = self.state.read().await;
        state
            .spaces
            .get(uid)
            .and_then(|s| s.files.iter().find(|f| f.meta.id == id))
            .map(|f| f.bytes.clone())
            .ok_or_else(|| reject("File not found"))
    }

    pub async fn delete_file(&self, uid: &str, id: u64) -> RemoteResult<()> {
        let mut state = self.state.write().await;
        let space = state.spaces.entry(uid.to_string()).or_default();
        let before = space.files.len();
        space.files.retain(|f| f.meta.id != id);
        if space.files.len() == before {
            return Err(reject("File not found"));
        }
        Ok(())
    }

    pub async fn storage_usage(&self, uid: &str) -> u64 {
        let state = self.state.read().await;
        state
            .spaces
            .get(uid)
            .map(|s| s.files.iter().map(|f| f.meta.size).sum())
            .unwrap_or(0)
    }

    // ----- photos & albums -----

    /// All photos, or only those in `album` when given.
    pub async fn list_photos(&self, uid: &str, album: Option<u64>) -> Vec<PhotoRecord> {
        let state = self.state.read().await;
        let Some(space) = state.spaces.get(uid) else {
            return Vec::new();
        };
        match album {
            None => space.photos.clone(),
            Some(album_id) => space
                .photos
                .iter()
                .filter(|p| p.album_id == Some(album_id))
                .cloned()
                .collect(),
        }
    }

    pub async fn upload_photo(
        &self,
        uid: &str,
        name: String,
        content_type: String,
        data: Vec<u8>,
        album_id: Option<u64>,
    ) -> RemoteResult<u64> {
        if !content_type.starts_with("image/") {
            return Err(reject("Only image uploads are allowed"));
        }
        let size = data.len() as u64;
        let mut state = self.state.write().await;
        let space = state.spaces.entry(uid.to_string()).or_default();
        if let Some(album_id) = album_id {
            if !space.albums.iter().any(|a| a.id == album_id) {
                return Err(reject("Album not found"));
            }
        }
        let used: u64 = space.photos.iter().map(|p| p.size).sum();
        if used + size > STORAGE_QUOTA_BYTES {
            return Err(reject(
                "Storage limit exceeded. Please delete some photos before uploading more",
            ));
        }
        let id = space.alloc_id();
        space.photos.push(PhotoRecord {
            id,
            name,
            content_type,
            data,
            created_at: now_ms(),
            size,
            album_id,
        });
        Ok(id)
    }

    pub async fn delete_photo(&self, uid: &str, id: u64) -> RemoteResult<()> {
        let mut state = self.state.write().await;
        let space = state.spaces.entry(uid.to_string()).or_default();
        let before = space.photos.len();
        space.photos.retain(|p| p.id != id);
        if space.photos.len() == before {
            return Err(reject("Photo not found"));
        }
        Ok(())
    }

    pub async fn photo_storage_usage(&self, uid: &str) -> u64 {
        let state = self.state.read().await;
        state
            .spaces
            .get(uid)
            .map(|s| s.photos.iter().map(|p| p.size).sum())
            .unwrap_or(0)
    }

    pub async fn list_albums(&self, uid: &str) -> Vec<AlbumRecord> {
        let state = self.state.read().await;
        state
            .spaces
            .get(uid)
            .map(|s| s.albums.clone())
            .unwrap_or_default()
    }

    pub async fn create_album(&self, uid: &str, name: String) -> RemoteResult<u64> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(reject("Album name is required"));
        }
        let mut state = self.state.write().await;
        let space = state.spaces.entry(uid.to_string()).or_default();
        if space.albums.iter().any(|a| a.name == name) {
            return Err(reject("An album with this name already exists"));
        }
        let id = space.alloc_id();
        space.albums.push(AlbumRecord {
            id,
            name,
            created_at: now_ms(),
        });
        Ok(id)
    }

    /// Delete an album; its photos fall back to the main gallery.
    pub async fn delete_album(&self, uid: &str, id: u64) -> RemoteResult<()> {
        let mut state = self.state.write().await;
        let space = state.spaces.entry(uid.to_string()).or_default();
        let before = space.albums.len();
        space.albums.retain(|a| a.id != id);
        if space.albums.len() == before {
            return Err(reject("Album not found"));
        }
        for photo in space.photos.iter_mut() {
            if photo.album_id == Some(id) {
                photo.album_id = None;
            }
        }
        Ok(())
    }
}

fn validate_expense(amount: f64, category: &str) -> RemoteResult<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(reject("Amount must be a non-negative number"));
    }
    if category.trim().is_empty() {
        return Err(reject("Category is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const UID: &str = "user-1";

    #[tokio::test]
    async fn note_crud() {
        let ws = Workspace::new();
        assert!(ws.list_notes(UID).await.is_empty());

        let id = ws
            .create_note(UID, "Groceries".into(), "milk, eggs".into())
            .await
            .expect("create");
        let notes = ws.list_notes(UID).await;
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, id);
        assert_eq!(notes[0].created_at, notes[0].updated_at);

        ws.update_note(UID, id, "Groceries".into(), "milk, eggs, bread".into())
            .await
            .expect("update");
        let notes = ws.list_notes(UID).await;
        assert_eq!(notes[0].content, "milk, eggs, bread");

        ws.delete_note(UID, id).await.expect("delete");
        assert!(ws.list_notes(UID).await.is_empty());
    }

    #[tokio::test]
    async fn unknown_ids_are_rejected_not_panicked() {
        let ws = Workspace::new();
        assert!(ws.update_note(UID, 42, "t".into(), "c".into()).await.is_err());
        assert!(ws.delete_note(UID, 42).await.is_err());
        assert!(ws.delete_task(UID, 42).await.is_err());
        assert!(ws.download_file(UID, 42).await.is_err());
    }

    #[tokio::test]
    async fn empty_note_fields_are_rejected() {
        let ws = Workspace::new();
        let err = ws
            .create_note(UID, "  ".into(), "body".into())
            .await
            .expect_err("rejection");
        assert_eq!(err.0, "Note title and content cannot be empty");
    }

    #[tokio::test]
    async fn task_update_replaces_the_whole_record() {
        let ws = Workspace::new();
        let id = ws
            .create_task(UID, "Ship it".into(), "desc".into(), Some(1_000))
            .await
            .expect("create");
        ws.update_task(
            UID,
            id,
            "Ship it".into(),
            "done now".into(),
            TaskStatus::Done,
            None,
        )
        .await
        .expect("update");
        let task = &ws.list_tasks(UID).await[0];
        assert_eq!(task.status, TaskStatus::Done);
        assert_eq!(task.due_date, None);
        assert_eq!(task.owner, UID);
        assert!(task.updated_at >= task.created_at);
    }

    #[tokio::test]
    async fn ids_are_unique_per_space() {
        let ws = Workspace::new();
        let a = ws.create_note(UID, "a".into(), "a".into()).await.expect("a");
        let b = ws
            .create_task(UID, "b".into(), String::new(), None)
            .await
            .expect("b");
        let c = ws
            .create_album(UID, "c".into())
            .await
            .expect("c");
        assert!(a != b && b != c && a != c);
    }

    #[tokio::test]
    async fn spaces_are_isolated_per_user() {
        let ws = Workspace::new();
        ws.create_note("alice", "hers".into(), "x".into())
            .await
            .expect("create");
        assert!(ws.list_notes("bob").await.is_empty());
    }

    #[tokio::test]
    async fn expense_import_counts_and_export_round_trips() {
        let ws = Workspace::new();
        let lines: Vec<String> = [
            "amount,category,description,date",
            "12.50,Food,groceries,2026-01-05",
            "7.00,Transport,bus pass,2026-01-07",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let count = ws.import_expenses(UID, lines).await.expect("import");
        assert_eq!(count, 2);

        let text = ws.export_expenses(UID).await.expect("export");
        let reimported = store::parse_expenses(
            &text.lines().map(|l| l.to_string()).collect::<Vec<_>>(),
        )
        .expect("parse");
        assert_eq!(reimported.len(), 2);
        assert_eq!(reimported[0].category, "Food");
        assert_eq!(reimported[1].amount, 7.0);
    }

    #[tokio::test]
    async fn malformed_import_rejects_everything() {
        let ws = Workspace::new();
        let lines = vec!["12.50,Food,ok,2026-01-05".to_string(), "nope".to_string()];
        assert!(ws.import_expenses(UID, lines).await.is_err());
        assert!(ws.list_expenses(UID).await.is_empty());
    }

    #[tokio::test]
    async fn file_upload_enforces_size_and_quota() {
        let ws = Workspace::new();
        let too_big = vec![0u8; (MAX_UPLOAD_BYTES + 1) as usize];
        assert!(ws
            .upload_file(UID, "big.bin".into(), "application/octet-stream".into(), too_big)
            .await
            .is_err());

        let id = ws
            .upload_file(UID, "a.txt".into(), "text/plain".into(), vec![1, 2, 3])
            .await
            .expect("upload");
        assert_eq!(ws.storage_usage(UID).await, 3);
        assert_eq!(ws.download_file(UID, id).await.expect("download"), vec![1, 2, 3]);

        ws.delete_file(UID, id).await.expect("delete");
        assert_eq!(ws.storage_usage(UID).await, 0);
    }

    #[tokio::test]
    async fn photo_uploads_must_be_images() {
        let ws = Workspace::new();
        assert!(ws
            .upload_photo(UID, "x.pdf".into(), "application/pdf".into(), vec![0], None)
            .await
            .is_err());
        assert!(ws
            .upload_photo(UID, "x.png".into(), "image/png".into(), vec![0], None)
            .await
            .is_ok());
        assert_eq!(ws.photo_storage_usage(UID).await, 1);
    }

    #[tokio::test]
    async fn deleting_an_album_moves_photos_to_the_main_gallery() {
        let ws = Workspace::new();
        let album = ws.create_album(UID, "Trip".into()).await.expect("album");
        ws.upload_photo(UID, "p.png".into(), "image/png".into(), vec![0], Some(album))
            .await
            .expect("upload");
        assert_eq!(ws.list_photos(UID, Some(album)).await.len(), 1);

        ws.delete_album(UID, album).await.expect("delete");
        assert!(ws.list_albums(UID).await.is_empty());
        let photos = ws.list_photos(UID, None).await;
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].album_id, None);
    }

    #[tokio::test]
    async fn uploading_into_a_missing_album_is_rejected() {
        let ws = Workspace::new();
        assert!(ws
            .upload_photo(UID, "p.png".into(), "image/png".into(), vec![0], Some(99))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn registration_rules() {
        let ws = Workspace::new();
        let info = ws
            .register(
                "maya".into(),
                "Maya".into(),
                "Lin".into(),
                "maya@example.com".into(),
                "hash".into(),
            )
            .await
            .expect("register");
        assert_eq!(info.username, "maya");

        // Duplicate username, case-insensitive.
        assert!(ws
            .register(
                "MAYA".into(),
                String::new(),
                String::new(),
                "other@example.com".into(),
                "hash".into(),
            )
            .await
            .is_err());
        // Duplicate email.
        assert!(ws
            .register(
                "other".into(),
                String::new(),
                String::new(),
                "maya@example.com".into(),
                "hash".into(),
            )
            .await
            .is_err());
        // Lookup works by username or email.
        assert!(ws.login_lookup("maya").await.is_some());
        assert!(ws.login_lookup("MAYA@example.com").await.is_some());
        assert!(ws.login_lookup("nobody").await.is_none());
    }

    #[tokio::test]
    async fn profile_update_and_password_change() {
        let ws = Workspace::new();
        let info = ws
            .register(
                "sam".into(),
                "Sam".into(),
                "Reed".into(),
                "sam@example.com".into(),
                "hash-1".into(),
            )
            .await
            .expect("register");

        let updated = ws
            .update_profile(&info.id, "Samuel".into(), "Reed".into(), "sam@example.com".into())
            .await
            .expect("update");
        assert_eq!(updated.first_name, "Samuel");

        ws.set_password_hash(&info.id, "hash-2".into())
            .await
            .expect("set hash");
        assert_eq!(ws.password_hash(&info.id).await.as_deref(), Some("hash-2"));
    }
}
