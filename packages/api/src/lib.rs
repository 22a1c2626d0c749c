//! # API crate — shared fullstack server functions for Workden
//!
//! This crate is the collaborator boundary of the Workden fullstack
//! architecture. It defines every Dioxus server function the web frontend
//! calls, along with the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Argon2 password hashing and the session key constant |
//! | [`backend`] | `server` | In-memory per-user workspace the server functions delegate to |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function,
//! annotated with `#[get(...)]` or `#[post(...)]` and compiled twice: once
//! with full server logic (behind `#[cfg(feature = "server")]`) and once as
//! a thin client stub that forwards the call over HTTP.
//!
//! - **Account**: `register`, `login`, `current_user`, `logout`,
//!   `update_profile`, `change_password`
//! - **Notes**: `list_notes`, `create_note`, `update_note`, `delete_note`
//! - **Tasks**: `list_tasks`, `create_task`, `update_task`, `delete_task`
//! - **Expenses**: `list_expenses`, `create_expense`, `update_expense`,
//!   `delete_expense`, `import_expenses`, `export_expenses_text`
//! - **Files**: `list_files`, `upload_file`, `download_file`, `delete_file`,
//!   `storage_usage`
//! - **Photos & albums**: `list_photos`, `upload_photo`, `delete_photo`,
//!   `photo_storage_usage`, `list_albums`, `create_album`, `delete_album`
//!
//! ## Outcome convention
//!
//! Functions return `Result<RemoteResult<T>, ServerFnError>`: the outer
//! `ServerFnError` is transport (unreachable, timeout, serialization), the
//! inner [`Rejection`] is the collaborator's explicit business failure.
//! Expected rejections are never raised as `ServerFnError`.

use dioxus::prelude::*;

#[cfg(feature = "server")]
pub mod auth;
#[cfg(feature = "server")]
pub mod backend;

pub use store::{
    AlbumRecord, ExpenseRecord, FileRecord, NoteRecord, PhotoRecord, Rejection, RemoteResult,
    TaskRecord, TaskStatus, UserInfo,
};

/// Read the signed-in account id from the session.
#[cfg(feature = "server")]
async fn session_user_id(
    session: &tower_sessions::Session,
) -> Result<Option<String>, ServerFnError> {
    session
        .get::<String>(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Resolve the session to an account id, or the standard rejection.
#[cfg(feature = "server")]
async fn require_user(
    session: &tower_sessions::Session,
) -> Result<RemoteResult<String>, ServerFnError> {
    Ok(match session_user_id(session).await? {
        Some(id) => Ok(id),
        None => Err(Rejection::new("Not signed in")),
    })
}

// ----- account -----

/// Register a new account and sign it in.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    username: String,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
) -> Result<RemoteResult<UserInfo>, ServerFnError> {
    if password.len() < 8 {
        return Ok(Err(Rejection::new(
            "Password must be at least 8 characters",
        )));
    }
    let hash = auth::hash_password(&password).map_err(ServerFnError::new)?;
    let outcome = backend::workspace()
        .register(username, first_name, last_name, email, hash)
        .await;
    if let Ok(ref info) = outcome {
        session
            .insert(auth::SESSION_USER_ID_KEY, info.id.clone())
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
    }
    Ok(outcome)
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    username: String,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
) -> Result<RemoteResult<UserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sign in with username or email.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(
    username_or_email: String,
    password: String,
) -> Result<RemoteResult<UserInfo>, ServerFnError> {
    let Some(account) = backend::workspace().login_lookup(&username_or_email).await else {
        return Ok(Err(Rejection::new("Invalid username or password")));
    };
    let valid =
        auth::verify_password(&password, &account.password_hash).map_err(ServerFnError::new)?;
    if !valid {
        return Ok(Err(Rejection::new("Invalid username or password")));
    }
    session
        .insert(auth::SESSION_USER_ID_KEY, account.id.clone())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(Ok(account.to_info()))
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(
    username_or_email: String,
    password: String,
) -> Result<RemoteResult<UserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Get the current authenticated account from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn current_user() -> Result<Option<UserInfo>, ServerFnError> {
    let Some(user_id) = session_user_id(&session).await? else {
        return Ok(None);
    };
    Ok(backend::workspace().account_info(&user_id).await)
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Log out the current account by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Update profile fields of the signed-in account.
#[cfg(feature = "server")]
#[post("/api/account/profile", session: tower_sessions::Session)]
pub async fn update_profile(
    first_name: String,
    last_name: String,
    email: String,
) -> Result<RemoteResult<UserInfo>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(backend::workspace()
        .update_profile(&uid, first_name, last_name, email)
        .await)
}

#[cfg(not(feature = "server"))]
#[post("/api/account/profile")]
pub async fn update_profile(
    first_name: String,
    last_name: String,
    email: String,
) -> Result<RemoteResult<UserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Change the password of the signed-in account.
#[cfg(feature = "server")]
#[post("/api/account/password", session: tower_sessions::Session)]
pub async fn change_password(
    current_password: String,
    new_password: String,
) -> Result<RemoteResult<()>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    if new_password.len() < 8 {
        return Ok(Err(Rejection::new(
            "Password must be at least 8 characters",
        )));
    }
    let Some(stored) = backend::workspace().password_hash(&uid).await else {
        return Ok(Err(Rejection::new("Account not found")));
    };
    let valid =
        auth::verify_password(&current_password, &stored).map_err(ServerFnError::new)?;
    if !valid {
        return Ok(Err(Rejection::new("Current password is incorrect")));
    }
    let hash = auth::hash_password(&new_password).map_err(ServerFnError::new)?;
    Ok(backend::workspace().set_password_hash(&uid, hash).await)
}

#[cfg(not(feature = "server"))]
#[post("/api/account/password")]
pub async fn change_password(
    current_password: String,
    new_password: String,
) -> Result<RemoteResult<()>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ----- notes -----

#[cfg(feature = "server")]
#[get("/api/notes", session: tower_sessions::Session)]
pub async fn list_notes() -> Result<RemoteResult<Vec<NoteRecord>>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(Ok(backend::workspace().list_notes(&uid).await))
}

#[cfg(not(feature = "server"))]
#[get("/api/notes")]
pub async fn list_notes() -> Result<RemoteResult<Vec<NoteRecord>>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/notes/create", session: tower_sessions::Session)]
pub async fn create_note(
    title: String,
    content: String,
) -> Result<RemoteResult<u64>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(backend::workspace().create_note(&uid, title, content).await)
}

#[cfg(not(feature = "server"))]
#[post("/api/notes/create")]
pub async fn create_note(
    title: String,
    content: String,
) -> Result<RemoteResult<u64>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/notes/update", session: tower_sessions::Session)]
pub async fn update_note(
    id: u64,
    title: String,
    content: String,
) -> Result<RemoteResult<()>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(backend::workspace()
        .update_note(&uid, id, title, content)
        .await)
}

#[cfg(not(feature = "server"))]
#[post("/api/notes/update")]
pub async fn update_note(
    id: u64,
    title: String,
    content: String,
) -> Result<RemoteResult<()>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/notes/delete", session: tower_sessions::Session)]
pub async fn delete_note(id: u64) -> Result<RemoteResult<()>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(backend::workspace().delete_note(&uid, id).await)
}

#[cfg(not(feature = "server"))]
#[post("/api/notes/delete")]
pub async fn delete_note(id: u64) -> Result<RemoteResult<()>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ----- tasks -----

#[cfg(feature = "server")]
#[get("/api/tasks", session: tower_sessions::Session)]
pub async fn list_tasks() -> Result<RemoteResult<Vec<TaskRecord>>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(Ok(backend::workspace().list_tasks(&uid).await))
}

#[cfg(not(feature = "server"))]
#[get("/api/tasks")]
pub async fn list_tasks() -> Result<RemoteResult<Vec<TaskRecord>>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/tasks/create", session: tower_sessions::Session)]
pub async fn create_task(
    title: String,
    description: String,
    due_date: Option<i64>,
) -> Result<RemoteResult<u64>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(backend::workspace()
        .create_task(&uid, title, description, due_date)
        .await)
}

#[cfg(not(feature = "server"))]
#[post("/api/tasks/create")]
pub async fn create_task(
    title: String,
    description: String,
    due_date: Option<i64>,
) -> Result<RemoteResult<u64>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/tasks/update", session: tower_sessions::Session)]
pub async fn update_task(
    id: u64,
    title: String,
    description: String,
    status: TaskStatus,
    due_date: Option<i64>,
) -> Result<RemoteResult<()>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(backend::workspace()
        .update_task(&uid, id, title, description, status, due_date)
        .await)
}

#[cfg(not(feature = "server"))]
#[post("/api/tasks/update")]
pub async fn update_task(
    id: u64,
    title: String,
    description: String,
    status: TaskStatus,
    due_date: Option<i64>,
) -> Result<RemoteResult<()>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/tasks/delete", session: tower_sessions::Session)]
pub async fn delete_task(id: u64) -> Result<RemoteResult<()>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(backend::workspace().delete_task(&uid, id).await)
}

#[cfg(not(feature = "server"))]
#[post("/api/tasks/delete")]
pub async fn delete_task(id: u64) -> Result<RemoteResult<()>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ----- expenses -----

#[cfg(feature = "server")]
#[get("/api/expenses", session: tower_sessions::Session)]
pub async fn list_expenses() -> Result<RemoteResult<Vec<ExpenseRecord>>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(Ok(backend::workspace().list_expenses(&uid).await))
}

#[cfg(not(feature = "server"))]
#[get("/api/expenses")]
pub async fn list_expenses() -> Result<RemoteResult<Vec<ExpenseRecord>>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/expenses/create", session: tower_sessions::Session)]
pub async fn create_expense(
    amount: f64,
    category: String,
    description: String,
    date: i64,
) -> Result<RemoteResult<u64>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(backend::workspace()
        .create_expense(&uid, amount, category, description, date)
        .await)
}

#[cfg(not(feature = "server"))]
#[post("/api/expenses/create")]
pub async fn create_expense(
    amount: f64,
    category: String,
    description: String,
    date: i64,
) -> Result<RemoteResult<u64>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/expenses/update", session: tower_sessions::Session)]
pub async fn update_expense(
    id: u64,
    amount: f64,
    category: String,
    description: String,
    date: i64,
) -> Result<RemoteResult<()>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(backend::workspace()
        .update_expense(&uid, id, amount, category, description, date)
        .await)
}

#[cfg(not(feature = "server"))]
#[post("/api/expenses/update")]
pub async fn update_expense(
    id: u64,
    amount: f64,
    category: String,
    description: String,
    date: i64,
) -> Result<RemoteResult<()>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/expenses/delete", session: tower_sessions::Session)]
pub async fn delete_expense(id: u64) -> Result<RemoteResult<()>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(backend::workspace().delete_expense(&uid, id).await)
}

#[cfg(not(feature = "server"))]
#[post("/api/expenses/delete")]
pub async fn delete_expense(id: u64) -> Result<RemoteResult<()>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Import expenses from delimited-text lines. Returns the count created.
#[cfg(feature = "server")]
#[post("/api/expenses/import", session: tower_sessions::Session)]
pub async fn import_expenses(lines: Vec<String>) -> Result<RemoteResult<u64>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(backend::workspace().import_expenses(&uid, lines).await)
}

#[cfg(not(feature = "server"))]
#[post("/api/expenses/import")]
pub async fn import_expenses(lines: Vec<String>) -> Result<RemoteResult<u64>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Export all expenses as delimited text.
#[cfg(feature = "server")]
#[get("/api/expenses/export", session: tower_sessions::Session)]
pub async fn export_expenses_text() -> Result<RemoteResult<String>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(backend::workspace().export_expenses(&uid).await)
}

#[cfg(not(feature = "server"))]
#[get("/api/expenses/export")]
pub async fn export_expenses_text() -> Result<RemoteResult<String>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ----- files -----

#[cfg(feature = "server")]
#[get("/api/files", session: tower_sessions::Session)]
pub async fn list_files() -> Result<RemoteResult<Vec<FileRecord>>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(Ok(backend::workspace().list_files(&uid).await))
}

#[cfg(not(feature = "server"))]
#[get("/api/files")]
pub async fn list_files() -> Result<RemoteResult<Vec<FileRecord>>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/files/upload", session: tower_sessions::Session)]
pub async fn upload_file(
    name: String,
    content_type: String,
    data: Vec<u8>,
) -> Result<RemoteResult<u64>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(backend::workspace()
        .upload_file(&uid, name, content_type, data)
        .await)
}

#[cfg(not(feature = "server"))]
#[post("/api/files/upload")]
pub async fn upload_file(
    name: String,
    content_type: String,
    data: Vec<u8>,
) -> Result<RemoteResult<u64>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/files/download/:id", session: tower_sessions::Session)]
pub async fn download_file(id: u64) -> Result<RemoteResult<Vec<u8>>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(backend::workspace().download_file(&uid, id).await)
}

#[cfg(not(feature = "server"))]
#[get("/api/files/download/:id")]
pub async fn download_file(id: u64) -> Result<RemoteResult<Vec<u8>>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/files/delete", session: tower_sessions::Session)]
pub async fn delete_file(id: u64) -> Result<RemoteResult<()>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(backend::workspace().delete_file(&uid, id).await)
}

#[cfg(not(feature = "server"))]
#[post("/api/files/delete")]
pub async fn delete_file(id: u64) -> Result<RemoteResult<()>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Bytes used by uploaded files.
#[cfg(feature = "server")]
#[get("/api/files/usage", session: tower_sessions::Session)]
pub async fn storage_usage() -> Result<RemoteResult<u64>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(Ok(backend::workspace().storage_usage(&uid).await))
}

#[cfg(not(feature = "server"))]
#[get("/api/files/usage")]
pub async fn storage_usage() -> Result<RemoteResult<u64>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ----- photos & albums -----

/// All photos, or only those in `album` when given.
#[cfg(feature = "server")]
#[post("/api/photos/list", session: tower_sessions::Session)]
pub async fn list_photos(
    album: Option<u64>,
) -> Result<RemoteResult<Vec<PhotoRecord>>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(Ok(backend::workspace().list_photos(&uid, album).await))
}

#[cfg(not(feature = "server"))]
#[post("/api/photos/list")]
pub async fn list_photos(
    album: Option<u64>,
) -> Result<RemoteResult<Vec<PhotoRecord>>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/photos/upload", session: tower_sessions::Session)]
pub async fn upload_photo(
    name: String,
    content_type: String,
    data: Vec<u8>,
    album: Option<u64>,
) -> Result<RemoteResult<u64>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(backend::workspace()
        .upload_photo(&uid, name, content_type, data, album)
        .await)
}

#[cfg(not(feature = "server"))]
#[post("/api/photos/upload")]
pub async fn upload_photo(
    name: String,
    content_type: String,
    data: Vec<u8>,
    album: Option<u64>,
) -> Result<RemoteResult<u64>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/photos/delete", session: tower_sessions::Session)]
pub async fn delete_photo(id: u64) -> Result<RemoteResult<()>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(backend::workspace().delete_photo(&uid, id).await)
}

#[cfg(not(feature = "server"))]
#[post("/api/photos/delete")]
pub async fn delete_photo(id: u64) -> Result<RemoteResult<()>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Bytes used by uploaded photos.
#[cfg(feature = "server")]
#[get("/api/photos/usage", session: tower_sessions::Session)]
pub async fn photo_storage_usage() -> Result<RemoteResult<u64>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(Ok(backend::workspace().photo_storage_usage(&uid).await))
}

#[cfg(not(feature = "server"))]
#[get("/api/photos/usage")]
pub async fn photo_storage_usage() -> Result<RemoteResult<u64>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/albums", session: tower_sessions::Session)]
pub async fn list_albums() -> Result<RemoteResult<Vec<AlbumRecord>>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(Ok(backend::workspace().list_albums(&uid).await))
}

#[cfg(not(feature = "server"))]
#[get("/api/albums")]
pub async fn list_albums() -> Result<RemoteResult<Vec<AlbumRecord>>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/albums/create", session: tower_sessions::Session)]
pub async fn create_album(name: String) -> Result<RemoteResult<u64>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(backend::workspace().create_album(&uid, name).await)
}

#[cfg(not(feature = "server"))]
#[post("/api/albums/create")]
pub async fn create_album(name: String) -> Result<RemoteResult<u64>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete an album; its photos move back to the main gallery.
#[cfg(feature = "server")]
#[post("/api/albums/delete", session: tower_sessions::Session)]
pub async fn delete_album(id: u64) -> Result<RemoteResult<()>, ServerFnError> {
    let uid = match require_user(&session).await? {
        Ok(uid) => uid,
        Err(rej) => return Ok(Err(rej)),
    };
    Ok(backend::workspace().delete_album(&uid, id).await)
}

#[cfg(not(feature = "server"))]
#[post("/api/albums/delete")]
pub async fn delete_album(id: u64) -> Result<RemoteResult<()>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
