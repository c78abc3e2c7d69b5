use contracts::system::auth::SessionUser;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "access_token";
const USER_KEY: &str = "user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the session credential and identity across page reloads.
pub fn save_session(access_token: &str, user: &SessionUser) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, access_token);
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

/// Get the access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Get the persisted user identity from localStorage
pub fn get_user() -> Option<SessionUser> {
    let json = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// Clear the persisted session (logout or 401)
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
