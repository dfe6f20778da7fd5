use web_sys::window;

const TOKEN_KEY: &str = "signoapp_token";
const USER_NAME_KEY: &str = "signoapp_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save session token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Get session token from localStorage
pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Save the display name shown in the navbar
pub fn save_user_name(name: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(USER_NAME_KEY, name);
    }
}

pub fn get_user_name() -> Option<String> {
    get_local_storage()?.get_item(USER_NAME_KEY).ok()?
}

/// Clear the stored session
pub fn clear() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_NAME_KEY);
    }
}
