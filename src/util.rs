// localStorage helpers shared by config and the score form

pub fn storage_get(key: &str) -> Option<String> {
    let store = web_sys::window()?.local_storage().ok()??;
    store.get_item(key).ok().flatten()
}

pub fn storage_set(key: &str, value: &str) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if store.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for {key}");
            }
        }
    }
}
