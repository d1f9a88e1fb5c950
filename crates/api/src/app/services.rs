//! Application services: the per-resource stores behind the handlers.

use depot_items::Item;
use depot_store::RecordStore;
use depot_users::User;

/// Process-lifetime state shared by all handlers.
///
/// Each resource owns its store exclusively; the counters advance
/// independently, so item and user ids both start at "1".
#[derive(Debug)]
pub struct AppServices {
    pub items: RecordStore<Item>,
    pub users: RecordStore<User>,
}

pub fn build_services() -> AppServices {
    AppServices {
        items: RecordStore::new(),
        users: RecordStore::new(),
    }
}
