mod register;

use std::{cell::RefCell, rc::Rc, time::Duration};

use crate::session::{storage::MemoryStorage, SessionStore};

const KEY: &str = "auth-storage";

fn store(storage: &MemoryStorage) -> SessionStore {
    SessionStore::new(Box::new(storage.clone()), KEY)
}

/// Initialized store with the given auth delay, shared the way pages share it
fn shared_store(storage: &MemoryStorage, auth_delay: Duration) -> Rc<RefCell<SessionStore>> {
    let mut store = store(storage).with_auth_delay(auth_delay);
    store.initialize();

    Rc::new(RefCell::new(store))
}
