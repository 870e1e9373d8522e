use crate::session::SessionStore;

/// Outcome of the protected-route check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Persisted state not checked yet, render a loading indicator
    Pending,
    Granted,
    /// Redirect to the login page
    Denied,
}

pub fn check_access(store: &SessionStore) -> Access {
    if !store.is_initialized() {
        Access::Pending
    } else if store.is_authenticated() {
        Access::Granted
    } else {
        Access::Denied
    }
}

/// Route a denied visitor asked for, restored after login.
#[derive(Clone, Debug, PartialEq)]
pub struct ReturnTo<R>(Option<R>);

impl<R> Default for ReturnTo<R> {
    fn default() -> Self {
        Self(None)
    }
}

impl<R> ReturnTo<R> {
    pub fn remember(&mut self, route: R) {
        self.0 = Some(route);
    }

    /// Takes the remembered route, leaving nothing behind
    pub fn take(&mut self) -> Option<R> {
        self.0.take()
    }

    /// Forgets the remembered route once the visit it belonged to ended some other way
    pub fn clear(&mut self) {
        self.0 = None;
    }
}

#[cfg(test)]
mod tests {
    use crate::session::{
        guard::{check_access, Access, ReturnTo},
        storage::MemoryStorage,
        SessionStore,
    };

    #[test]
    /// Expect pending before initialization, then denied without a user
    fn pending_until_initialized() {
        let mut store = SessionStore::new(Box::new(MemoryStorage::new()), "auth-storage");

        assert_eq!(check_access(&store), Access::Pending);

        store.initialize();

        assert_eq!(check_access(&store), Access::Denied);
    }

    #[test]
    /// Expect access once a user is logged in
    fn granted_when_authenticated() {
        let mut store = SessionStore::new(Box::new(MemoryStorage::new()), "auth-storage");
        store.initialize();

        store.complete_login("user@example.com", "password123");

        assert_eq!(check_access(&store), Access::Granted);
    }

    #[test]
    /// Expect the remembered route to be handed out once
    fn return_to_is_taken_once() {
        let mut return_to = ReturnTo::default();
        return_to.remember("/rockets/falcon9");

        assert_eq!(return_to.take(), Some("/rockets/falcon9"));
        assert_eq!(return_to.take(), None);
    }

    #[test]
    /// Expect a cleared route not to resurface on a later login
    fn cleared_route_is_not_restored() {
        let mut return_to = ReturnTo::default();
        return_to.remember("/launches/crs20");

        return_to.clear();

        assert_eq!(return_to.take(), None);
    }

    #[test]
    /// Expect only the latest denied route to be remembered
    fn remember_replaces_earlier_route() {
        let mut return_to = ReturnTo::default();
        return_to.remember("/rockets");
        return_to.remember("/launches");

        assert_eq!(return_to.take(), Some("/launches"));
    }
}
