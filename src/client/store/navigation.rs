use spacex_explorer::session::guard::ReturnTo;

use crate::client::router::Route;

/// State carried between pages alongside a navigation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    /// Protected route a logged out visitor asked for
    pub return_to: ReturnTo<Route>,
    /// Rocket the launch list opens scoped to, consumed by the launch list on mount
    pub launch_rocket_scope: Option<String>,
}
