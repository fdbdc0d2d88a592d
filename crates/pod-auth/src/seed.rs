//! Demo accounts available at startup.

use pod_core::entities::Account;
use pod_core::enums::Role;
use pod_core::ids::{DEMO_ADMIN_ID, DEMO_LISTENER_ID, DEMO_PODCASTER_ID};

/// Shared secret of every demo account.
pub const DEMO_SECRET: &str = "demo123";

/// The seeded accounts, one per role, secrets included.
///
/// Also used to show the demo credential list on a login screen.
#[must_use]
pub fn demo_accounts() -> Vec<Account> {
    [
        (DEMO_PODCASTER_ID, "Alex Podcaster", "podcaster@demo.com", Role::Podcaster),
        (DEMO_LISTENER_ID, "Sam Listener", "listener@demo.com", Role::Listener),
        (DEMO_ADMIN_ID, "Admin User", "admin@demo.com", Role::Admin),
    ]
    .into_iter()
    .map(|(id, name, email, role)| Account {
        id: id.to_string(),
        display_name: name.to_string(),
        email: email.to_string(),
        secret: DEMO_SECRET.to_string(),
        role,
    })
    .collect()
}
