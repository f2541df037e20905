//! Discord presence values.

crate::closed_set! {
    /// Presence shown on the account while the grinder runs.
    #[derive(Default)]
    pub enum OnlineStatus {
        #[default]
        Online => "online",
        DoNotDisturb => "dnd",
        Idle => "idle",
        Invisible => "invisible",
        Offline => "offline",
    }
}
