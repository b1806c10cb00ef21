//! Domain-level command and query types.
//! These structs are used by services inside the domain layer and are **not**
//! part of the public DTO surface. The io layer maps the DTOs defined in the
//! `shared` crate to these internal types.

pub mod events {
    /// Input for creating a new event. Fields are still raw form strings;
    /// the event service parses and validates them.
    #[derive(Debug, Clone, Default)]
    pub struct CreateEventCommand {
        pub title: String,
        pub date: String,
        pub time: String,
        pub duration_minutes: Option<u32>,
        pub color: Option<String>,
        pub description: Option<String>,
    }

    /// Query for the search dialog.
    #[derive(Debug, Clone, Default)]
    pub struct SearchEventsQuery {
        pub query: String,
    }
}
