//! View-Model Module Index
//!
//! Organizes the presentation-facing logic into role-segregated modules.
//! These types own no rendering; they hold the transient remote-data copies
//! a view displays and answer the affordance questions (which buttons to
//! offer) by consulting the permission table and the session identity.
//!
//! Affordance checks here are advisory only: none of them block a network
//! call, and a server rejection is always the final authority.

/// The post list: the default authenticated landing surface, available to
/// every role, with per-post edit/delete affordances.
pub mod posts;

/// The admin dashboard: user roster and elevation-request queue. Reaching it
/// is gated by `RouteGuard::requiring(Role::Admin)`.
pub mod admin;
