//! Application layer coordinating state, events, and notifications.
//!
//! This module defines the component's logic layer, sitting between the
//! embedding host and the domain/matcher layers. It implements the
//! event-driven state machine that powers the interactive search box.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Host Input → Events → Event Handler → State Mutations → Notifications → Host
//!                                            │
//!                                       match pass (matcher::rank)
//! ```
//!
//! # Modules
//!
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`notifications`]: Observable events emitted to the host
//! - [`state`]: Central component state container
//! - [`subscription`]: Scoped key-event subscription guard
//!
//! # Example
//!
//! ```
//! use fuzzbox::app::{handle_event, Event, SearchBox};
//!
//! let mut component = SearchBox::new(vec!["apple".to_string()]);
//! let _keys = component.subscribe_keys();
//! handle_event(&mut component, &Event::Input("ap".to_string()))?;
//! handle_event(&mut component, &Event::CursorDown)?;
//! handle_event(&mut component, &Event::Submit)?;
//! assert_eq!(component.selection(), Some("apple"));
//! # Ok::<(), fuzzbox::FuzzboxError>(())
//! ```

pub mod handler;
pub mod notifications;
pub mod state;
pub mod subscription;

pub use handler::{handle_event, Event};
pub use notifications::Notification;
pub use state::SearchBox;
pub use subscription::KeySubscription;
