//! # Repository Module
//!
//! Database repository implementations for Atelier.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Catalog source / command                                              │
//! │       │                                                                 │
//! │       │  db.artworks().list()                                          │
//! │       ▼                                                                 │
//! │  ArtworkRepository                  PreferenceRepository               │
//! │  ├── list()                         ├── get(key)                       │
//! │  ├── get_by_id(id)                  ├── set(key, value)                │
//! │  ├── insert(artwork, position)      └── remove(key)                    │
//! │  ├── replace_all(artworks)                                             │
//! │  └── count()                                                           │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod artwork;
pub mod preference;
