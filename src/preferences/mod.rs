//! Preferences module - per-user settings such as reporting currency.

mod preferences_model;
mod preferences_repository;
mod preferences_service;
mod preferences_traits;

pub use preferences_model::{PreferencesUpdate, UserPreferences, UserPreferencesDB};
pub use preferences_repository::PreferencesRepository;
pub use preferences_service::PreferencesService;
pub use preferences_traits::PreferencesRepositoryTrait;
