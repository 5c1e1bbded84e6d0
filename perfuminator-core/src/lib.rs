//! Perfuminator core
//!
//! Platform-agnostic logic for the perfume builder: the scent catalog, the
//! bounded note selection, fragrance-profile aggregation, the screen
//! navigation state machine, and checkout name validation. Front ends own
//! rendering and confirmation dialogs; everything here is synchronous,
//! returns `Result`, and never panics across the boundary.

pub mod blend;
pub mod catalog;
pub mod error;
pub mod order;
pub mod selection;
pub mod session;

// Re-export commonly used types
pub use blend::blend;
pub use catalog::{Catalog, CatalogError, ScentProfile};
pub use error::SessionError;
pub use order::{DraftOrder, FinalOrder, NAME_MAX_CHARS, validate_name};
pub use selection::{MAX_NOTES, Selection};
pub use session::{PaletteChoice, Screen, Session};

/// Trait for abstracting where catalog JSON comes from.
/// Platform-specific implementations should provide this.
pub trait CatalogSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load and validate the scent catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or is malformed.
    /// Callers treat this as fatal: there is no app without a catalog.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;
}

/// Entry point tying a catalog source to new sessions.
pub struct Perfuminator<L>
where
    L: CatalogSource,
{
    source: L,
}

impl<L> Perfuminator<L>
where
    L: CatalogSource,
{
    /// Create an engine over the given catalog source.
    pub const fn new(source: L) -> Self {
        Self { source }
    }

    /// Load the catalog and open a session on the main menu.
    ///
    /// # Errors
    ///
    /// Returns the source's error if the catalog cannot be loaded.
    pub fn open_session(&self) -> Result<Session, L::Error> {
        let catalog = self.source.load_catalog()?;
        log::info!(
            "catalog loaded: {} notes, {} palettes",
            catalog.scent_notes.len(),
            catalog.palettes.len()
        );
        Ok(Session::new(catalog))
    }
}
