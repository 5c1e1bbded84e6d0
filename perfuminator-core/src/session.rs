//! The screen-navigation state machine and the presentation boundary.
//!
//! A [`Session`] owns everything a front end needs between events: the
//! loaded catalog, the active screen, the active palette, the in-progress
//! selection, and the checkout snapshots. Every operation is synchronous,
//! returns a `Result`, and leaves state untouched on failure.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::blend::blend;
use crate::catalog::{Catalog, ScentProfile};
use crate::error::SessionError;
use crate::order::{DraftOrder, FinalOrder};
use crate::selection::Selection;

/// Which screen the user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    MainMenu,
    PaletteSelect,
    Picking,
    Checkout,
}

impl Screen {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MainMenu => "main menu",
            Self::PaletteSelect => "palette select",
            Self::Picking => "picking",
            Self::Checkout => "checkout",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main menu" => Ok(Self::MainMenu),
            "palette select" => Ok(Self::PaletteSelect),
            "picking" => Ok(Self::Picking),
            "checkout" => Ok(Self::Checkout),
            _ => Err(()),
        }
    }
}

/// Where the picking screen's notes come from.
///
/// Free reign exposes the whole catalog; a named palette exposes its curated
/// subset. The choice also decides where "back" lands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaletteChoice {
    #[default]
    FreeReign,
    Named(String),
}

impl PaletteChoice {
    /// Display label for the active palette.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::FreeReign => "free reign",
            Self::Named(name) => name,
        }
    }
}

/// One user's trip through the screens, from menu to named perfume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    catalog: Catalog,
    screen: Screen,
    palette: PaletteChoice,
    selection: Selection,
    draft: Option<DraftOrder>,
    finalized: Option<FinalOrder>,
}

impl Session {
    /// Start a fresh session on the main menu.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            screen: Screen::MainMenu,
            palette: PaletteChoice::FreeReign,
            selection: Selection::new(),
            draft: None,
            finalized: None,
        }
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub const fn palette(&self) -> &PaletteChoice {
        &self.palette
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The completed order, once `finalize_name` has succeeded.
    #[must_use]
    pub const fn final_order(&self) -> Option<&FinalOrder> {
        self.finalized.as_ref()
    }

    /// The frozen checkout candidate, once checkout has been requested.
    #[must_use]
    pub const fn draft_order(&self) -> Option<&DraftOrder> {
        self.draft.as_ref()
    }

    /// Preset palette names, catalog order. Available from any screen.
    #[must_use]
    pub fn list_palettes(&self) -> Vec<&str> {
        self.catalog.palette_names()
    }

    fn require(&self, operation: &'static str, screen: Screen) -> Result<(), SessionError> {
        if self.screen == screen {
            Ok(())
        } else {
            Err(SessionError::WrongScreen {
                operation,
                screen: self.screen,
            })
        }
    }

    /// Note names offered by the active palette, in palette order.
    fn active_notes(&self) -> Vec<&str> {
        match &self.palette {
            PaletteChoice::FreeReign => self.catalog.note_names(),
            PaletteChoice::Named(name) => self
                .catalog
                .palette(name)
                .map(|notes| notes.iter().map(String::as_str).collect())
                .unwrap_or_default(),
        }
    }

    /// `(name, profile)` pairs of the active palette for the picking screen.
    ///
    /// # Errors
    ///
    /// `WrongScreen` unless picking.
    pub fn list_notes(&self) -> Result<Vec<(&str, &ScentProfile)>, SessionError> {
        self.require("list notes", Screen::Picking)?;
        Ok(self
            .active_notes()
            .into_iter()
            .filter_map(|name| self.catalog.note(name).map(|profile| (name, profile)))
            .collect())
    }

    /// Main menu: start picking over the entire catalog.
    ///
    /// # Errors
    ///
    /// `WrongScreen` unless on the main menu.
    pub fn choose_free_reign(&mut self) -> Result<(), SessionError> {
        self.require("free reign", Screen::MainMenu)?;
        self.palette = PaletteChoice::FreeReign;
        self.selection.clear();
        self.screen = Screen::Picking;
        log::debug!("picking started with free reign over the full catalog");
        Ok(())
    }

    /// Main menu: browse the preset palettes.
    ///
    /// # Errors
    ///
    /// `WrongScreen` unless on the main menu.
    pub fn browse_palettes(&mut self) -> Result<(), SessionError> {
        self.require("preset palettes", Screen::MainMenu)?;
        self.screen = Screen::PaletteSelect;
        Ok(())
    }

    /// Palette select: start picking from a named palette.
    ///
    /// # Errors
    ///
    /// `WrongScreen` unless on palette select; `UnknownPalette` (screen
    /// unchanged) if the name is not in the catalog.
    pub fn choose_palette(&mut self, name: &str) -> Result<(), SessionError> {
        self.require("choose palette", Screen::PaletteSelect)?;
        if self.catalog.palette(name).is_none() {
            return Err(SessionError::UnknownPalette {
                name: name.to_string(),
            });
        }
        self.palette = PaletteChoice::Named(name.to_string());
        self.selection.clear();
        self.screen = Screen::Picking;
        log::debug!("picking started with palette '{name}'");
        Ok(())
    }

    /// Picking: add a note to the selection.
    ///
    /// # Errors
    ///
    /// `WrongScreen` unless picking; `CapacityExceeded` at three notes;
    /// `InvalidNote` for a name outside the active palette or already
    /// picked.
    pub fn select(&mut self, name: &str) -> Result<(), SessionError> {
        self.require("select", Screen::Picking)?;
        if self.selection.is_full() {
            return Err(SessionError::CapacityExceeded);
        }
        if !self.active_notes().contains(&name) {
            return Err(SessionError::InvalidNote {
                name: name.to_string(),
            });
        }
        self.selection.add(name)
    }

    /// Picking: drop all picks. The front end confirms first.
    ///
    /// # Errors
    ///
    /// `WrongScreen` unless picking.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.require("reset", Screen::Picking)?;
        self.selection.clear();
        Ok(())
    }

    /// Picking: the picked names in pick order.
    ///
    /// # Errors
    ///
    /// `WrongScreen` unless picking.
    pub fn current_selection(&self) -> Result<&[String], SessionError> {
        self.require("current selection", Screen::Picking)?;
        Ok(self.selection.notes())
    }

    /// Picking: totals over the current selection, recomputed fresh.
    ///
    /// # Errors
    ///
    /// `WrongScreen` unless picking.
    pub fn current_totals(&self) -> Result<ScentProfile, SessionError> {
        self.require("current totals", Screen::Picking)?;
        Ok(blend(self.selection.notes(), &self.catalog))
    }

    /// Picking: move to checkout, freezing the selection and its totals.
    ///
    /// The front end asks its "are you sure" question before calling; this
    /// call performs the transition.
    ///
    /// # Errors
    ///
    /// `WrongScreen` unless picking; `EmptySelection` (no draft created,
    /// screen unchanged) when nothing is picked.
    pub fn request_checkout(&mut self) -> Result<&DraftOrder, SessionError> {
        self.require("checkout", Screen::Picking)?;
        if self.selection.is_empty() {
            return Err(SessionError::EmptySelection);
        }
        let draft = DraftOrder {
            notes: self.selection.notes().to_vec(),
            totals: blend(self.selection.notes(), &self.catalog),
        };
        log::debug!("checkout requested with {} notes", draft.notes.len());
        self.screen = Screen::Checkout;
        Ok(self.draft.insert(draft))
    }

    /// Checkout: validate and attach the perfume name.
    ///
    /// Succeeding again replaces the finished order; the user can rename
    /// until they leave the screen.
    ///
    /// # Errors
    ///
    /// `WrongScreen` unless on checkout; otherwise the name-validation
    /// errors, leaving the draft intact.
    pub fn finalize_name(&mut self, raw: &str) -> Result<&FinalOrder, SessionError> {
        self.require("finalize name", Screen::Checkout)?;
        let draft = self.draft.as_ref().ok_or(SessionError::WrongScreen {
            operation: "finalize name",
            screen: self.screen,
        })?;
        let order = draft.finalize(raw)?;
        log::info!("perfume finalized: '{}'", order.name);
        Ok(self.finalized.insert(order))
    }

    /// Step back one screen, discarding in-progress work.
    ///
    /// From picking this lands on the main menu (free reign) or palette
    /// select (named palette) and clears the selection. From checkout it
    /// abandons the draft and any finished order and restarts at the main
    /// menu. The front end confirms with the user before calling.
    ///
    /// # Errors
    ///
    /// `WrongScreen` on the main menu, which has nowhere to go back to.
    pub fn go_back(&mut self) -> Result<(), SessionError> {
        match self.screen {
            Screen::MainMenu => Err(SessionError::WrongScreen {
                operation: "back",
                screen: self.screen,
            }),
            Screen::PaletteSelect => {
                self.screen = Screen::MainMenu;
                Ok(())
            }
            Screen::Picking => {
                self.selection.clear();
                self.screen = match self.palette {
                    PaletteChoice::FreeReign => Screen::MainMenu,
                    PaletteChoice::Named(_) => Screen::PaletteSelect,
                };
                Ok(())
            }
            Screen::Checkout => {
                self.draft = None;
                self.finalized = None;
                self.selection.clear();
                self.screen = Screen::MainMenu;
                Ok(())
            }
        }
    }
}
