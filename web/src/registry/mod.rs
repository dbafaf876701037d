//! Place list, selection, search filter and the add/edit form, plus the
//! transitions the page drives from sidebar, marker and form events.
//!
//! Records are told apart by a [`PlaceId`] handed out when they enter the
//! registry. Selection and the edit target both refer to it, never to a name
//! or a filtered position.

pub mod draft;
pub mod persistence;

use std::fmt;

use leptos::logging::log;
use shared_types::{seed_places, LatLong, Place};
use thiserror::Error;

pub use draft::{FormError, FormField, PlaceDraft};
pub use persistence::PersistError;

use crate::{
    config::MapConfig,
    store::{KeyValueStore, StoreError, UnavailableStore},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaceId(u64);

impl PlaceId {
    /// DOM id of the sidebar card.
    pub fn card_dom_id(self) -> String {
        format!("place-card-{}", self.0)
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceEntry {
    pub id: PlaceId,
    /// Bumped on every edit of this record.
    pub revision: u64,
    pub place: Place,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Adding,
    Editing(PlaceId),
}

impl FormMode {
    pub fn is_editing(self) -> bool {
        matches!(self, FormMode::Editing(_))
    }

    pub fn title(self) -> &'static str {
        match self {
            FormMode::Adding => "Add New Place",
            FormMode::Editing(_) => "Edit Place",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::Adding => "Add Place",
            FormMode::Editing(_) => "Save Changes",
        }
    }
}

/// Side effects the page performs after a selection.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    /// Smooth-scroll the sidebar card into view.
    ScrollIntoView(PlaceId),
    /// Animated pan/zoom to `position`.
    FlyTo { position: LatLong, zoom: f64 },
}

/// One row of the filtered view. Rows only change when the filter or a
/// record changes, never on selection, so they double as render keys for
/// sidebar cards and map markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleRow {
    pub id: PlaceId,
    /// Position in the filtered list.
    pub index: usize,
    pub revision: u64,
}

impl VisibleRow {
    /// 1-based label drawn on the marker.
    pub fn marker_number(&self) -> usize {
        self.index + 1
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("change applied but not saved: {0}")]
    Persist(#[from] PersistError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    entries: Vec<PlaceEntry>,
    next_id: u64,
    selected: Option<PlaceId>,
    search_query: String,
    draft: PlaceDraft,
    mode: FormMode,
    storage_key: String,
    fly_to_zoom: f64,
}

impl Registry {
    pub fn from_places(places: Vec<Place>, config: &MapConfig) -> Self {
        let mut registry = Self {
            entries: Vec::with_capacity(places.len()),
            next_id: 0,
            selected: None,
            search_query: String::new(),
            draft: PlaceDraft::default(),
            mode: FormMode::Adding,
            storage_key: config.storage_key.clone(),
            fly_to_zoom: config.fly_to_zoom,
        };
        for place in places {
            registry.push(place);
        }
        registry
    }

    pub fn with_seed(config: &MapConfig) -> Self {
        Self::from_places(seed_places(), config)
    }

    /// Saved places from `store`, else the seed list. Never fails.
    pub fn load(store: &impl KeyValueStore, config: &MapConfig) -> Self {
        Self::from_places(persistence::load_places(store, &config.storage_key), config)
    }

    /// Swaps in the saved list from `store`. Ids keep counting up, so no
    /// record of the new list shares an id with one of the old.
    pub fn reload(&mut self, store: &impl KeyValueStore) {
        let places = persistence::load_places(store, &self.storage_key);
        self.entries.clear();
        self.selected = None;
        self.reset_form();
        for place in places {
            self.push(place);
        }
    }

    fn push(&mut self, place: Place) -> PlaceId {
        let id = PlaceId(self.next_id);
        self.next_id += 1;
        self.entries.push(PlaceEntry {
            id,
            revision: 0,
            place,
        });
        id
    }

    pub fn entries(&self) -> &[PlaceEntry] {
        &self.entries
    }

    pub fn places(&self) -> impl Iterator<Item = &Place> {
        self.entries.iter().map(|e| &e.place)
    }

    pub fn get(&self, id: PlaceId) -> Option<&Place> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.place)
    }

    pub fn selected(&self) -> Option<PlaceId> {
        self.selected
    }

    pub fn is_selected(&self, id: PlaceId) -> bool {
        self.selected == Some(id)
    }

    pub fn selected_place(&self) -> Option<&Place> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn draft(&self) -> &PlaceDraft {
        &self.draft
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Entries whose name contains the query, ignoring case, in list order.
    pub fn filtered(&self) -> Vec<&PlaceEntry> {
        let query = self.search_query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.place.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        self.filtered()
            .into_iter()
            .enumerate()
            .map(|(index, entry)| VisibleRow {
                id: entry.id,
                index,
                revision: entry.revision,
            })
            .collect()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.retain_visible_selection();
    }

    /// Drops the selection once it is filtered out of view.
    fn retain_visible_selection(&mut self) {
        if let Some(selected) = self.selected {
            if !self.filtered().iter().any(|e| e.id == selected) {
                self.selected = None;
            }
        }
    }

    fn entry_at(&self, index: usize) -> Option<(PlaceId, LatLong)> {
        self.filtered()
            .get(index)
            .map(|e| (e.id, e.place.position))
    }

    /// Sidebar click: select, scroll the card into view and fly the map there.
    pub fn select_from_sidebar(&mut self, index: usize) -> Vec<ViewCommand> {
        let Some((id, position)) = self.entry_at(index) else {
            return Vec::new();
        };
        self.selected = Some(id);
        vec![
            ViewCommand::ScrollIntoView(id),
            ViewCommand::FlyTo {
                position,
                zoom: self.fly_to_zoom,
            },
        ]
    }

    /// Marker click: the map is already looking at the marker, so no fly-to.
    pub fn select_from_marker(&mut self, index: usize) -> Vec<ViewCommand> {
        let Some((id, _)) = self.entry_at(index) else {
            return Vec::new();
        };
        self.selected = Some(id);
        vec![ViewCommand::ScrollIntoView(id)]
    }

    /// Loads the record at filtered `index` into the form.
    pub fn begin_edit(&mut self, index: usize) -> Option<PlaceId> {
        let (id, draft) = self
            .filtered()
            .get(index)
            .map(|e| (e.id, PlaceDraft::from_place(&e.place)))?;
        self.draft = draft;
        self.mode = FormMode::Editing(id);
        Some(id)
    }

    pub fn cancel_edit(&mut self) {
        self.reset_form();
    }

    pub fn update_draft(&mut self, field: FormField, value: String) {
        self.draft.set(field, value);
    }

    fn reset_form(&mut self) {
        self.draft = PlaceDraft::default();
        self.mode = FormMode::Adding;
    }

    /// Adds or edits from the draft, resets the form and saves the whole list.
    ///
    /// Invalid coordinates leave everything untouched. A failed save keeps the
    /// in-memory change and reports [`RegistryError::Persist`].
    pub fn submit(&mut self, store: &impl KeyValueStore) -> Result<PlaceId, RegistryError> {
        let id = match self.mode {
            FormMode::Adding => {
                let place = self.draft.build_new()?;
                let id = self.push(place);
                log!("Added place {id}");
                id
            }
            FormMode::Editing(id) => {
                let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
                    self.reset_form();
                    return Err(FormError::StaleEditTarget.into());
                };
                let updated = self.draft.apply_to(&self.entries[pos].place)?;
                let entry = &mut self.entries[pos];
                entry.place = updated;
                entry.revision += 1;
                log!("Updated place {id}");
                id
            }
        };

        self.reset_form();
        // An edited name can fall outside the current query.
        self.retain_visible_selection();
        self.persist(store)?;
        Ok(id)
    }

    /// [`Registry::submit`] against a store that may have failed to open.
    /// Without a store the change still applies and the failure comes back
    /// as [`RegistryError::Persist`].
    pub fn submit_to<S: KeyValueStore>(
        &mut self,
        store: Result<S, StoreError>,
    ) -> Result<PlaceId, RegistryError> {
        match store {
            Ok(store) => self.submit(&store),
            Err(err) => self.submit(&UnavailableStore::new(err)),
        }
    }

    pub fn persist(&self, store: &impl KeyValueStore) -> Result<(), PersistError> {
        persistence::write_places(store, &self.storage_key, self.places())
    }
}
