mod viewer;

pub use viewer::fetch_to_temp_file;

use crate::api::{PreviewResponse, ResumeIdentity, ResumeListing};
use crate::error::ClientError;
use tracing::{debug, error, info, warn};

pub const EMPTY_GALLERY: &str = "No resumes uploaded yet.";
pub const LISTING_FAILED: &str = "Failed to load resumes. Please try again.";
pub const VIEW_FAILED: &str = "Failed to view resume. Please try again.";
pub const DOWNLOAD_FAILED: &str = "Failed to download resume. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum CardState {
    /// Card is on screen, preview not (or never) arrived.
    Rendered,
    PreviewLoaded(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResumeCard {
    pub id: ResumeIdentity,
    pub state: CardState,
    /// Ticked for screening.
    pub selected: bool,
}

impl ResumeCard {
    fn new(id: ResumeIdentity) -> Self {
        Self {
            id,
            state: CardState::Rendered,
            selected: false,
        }
    }

    pub fn preview(&self) -> Option<&str> {
        match &self.state {
            CardState::PreviewLoaded(preview) => Some(preview),
            CardState::Rendered => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum GalleryContent {
    #[default]
    NotLoaded,
    Loading,
    Empty,
    Cards(Vec<ResumeCard>),
    Failed,
}

/// Result of applying a listing: which cards now want a preview, and what to tell the user.
#[derive(Debug, Default, PartialEq)]
pub struct ListingOutcome {
    pub previews_to_load: Vec<ResumeIdentity>,
    pub alert: Option<String>,
}

/// The list of stored resumes. Every refresh bumps `generation`; answers
/// carrying an older generation are dropped.
#[derive(Debug, Default)]
pub struct ResumeGallery {
    generation: u64,
    content: GalleryContent,
}

impl ResumeGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &GalleryContent {
        &self.content
    }

    pub fn cards(&self) -> &[ResumeCard] {
        match &self.content {
            GalleryContent::Cards(cards) => cards,
            _ => &[],
        }
    }

    /// Clears the gallery and returns the generation the new listing must carry.
    pub fn begin_refresh(&mut self) -> u64 {
        self.generation += 1;
        self.content = GalleryContent::Loading;
        debug!("Gallery refresh #{}", self.generation);
        self.generation
    }

    pub fn apply_listing(
        &mut self,
        generation: u64,
        result: Result<ResumeListing, ClientError>,
    ) -> ListingOutcome {
        if generation != self.generation {
            debug!(
                "Dropping listing from refresh #{} (current #{})",
                generation, self.generation
            );
            return ListingOutcome::default();
        }

        match result {
            Ok(listing) if listing.uploaded_resumes.is_empty() => {
                info!("No resumes stored on the backend");
                self.content = GalleryContent::Empty;
                ListingOutcome::default()
            }
            Ok(listing) => {
                info!("Loaded {} resume(s)", listing.uploaded_resumes.len());
                let previews_to_load = listing.uploaded_resumes.clone();
                self.content = GalleryContent::Cards(
                    listing
                        .uploaded_resumes
                        .into_iter()
                        .map(ResumeCard::new)
                        .collect(),
                );
                ListingOutcome {
                    previews_to_load,
                    alert: None,
                }
            }
            Err(e) => {
                error!("Error fetching resumes: {}", e);
                self.content = GalleryContent::Failed;
                ListingOutcome {
                    previews_to_load: Vec::new(),
                    alert: Some(LISTING_FAILED.to_string()),
                }
            }
        }
    }

    /// Fills in a card's preview. Returns whether any card changed.
    ///
    /// Late answers for an older refresh or a card that is gone are no-ops;
    /// failures are logged and leave the card as it is.
    pub fn apply_preview(
        &mut self,
        generation: u64,
        id: &ResumeIdentity,
        result: Result<PreviewResponse, ClientError>,
    ) -> bool {
        if generation != self.generation {
            debug!("Dropping stale preview for {}", id);
            return false;
        }

        let preview = match result {
            Ok(PreviewResponse {
                preview: Some(preview),
            }) if !preview.is_empty() => preview,
            Ok(_) => return false,
            Err(e) => {
                warn!("Error loading preview for {}: {}", id, e);
                return false;
            }
        };

        let GalleryContent::Cards(cards) = &mut self.content else {
            return false;
        };

        let mut applied = false;
        for card in cards.iter_mut().filter(|card| &card.id == id) {
            card.state = CardState::PreviewLoaded(preview.clone());
            applied = true;
        }
        applied
    }

    pub fn toggle_selected(&mut self, id: &ResumeIdentity) {
        if let GalleryContent::Cards(cards) = &mut self.content {
            for card in cards.iter_mut().filter(|card| &card.id == id) {
                card.selected = !card.selected;
            }
        }
    }

    pub fn selected_ids(&self) -> Vec<ResumeIdentity> {
        self.cards()
            .iter()
            .filter(|card| card.selected)
            .map(|card| card.id.clone())
            .collect()
    }
}
