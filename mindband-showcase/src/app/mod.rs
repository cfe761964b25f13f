//! Application wiring
//!
//! `Showcase` owns the carousel, the description projector and the page
//! chrome, and exposes the entry points the surrounding UI calls in
//! response to raw input: `advance`, `on_resize` and `select`, plus the
//! message-based `update`. The carousel and the projector share no state.

pub mod messages;

use mindband_contracts::{CarouselTrack, ContentRegion};
use mindband_model::ItemId;
use tracing::info;

use crate::domains::carousel::{
    CarouselController, CarouselMessage, CarouselState, CarouselUpdate,
    Direction, NavigationOutcome,
};
use crate::domains::chrome::{BarAnimation, Chrome, Palette, ThemeMode};
use crate::domains::features::catalog::WATCH_FACES;
use crate::domains::features::{ContentProjector, FeatureRegistry};
use crate::error::Result;
use crate::infra::RuntimeConfig;

pub use messages::ShowcaseMessage;

/// Visible effect of one handled message.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Navigated(NavigationOutcome),
    Relaid(CarouselState),
    /// Description replaced with `nodes` nodes.
    Projected { nodes: usize },
    Themed {
        mode: ThemeMode,
        palette: Palette,
        artwork: Vec<(&'static str, String)>,
    },
    Menu(BarAnimation),
    Dialog { name: String, open: bool, changed: bool },
    /// The message did not apply to anything on the page.
    Ignored,
}

impl From<CarouselUpdate> for Outcome {
    fn from(update: CarouselUpdate) -> Self {
        match update {
            CarouselUpdate::Navigated(outcome) => Outcome::Navigated(outcome),
            CarouselUpdate::Relaid(state) => Outcome::Relaid(state),
            CarouselUpdate::Ignored => Outcome::Ignored,
        }
    }
}

#[derive(Debug)]
pub struct Showcase<T, R> {
    items: Vec<ItemId>,
    carousel: CarouselController<T>,
    projector: ContentProjector<R>,
    chrome: Chrome,
}

impl<T: CarouselTrack, R: ContentRegion> Showcase<T, R> {
    /// Showcase over the built-in watch faces and feature registry.
    pub fn new(track: T, region: R, config: &RuntimeConfig) -> Result<Self> {
        let items = WATCH_FACES
            .iter()
            .map(|face| ItemId::new(*face))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let registry = FeatureRegistry::builtin()?;
        Ok(Self::with_items(track, region, items, registry, config))
    }

    /// Showcase over an explicit item sequence. Items without a registry
    /// entry still occupy a carousel slot.
    pub fn with_items(
        track: T,
        region: R,
        items: Vec<ItemId>,
        registry: FeatureRegistry,
        config: &RuntimeConfig,
    ) -> Self {
        let carousel = CarouselController::new(track, items.len(), config);
        info!(
            items = items.len(),
            features = registry.len(),
            visible = carousel.state().visible_count,
            "showcase ready"
        );
        Self {
            items,
            carousel,
            projector: ContentProjector::new(registry, region),
            chrome: Chrome::default(),
        }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn carousel(&self) -> &CarouselController<T> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut CarouselController<T> {
        &mut self.carousel
    }

    pub fn projector(&self) -> &ContentProjector<R> {
        &self.projector
    }

    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    pub fn registry(&self) -> &FeatureRegistry {
        self.projector.registry()
    }

    /// Items currently inside the carousel window.
    pub fn visible_items(&self) -> &[ItemId] {
        let state = self.carousel.state();
        let start = state.current_index.min(self.items.len());
        let end = (start + state.visible_count).min(self.items.len());
        &self.items[start..end]
    }

    pub fn advance(&mut self, direction: Direction) -> NavigationOutcome {
        self.carousel.advance(direction)
    }

    pub fn on_resize(&mut self) -> CarouselState {
        self.carousel.on_resize()
    }

    /// Show the description of `id`; returns the number of nodes written.
    pub fn select(&mut self, id: &str) -> Result<usize> {
        Ok(self.projector.project(id)?)
    }

    pub fn set_theme(&mut self, mode: ThemeMode) -> Outcome {
        self.chrome.theme = mode;
        info!(%mode, "theme switched");
        Outcome::Themed {
            mode,
            palette: mode.palette(),
            artwork: mode.artwork(),
        }
    }

    pub fn update(&mut self, message: ShowcaseMessage) -> Result<Outcome> {
        let outcome = match message {
            ShowcaseMessage::Arrow(direction) => {
                self.carousel.update(CarouselMessage::Arrow(direction)).into()
            }
            ShowcaseMessage::ArrowClicked(control_id) => self
                .carousel
                .update(CarouselMessage::ArrowClicked(control_id))
                .into(),
            ShowcaseMessage::Resized => {
                self.carousel.update(CarouselMessage::Resized).into()
            }
            ShowcaseMessage::FaceClicked(id) => Outcome::Projected {
                nodes: self.select(id.as_str())?,
            },
            ShowcaseMessage::ThemeToggled(checked) => {
                self.set_theme(ThemeMode::from_checked(checked))
            }
            ShowcaseMessage::MenuToggled => {
                Outcome::Menu(self.chrome.menu.toggle())
            }
            ShowcaseMessage::DialogShown(name) => {
                let changed = self.chrome.dialogs.show(&name);
                Outcome::Dialog {
                    name,
                    open: true,
                    changed,
                }
            }
            ShowcaseMessage::DialogHidden(name) => {
                let changed = self.chrome.dialogs.hide(&name);
                Outcome::Dialog {
                    name,
                    open: false,
                    changed,
                }
            }
        };
        Ok(outcome)
    }
}
