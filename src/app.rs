//! Command dispatch: load a snapshot, run one engine operation, save.

use crate::cli::Command;
use crate::settings::Settings;
use crate::store::CardStore;
use anyhow::{Result, bail};
use bingo_card::{Board, Card, CardEngine, Displacement, GridSize, Position};
use rand::rngs::StdRng;
use tracing::{info, instrument};

/// Runs CLI commands against card snapshots.
#[derive(Debug)]
pub struct App {
    settings: Settings,
    engine: CardEngine<StdRng>,
}

impl App {
    /// Creates an app from settings.
    #[instrument(skip(settings))]
    pub fn new(settings: Settings) -> Self {
        let engine = settings.engine();
        Self { settings, engine }
    }

    /// Executes one command and returns the text to print.
    #[instrument(skip(self, store), fields(card = %store.path().display()))]
    pub fn execute(&mut self, store: &CardStore, command: Command) -> Result<String> {
        match command {
            Command::New {
                size,
                header,
                no_free,
                force,
            } => self.new_card(store, size, header.as_deref(), no_free, force),
            Command::Show => {
                let card = store.load()?;
                self.render(&card)
            }
            Command::Add { content, position } => {
                let mut card = store.load()?;
                card.items = self.engine.add_item(
                    &card.config,
                    &card.items,
                    &content,
                    position.map(Position::new),
                )?;
                self.save_and_render(store, &card)
            }
            Command::Remove { position } => {
                let mut card = store.load()?;
                card.items = self
                    .engine
                    .remove_item(&card.config, &card.items, Position::new(position))?;
                self.save_and_render(store, &card)
            }
            Command::Complete { position, undo } => {
                let mut card = store.load()?;
                card.items = self.engine.set_completed(
                    &card.config,
                    &card.items,
                    Position::new(position),
                    !undo,
                )?;
                store.save(&card)?;
                let mut out = self.render(&card)?;
                out.push_str(&self.bingo_report(&card));
                Ok(out)
            }
            Command::Header { text } => {
                let mut card = store.load()?;
                card.config = self.engine.set_header_text(&card.config, &text)?;
                self.save_and_render(store, &card)
            }
            Command::Resize { size } => {
                let mut card = store.load()?;
                card.config =
                    self.engine
                        .change_grid_size(&card.config, &card.items, GridSize::try_from(size)?)?;
                self.save_and_render(store, &card)
            }
            Command::EnableFree => {
                let card = store.load()?;
                let change = self.engine.enable_free(&card.config, &card.items)?;
                let card = Card {
                    config: change.config,
                    items: change.items,
                };
                self.with_displacement(store, &card, change.displaced.as_ref())
            }
            Command::DisableFree => {
                let mut card = store.load()?;
                card.config = self.engine.disable_free(&card.config)?;
                self.save_and_render(store, &card)
            }
            Command::MoveFree { position } => {
                let card = store.load()?;
                let change =
                    self.engine
                        .move_free(&card.config, &card.items, Position::new(position))?;
                let card = Card {
                    config: change.config,
                    items: change.items,
                };
                self.with_displacement(store, &card, change.displaced.as_ref())
            }
            Command::Shuffle => {
                let mut card = store.load()?;
                card.items = self.engine.shuffle(&card.config, &card.items)?;
                self.save_and_render(store, &card)
            }
            Command::Swap { a, b } => {
                let card = store.load()?;
                let layout = self.engine.swap(
                    &card.config,
                    &card.items,
                    Position::new(a),
                    Position::new(b),
                )?;
                let card = Card {
                    config: layout.config,
                    items: layout.items,
                };
                self.save_and_render(store, &card)
            }
            Command::Bingos => {
                let card = store.load()?;
                Ok(self.bingo_report(&card))
            }
            Command::Finalize => {
                let mut card = store.load()?;
                card.config = self.engine.finalize(&card.config, &card.items)?;
                info!("Card finalized");
                self.save_and_render(store, &card)
            }
            Command::CloneCard { out, size, no_free } => {
                let card = store.load()?;
                let target_size = match size {
                    Some(size) => GridSize::try_from(size)?,
                    None => card.config.grid_size(),
                };
                let cloned =
                    self.engine
                        .clone_card(&card.config, &card.items, target_size, !no_free)?;
                let target = CardStore::new(out);
                if target.exists() {
                    bail!("{} already exists", target.path().display());
                }
                let new_card = Card {
                    config: cloned.config,
                    items: cloned.items,
                };
                target.save(&new_card)?;
                let mut output = self.render(&new_card)?;
                if cloned.truncated {
                    output.push_str(&format!(
                        "Only {} of {} goals fit on the new card.\n",
                        new_card.items.len(),
                        card.items.len()
                    ));
                }
                Ok(output)
            }
        }
    }

    fn new_card(
        &mut self,
        store: &CardStore,
        size: Option<u8>,
        header: Option<&str>,
        no_free: bool,
        force: bool,
    ) -> Result<String> {
        if store.exists() && !force {
            bail!(
                "{} already exists; pass --force to overwrite",
                store.path().display()
            );
        }
        let grid_size = match size {
            Some(size) => GridSize::try_from(size)?,
            None => self.settings.grid_size()?,
        };
        let has_free = !no_free && *self.settings.default_free_space();
        let config = self
            .engine
            .create_configuration(grid_size, header, Some(has_free))?;
        let card = Card::new(config);
        info!(%grid_size, "New card created");
        self.save_and_render(store, &card)
    }

    fn with_displacement(
        &self,
        store: &CardStore,
        card: &Card,
        displaced: Option<&Displacement>,
    ) -> Result<String> {
        let mut out = self.save_and_render(store, card)?;
        if let Some(displaced) = displaced {
            out.push_str(&format!("Displaced: {}\n", displaced));
        }
        Ok(out)
    }

    fn save_and_render(&self, store: &CardStore, card: &Card) -> Result<String> {
        store.save(card)?;
        self.render(card)
    }

    /// Renders a card with a one-line summary.
    pub fn render(&self, card: &Card) -> Result<String> {
        let board = Board::from_card(&card.config, &card.items)?;
        let mut out = board.display(&card.config, &card.items, *self.settings.cell_width());
        let free = match card.config.free_space_position() {
            Some(pos) => format!("FREE at {}", pos),
            None => "no FREE".to_string(),
        };
        out.push_str(&format!(
            "{} {} | {}/{} goals | {}\n",
            card.config.grid_size(),
            card.config.phase(),
            card.items.len(),
            card.config.capacity(),
            free
        ));
        Ok(out)
    }

    fn bingo_report(&self, card: &Card) -> String {
        let lines = self.engine.detect_bingos(&card.config, &card.items);
        if lines.is_empty() {
            return "No bingos yet.\n".to_string();
        }
        let mut out = format!("{} bingo(s):\n", lines.len());
        for line in lines {
            out.push_str(&format!("  {}\n", line));
        }
        out
    }
}
